use core::arch::asm;
#[cfg(has_hyperram)]
use core::ptr;
#[cfg(has_hyperram)]
use csr;
#[cfg(has_hyperram)]
use mem;

pub fn flush_cpu_dcache() {
    unsafe {
        asm!(".word(0x500F)", options(nostack));
    }
}

/// Evicts the L2 by reading twice its size from main RAM.
#[cfg(has_hyperram)]
pub fn flush_l2_cache() {
    unsafe {
        for i in 0..2 * (csr::CONFIG_L2_SIZE as usize) / 4 {
            let addr = mem::MAIN_RAM_BASE + i * 4;
            ptr::read_volatile(addr as *const usize);
        }
    }
}
