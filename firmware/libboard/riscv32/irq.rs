use riscv::interrupt;

/// Runs `f` with machine interrupts masked.
pub fn free<F: FnOnce() -> R, R>(f: F) -> R {
    interrupt::free(|_| f())
}
