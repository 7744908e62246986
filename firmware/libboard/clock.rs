use csr;

const INIT: u32 = ::core::u32::MAX;
const FREQ: u64 = csr::CONFIG_CLOCK_FREQUENCY as u64;

pub fn init() {
    unsafe {
        csr::timer0::en_write(0);
        csr::timer0::load_write(INIT);
        csr::timer0::reload_write(INIT);
        csr::timer0::en_write(1);
    }
}

// The timer counts down from INIT and wraps after 2^32 cycles.
fn elapsed() -> u32 {
    unsafe {
        csr::timer0::update_value_write(1);
        INIT - csr::timer0::value_read()
    }
}

fn cycles_to_us(cycles: u32) -> u64 {
    cycles as u64 / (FREQ / 1_000_000)
}

/// Microseconds since `init`, modulo the 32-bit timer period
/// (2^32 / `CONFIG_CLOCK_FREQUENCY` seconds, about 89 s at 48 MHz).
/// Timestamps restart from zero when the timer wraps.
pub fn get_us() -> u64 {
    cycles_to_us(elapsed())
}

/// Busy-waits for `interval` microseconds. Correct across one timer wrap, so
/// `interval` must be shorter than the timer period.
pub fn spin_us(interval: u64) {
    let start = elapsed();
    let cycles = interval * (FREQ / 1_000_000);
    while (elapsed().wrapping_sub(start) as u64) < cycles {}
}
