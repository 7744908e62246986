//! Stand-ins for the CPU-specific primitives so the board crate builds and
//! its callers can be unit tested off target.

pub mod cache {
    pub fn flush_cpu_dcache() {}

    #[cfg(has_hyperram)]
    pub fn flush_l2_cache() {}
}

pub mod irq {
    pub fn free<F: FnOnce() -> R, R>(f: F) -> R {
        f()
    }
}
