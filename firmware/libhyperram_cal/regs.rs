/// A write-only control line of the PHY or the clock generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    ClkLoadn,
    ClkDirection,
    ClkMove,
    IoLoadn,
    IoDirection,
    IoMove,
    PhaseSel,
    PhaseDir,
    PhaseStep,
    SlipHr2x90,
    SlipHr2x,
}

/// Raw access to the calibration control lines and to the word of memory
/// used by the probe.
///
/// Every access completes synchronously: when a method returns, the write
/// has reached the hardware and the following access observes its effect.
/// Nothing is acknowledged or polled, and the only passage of time between
/// two pulses is the cost of the register writes themselves.
pub trait Registers {
    fn write(&mut self, signal: Signal, value: u8);

    /// Stores `value` at the base of the memory under calibration.
    fn write_word(&mut self, value: u32);
    /// Loads the word at the base of the memory under calibration.
    fn read_word(&mut self) -> u32;

    fn flush_l2_cache(&mut self);
    fn flush_cpu_dcache(&mut self);
}
