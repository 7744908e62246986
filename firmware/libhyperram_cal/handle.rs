use regs::Registers;
use delay::{self, DelayLine};
use clkgen::{self, PhaseDirection, SubPhase};
use memtest;

/// The operations calibration needs from the hardware.
///
/// Whoever holds a `Hardware` is assumed to own the PHY, the clock
/// generator and the memory under test for as long as it is held.
pub trait Hardware {
    fn set_delay(&mut self, line: DelayLine, taps: u8);
    fn step_phase(&mut self, direction: PhaseDirection);
    fn slip(&mut self, sub_phase: SubPhase);
    /// Returns `true` if the test word read back correctly.
    fn probe(&mut self) -> bool;
}

/// `Hardware` built on top of a register interface.
#[derive(Debug)]
pub struct HardwareHandle<R> {
    regs: R,
}

impl<R: Registers> HardwareHandle<R> {
    pub fn new(regs: R) -> HardwareHandle<R> {
        HardwareHandle { regs: regs }
    }

    pub fn registers(&self) -> &R {
        &self.regs
    }

    pub fn into_inner(self) -> R {
        self.regs
    }
}

impl<R: Registers> Hardware for HardwareHandle<R> {
    fn set_delay(&mut self, line: DelayLine, taps: u8) {
        delay::set_delay(&mut self.regs, line, taps)
    }

    fn step_phase(&mut self, direction: PhaseDirection) {
        clkgen::step_phase(&mut self.regs, direction)
    }

    fn slip(&mut self, sub_phase: SubPhase) {
        clkgen::slip(&mut self.regs, sub_phase)
    }

    fn probe(&mut self) -> bool {
        memtest::probe(&mut self.regs)
    }
}
