use core::fmt;
use regs::{Registers, Signal};

/// Direction of a fine phase step of the clock generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseDirection {
    /// Strobe the stepper without shifting the output; issued once per probe.
    Null = 0,
    /// Shift the output phase late by one step.
    Up = 1,
}

/// Issues one phase step on output 0 of the clock generator.
pub fn step_phase<R: Registers + ?Sized>(regs: &mut R, direction: PhaseDirection) {
    regs.write(Signal::PhaseSel, 0);
    regs.write(Signal::PhaseDir, direction as u8);
    regs.write(Signal::PhaseStep, 0);
    regs.write(Signal::PhaseStep, 1);
}

/// State of the two slip lines for one coarse delay setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubPhase {
    /// 90° slip of the half-rate 2x clock, bit 0 of the coarse delay.
    pub hr2x90: bool,
    /// Slip of the half-rate 2x clock, bit 1 of the coarse delay.
    pub hr2x: bool,
}

impl SubPhase {
    pub fn from_coarse(coarse: u8) -> SubPhase {
        SubPhase {
            hr2x90: coarse & 1 != 0,
            hr2x:   coarse & 2 != 0,
        }
    }
}

impl fmt::Display for SubPhase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}", self.hr2x90 as u8, self.hr2x as u8)
    }
}

/// Pulses the slip lines selected by `sub_phase`. Both lines are left low.
pub fn slip<R: Registers + ?Sized>(regs: &mut R, sub_phase: SubPhase) {
    regs.write(Signal::SlipHr2x90, sub_phase.hr2x90 as u8);
    regs.write(Signal::SlipHr2x, sub_phase.hr2x as u8);

    regs.write(Signal::SlipHr2x90, 0);
    regs.write(Signal::SlipHr2x, 0);
}
