use regs::{Registers, Signal};

/// One of the two tapped delay lines of the PHY.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayLine {
    /// Skew of the HyperRAM clock.
    Clock,
    /// Skew of the data and RWDS inputs.
    Io,
}

impl DelayLine {
    // (loadn, direction, move)
    fn signals(self) -> (Signal, Signal, Signal) {
        match self {
            DelayLine::Clock => (Signal::ClkLoadn, Signal::ClkDirection, Signal::ClkMove),
            DelayLine::Io    => (Signal::IoLoadn,  Signal::IoDirection,  Signal::IoMove),
        }
    }
}

/// Reloads `line` with zero delay, then adds `taps` taps of about 25 ps.
///
/// The hardware gives no feedback; tap counts beyond the length of the line
/// behave however the delay primitive does.
pub fn set_delay<R: Registers + ?Sized>(regs: &mut R, line: DelayLine, taps: u8) {
    let (loadn, direction, move_) = line.signals();

    regs.write(loadn, 0);
    regs.write(loadn, 1);
    regs.write(direction, 0);

    // Each rising edge of move adds one tap.
    for _ in 0..taps {
        regs.write(move_, 1);
        regs.write(move_, 0);
    }
}
