//! Read-after-write timing calibration for HyperRAM PHYs.
//!
//! The PHY exposes a clock delay line, an I/O delay line, a fine phase
//! stepper on the clock generator and two coarse slip lines. `calibrate`
//! sweeps the clock delay until the memory test passes for long enough,
//! then moves the sampling point towards the middle of the passing window.
//!
//! Hardware is only reached through `Registers`, so the whole search runs
//! against simulated PHYs on the host.

#![no_std]

#[macro_use]
extern crate log;
#[cfg(test)]
#[macro_use]
extern crate std;

mod regs;
mod delay;
mod clkgen;
mod memtest;
mod handle;
mod calibrate;
#[cfg(test)]
mod sim;

pub use regs::{Registers, Signal};
pub use delay::{set_delay, DelayLine};
pub use clkgen::{slip, step_phase, PhaseDirection, SubPhase};
pub use memtest::{probe, PATTERNS};
pub use handle::{Hardware, HardwareHandle};
pub use calibrate::{calibrate, Calibrated, Exhausted, Params, IO_DELAY};
