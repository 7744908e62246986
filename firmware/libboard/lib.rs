#![no_std]

extern crate hyperram_cal;
#[cfg(test)]
#[macro_use]
extern crate std;
#[cfg(feature = "log")]
extern crate log;

#[cfg(target_arch = "riscv32")]
#[path = "riscv32/mod.rs"]
mod arch;
#[cfg(not(target_arch = "riscv32"))]
#[path = "host/mod.rs"]
mod arch;

#[cfg(target_arch = "riscv32")]
extern crate riscv;

pub use arch::*;

include!(concat!(env!("BUILDINC_DIRECTORY"), "/generated/mem.rs"));
include!(concat!(env!("BUILDINC_DIRECTORY"), "/generated/csr.rs"));
#[cfg(has_timer0)]
pub mod clock;
#[cfg(feature = "uart_console")]
pub mod uart_console;
#[cfg(all(feature = "uart_console", feature = "log", has_timer0))]
pub mod uart_logger;
pub mod hyperram;
