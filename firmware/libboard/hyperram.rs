//! HyperRAM bring-up. `init` runs once from the boot sequence, before
//! anything is placed in HyperRAM.

#[cfg(has_hyperram)]
mod imp {
    use core::{fmt, ptr};
    use hyperram_cal::{self, Calibrated, Exhausted, HardwareHandle, Params, Registers, Signal};
    use cache;
    use csr;
    use irq;
    use mem;

    const TEST_WORD: *mut u32 = mem::HYPERRAM_BASE as *mut u32;

    /// The PHY delay lines, the CRG phase and slip controls and the first
    /// word of HyperRAM.
    pub struct CsrRegisters {
        _private: (),
    }

    impl CsrRegisters {
        /// The caller must have exclusive use of the HyperRAM PHY, the CRG
        /// and the HyperRAM itself for as long as the value lives.
        pub unsafe fn new() -> CsrRegisters {
            CsrRegisters { _private: () }
        }
    }

    impl Registers for CsrRegisters {
        fn write(&mut self, signal: Signal, value: u8) {
            unsafe {
                match signal {
                    Signal::ClkLoadn     => csr::hyperram::clk_loadn_write(value),
                    Signal::ClkDirection => csr::hyperram::clk_direction_write(value),
                    Signal::ClkMove      => csr::hyperram::clk_move_write(value),
                    Signal::IoLoadn      => csr::hyperram::io_loadn_write(value),
                    Signal::IoDirection  => csr::hyperram::io_direction_write(value),
                    Signal::IoMove       => csr::hyperram::io_move_write(value),
                    Signal::PhaseSel     => csr::crg::phase_sel_write(value),
                    Signal::PhaseDir     => csr::crg::phase_dir_write(value),
                    Signal::PhaseStep    => csr::crg::phase_step_write(value),
                    Signal::SlipHr2x90   => csr::crg::slip_hr2x90_write(value),
                    Signal::SlipHr2x     => csr::crg::slip_hr2x_write(value),
                }
            }
        }

        fn write_word(&mut self, value: u32) {
            unsafe { ptr::write_volatile(TEST_WORD, value) }
        }

        fn read_word(&mut self) -> u32 {
            unsafe { ptr::read_volatile(TEST_WORD) }
        }

        fn flush_l2_cache(&mut self) {
            cache::flush_l2_cache()
        }

        fn flush_cpu_dcache(&mut self) {
            cache::flush_cpu_dcache()
        }
    }

    pub fn calibrate(logger: &mut Option<&mut dyn fmt::Write>) -> Result<Calibrated, Exhausted> {
        // Nothing else may touch the PHY or HyperRAM until we are done.
        irq::free(|| {
            let mut hw = HardwareHandle::new(unsafe { CsrRegisters::new() });
            hyperram_cal::calibrate(&mut hw, &Params::default(), logger)
        })
    }

    #[cfg(has_ctrl)]
    pub fn reset() -> ! {
        unsafe { csr::ctrl::reset_write(1) }
        loop {}
    }

    #[cfg(not(has_ctrl))]
    pub fn reset() -> ! {
        loop {}
    }
}

#[cfg(has_hyperram)]
use core::fmt::{self, Write};
#[cfg(has_hyperram)]
use hyperram_cal::{Calibrated, Exhausted};

#[cfg(has_hyperram)]
const RESTART_COUNTDOWN: u32 = 5;

#[cfg(has_hyperram)]
macro_rules! report {
    ($logger:expr, $( $arg:expr ),+) => (
        if let &mut Some(ref mut f) = $logger {
            let _ = write!(f, $( $arg ),+);
        }
    )
}

#[cfg(all(has_hyperram, feature = "uart_console"))]
fn with_console<F: FnOnce(&mut Option<&mut dyn fmt::Write>)>(f: F) {
    let mut console = ::uart_console::Console;
    let mut logger: Option<&mut dyn fmt::Write> = Some(&mut console);
    f(&mut logger)
}

#[cfg(all(has_hyperram, not(feature = "uart_console")))]
fn with_console<F: FnOnce(&mut Option<&mut dyn fmt::Write>)>(f: F) {
    f(&mut None)
}

#[cfg(all(has_hyperram, feature = "uart_console", feature = "log", has_timer0))]
fn install_logger() {
    // Only take over the timer if nobody has set up logging yet.
    if ::uart_logger::ConsoleLogger::register(::log::LevelFilter::Info) {
        ::clock::init();
    }
}

#[cfg(all(has_hyperram, not(all(feature = "uart_console", feature = "log", has_timer0))))]
fn install_logger() {}

#[cfg(has_hyperram)]
fn report_failure<W: FnMut()>(logger: &mut Option<&mut dyn fmt::Write>, mut wait_second: W) {
    report!(logger, "\n\n Error: RAM Init failed :(\n Restarting in... ");

    for i in 0..RESTART_COUNTDOWN {
        wait_second();
        report!(logger, "\x08{}", RESTART_COUNTDOWN - i);
    }
}

/// Prints the banner and runs `calibrate`. On failure, also prints the
/// failure banner and the restart countdown, calling `wait_second` before
/// each count.
#[cfg(has_hyperram)]
fn bring_up<C, W>(logger: &mut Option<&mut dyn fmt::Write>, calibrate: C, wait_second: W)
                 -> Result<Calibrated, Exhausted>
    where C: FnOnce(&mut Option<&mut dyn fmt::Write>) -> Result<Calibrated, Exhausted>,
          W: FnMut()
{
    report!(logger, "--==========-- \x1b[1mHyperRAM Init\x1b[0m ===========--\n");

    let result = calibrate(logger);
    if result.is_err() {
        report_failure(logger, wait_second);
    }
    result
}

#[cfg(all(has_hyperram, has_timer0))]
fn wait_second() {
    // The timer may never have been started; we reset right after the
    // countdown, so restarting it costs nothing.
    ::clock::init();
    ::clock::spin_us(1_000_000);
}

#[cfg(all(has_hyperram, not(has_timer0)))]
fn wait_second() {}

/// Calibrates the HyperRAM interface and returns with the memory usable.
///
/// Progress goes to the UART console when the `uart_console` feature is
/// enabled. If no timing works, prints a failure banner, counts down and
/// resets the SoC; this function does not return in that case.
#[cfg(has_hyperram)]
pub fn init() {
    install_logger();

    with_console(|logger| {
        if bring_up(logger, imp::calibrate, wait_second).is_err() {
            imp::reset()
        }
    })
}

/// This gateware has no HyperRAM controller.
#[cfg(not(has_hyperram))]
pub fn init() {}
