use core::fmt::Write;
use log::{Log, LevelFilter, Metadata, Record, set_logger, set_max_level};

use clock;
use uart_console::Console;

pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl ConsoleLogger {
    /// Installs the console logger at `level`. Returns `false` and leaves
    /// the existing logger alone if the firmware already installed one.
    pub fn register(level: LevelFilter) -> bool {
        if set_logger(&LOGGER).is_err() {
            return false
        }
        set_max_level(level);
        true
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let timestamp = clock::get_us();
            let seconds   = timestamp / 1_000_000;
            let micros    = timestamp % 1_000_000;

            let _ = writeln!(Console, "[{:6}.{:06}s] {:>5}({}): {}",
                             seconds, micros, record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {
    }
}
