use core::fmt;
#[cfg(has_uart)]
use csr;

pub struct Console;

#[cfg(has_uart)]
fn put(c: u8) {
    unsafe {
        while csr::uart::txfull_read() != 0 {}
        csr::uart::rxtx_write(c)
    }
}

impl fmt::Write for Console {
    #[cfg(has_uart)]
    fn write_str(&mut self, s: &str) -> Result<(), fmt::Error> {
        for c in s.bytes() {
            put(c);
            // Terminals attached to the BIOS expect CRLF.
            if c == b'\n' {
                put(b'\r');
            }
        }

        Ok(())
    }

    #[cfg(not(has_uart))]
    fn write_str(&mut self, _s: &str) -> Result<(), fmt::Error> {
        Ok(())
    }
}
