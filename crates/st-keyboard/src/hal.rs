//! Hardware seams for the keyboard link.

use std::time::Duration;

use crate::error::Result;

/// Byte stream to and from the ST keyboard (the ACIA link, 8N1).
pub trait SerialLink {
    /// Sets the line rate; called once before any traffic.
    fn configure(&mut self, baud: u32) -> Result<()>;

    /// Number of received bytes ready to be read.
    fn available(&self) -> usize;

    fn read_byte(&mut self) -> Option<u8>;

    fn write_byte(&mut self, byte: u8) -> Result<()>;
}

/// A push-pull digital output.
pub trait OutputPin {
    fn set_high(&mut self) -> Result<()>;

    fn set_low(&mut self) -> Result<()>;

    fn set_level(&mut self, high: bool) -> Result<()> {
        if high {
            self.set_high()
        } else {
            self.set_low()
        }
    }
}

/// Blocking millisecond delay.
pub trait Delay {
    fn delay_ms(&mut self, ms: u32);
}

/// [`Delay`] backed by `std::thread::sleep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDelay;

impl Delay for StdDelay {
    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn std_delay_sleeps_at_least_requested() {
        let mut delay = StdDelay;
        delay.delay_ms(0);

        let start = Instant::now();
        delay.delay_ms(5);
        assert!(start.elapsed() >= Duration::from_millis(5));
    }
}
