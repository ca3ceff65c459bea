use std::collections::VecDeque;

use crate::error::{KeyboardError, Result};
use crate::hal::SerialLink;

/// In-memory [`SerialLink`].
///
/// Bytes queued with [`MemSerialLink::push_rx`] are what the "keyboard" sent; everything the
/// driver writes is collected and can be taken with [`MemSerialLink::take_tx`].
#[derive(Debug, Default)]
pub struct MemSerialLink {
    baud: Option<u32>,
    rx: VecDeque<u8>,
    tx: Vec<u8>,
}

impl MemSerialLink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn baud(&self) -> Option<u32> {
        self.baud
    }

    pub fn push_rx(&mut self, byte: u8) {
        self.rx.push_back(byte);
    }

    pub fn extend_rx(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes.iter().copied());
    }

    pub fn take_tx(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.tx)
    }
}

impl SerialLink for MemSerialLink {
    fn configure(&mut self, baud: u32) -> Result<()> {
        if baud == 0 {
            return Err(KeyboardError::UnsupportedBaud(baud));
        }
        self.baud = Some(baud);
        Ok(())
    }

    fn available(&self) -> usize {
        self.rx.len()
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.rx.pop_front()
    }

    fn write_byte(&mut self, byte: u8) -> Result<()> {
        if self.baud.is_none() {
            return Err(KeyboardError::NotConfigured);
        }
        self.tx.push(byte);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_require_configuration() {
        let mut link = MemSerialLink::new();
        assert!(matches!(
            link.write_byte(0x80),
            Err(KeyboardError::NotConfigured)
        ));
        assert!(matches!(
            link.configure(0),
            Err(KeyboardError::UnsupportedBaud(0))
        ));

        link.configure(7812).unwrap();
        link.write_byte(0x80).unwrap();
        link.write_byte(0x01).unwrap();
        assert_eq!(link.take_tx(), vec![0x80, 0x01]);
        assert!(link.take_tx().is_empty());
    }

    #[test]
    fn rx_is_fifo() {
        let mut link = MemSerialLink::new();
        link.push_rx(0x1E);
        link.extend_rx(&[0x9E, 0x48]);
        assert_eq!(link.available(), 3);
        assert_eq!(link.read_byte(), Some(0x1E));
        assert_eq!(link.read_byte(), Some(0x9E));
        assert_eq!(link.read_byte(), Some(0x48));
        assert_eq!(link.read_byte(), None);
    }
}
