//! Raw ST scancode bytes: bit 7 is the break flag, bits 0..=6 the key code.

/// Break (key released) flag.
pub const BREAK_FLAG: u8 = 0x80;
/// Mask selecting the key code.
pub const KEY_MASK: u8 = 0x7F;

/// Returns `true` if `code` reports a key release.
#[inline]
pub const fn is_break(code: u8) -> bool {
    code & BREAK_FLAG != 0
}

/// Returns `true` if `code` reports a key press.
#[inline]
pub const fn is_make(code: u8) -> bool {
    !is_break(code)
}

/// Extracts the 7-bit key code from `code`.
#[inline]
pub const fn key(code: u8) -> u8 {
    code & KEY_MASK
}

/// A single byte received from the ST keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawScancode(pub u8);

impl RawScancode {
    /// Builds the raw byte for `key` pressed (`released == false`) or released.
    pub const fn new(key: u8, released: bool) -> Self {
        let code = key & KEY_MASK;
        Self(if released { code | BREAK_FLAG } else { code })
    }

    pub const fn is_break(self) -> bool {
        is_break(self.0)
    }

    pub const fn is_make(self) -> bool {
        is_make(self.0)
    }

    pub const fn key(self) -> u8 {
        key(self.0)
    }
}

impl From<u8> for RawScancode {
    fn from(code: u8) -> Self {
        Self(code)
    }
}

impl From<RawScancode> for u8 {
    fn from(code: RawScancode) -> Self {
        code.0
    }
}
