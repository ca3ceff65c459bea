//! Fixed scancode lookup tables.
//!
//! Both tables are indexed by a 7-bit value and hold 128 entries. A zero entry means the
//! source code has no counterpart in the target code space. The byte values are a
//! compatibility contract with real ST keyboards and PS/2 hosts; do not edit them.

/// ST key code (`raw & 0x7F`) -> PS/2 Set-1 make code.
///
/// Key 0x37 and most of 0x45..=0x64 (cursor block, Undo/Help, keypad brackets) have no plain
/// Set-1 code and stay zero; the arrow keys in that range are handled by the translator.
pub static ST_TO_SET1: [u8; 128] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, // 0x00
    0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F, // 0x08
    0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, // 0x10
    0x18, 0x19, 0x1A, 0x1B, 0x1C, 0x1D, 0x1E, 0x1F, // 0x18
    0x20, 0x21, 0x22, 0x23, 0x24, 0x25, 0x26, 0x27, // 0x20
    0x28, 0x29, 0x2A, 0x2B, 0x2C, 0x2D, 0x2E, 0x2F, // 0x28
    0x30, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x00, // 0x30
    0x38, 0x39, 0x3A, 0x3B, 0x3C, 0x3D, 0x3E, 0x3F, // 0x38
    0x40, 0x41, 0x42, 0x43, 0x44, 0x00, 0x00, 0x00, // 0x40
    0x00, 0x00, 0x4A, 0x00, 0x00, 0x00, 0x4E, 0x00, // 0x48
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x50
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x58
    0x00, 0x00, 0x00, 0x00, 0x00, 0x37, 0x37, 0x47, // 0x60
    0x48, 0x49, 0x4B, 0x4C, 0x4D, 0x4F, 0x50, 0x51, // 0x68
    0x52, 0x53, 0x1C, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x70
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x78
];

/// PS/2 Set-1 make code -> PS/2 Set-2 make code.
pub static SET1_TO_SET2: [u8; 128] = [
    0x00, 0x76, 0x16, 0x1E, 0x26, 0x25, 0x2E, 0x36, // 0x00
    0x3D, 0x3E, 0x46, 0x45, 0x4E, 0x55, 0x66, 0x0D, // 0x08
    0x15, 0x1D, 0x24, 0x2D, 0x2C, 0x35, 0x3C, 0x43, // 0x10
    0x44, 0x4D, 0x54, 0x5B, 0x5A, 0x14, 0x1C, 0x1B, // 0x18
    0x23, 0x2B, 0x34, 0x33, 0x3B, 0x42, 0x4B, 0x4C, // 0x20
    0x52, 0x0E, 0x12, 0x5D, 0x1A, 0x22, 0x21, 0x2A, // 0x28
    0x32, 0x31, 0x3A, 0x41, 0x49, 0x4A, 0x59, 0x00, // 0x30
    0x11, 0x29, 0x58, 0x05, 0x06, 0x04, 0x0C, 0x03, // 0x38
    0x0B, 0x83, 0x0A, 0x01, 0x09, 0x00, 0x00, 0x00, // 0x40
    0x00, 0x00, 0x7B, 0x00, 0x00, 0x00, 0x79, 0x00, // 0x48
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x50
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x58
    0x00, 0x00, 0x00, 0x00, 0x00, 0x7C, 0x7C, 0x6C, // 0x60
    0x75, 0x7D, 0x6B, 0x73, 0x74, 0x69, 0x72, 0x7A, // 0x68
    0x70, 0x71, 0x5A, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x70
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x78
];

/// Looks up the Set-1 make code for an ST key code.
///
/// The break bit is ignored, so `st_to_set1(k) == st_to_set1(k | 0x80)`.
#[inline]
pub fn st_to_set1(key: u8) -> u8 {
    ST_TO_SET1[usize::from(key & 0x7F)]
}

/// Looks up the Set-2 make code for a Set-1 make code.
///
/// Callers pass key identities, not Set-1 break codes; the high bit is masked off before
/// indexing.
#[inline]
pub fn set1_to_set2(set1: u8) -> u8 {
    SET1_TO_SET2[usize::from(set1 & 0x7F)]
}
