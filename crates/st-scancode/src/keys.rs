//! ST keyboard key codes (the low seven bits of a raw scancode).
//!
//! Names follow the legends on a US ST keyboard. Codes that are not listed (0x00, 0x37,
//! 0x45, 0x46, 0x49, 0x4C, 0x4F, 0x51, 0x54..=0x5F, 0x73..) are not produced by stock
//! keyboards.

pub const ESC: u8 = 0x01;
pub const DIGIT_1: u8 = 0x02;
pub const DIGIT_2: u8 = 0x03;
pub const DIGIT_3: u8 = 0x04;
pub const DIGIT_4: u8 = 0x05;
pub const DIGIT_5: u8 = 0x06;
pub const DIGIT_6: u8 = 0x07;
pub const DIGIT_7: u8 = 0x08;
pub const DIGIT_8: u8 = 0x09;
pub const DIGIT_9: u8 = 0x0A;
pub const DIGIT_0: u8 = 0x0B;
pub const MINUS: u8 = 0x0C;
pub const EQUAL: u8 = 0x0D;
pub const BACKSPACE: u8 = 0x0E;
pub const TAB: u8 = 0x0F;
pub const Q: u8 = 0x10;
pub const W: u8 = 0x11;
pub const E: u8 = 0x12;
pub const R: u8 = 0x13;
pub const T: u8 = 0x14;
pub const Y: u8 = 0x15;
pub const U: u8 = 0x16;
pub const I: u8 = 0x17;
pub const O: u8 = 0x18;
pub const P: u8 = 0x19;
pub const LEFT_BRACKET: u8 = 0x1A;
pub const RIGHT_BRACKET: u8 = 0x1B;
pub const RETURN: u8 = 0x1C;
pub const CONTROL: u8 = 0x1D;
pub const A: u8 = 0x1E;
pub const S: u8 = 0x1F;
pub const D: u8 = 0x20;
pub const F: u8 = 0x21;
pub const G: u8 = 0x22;
pub const H: u8 = 0x23;
pub const J: u8 = 0x24;
pub const K: u8 = 0x25;
pub const L: u8 = 0x26;
pub const SEMICOLON: u8 = 0x27;
pub const APOSTROPHE: u8 = 0x28;
pub const BACKTICK: u8 = 0x29;
pub const LEFT_SHIFT: u8 = 0x2A;
pub const BACKSLASH: u8 = 0x2B;
pub const Z: u8 = 0x2C;
pub const X: u8 = 0x2D;
pub const C: u8 = 0x2E;
pub const V: u8 = 0x2F;
pub const B: u8 = 0x30;
pub const N: u8 = 0x31;
pub const M: u8 = 0x32;
pub const COMMA: u8 = 0x33;
pub const DOT: u8 = 0x34;
pub const SLASH: u8 = 0x35;
pub const RIGHT_SHIFT: u8 = 0x36;
pub const ALTERNATE: u8 = 0x38;
pub const SPACE: u8 = 0x39;
pub const CAPS_LOCK: u8 = 0x3A;
pub const F1: u8 = 0x3B;
pub const F2: u8 = 0x3C;
pub const F3: u8 = 0x3D;
pub const F4: u8 = 0x3E;
pub const F5: u8 = 0x3F;
pub const F6: u8 = 0x40;
pub const F7: u8 = 0x41;
pub const F8: u8 = 0x42;
pub const F9: u8 = 0x43;
pub const F10: u8 = 0x44;
pub const CLR_HOME: u8 = 0x47;
pub const UP: u8 = 0x48;
pub const KEYPAD_MINUS: u8 = 0x4A;
pub const LEFT: u8 = 0x4B;
pub const RIGHT: u8 = 0x4D;
pub const KEYPAD_PLUS: u8 = 0x4E;
pub const DOWN: u8 = 0x50;
pub const INSERT: u8 = 0x52;
pub const DELETE: u8 = 0x53;
/// Extra key next to left Shift on ISO layouts.
pub const ISO: u8 = 0x60;
pub const UNDO: u8 = 0x61;
pub const HELP: u8 = 0x62;
pub const KEYPAD_LEFT_PAREN: u8 = 0x63;
pub const KEYPAD_SLASH: u8 = 0x64;
pub const KEYPAD_ASTERISK: u8 = 0x65;
pub const KEYPAD_RIGHT_PAREN: u8 = 0x66;
pub const KEYPAD_7: u8 = 0x67;
pub const KEYPAD_8: u8 = 0x68;
pub const KEYPAD_9: u8 = 0x69;
pub const KEYPAD_4: u8 = 0x6A;
pub const KEYPAD_5: u8 = 0x6B;
pub const KEYPAD_6: u8 = 0x6C;
pub const KEYPAD_1: u8 = 0x6D;
pub const KEYPAD_2: u8 = 0x6E;
pub const KEYPAD_3: u8 = 0x6F;
pub const KEYPAD_0: u8 = 0x70;
pub const KEYPAD_DOT: u8 = 0x71;
pub const KEYPAD_ENTER: u8 = 0x72;
