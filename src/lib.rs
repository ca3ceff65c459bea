#![forbid(unsafe_code)]

//! Atari ST keyboard to PS/2 bridge.
//!
//! Re-exports the scancode translator ([`scancode`]) and the keyboard link driver
//! ([`keyboard`]) under one crate.

pub use st_keyboard as keyboard;
pub use st_scancode as scancode;

pub use st_keyboard::{KeyboardConfig, StKeyboard, UnmappedPolicy};
pub use st_scancode::{to_ps2, Ps2Sequence, ScancodeSet};
