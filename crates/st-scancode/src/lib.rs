#![forbid(unsafe_code)]

//! Atari ST keyboard scancode translation to PS/2 Set 1 and Set 2.
//!
//! The ST keyboard sends one byte per key event: the key code in the low seven bits and a
//! break flag in bit 7. [`to_ps2`] maps such a byte onto the 1..=3 byte PS/2 sequence a host
//! controller expects. Translation is a pure function over two constant tables; there is no
//! keyboard state.

pub mod keys;
pub mod raw;
pub mod tables;
pub mod translate;

pub use raw::{is_break, is_make, key, RawScancode};
pub use tables::{set1_to_set2, st_to_set1, SET1_TO_SET2, ST_TO_SET1};
pub use translate::{
    to_ps2, to_ps2_packed, ParseScancodeSetError, Ps2Bytes, Ps2Sequence, ScancodeSet,
    BREAK_PREFIX, EXTENDED_PREFIX,
};
