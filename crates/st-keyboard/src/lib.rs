#![forbid(unsafe_code)]

//! Atari ST keyboard link driver.
//!
//! [`StKeyboard`] owns the serial link and the two control lines of an ST keyboard and turns
//! the bytes it sends into PS/2 scancode sequences using [`st_scancode`]. Hardware access goes
//! through the [`SerialLink`], [`OutputPin`] and [`Delay`] traits.

mod config;
mod error;
mod hal;
mod keyboard;
mod mem;

pub use config::{KeyboardConfig, UnmappedPolicy, BAUD_RATE, RESET_COMMAND};
pub use error::{KeyboardError, Result};
pub use hal::{Delay, OutputPin, SerialLink, StdDelay};
pub use keyboard::{KeyEvent, StKeyboard};
pub use mem::MemSerialLink;
