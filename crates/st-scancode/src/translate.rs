//! ST scancode -> PS/2 byte sequence translation.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use thiserror::Error;

use crate::keys;
use crate::raw;
use crate::tables::{set1_to_set2, st_to_set1};

/// Extended-key prefix byte.
pub const EXTENDED_PREFIX: u8 = 0xE0;
/// Break prefix byte (Set-2 framing).
pub const BREAK_PREFIX: u8 = 0xF0;

/// Target PS/2 scancode set.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScancodeSet {
    Set1,
    #[default]
    Set2,
}

impl ScancodeSet {
    /// Maps the boolean "use Set 1" selector onto a set.
    pub const fn from_use_set1(use_set1: bool) -> Self {
        if use_set1 {
            Self::Set1
        } else {
            Self::Set2
        }
    }

    /// The set number as used by the PS/2 "select scancode set" command.
    pub const fn number(self) -> u8 {
        match self {
            Self::Set1 => 1,
            Self::Set2 => 2,
        }
    }
}

impl fmt::Display for ScancodeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "set{}", self.number())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scancode set {0:?} (expected 1, 2, set1 or set2)")]
pub struct ParseScancodeSetError(pub String);

impl FromStr for ScancodeSet {
    type Err = ParseScancodeSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "set1" => Ok(Self::Set1),
            "2" | "set2" => Ok(Self::Set2),
            _ => Err(ParseScancodeSetError(s.to_string())),
        }
    }
}

/// Arrow keys are not in the Set-1 table; they are emitted as extended codes.
///
/// Entries are `(st key, set-1 payload, set-2 payload)`.
const ARROW_KEYS: [(u8, u8, u8); 4] = [
    (keys::UP, 0x48, 0x75),
    (keys::DOWN, 0x50, 0x72),
    (keys::LEFT, 0x4B, 0x6B),
    (keys::RIGHT, 0x4D, 0x74),
];

fn arrow_payload(key: u8, set: ScancodeSet) -> Option<u8> {
    ARROW_KEYS
        .iter()
        .find(|(st, _, _)| *st == key)
        .map(|&(_, set1, set2)| match set {
            ScancodeSet::Set1 => set1,
            ScancodeSet::Set2 => set2,
        })
}

/// The PS/2 output for one ST scancode.
///
/// Wire order is `[0xE0]? [0xF0]? payload`. The break prefix is produced for both target sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ps2Sequence {
    pub extended: bool,
    pub release: bool,
    pub payload: u8,
}

impl Ps2Sequence {
    /// `true` when the input key has no PS/2 counterpart (zero payload).
    ///
    /// Whether such keys are dropped or forwarded is up to the caller.
    pub fn is_unmapped(&self) -> bool {
        self.payload == 0
    }

    /// Packs the sequence into an integer: payload in bits 0..8, the break prefix (if any)
    /// directly above it and the extended prefix (if any) topmost.
    pub fn packed(&self) -> u32 {
        let mut packed = 0u32;
        packed |= u32::from(self.payload);
        if self.release {
            packed |= u32::from(BREAK_PREFIX) << 8;
        }
        if self.extended {
            let shift = if self.release { 16 } else { 8 };
            packed |= u32::from(EXTENDED_PREFIX) << shift;
        }
        packed
    }

    /// The bytes to put on the wire, in transmission order.
    pub fn bytes(&self) -> Ps2Bytes {
        let mut out = Ps2Bytes::default();
        if self.extended {
            out.push(EXTENDED_PREFIX);
        }
        if self.release {
            out.push(BREAK_PREFIX);
        }
        out.push(self.payload);
        out
    }
}

impl fmt::Display for Ps2Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.bytes().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

/// Inline 1..=3 byte buffer returned by [`Ps2Sequence::bytes`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Ps2Bytes {
    buf: [u8; 3],
    len: usize,
}

impl Ps2Bytes {
    fn push(&mut self, byte: u8) {
        self.buf[self.len] = byte;
        self.len += 1;
    }
}

impl Deref for Ps2Bytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

impl<'a> IntoIterator for &'a Ps2Bytes {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Translates one raw ST scancode into its PS/2 sequence in `set`.
pub fn to_ps2(code: u8, set: ScancodeSet) -> Ps2Sequence {
    let key = raw::key(code);
    let release = raw::is_break(code);

    let set1 = st_to_set1(key);
    let mut payload = match set {
        ScancodeSet::Set1 => set1,
        ScancodeSet::Set2 => set1_to_set2(set1),
    };

    let mut extended = false;
    if let Some(arrow) = arrow_payload(key, set) {
        payload = arrow;
        extended = true;
    }

    Ps2Sequence {
        extended,
        release,
        payload,
    }
}

/// [`to_ps2`] in packed form; see [`Ps2Sequence::packed`].
pub fn to_ps2_packed(code: u8, set: ScancodeSet) -> u32 {
    to_ps2(code, set).packed()
}
