use st_scancode::ScancodeSet;

/// ST keyboard line rate (500 kHz / 64).
pub const BAUD_RATE: u32 = 7812;

/// IKBD reset command.
pub const RESET_COMMAND: [u8; 2] = [0x80, 0x01];

/// What to do with keys that have no PS/2 counterpart.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum UnmappedPolicy {
    /// Drop the event.
    #[default]
    Suppress,
    /// Forward the translator output as-is (zero payload).
    Emit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardConfig {
    pub baud_rate: u32,
    pub scancode_set: ScancodeSet,
    pub unmapped: UnmappedPolicy,
    /// Width of each phase of the reset line pulse.
    pub reset_pulse_ms: u32,
    /// Wait before and after the power-on reset in [`crate::StKeyboard::initialize`].
    pub settle_ms: u32,
    /// Wait after the reset command before discarding the keyboard's reply.
    pub drain_ms: u32,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            baud_rate: BAUD_RATE,
            scancode_set: ScancodeSet::Set2,
            unmapped: UnmappedPolicy::Suppress,
            reset_pulse_ms: 20,
            settle_ms: 200,
            drain_ms: 500,
        }
    }
}

impl KeyboardConfig {
    pub fn with_scancode_set(mut self, set: ScancodeSet) -> Self {
        self.scancode_set = set;
        self
    }

    pub fn with_unmapped(mut self, policy: UnmappedPolicy) -> Self {
        self.unmapped = policy;
        self
    }
}
