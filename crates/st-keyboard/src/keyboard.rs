use st_scancode::{to_ps2, Ps2Sequence, RawScancode};
use tracing::{debug, info, trace, warn};

use crate::config::{KeyboardConfig, UnmappedPolicy, RESET_COMMAND};
use crate::error::Result;
use crate::hal::{Delay, OutputPin, SerialLink};

/// One key event read from the keyboard, with its PS/2 translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub raw: RawScancode,
    pub ps2: Ps2Sequence,
}

/// Driver for an Atari ST keyboard attached over a serial link.
///
/// Besides the data line the keyboard connector carries a reset line (active low) and the
/// floppy activity light, which is lit while its line is driven low.
#[derive(Debug)]
pub struct StKeyboard<S, L, R, D> {
    serial: S,
    light_pin: L,
    reset_pin: R,
    delay: D,
    config: KeyboardConfig,
    light_on: bool,
}

impl<S, L, R, D> StKeyboard<S, L, R, D>
where
    S: SerialLink,
    L: OutputPin,
    R: OutputPin,
    D: Delay,
{
    pub fn new(serial: S, light_pin: L, reset_pin: R, delay: D, config: KeyboardConfig) -> Self {
        Self {
            serial,
            light_pin,
            reset_pin,
            delay,
            config,
            light_on: false,
        }
    }

    /// Brings up the control lines and the link, then resets the keyboard.
    pub fn initialize(&mut self) -> Result<()> {
        self.reset_pin.set_high()?;
        self.set_floppy_light(false)?;
        self.serial.configure(self.config.baud_rate)?;

        self.delay.delay_ms(self.config.settle_ms);
        self.reset()?;
        self.delay.delay_ms(self.config.settle_ms);

        info!(
            baud = self.config.baud_rate,
            set = %self.config.scancode_set,
            "st keyboard initialized"
        );
        Ok(())
    }

    pub fn available(&self) -> usize {
        self.serial.available()
    }

    pub fn read(&mut self) -> Option<u8> {
        self.serial.read_byte()
    }

    /// Pulses the reset line, sends the reset command and throws away whatever the keyboard
    /// answers with.
    pub fn reset(&mut self) -> Result<()> {
        let pulse = self.config.reset_pulse_ms;
        self.reset_pin.set_high()?;
        self.delay.delay_ms(pulse);
        self.reset_pin.set_low()?;
        self.delay.delay_ms(pulse);
        self.reset_pin.set_high()?;

        for byte in RESET_COMMAND {
            self.serial.write_byte(byte)?;
        }

        self.delay.delay_ms(self.config.drain_ms);
        let mut discarded = 0usize;
        while self.serial.available() > 0 {
            if self.serial.read_byte().is_none() {
                break;
            }
            discarded += 1;
        }
        debug!(discarded, "st keyboard reset");
        Ok(())
    }

    pub fn floppy_light(&self) -> bool {
        self.light_on
    }

    pub fn set_floppy_light(&mut self, on: bool) -> Result<()> {
        // Inverted: low lights the LED.
        self.light_pin.set_level(!on)?;
        self.light_on = on;
        Ok(())
    }

    pub fn config(&self) -> &KeyboardConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut KeyboardConfig {
        &mut self.config
    }

    pub fn serial(&self) -> &S {
        &self.serial
    }

    pub fn serial_mut(&mut self) -> &mut S {
        &mut self.serial
    }

    /// Reads and translates one byte, if any is pending.
    ///
    /// Unmapped keys are returned as well; the policy only applies to [`Self::pump`].
    pub fn poll(&mut self) -> Option<KeyEvent> {
        let code = self.serial.read_byte()?;
        let ps2 = to_ps2(code, self.config.scancode_set);
        trace!(raw = code, ps2 = %ps2, "st key event");
        Some(KeyEvent {
            raw: RawScancode(code),
            ps2,
        })
    }

    /// Translates every pending byte and appends the PS/2 bytes to `out`.
    ///
    /// Returns the number of events written.
    pub fn pump<E: Extend<u8>>(&mut self, out: &mut E) -> usize {
        let mut emitted = 0;
        while let Some(event) = self.poll() {
            if event.ps2.is_unmapped() && self.config.unmapped == UnmappedPolicy::Suppress {
                warn!(key = event.raw.key(), "no PS/2 mapping for st key; dropped");
                continue;
            }
            out.extend(event.ps2.bytes().iter().copied());
            emitted += 1;
        }
        emitted
    }

    pub fn into_parts(self) -> (S, L, R, D) {
        (self.serial, self.light_pin, self.reset_pin, self.delay)
    }
}
