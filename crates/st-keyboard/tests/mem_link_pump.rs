use st_keyboard::{
    Delay, KeyboardConfig, MemSerialLink, OutputPin, Result, StKeyboard, UnmappedPolicy,
    BAUD_RATE,
};
use st_scancode::{keys, ScancodeSet};

#[derive(Debug, Default)]
struct LevelPin {
    high: Option<bool>,
}

impl OutputPin for LevelPin {
    fn set_high(&mut self) -> Result<()> {
        self.high = Some(true);
        Ok(())
    }

    fn set_low(&mut self) -> Result<()> {
        self.high = Some(false);
        Ok(())
    }
}

#[derive(Debug, Default)]
struct CountingDelay {
    total_ms: u64,
}

impl Delay for CountingDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.total_ms += u64::from(ms);
    }
}

type Keyboard = StKeyboard<MemSerialLink, LevelPin, LevelPin, CountingDelay>;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

fn keyboard(config: KeyboardConfig) -> Keyboard {
    init_tracing();
    let mut kbd = StKeyboard::new(
        MemSerialLink::new(),
        LevelPin::default(),
        LevelPin::default(),
        CountingDelay::default(),
        config,
    );
    kbd.initialize().unwrap();
    kbd
}

#[test]
fn initialize_configures_link_and_lines() {
    let mut kbd = keyboard(KeyboardConfig::default());
    assert_eq!(kbd.serial().baud(), Some(BAUD_RATE));
    assert_eq!(kbd.serial_mut().take_tx(), vec![0x80, 0x01]);

    let (_, light, reset, delay) = kbd.into_parts();
    // Light off means the line idles high; reset is released.
    assert_eq!(light.high, Some(true));
    assert_eq!(reset.high, Some(true));
    assert_eq!(delay.total_ms, 200 + 20 + 20 + 500 + 200);
}

#[test]
fn typing_produces_set2_stream() {
    let mut kbd = keyboard(KeyboardConfig::default());
    // Shift down, 'H' down/up, Shift up, Up arrow down/up.
    kbd.serial_mut().extend_rx(&[
        keys::LEFT_SHIFT,
        keys::H,
        keys::H | 0x80,
        keys::LEFT_SHIFT | 0x80,
        keys::UP,
        keys::UP | 0x80,
    ]);

    let mut out = Vec::new();
    assert_eq!(kbd.pump(&mut out), 6);
    assert_eq!(
        out,
        vec![0x12, 0x33, 0xF0, 0x33, 0xF0, 0x12, 0xE0, 0x75, 0xE0, 0xF0, 0x75]
    );
    assert_eq!(kbd.available(), 0);
}

#[test]
fn set1_stream_keeps_f0_break_framing() {
    let mut kbd = keyboard(
        KeyboardConfig::default()
            .with_scancode_set(ScancodeSet::Set1)
            .with_unmapped(UnmappedPolicy::Emit),
    );
    kbd.serial_mut()
        .extend_rx(&[keys::A, keys::A | 0x80, keys::HELP]);

    let mut out = Vec::new();
    assert_eq!(kbd.pump(&mut out), 3);
    assert_eq!(out, vec![0x1E, 0xF0, 0x1E, 0x00]);
}

#[test]
fn scancode_set_can_change_at_runtime() {
    let mut kbd = keyboard(KeyboardConfig::default());
    kbd.serial_mut().push_rx(keys::LEFT);
    kbd.config_mut().scancode_set = ScancodeSet::Set1;

    let event = kbd.poll().unwrap();
    assert_eq!(&*event.ps2.bytes(), &[0xE0, 0x4B]);
}
