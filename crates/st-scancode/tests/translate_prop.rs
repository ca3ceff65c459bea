#![cfg(not(target_arch = "wasm32"))]

use proptest::prelude::*;
use st_scancode::{
    is_break, key, keys, set1_to_set2, st_to_set1, to_ps2, ScancodeSet, BREAK_PREFIX,
    EXTENDED_PREFIX,
};

const ARROWS: [u8; 4] = [keys::UP, keys::DOWN, keys::LEFT, keys::RIGHT];

fn any_set() -> impl Strategy<Value = ScancodeSet> {
    prop_oneof![Just(ScancodeSet::Set1), Just(ScancodeSet::Set2)]
}

proptest! {
    #[test]
    fn non_arrow_payload_follows_tables(code in any::<u8>()) {
        prop_assume!(!ARROWS.contains(&key(code)));

        let set1 = to_ps2(code, ScancodeSet::Set1);
        let set2 = to_ps2(code, ScancodeSet::Set2);
        prop_assert_eq!(set1.payload, st_to_set1(key(code)));
        prop_assert_eq!(set2.payload, set1_to_set2(st_to_set1(key(code))));
        prop_assert!(!set1.extended);
        prop_assert!(!set2.extended);
    }

    #[test]
    fn break_prefix_sits_between_extended_and_payload(code in any::<u8>(), set in any_set()) {
        let seq = to_ps2(code, set);
        let bytes = seq.bytes();
        prop_assert!(!bytes.is_empty() && bytes.len() <= 3);
        prop_assert_eq!(*bytes.last().unwrap(), seq.payload);
        prop_assert!(seq.packed() <= 0x00FF_FFFF);

        if is_break(code) {
            let f0 = bytes.len() - 2;
            prop_assert_eq!(bytes[f0], BREAK_PREFIX);
            prop_assert_eq!((seq.packed() >> 8) & 0xFF, u32::from(BREAK_PREFIX));
            if seq.extended {
                prop_assert_eq!(bytes[0], EXTENDED_PREFIX);
                prop_assert_eq!(seq.packed() >> 16, u32::from(EXTENDED_PREFIX));
            }
        } else {
            prop_assert!(!seq.release);
            prop_assert_eq!(bytes.len(), if seq.extended { 2 } else { 1 });
        }
    }

    #[test]
    fn packed_and_wire_bytes_agree(code in any::<u8>(), set in any_set()) {
        let seq = to_ps2(code, set);
        let mut packed = 0u32;
        for b in &seq.bytes() {
            packed = (packed << 8) | u32::from(*b);
        }
        prop_assert_eq!(packed, seq.packed());
    }
}

#[test]
fn arrows_always_extended_with_fixed_payloads() {
    let expected = [
        (keys::UP, 0x48, 0x75),
        (keys::DOWN, 0x50, 0x72),
        (keys::LEFT, 0x4B, 0x6B),
        (keys::RIGHT, 0x4D, 0x74),
    ];
    for (st, set1, set2) in expected {
        for code in [st, st | 0x80] {
            let one = to_ps2(code, ScancodeSet::Set1);
            let two = to_ps2(code, ScancodeSet::Set2);
            assert!(one.extended && two.extended, "code {code:#04x}");
            assert_eq!(one.payload, set1);
            assert_eq!(two.payload, set2);
            assert_eq!(one.bytes()[0], EXTENDED_PREFIX);
        }
    }
}

#[test]
fn documented_scenarios() {
    assert_eq!(to_ps2(0x1E, ScancodeSet::Set1).packed(), 0x1E);
    assert_eq!(&*to_ps2(0x9E, ScancodeSet::Set1).bytes(), &[0xF0, 0x1E]);
    assert_eq!(&*to_ps2(0x48, ScancodeSet::Set2).bytes(), &[0xE0, 0x75]);
    assert_eq!(&*to_ps2(0xC8, ScancodeSet::Set2).bytes(), &[0xE0, 0xF0, 0x75]);
    assert_eq!(to_ps2(0x00, ScancodeSet::Set1).payload, 0x00);
}
