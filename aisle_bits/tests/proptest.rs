// tests/proptest.rs

use aisle_bits::codec::*;
use aisle_bits::{Aisle, OCCUPANCY_MASK, Occupancy, Section};
use proptest::prelude::*;

//
// -----------------------------------------------------------------------------
// Section round trips
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_set_section_with_own_value_is_identity(aisle: u64, index in 0usize..4) {
        let mut word = aisle;
        set_section(&mut word, index, get_section(aisle, index));
        prop_assert_eq!(word, aisle);
    }
}

proptest! {
    #[test]
    fn prop_set_section_touches_one_section(aisle: u64, index in 0usize..4, value: u16) {
        let mut word = aisle;
        set_section(&mut word, index, value);
        prop_assert_eq!(get_section(word, index), value);

        for other in (0..4).filter(|&i| i != index) {
            prop_assert_eq!(get_section(word, other), get_section(aisle, other));
        }
    }
}

//
// -----------------------------------------------------------------------------
// Field isolation
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_fields_do_not_leak(
        aisle: u64,
        index in 0usize..4,
        ops in prop::collection::vec((0u8..3, 0u16..1024, 0usize..10), 0..40)
    ) {
        let mut word = aisle;
        let mut id = get_id(aisle, index);
        let mut spaces = get_occupancy(aisle, index);

        for (op, value, slot) in ops {
            match op {
                0 => {
                    let v = value & 0x3F;
                    prop_assert!(set_id(&mut word, index, v));
                    id = v;
                }
                1 => {
                    prop_assert!(set_occupancy(&mut word, index, value));
                    spaces = value;
                }
                _ => {
                    toggle_slot(&mut word, index, slot);
                    spaces ^= 1 << slot;
                }
            }
            prop_assert_eq!(get_id(word, index), id);
            prop_assert_eq!(get_occupancy(word, index), spaces);
        }

        for other in (0..4).filter(|&i| i != index) {
            prop_assert_eq!(get_section(word, other), get_section(aisle, other));
        }
    }
}

proptest! {
    #[test]
    fn prop_wide_payloads_leave_word_untouched(
        aisle: u64,
        index in 0usize..4,
        wide_spaces in 0x0400u16..=u16::MAX,
        wide_id in 0x0040u16..=u16::MAX
    ) {
        let mut word = aisle;
        prop_assert!(!set_occupancy(&mut word, index, wide_spaces));
        prop_assert!(!set_id(&mut word, index, wide_id));
        prop_assert!(try_set_occupancy(&mut word, index, wide_spaces).is_err());
        prop_assert!(try_set_id(&mut word, index, wide_id).is_err());
        prop_assert_eq!(word, aisle);
    }
}

//
// -----------------------------------------------------------------------------
// Rotation
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_rotate_left_then_right_restores(aisle: u64, index in 0usize..4, n: u32) {
        let mut word = aisle;
        rotate_left(&mut word, index, n);
        prop_assert_eq!(get_id(word, index), get_id(aisle, index));
        prop_assert_eq!(count_items(word, index), count_items(aisle, index));
        rotate_right(&mut word, index, n);
        prop_assert_eq!(word, aisle);
    }
}

proptest! {
    #[test]
    fn prop_full_and_zero_rotation_are_noops(aisle: u64, index in 0usize..4, k in 0u32..1000) {
        let mut word = aisle;
        rotate_left(&mut word, index, 0);
        prop_assert_eq!(word, aisle);
        rotate_left(&mut word, index, 10);
        prop_assert_eq!(word, aisle);
        rotate_right(&mut word, index, 10 * k);
        prop_assert_eq!(word, aisle);
    }
}

proptest! {
    #[test]
    fn prop_rotation_is_modular(aisle: u64, index in 0usize..4, n in 0u32..10, k in 0u32..100) {
        let mut a = aisle;
        let mut b = aisle;
        rotate_left(&mut a, index, n);
        rotate_left(&mut b, index, n + 10 * k);
        prop_assert_eq!(a, b);
    }
}

//
// -----------------------------------------------------------------------------
// Add / remove
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_add_caps_at_capacity(aisle: u64, index in 0usize..4, n in 0u32..40) {
        let before = count_items(aisle, index);
        let mut word = aisle;
        add_items(&mut word, index, n);
        prop_assert_eq!(count_items(word, index), (before + n).min(10));
        prop_assert_eq!(get_id(word, index), get_id(aisle, index));
        // previously filled slots stay filled
        let old = get_occupancy(aisle, index);
        prop_assert_eq!(get_occupancy(word, index) & old, old);
    }
}

proptest! {
    #[test]
    fn prop_remove_floors_at_zero(aisle: u64, index in 0usize..4, n in 0u32..40) {
        let before = count_items(aisle, index);
        let mut word = aisle;
        remove_items(&mut word, index, n);
        prop_assert_eq!(count_items(word, index), before.saturating_sub(n));
        prop_assert_eq!(get_id(word, index), get_id(aisle, index));
        let old = get_occupancy(aisle, index);
        prop_assert_eq!(get_occupancy(word, index) & !old, 0);
    }
}

proptest! {
    #[test]
    fn prop_add_prefers_lowest_slots(spaces in 0u16..1024, n in 0u32..11) {
        let mut aisle = Aisle::EMPTY;
        aisle.set_occupancy(0, spaces);
        aisle.add_items(0, n);

        let added = aisle.occupancy(0) & !spaces;
        let empties: Vec<usize> = Occupancy::new(spaces).unwrap().empty_slots().collect();
        let expected = empties
            .iter()
            .take(n as usize)
            .fold(0u16, |acc, &slot| acc | (1 << slot));
        prop_assert_eq!(added, expected);
    }
}

//
// -----------------------------------------------------------------------------
// Section view agrees with the codec
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_section_view_matches_codec(aisle: u64, index in 0usize..4) {
        let section = Aisle::new(aisle).section(index);
        prop_assert_eq!(section.id(), get_id(aisle, index));
        prop_assert_eq!(section.occupancy().bits(), get_occupancy(aisle, index));
        prop_assert_eq!(section.count(), count_items(aisle, index));
        prop_assert_eq!(section.raw() & OCCUPANCY_MASK, get_occupancy(aisle, index));
        prop_assert_eq!(
            Section::from_parts(section.id(), section.occupancy().bits()),
            Some(section)
        );
    }
}
