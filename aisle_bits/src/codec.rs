//! Section-level primitives over a raw aisle word.
//!
//! Section indices must be in `0..4` and slot indices in `0..10`. Out of range
//! indices are a caller bug and trip a debug assertion. Use
//! [`checked_section_index`](crate::checked_section_index) first when the
//! index comes from outside.
//!
//! Writes that carry a payload wider than its field are dropped without
//! touching the word.

use crate::bit_ops::{self, clear_lowest, lowest};
use crate::{
    AisleBitsError, BitIndex, ID_BITS, OCCUPANCY_MASK, SECTION_BITS, SECTIONS_PER_AISLE,
    SLOT_COUNT, SectionIndex, SlotIndex,
};

#[inline(always)]
fn section_offset(index: usize) -> BitIndex {
    debug_assert!(index < SECTIONS_PER_AISLE, "section index {index} out of range");
    BitIndex::from(SectionIndex(index))
}

/// Returns the 16-bit section at `index`.
#[inline]
pub fn get_section(aisle: u64, index: usize) -> u16 {
    bit_ops::get_bits(aisle, section_offset(index), SECTION_BITS) as u16
}

/// Returns the occupancy map of the section at `index` in the low 10 bits.
#[inline]
pub fn get_occupancy(aisle: u64, index: usize) -> u16 {
    bit_ops::get_bits(aisle, section_offset(index), SLOT_COUNT) as u16
}

/// Returns the item id of the section at `index` in the low 6 bits.
///
/// A section of `0x651A` yields `0b011001`.
#[inline]
pub fn get_id(aisle: u64, index: usize) -> u16 {
    bit_ops::get_bits(aisle, section_offset(index).id_field(), ID_BITS) as u16
}

/// Overwrites the whole section at `index`.
#[inline]
pub fn set_section(aisle: &mut u64, index: usize, value: u16) {
    bit_ops::set_bits(aisle, section_offset(index), SECTION_BITS, value as u64);
}

/// Replaces the occupancy map of the section at `index`, keeping its id.
///
/// Returns `false` without writing if `value` has a bit set above bit 9.
#[inline]
pub fn set_occupancy(aisle: &mut u64, index: usize, value: u16) -> bool {
    if value >> SLOT_COUNT != 0 {
        return false;
    }
    bit_ops::set_bits(aisle, section_offset(index), SLOT_COUNT, value as u64);
    true
}

/// Replaces the item id of the section at `index`, keeping its occupancy.
///
/// Returns `false` without writing if `value` has a bit set above bit 5.
#[inline]
pub fn set_id(aisle: &mut u64, index: usize, value: u16) -> bool {
    if value >> ID_BITS != 0 {
        return false;
    }
    bit_ops::set_bits(aisle, section_offset(index).id_field(), ID_BITS, value as u64);
    true
}

/// Like [`set_occupancy`], but reports a rejected payload.
pub fn try_set_occupancy(aisle: &mut u64, index: usize, value: u16) -> Result<(), AisleBitsError> {
    if set_occupancy(aisle, index, value) {
        Ok(())
    } else {
        Err(AisleBitsError::ValueOverflow {
            value,
            bits: SLOT_COUNT,
        })
    }
}

/// Like [`set_id`], but reports a rejected payload.
pub fn try_set_id(aisle: &mut u64, index: usize, value: u16) -> Result<(), AisleBitsError> {
    if set_id(aisle, index, value) {
        Ok(())
    } else {
        Err(AisleBitsError::ValueOverflow {
            value,
            bits: ID_BITS,
        })
    }
}

/// Flips the occupancy bit for `slot`.
#[inline]
pub fn toggle_slot(aisle: &mut u64, index: usize, slot: usize) {
    debug_assert!(slot < SLOT_COUNT as usize, "slot index {slot} out of range");
    *aisle ^= 1u64 << section_offset(index).slot(SlotIndex(slot)).get();
}

/// Number of filled slots in the section at `index`.
#[inline]
pub fn count_items(aisle: u64, index: usize) -> u32 {
    get_occupancy(aisle, index).count_ones()
}

/// Fills up to `n` empty slots, lowest slot first. Stops quietly once the
/// section is full.
pub fn add_items(aisle: &mut u64, index: usize, mut n: u32) {
    let mut spaces = get_occupancy(*aisle, index);
    while n > 0 {
        let empty = !spaces & OCCUPANCY_MASK;
        if empty == 0 {
            break;
        }
        spaces |= lowest(empty);
        n -= 1;
    }
    set_occupancy(aisle, index, spaces);
}

/// Empties up to `n` filled slots, lowest slot first. Stops quietly once the
/// section is empty.
pub fn remove_items(aisle: &mut u64, index: usize, mut n: u32) {
    let mut spaces = get_occupancy(*aisle, index);
    while n > 0 && spaces != 0 {
        spaces = clear_lowest(spaces);
        n -= 1;
    }
    set_occupancy(aisle, index, spaces);
}

/// Rotates the occupancy map left by `n` slots, wrapping inside the 10-bit
/// field.
///
/// `0b01_1110_0001` rotated left by 2 is `0b11_1000_0101`.
pub fn rotate_left(aisle: &mut u64, index: usize, n: u32) {
    let n = n % SLOT_COUNT;
    if n == 0 {
        return;
    }
    let spaces = get_occupancy(*aisle, index);
    let rotated = bit_ops::rotate_left_within(spaces as u64, SLOT_COUNT, n) as u16;
    set_occupancy(aisle, index, rotated);
}

/// Rotates the occupancy map right by `n` slots.
///
/// `0b10_0001_1110` rotated right by 2 is `0b10_1000_0111`.
pub fn rotate_right(aisle: &mut u64, index: usize, n: u32) {
    rotate_left(aisle, index, (SLOT_COUNT - n % SLOT_COUNT) % SLOT_COUNT);
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: u64 = 0x1234_651A_0000_ABCD;

    #[test]
    fn reads_each_field() {
        assert_eq!(get_section(SAMPLE, 0), 0xABCD);
        assert_eq!(get_section(SAMPLE, 1), 0x0000);
        assert_eq!(get_section(SAMPLE, 2), 0x651A);
        assert_eq!(get_section(SAMPLE, 3), 0x1234);

        assert_eq!(get_id(SAMPLE, 2), 0b011001);
        assert_eq!(get_occupancy(SAMPLE, 2), 0b01_0001_1010);
        assert_eq!(count_items(SAMPLE, 2), 4);
    }

    #[test]
    fn set_section_replaces_only_target() {
        let mut aisle = SAMPLE;
        set_section(&mut aisle, 1, 0xFFFF);
        assert_eq!(aisle, 0x1234_651A_FFFF_ABCD);
        set_section(&mut aisle, 3, 0);
        assert_eq!(aisle, 0x0000_651A_FFFF_ABCD);
    }

    #[test]
    fn set_id_keeps_occupancy() {
        let mut aisle = SAMPLE;
        assert!(set_id(&mut aisle, 2, 0b111111));
        assert_eq!(get_section(aisle, 2), 0xFD1A);
        assert_eq!(get_section(aisle, 3), 0x1234);
        assert_eq!(get_section(aisle, 1), 0x0000);
    }

    #[test]
    fn set_occupancy_keeps_id() {
        let mut aisle = SAMPLE;
        assert!(set_occupancy(&mut aisle, 2, 0));
        assert_eq!(get_section(aisle, 2), 0x6400);
    }

    #[test]
    fn oversized_payloads_are_dropped() {
        let mut aisle = SAMPLE;
        assert!(!set_occupancy(&mut aisle, 0, 0x0400));
        assert!(!set_id(&mut aisle, 0, 0x40));
        assert_eq!(aisle, SAMPLE);

        assert_eq!(
            try_set_id(&mut aisle, 1, 64),
            Err(AisleBitsError::ValueOverflow { value: 64, bits: 6 })
        );
        assert_eq!(
            try_set_occupancy(&mut aisle, 1, 0xFFFF),
            Err(AisleBitsError::ValueOverflow {
                value: 0xFFFF,
                bits: 10
            })
        );
        assert_eq!(aisle, SAMPLE);
        assert_eq!(try_set_id(&mut aisle, 1, 63), Ok(()));
        assert_eq!(get_id(aisle, 1), 63);
    }

    #[test]
    fn toggle_flips_one_slot() {
        let mut aisle = 0u64;
        toggle_slot(&mut aisle, 3, 9);
        assert_eq!(get_section(aisle, 3), 0b10_0000_0000);
        toggle_slot(&mut aisle, 3, 9);
        assert_eq!(aisle, 0);
    }

    #[test]
    fn add_fills_lowest_empty_slots() {
        let mut aisle = SAMPLE;
        add_items(&mut aisle, 2, 3);
        assert_eq!(get_occupancy(aisle, 2), 0b01_0011_1111);
        assert_eq!(get_id(aisle, 2), 0b011001);

        add_items(&mut aisle, 2, 100);
        assert_eq!(get_occupancy(aisle, 2), OCCUPANCY_MASK);
        assert_eq!(count_items(aisle, 2), 10);
    }

    #[test]
    fn remove_empties_lowest_filled_slots() {
        let mut aisle = SAMPLE;
        remove_items(&mut aisle, 2, 2);
        assert_eq!(get_occupancy(aisle, 2), 0b01_0001_0000);

        remove_items(&mut aisle, 2, 7);
        assert_eq!(get_occupancy(aisle, 2), 0);
        assert_eq!(get_id(aisle, 2), 0b011001);
    }

    #[test]
    fn rotations_match_reference_examples() {
        let mut aisle = 0u64;
        set_occupancy(&mut aisle, 1, 0b01_1110_0001);
        rotate_left(&mut aisle, 1, 2);
        assert_eq!(get_occupancy(aisle, 1), 0b11_1000_0101);

        set_occupancy(&mut aisle, 1, 0b10_0001_1110);
        rotate_right(&mut aisle, 1, 2);
        assert_eq!(get_occupancy(aisle, 1), 0b10_1000_0111);

        rotate_left(&mut aisle, 1, 12);
        rotate_right(&mut aisle, 1, 2);
        assert_eq!(get_occupancy(aisle, 1), 0b10_1000_0111);
    }

    #[test]
    fn rotation_never_touches_id() {
        let mut aisle = 0u64;
        set_id(&mut aisle, 0, 0b101010);
        set_occupancy(&mut aisle, 0, 0b10_0000_0001);
        rotate_left(&mut aisle, 0, 1);
        assert_eq!(get_section(aisle, 0), (0b101010 << 10) | 0b00_0000_0011);
        rotate_right(&mut aisle, 0, 3);
        assert_eq!(get_section(aisle, 0), (0b101010 << 10) | 0b01_1000_0000);
    }
}
