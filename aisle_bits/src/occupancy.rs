//! The 10-slot occupancy map of a section.
//!
//! # Examples
//!
//! ```rust
//! use aisle_bits::Occupancy;
//!
//! let spaces = Occupancy::new(0b01_0001_1010).unwrap();
//!
//! assert_eq!(spaces.count(), 4);
//! assert!(spaces.contains(3));
//! assert!(!spaces.contains(0));
//!
//! let filled: Vec<usize> = spaces.filled_slots().collect();
//! assert_eq!(filled, vec![1, 3, 4, 8]);
//!
//! // bit 10 is not a slot
//! assert!(Occupancy::new(0x0400).is_none());
//! ```

use crate::bit_ops::clear_lowest;
use crate::{OCCUPANCY_MASK, SLOT_COUNT};
use bytemuck_derive::{Pod, Zeroable};
use core::iter::FusedIterator;

#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Occupancy(u16);

impl Occupancy {
    pub const EMPTY: Self = Occupancy(0);
    pub const FULL: Self = Occupancy(OCCUPANCY_MASK);

    /// Returns `None` if `bits` uses anything above bit 9.
    pub const fn new(bits: u16) -> Option<Self> {
        if bits >> SLOT_COUNT != 0 {
            None
        } else {
            Some(Occupancy(bits))
        }
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    pub const fn vacancies(self) -> u32 {
        SLOT_COUNT - self.count()
    }

    /// Whether `slot` holds an item. Slots past 9 are never filled.
    pub const fn contains(self, slot: usize) -> bool {
        slot < SLOT_COUNT as usize && (self.0 >> slot) & 1 != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn is_full(self) -> bool {
        self.0 == OCCUPANCY_MASK
    }

    pub fn filled_slots(self) -> SlotsIter {
        SlotsIter::new(self.0)
    }

    pub fn empty_slots(self) -> SlotsIter {
        SlotsIter::new(!self.0 & OCCUPANCY_MASK)
    }
}

impl From<Occupancy> for u16 {
    fn from(o: Occupancy) -> Self {
        o.0
    }
}

/// Yields the set slot indices of a map, lowest first.
#[derive(Clone, Debug)]
pub struct SlotsIter {
    bits: u16,
}

impl SlotsIter {
    pub fn new(bits: u16) -> Self {
        Self {
            bits: bits & OCCUPANCY_MASK,
        }
    }
}

impl Iterator for SlotsIter {
    type Item = usize;
    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let slot = self.bits.trailing_zeros() as usize;
        self.bits = clear_lowest(self.bits);
        Some(slot)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bits.count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SlotsIter {}

impl FusedIterator for SlotsIter {}
