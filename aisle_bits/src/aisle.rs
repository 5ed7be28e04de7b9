//! One aisle: four sections packed into a `u64`.
//!
//! ```text
//!   MSB                                                       LSB
//!     +-------------+-------------+-------------+-------------+
//!     |  Section 3  |  Section 2  |  Section 1  |  Section 0  |
//!     +-------------+-------------+-------------+-------------+
//!     64            48            32            16            0
//! ```
//!
//! Every method forwards to the matching function in [`codec`](crate::codec).

use crate::codec;
use crate::section::Section;
use crate::{AisleBitsError, SECTIONS_PER_AISLE};
use bytemuck_derive::{Pod, Zeroable};

#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Aisle(u64);

impl Aisle {
    pub const EMPTY: Self = Aisle(0);

    pub const fn new(raw: u64) -> Self {
        Aisle(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Builds an aisle from its sections, index 0 first.
    pub fn from_sections(sections: [Section; SECTIONS_PER_AISLE]) -> Self {
        let mut aisle = Aisle::EMPTY;
        for (i, s) in sections.into_iter().enumerate() {
            aisle.set_section(i, s);
        }
        aisle
    }

    #[inline]
    pub fn section(self, index: usize) -> Section {
        Section::new(codec::get_section(self.0, index))
    }

    #[inline]
    pub fn set_section(&mut self, index: usize, section: Section) {
        codec::set_section(&mut self.0, index, section.raw());
    }

    #[inline]
    pub fn occupancy(self, index: usize) -> u16 {
        codec::get_occupancy(self.0, index)
    }

    /// Returns `false` and leaves the aisle alone if `value` is wider than
    /// 10 bits.
    #[inline]
    pub fn set_occupancy(&mut self, index: usize, value: u16) -> bool {
        codec::set_occupancy(&mut self.0, index, value)
    }

    pub fn try_set_occupancy(&mut self, index: usize, value: u16) -> Result<(), AisleBitsError> {
        codec::try_set_occupancy(&mut self.0, index, value)
    }

    #[inline]
    pub fn id(self, index: usize) -> u16 {
        codec::get_id(self.0, index)
    }

    /// Returns `false` and leaves the aisle alone if `value` is wider than
    /// 6 bits.
    #[inline]
    pub fn set_id(&mut self, index: usize, value: u16) -> bool {
        codec::set_id(&mut self.0, index, value)
    }

    pub fn try_set_id(&mut self, index: usize, value: u16) -> Result<(), AisleBitsError> {
        codec::try_set_id(&mut self.0, index, value)
    }

    #[inline]
    pub fn toggle_slot(&mut self, index: usize, slot: usize) {
        codec::toggle_slot(&mut self.0, index, slot);
    }

    #[inline]
    pub fn count_items(self, index: usize) -> u32 {
        codec::count_items(self.0, index)
    }

    pub fn add_items(&mut self, index: usize, n: u32) {
        codec::add_items(&mut self.0, index, n);
    }

    pub fn remove_items(&mut self, index: usize, n: u32) {
        codec::remove_items(&mut self.0, index, n);
    }

    pub fn rotate_left(&mut self, index: usize, n: u32) {
        codec::rotate_left(&mut self.0, index, n);
    }

    pub fn rotate_right(&mut self, index: usize, n: u32) {
        codec::rotate_right(&mut self.0, index, n);
    }

    /// Sections in index order.
    pub fn sections(self) -> impl Iterator<Item = Section> {
        (0..SECTIONS_PER_AISLE).map(move |i| self.section(i))
    }
}

impl From<u64> for Aisle {
    fn from(raw: u64) -> Self {
        Aisle(raw)
    }
}

impl From<Aisle> for u64 {
    fn from(a: Aisle) -> Self {
        a.0
    }
}
