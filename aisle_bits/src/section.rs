//! A single 16-bit section value.

use crate::occupancy::Occupancy;
use crate::{ID_BITS, ID_MASK, OCCUPANCY_MASK, SLOT_COUNT};
use bytemuck_derive::{Pod, Zeroable};

/// Item id in bits 15..10, occupancy map in bits 9..0.
///
/// ```text
///   +-----------+-------------------+
///   |0 1 1 0 0 1|0 1 0 0 0 1 1 0 1 0|   0x651A
///   +-----------+-------------------+
///   | item id   | section spaces    |
///   16          10                  0
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Section(u16);

impl Section {
    pub const EMPTY: Self = Section(0);

    pub const fn new(raw: u16) -> Self {
        Section(raw)
    }

    /// Packs an id and an occupancy map. `None` if either is too wide.
    pub const fn from_parts(id: u16, occupancy: u16) -> Option<Self> {
        if id >> ID_BITS != 0 || occupancy >> SLOT_COUNT != 0 {
            return None;
        }
        Some(Section((id << SLOT_COUNT) | occupancy))
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    pub const fn id(self) -> u16 {
        (self.0 & ID_MASK) >> SLOT_COUNT
    }

    pub const fn occupancy(self) -> Occupancy {
        match Occupancy::new(self.0 & OCCUPANCY_MASK) {
            Some(o) => o,
            None => Occupancy::EMPTY,
        }
    }

    pub const fn count(self) -> u32 {
        (self.0 & OCCUPANCY_MASK).count_ones()
    }

    pub const fn empty_slots(self) -> u32 {
        SLOT_COUNT - self.count()
    }

    pub const fn is_empty(self) -> bool {
        self.0 & OCCUPANCY_MASK == 0
    }

    pub const fn is_full(self) -> bool {
        self.0 & OCCUPANCY_MASK == OCCUPANCY_MASK
    }
}

impl From<u16> for Section {
    fn from(raw: u16) -> Self {
        Section(raw)
    }
}

impl From<Section> for u16 {
    fn from(s: Section) -> Self {
        s.0
    }
}
