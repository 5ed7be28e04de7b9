use crate::{AisleBitsError, SECTION_BITS, SECTIONS_PER_AISLE, SLOT_COUNT};

/// Position of a section inside an aisle word, 0 (least significant) to 3.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SectionIndex(pub usize);

impl From<SectionIndex> for BitIndex {
    #[inline]
    fn from(s: SectionIndex) -> Self {
        BitIndex(s.0 * SECTION_BITS as usize)
    }
}

/// Position of a slot inside a section's occupancy map, 0 to 9.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotIndex(pub usize);

/// Bit offset inside an aisle word.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BitIndex(pub usize);

impl BitIndex {
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }

    /// Offset of the first id bit of the section.
    #[inline]
    pub fn id_field(self) -> Self {
        BitIndex(self.0 + SLOT_COUNT as usize)
    }

    #[inline]
    pub fn slot(self, slot: SlotIndex) -> Self {
        BitIndex(self.0 + slot.0)
    }
}

/// Validates a raw section index for callers that cannot guarantee it.
pub fn checked_section_index(index: usize) -> Result<SectionIndex, AisleBitsError> {
    if index < SECTIONS_PER_AISLE {
        Ok(SectionIndex(index))
    } else {
        Err(AisleBitsError::IndexOutOfBounds {
            index,
            len: SECTIONS_PER_AISLE,
        })
    }
}

/// Validates a raw slot index for callers that cannot guarantee it.
pub fn checked_slot_index(slot: usize) -> Result<SlotIndex, AisleBitsError> {
    if slot < SLOT_COUNT as usize {
        Ok(SlotIndex(slot))
    } else {
        Err(AisleBitsError::IndexOutOfBounds {
            index: slot,
            len: SLOT_COUNT as usize,
        })
    }
}
