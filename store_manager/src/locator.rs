//! Addressing for a single section inside a store.

use crate::StoreError;
use aisle_bits::{SECTIONS_PER_AISLE, checked_section_index};
use std::fmt;

/// An (aisle, section) pair. Ordering follows address order: aisle first,
/// then section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SectionLocator {
    aisle: usize,
    section: usize,
}

impl SectionLocator {
    /// Section 0 of aisle 0.
    pub const ORIGIN: Self = SectionLocator {
        aisle: 0,
        section: 0,
    };

    pub(crate) const fn new(aisle: usize, section: usize) -> Self {
        Self { aisle, section }
    }

    /// Validates both indices against a store with `aisle_count` aisles.
    pub(crate) fn checked(aisle: usize, section: usize, aisle_count: usize) -> Result<Self, StoreError> {
        let invalid = StoreError::InvalidLocator { aisle, section };
        let index = checked_section_index(section).map_err(|_| invalid.clone())?;
        if aisle >= aisle_count {
            return Err(invalid);
        }
        Ok(Self::new(aisle, index.0))
    }

    pub fn aisle(&self) -> usize {
        self.aisle
    }

    pub fn section(&self) -> usize {
        self.section
    }

    /// Position in address order across the whole store.
    pub fn ordinal(&self) -> usize {
        self.aisle * SECTIONS_PER_AISLE + self.section
    }
}

impl fmt::Display for SectionLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Section(aisle={}, section={})", self.aisle, self.section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_bounds() {
        assert_eq!(
            SectionLocator::checked(9, 3, 10),
            Ok(SectionLocator::new(9, 3))
        );
        assert_eq!(
            SectionLocator::checked(10, 0, 10),
            Err(StoreError::InvalidLocator {
                aisle: 10,
                section: 0
            })
        );
        assert!(SectionLocator::checked(0, 4, 10).is_err());
    }

    #[test]
    fn test_address_order() {
        let a = SectionLocator::new(0, 3);
        let b = SectionLocator::new(1, 0);
        assert!(a < b);
        assert_eq!(a.ordinal() + 1, b.ordinal());
        assert_eq!(SectionLocator::ORIGIN.ordinal(), 0);
        assert_eq!(b.to_string(), "Section(aisle=1, section=0)");
    }
}
