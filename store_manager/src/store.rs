//! The store: a fixed row of aisles plus the stockroom.
//!
//! Address order is aisle 0 section 0, aisle 0 section 1, ... , aisle N-1
//! section 3. Every scan below walks in that order, so it also decides every
//! tie.
//!
//! All mutation goes through `&mut Store`; there is no interior locking. An
//! embedder sharing a store across threads wraps the whole value in one lock.

use crate::{SectionLocator, Stockroom, StoreError};
use aisle_bits::{Aisle, ITEM_ID_COUNT, SECTIONS_PER_AISLE, SLOT_COUNT, Section};
use tracing::{debug, trace};

/// Aisles in a default store.
pub const NUM_AISLES: usize = 10;

/// What one refill pass moved out of the stockroom.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefillReport {
    pub units_moved: u32,
    pub sections_touched: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullestSection {
    pub locator: SectionLocator,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store<const AISLES: usize = NUM_AISLES> {
    aisles: [Aisle; AISLES],
    stockroom: Stockroom,
}

impl Store {
    /// A ten-aisle store with every word and every stock count at zero.
    pub fn new() -> Self {
        Self::empty()
    }
}

impl<const AISLES: usize> Default for Store<AISLES> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<const AISLES: usize> Store<AISLES> {
    pub fn empty() -> Self {
        const { assert!(AISLES > 0, "a store needs at least one aisle") };
        Self {
            aisles: [Aisle::EMPTY; AISLES],
            stockroom: Stockroom::new(),
        }
    }

    pub fn from_aisles(words: [u64; AISLES]) -> Self {
        let mut store = Self::empty();
        store.aisles = words.map(Aisle::new);
        store
    }

    pub fn with_stockroom(mut self, stockroom: Stockroom) -> Self {
        self.stockroom = stockroom;
        self
    }

    pub const fn aisle_count(&self) -> usize {
        AISLES
    }

    pub fn aisles(&self) -> &[Aisle; AISLES] {
        &self.aisles
    }

    pub fn aisle(&self, index: usize) -> Option<Aisle> {
        self.aisles.get(index).copied()
    }

    pub fn aisle_mut(&mut self, index: usize) -> Option<&mut Aisle> {
        self.aisles.get_mut(index)
    }

    pub fn stockroom(&self) -> &Stockroom {
        &self.stockroom
    }

    pub fn stockroom_mut(&mut self) -> &mut Stockroom {
        &mut self.stockroom
    }

    /// Checks raw indices and returns a locator for this store.
    pub fn locate(&self, aisle: usize, section: usize) -> Result<SectionLocator, StoreError> {
        SectionLocator::checked(aisle, section, AISLES)
    }

    /// Reads the section behind `loc`.
    ///
    /// # Panics
    ///
    /// Panics if `loc` was built for a store with more aisles.
    pub fn section_at(&self, loc: SectionLocator) -> Section {
        self.aisles[loc.aisle()].section(loc.section())
    }

    /// Overwrites the section behind `loc`.
    pub fn set_section_at(&mut self, loc: SectionLocator, section: Section) {
        self.aisles[loc.aisle()].set_section(loc.section(), section);
    }

    /// Sets the item id of a section, keeping its occupancy.
    pub fn assign_id(&mut self, loc: SectionLocator, id: u16) -> Result<(), StoreError> {
        self.aisles[loc.aisle()]
            .try_set_id(loc.section(), id)
            .map_err(|e| {
                debug!(%loc, id, "rejected item id");
                StoreError::from(e)
            })
    }

    /// Sets the occupancy map of a section, keeping its id.
    pub fn set_occupancy_at(&mut self, loc: SectionLocator, occupancy: u16) -> Result<(), StoreError> {
        self.aisles[loc.aisle()]
            .try_set_occupancy(loc.section(), occupancy)
            .map_err(|e| {
                debug!(%loc, occupancy, "rejected occupancy map");
                StoreError::from(e)
            })
    }

    /// Every section with its locator, in address order.
    pub fn sections(&self) -> Sections<'_, AISLES> {
        Sections {
            store: self,
            next: 0,
        }
    }

    /// Units of `id` currently sitting in sections.
    pub fn items_on_shelves(&self, id: u16) -> u32 {
        self.sections()
            .filter(|(_, s)| s.id() == id)
            .map(|(_, s)| s.count())
            .sum()
    }

    /// Moves stock into matching sections in address order. Each section is
    /// filled as far as the stock allows before the next one is considered.
    pub fn refill_from_stockroom(&mut self) -> RefillReport {
        let mut report = RefillReport::default();

        for (a, aisle) in self.aisles.iter_mut().enumerate() {
            for s in 0..SECTIONS_PER_AISLE {
                let id = aisle.id(s);
                let room = SLOT_COUNT - aisle.count_items(s);
                if room == 0 || self.stockroom.get(id) == 0 {
                    continue;
                }

                let moved = self.stockroom.take(id, room);
                aisle.add_items(s, moved);
                trace!(aisle = a, section = s, id, moved, "refilled section");

                report.units_moved += moved;
                report.sections_touched += 1;
            }
        }

        debug!(
            units = report.units_moved,
            sections = report.sections_touched,
            "refill from stockroom"
        );
        report
    }

    /// Removes up to `n` units of `id` and returns how many were removed.
    ///
    /// Shelves are drained in address order first. Whatever is still missing
    /// comes out of the stockroom. A short supply is not an error: the return
    /// value is simply less than `n`.
    pub fn fulfill_order(&mut self, id: u16, n: u32) -> u32 {
        let mut remaining = n;

        'aisles: for (a, aisle) in self.aisles.iter_mut().enumerate() {
            for s in 0..SECTIONS_PER_AISLE {
                if remaining == 0 {
                    break 'aisles;
                }
                if aisle.id(s) != id {
                    continue;
                }

                let take = aisle.count_items(s).min(remaining);
                if take == 0 {
                    continue;
                }
                aisle.remove_items(s, take);
                remaining -= take;
                trace!(aisle = a, section = s, id, take, "picked from section");
            }
        }

        let from_shelves = n - remaining;
        let from_stockroom = self.stockroom.take(id, remaining);

        debug!(id, requested = n, from_shelves, from_stockroom, "fulfilled order");
        from_shelves + from_stockroom
    }

    /// [`fulfill_order`](Self::fulfill_order) that refuses ids no section can
    /// hold.
    pub fn try_fulfill_order(&mut self, id: u16, n: u32) -> Result<u32, StoreError> {
        if id as usize >= ITEM_ID_COUNT {
            debug!(id, "order for unknown item id");
            return Err(StoreError::InvalidItemId(id));
        }
        Ok(self.fulfill_order(id, n))
    }

    /// First section holding `id` with no items in it. The stockroom is not
    /// consulted.
    pub fn find_empty_section(&self, id: u16) -> Option<SectionLocator> {
        self.sections()
            .find(|(_, s)| s.id() == id && s.is_empty())
            .map(|(loc, _)| loc)
    }

    /// Section with the most items, any id. The earliest section wins a tie,
    /// so an empty store reports aisle 0 section 0 with a count of 0.
    pub fn find_fullest_section(&self) -> FullestSection {
        let origin = SectionLocator::ORIGIN;
        let mut best = FullestSection {
            locator: origin,
            count: self.section_at(origin).count(),
        };

        for (loc, s) in self.sections() {
            if s.count() > best.count {
                best = FullestSection {
                    locator: loc,
                    count: s.count(),
                };
            }
        }
        best
    }

    /// Native-endian bytes of the aisle words. The stockroom is not included.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice::<Aisle, u8>(&self.aisles[..])
    }

    /// Rebuilds the aisles from [`as_bytes`](Self::as_bytes) output. The
    /// stockroom starts empty.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StoreError> {
        let expected = AISLES * size_of::<Aisle>();
        if bytes.len() != expected {
            return Err(StoreError::ByteLength {
                expected,
                found: bytes.len(),
            });
        }

        let mut store = Self::empty();
        bytemuck::cast_slice_mut::<Aisle, u8>(&mut store.aisles[..]).copy_from_slice(bytes);
        Ok(store)
    }
}

pub struct Sections<'a, const AISLES: usize> {
    store: &'a Store<AISLES>,
    next: usize,
}

impl<'a, const AISLES: usize> Iterator for Sections<'a, AISLES> {
    type Item = (SectionLocator, Section);
    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= AISLES * SECTIONS_PER_AISLE {
            None
        } else {
            let loc = SectionLocator::new(
                self.next / SECTIONS_PER_AISLE,
                self.next % SECTIONS_PER_AISLE,
            );
            self.next += 1;
            Some((loc, self.store.section_at(loc)))
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = AISLES * SECTIONS_PER_AISLE - self.next;
        (remaining, Some(remaining))
    }
}

impl<'a, const AISLES: usize> ExactSizeIterator for Sections<'a, AISLES> {}

impl<'a, const AISLES: usize> IntoIterator for &'a Store<AISLES> {
    type Item = (SectionLocator, Section);
    type IntoIter = Sections<'a, AISLES>;
    fn into_iter(self) -> Self::IntoIter {
        self.sections()
    }
}
