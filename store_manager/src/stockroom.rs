//! Reserve counts per item id, held outside any aisle.

use aisle_bits::ITEM_ID_COUNT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stockroom {
    counts: [u32; ITEM_ID_COUNT],
}

impl Default for Stockroom {
    fn default() -> Self {
        Self::new()
    }
}

impl Stockroom {
    pub const fn new() -> Self {
        Self {
            counts: [0; ITEM_ID_COUNT],
        }
    }

    pub const fn from_counts(counts: [u32; ITEM_ID_COUNT]) -> Self {
        Self { counts }
    }

    /// Units held for `id`. Ids past 63 hold nothing.
    pub fn get(&self, id: u16) -> u32 {
        self.counts.get(id as usize).copied().unwrap_or(0)
    }

    /// Overwrites the count for `id`. Ids past 63 are ignored.
    pub fn set(&mut self, id: u16, n: u32) {
        if let Some(count) = self.counts.get_mut(id as usize) {
            *count = n;
        }
    }

    /// Adds `n` units of `id`, saturating at `u32::MAX`.
    pub fn add(&mut self, id: u16, n: u32) {
        if let Some(count) = self.counts.get_mut(id as usize) {
            *count = count.saturating_add(n);
        }
    }

    /// Removes up to `n` units of `id` and returns how many were removed.
    pub fn take(&mut self, id: u16, n: u32) -> u32 {
        match self.counts.get_mut(id as usize) {
            Some(count) => {
                let taken = (*count).min(n);
                *count -= taken;
                taken
            }
            None => 0,
        }
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// `(id, count)` pairs for every id, ascending.
    pub fn iter(&self) -> impl Iterator<Item = (u16, u32)> + '_ {
        self.counts.iter().enumerate().map(|(id, &c)| (id as u16, c))
    }

    pub fn counts(&self) -> &[u32; ITEM_ID_COUNT] {
        &self.counts
    }
}
