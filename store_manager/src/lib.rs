//! In-memory inventory for a small store, kept as packed aisle words.
//!
//! A [`Store`] owns a fixed row of [`Aisle`](aisle_bits::Aisle) words plus a
//! [`Stockroom`] of reserve counts, and implements the cross-aisle operations
//! (refill, order fulfilment, section queries) on top of the `aisle_bits`
//! codec.
//!
//! ```rust
//! use store_manager::Store;
//!
//! let mut store = Store::new();
//! let loc = store.locate(0, 0).unwrap();
//! store.assign_id(loc, 5).unwrap();
//! store.stockroom_mut().set(5, 3);
//!
//! store.refill_from_stockroom();
//! assert_eq!(store.section_at(loc).occupancy().bits(), 0b111);
//! assert_eq!(store.stockroom().get(5), 0);
//!
//! assert_eq!(store.fulfill_order(5, 2), 2);
//! assert_eq!(store.section_at(loc).count(), 1);
//! ```

pub mod error;
pub mod locator;
pub mod stockroom;
pub mod store;

pub use aisle_bits;
pub use error::StoreError;
pub use locator::SectionLocator;
pub use stockroom::Stockroom;
pub use store::{FullestSection, NUM_AISLES, RefillReport, Sections, Store};
