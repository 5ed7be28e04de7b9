//! # aisle_bits
//!
//! A `no_std` compatible codec for store aisles packed into 64-bit words.
//!
//! An aisle holds four 16-bit sections. Each section keeps a 6-bit item id in
//! its high bits and a 10-bit occupancy map in its low bits.
//!
//! ```rust
//! use aisle_bits::Aisle;
//!
//! let mut aisle = Aisle::EMPTY;
//! aisle.set_id(2, 0b011001);
//! aisle.set_occupancy(2, 0b01_0001_1010);
//!
//! assert_eq!(aisle.section(2).raw(), 0x651A);
//! assert_eq!(aisle.count_items(2), 4);
//!
//! aisle.add_items(2, 3);
//! assert_eq!(aisle.occupancy(2), 0b01_0011_1111);
//! ```
//!
//! ## Silent rejection
//!
//! ```rust
//! use aisle_bits::Aisle;
//!
//! let mut aisle = Aisle::new(0x0000_0000_0000_0155);
//!
//! // bit 10 lies outside the occupancy field, so nothing is written
//! assert!(!aisle.set_occupancy(0, 0x0400));
//! assert_eq!(aisle.raw(), 0x0155);
//! ```
//!

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub use error::AisleBitsError;

mod bit_ops;

pub mod aisle;
pub mod codec;
pub mod index;
pub mod occupancy;
pub mod section;

pub use aisle::Aisle;
pub use index::{BitIndex, SectionIndex, SlotIndex, checked_section_index, checked_slot_index};
pub use occupancy::{Occupancy, SlotsIter};
pub use section::Section;

/// Total bits in a section.
pub const SECTION_BITS: u32 = 16;

/// Bits of a section used for item slots.
pub const SLOT_COUNT: u32 = 10;

/// Bits of a section used for the item id.
pub const ID_BITS: u32 = 6;

/// Sections packed into one aisle word.
pub const SECTIONS_PER_AISLE: usize = 4;

/// Distinct item ids (2^6).
pub const ITEM_ID_COUNT: usize = 1 << ID_BITS;

/// Keeps one section's worth of bits at the low end of a word.
pub const SECTION_MASK: u16 = 0xFFFF;

/// Keeps the occupancy bits of a section.
pub const OCCUPANCY_MASK: u16 = 0x03FF;

/// Keeps the id bits of a section.
pub const ID_MASK: u16 = 0xFC00;
