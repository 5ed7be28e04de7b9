use aisle_bits::AisleBitsError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("item id {0} is outside 0..64")]
    InvalidItemId(u16),

    #[error("no section at aisle {aisle}, section {section}")]
    InvalidLocator { aisle: usize, section: usize },

    #[error("expected {expected} bytes of aisle data, found {found}")]
    ByteLength { expected: usize, found: usize },

    #[error("section codec error: {0}")]
    Codec(#[from] AisleBitsError),
}
