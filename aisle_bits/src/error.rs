#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AisleBitsError {
    #[cfg_attr(feature = "std", error("Value {value:#x} does not fit in {bits} bits"))]
    ValueOverflow { value: u16, bits: u32 },

    #[cfg_attr(feature = "std", error("Index {index} is out of bounds for length {len}"))]
    IndexOutOfBounds { index: usize, len: usize },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for AisleBitsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AisleBitsError::ValueOverflow { value, bits } => {
                write!(f, "Value {:#x} does not fit in {} bits", value, bits)
            }
            AisleBitsError::IndexOutOfBounds { index, len } => {
                write!(f, "Index {} is out of bounds for length {}", index, len)
            }
        }
    }
}
