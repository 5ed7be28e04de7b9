//! Field access on a single 64-bit word.

use crate::BitIndex;

#[inline(always)]
pub(crate) const fn field_mask(width: u32) -> u64 {
    if width >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

#[inline(always)]
pub(crate) fn get_bits(word: u64, offset: BitIndex, width: u32) -> u64 {
    debug_assert!(offset.get() + width as usize <= u64::BITS as usize);
    (word >> offset.get()) & field_mask(width)
}

/// Clears `width` bits at `offset` and writes the low `width` bits of `value`.
#[inline(always)]
pub(crate) fn set_bits(word: &mut u64, offset: BitIndex, width: u32, value: u64) {
    debug_assert!(offset.get() + width as usize <= u64::BITS as usize);
    let mask = field_mask(width);
    *word &= !(mask << offset.get());
    *word |= (value & mask) << offset.get();
}

/// Circular left rotation confined to the low `width` bits of `value`.
#[inline(always)]
pub(crate) fn rotate_left_within(value: u64, width: u32, n: u32) -> u64 {
    let mask = field_mask(width);
    let value = value & mask;
    let n = n % width;
    if n == 0 {
        return value;
    }
    ((value << n) | (value >> (width - n))) & mask
}

/// Clears the lowest set bit.
#[inline(always)]
pub(crate) fn clear_lowest(x: u16) -> u16 {
    x & x.wrapping_sub(1)
}

/// Isolates the lowest set bit.
#[inline(always)]
pub(crate) fn lowest(x: u16) -> u16 {
    x & x.wrapping_neg()
}
