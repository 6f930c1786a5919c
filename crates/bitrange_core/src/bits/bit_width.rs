//! Bit width lookup.
//!
//! Given a maximum value, computes the smallest bit count and the matching
//! all-ones mask that can represent it, in O(1) and without a loop or a
//! hardware bit-scan instruction.
//!
//! # Algorithm
//!
//! 1. "Smear" the value: OR it with right-shifted copies of itself
//!    (by 1, 2, 4, 8, 16, 32) so every bit below the highest set bit is 1.
//!    The result is the bit mask.
//! 2. Isolate the top bit of the mask (`mask ^ (mask >> 1)`), multiply it by a
//!    de Bruijn constant and keep the top 5 (or 6) bits. That index is unique
//!    per bit position and selects the position from a 32 (or 64) entry table.
//! 3. The bit count is the position plus the mask's lowest bit, which makes
//!    a zero mask map to a zero bit count with no branch.
//!
//! The lookup tables are built at compile time from the de Bruijn constants.

/// de Bruijn sequence B(2, 5) used for 32-bit lookups.
pub const DE_BRUIJN_32: u32 = 0x077C_B531;

/// de Bruijn sequence B(2, 6) used for 64-bit lookups.
pub const DE_BRUIJN_64: u64 = 0x03F7_9D71_B4CB_0A89;

const LOG2_TABLE_32: [u8; 32] = build_log2_table_32();
const LOG2_TABLE_64: [u8; 64] = build_log2_table_64();

const fn build_log2_table_32() -> [u8; 32] {
    let mut table = [0u8; 32];
    let mut position = 0;
    while position < 32 {
        let index = ((1u32 << position).wrapping_mul(DE_BRUIJN_32) >> 27) as usize;
        table[index] = position as u8;
        position += 1;
    }
    table
}

const fn build_log2_table_64() -> [u8; 64] {
    let mut table = [0u8; 64];
    let mut position = 0;
    while position < 64 {
        let index = ((1u64 << position).wrapping_mul(DE_BRUIJN_64) >> 58) as usize;
        table[index] = position as u8;
        position += 1;
    }
    table
}

/// Sets every bit below the highest set bit of `value`.
///
/// # Examples
///
/// ```
/// use bitrange_core::bits::smear_u32;
///
/// assert_eq!(smear_u32(0b1001_0000), 0b1111_1111);
/// assert_eq!(smear_u32(0), 0);
/// ```
#[inline]
pub const fn smear_u32(mut value: u32) -> u32 {
    value |= value >> 1;
    value |= value >> 2;
    value |= value >> 4;
    value |= value >> 8;
    value |= value >> 16;
    value
}

/// Sets every bit below the highest set bit of `value`.
#[inline]
pub const fn smear_u64(mut value: u64) -> u64 {
    value |= value >> 1;
    value |= value >> 2;
    value |= value >> 4;
    value |= value >> 8;
    value |= value >> 16;
    value |= value >> 32;
    value
}

/// Returns `(bit_count, bit_mask)` for the inclusive maximum `range_max`.
///
/// `bit_mask` is the smallest all-ones mask with `bit_mask >= range_max`
/// and `bit_count` is the number of ones in it. A `range_max` of zero
/// yields `(0, 0)`: a single-value range never needs a draw.
///
/// # Examples
///
/// ```
/// use bitrange_core::bits::bit_count_and_mask_u32;
///
/// assert_eq!(bit_count_and_mask_u32(1), (1, 0b1));
/// assert_eq!(bit_count_and_mask_u32(5), (3, 0b111));
/// assert_eq!(bit_count_and_mask_u32(u32::MAX), (32, u32::MAX));
/// ```
#[inline]
pub const fn bit_count_and_mask_u32(range_max: u32) -> (u8, u32) {
    let bit_mask = smear_u32(range_max);
    let top_bit = bit_mask ^ (bit_mask >> 1);
    let index = (top_bit.wrapping_mul(DE_BRUIJN_32) >> 27) as usize;
    (LOG2_TABLE_32[index] + (bit_mask & 1) as u8, bit_mask)
}

/// Returns `(bit_count, bit_mask)` for the inclusive maximum `range_max`.
///
/// See [`bit_count_and_mask_u32`]; this variant indexes the 64-entry table.
#[inline]
pub const fn bit_count_and_mask_u64(range_max: u64) -> (u8, u64) {
    let bit_mask = smear_u64(range_max);
    let top_bit = bit_mask ^ (bit_mask >> 1);
    let index = (top_bit.wrapping_mul(DE_BRUIJN_64) >> 58) as usize;
    (LOG2_TABLE_64[index] + (bit_mask & 1) as u8, bit_mask)
}

/// Returns `(bit_count, bit_mask)` for an 8-bit `range_max`.
#[inline]
pub const fn bit_count_and_mask_u8(range_max: u8) -> (u8, u8) {
    let (bit_count, bit_mask) = bit_count_and_mask_u32(range_max as u32);
    (bit_count, bit_mask as u8)
}

/// Returns `(bit_count, bit_mask)` for a 16-bit `range_max`.
#[inline]
pub const fn bit_count_and_mask_u16(range_max: u16) -> (u8, u16) {
    let (bit_count, bit_mask) = bit_count_and_mask_u32(range_max as u32);
    (bit_count, bit_mask as u16)
}

/// Returns whether `range_size` is a power of two.
///
/// Compares `range_size - 1` against its own smear. A `range_size` of zero
/// stands for the wrapped full range `2^32` and is a power of two.
#[inline]
pub const fn is_power_of_two_u32(range_size: u32) -> bool {
    let range_max = range_size.wrapping_sub(1);
    smear_u32(range_max) == range_max
}

/// Returns whether `range_size` is a power of two.
///
/// A `range_size` of zero stands for the wrapped full range `2^64`.
///
/// # Examples
///
/// ```
/// use bitrange_core::bits::is_power_of_two_u64;
///
/// assert!(is_power_of_two_u64(1));
/// assert!(is_power_of_two_u64(1 << 40));
/// assert!(is_power_of_two_u64(0));
/// assert!(!is_power_of_two_u64(1429));
/// ```
#[inline]
pub const fn is_power_of_two_u64(range_size: u64) -> bool {
    let range_max = range_size.wrapping_sub(1);
    smear_u64(range_max) == range_max
}

/// Bit width lookup for every unsigned integer width.
///
/// Signed ranges use the unsigned equivalent of their range maximum.
pub trait BitWidth: Copy {
    /// Returns `(bit_count, bit_mask)` for `self` as an inclusive maximum.
    fn bit_count_and_mask(self) -> (u8, Self);
}

macro_rules! impl_bit_width {
    ($($ty:ty => $lookup:ident),* $(,)?) => {
        $(
            impl BitWidth for $ty {
                #[inline]
                fn bit_count_and_mask(self) -> (u8, Self) {
                    $lookup(self)
                }
            }
        )*
    };
}

impl_bit_width!(
    u8 => bit_count_and_mask_u8,
    u16 => bit_count_and_mask_u16,
    u32 => bit_count_and_mask_u32,
    u64 => bit_count_and_mask_u64,
);
