//! Integer output types.
//!
//! Every output type is mapped onto an order-preserving unsigned "key" in
//! `[0, 2^BITS)`: unsigned values are their own key and signed values flip
//! the sign bit, so `i8::MIN` maps to 0 and `i8::MAX` to 255. Range arithmetic
//! happens entirely on keys, which is how signed and unsigned types share one
//! code path and how a signed range spanning the whole type still fits in an
//! unsigned range maximum.

use std::fmt;

use bitrange_core::bits::{NativeWord, Word};
use bitrange_core::source::BitSource;

mod sealed {
    pub trait Sealed {}
}

/// An integer type the range mapping layer can produce.
///
/// Implemented for `u8`, `i8`, `u16`, `i16`, `u32`, `i32`, `u64` and `i64`.
/// Sealed: the key mapping is only correct for the primitive integers.
pub trait RangeInt:
    Copy + Ord + fmt::Debug + fmt::Display + Into<i128> + Send + Sync + 'static + sealed::Sealed
{
    /// Buffer word the strategies use for this type.
    ///
    /// [`NativeWord`] for types of 32 bits or fewer, always `u64` for the
    /// 64-bit types.
    type Word: Word;

    /// Width of the type in bits.
    const BITS: u8;

    /// Smallest value of the type.
    const MIN: Self;

    /// Largest value of the type.
    const MAX: Self;

    /// Largest key, `2^BITS - 1`.
    const KEY_MAX: u64 = u64::MAX >> (64 - Self::BITS as u32);

    /// Order-preserving unsigned key of `self`.
    fn to_key(self) -> u64;

    /// Inverse of [`to_key`](Self::to_key); `key` must not exceed `KEY_MAX`.
    fn from_key(key: u64) -> Self;

    /// One raw draw covering the whole type.
    ///
    /// Only meaningful for 32-bit and 64-bit types, which take exactly one
    /// `next_u32` or `next_u64` respectively.
    #[inline]
    fn draw_raw<S: BitSource + ?Sized>(source: &mut S) -> u64 {
        if Self::BITS == 64 {
            source.next_u64()
        } else {
            u64::from(source.next_u32()) & Self::KEY_MAX
        }
    }
}

macro_rules! impl_range_int_unsigned {
    ($($ty:ty => $word:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl RangeInt for $ty {
                type Word = $word;
                const BITS: u8 = <$ty>::BITS as u8;
                const MIN: Self = <$ty>::MIN;
                const MAX: Self = <$ty>::MAX;

                #[inline]
                fn to_key(self) -> u64 {
                    self as u64
                }

                #[inline]
                fn from_key(key: u64) -> Self {
                    key as $ty
                }
            }
        )*
    };
}

macro_rules! impl_range_int_signed {
    ($($ty:ty => $unsigned:ty, $word:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl RangeInt for $ty {
                type Word = $word;
                const BITS: u8 = <$ty>::BITS as u8;
                const MIN: Self = <$ty>::MIN;
                const MAX: Self = <$ty>::MAX;

                #[inline]
                fn to_key(self) -> u64 {
                    ((self as $unsigned) ^ (1 << (<$ty>::BITS - 1))) as u64
                }

                #[inline]
                fn from_key(key: u64) -> Self {
                    ((key as $unsigned) ^ (1 << (<$ty>::BITS - 1))) as $ty
                }
            }
        )*
    };
}

impl_range_int_unsigned!(
    u8 => NativeWord,
    u16 => NativeWord,
    u32 => NativeWord,
    u64 => u64,
);

impl_range_int_signed!(
    i8 => u8, NativeWord,
    i16 => u16, NativeWord,
    i32 => u32, NativeWord,
    i64 => u64, u64,
);
