//! Buffer words.
//!
//! The residual bit buffer of every strategy is one unsigned machine word.
//! [`Word`] abstracts over the two widths the engine supports so that the
//! 32-bit and 64-bit code paths are distinct, statically selected types
//! rather than a runtime branch.
//!
//! [`NativeWord`] is the word used for outputs of 32 bits or fewer. It is
//! `u64` by default and `u32` when the `word32` feature is enabled. The two
//! modes consume the bit source differently and are not expected to produce
//! the same sequences; only determinism within one mode is guaranteed.

use std::fmt;

use num_traits::{AsPrimitive, CheckedShl, CheckedShr, PrimInt, Unsigned};

use super::bit_width::BitWidth;
use crate::source::BitSource;

/// An unsigned word the residual bit buffer is held in.
pub trait Word:
    PrimInt
    + Unsigned
    + CheckedShl
    + CheckedShr
    + BitWidth
    + AsPrimitive<u64>
    + Default
    + fmt::Debug
    + fmt::LowerHex
    + Send
    + Sync
    + 'static
{
    /// Width of the word in bits.
    const BITS: u8;

    /// Draws one full word from the bit source.
    fn draw<S: BitSource + ?Sized>(source: &mut S) -> Self;

    /// Truncates a 64-bit value to this word.
    fn truncate_from(value: u64) -> Self;

    /// Right shift that yields zero when `shift >= Self::BITS`.
    #[inline]
    fn shr_or_zero(self, shift: u8) -> Self {
        self.checked_shr(u32::from(shift))
            .unwrap_or_else(Self::zero)
    }

    /// A word with only bit `position` set, or zero past the top bit.
    #[inline]
    fn bit(position: u8) -> Self {
        Self::one()
            .checked_shl(u32::from(position))
            .unwrap_or_else(Self::zero)
    }
}

impl Word for u32 {
    const BITS: u8 = 32;

    #[inline]
    fn draw<S: BitSource + ?Sized>(source: &mut S) -> Self {
        source.next_u32()
    }

    #[inline]
    fn truncate_from(value: u64) -> Self {
        value as u32
    }
}

impl Word for u64 {
    const BITS: u8 = 64;

    #[inline]
    fn draw<S: BitSource + ?Sized>(source: &mut S) -> Self {
        source.next_u64()
    }

    #[inline]
    fn truncate_from(value: u64) -> Self {
        value
    }
}

/// Buffer word used for outputs of 32 bits or fewer.
#[cfg(feature = "word32")]
pub type NativeWord = u32;

/// Buffer word used for outputs of 32 bits or fewer.
#[cfg(not(feature = "word32"))]
pub type NativeWord = u64;

/// Which buffer width a build uses for outputs of 32 bits or fewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WordMode {
    /// 32-bit buffer words, drawn with `next_u32`.
    Word32,
    /// 64-bit buffer words, drawn with `next_u64`.
    Word64,
}

impl WordMode {
    /// Width of the buffer word in bits.
    #[inline]
    pub const fn bits(self) -> u8 {
        match self {
            WordMode::Word32 => 32,
            WordMode::Word64 => 64,
        }
    }
}

impl fmt::Display for WordMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// The mode this build was compiled in.
#[cfg(feature = "word32")]
pub const WORD_MODE: WordMode = WordMode::Word32;

/// The mode this build was compiled in.
#[cfg(not(feature = "word32"))]
pub const WORD_MODE: WordMode = WordMode::Word64;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SplitMix64;

    #[test]
    fn test_shr_or_zero_saturates() {
        assert_eq!(0xF0u32.shr_or_zero(4), 0x0F);
        assert_eq!(u32::MAX.shr_or_zero(32), 0);
        assert_eq!(u64::MAX.shr_or_zero(64), 0);
        assert_eq!(u64::MAX.shr_or_zero(0), u64::MAX);
    }

    #[test]
    fn test_bit_positions() {
        assert_eq!(<u32 as Word>::bit(0), 1);
        assert_eq!(<u32 as Word>::bit(31), 1 << 31);
        assert_eq!(<u32 as Word>::bit(32), 0);
        assert_eq!(<u64 as Word>::bit(63), 1 << 63);
        assert_eq!(<u64 as Word>::bit(64), 0);
    }

    #[test]
    fn test_draw_uses_matching_width() {
        let mut a = SplitMix64::new(7);
        let mut b = SplitMix64::new(7);
        assert_eq!(<u64 as Word>::draw(&mut a), b.next_u64());
        assert_eq!(<u32 as Word>::draw(&mut a), b.next_u32());
    }

    #[test]
    fn test_native_word_matches_mode() {
        assert_eq!(<NativeWord as Word>::BITS, WORD_MODE.bits());
        assert_eq!(WORD_MODE.to_string(), format!("{}-bit", WORD_MODE.bits()));
    }
}
