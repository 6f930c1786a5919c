//! Power-of-two strategy: every candidate is accepted.

use bitrange_core::bits::{NativeWord, Word};
use bitrange_core::source::BitSource;

use super::residual::ResidualBits;

/// Generator for ranges of exactly `2^bit_count` values.
///
/// No rejection is needed because the mask and the range maximum coincide.
/// When `bit_count` does not divide the word width (3, 5, 6, 7, ... bits) the
/// leftover `W::BITS % bit_count` bits of each refill are discarded.
///
/// # Examples
///
/// ```rust
/// use bitrange_core::source::SplitMix64;
/// use bitrange_kernel::strategy::PowerOfTwoRangeGenerator;
///
/// let mut source = SplitMix64::new(7);
/// let mut generator = PowerOfTwoRangeGenerator::<u64>::new(3);
/// assert_eq!(generator.range_max(), 7);
/// assert_eq!(generator.excess_bits(), 1);
/// assert!(generator.next(&mut source) < 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PowerOfTwoRangeGenerator<W: Word = NativeWord> {
    bit_count: u8,
    excess_bits: u8,
    bit_mask: W,
    residual: ResidualBits<W>,
}

impl<W: Word> PowerOfTwoRangeGenerator<W> {
    /// Creates a generator for `[0, 2^bit_count)`.
    ///
    /// # Panics
    ///
    /// Panics if `bit_count` is zero or wider than the word.
    pub fn new(bit_count: u8) -> Self {
        assert!(
            (1..=W::BITS).contains(&bit_count),
            "bit_count must be in 1..={}",
            W::BITS
        );
        Self {
            bit_count,
            excess_bits: W::BITS % bit_count,
            bit_mask: W::max_value().shr_or_zero(W::BITS - bit_count),
            residual: ResidualBits::empty(),
        }
    }

    /// Bits consumed per value.
    #[inline]
    pub fn bit_count(&self) -> u8 {
        self.bit_count
    }

    /// Bits discarded from each refill word.
    #[inline]
    pub fn excess_bits(&self) -> u8 {
        self.excess_bits
    }

    /// Largest value this generator returns (`2^bit_count - 1`).
    #[inline]
    pub fn range_max(&self) -> W {
        self.bit_mask
    }

    /// Draws the next value in `[0, 2^bit_count)`.
    #[inline]
    pub fn next<S: BitSource + ?Sized>(&mut self, source: &mut S) -> W {
        self.residual
            .take(source, self.bit_count, self.bit_mask, self.excess_bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitrange_core::source::{CountingSource, SplitMix64};

    #[test]
    fn test_masks() {
        assert_eq!(PowerOfTwoRangeGenerator::<u64>::new(1).range_max(), 1);
        assert_eq!(PowerOfTwoRangeGenerator::<u64>::new(7).range_max(), 127);
        assert_eq!(PowerOfTwoRangeGenerator::<u64>::new(64).range_max(), u64::MAX);
        assert_eq!(PowerOfTwoRangeGenerator::<u32>::new(32).range_max(), u32::MAX);
        assert_eq!(PowerOfTwoRangeGenerator::<u32>::new(5).excess_bits(), 2);
    }

    #[test]
    #[should_panic(expected = "bit_count must be in 1..=32")]
    fn test_too_wide_panics() {
        let _ = PowerOfTwoRangeGenerator::<u32>::new(33);
    }

    #[test]
    #[should_panic(expected = "bit_count must be in 1..=64")]
    fn test_zero_width_panics() {
        let _ = PowerOfTwoRangeGenerator::<u64>::new(0);
    }

    #[test]
    fn test_draw_economy_five_bits() {
        // 64-bit words carry 12 five-bit groups.
        let mut source = CountingSource::new(SplitMix64::new(1));
        let mut generator = PowerOfTwoRangeGenerator::<u64>::new(5);
        for _ in 0..120 {
            assert!(generator.next(&mut source) < 32);
        }
        assert_eq!(source.draws_u64(), 10);
    }

    #[test]
    fn test_draw_economy_five_bits_narrow_word() {
        // 32-bit words carry 6 five-bit groups.
        let mut source = CountingSource::new(SplitMix64::new(1));
        let mut generator = PowerOfTwoRangeGenerator::<u32>::new(5);
        for _ in 0..60 {
            assert!(generator.next(&mut source) < 32);
        }
        assert_eq!(source.draws_u32(), 10);
        assert_eq!(source.draws_u64(), 0);
    }
}
