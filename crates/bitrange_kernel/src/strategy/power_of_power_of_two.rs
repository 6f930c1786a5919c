//! Power-of-power-of-two strategy: the fast path.

use bitrange_core::bits::{NativeWord, Word};
use bitrange_core::source::BitSource;

use super::residual::ResidualBits;

/// Generator for ranges of `2^bit_count` values where `bit_count` is itself a
/// power of two (1, 2, 4, 8, 16, 32 or 64) no wider than the word.
///
/// The groups tile the word exactly: one draw yields `W::BITS / bit_count`
/// values with nothing rejected and nothing discarded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PowerOfPowerOfTwoRangeGenerator<W: Word = NativeWord> {
    bit_count: u8,
    bit_mask: W,
    residual: ResidualBits<W>,
}

impl<W: Word> PowerOfPowerOfTwoRangeGenerator<W> {
    /// Creates a generator for `[0, 2^bit_count)`.
    ///
    /// # Panics
    ///
    /// Panics if `bit_count` is not a power of two or is wider than the word.
    pub fn new(bit_count: u8) -> Self {
        assert!(
            bit_count.is_power_of_two() && bit_count <= W::BITS,
            "bit_count must be a power of two no wider than {}",
            W::BITS
        );
        Self {
            bit_count,
            bit_mask: W::max_value().shr_or_zero(W::BITS - bit_count),
            residual: ResidualBits::empty(),
        }
    }

    /// Bits consumed per value.
    #[inline]
    pub fn bit_count(&self) -> u8 {
        self.bit_count
    }

    /// Largest value this generator returns (`2^bit_count - 1`).
    #[inline]
    pub fn range_max(&self) -> W {
        self.bit_mask
    }

    /// Values produced per drawn word.
    #[inline]
    pub fn values_per_word(&self) -> u8 {
        W::BITS / self.bit_count
    }

    /// Draws the next value in `[0, 2^bit_count)`.
    #[inline]
    pub fn next<S: BitSource + ?Sized>(&mut self, source: &mut S) -> W {
        self.residual
            .take_aligned(source, self.bit_count, self.bit_mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitrange_core::source::{CountingSource, XorShift128Plus};

    #[test]
    fn test_values_per_word() {
        let expected = [(1u8, 64u8), (2, 32), (4, 16), (8, 8), (16, 4), (32, 2), (64, 1)];
        for (bit_count, per_word) in expected {
            let generator = PowerOfPowerOfTwoRangeGenerator::<u64>::new(bit_count);
            assert_eq!(generator.values_per_word(), per_word);
        }
    }

    #[test]
    #[should_panic(expected = "bit_count must be a power of two")]
    fn test_non_power_bit_count_panics() {
        let _ = PowerOfPowerOfTwoRangeGenerator::<u64>::new(6);
    }

    #[test]
    #[should_panic(expected = "no wider than 32")]
    fn test_too_wide_for_narrow_word_panics() {
        let _ = PowerOfPowerOfTwoRangeGenerator::<u32>::new(64);
    }

    #[test]
    fn test_no_bits_wasted() {
        for bit_count in [1u8, 2, 4, 8, 16, 32] {
            let mut source = CountingSource::new(XorShift128Plus::new(bit_count as u64));
            let mut generator = PowerOfPowerOfTwoRangeGenerator::<u64>::new(bit_count);
            let values = generator.values_per_word() as u64 * 25;
            for _ in 0..values {
                assert!(generator.next(&mut source) <= generator.range_max());
            }
            assert_eq!(source.bits_drawn(), values * bit_count as u64);
        }
    }

    #[test]
    fn test_coin_flips_balanced() {
        let mut source = XorShift128Plus::new(2024);
        let mut generator = PowerOfPowerOfTwoRangeGenerator::<u32>::new(1);
        let heads: u32 = (0..100_000).map(|_| generator.next(&mut source)).sum();
        assert!((49_000..51_000).contains(&heads), "heads {}", heads);
    }
}
