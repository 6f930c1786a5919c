//! Any-range strategy: rejection sampling against a covering mask.

use bitrange_core::bits::{NativeWord, Word};
use bitrange_core::source::BitSource;

use super::residual::ResidualBits;

/// Iterations after which the rejection loop is declared corrupt.
///
/// With an acceptance probability above one half, reaching this bound by
/// chance has probability below `2^-1048576`. Checked in debug builds only.
pub const REJECTION_GUARD_LIMIT: u64 = 1 << 20;

/// Generator for ranges whose size is not a power of two.
///
/// Each candidate is the next `bit_count`-bit group from the residual
/// buffer; candidates above `range_max` are discarded and redrawn. Because
/// `bit_mask` is the smallest all-ones mask covering `range_max`, more than
/// half of all candidates are accepted and the expected number of groups per
/// value is below two.
///
/// # Examples
///
/// ```rust
/// use bitrange_core::source::SplitMix64;
/// use bitrange_kernel::strategy::AnyRangeGenerator;
///
/// let mut source = SplitMix64::new(42);
/// let mut generator = AnyRangeGenerator::<u64>::new(1428);
/// assert_eq!(generator.bit_count(), 11);
/// assert_eq!(generator.excess_bits(), 9);
///
/// for _ in 0..1000 {
///     assert!(generator.next(&mut source) <= 1428);
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnyRangeGenerator<W: Word = NativeWord> {
    bit_count: u8,
    excess_bits: u8,
    bit_mask: W,
    range_max: W,
    residual: ResidualBits<W>,
}

impl<W: Word> AnyRangeGenerator<W> {
    /// Creates a generator for `[0, range_max]`.
    ///
    /// # Panics
    ///
    /// Panics if `range_max` is zero; a single-value range needs no generator.
    pub fn new(range_max: W) -> Self {
        assert!(range_max > W::zero(), "range_max must be non-zero");
        let (bit_count, bit_mask) = range_max.bit_count_and_mask();
        Self {
            bit_count,
            excess_bits: W::BITS % bit_count,
            bit_mask,
            range_max,
            residual: ResidualBits::empty(),
        }
    }

    /// Bits consumed per candidate.
    #[inline]
    pub fn bit_count(&self) -> u8 {
        self.bit_count
    }

    /// Mask isolating one candidate.
    #[inline]
    pub fn bit_mask(&self) -> W {
        self.bit_mask
    }

    /// Bits discarded from each refill word.
    #[inline]
    pub fn excess_bits(&self) -> u8 {
        self.excess_bits
    }

    /// Largest value this generator returns.
    #[inline]
    pub fn range_max(&self) -> W {
        self.range_max
    }

    /// Draws the next value in `[0, range_max]`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics with
    /// [`RangeError::CorruptGeneratorState`](bitrange_core::types::RangeError::CorruptGeneratorState) if
    /// [`REJECTION_GUARD_LIMIT`] consecutive candidates are rejected.
    #[inline]
    pub fn next<S: BitSource + ?Sized>(&mut self, source: &mut S) -> W {
        #[cfg(debug_assertions)]
        let mut iterations: u64 = 0;

        loop {
            let candidate =
                self.residual
                    .take(source, self.bit_count, self.bit_mask, self.excess_bits);
            if candidate <= self.range_max {
                return candidate;
            }

            #[cfg(debug_assertions)]
            {
                iterations += 1;
                if iterations >= REJECTION_GUARD_LIMIT {
                    self.abort_corrupt(iterations);
                }
            }
        }
    }

    #[cold]
    #[cfg(debug_assertions)]
    fn abort_corrupt(&self, iterations: u64) -> ! {
        use bitrange_core::types::RangeError;
        use num_traits::AsPrimitive;

        let err = RangeError::CorruptGeneratorState {
            iterations,
            bit_mask: self.bit_mask.as_(),
            range_max: self.range_max.as_(),
        };
        tracing::error!(
            iterations,
            bit_count = self.bit_count,
            word_bits = W::BITS,
            "rejection guard tripped"
        );
        panic!("{}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitrange_core::source::{CountingSource, XorShift128Plus};

    #[test]
    fn test_layout_for_1428() {
        let generator = AnyRangeGenerator::<u64>::new(1428);
        assert_eq!(generator.bit_count(), 11);
        assert_eq!(generator.bit_mask(), 0x7FF);
        assert_eq!(generator.excess_bits(), 64 % 11);
        assert_eq!(generator.range_max(), 1428);

        let narrow = AnyRangeGenerator::<u32>::new(1428);
        assert_eq!(narrow.excess_bits(), 32 % 11);
    }

    #[test]
    #[should_panic(expected = "range_max must be non-zero")]
    fn test_zero_range_max_panics() {
        let _ = AnyRangeGenerator::<u64>::new(0);
    }

    #[test]
    fn test_values_within_range() {
        let mut source = XorShift128Plus::new(3);
        for range_max in [2u64, 5, 6, 100, 1428, 1 << 40 | 1] {
            let mut generator = AnyRangeGenerator::new(range_max);
            for _ in 0..2000 {
                assert!(generator.next(&mut source) <= range_max);
            }
        }
    }

    #[test]
    fn test_every_value_reachable() {
        let mut source = XorShift128Plus::new(17);
        let mut generator = AnyRangeGenerator::<u32>::new(6);
        let mut seen = [false; 7];
        for _ in 0..1000 {
            seen[generator.next(&mut source) as usize] = true;
        }
        assert!(seen.iter().all(|&hit| hit), "{:?}", seen);
    }

    #[test]
    fn test_rejection_rate_below_half() {
        // 2^k + 1 is the worst case: acceptance just above one half.
        let mut source = CountingSource::new(XorShift128Plus::new(5));
        let mut generator = AnyRangeGenerator::<u64>::new(256);
        let draws = 60_000u64;
        for _ in 0..draws {
            generator.next(&mut source);
        }

        // 9-bit groups: 7 per word. Expected groups per value ~ 512 / 257.
        let groups = source.draws_u64() as f64 * 7.0;
        let groups_per_value = groups / draws as f64;
        assert!(groups_per_value < 2.05, "groups per value {}", groups_per_value);
        assert!(groups_per_value > 1.9, "groups per value {}", groups_per_value);
    }
}
