//! Reusable range samplers.

use std::ops::{Bound, RangeBounds};

use bitrange_core::bits::{bit_count_and_mask_u64, is_power_of_two_u64, Word};
use bitrange_core::source::BitSource;
use bitrange_core::types::{BoundaryKind, RangeError};
use num_traits::AsPrimitive;
use tracing::debug;

use super::int::RangeInt;
use crate::strategy::{
    AnyRangeGenerator, PowerOfPowerOfTwoRangeGenerator, PowerOfTwoRangeGenerator, StrategyKind,
};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Strategy<W: Word> {
    Constant,
    Full,
    AnyRange(AnyRangeGenerator<W>),
    PowerOfTwo(PowerOfTwoRangeGenerator<W>),
    PowerOfPowerOfTwo(PowerOfPowerOfTwoRangeGenerator<W>),
}

impl<W: Word> Strategy<W> {
    fn select<T: RangeInt>(range_max: u64) -> Self {
        if range_max == 0 {
            return Strategy::Constant;
        }
        if range_max == T::KEY_MAX && T::BITS >= 32 {
            return Strategy::Full;
        }
        if !is_power_of_two_u64(range_max.wrapping_add(1)) {
            return Strategy::AnyRange(AnyRangeGenerator::new(W::truncate_from(range_max)));
        }

        let (bit_count, _) = bit_count_and_mask_u64(range_max);
        if bit_count.is_power_of_two() && bit_count <= W::BITS {
            Strategy::PowerOfPowerOfTwo(PowerOfPowerOfTwoRangeGenerator::new(bit_count))
        } else {
            Strategy::PowerOfTwo(PowerOfTwoRangeGenerator::new(bit_count))
        }
    }

    fn kind(&self) -> StrategyKind {
        match self {
            Strategy::Constant => StrategyKind::Constant,
            Strategy::Full => StrategyKind::Full,
            Strategy::AnyRange(_) => StrategyKind::AnyRange,
            Strategy::PowerOfTwo(_) => StrategyKind::PowerOfTwo,
            Strategy::PowerOfPowerOfTwo(_) => StrategyKind::PowerOfPowerOfTwo,
        }
    }

    fn bit_count(&self) -> u8 {
        match self {
            Strategy::Constant => 0,
            Strategy::Full => 0,
            Strategy::AnyRange(generator) => generator.bit_count(),
            Strategy::PowerOfTwo(generator) => generator.bit_count(),
            Strategy::PowerOfPowerOfTwo(generator) => generator.bit_count(),
        }
    }
}

/// A validated, boundary-qualified integer range with its strategy.
///
/// Building a sampler normalises the request to an inclusive span
/// `[first, first + range_max]`, classifies the span size and picks the
/// cheapest strategy:
///
/// | Span | Strategy |
/// |------|----------|
/// | one value | [`StrategyKind::Constant`], never touches the source |
/// | whole 32-bit or 64-bit type | [`StrategyKind::Full`], one raw draw |
/// | `2^k`, `k` a power of two | [`StrategyKind::PowerOfPowerOfTwo`] |
/// | other `2^k` | [`StrategyKind::PowerOfTwo`] |
/// | anything else | [`StrategyKind::AnyRange`] |
///
/// The sampler carries the residual bit buffer, so draws must keep using the
/// same source for the buffered bits to stay meaningful. Cloning a sampler
/// clones its buffer; together with a saved source state that is an exact
/// snapshot of the stream.
///
/// # Examples
///
/// ```rust
/// use bitrange_core::source::XorShift128Plus;
/// use bitrange_core::types::BoundaryKind;
/// use bitrange_kernel::range::RangeSampler;
/// use bitrange_kernel::strategy::StrategyKind;
///
/// let mut source = XorShift128Plus::new(42);
/// let mut sampler = RangeSampler::new(71u32, 1500, BoundaryKind::ClosedOpen).unwrap();
/// assert_eq!(sampler.range_max(), 1428);
/// assert_eq!(sampler.strategy_kind(), StrategyKind::AnyRange);
///
/// let value = sampler.sample(&mut source);
/// assert!((71..1500).contains(&value));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeSampler<T: RangeInt> {
    lower: T,
    upper: T,
    boundary: BoundaryKind,
    first_key: u64,
    range_max: u64,
    strategy: Strategy<T::Word>,
}

impl<T: RangeInt> RangeSampler<T> {
    /// Builds a sampler for `lower`..`upper` qualified by `boundary`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidRange`] if the qualified range is empty,
    /// e.g. `lower == upper` under [`BoundaryKind::OpenOpen`] or
    /// `lower > upper` under any kind.
    pub fn new(lower: T, upper: T, boundary: BoundaryKind) -> Result<Self, RangeError> {
        let sampler = Self::build(lower, upper, boundary)?;
        debug!(
            lower = %lower,
            upper = %upper,
            boundary = %boundary,
            range_max = sampler.range_max,
            strategy = %sampler.strategy_kind(),
            bit_count = sampler.bit_count(),
            word_bits = <T::Word as Word>::BITS,
            "range sampler built"
        );
        Ok(sampler)
    }

    /// Builds a sampler from a Rust range expression.
    ///
    /// `a..b` is closed-open, `a..=b` closed-closed; excluded start bounds
    /// open the lower end and unbounded ends become the type's `MIN` / `MAX`
    /// inclusive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bitrange_core::types::BoundaryKind;
    /// use bitrange_kernel::range::RangeSampler;
    ///
    /// let sampler = RangeSampler::from_bounds(-10i8..10).unwrap();
    /// assert_eq!(sampler.boundary(), BoundaryKind::ClosedOpen);
    /// assert_eq!(sampler.range_max(), 19);
    ///
    /// let whole = RangeSampler::<u16>::from_bounds(..).unwrap();
    /// assert_eq!(whole.range_max(), u64::from(u16::MAX));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidRange`] if the range is empty.
    pub fn from_bounds<R: RangeBounds<T>>(bounds: R) -> Result<Self, RangeError> {
        let (lower, lower_open) = match bounds.start_bound() {
            Bound::Included(&value) => (value, false),
            Bound::Excluded(&value) => (value, true),
            Bound::Unbounded => (T::MIN, false),
        };
        let (upper, upper_open) = match bounds.end_bound() {
            Bound::Included(&value) => (value, false),
            Bound::Excluded(&value) => (value, true),
            Bound::Unbounded => (T::MAX, false),
        };
        Self::new(
            lower,
            upper,
            BoundaryKind::from_openness(lower_open, upper_open),
        )
    }

    /// Validation and strategy selection without logging, for one-shot draws.
    pub(crate) fn build(lower: T, upper: T, boundary: BoundaryKind) -> Result<Self, RangeError> {
        let first = if boundary.lower_open() {
            lower.to_key().checked_add(1)
        } else {
            Some(lower.to_key())
        };
        let last = if boundary.upper_open() {
            upper.to_key().checked_sub(1)
        } else {
            Some(upper.to_key())
        };

        let (first_key, last_key) = match (first, last) {
            (Some(first), Some(last)) if first <= last => (first, last),
            _ => return Err(RangeError::invalid_range(lower, upper, boundary)),
        };
        let range_max = last_key - first_key;

        Ok(Self {
            lower,
            upper,
            boundary,
            first_key,
            range_max,
            strategy: Strategy::select::<T>(range_max),
        })
    }

    /// Draws one value from the range.
    #[inline]
    pub fn sample<S: BitSource + ?Sized>(&mut self, source: &mut S) -> T {
        let offset: u64 = match &mut self.strategy {
            Strategy::Constant => 0,
            Strategy::Full => return T::from_key(T::draw_raw(source)),
            Strategy::AnyRange(generator) => generator.next(source).as_(),
            Strategy::PowerOfTwo(generator) => generator.next(source).as_(),
            Strategy::PowerOfPowerOfTwo(generator) => generator.next(source).as_(),
        };
        T::from_key(self.first_key + offset)
    }

    /// Fills `out` with consecutive draws.
    pub fn fill<S: BitSource + ?Sized>(&mut self, source: &mut S, out: &mut [T]) {
        for slot in out.iter_mut() {
            *slot = self.sample(source);
        }
    }

    /// Lower bound as requested.
    #[inline]
    pub fn lower(&self) -> T {
        self.lower
    }

    /// Upper bound as requested.
    #[inline]
    pub fn upper(&self) -> T {
        self.upper
    }

    /// Boundary qualification as requested.
    #[inline]
    pub fn boundary(&self) -> BoundaryKind {
        self.boundary
    }

    /// Smallest value the sampler returns.
    #[inline]
    pub fn first(&self) -> T {
        T::from_key(self.first_key)
    }

    /// Largest value the sampler returns.
    #[inline]
    pub fn last(&self) -> T {
        T::from_key(self.first_key + self.range_max)
    }

    /// Inclusive span `last - first`, in the unsigned key domain.
    #[inline]
    pub fn range_max(&self) -> u64 {
        self.range_max
    }

    /// Strategy chosen for this range.
    #[inline]
    pub fn strategy_kind(&self) -> StrategyKind {
        self.strategy.kind()
    }

    /// Bits consumed per candidate, zero for the constant and full strategies.
    #[inline]
    pub fn bit_count(&self) -> u8 {
        self.strategy.bit_count()
    }
}
