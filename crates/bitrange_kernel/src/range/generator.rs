//! Stateful generators bound to a bit source.

use std::iter::FusedIterator;

use bitrange_core::source::BitSource;
use bitrange_core::types::{BoundaryKind, RangeError};

use super::int::RangeInt;
use super::sampler::RangeSampler;

/// A [`RangeSampler`] paired with the source it borrows.
///
/// Created once per range and reused for many draws. The source stays
/// mutably borrowed for the generator's lifetime, so no other code can draw
/// from it in between and disturb the residual bits.
///
/// # Examples
///
/// ```rust
/// use bitrange_core::source::XorShift128Plus;
/// use bitrange_core::types::BoundaryKind;
/// use bitrange_kernel::range::make_range_generator;
///
/// let mut source = XorShift128Plus::new(7);
/// let mut dice = make_range_generator(&mut source, 1u8, 6, BoundaryKind::ClosedClosed).unwrap();
///
/// let roll = dice.next();
/// assert!((1..=6).contains(&roll));
///
/// let rolls: Vec<u8> = dice.samples().take(10).collect();
/// assert_eq!(rolls.len(), 10);
/// ```
#[derive(Debug)]
pub struct RangeGenerator<'a, S: ?Sized, T: RangeInt> {
    source: &'a mut S,
    sampler: RangeSampler<T>,
}

impl<'a, S: BitSource + ?Sized, T: RangeInt> RangeGenerator<'a, S, T> {
    /// Binds an already built sampler to `source`.
    pub fn new(source: &'a mut S, sampler: RangeSampler<T>) -> Self {
        Self { source, sampler }
    }

    /// Draws the next value.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> T {
        self.sampler.sample(&mut *self.source)
    }

    /// Fills `out` with consecutive draws.
    pub fn fill(&mut self, out: &mut [T]) {
        self.sampler.fill(&mut *self.source, out);
    }

    /// An endless iterator over draws.
    pub fn samples(&mut self) -> Samples<'_, 'a, S, T> {
        Samples { generator: self }
    }

    /// The sampler driving this generator.
    pub fn sampler(&self) -> &RangeSampler<T> {
        &self.sampler
    }

    /// Releases the source and returns the sampler with its buffered bits.
    pub fn into_sampler(self) -> RangeSampler<T> {
        self.sampler
    }
}

/// Endless iterator returned by [`RangeGenerator::samples`].
#[derive(Debug)]
pub struct Samples<'g, 'a, S: ?Sized, T: RangeInt> {
    generator: &'g mut RangeGenerator<'a, S, T>,
}

impl<S: BitSource + ?Sized, T: RangeInt> Iterator for Samples<'_, '_, S, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        Some(self.generator.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<S: BitSource + ?Sized, T: RangeInt> FusedIterator for Samples<'_, '_, S, T> {}

/// Builds a reusable generator for `lower`..`upper` qualified by `boundary`.
///
/// # Errors
///
/// Returns [`RangeError::InvalidRange`] if the qualified range is empty. The
/// check happens here, never during a draw.
pub fn make_range_generator<S: BitSource + ?Sized, T: RangeInt>(
    source: &mut S,
    lower: T,
    upper: T,
    boundary: BoundaryKind,
) -> Result<RangeGenerator<'_, S, T>, RangeError> {
    let sampler = RangeSampler::new(lower, upper, boundary)?;
    Ok(RangeGenerator::new(source, sampler))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitrange_core::source::{CountingSource, SplitMix64};

    #[test]
    fn test_generator_matches_sampler() {
        let mut a = SplitMix64::new(21);
        let mut b = SplitMix64::new(21);
        let mut sampler = RangeSampler::new(-50i32, 50, BoundaryKind::OpenOpen).unwrap();
        let mut generator =
            make_range_generator(&mut a, -50i32, 50, BoundaryKind::OpenOpen).unwrap();

        for _ in 0..500 {
            let value = generator.next();
            assert!(value > -50 && value < 50);
            assert_eq!(value, sampler.sample(&mut b));
        }
    }

    #[test]
    fn test_invalid_range_at_construction() {
        let mut source = SplitMix64::new(0);
        let result = make_range_generator(&mut source, 3u64, 3, BoundaryKind::OpenOpen);
        assert!(matches!(result, Err(RangeError::InvalidRange { .. })));
    }

    #[test]
    fn test_samples_iterator() {
        let mut source = SplitMix64::new(2);
        let mut generator =
            make_range_generator(&mut source, 0u16, 1000, BoundaryKind::ClosedClosed).unwrap();
        let values: Vec<u16> = generator.samples().take(200).collect();
        assert_eq!(values.len(), 200);
        assert!(values.iter().all(|&v| v <= 1000));
        assert_eq!(generator.samples().size_hint(), (usize::MAX, None));
    }

    #[test]
    fn test_into_sampler_keeps_buffer() {
        let mut source = CountingSource::new(SplitMix64::new(9));
        let mut generator =
            make_range_generator(&mut source, 0u8, 3, BoundaryKind::ClosedClosed).unwrap();
        generator.next();
        let mut sampler = generator.into_sampler();

        // 2-bit groups: the first word still has 31 (64-bit) or 15 (32-bit) buffered.
        for _ in 0..15 {
            sampler.sample(&mut source);
        }
        assert_eq!(source.total_draws(), 1);
    }

    #[test]
    fn test_fill_through_generator() {
        let mut source = SplitMix64::new(5);
        let mut generator =
            make_range_generator(&mut source, -1i64, 1, BoundaryKind::ClosedClosed).unwrap();
        let mut out = [0i64; 32];
        generator.fill(&mut out);
        assert!(out.iter().all(|v| (-1..=1).contains(v)));
    }
}
