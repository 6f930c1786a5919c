//! One-shot range helpers.
//!
//! Each helper builds a sampler, draws once and drops it. Any bits buffered
//! by that single draw are discarded with the sampler, so repeated draws
//! against one range should use [`RangeSampler`] or
//! [`make_range_generator`](super::make_range_generator) instead.

use bitrange_core::source::BitSource;
use bitrange_core::types::{BoundaryKind, RangeError};

use super::int::RangeInt;
use super::sampler::RangeSampler;

/// Draws one value from `lower`..`upper` qualified by `boundary`.
///
/// # Errors
///
/// Returns [`RangeError::InvalidRange`] if the qualified range is empty.
#[inline]
pub fn range<S: BitSource + ?Sized, T: RangeInt>(
    source: &mut S,
    lower: T,
    upper: T,
    boundary: BoundaryKind,
) -> Result<T, RangeError> {
    let mut sampler = RangeSampler::build(lower, upper, boundary)?;
    Ok(sampler.sample(source))
}

/// Draws one value `n` with `lower <= n <= upper`.
///
/// # Examples
///
/// ```rust
/// use bitrange_core::source::SplitMix64;
/// use bitrange_kernel::range::range_cc;
///
/// let mut source = SplitMix64::new(1);
/// let n = range_cc(&mut source, -5i16, 5).unwrap();
/// assert!((-5..=5).contains(&n));
/// ```
///
/// # Errors
///
/// Returns [`RangeError::InvalidRange`] if `lower > upper`.
#[inline]
pub fn range_cc<S: BitSource + ?Sized, T: RangeInt>(
    source: &mut S,
    lower: T,
    upper: T,
) -> Result<T, RangeError> {
    range(source, lower, upper, BoundaryKind::ClosedClosed)
}

/// Draws one value `n` with `lower <= n < upper`.
///
/// # Examples
///
/// ```rust
/// use bitrange_core::source::SplitMix64;
/// use bitrange_kernel::range::range_co;
///
/// let mut source = SplitMix64::new(1);
/// let n = range_co(&mut source, 71u32, 1500).unwrap();
/// assert!((71..1500).contains(&n));
/// ```
///
/// # Errors
///
/// Returns [`RangeError::InvalidRange`] if `lower >= upper`.
#[inline]
pub fn range_co<S: BitSource + ?Sized, T: RangeInt>(
    source: &mut S,
    lower: T,
    upper: T,
) -> Result<T, RangeError> {
    range(source, lower, upper, BoundaryKind::ClosedOpen)
}

/// Draws one value `n` with `lower < n <= upper`.
///
/// # Errors
///
/// Returns [`RangeError::InvalidRange`] if `lower >= upper`.
#[inline]
pub fn range_oc<S: BitSource + ?Sized, T: RangeInt>(
    source: &mut S,
    lower: T,
    upper: T,
) -> Result<T, RangeError> {
    range(source, lower, upper, BoundaryKind::OpenClosed)
}

/// Draws one value `n` with `lower < n < upper`.
///
/// # Errors
///
/// Returns [`RangeError::InvalidRange`] unless at least one integer lies
/// strictly between `lower` and `upper`.
#[inline]
pub fn range_oo<S: BitSource + ?Sized, T: RangeInt>(
    source: &mut S,
    lower: T,
    upper: T,
) -> Result<T, RangeError> {
    range(source, lower, upper, BoundaryKind::OpenOpen)
}
