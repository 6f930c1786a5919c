//! Bit-economical range strategies.
//!
//! Three generators draw uniformly distributed values in `[0, range_max]`
//! while pulling as few raw words from the bit source as possible. All of
//! them share the residual bit buffer protocol of [`residual`]: one word is
//! split into as many `bit_count`-bit groups as fit, and the source is only
//! touched once every buffered group has been consumed.
//!
//! | Strategy | Range size | Rejection | Excess bits discarded |
//! |----------|------------|-----------|-----------------------|
//! | [`AnyRangeGenerator`] | any | yes (acceptance > 1/2) | when `W::BITS % bit_count != 0` |
//! | [`PowerOfTwoRangeGenerator`] | `2^k` | no | when `W::BITS % k != 0` |
//! | [`PowerOfPowerOfTwoRangeGenerator`] | `2^k`, `k` in 1, 2, 4, 8, 16, 32, 64 | no | never |
//!
//! The generators are generic over the buffer [`Word`](bitrange_core::bits::Word);
//! the 32-bit and 64-bit paths consume the source differently and are not
//! expected to agree with each other.

mod any_range;
mod power_of_power_of_two;
mod power_of_two;
pub(crate) mod residual;

pub use any_range::{AnyRangeGenerator, REJECTION_GUARD_LIMIT};
pub use power_of_power_of_two::PowerOfPowerOfTwoRangeGenerator;
pub use power_of_two::PowerOfTwoRangeGenerator;

use std::fmt;

/// Which code path a range sampler uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Single-value range: the source is never touched.
    Constant,
    /// The range covers a whole 32-bit or 64-bit type: one raw draw per value.
    Full,
    /// Rejection sampling against the smallest covering mask.
    AnyRange,
    /// Power-of-two range size whose bit count does not divide the word.
    PowerOfTwo,
    /// Power-of-two range size whose bit count divides the word.
    PowerOfPowerOfTwo,
}

impl StrategyKind {
    /// Returns true if draws of this kind can be rejected and redrawn.
    #[inline]
    pub fn rejects(self) -> bool {
        matches!(self, StrategyKind::AnyRange)
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrategyKind::Constant => "constant",
            StrategyKind::Full => "full",
            StrategyKind::AnyRange => "any-range",
            StrategyKind::PowerOfTwo => "power-of-two",
            StrategyKind::PowerOfPowerOfTwo => "power-of-power-of-two",
        };
        f.write_str(name)
    }
}
