//! Raw bit sources.
//!
//! The range engine consumes an abstract source of independent, uniformly
//! distributed 32-bit and 64-bit words. This module provides:
//! - [`BitSource`]: the draw contract, implemented for every [`rand::RngCore`]
//! - [`SaveState`] and [`SourceState`]: opaque save / restore of engine state
//! - [`SplitMix64`] and [`XorShift128Plus`]: small seedable engines
//! - [`CountingSource`]: a wrapper counting raw draws
//!
//! # Ownership
//!
//! A source is borrowed by a generator for the generator's lifetime and is
//! never shared between threads implicitly. None of the engines here are
//! suitable for cryptographic use.

mod counting;
mod splitmix;
mod state;
mod xorshift;

pub use counting::CountingSource;
pub use splitmix::SplitMix64;
pub use state::{SourceState, ENGINE_TAG_SPLITMIX64, ENGINE_TAG_XORSHIFT128PLUS};
pub use xorshift::XorShift128Plus;

use rand::RngCore;

use crate::types::StateError;

/// A source of uniformly distributed raw bits.
///
/// Any engine whose output words are statistically independent and uniform
/// may be substituted. Every [`rand::RngCore`] is a `BitSource`.
///
/// # Examples
///
/// ```
/// use bitrange_core::source::BitSource;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// fn draw_pair<S: BitSource + ?Sized>(source: &mut S) -> (u32, u64) {
///     (source.next_u32(), source.next_u64())
/// }
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let _ = draw_pair(&mut rng);
/// ```
pub trait BitSource {
    /// Returns the next 32 uniformly distributed bits.
    fn next_u32(&mut self) -> u32;

    /// Returns the next 64 uniformly distributed bits.
    fn next_u64(&mut self) -> u64;
}

impl<R: RngCore + ?Sized> BitSource for R {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        RngCore::next_u32(self)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        RngCore::next_u64(self)
    }
}

/// A bit source whose internal state can be saved and restored.
///
/// Restoring from a saved state and resuming draws reproduces exactly the
/// continuation the original source would have produced.
pub trait SaveState: BitSource + Sized {
    /// Captures the current state as an opaque byte sequence.
    fn save_state(&self) -> SourceState;

    /// Rebuilds a source from a previously saved state.
    ///
    /// # Errors
    ///
    /// Returns [`StateError`] if the bytes were not produced by this engine
    /// or describe a state the engine cannot run from.
    fn restore_from_state(state: &SourceState) -> Result<Self, StateError>;
}
