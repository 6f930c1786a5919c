//! Range mapping layer.
//!
//! Turns a typed, boundary-qualified request into a draw from one of the
//! strategies and offsets the result back into the caller's type.
//!
//! This module provides:
//! - [`RangeInt`]: the eight supported output types and their key mapping
//! - [`RangeSampler`]: a validated range with its strategy and residual bits
//! - [`RangeGenerator`] / [`make_range_generator`]: a sampler bound to a source
//! - [`range_cc`], [`range_co`], [`range_oc`], [`range_oo`]: one-shot draws
//!
//! # Boundary semantics
//!
//! | Kind | Values |
//! |------|--------|
//! | CC | `lower <= n <= upper` |
//! | CO | `lower <= n < upper` |
//! | OC | `lower < n <= upper` |
//! | OO | `lower < n < upper` |
//!
//! An empty qualified range is rejected with
//! [`RangeError::InvalidRange`](bitrange_core::types::RangeError::InvalidRange)
//! when the sampler is built, never during a draw.

mod generator;
mod int;
mod oneshot;
mod sampler;

pub use generator::{make_range_generator, RangeGenerator, Samples};
pub use int::RangeInt;
pub use oneshot::{range, range_cc, range_co, range_oc, range_oo};
pub use sampler::RangeSampler;
