//! Core types.
//!
//! This module provides:
//! - [`BoundaryKind`]: inclusive / exclusive qualification of range ends
//! - [`RangeError`]: errors raised while building or running a range generator
//! - [`StateError`]: errors raised while restoring a saved bit source

pub mod boundary;
pub mod error;

pub use boundary::BoundaryKind;
pub use error::{RangeError, StateError};
