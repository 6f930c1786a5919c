//! Error types for structured error handling.
//!
//! This module provides:
//! - `RangeError`: Errors from range generator construction and draws
//! - `StateError`: Errors from restoring a saved bit source

use thiserror::Error;

use super::boundary::BoundaryKind;

/// Range generator errors.
///
/// # Variants
/// - `InvalidRange`: The bounds and boundary kind describe an empty range
/// - `CorruptGeneratorState`: The rejection loop ran past its guard
///
/// # Examples
/// ```
/// use bitrange_core::types::{BoundaryKind, RangeError};
///
/// let err = RangeError::InvalidRange {
///     lower: 5,
///     upper: 5,
///     boundary: BoundaryKind::OpenOpen,
/// };
/// assert_eq!(format!("{}", err), "Invalid range: OO range between 5 and 5 is empty");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// The requested range contains no values.
    ///
    /// Raised at construction time, never during a draw.
    #[error("Invalid range: {boundary} range between {lower} and {upper} is empty")]
    InvalidRange {
        /// Lower bound as requested
        lower: i128,
        /// Upper bound as requested
        upper: i128,
        /// Boundary qualification of the request
        boundary: BoundaryKind,
    },

    /// The rejection loop exceeded its iteration guard.
    ///
    /// Only raised in debug builds. Signals a programming error or a broken
    /// bit source, never a normal sampling outcome, and is not recoverable.
    #[error(
        "Corrupt generator state: rejection loop exceeded {iterations} iterations \
         (bit mask {bit_mask:#x}, range max {range_max:#x})"
    )]
    CorruptGeneratorState {
        /// Iterations performed before giving up
        iterations: u64,
        /// Mask applied to each candidate
        bit_mask: u64,
        /// Largest accepted candidate
        range_max: u64,
    },
}

impl RangeError {
    /// Creates an `InvalidRange` error from any integer bounds.
    pub fn invalid_range(
        lower: impl Into<i128>,
        upper: impl Into<i128>,
        boundary: BoundaryKind,
    ) -> Self {
        Self::InvalidRange {
            lower: lower.into(),
            upper: upper.into(),
            boundary,
        }
    }
}

/// Errors restoring a bit source from saved state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    /// Saved state has the wrong number of bytes for the engine.
    #[error("Saved state has wrong length: expected {expected} bytes, got {got}")]
    WrongLength {
        /// Bytes the engine expects
        expected: usize,
        /// Bytes supplied
        got: usize,
    },

    /// Saved state belongs to a different engine.
    #[error("Saved state belongs to engine {got:#04x}, expected {expected:#04x}")]
    EngineMismatch {
        /// Tag of the engine restoring
        expected: u8,
        /// Tag found in the state
        got: u8,
    },

    /// Saved state carries a tag no engine recognises.
    #[error("Unknown engine tag: {0:#04x}")]
    UnknownEngine(u8),

    /// Saved state is a fixed point the engine cannot leave.
    #[error("Degenerate engine state: all state words are zero")]
    DegenerateState,
}
