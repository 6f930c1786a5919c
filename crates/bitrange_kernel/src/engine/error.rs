//! Error types for the engine layer.
//!
//! This module provides:
//! - `ConfigError`: Errors loading or validating an `EngineConfig`
//! - `EngineError`: Everything a `RangeEngine` operation can fail with

use bitrange_core::types::{RangeError, StateError};
use thiserror::Error;

/// Configuration error type.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading a config file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed TOML or an unknown field.
    #[error("Parse error: {0}")]
    Parse(String),

    /// One or more parameters out of range.
    #[error("Validation errors: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Range engine error type.
///
/// # Examples
/// ```
/// use bitrange_core::types::StateError;
/// use bitrange_kernel::engine::EngineError;
///
/// let err: EngineError = StateError::UnknownEngine(0x7f).into();
/// assert_eq!(err.to_string(), "State error: Unknown engine tag: 0x7f");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid range request.
    #[error("Range error: {0}")]
    Range(#[from] RangeError),

    /// Saved state could not be restored.
    #[error("State error: {0}")]
    State(#[from] StateError),
}
