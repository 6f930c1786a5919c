//! Owned, configurable range engine.
//!
//! This module provides:
//! - [`EngineConfig`] / [`SourceKind`]: TOML + environment configuration
//! - [`EngineSource`]: the built-in bit sources behind one type
//! - [`RangeEngine`]: a seeded source with the range API on top
//! - [`ConfigError`] / [`EngineError`]: errors of this layer

mod config;
mod error;
mod range_engine;
mod source;

pub use config::{EngineConfig, EngineConfigBuilder, SourceKind, ENV_SEED, ENV_SOURCE};
pub use error::{ConfigError, EngineError};
pub use range_engine::RangeEngine;
pub use source::EngineSource;
