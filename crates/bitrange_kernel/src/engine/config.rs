//! Engine configuration.
//!
//! Handles loading of [`EngineConfig`] from TOML files with environment
//! variable override support, and builder-style construction in code.
//!
//! ```toml
//! seed = 42
//! source = "xorshift128plus"
//! word_bits = 64
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use bitrange_core::bits::WORD_MODE;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Environment variable overriding [`EngineConfig::seed`].
pub const ENV_SEED: &str = "BITRANGE_SEED";

/// Environment variable overriding [`EngineConfig::source`].
pub const ENV_SOURCE: &str = "BITRANGE_SOURCE";

/// Which bit source engine a [`RangeEngine`](super::RangeEngine) owns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// SplitMix64: one 64-bit state word.
    SplitMix64,
    /// xorshift128+: two 64-bit state words seeded through SplitMix64.
    #[default]
    XorShift128Plus,
}

impl SourceKind {
    /// Lowercase name as used in configuration files.
    pub const fn name(self) -> &'static str {
        match self {
            SourceKind::SplitMix64 => "splitmix64",
            SourceKind::XorShift128Plus => "xorshift128plus",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SourceKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "splitmix64" => Ok(SourceKind::SplitMix64),
            "xorshift128plus" | "xorshift128+" => Ok(SourceKind::XorShift128Plus),
            other => Err(ConfigError::Invalid(vec![format!(
                "Unknown source '{}'. Valid values: [\"splitmix64\", \"xorshift128plus\"]",
                other
            )])),
        }
    }
}

/// Configuration for a [`RangeEngine`](super::RangeEngine).
///
/// # Default Values
///
/// | Parameter | Default | Description |
/// |-----------|---------|-------------|
/// | `seed` | `None` (seed 0) | Seed for the bit source |
/// | `source` | `xorshift128plus` | Bit source engine |
/// | `word_bits` | `None` | Required buffer word width of this build |
///
/// # Examples
///
/// ```rust
/// use bitrange_kernel::engine::{EngineConfig, SourceKind};
///
/// let config = EngineConfig::builder()
///     .seed(42)
///     .source(SourceKind::SplitMix64)
///     .build()
///     .unwrap();
/// assert_eq!(config.effective_seed(), 42);
///
/// let parsed = EngineConfig::from_toml_str("seed = 42\nsource = \"splitmix64\"").unwrap();
/// assert_eq!(parsed, config);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Seed for the bit source. A missing seed means seed 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Bit source engine.
    #[serde(default)]
    pub source: SourceKind,

    /// Buffer word width this configuration was recorded under (32 or 64).
    ///
    /// The two widths consume the source differently, so a recorded
    /// sequence only replays under the same width. When set, validation
    /// fails on a build compiled for the other width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_bits: Option<u8>,
}

impl EngineConfig {
    /// Creates a new builder for constructing an `EngineConfig`.
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    /// The seed actually used: the configured one, or 0.
    #[inline]
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or(0)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if it is not a valid configuration.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed TOML or unknown fields.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Serialise to TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if serialisation fails.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply environment variable overrides.
    ///
    /// `BITRANGE_SEED` replaces the seed and `BITRANGE_SOURCE` the source
    /// engine. Unparseable values are ignored.
    pub fn with_env_override(mut self) -> Self {
        if let Ok(seed) = std::env::var(ENV_SEED) {
            if let Ok(seed) = seed.trim().parse() {
                self.seed = Some(seed);
            }
        }

        if let Ok(source) = std::env::var(ENV_SOURCE) {
            if let Ok(source) = source.parse() {
                self.source = source;
            }
        }

        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] listing every problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if let Some(word_bits) = self.word_bits {
            if word_bits != 32 && word_bits != 64 {
                errors.push(format!(
                    "Invalid word_bits {}. Valid values: [32, 64]",
                    word_bits
                ));
            } else if word_bits != WORD_MODE.bits() {
                errors.push(format!(
                    "word_bits {} does not match this build ({})",
                    word_bits, WORD_MODE
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(errors))
        }
    }

    /// Load from file with environment overrides and validate.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] encountered.
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load(path)?.with_env_override();
        config.validate()?;
        Ok(config)
    }
}

/// Builder for [`EngineConfig`].
#[derive(Debug, Default)]
pub struct EngineConfigBuilder {
    seed: Option<u64>,
    source: Option<SourceKind>,
    word_bits: Option<u8>,
}

impl EngineConfigBuilder {
    /// Sets the seed (default: 0).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the bit source engine (default: xorshift128+).
    pub fn source(mut self, source: SourceKind) -> Self {
        self.source = Some(source);
        self
    }

    /// Requires a buffer word width (32 or 64).
    pub fn word_bits(mut self, word_bits: u8) -> Self {
        self.word_bits = Some(word_bits);
        self
    }

    /// Builds the configuration, validating all parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if any parameter is invalid.
    pub fn build(self) -> Result<EngineConfig, ConfigError> {
        let config = EngineConfig {
            seed: self.seed,
            source: self.source.unwrap_or_default(),
            word_bits: self.word_bits,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.effective_seed(), 0);
        assert_eq!(config.source, SourceKind::XorShift128Plus);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = EngineConfig::from_toml_str("seed = 7").unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.source, SourceKind::XorShift128Plus);

        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = EngineConfig::from_toml_str("sead = 7").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_unknown_source_rejected() {
        assert!(EngineConfig::from_toml_str("source = \"mt19937\"").is_err());
        assert!("mt19937".parse::<SourceKind>().is_err());
        assert_eq!(
            "XorShift128+".parse::<SourceKind>().unwrap(),
            SourceKind::XorShift128Plus
        );
    }

    #[test]
    fn test_toml_round_trip() {
        let config = EngineConfig::builder()
            .seed(99)
            .source(SourceKind::SplitMix64)
            .build()
            .unwrap();
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("splitmix64"));
        assert_eq!(EngineConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_word_bits_validation() {
        let err = EngineConfig::builder().word_bits(16).build().unwrap_err();
        assert!(err.to_string().contains("Valid values: [32, 64]"));

        let native = EngineConfig::builder().word_bits(WORD_MODE.bits()).build();
        assert!(native.is_ok());

        let other = if WORD_MODE.bits() == 64 { 32 } else { 64 };
        let err = EngineConfig::builder().word_bits(other).build().unwrap_err();
        assert!(err.to_string().contains("does not match this build"));
    }

    #[test]
    fn test_source_kind_display() {
        assert_eq!(SourceKind::SplitMix64.to_string(), "splitmix64");
        assert_eq!(SourceKind::XorShift128Plus.to_string(), "xorshift128plus");
    }
}
