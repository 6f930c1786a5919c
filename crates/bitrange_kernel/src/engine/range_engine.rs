//! Seeded range engine.

use std::ops::RangeBounds;

use bitrange_core::bits::WORD_MODE;
use bitrange_core::source::{SaveState, SourceState};
use bitrange_core::types::{BoundaryKind, RangeError};
use tracing::{debug, info};

use super::config::{EngineConfig, SourceKind};
use super::error::EngineError;
use super::source::EngineSource;
use crate::range::{range, RangeGenerator, RangeInt, RangeSampler};

/// A bit source owned together with the configuration that seeded it.
///
/// This is the convenient entry point when the caller does not bring its own
/// source: one-shot draws, reusable generators and state snapshots all go
/// through the same owned engine.
///
/// # Examples
///
/// ```rust
/// use bitrange_kernel::engine::RangeEngine;
///
/// let mut engine = RangeEngine::from_seed(42);
/// let n: u32 = engine.range_co(71, 1500).unwrap();
/// assert!((71..1500).contains(&n));
///
/// let state = engine.save_state();
/// let next: i64 = engine.gen_range(-10..10).unwrap();
/// engine.restore_state(&state).unwrap();
/// assert_eq!(engine.gen_range::<i64, _>(-10..10).unwrap(), next);
/// ```
#[derive(Clone, Debug)]
pub struct RangeEngine {
    config: EngineConfig,
    source: EngineSource,
}

impl RangeEngine {
    /// Creates an engine with the default source kind and `seed`.
    pub fn from_seed(seed: u64) -> Self {
        let config = EngineConfig {
            seed: Some(seed),
            ..EngineConfig::default()
        };
        Self::build(config)
    }

    /// Creates an engine from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] if the configuration does not
    /// validate.
    pub fn from_config(config: &EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self::build(config.clone()))
    }

    fn build(config: EngineConfig) -> Self {
        let source = EngineSource::new(config.source, config.effective_seed());
        info!(
            seed = config.effective_seed(),
            source = %config.source,
            word_mode = %WORD_MODE,
            "range engine created"
        );
        Self { config, source }
    }

    /// Seed the engine was created with.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.config.effective_seed()
    }

    /// Kind of the owned source.
    #[inline]
    pub fn source_kind(&self) -> SourceKind {
        self.source.kind()
    }

    /// Configuration the engine was created with.
    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Direct access to the owned source, e.g. to drive a [`RangeSampler`].
    #[inline]
    pub fn source_mut(&mut self) -> &mut EngineSource {
        &mut self.source
    }

    /// Draws one value `n` with `lower <= n <= upper`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidRange`] if the range is empty.
    pub fn range_cc<T: RangeInt>(&mut self, lower: T, upper: T) -> Result<T, RangeError> {
        range(&mut self.source, lower, upper, BoundaryKind::ClosedClosed)
    }

    /// Draws one value `n` with `lower <= n < upper`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidRange`] if the range is empty.
    pub fn range_co<T: RangeInt>(&mut self, lower: T, upper: T) -> Result<T, RangeError> {
        range(&mut self.source, lower, upper, BoundaryKind::ClosedOpen)
    }

    /// Draws one value `n` with `lower < n <= upper`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidRange`] if the range is empty.
    pub fn range_oc<T: RangeInt>(&mut self, lower: T, upper: T) -> Result<T, RangeError> {
        range(&mut self.source, lower, upper, BoundaryKind::OpenClosed)
    }

    /// Draws one value `n` with `lower < n < upper`.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidRange`] if the range is empty.
    pub fn range_oo<T: RangeInt>(&mut self, lower: T, upper: T) -> Result<T, RangeError> {
        range(&mut self.source, lower, upper, BoundaryKind::OpenOpen)
    }

    /// Draws one value from a Rust range expression.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidRange`] if the range is empty.
    pub fn gen_range<T: RangeInt, R: RangeBounds<T>>(&mut self, bounds: R) -> Result<T, RangeError> {
        let mut sampler = RangeSampler::from_bounds(bounds)?;
        Ok(sampler.sample(&mut self.source))
    }

    /// Builds a reusable sampler; draw from it with [`sample`](Self::sample).
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidRange`] if the range is empty.
    pub fn sampler<T: RangeInt>(
        &self,
        lower: T,
        upper: T,
        boundary: BoundaryKind,
    ) -> Result<RangeSampler<T>, RangeError> {
        RangeSampler::new(lower, upper, boundary)
    }

    /// Draws one value from `sampler` using the owned source.
    #[inline]
    pub fn sample<T: RangeInt>(&mut self, sampler: &mut RangeSampler<T>) -> T {
        sampler.sample(&mut self.source)
    }

    /// Builds a reusable generator borrowing the owned source.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::InvalidRange`] if the range is empty.
    pub fn generator<T: RangeInt>(
        &mut self,
        lower: T,
        upper: T,
        boundary: BoundaryKind,
    ) -> Result<RangeGenerator<'_, EngineSource, T>, RangeError> {
        let sampler = RangeSampler::new(lower, upper, boundary)?;
        Ok(RangeGenerator::new(&mut self.source, sampler))
    }

    /// Captures the owned source's state.
    ///
    /// Bits buffered inside samplers are not part of the source state; clone
    /// the samplers alongside to snapshot an in-progress stream exactly.
    pub fn save_state(&self) -> SourceState {
        self.source.save_state()
    }

    /// Restores the owned source from a saved state.
    ///
    /// The state may come from either built-in engine; the engine kind and
    /// the configuration follow the restored source.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::State`] if the state cannot be restored. The
    /// engine is left unchanged in that case.
    pub fn restore_state(&mut self, state: &SourceState) -> Result<(), EngineError> {
        let source = EngineSource::restore_from_state(state)?;
        debug!(
            from = %self.source.kind(),
            to = %source.kind(),
            bytes = state.as_bytes().len(),
            "range engine state restored"
        );
        self.config.source = source.kind();
        self.source = source;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::StrategyKind;
    use bitrange_core::types::StateError;

    #[test]
    fn test_from_seed_defaults() {
        let engine = RangeEngine::from_seed(9);
        assert_eq!(engine.seed(), 9);
        assert_eq!(engine.source_kind(), SourceKind::XorShift128Plus);
    }

    #[test]
    fn test_from_config_validates() {
        let config = EngineConfig {
            word_bits: Some(8),
            ..EngineConfig::default()
        };
        let err = RangeEngine::from_config(&config).unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn test_missing_seed_is_zero() {
        let mut a = RangeEngine::from_config(&EngineConfig::default()).unwrap();
        let mut b = RangeEngine::from_seed(0);
        assert_eq!(a.seed(), 0);
        for _ in 0..32 {
            assert_eq!(
                a.range_cc(0u64, 1_000_000).unwrap(),
                b.range_cc(0u64, 1_000_000).unwrap()
            );
        }
    }

    #[test]
    fn test_one_shot_boundaries() {
        let mut engine = RangeEngine::from_seed(1);
        for _ in 0..1000 {
            let n: i16 = engine.range_oo(-3, 3).unwrap();
            assert!(n > -3 && n < 3);
            let m: u8 = engine.range_oc(250, 255).unwrap();
            assert!(m > 250);
        }
        assert!(engine.range_co(5u32, 5).is_err());
    }

    #[test]
    fn test_sampler_through_engine() {
        let mut engine = RangeEngine::from_seed(3);
        let mut sampler = engine.sampler(0u32, 64, BoundaryKind::ClosedOpen).unwrap();
        assert_eq!(sampler.strategy_kind(), StrategyKind::PowerOfTwo);
        for _ in 0..100 {
            assert!(engine.sample(&mut sampler) < 64);
        }
    }

    #[test]
    fn test_generator_through_engine() {
        let mut engine = RangeEngine::from_seed(3);
        let mut generator = engine.generator(1u8, 6, BoundaryKind::ClosedClosed).unwrap();
        let rolls: Vec<u8> = generator.samples().take(60).collect();
        assert!(rolls.iter().all(|r| (1..=6).contains(r)));
    }

    #[test]
    fn test_restore_switches_engine_kind() {
        let config = EngineConfig::builder()
            .seed(5)
            .source(SourceKind::SplitMix64)
            .build()
            .unwrap();
        let mut splitmix = RangeEngine::from_config(&config).unwrap();
        let state = splitmix.save_state();
        let expected: u64 = splitmix.range_cc(0, 99).unwrap();

        let mut engine = RangeEngine::from_seed(1);
        engine.restore_state(&state).unwrap();
        assert_eq!(engine.source_kind(), SourceKind::SplitMix64);
        assert_eq!(engine.config().source, SourceKind::SplitMix64);
        assert_eq!(engine.range_cc(0u64, 99).unwrap(), expected);
    }

    #[test]
    fn test_failed_restore_leaves_engine_unchanged() {
        let mut engine = RangeEngine::from_seed(4);
        let before = engine.save_state();
        let bad = SourceState::from_bytes(vec![0x02, 0, 0]);
        let err = engine.restore_state(&bad).unwrap_err();
        assert!(matches!(
            err,
            EngineError::State(StateError::WrongLength { expected: 17, got: 3 })
        ));
        assert_eq!(engine.save_state(), before);
    }
}
