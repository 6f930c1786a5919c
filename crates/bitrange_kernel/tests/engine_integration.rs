//! Integration tests for the engine layer.
//!
//! Covers configuration files and environment overrides, state snapshots
//! through the engine, and the log records emitted while building samplers.

use std::io::Write;
use std::sync::{Arc, Mutex};

use bitrange_core::types::BoundaryKind;
use bitrange_kernel::engine::{
    ConfigError, EngineConfig, EngineError, RangeEngine, SourceKind, ENV_SEED, ENV_SOURCE,
};
use bitrange_kernel::range::RangeSampler;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_config_file() {
    let file = write_config("seed = 1234\nsource = \"splitmix64\"\n");
    let config = EngineConfig::load(file.path()).unwrap();
    assert_eq!(config.seed, Some(1234));
    assert_eq!(config.source, SourceKind::SplitMix64);

    let mut from_file = RangeEngine::from_config(&config).unwrap();
    let mut from_code = RangeEngine::from_config(
        &EngineConfig::builder()
            .seed(1234)
            .source(SourceKind::SplitMix64)
            .build()
            .unwrap(),
    )
    .unwrap();
    for _ in 0..100 {
        assert_eq!(
            from_file.range_co(0u32, 1_000).unwrap(),
            from_code.range_co(0u32, 1_000).unwrap()
        );
    }
}

#[test]
fn test_missing_config_file() {
    let err = EngineConfig::load(std::path::Path::new("/nonexistent/bitrange.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));

    let engine_err: EngineError = err.into();
    assert!(engine_err.to_string().starts_with("Configuration error: IO error"));
}

#[test]
fn test_malformed_config_file() {
    let file = write_config("seed = \"not a number\"\n");
    assert!(matches!(
        EngineConfig::load(file.path()),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_env_override() {
    let file = write_config("seed = 1\nsource = \"xorshift128plus\"\n");

    std::env::set_var(ENV_SEED, "987654321");
    std::env::set_var(ENV_SOURCE, "SplitMix64");
    let config = EngineConfig::load_with_env_and_validate(file.path());
    std::env::remove_var(ENV_SEED);
    std::env::remove_var(ENV_SOURCE);

    let config = config.unwrap();
    assert_eq!(config.seed, Some(987_654_321));
    assert_eq!(config.source, SourceKind::SplitMix64);
}

#[test]
fn test_engine_snapshot_with_sampler() {
    let mut engine = RangeEngine::from_seed(2718);
    let mut sampler = engine.sampler(-1000i64, 1000, BoundaryKind::OpenOpen).unwrap();
    for _ in 0..11 {
        engine.sample(&mut sampler);
    }

    let state = engine.save_state();
    let mut sampler_copy = sampler.clone();
    let expected: Vec<i64> = (0..100).map(|_| engine.sample(&mut sampler)).collect();

    let mut other = RangeEngine::from_seed(0);
    other.restore_state(&state).unwrap();
    let resumed: Vec<i64> = (0..100).map(|_| other.sample(&mut sampler_copy)).collect();
    assert_eq!(resumed, expected);
}

#[test]
fn test_engine_generator_samples() {
    let mut engine = RangeEngine::from_seed(31);
    let mut generator = engine.generator(0u8, 100, BoundaryKind::ClosedOpen).unwrap();
    let mut out = [0u8; 256];
    generator.fill(&mut out);
    assert!(out.iter().all(|&v| v < 100));
}

/// Shared buffer the fmt subscriber writes into.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_sampler_and_engine_logging() {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut engine = RangeEngine::from_seed(5);
        let sampler = RangeSampler::new(71u32, 1500, BoundaryKind::ClosedOpen).unwrap();
        assert_eq!(sampler.range_max(), 1428);
        let state = engine.save_state();
        engine.restore_state(&state).unwrap();
    });

    let logs = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    assert!(logs.contains("range engine created"), "{}", logs);
    assert!(logs.contains("range sampler built"), "{}", logs);
    assert!(logs.contains("strategy=any-range"), "{}", logs);
    assert!(logs.contains("range_max=1428"), "{}", logs);
    assert!(logs.contains("range engine state restored"), "{}", logs);
}

#[test]
fn test_one_shot_draws_do_not_log() {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let mut engine = RangeEngine::from_seed(5);
    tracing::subscriber::with_default(subscriber, || {
        for _ in 0..100 {
            engine.range_cc(1u16, 6).unwrap();
        }
    });

    assert!(buffer.0.lock().unwrap().is_empty());
}
