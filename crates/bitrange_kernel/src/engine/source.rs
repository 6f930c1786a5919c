//! The bit source owned by an engine.

use bitrange_core::source::{
    SaveState, SourceState, SplitMix64, XorShift128Plus, ENGINE_TAG_SPLITMIX64,
    ENGINE_TAG_XORSHIFT128PLUS,
};
use bitrange_core::types::StateError;
use rand::{Error, RngCore};

use super::config::SourceKind;

/// One of the built-in engines, selected at run time by [`SourceKind`].
///
/// Restoring dispatches on the engine tag of the saved state, so a state
/// saved from either engine can be restored without knowing which one it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineSource {
    /// SplitMix64 engine.
    SplitMix64(SplitMix64),
    /// xorshift128+ engine.
    XorShift128Plus(XorShift128Plus),
}

impl EngineSource {
    /// Seeds a new engine of the given kind.
    pub fn new(kind: SourceKind, seed: u64) -> Self {
        match kind {
            SourceKind::SplitMix64 => EngineSource::SplitMix64(SplitMix64::new(seed)),
            SourceKind::XorShift128Plus => EngineSource::XorShift128Plus(XorShift128Plus::new(seed)),
        }
    }

    /// Which engine this is.
    pub fn kind(&self) -> SourceKind {
        match self {
            EngineSource::SplitMix64(_) => SourceKind::SplitMix64,
            EngineSource::XorShift128Plus(_) => SourceKind::XorShift128Plus,
        }
    }
}

impl RngCore for EngineSource {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        match self {
            EngineSource::SplitMix64(rng) => rng.next_u32(),
            EngineSource::XorShift128Plus(rng) => rng.next_u32(),
        }
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        match self {
            EngineSource::SplitMix64(rng) => rng.next_u64(),
            EngineSource::XorShift128Plus(rng) => rng.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            EngineSource::SplitMix64(rng) => rng.fill_bytes(dest),
            EngineSource::XorShift128Plus(rng) => rng.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SaveState for EngineSource {
    fn save_state(&self) -> SourceState {
        match self {
            EngineSource::SplitMix64(rng) => rng.save_state(),
            EngineSource::XorShift128Plus(rng) => rng.save_state(),
        }
    }

    fn restore_from_state(state: &SourceState) -> Result<Self, StateError> {
        match state.engine_tag() {
            Some(ENGINE_TAG_SPLITMIX64) => {
                SplitMix64::restore_from_state(state).map(EngineSource::SplitMix64)
            }
            Some(ENGINE_TAG_XORSHIFT128PLUS) => {
                XorShift128Plus::restore_from_state(state).map(EngineSource::XorShift128Plus)
            }
            Some(tag) => Err(StateError::UnknownEngine(tag)),
            // Not even a tag byte.
            None => Err(StateError::WrongLength {
                expected: 1,
                got: 0,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trip() {
        for kind in [SourceKind::SplitMix64, SourceKind::XorShift128Plus] {
            assert_eq!(EngineSource::new(kind, 1).kind(), kind);
        }
    }

    #[test]
    fn test_delegates_to_inner_engine() {
        let mut source = EngineSource::new(SourceKind::SplitMix64, 0);
        let mut reference = SplitMix64::new(0);
        for _ in 0..8 {
            assert_eq!(source.next_u64(), reference.next_u64());
            assert_eq!(source.next_u32(), reference.next_u32());
        }
    }

    #[test]
    fn test_restore_dispatches_on_tag() {
        for kind in [SourceKind::SplitMix64, SourceKind::XorShift128Plus] {
            let mut source = EngineSource::new(kind, 77);
            source.next_u64();
            let state = source.save_state();
            let mut restored = EngineSource::restore_from_state(&state).unwrap();
            assert_eq!(restored.kind(), kind);
            assert_eq!(restored.next_u64(), source.next_u64());
        }
    }

    #[test]
    fn test_restore_rejects_unknown_and_empty() {
        let unknown = SourceState::from_bytes(vec![0x7f; 9]);
        assert_eq!(
            EngineSource::restore_from_state(&unknown),
            Err(StateError::UnknownEngine(0x7f))
        );

        let empty = SourceState::from_bytes(Vec::new());
        assert!(matches!(
            EngineSource::restore_from_state(&empty),
            Err(StateError::WrongLength { got: 0, .. })
        ));
    }
}
