//! Opaque saved engine state.

use std::fmt;

use crate::types::StateError;

/// Tag byte identifying a saved [`SplitMix64`](super::SplitMix64) state.
pub const ENGINE_TAG_SPLITMIX64: u8 = 0x01;

/// Tag byte identifying a saved [`XorShift128Plus`](super::XorShift128Plus) state.
pub const ENGINE_TAG_XORSHIFT128PLUS: u8 = 0x02;

/// Saved state of a bit source.
///
/// The layout is one engine tag byte followed by the engine's state words in
/// little-endian order. Callers should treat the bytes as opaque.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceState {
    bytes: Vec<u8>,
}

impl SourceState {
    /// Wraps raw bytes, e.g. read back from storage.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Returns the raw bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the state and returns the raw bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Returns the engine tag, or `None` for an empty state.
    #[inline]
    pub fn engine_tag(&self) -> Option<u8> {
        self.bytes.first().copied()
    }

    pub(crate) fn encode<const N: usize>(tag: u8, words: [u64; N]) -> Self {
        let mut bytes = Vec::with_capacity(1 + N * 8);
        bytes.push(tag);
        for word in words {
            bytes.extend_from_slice(&word.to_le_bytes());
        }
        Self { bytes }
    }

    pub(crate) fn decode<const N: usize>(&self, tag: u8) -> Result<[u64; N], StateError> {
        let expected = 1 + N * 8;
        if self.bytes.len() != expected {
            return Err(StateError::WrongLength {
                expected,
                got: self.bytes.len(),
            });
        }
        if self.bytes[0] != tag {
            return Err(StateError::EngineMismatch {
                expected: tag,
                got: self.bytes[0],
            });
        }

        let mut words = [0u64; N];
        for (word, chunk) in words.iter_mut().zip(self.bytes[1..].chunks_exact(8)) {
            let mut raw = [0u8; 8];
            raw.copy_from_slice(chunk);
            *word = u64::from_le_bytes(raw);
        }
        Ok(words)
    }
}

impl fmt::Debug for SourceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SourceState(")?;
        for byte in &self.bytes {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}
