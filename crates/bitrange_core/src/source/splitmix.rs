//! SplitMix64 engine.

use rand::{Error, RngCore, SeedableRng};

use super::state::{SourceState, ENGINE_TAG_SPLITMIX64};
use super::SaveState;
use crate::types::StateError;

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// SplitMix64 generator.
///
/// One 64-bit word of state, period 2^64. Every seed (including zero) is
/// valid. Also used to expand a single `u64` seed into the state of
/// [`XorShift128Plus`](super::XorShift128Plus).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Creates a generator whose state is exactly `seed`.
    #[inline]
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advances the state and returns the next mixed word.
    #[inline]
    pub fn next_word(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

impl RngCore for SplitMix64 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.next_word() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.next_word()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_word().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for SplitMix64 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}

impl SaveState for SplitMix64 {
    fn save_state(&self) -> SourceState {
        SourceState::encode(ENGINE_TAG_SPLITMIX64, [self.state])
    }

    fn restore_from_state(state: &SourceState) -> Result<Self, StateError> {
        let [word] = state.decode::<1>(ENGINE_TAG_SPLITMIX64)?;
        Ok(Self::new(word))
    }
}
