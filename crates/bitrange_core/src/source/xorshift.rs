//! xorshift128+ engine.

use rand::{Error, RngCore, SeedableRng};

use super::splitmix::SplitMix64;
use super::state::{SourceState, ENGINE_TAG_XORSHIFT128PLUS};
use super::SaveState;
use crate::types::StateError;

/// xorshift128+ generator (shift triple 23 / 18 / 5).
///
/// Two 64-bit words of state, period 2^128 - 1. The all-zero state is a
/// fixed point and is never produced by the seeding paths; restoring it is
/// rejected with [`StateError::DegenerateState`].
///
/// `next_u32` returns the high half of the 64-bit output, whose bits are the
/// strongest of this family.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XorShift128Plus {
    s0: u64,
    s1: u64,
}

impl XorShift128Plus {
    /// Creates a generator from a single seed expanded through SplitMix64.
    pub fn new(seed: u64) -> Self {
        let mut expander = SplitMix64::new(seed);
        let s0 = expander.next_word();
        let s1 = expander.next_word();
        // SplitMix64 output is a bijection of its counter: at most one zero word.
        debug_assert!(s0 != 0 || s1 != 0);
        Self { s0, s1 }
    }

    /// Creates a generator from explicit state words.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::DegenerateState`] if both words are zero.
    pub fn from_state_words(s0: u64, s1: u64) -> Result<Self, StateError> {
        if s0 == 0 && s1 == 0 {
            return Err(StateError::DegenerateState);
        }
        Ok(Self { s0, s1 })
    }

    /// Advances the state and returns the next word.
    #[inline]
    pub fn next_word(&mut self) -> u64 {
        let mut x = self.s0;
        let y = self.s1;
        let result = x.wrapping_add(y);
        self.s0 = y;
        x ^= x << 23;
        self.s1 = x ^ y ^ (x >> 18) ^ (y >> 5);
        result
    }
}

impl RngCore for XorShift128Plus {
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

impl SeedableRng for XorShift128Plus {
    type Seed = [u8; 16];

    /// An all-zero seed is replaced by the expansion of seed 0.
    fn from_seed(seed: Self::Seed) -> Self {
        let mut low = [0u8; 8];
        let mut high = [0u8; 8];
        low.copy_from_slice(&seed[..8]);
        high.copy_from_slice(&seed[8..]);
        Self::from_state_words(u64::from_le_bytes(low), u64::from_le_bytes(high))
            .unwrap_or_else(|_| Self::new(0))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}

impl SaveState for XorShift128Plus {
    fn save_state(&self) -> SourceState {
        SourceState::encode(ENGINE_TAG_XORSHIFT128PLUS, [self.s0, self.s1])
    }

    fn restore_from_state(state: &SourceState) -> Result<Self, StateError> {
        let [s0, s1] = state.decode::<2>(ENGINE_TAG_XORSHIFT128PLUS)?;
        Self::from_state_words(s0, s1)
    }
}
