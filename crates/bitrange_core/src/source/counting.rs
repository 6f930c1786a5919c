//! Draw-counting wrapper.

use rand::{Error, RngCore};

use super::BitSource;

/// Wraps a bit source and counts the raw draws made through it.
///
/// Used to verify bit economy: how many words a generator pulls for a
/// given number of outputs, and that single-value ranges pull none.
///
/// # Examples
///
/// ```
/// use bitrange_core::source::{BitSource, CountingSource, SplitMix64};
///
/// let mut source = CountingSource::new(SplitMix64::new(1));
/// source.next_u32();
/// source.next_u64();
/// source.next_u64();
/// assert_eq!(source.draws_u32(), 1);
/// assert_eq!(source.draws_u64(), 2);
/// assert_eq!(source.bits_drawn(), 160);
/// ```
#[derive(Clone, Debug)]
pub struct CountingSource<S> {
    inner: S,
    draws_u32: u64,
    draws_u64: u64,
}

impl<S: BitSource> CountingSource<S> {
    /// Wraps `inner` with zeroed counters.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            draws_u32: 0,
            draws_u64: 0,
        }
    }

    /// Number of 32-bit draws so far.
    #[inline]
    pub fn draws_u32(&self) -> u64 {
        self.draws_u32
    }

    /// Number of 64-bit draws so far.
    #[inline]
    pub fn draws_u64(&self) -> u64 {
        self.draws_u64
    }

    /// Total raw draws of either width.
    #[inline]
    pub fn total_draws(&self) -> u64 {
        self.draws_u32 + self.draws_u64
    }

    /// Total raw bits pulled from the inner source.
    #[inline]
    pub fn bits_drawn(&self) -> u64 {
        self.draws_u32 * 32 + self.draws_u64 * 64
    }

    /// Resets both counters without touching the inner source.
    pub fn reset_counts(&mut self) {
        self.draws_u32 = 0;
        self.draws_u64 = 0;
    }

    /// Returns a reference to the inner source.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Unwraps the inner source.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: BitSource> RngCore for CountingSource<S> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.draws_u32 += 1;
        BitSource::next_u32(&mut self.inner)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.draws_u64 += 1;
        BitSource::next_u64(&mut self.inner)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = RngCore::next_u64(self).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
