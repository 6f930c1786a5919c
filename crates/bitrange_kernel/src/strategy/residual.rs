//! Residual bit buffer shared by all strategies.
//!
//! The buffer is a single word holding zero or more complete, unconsumed
//! groups of `bit_count` bits, terminated by one sentinel bit. Each extraction
//! shifts the buffer right by `bit_count`, so the sentinel walks down one
//! group at a time. Once every real group is consumed the sentinel sits at
//! bit 0 (or the buffer is zero), which makes `bits <= 1` the "refill needed"
//! test and removes the need for a separate counter.
//!
//! # Refill
//!
//! A refill draws one word and shifts it right by `excess_bits` (the
//! remainder of `W::BITS / bit_count`), leaving only complete groups with
//! zeros above them. It returns the low group and keeps the rest with the
//! sentinel placed at `W::BITS - bit_count - excess_bits`, directly above
//! the last complete group.

use bitrange_core::bits::Word;
use bitrange_core::source::BitSource;

/// Leftover random bits carried between draws.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct ResidualBits<W: Word> {
    bits: W,
}

impl<W: Word> ResidualBits<W> {
    /// An empty buffer; the first extraction refills it.
    #[inline]
    pub(crate) fn empty() -> Self {
        Self { bits: W::zero() }
    }

    /// Returns true when the next extraction must draw from the source.
    #[inline]
    pub(crate) fn is_exhausted(&self) -> bool {
        self.bits <= W::one()
    }

    /// Extracts the next `bit_count`-bit group, refilling when exhausted.
    ///
    /// `bit_mask` must isolate exactly `bit_count` low bits and
    /// `excess_bits` must equal `W::BITS % bit_count`.
    #[inline]
    pub(crate) fn take<S: BitSource + ?Sized>(
        &mut self,
        source: &mut S,
        bit_count: u8,
        bit_mask: W,
        excess_bits: u8,
    ) -> W {
        if !self.is_exhausted() {
            let group = self.bits & bit_mask;
            self.bits = self.bits.shr_or_zero(bit_count);
            return group;
        }

        let word = W::draw(source).shr_or_zero(excess_bits);
        self.refill_from(word, bit_count, bit_mask, excess_bits)
    }

    /// Extraction for group widths that divide the word exactly.
    ///
    /// Same protocol as [`take`](Self::take) with `excess_bits == 0`, minus the
    /// discard shift on refill.
    #[inline]
    pub(crate) fn take_aligned<S: BitSource + ?Sized>(
        &mut self,
        source: &mut S,
        bit_count: u8,
        bit_mask: W,
    ) -> W {
        if !self.is_exhausted() {
            let group = self.bits & bit_mask;
            self.bits = self.bits.shr_or_zero(bit_count);
            return group;
        }

        let word = W::draw(source);
        self.refill_from(word, bit_count, bit_mask, 0)
    }

    #[inline]
    fn refill_from(&mut self, word: W, bit_count: u8, bit_mask: W, excess_bits: u8) -> W {
        let group = word & bit_mask;
        let sentinel = W::bit(W::BITS - bit_count - excess_bits);
        self.bits = word.shr_or_zero(bit_count) | sentinel;
        group
    }
}
