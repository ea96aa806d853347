//! Packed composite markers for the sieve.

use std::collections::TryReserveError;

const WORD_BITS: usize = u64::BITS as usize;

/// One bit per integer in `[0, len)`; a set bit means the integer is known
/// to be composite.
///
/// Bits past `len` in the last word are never set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompositeBitmap {
    words: Vec<u64>,
    len: usize,
}

impl CompositeBitmap {
    /// Allocates `len` cells, all unmarked.
    ///
    /// This is the only allocation the sieve makes; failure is returned
    /// instead of aborting the process.
    pub fn try_new(len: usize) -> Result<Self, TryReserveError> {
        let word_count = len.div_ceil(WORD_BITS);
        let mut words = Vec::new();
        words.try_reserve_exact(word_count)?;
        words.resize(word_count, 0);
        Ok(Self { words, len })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// # Panics
    ///
    /// If `index >= self.len()`.
    #[inline]
    pub fn is_composite(&self, index: usize) -> bool {
        self.check_bounds(index);
        self.words[index / WORD_BITS] & (1u64 << (index % WORD_BITS)) != 0
    }

    #[cfg(test)]
    fn mark(&mut self, index: usize) {
        self.check_bounds(index);
        self.words[index / WORD_BITS] |= 1u64 << (index % WORD_BITS);
    }

    /// Marks every multiple of `prime` from `prime * prime` up to the last
    /// cell. Smaller multiples have a smaller prime factor and were marked
    /// when that factor was processed.
    pub fn mark_multiples(&mut self, prime: usize) {
        assert!(prime >= 2, "cannot sieve by {prime}");
        let Some(start) = prime.checked_mul(prime) else {
            return;
        };
        for multiple in (start..self.len).step_by(prime) {
            self.words[multiple / WORD_BITS] |= 1u64 << (multiple % WORD_BITS);
        }
    }

    /// Number of unmarked cells in `[from, len)`.
    #[cfg(test)]
    fn count_unmarked(&self, from: usize) -> usize {
        (from..self.len).filter(|&i| !self.is_composite(i)).count()
    }

    fn check_bounds(&self, index: usize) {
        assert!(
            index < self.len,
            "index {index} out of range for bitmap of {} cells",
            self.len
        );
    }
}
