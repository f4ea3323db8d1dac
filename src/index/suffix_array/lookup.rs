//! Suffix array lookup
//!
//! Provides O(m log n) substring search over an in-memory suffix array.

use super::types::*;
use crate::index::corpus::Corpus;

/// A sorted suffix array together with the corpus it indexes
///
/// Immutable once built. Every query takes `&self`, so one instance can be
/// shared across threads without locking.
pub struct SuffixArray {
    corpus: Corpus,
    suffixes: Vec<SuffixEntry>,
    meta: SuffixArrayMeta,
}

impl SuffixArray {
    pub(crate) fn from_parts(
        corpus: Corpus,
        suffixes: Vec<SuffixEntry>,
        meta: SuffixArrayMeta,
    ) -> Self {
        Self {
            corpus,
            suffixes,
            meta,
        }
    }

    /// Get text starting at a position
    #[inline]
    fn text_at(&self, pos: TextPosition) -> &[u8] {
        &self.corpus.as_bytes()[pos..]
    }

    /// Search for a pattern in the suffix array
    ///
    /// Returns the range [lo, hi) of indices in the suffix array
    /// where all suffixes start with the pattern.
    pub fn range(&self, pattern: &[u8]) -> (usize, usize) {
        if pattern.is_empty() || self.suffixes.is_empty() {
            return (0, 0);
        }

        let lo = self.lower_bound(pattern);
        let hi = self.upper_bound(pattern, lo);
        (lo, hi)
    }

    /// Find first index where suffix starts with pattern (or would if inserted)
    fn lower_bound(&self, pattern: &[u8]) -> usize {
        let mut lo = 0;
        let mut hi = self.suffixes.len();

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let suffix = self.text_at(self.suffixes[mid]);

            // Compare only up to pattern length
            let cmp_len = pattern.len().min(suffix.len());
            if &suffix[..cmp_len] < pattern {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        lo
    }

    /// Find first index at or after `start` where suffix does NOT start with pattern
    fn upper_bound(&self, pattern: &[u8], start: usize) -> usize {
        let mut lo = start;
        let mut hi = self.suffixes.len();

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.text_at(self.suffixes[mid]).starts_with(pattern) {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        lo
    }

    /// Find the corpus offsets at which `pattern` occurs
    ///
    /// `None` returns every occurrence; `Some(k)` returns at most `k`.
    /// Offsets come back in ascending corpus order, so a limited lookup
    /// yields the first `k` occurrences of the unlimited one. An empty
    /// pattern matches nothing.
    pub fn lookup(&self, pattern: &[u8], limit: Option<usize>) -> Vec<TextPosition> {
        let (lo, hi) = self.range(pattern);
        if lo == hi || limit == Some(0) {
            return Vec::new();
        }

        let mut offsets = self.suffixes[lo..hi].to_vec();

        match limit {
            Some(k) if k < offsets.len() => {
                offsets.select_nth_unstable(k);
                offsets.truncate(k);
                offsets.sort_unstable();
            }
            _ => offsets.sort_unstable(),
        }

        offsets
    }

    /// Get the number of occurrences of a pattern
    pub fn count(&self, pattern: &[u8]) -> usize {
        let (lo, hi) = self.range(pattern);
        hi - lo
    }

    /// Check if pattern exists in the corpus
    pub fn contains(&self, pattern: &[u8]) -> bool {
        let (lo, hi) = self.range(pattern);
        lo < hi
    }

    /// The indexed corpus
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Raw suffix order (lexicographic by suffix)
    pub fn suffixes(&self) -> &[SuffixEntry] {
        &self.suffixes
    }

    pub fn meta(&self) -> SuffixArrayMeta {
        self.meta
    }

    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }
}
