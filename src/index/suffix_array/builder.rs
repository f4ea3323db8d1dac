//! Suffix array builder
//!
//! Builds a suffix array by prefix doubling: suffixes are first bucketed by
//! their leading byte, then each round sorts them by the rank pair of the
//! two halves of a prefix twice as long as the last round's. Every round is
//! a linear counting sort, and at most `log2(n)` rounds are needed, so the
//! build is O(n log n) whatever the shape of the text. Large corpora
//! re-rank each round in parallel with rayon.

use super::types::*;
use crate::index::corpus::Corpus;
use crate::index::suffix_array::SuffixArray;
use rayon::prelude::*;
use std::time::Instant;

/// Number of distinct leading bytes
const BYTE_BUCKETS: usize = 256;

/// Builder for constructing a suffix array from a corpus
pub struct SuffixArrayBuilder {
    config: SuffixArrayConfig,
}

impl SuffixArrayBuilder {
    /// Create a new suffix array builder with the given configuration
    pub fn new(config: SuffixArrayConfig) -> Self {
        Self { config }
    }

    /// Create a builder with default configuration
    pub fn with_defaults() -> Self {
        Self::new(SuffixArrayConfig::default())
    }

    /// Build the suffix array for `corpus`
    ///
    /// The corpus buffer is shared with the returned index, not copied.
    pub fn build(&self, corpus: &Corpus) -> SuffixArray {
        let text = corpus.as_bytes();
        let parallel = text.len() > self.config.parallel_threshold;

        let started = Instant::now();
        let suffixes = build_suffix_array(text, parallel);
        let build_ms = started.elapsed().as_secs_f64() * 1000.0;

        tracing::info!(
            suffixes = suffixes.len(),
            parallel,
            build_ms,
            "suffix array built"
        );

        let meta = SuffixArrayMeta {
            text_size: text.len() as u64,
            suffix_count: suffixes.len() as u64,
            parallel,
            build_ms,
        };

        SuffixArray::from_parts(corpus.clone(), suffixes, meta)
    }
}

/// Build suffix array by prefix doubling
///
/// Time: O(n log n), a counting sort per round
/// Space: O(n) for the suffix array plus three working arrays
fn build_suffix_array(text: &[u8], parallel: bool) -> Vec<SuffixEntry> {
    let n = text.len();
    if n == 0 {
        return Vec::new();
    }

    // Round zero: bucket by leading byte
    let mut counts = vec![0usize; BYTE_BUCKETS];
    for &b in text {
        counts[b as usize] += 1;
    }
    exclusive_prefix_sum(&mut counts);

    let mut sa = vec![0 as SuffixEntry; n];
    for (pos, &b) in text.iter().enumerate() {
        sa[counts[b as usize]] = pos;
        counts[b as usize] += 1;
    }

    let mut rank = vec![0usize; n];
    let mut classes = 1;
    for j in 1..n {
        if text[sa[j]] != text[sa[j - 1]] {
            classes += 1;
        }
        rank[sa[j]] = classes - 1;
    }

    let mut by_second = Vec::with_capacity(n);
    let mut next_rank = vec![0usize; n];
    let mut k = 1;

    // Ranks cover the first `k` bytes of each suffix; once all are distinct
    // the order is final
    while classes < n {
        // Order by the rank of the second half. Suffixes with no second half
        // sort first; the rest follow the current order shifted back by `k`.
        by_second.clear();
        by_second.extend(n.saturating_sub(k)..n);
        by_second.extend(sa.iter().filter(|&&pos| pos >= k).map(|&pos| pos - k));

        // Stable counting sort on the first half's rank
        counts.clear();
        counts.resize(classes, 0);
        for &pos in &by_second {
            counts[rank[pos]] += 1;
        }
        exclusive_prefix_sum(&mut counts);
        for &pos in &by_second {
            let r = rank[pos];
            sa[counts[r]] = pos;
            counts[r] += 1;
        }

        // A new class starts wherever the rank pair changes
        let key = |pos: usize| (rank[pos], rank.get(pos + k).copied());
        let boundaries: Vec<bool> = if parallel {
            (1..n)
                .into_par_iter()
                .map(|j| key(sa[j]) != key(sa[j - 1]))
                .collect()
        } else {
            (1..n).map(|j| key(sa[j]) != key(sa[j - 1])).collect()
        };

        next_rank[sa[0]] = 0;
        classes = 1;
        for (j, &boundary) in boundaries.iter().enumerate() {
            if boundary {
                classes += 1;
            }
            next_rank[sa[j + 1]] = classes - 1;
        }

        std::mem::swap(&mut rank, &mut next_rank);
        k *= 2;
    }

    sa
}

/// Turn per-bucket counts into bucket start offsets
fn exclusive_prefix_sum(counts: &mut [usize]) {
    let mut sum = 0;
    for count in counts.iter_mut() {
        let c = *count;
        *count = sum;
        sum += c;
    }
}
