//! Types for suffix array indexing
//!
//! This module defines the core types used for suffix array-based search,
//! which provides O(m log n) exact substring matching over the corpus.

/// Byte offset into the corpus
pub type TextPosition = usize;

/// Suffix array entry - start offset of one suffix
pub type SuffixEntry = usize;

/// Configuration for suffix array building
#[derive(Debug, Clone)]
pub struct SuffixArrayConfig {
    /// Corpus size (bytes) above which ranking rounds run on rayon
    pub parallel_threshold: usize,
}

impl Default for SuffixArrayConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 100_000,
        }
    }
}

/// Statistics gathered while building a suffix array
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixArrayMeta {
    /// Size of the indexed text in bytes
    pub text_size: u64,
    /// Number of suffixes (equals text_size)
    pub suffix_count: u64,
    /// Whether the parallel ranking path was taken
    pub parallel: bool,
    /// Wall time spent building, in milliseconds
    pub build_ms: f64,
}
