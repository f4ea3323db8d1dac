//! Suffix array indexing module
//!
//! This module provides O(m log n) exact substring search using a suffix
//! array built once over the corpus. The array lives in memory for the
//! lifetime of the process and is never persisted.
//!
//! ## Architecture
//!
//! - `builder`: Prefix-doubling construction over rank arrays
//! - `lookup`: Binary search for the band of suffixes starting with a pattern
//! - `types`: Core type definitions

pub mod builder;
pub mod lookup;
pub mod types;

// Re-exports for convenience
pub use builder::SuffixArrayBuilder;
pub use lookup::SuffixArray;
pub use types::{SuffixArrayConfig, SuffixArrayMeta, TextPosition};
