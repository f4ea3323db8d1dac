pub mod corpus;
pub mod snippet;
pub mod stats;
pub mod suffix_array;

pub use corpus::Corpus;
pub use snippet::{extract, extract_snippet, Snippet, DEFAULT_WINDOW};
pub use suffix_array::{SuffixArray, SuffixArrayBuilder};
