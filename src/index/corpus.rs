//! Corpus store
//!
//! Holds the full search text as an immutable byte buffer. The corpus is
//! read in one piece at load time and never mutated afterwards.

use crate::error::{LoadError, Result};
use std::path::Path;
use std::sync::Arc;

/// The immutable text being searched
#[derive(Debug, Clone)]
pub struct Corpus {
    bytes: Arc<[u8]>,
}

impl Corpus {
    /// Read the entire file at `path` into memory
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| LoadError::CorpusLoad {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(path = %path.display(), bytes = bytes.len(), "corpus loaded");

        Ok(Self::from_bytes(bytes))
    }

    /// Build a corpus from bytes already in memory
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: Arc::from(bytes.into()),
        }
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_reads_whole_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("corpus.txt");
        std::fs::write(&path, "to be or not to be").unwrap();

        let corpus = Corpus::load(&path).unwrap();
        assert_eq!(corpus.as_bytes(), b"to be or not to be");
        assert_eq!(corpus.len(), 18);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.txt");

        let err = Corpus::load(&path).unwrap_err();
        match err {
            LoadError::CorpusLoad { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_corpus() {
        let corpus = Corpus::from_bytes(Vec::new());
        assert!(corpus.is_empty());
    }
}
