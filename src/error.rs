use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the corpus or the table of contents.
///
/// Both variants are fatal to startup: the engine is never served
/// with a partially built index.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to load corpus from {}: {source}", path.display())]
    CorpusLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read table of contents at line {line}: {source}")]
    TocParse {
        /// 1-based line number of the failed read (0 when the stream could not be opened)
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for load-time operations
pub type Result<T> = std::result::Result<T, LoadError>;

impl LoadError {
    /// Short machine-readable name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::CorpusLoad { .. } => "corpus_load",
            LoadError::TocParse { .. } => "toc_parse",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display() {
        let err = LoadError::CorpusLoad {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "failed to load corpus from missing.txt: not found"
        );
        assert_eq!(err.kind(), "corpus_load");
    }

    #[test]
    fn test_toc_error_line() {
        let err = LoadError::TocParse {
            line: 7,
            source: io::Error::new(io::ErrorKind::InvalidData, "bad utf-8"),
        };
        assert!(err.to_string().contains("line 7"));
        assert_eq!(err.kind(), "toc_parse");
    }
}
