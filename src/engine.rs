//! Search engine
//!
//! Composition root for the corpus, its suffix array and the works mapping.
//! Everything is built once by [`SearchEngine::load`]; afterwards the engine
//! is read-only and can be shared behind an `Arc` by any number of callers.

use crate::error::Result;
use crate::index::snippet::{self, Snippet, DEFAULT_WINDOW};
use crate::index::suffix_array::{SuffixArray, SuffixArrayBuilder, SuffixArrayConfig};
use crate::index::Corpus;
use crate::toc::{parse_toc, parse_toc_file, WorksMap};
use crate::utils::progress::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::io::BufRead;
use std::path::PathBuf;
use std::time::Instant;

/// Inputs for loading an engine
#[derive(Debug, Clone)]
pub struct EngineOptions {
    pub corpus_path: PathBuf,
    pub toc_path: PathBuf,
    /// Context bytes on each side of a match
    pub window: usize,
    pub suffix_array: SuffixArrayConfig,
    /// Show a spinner while the suffix array is built
    pub show_progress: bool,
}

impl EngineOptions {
    pub fn new(corpus_path: impl Into<PathBuf>, toc_path: impl Into<PathBuf>) -> Self {
        Self {
            corpus_path: corpus_path.into(),
            toc_path: toc_path.into(),
            window: DEFAULT_WINDOW,
            suffix_array: SuffixArrayConfig::default(),
            show_progress: false,
        }
    }
}

/// Load statistics
#[derive(Debug, Clone, Serialize)]
pub struct EngineStats {
    pub corpus_bytes: usize,
    pub suffix_count: usize,
    pub title_count: usize,
    pub window: usize,
    pub parallel_build: bool,
    pub index_build_ms: f64,
    pub total_load_ms: f64,
}

/// Immutable substring search engine
pub struct SearchEngine {
    index: SuffixArray,
    works: WorksMap,
    window: usize,
    load_ms: f64,
}

impl SearchEngine {
    /// Load both input files and build the index
    ///
    /// Runs sequentially: table of contents, corpus, suffix array. Any
    /// failure aborts the load; no partially built engine is returned.
    pub fn load(options: &EngineOptions) -> Result<Self> {
        let started = Instant::now();

        let works = parse_toc_file(&options.toc_path)?;
        let corpus = Corpus::load(&options.corpus_path)?;
        let index = build_index(&corpus, options);

        let load_ms = started.elapsed().as_secs_f64() * 1000.0;
        tracing::info!(load_ms, "search engine ready");

        Ok(Self {
            index,
            works,
            window: options.window,
            load_ms,
        })
    }

    /// Build an engine from an in-memory corpus and table-of-contents stream
    pub fn from_parts<R: BufRead>(corpus: Corpus, toc: R, window: usize) -> Result<Self> {
        let started = Instant::now();
        let works = parse_toc(toc)?;
        let index = SuffixArrayBuilder::with_defaults().build(&corpus);

        Ok(Self {
            index,
            works,
            window,
            load_ms: started.elapsed().as_secs_f64() * 1000.0,
        })
    }

    /// Find every occurrence of `query` and return its context window
    ///
    /// Snippets are ordered by match position in the corpus. An empty query
    /// yields no results.
    pub fn search(&self, query: &str) -> Vec<String> {
        self.search_limited(query, None)
    }

    /// Like [`search`](Self::search), returning at most `limit` snippets when set
    pub fn search_limited(&self, query: &str, limit: Option<usize>) -> Vec<String> {
        let corpus = self.corpus().as_bytes();
        self.offsets(query, limit)
            .into_iter()
            .map(|offset| snippet::extract(corpus, offset, query.len(), self.window))
            .collect()
    }

    /// Search returning snippets with match positions, for highlighting
    pub fn search_snippets(&self, query: &str, limit: Option<usize>) -> Vec<Snippet> {
        let corpus = self.corpus().as_bytes();
        self.offsets(query, limit)
            .into_iter()
            .map(|offset| snippet::extract_snippet(corpus, offset, query.len(), self.window))
            .collect()
    }

    /// Corpus offsets of `query`, ascending
    pub fn offsets(&self, query: &str, limit: Option<usize>) -> Vec<usize> {
        let offsets = self.index.lookup(query.as_bytes(), limit);
        tracing::debug!(query, matches = offsets.len(), "lookup");
        offsets
    }

    pub fn corpus(&self) -> &Corpus {
        self.index.corpus()
    }

    pub fn index(&self) -> &SuffixArray {
        &self.index
    }

    pub fn works(&self) -> &WorksMap {
        &self.works
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn stats(&self) -> EngineStats {
        let meta = self.index.meta();
        EngineStats {
            corpus_bytes: self.corpus().len(),
            suffix_count: self.index.len(),
            title_count: self.works.len(),
            window: self.window,
            parallel_build: meta.parallel,
            index_build_ms: meta.build_ms,
            total_load_ms: self.load_ms,
        }
    }
}

fn build_index(corpus: &Corpus, options: &EngineOptions) -> SuffixArray {
    let spinner = if options.show_progress {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(format!("Indexing {} bytes...", corpus.len()));
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Some(spinner)
    } else {
        None
    };

    let index = SuffixArrayBuilder::new(options.suffix_array.clone()).build(corpus);

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn engine(text: &str, toc: &str) -> SearchEngine {
        SearchEngine::from_parts(
            Corpus::from_bytes(text.as_bytes().to_vec()),
            Cursor::new(toc.to_string()),
            DEFAULT_WINDOW,
        )
        .unwrap()
    }

    #[test]
    fn test_search_short_corpus() {
        let engine = engine("to be or not to be", "");
        assert_eq!(engine.offsets("be", None), vec![3, 16]);

        let results = engine.search("be");
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|s| s == "to be or not to be"));
    }

    #[test]
    fn test_search_absent_query() {
        let engine = engine("to be or not to be", "");
        assert!(engine.search("question").is_empty());
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        let engine = engine("to be or not to be", "");
        assert!(engine.search("").is_empty());
    }

    #[test]
    fn test_search_limited() {
        let engine = engine("ab ab ab ab", "");
        assert_eq!(engine.search_limited("ab", Some(2)).len(), 2);
        assert_eq!(engine.search_limited("ab", None).len(), 4);
    }

    #[test]
    fn test_snippets_are_position_ordered() {
        let text = format!("{}first{}second", "x".repeat(300), "y".repeat(300));
        let engine = SearchEngine::from_parts(
            Corpus::from_bytes(text.into_bytes()),
            Cursor::new(""),
            10,
        )
        .unwrap();

        let snippets = engine.search_snippets("s", None);
        assert_eq!(snippets.len(), 2);
        assert!(snippets[0].start < snippets[1].start);
        assert_eq!(snippets[0].text, "xxxxxxxfirstyyyyyyyy");
    }

    #[test]
    fn test_works_from_toc() {
        let engine = engine(
            "body",
            "Preface\nContents\nSonnet 1\nSonnet 2\n\nSonnet 1\ntext...\n",
        );
        assert_eq!(engine.works().len(), 2);
        assert_eq!(engine.stats().title_count, 2);
    }

    #[test]
    fn test_latin1_toc_loads() {
        let engine = SearchEngine::from_parts(
            Corpus::from_bytes(b"ROM\xc9O and JULIET".to_vec()),
            Cursor::new(b"Contents\nROM\xc9O\nHAMLET\nHAMLET\n".to_vec()),
            DEFAULT_WINDOW,
        )
        .unwrap();

        assert_eq!(engine.works().len(), 2);
        assert!(engine.works().contains("ROM\u{FFFD}O"));
        assert_eq!(engine.offsets("JULIET", None), vec![10]);
    }

    #[test]
    fn test_engine_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchEngine>();
    }
}
