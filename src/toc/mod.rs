//! Table of contents
//!
//! Builds the works mapping (title → entries) from the `Contents` listing of
//! an auxiliary text file. Entry lists are created empty and stay empty.

pub mod parser;

pub use parser::{parse_toc, parse_toc_file, TocParser, TocState, CONTENTS_MARKER};

use ahash::RandomState;
use serde::Serialize;
use std::collections::HashMap;

/// Mapping from work title to its listed entries
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct WorksMap {
    works: HashMap<String, Vec<String>, RandomState>,
}

impl WorksMap {
    /// Insert a title with an empty entry list; existing titles are left alone
    pub fn insert_title(&mut self, title: &str) {
        self.works.entry(title.to_string()).or_default();
    }

    pub fn contains(&self, title: &str) -> bool {
        self.works.contains_key(title)
    }

    pub fn entries(&self, title: &str) -> Option<&[String]> {
        self.works.get(title).map(Vec::as_slice)
    }

    /// All titles, in no particular order
    pub fn titles(&self) -> Vec<&str> {
        self.works.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.works.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.works.len()
    }

    pub fn is_empty(&self) -> bool {
        self.works.is_empty()
    }
}
