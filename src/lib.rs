//! # worksearch - substring search with context
//!
//! worksearch loads one fixed text corpus, builds a suffix array over it and
//! answers substring queries with a window of surrounding text for every
//! match. It also reads the `Contents` listing of an auxiliary file into a
//! title mapping.
//!
//! ## Architecture
//!
//! - [`index`] - Corpus store, suffix array and snippet extraction
//! - [`toc`] - Table-of-contents state machine and works mapping
//! - [`engine`] - Composition root: load once, search many times
//! - [`server`] - HTTP front end (axum)
//! - [`output`] - Terminal formatting
//! - [`utils`] - Configuration and progress reporting
//!
//! ## Quick Start
//!
//! ```no_run
//! use worksearch::engine::{EngineOptions, SearchEngine};
//!
//! let options = EngineOptions::new("completeworks.txt", "completeworks.txt");
//! let engine = SearchEngine::load(&options).unwrap();
//!
//! for snippet in engine.search("to be or not") {
//!     println!("{snippet}");
//! }
//! ```
//!
//! ## Lifecycle
//!
//! Loading is a separate, fallible phase: [`engine::SearchEngine::load`]
//! either returns a complete engine or a [`error::LoadError`]. The loaded
//! engine is immutable and `Send + Sync`, so request handlers share it
//! through an `Arc` without locks.

pub mod engine;
pub mod error;
pub mod index;
pub mod output;
pub mod server;
pub mod toc;
pub mod utils;

pub use engine::{EngineOptions, SearchEngine};
pub use error::LoadError;
