//! Utility functions shared by the CLI and server.
//!
//! ## Modules
//!
//! - [`app_data`] - Configuration and app data directory (XDG-compliant)
//! - [`progress`] - Progress spinner, a no-op without the `progress` feature

pub mod app_data;
pub mod progress;

pub use app_data::*;
