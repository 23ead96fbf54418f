//! Domain error types.

use thiserror::Error;

/// Top-level error type for the Commute Story crates.
#[derive(Debug, Error, PartialEq)]
pub enum StoryError {
    /// No chapter carries the requested id.
    #[error("chapter not found: {0}")]
    ChapterNotFound(i64),

    /// A chapter catalog violated its construction invariants.
    #[error("invalid chapter catalog: {0}")]
    InvalidCatalog(String),

    /// A configuration value is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),
}
