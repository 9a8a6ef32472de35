//! Error types for evolve_words_io crate.
//!
//! Covers locating and reading the vocabulary and writing run reports.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for evolve_words_io operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// None of the candidate word lists exist
    #[error("Could not find a source of words (tried: {})", format_paths(.tried))]
    NoWordSource { tried: Vec<PathBuf> },

    /// A word list exists but holds no words
    #[error("Word list is empty: {}", .0.display())]
    EmptyVocabulary(PathBuf),

    /// File system errors
    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    /// JSON encoding errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<IoError>,
    },
}

fn format_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "nothing".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for evolve_words_io operations.
pub type Result<T> = std::result::Result<T, IoError>;

impl IoError {
    /// Wraps an error with additional context.
    #[must_use]
    pub fn with_context<S: Into<String>>(self, context: S) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }
}
