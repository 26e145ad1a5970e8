//! Error types for floorplan operations.
//!
//! This module provides the main error type [`FloorplanError`] which wraps
//! the error conditions that can occur while parsing and rendering.

use std::io;

use thiserror::Error;

use floorplan_parser::error::ParseError;

/// The main error type for floorplan operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the source text next to the diagnostics so a
/// front end can render snippets for every labeled span.
#[derive(Debug, Error)]
pub enum FloorplanError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for FloorplanError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl FloorplanError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
