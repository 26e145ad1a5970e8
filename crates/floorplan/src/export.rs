//! Export functionality for floor plans.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! turning a floor plan and its resolved connections into an output format.
//! It is the final stage of the processing pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text
//!     ↓ parse
//! Semantic Model (Floorplan)
//!     ↓ resolve
//! Resolved Connections
//!     ↓ export (this module)
//! SVG Document
//! ```
//!
//! # Error Handling
//!
//! Export operations return [`Error`]. [`Error`] converts into
//! [`FloorplanError::Export`] at the crate boundary.
//!
//! [`FloorplanError::Export`]: crate::FloorplanError::Export

/// SVG export backend.
pub mod svg;

use floorplan_core::semantic::Floorplan;

use crate::resolve::Resolution;

/// Abstraction for floor plan export backends.
pub trait Exporter {
    /// Exports `floorplan` to the backend's output format.
    ///
    /// `resolution` carries the connections that resolved; the backend may
    /// use them to place door glyphs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the floor plan cannot be converted to the
    /// target format. No partial output is produced.
    fn export_floorplan(
        &mut self,
        floorplan: &Floorplan,
        resolution: &Resolution<'_>,
    ) -> Result<String, Error>;
}

/// Errors that can occur during export.
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
