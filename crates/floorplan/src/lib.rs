//! Floorplan - a text language for describing building floor plans
//!
//! This library parses floor plan source text, resolves the connections
//! between rooms and renders the result to SVG. Floors hold rooms, rooms hold
//! walls and nested sub-rooms, and connections link rooms through doors.

pub mod config;
pub mod layout;
pub mod resolve;

mod error;
mod export;

pub use floorplan_core::{color, draw, geometry, semantic};
pub use floorplan_parser::error::ParseError;

pub use error::FloorplanError;

use log::{debug, info, trace, warn};

use config::AppConfig;
use export::Exporter;
use resolve::Resolution;

/// Builder for parsing and rendering floor plans.
///
/// # Examples
///
/// ```
/// use floorplan::{FloorplanBuilder, config::AppConfig};
///
/// let source = r#"
///     floorplan
///         floor ground {
///             room Hall at (0,0) size (4 x 3) walls [bottom: door]
///         }
///     connect Hall.bottom to outside door
/// "#;
///
/// let builder = FloorplanBuilder::new(AppConfig::default());
///
/// // Parse source to semantic model
/// let floorplan = builder.parse(source).expect("Failed to parse");
///
/// // Render semantic model to SVG
/// let svg = builder.render_svg(&floorplan).expect("Failed to render");
/// assert!(svg.contains(r#"viewBox="0 0 4 3""#));
///
/// // Or use default config
/// let builder = FloorplanBuilder::default();
/// ```
#[derive(Debug, Default)]
pub struct FloorplanBuilder {
    config: AppConfig,
}

impl FloorplanBuilder {
    /// Create a new builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse source text into a semantic floor plan.
    ///
    /// This performs lexing, parsing, validation and elaboration.
    ///
    /// # Errors
    ///
    /// Returns [`FloorplanError::Parse`] holding every diagnostic together
    /// with the source, so callers can render snippets.
    ///
    /// # Examples
    ///
    /// ```
    /// use floorplan::{FloorplanBuilder, FloorplanError};
    ///
    /// let builder = FloorplanBuilder::default();
    /// let err = builder.parse("floorplan floor f1 {").unwrap_err();
    /// assert!(matches!(err, FloorplanError::Parse { .. }));
    /// ```
    pub fn parse(&self, source: &str) -> Result<semantic::Floorplan, FloorplanError> {
        info!("Parsing floorplan");
        let floorplan = floorplan_parser::parse(source)
            .map_err(|err| FloorplanError::new_parse_error(err, source))?;
        debug!(
            floors = floorplan.floors().len(),
            connections = floorplan.connections().len();
            "Floorplan parsed successfully"
        );
        trace!(floorplan:?; "Parsed floorplan");
        Ok(floorplan)
    }

    /// Resolve the connections of `floorplan` against its rooms.
    ///
    /// Unresolved names are reported in [`Resolution::errors`]; they never
    /// fail the call.
    pub fn resolve_connections<'a>(&self, floorplan: &'a semantic::Floorplan) -> Resolution<'a> {
        resolve::resolve_connections(floorplan)
    }

    /// Render a semantic floor plan to an SVG string.
    ///
    /// Connections are resolved first. Each [`resolve::LinkingError`] is
    /// logged at warn level and the rest of the floor plan still renders.
    ///
    /// # Errors
    ///
    /// Returns [`FloorplanError::Config`] when the configuration holds an
    /// invalid color or size, and [`FloorplanError::Export`] when the floor
    /// plan cannot be rendered.
    pub fn render_svg(&self, floorplan: &semantic::Floorplan) -> Result<String, FloorplanError> {
        let resolution = self.resolve_connections(floorplan);
        for err in resolution.errors() {
            warn!(err:%; "Unresolved connection");
        }

        let mut svg_exporter = export::svg::SvgBuilder::new()
            .with_config(&self.config)
            .build()?;

        let svg = svg_exporter.export_floorplan(floorplan, &resolution)?;

        info!("SVG rendered successfully");
        Ok(svg)
    }
}
