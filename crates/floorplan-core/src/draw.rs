//! Drawable Components for Floor Plan Rendering
//!
//! This module provides drawable abstractions for the visual parts of a floor
//! plan. All drawable components implement the [`Drawable`] trait, which
//! provides a consistent interface for rendering to layered SVG output and
//! reporting size.
//!
//! # Layer-Based Rendering
//!
//! Drawables render to one or more [`RenderLayer`]s, which are ordered when
//! the output is flattened. Door and window glyphs therefore always sit above
//! every wall rectangle of the same room.
//!
//! # Positioning
//!
//! The `position` handed to [`Drawable::render_to_layers`] is the top-left
//! corner of the drawable. Rectangles are emitted from that corner and the
//! drawable's own size, so source coordinates reach the SVG unchanged.

mod boundary;
mod layer;
mod room;
mod stroke;
mod text;
mod wall;

pub use boundary::FloorBoundary;
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use room::{RoomDefinition, RoomDrawing, wall_bounds};
pub use stroke::{StrokeDefinition, StrokeStyle};
pub use text::{Text, TextDefinition};
pub use wall::{WallDefinition, WallSegment};

use crate::geometry::{Point, Size};

/// Trait for floor plan elements that can be rendered to SVG layers.
pub trait Drawable: std::fmt::Debug {
    /// Renders this drawable with its top-left corner at `position`.
    fn render_to_layers(&self, position: Point) -> LayeredOutput;

    /// Returns the size of this drawable.
    fn size(&self) -> Size;
}
