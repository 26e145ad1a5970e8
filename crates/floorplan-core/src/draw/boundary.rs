//! Floor outline.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::{Point, Size},
};

/// Unfilled rectangle around all rooms of a floor.
#[derive(Debug, Clone)]
pub struct FloorBoundary<'a> {
    stroke: &'a StrokeDefinition,
    size: Size,
}

impl<'a> FloorBoundary<'a> {
    pub fn new(stroke: &'a StrokeDefinition, size: Size) -> Self {
        Self { stroke, size }
    }
}

impl Drawable for FloorBoundary<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let rect = svg_element::Rectangle::new()
            .set("x", position.x())
            .set("y", position.y())
            .set("width", self.size.width())
            .set("height", self.size.height())
            .set("fill", "none")
            .set("data-type", "floor-boundary");
        output.add_to_layer(RenderLayer::Floor, Box::new(apply_stroke!(rect, self.stroke)));
        output
    }

    fn size(&self) -> Size {
        self.size
    }
}
