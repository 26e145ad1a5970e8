//! Text rendering for room names and labels.
//!
//! - [`TextDefinition`] - Reusable text style configuration
//! - [`Text`] - A renderable, possibly multi-line text block
//!
//! Text is rendered as one SVG `<text>` element with a `<tspan>` per line,
//! centered horizontally and vertically on a point.
//! Font metrics are not measured; the line height is a fixed multiple of the
//! font size and widths are estimated from the character count.

use log::trace;
use svg::{Node, node::element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer},
    geometry::{Bounds, Point, Size},
};

/// Line height as a multiple of the font size.
const LINE_HEIGHT_FACTOR: f64 = 1.2;

/// Average glyph advance as a multiple of the font size.
const GLYPH_WIDTH_FACTOR: f64 = 0.6;

/// Text style shared by every label of a drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: f64,
    color: Option<Color>,
}

impl TextDefinition {
    /// Creates the default style: `sans-serif` at 0.5 plan units, no explicit color.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    /// Fill color; `None` leaves the SVG default.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Distance between consecutive baselines.
    pub fn line_height(&self) -> f64 {
        self.font_size * LINE_HEIGHT_FACTOR
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.font_family = family.into();
    }

    pub fn set_font_size(&mut self, size: f64) {
        self.font_size = size;
    }

    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            font_size: 0.5,
            color: None,
        }
    }
}

/// A block of text lines drawn centered on a point.
///
/// # Examples
///
/// ```
/// # use floorplan_core::draw::{Drawable, Text, TextDefinition};
/// # use floorplan_core::geometry::Point;
/// let style = TextDefinition::new();
/// let text = Text::new(&style, vec!["Kitchen".to_string(), "4 x 3".to_string()]);
///
/// let nodes = text.render_centered(Point::new(2.0, 1.5)).render();
/// let svg = nodes[0].to_string();
/// assert!(svg.contains("text-anchor=\"middle\""));
/// assert!(svg.contains("Kitchen"));
/// assert!(svg.contains("4 x 3"));
/// ```
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    lines: Vec<String>,
}

impl<'a> Text<'a> {
    pub fn new(definition: &'a TextDefinition, lines: Vec<String>) -> Self {
        Self { definition, lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Vertical position of each line, centered as a block on `center_y`.
    fn line_positions(&self, center_y: f64) -> impl Iterator<Item = f64> + '_ {
        let line_height = self.definition.line_height();
        let first = center_y - (self.lines.len().saturating_sub(1) as f64) * line_height / 2.0;
        (0..self.lines.len()).map(move |i| first + i as f64 * line_height)
    }
}

impl Text<'_> {
    /// Renders the block centered on `center`.
    pub fn render_centered(&self, center: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        if self.lines.is_empty() {
            return output;
        }

        // Plain element: the tspans are its only children.
        let mut rendered_text = svg_element::Element::new(svg_element::tag::Text);
        rendered_text.assign("x", center.x());
        rendered_text.assign("y", center.y());
        rendered_text.assign("text-anchor", "middle");
        rendered_text.assign("dominant-baseline", "central");
        rendered_text.assign("font-family", self.definition.font_family());
        rendered_text.assign("font-size", self.definition.font_size());

        if let Some(color) = self.definition.color() {
            rendered_text.assign("fill", color.to_string());
            rendered_text.assign("fill-opacity", color.alpha());
        }

        for (line, y) in self.lines.iter().zip(self.line_positions(center.y())) {
            trace!(line, y; "Text line");
            let tspan = svg_element::TSpan::new(line.as_str())
                .set("x", center.x())
                .set("y", y);
            rendered_text.append(tspan);
        }

        output.add_to_layer(RenderLayer::Text, Box::new(rendered_text));
        output
    }
}

impl Drawable for Text<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        self.render_centered(Bounds::new_from_top_left(position, self.size()).center())
    }

    fn size(&self) -> Size {
        let longest = self
            .lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        Size::new(
            longest as f64 * self.definition.font_size() * GLYPH_WIDTH_FACTOR,
            self.lines.len() as f64 * self.definition.line_height(),
        )
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_text_definition_defaults() {
        let def = TextDefinition::default();
        assert_eq!(def.font_family(), "sans-serif");
        assert_approx_eq!(f64, def.font_size(), 0.5);
        assert_approx_eq!(f64, def.line_height(), 0.6);
        assert!(def.color().is_none());
    }

    #[test]
    fn test_single_line_is_centered_on_position() {
        let def = TextDefinition::default();
        let text = Text::new(&def, lines(&["Hall"]));

        let positions: Vec<f64> = text.line_positions(5.0).collect();
        assert_eq!(positions.len(), 1);
        assert_approx_eq!(f64, positions[0], 5.0);
    }

    #[test]
    fn test_lines_are_spread_around_center() {
        let def = TextDefinition::default();
        let text = Text::new(&def, lines(&["A", "B", "C"]));

        let positions: Vec<f64> = text.line_positions(10.0).collect();
        assert_approx_eq!(f64, positions[0], 9.4);
        assert_approx_eq!(f64, positions[1], 10.0);
        assert_approx_eq!(f64, positions[2], 10.6);
    }

    #[test]
    fn test_empty_text_renders_nothing() {
        let def = TextDefinition::default();
        let text = Text::new(&def, Vec::new());

        assert!(text.render_to_layers(Point::new(0.0, 0.0)).is_empty());
        assert_eq!(text.size(), Size::new(0.0, 0.0));
    }

    #[test]
    fn test_text_color_is_applied() {
        let mut def = TextDefinition::default();
        def.set_color(Some(Color::new("red").unwrap()));
        let text = Text::new(&def, lines(&["Bath"]));

        let nodes = text.render_to_layers(Point::new(1.0, 1.0)).render();
        let svg = nodes[0].to_string();
        assert!(svg.contains("fill=\"red\""));
        assert!(svg.contains("<tspan"));
    }

    #[test]
    fn test_tspans_are_the_only_children() {
        let def = TextDefinition::default();
        let text = Text::new(&def, lines(&["Kitchen", "4 x 3"]));

        let svg = text.render_centered(Point::new(2.0, 1.5)).render()[0].to_string();
        let inner = &svg[svg.find('>').unwrap() + 1..svg.rfind("</text>").unwrap()];

        assert!(inner.trim_start().starts_with("<tspan"));
        assert!(!inner.contains("\n\n"));
        assert!(svg.contains(">Kitchen</tspan>"));
        assert!(svg.contains(">4 x 3</tspan>"));
    }

    #[test]
    fn test_top_left_position_centers_the_block() {
        let def = TextDefinition::default();
        let text = Text::new(&def, lines(&["ab"]));

        // 2 glyphs * 0.5 * 0.6 wide, one 0.6 line tall
        let from_corner = text.render_to_layers(Point::new(0.0, 0.0)).render()[0].to_string();
        let centered = text.render_centered(Point::new(0.3, 0.3)).render()[0].to_string();
        assert_eq!(from_corner, centered);
    }

    #[test]
    fn test_text_size_uses_longest_line() {
        let def = TextDefinition::default();
        let text = Text::new(&def, lines(&["ab", "abcd"]));

        let size = text.size();
        assert_approx_eq!(f64, size.width(), 1.2);
        assert_approx_eq!(f64, size.height(), 1.2);
    }
}
