//! Wall segments.
//!
//! A [`WallSegment`] draws one wall of one room from the wall's rectangle and
//! its [`WallType`]:
//!
//! | Type | Output |
//! |------|--------|
//! | `solid` | filled wall rectangle |
//! | `door` | wall rectangle plus a door-swing arc |
//! | `window` | wall rectangle plus a centered pane |
//! | `open` | nothing |
//! | anything else | same as `solid` |

use log::{debug, warn};
use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::{Bounds, Point, Size},
    semantic::{Direction, WallType},
};

/// Styling and glyph proportions for walls.
#[derive(Debug, Clone, PartialEq)]
pub struct WallDefinition {
    fill: Color,
    stroke: StrokeDefinition,
    door_fill: Color,
    door_stroke: StrokeDefinition,
    window_fill: Color,
    window_stroke: StrokeDefinition,
    door_radius_factor: f64,
    window_length_factor: f64,
}

impl WallDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    /// Door arc radius as a multiple of the wall thickness.
    pub fn door_radius_factor(&self) -> f64 {
        self.door_radius_factor
    }

    /// Window pane length as a multiple of the wall thickness.
    pub fn window_length_factor(&self) -> f64 {
        self.window_length_factor
    }

    /// Sets the wall color, used for both fill and outline.
    pub fn set_color(&mut self, color: Color) {
        self.fill = color;
        self.stroke.set_color(color);
        self.door_stroke.set_color(color);
        self.window_stroke.set_color(color);
    }

    pub fn set_door_radius_factor(&mut self, factor: f64) {
        self.door_radius_factor = factor;
    }

    pub fn set_window_length_factor(&mut self, factor: f64) {
        self.window_length_factor = factor;
    }
}

impl Default for WallDefinition {
    fn default() -> Self {
        let white = Color::new("white").expect("'white' is a valid CSS color");
        Self {
            fill: Color::default(),
            stroke: StrokeDefinition::new(Color::default(), 0.05),
            door_fill: white,
            door_stroke: StrokeDefinition::new(Color::default(), 0.05),
            window_fill: white,
            window_stroke: StrokeDefinition::new(Color::default(), 0.01),
            door_radius_factor: 9.6,
            window_length_factor: 20.0,
        }
    }
}

/// One wall of a room, ready to be drawn.
///
/// # Examples
///
/// ```
/// # use floorplan_core::draw::{Drawable, WallDefinition, WallSegment};
/// # use floorplan_core::geometry::{Point, Size};
/// # use floorplan_core::semantic::{Direction, WallType};
/// let definition = WallDefinition::default();
/// let door = WallType::Door;
/// let segment = WallSegment::new(&definition, Direction::Top, &door, Size::new(4.0, 0.1));
///
/// let output = segment.render_to_layers(Point::new(0.0, 0.0));
/// assert_eq!(output.len(), 2);
///
/// let open = WallType::Open;
/// let segment = WallSegment::new(&definition, Direction::Top, &open, Size::new(4.0, 0.1));
/// assert!(segment.render_to_layers(Point::new(0.0, 0.0)).is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct WallSegment<'a> {
    definition: &'a WallDefinition,
    direction: Direction,
    wall_type: &'a WallType,
    size: Size,
    anchor: Option<f64>,
}

impl<'a> WallSegment<'a> {
    pub fn new(
        definition: &'a WallDefinition,
        direction: Direction,
        wall_type: &'a WallType,
        size: Size,
    ) -> Self {
        Self {
            definition,
            direction,
            wall_type,
            size,
            anchor: None,
        }
    }

    /// Moves the door opening along the wall.
    ///
    /// `fraction` is the distance from the top or left end divided by the wall
    /// length; values outside `0.0..=1.0` are clamped.
    pub fn with_anchor(mut self, fraction: f64) -> Self {
        self.anchor = Some(fraction.clamp(0.0, 1.0));
        self
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn wall_type(&self) -> &WallType {
        self.wall_type
    }

    fn wall_rect(&self, bounds: Bounds) -> svg_element::Rectangle {
        let def = self.definition;
        let rect = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("fill", def.fill.to_string())
            .set("fill-opacity", def.fill.alpha())
            .set("data-type", "wall")
            .set("data-direction", self.direction.as_str());
        apply_stroke!(rect, &def.stroke)
    }

    /// Center of the door opening: the wall center, shifted along the wall
    /// when an anchor is set.
    fn opening_center(&self, bounds: Bounds) -> Point {
        let center = bounds.center();
        let Some(anchor) = self.anchor else {
            return center;
        };
        if bounds.is_horizontal() {
            Point::new(bounds.min_x() + bounds.width() * anchor, center.y())
        } else {
            Point::new(center.x(), bounds.min_y() + bounds.height() * anchor)
        }
    }

    /// SVG path data for the door-swing glyph.
    fn door_path_data(&self, bounds: Bounds) -> String {
        let r = bounds.width().min(bounds.height()) * self.definition.door_radius_factor;
        let center = self.opening_center(bounds);
        let (cx, cy) = (center.x(), center.y());

        if bounds.is_horizontal() {
            let sx = cx - r / 2.0;
            let ex = cx + r / 2.0;
            if self.direction == Direction::Bottom {
                format!("M {sx} {cy} L {sx} {} A {r} {r} 0 0 0 {ex} {cy}", cy + r)
            } else {
                format!("M {sx} {cy} L {sx} {} A {r} {r} 0 0 1 {ex} {cy}", cy - r)
            }
        } else {
            let sy = cy - r / 2.0;
            let ey = cy + r / 2.0;
            if self.direction == Direction::Right {
                format!("M {cx} {sy} L {} {sy} A {r} {r} 0 0 1 {cx} {ey}", cx + r)
            } else {
                format!("M {cx} {sy} L {} {sy} A {r} {r} 0 0 0 {cx} {ey}", cx - r)
            }
        }
    }

    fn door_glyph(&self, bounds: Bounds) -> svg_element::Path {
        let def = self.definition;
        let path = svg_element::Path::new()
            .set("d", self.door_path_data(bounds))
            .set("fill", def.door_fill.to_string())
            .set("data-type", "door")
            .set("data-direction", self.direction.as_str());
        apply_stroke!(path, &def.door_stroke)
    }

    fn window_glyph(&self, bounds: Bounds) -> svg_element::Rectangle {
        let def = self.definition;
        let thickness = bounds.width().min(bounds.height());
        let length = thickness * def.window_length_factor;
        let pane = if bounds.is_horizontal() {
            Size::new(length, thickness)
        } else {
            Size::new(thickness, length)
        };
        let pane_bounds = Bounds::new_from_center(bounds.center(), pane);

        let rect = svg_element::Rectangle::new()
            .set("x", pane_bounds.min_x())
            .set("y", pane_bounds.min_y())
            .set("width", pane.width())
            .set("height", pane.height())
            .set("fill", def.window_fill.to_string())
            .set("data-type", "window")
            .set("data-direction", self.direction.as_str());
        apply_stroke!(rect, &def.window_stroke)
    }
}

impl Drawable for WallSegment<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let bounds = Bounds::new_from_top_left(position, self.size);

        match self.wall_type {
            WallType::Open => {
                debug!(direction = self.direction.as_str(); "Open wall, nothing drawn");
            }
            WallType::Solid => {
                output.add_to_layer(RenderLayer::Wall, Box::new(self.wall_rect(bounds)));
            }
            WallType::Door => {
                output.add_to_layer(RenderLayer::Wall, Box::new(self.wall_rect(bounds)));
                output.add_to_layer(RenderLayer::Opening, Box::new(self.door_glyph(bounds)));
            }
            WallType::Window => {
                output.add_to_layer(RenderLayer::Wall, Box::new(self.wall_rect(bounds)));
                output.add_to_layer(RenderLayer::Opening, Box::new(self.window_glyph(bounds)));
            }
            WallType::Other(name) => {
                warn!(
                    wall_type = name.as_str(),
                    direction = self.direction.as_str();
                    "Unknown wall type, drawing a solid wall"
                );
                output.add_to_layer(RenderLayer::Wall, Box::new(self.wall_rect(bounds)));
            }
        }

        output
    }

    fn size(&self) -> Size {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn render(segment: &WallSegment, bounds: Bounds) -> Vec<String> {
        segment
            .render_to_layers(bounds.min_point())
            .render()
            .iter()
            .map(|node| node.to_string())
            .collect()
    }

    fn top_wall() -> Bounds {
        Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(4.0, 0.1))
    }

    fn left_wall() -> Bounds {
        Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(0.1, 3.0))
    }

    #[test]
    fn test_definition_defaults() {
        let def = WallDefinition::default();
        assert_approx_eq!(f64, def.door_radius_factor(), 9.6);
        assert_approx_eq!(f64, def.window_length_factor(), 20.0);
        assert_approx_eq!(f64, def.stroke().width(), 0.05);
        assert_eq!(def.fill().to_string(), "black");
    }

    #[test]
    fn test_solid_wall_is_single_rect() {
        let def = WallDefinition::default();
        let bounds = top_wall();
        let segment = WallSegment::new(&def, Direction::Top, &WallType::Solid, bounds.to_size());

        let nodes = render(&segment, bounds);
        assert_eq!(nodes.len(), 1);
        assert!(nodes[0].starts_with("<rect"));
        assert!(nodes[0].contains("width=\"4\""));
        assert!(nodes[0].contains("data-direction=\"top\""));
    }

    #[test]
    fn test_open_wall_draws_nothing() {
        let def = WallDefinition::default();
        let bounds = left_wall();
        let segment = WallSegment::new(&def, Direction::Left, &WallType::Open, bounds.to_size());

        assert!(render(&segment, bounds).is_empty());
    }

    #[test]
    fn test_unknown_type_draws_solid() {
        let def = WallDefinition::default();
        let bounds = top_wall();
        let glass = WallType::Other("glass-brick".to_string());
        let segment = WallSegment::new(&def, Direction::Top, &glass, bounds.to_size());
        let solid = WallSegment::new(&def, Direction::Top, &WallType::Solid, bounds.to_size());

        assert_eq!(render(&segment, bounds), render(&solid, bounds));
    }

    #[test]
    fn test_door_on_top_wall() {
        let def = WallDefinition::default();
        let bounds = top_wall();
        let segment = WallSegment::new(&def, Direction::Top, &WallType::Door, bounds.to_size());

        // r = 0.1 * 9.6, centered at (2, 0.05)
        let r = 0.1f64 * 9.6;
        let expected = format!(
            "M {} 0.05 L {} {} A {r} {r} 0 0 1 {} 0.05",
            2.0 - r / 2.0,
            2.0 - r / 2.0,
            0.05 - r,
            2.0 + r / 2.0
        );
        assert_eq!(segment.door_path_data(bounds), expected);

        let nodes = render(&segment, bounds);
        assert_eq!(nodes.len(), 2);
        assert!(nodes[1].starts_with("<path"));
        assert!(nodes[1].contains("data-type=\"door\""));
    }

    #[test]
    fn test_door_sweep_per_direction() {
        let def = WallDefinition::default();
        let horizontal = top_wall();
        let vertical = left_wall();

        let bottom = WallSegment::new(&def, Direction::Bottom, &WallType::Door, horizontal.to_size());
        assert!(bottom.door_path_data(horizontal).contains(" 0 0 0 "));

        let right = WallSegment::new(&def, Direction::Right, &WallType::Door, vertical.to_size());
        assert!(right.door_path_data(vertical).contains(" 0 0 1 "));

        let left = WallSegment::new(&def, Direction::Left, &WallType::Door, vertical.to_size());
        assert!(left.door_path_data(vertical).contains(" 0 0 0 "));
    }

    #[test]
    fn test_anchor_moves_door_along_wall() {
        let def = WallDefinition::default();
        let bounds = top_wall();
        let segment = WallSegment::new(&def, Direction::Top, &WallType::Door, bounds.to_size())
            .with_anchor(0.25);

        let center = segment.opening_center(bounds);
        assert_approx_eq!(f64, center.x(), 1.0);
        assert_approx_eq!(f64, center.y(), 0.05);

        let vertical = left_wall();
        let segment = WallSegment::new(&def, Direction::Left, &WallType::Door, vertical.to_size())
            .with_anchor(1.5);
        let center = segment.opening_center(vertical);
        assert_approx_eq!(f64, center.y(), 3.0);
    }

    #[test]
    fn test_window_pane_proportions() {
        let def = WallDefinition::default();
        let bounds = left_wall();
        let segment = WallSegment::new(&def, Direction::Left, &WallType::Window, bounds.to_size());

        let nodes = render(&segment, bounds);
        assert_eq!(nodes.len(), 2);
        let pane = &nodes[1];
        assert!(pane.contains("data-type=\"window\""));
        assert!(pane.contains("width=\"0.1\""));
        assert!(pane.contains("height=\"2\""));
        assert!(pane.contains("stroke-width=\"0.01\""));
    }
}
