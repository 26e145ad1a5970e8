//! Room drawing: the room rectangle, its four walls and its text.
//!
//! Sub-rooms are not drawn here; the caller walks the room tree and draws
//! each room on its own.

use std::collections::BTreeMap;

use log::trace;
use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{
        Drawable, LayeredOutput, RenderLayer, StrokeDefinition, Text, TextDefinition,
        WallDefinition, WallSegment,
    },
    geometry::{Bounds, Point, Size},
    semantic::{Direction, Room},
};

/// Styling shared by every room of a drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomDefinition {
    fill: Color,
    stroke: StrokeDefinition,
    wall: WallDefinition,
    text: TextDefinition,
    wall_thickness: f64,
    show_size: bool,
}

impl RoomDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn wall(&self) -> &WallDefinition {
        &self.wall
    }

    pub fn text(&self) -> &TextDefinition {
        &self.text
    }

    /// Requested wall thickness before clamping to a room's smaller side.
    pub fn wall_thickness(&self) -> f64 {
        self.wall_thickness
    }

    pub fn show_size(&self) -> bool {
        self.show_size
    }

    pub fn set_fill(&mut self, fill: Color) {
        self.fill = fill;
    }

    pub fn set_stroke(&mut self, stroke: StrokeDefinition) {
        self.stroke = stroke;
    }

    pub fn set_wall(&mut self, wall: WallDefinition) {
        self.wall = wall;
    }

    pub fn set_text(&mut self, text: TextDefinition) {
        self.text = text;
    }

    pub fn set_wall_thickness(&mut self, thickness: f64) {
        self.wall_thickness = thickness;
    }

    pub fn set_show_size(&mut self, show_size: bool) {
        self.show_size = show_size;
    }
}

impl Default for RoomDefinition {
    fn default() -> Self {
        Self {
            fill: Color::new("lightblue").expect("'lightblue' is a valid CSS color"),
            stroke: StrokeDefinition::new(Color::default(), 0.1),
            wall: WallDefinition::default(),
            text: TextDefinition::default(),
            wall_thickness: 0.1,
            show_size: false,
        }
    }
}

/// Rectangle of one wall, inset from the room edge by `thickness`.
///
/// The thickness is clamped to the room's smaller side. Corners are covered
/// by both adjoining walls.
///
/// # Examples
///
/// ```
/// # use floorplan_core::draw::wall_bounds;
/// # use floorplan_core::geometry::{Bounds, Point, Size};
/// # use floorplan_core::semantic::Direction;
/// let room = Bounds::new_from_top_left(Point::new(1.0, 2.0), Size::new(4.0, 3.0));
///
/// let right = wall_bounds(room, Direction::Right, 0.5);
/// assert_eq!(right, Bounds::new_from_top_left(Point::new(4.5, 2.0), Size::new(0.5, 3.0)));
/// ```
pub fn wall_bounds(room: Bounds, direction: Direction, thickness: f64) -> Bounds {
    let t = thickness.min(room.width().min(room.height())).max(0.0);
    let (x, y) = (room.min_x(), room.min_y());
    let (width, height) = (room.width(), room.height());

    let (top_left, size) = match direction {
        Direction::Top => (Point::new(x, y), Size::new(width, t)),
        Direction::Bottom => (Point::new(x, y + height - t), Size::new(width, t)),
        Direction::Left => (Point::new(x, y), Size::new(t, height)),
        Direction::Right => (Point::new(x + width - t, y), Size::new(t, height)),
    };
    Bounds::new_from_top_left(top_left, size)
}

/// Formats a dimension line such as `4 x 3.5`.
fn size_line(size: Size) -> String {
    format!("{} x {}", size.width(), size.height())
}

/// A single room, drawn without its sub-rooms.
///
/// # Examples
///
/// ```
/// # use floorplan_core::draw::{Drawable, RoomDefinition, RoomDrawing};
/// # use floorplan_core::geometry::{Point, Size};
/// # use floorplan_core::semantic::{Room, RoomKind, WallSet};
/// let room = Room::new("Kitchen", RoomKind::Room, Point::new(0.0, 0.0), Size::new(4.0, 3.0))
///     .with_walls(WallSet::solid());
/// let definition = RoomDefinition::default();
///
/// let nodes = RoomDrawing::new(&definition, &room).render_to_layers(room.position()).render();
/// // room rectangle, four walls, text
/// assert_eq!(nodes.len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct RoomDrawing<'a> {
    definition: &'a RoomDefinition,
    room: &'a Room,
    anchors: BTreeMap<Direction, f64>,
}

impl<'a> RoomDrawing<'a> {
    pub fn new(definition: &'a RoomDefinition, room: &'a Room) -> Self {
        Self {
            definition,
            room,
            anchors: BTreeMap::new(),
        }
    }

    /// Pins the door on `direction` at `fraction` of the wall length.
    pub fn with_door_anchor(mut self, direction: Direction, fraction: f64) -> Self {
        self.anchors.insert(direction, fraction);
        self
    }

    pub fn room(&self) -> &Room {
        self.room
    }

    fn text_lines(&self) -> Vec<String> {
        let mut lines = vec![self.room.name().to_string()];
        if let Some(label) = self.room.label() {
            lines.push(label.to_string());
        }
        if self.definition.show_size {
            lines.push(size_line(self.room.size()));
        }
        lines
    }
}

impl Drawable for RoomDrawing<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let def = self.definition;
        let bounds = Bounds::new_from_top_left(position, self.room.size());
        trace!(room = self.room.name(), x = bounds.min_x(), y = bounds.min_y(); "Drawing room");

        let rect = svg_element::Rectangle::new()
            .set("x", position.x())
            .set("y", position.y())
            .set("width", self.room.size().width())
            .set("height", self.room.size().height())
            .set("fill", def.fill.to_string())
            .set("fill-opacity", def.fill.alpha());
        let rect = apply_stroke!(rect, &def.stroke);
        output.add_to_layer(RenderLayer::Room, Box::new(rect));

        for (direction, wall_type) in self.room.walls().iter() {
            let wall = wall_bounds(bounds, direction, def.wall_thickness);
            let mut segment = WallSegment::new(&def.wall, direction, wall_type, wall.to_size());
            if let Some(&fraction) = self.anchors.get(&direction) {
                segment = segment.with_anchor(fraction);
            }
            output.merge(segment.render_to_layers(wall.min_point()));
        }

        let text = Text::new(&def.text, self.text_lines());
        output.merge(text.render_centered(bounds.center()));

        output
    }

    fn size(&self) -> Size {
        self.room.size()
    }
}
