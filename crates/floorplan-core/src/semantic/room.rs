//! Rooms and their walls.

use std::{fmt, str::FromStr};

use crate::geometry::{Bounds, Point, Size};

/// One of the four sides of a room.
///
/// Declaration order is the canonical wall order (top, right, bottom, left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    /// All directions in canonical order.
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    /// Returns the keyword used for this direction in source text.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }

    /// Returns true for the walls that run along the x-axis.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "right" => Ok(Self::Right),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            _ => Err(format!(
                "invalid wall direction `{s}`, valid values: top, right, bottom, left"
            )),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual type of a single wall.
///
/// Unrecognized type names are kept as [`WallType::Other`] so that rendering
/// can treat them as solid walls instead of rejecting the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum WallType {
    #[default]
    Solid,
    Door,
    Window,
    /// No wall is drawn; the gap is implicit.
    Open,
    Other(String),
}

impl WallType {
    /// Maps a type name from source text to a wall type. Never fails.
    pub fn from_name(name: &str) -> Self {
        match name {
            "solid" => Self::Solid,
            "door" => Self::Door,
            "window" => Self::Window,
            "open" => Self::Open,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the type name as written in source text.
    pub fn name(&self) -> &str {
        match self {
            Self::Solid => "solid",
            Self::Door => "door",
            Self::Window => "window",
            Self::Open => "open",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for WallType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A (direction, type) pair for one wall of a room.
#[derive(Debug, Clone, PartialEq)]
pub struct WallSpec {
    direction: Direction,
    wall_type: WallType,
}

impl WallSpec {
    pub fn new(direction: Direction, wall_type: WallType) -> Self {
        Self {
            direction,
            wall_type,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn wall_type(&self) -> &WallType {
        &self.wall_type
    }
}

static SOLID_WALL: WallType = WallType::Solid;

/// The walls declared for a room.
///
/// A set may name fewer than four directions; a missing direction reads as
/// [`WallType::Solid`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WallSet {
    specs: Vec<WallSpec>,
}

impl WallSet {
    pub fn new(specs: Vec<WallSpec>) -> Self {
        Self { specs }
    }

    /// A wall set with all four walls solid.
    pub fn solid() -> Self {
        Self::new(
            Direction::ALL
                .into_iter()
                .map(|direction| WallSpec::new(direction, WallType::Solid))
                .collect(),
        )
    }

    /// The declared specs, in source order.
    pub fn specs(&self) -> &[WallSpec] {
        &self.specs
    }

    /// Returns the declared type for `direction`, if any.
    pub fn get(&self, direction: Direction) -> Option<&WallType> {
        self.specs
            .iter()
            .find(|spec| spec.direction == direction)
            .map(WallSpec::wall_type)
    }

    /// Returns the type for `direction`, defaulting to solid when undeclared.
    pub fn wall_type(&self, direction: Direction) -> &WallType {
        self.get(direction).unwrap_or(&SOLID_WALL)
    }

    /// Iterates the four walls in canonical order with defaults applied.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &WallType)> + '_ {
        Direction::ALL
            .into_iter()
            .map(|direction| (direction, self.wall_type(direction)))
    }
}

/// Whether a room was declared with `room` or `sub-room`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RoomKind {
    #[default]
    Room,
    SubRoom,
}

impl RoomKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Room => "room",
            Self::SubRoom => "sub-room",
        }
    }
}

impl fmt::Display for RoomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rectangular space with walls and optionally nested sub-rooms.
///
/// Sub-room positions are absolute, in the same frame as top-level rooms.
///
/// # Examples
///
/// ```
/// # use floorplan_core::geometry::{Point, Size};
/// # use floorplan_core::semantic::{Room, RoomKind, WallSet};
/// let closet = Room::new("Closet", RoomKind::SubRoom, Point::new(3.0, 0.0), Size::new(1.0, 1.0))
///     .with_walls(WallSet::solid());
/// let bedroom = Room::new("Bedroom", RoomKind::Room, Point::new(0.0, 0.0), Size::new(4.0, 3.0))
///     .with_label("Main bedroom")
///     .with_sub_rooms(vec![closet]);
///
/// let names: Vec<_> = bedroom.iter().map(|room| room.name()).collect();
/// assert_eq!(names, ["Bedroom", "Closet"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    name: String,
    kind: RoomKind,
    position: Point,
    size: Size,
    label: Option<String>,
    walls: WallSet,
    sub_rooms: Vec<Room>,
}

impl Room {
    /// Creates a room with no label, no declared walls and no sub-rooms.
    pub fn new(name: impl Into<String>, kind: RoomKind, position: Point, size: Size) -> Self {
        Self {
            name: name.into(),
            kind,
            position,
            size,
            label: None,
            walls: WallSet::default(),
            sub_rooms: Vec::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_walls(mut self, walls: WallSet) -> Self {
        self.walls = walls;
        self
    }

    pub fn with_sub_rooms(mut self, sub_rooms: Vec<Room>) -> Self {
        self.sub_rooms = sub_rooms;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> RoomKind {
        self.kind
    }

    /// Top-left corner of the room.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn walls(&self) -> &WallSet {
        &self.walls
    }

    /// Directly nested rooms, in declaration order.
    pub fn sub_rooms(&self) -> &[Room] {
        &self.sub_rooms
    }

    /// The room's footprint.
    pub fn bounds(&self) -> Bounds {
        self.position.to_bounds(self.size)
    }

    /// Geometric center of the room.
    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    /// Depth-first, pre-order walk over this room and all nested rooms.
    pub fn iter(&self) -> RoomIter<'_> {
        RoomIter { stack: vec![self] }
    }
}

/// Depth-first iterator over a room tree.
///
/// Yields parents before children and siblings in declaration order.
#[derive(Debug, Clone)]
pub struct RoomIter<'a> {
    stack: Vec<&'a Room>,
}

impl<'a> RoomIter<'a> {
    pub(crate) fn from_rooms(rooms: &'a [Room]) -> Self {
        Self {
            stack: rooms.iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for RoomIter<'a> {
    type Item = &'a Room;

    fn next(&mut self) -> Option<Self::Item> {
        let room = self.stack.pop()?;
        self.stack.extend(room.sub_rooms.iter().rev());
        Some(room)
    }
}
