//! Root floor plan structures.

use crate::semantic::{connection::Connection, room::Room, room::RoomIter};

/// A named collection of top-level rooms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Floor {
    id: String,
    rooms: Vec<Room>,
}

impl Floor {
    pub fn new(id: impl Into<String>, rooms: Vec<Room>) -> Self {
        Self {
            id: id.into(),
            rooms,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Top-level rooms, in declaration order. Sub-rooms are reached through
    /// [`Room::sub_rooms`].
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Depth-first walk over every room on this floor, sub-rooms included.
    pub fn all_rooms(&self) -> RoomIter<'_> {
        RoomIter::from_rooms(&self.rooms)
    }
}

/// The root document: floors followed by connections.
///
/// An empty floor plan (no floors, no connections) is valid.
///
/// # Examples
///
/// ```
/// # use floorplan_core::geometry::{Point, Size};
/// # use floorplan_core::semantic::{Floor, Floorplan, Room, RoomKind};
/// let kitchen = Room::new("Kitchen", RoomKind::Room, Point::new(0.0, 0.0), Size::new(4.0, 3.0));
/// let plan = Floorplan::new(vec![Floor::new("ground", vec![kitchen])], vec![]);
///
/// assert_eq!(plan.floors().len(), 1);
/// assert_eq!(plan.rooms().count(), 1);
/// assert!(Floorplan::default().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Floorplan {
    floors: Vec<Floor>,
    connections: Vec<Connection>,
}

impl Floorplan {
    pub fn new(floors: Vec<Floor>, connections: Vec<Connection>) -> Self {
        Self {
            floors,
            connections,
        }
    }

    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// True when there are neither floors nor connections.
    pub fn is_empty(&self) -> bool {
        self.floors.is_empty() && self.connections.is_empty()
    }

    /// Every room of every floor, depth-first in declaration order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> + '_ {
        self.floors.iter().flat_map(Floor::all_rooms)
    }
}
