//! Connections between rooms.
//!
//! A [`Connection`] names two endpoints by room name (optionally pinned to a
//! wall) and carries door metadata. Names are not checked here; resolution
//! against the rooms of a floor plan happens after parsing.

use std::{fmt, str::FromStr};

use crate::semantic::room::Direction;

/// Hinge side of a door leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Swing {
    Left,
    Right,
}

impl Swing {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl FromStr for Swing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(format!("invalid swing `{s}`, valid values: left, right")),
        }
    }
}

impl fmt::Display for Swing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One side of a connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// A named room, optionally pinned to one of its walls.
    Room {
        name: String,
        wall: Option<Direction>,
    },
    /// The implicit space outside the building.
    Outside,
}

impl Endpoint {
    pub fn room(name: impl Into<String>, wall: Option<Direction>) -> Self {
        Self::Room {
            name: name.into(),
            wall,
        }
    }

    /// Returns the referenced room name, or `None` for [`Endpoint::Outside`].
    pub fn room_name(&self) -> Option<&str> {
        match self {
            Self::Room { name, .. } => Some(name),
            Self::Outside => None,
        }
    }

    /// Returns the pinned wall, if any.
    pub fn wall(&self) -> Option<Direction> {
        match self {
            Self::Room { wall, .. } => *wall,
            Self::Outside => None,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Room {
                name,
                wall: Some(wall),
            } => write!(f, "{name}.{wall}"),
            Self::Room { name, wall: None } => f.write_str(name),
            Self::Outside => f.write_str("outside"),
        }
    }
}

/// A door or opening between two endpoints.
///
/// # Examples
///
/// ```
/// # use floorplan_core::semantic::{Connection, Direction, Endpoint, Swing};
/// let connection = Connection::new(
///     Endpoint::room("RoomA", Some(Direction::Right)),
///     Endpoint::room("RoomB", Some(Direction::Left)),
///     "door",
/// )
/// .with_position(50.0)
/// .with_opens_into("RoomA")
/// .with_swing(Swing::Left);
///
/// assert_eq!(connection.to_string(), "RoomA.right to RoomB.left door");
/// assert_eq!(connection.position(), Some(50.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    from: Endpoint,
    to: Endpoint,
    door_type: String,
    position: Option<f64>,
    opens_into: Option<String>,
    swing: Option<Swing>,
}

impl Connection {
    pub fn new(from: Endpoint, to: Endpoint, door_type: impl Into<String>) -> Self {
        Self {
            from,
            to,
            door_type: door_type.into(),
            position: None,
            opens_into: None,
            swing: None,
        }
    }

    /// Sets the door position as a percentage along the wall.
    pub fn with_position(mut self, percent: f64) -> Self {
        self.position = Some(percent);
        self
    }

    pub fn with_opens_into(mut self, room: impl Into<String>) -> Self {
        self.opens_into = Some(room.into());
        self
    }

    pub fn with_swing(mut self, swing: Swing) -> Self {
        self.swing = Some(swing);
        self
    }

    pub fn from(&self) -> &Endpoint {
        &self.from
    }

    pub fn to(&self) -> &Endpoint {
        &self.to
    }

    /// Free-form door type, e.g. `door` or `double-door`.
    pub fn door_type(&self) -> &str {
        &self.door_type
    }

    /// Percentage (0 to 100) along the wall where the opening is centered.
    pub fn position(&self) -> Option<f64> {
        self.position
    }

    /// Name of the room the door swings into.
    pub fn opens_into(&self) -> Option<&str> {
        self.opens_into.as_deref()
    }

    pub fn swing(&self) -> Option<Swing> {
        self.swing
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {} {}", self.from, self.to, self.door_type)
    }
}
