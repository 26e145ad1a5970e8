//! Connection resolution.
//!
//! Connections name rooms by string. This module looks those names up in a
//! flat index built once over every floor (sub-rooms included) and produces
//! [`ResolvedConnection`]s that borrow the rooms they connect. Names that do
//! not resolve become [`LinkingError`]s; the offending connection is dropped
//! and every other connection is still resolved.

use std::fmt;

use indexmap::IndexMap;
use log::{debug, trace};
use thiserror::Error;

use floorplan_core::{
    draw::wall_bounds,
    geometry::Point,
    semantic::{Connection, Direction, Endpoint, Floorplan, Room, Swing},
};

/// Anchor used when a connection gives no position.
const CENTER_FRACTION: f64 = 0.5;

/// Which reference of a connection failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointRole {
    From,
    To,
    OpensInto,
}

impl fmt::Display for EndpointRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::From => "from",
            Self::To => "to",
            Self::OpensInto => "opens into",
        })
    }
}

/// A connection references a room that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("connection {connection}: unknown room `{name}` ({role})")]
pub struct LinkingError {
    connection: usize,
    name: String,
    role: EndpointRole,
}

impl LinkingError {
    /// Index of the connection in declaration order.
    pub fn connection(&self) -> usize {
        self.connection
    }

    /// The name that failed to resolve.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> EndpointRole {
        self.role
    }
}

/// Name to room lookup over a whole floor plan.
///
/// Keeps declaration order. Room names are unique after validation; if a
/// model built by hand repeats a name, the first room wins.
#[derive(Debug, Default)]
pub struct RoomIndex<'a> {
    rooms: IndexMap<&'a str, &'a Room>,
}

impl<'a> RoomIndex<'a> {
    pub fn new(floorplan: &'a Floorplan) -> Self {
        let mut rooms = IndexMap::new();
        for room in floorplan.rooms() {
            rooms.entry(room.name()).or_insert(room);
        }
        trace!(rooms = rooms.len(); "Built room index");
        Self { rooms }
    }

    /// Looks a room up by exact, case-sensitive name.
    pub fn get(&self, name: &str) -> Option<&'a Room> {
        self.rooms.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

/// One side of a resolved connection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedEndpoint<'a> {
    Room {
        room: &'a Room,
        wall: Option<Direction>,
    },
    Outside,
}

impl<'a> ResolvedEndpoint<'a> {
    pub fn room(&self) -> Option<&'a Room> {
        match self {
            Self::Room { room, .. } => Some(room),
            Self::Outside => None,
        }
    }

    pub fn wall(&self) -> Option<Direction> {
        match self {
            Self::Room { wall, .. } => *wall,
            Self::Outside => None,
        }
    }
}

/// A connection whose every room reference resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConnection<'a> {
    connection: &'a Connection,
    from: ResolvedEndpoint<'a>,
    to: ResolvedEndpoint<'a>,
    opens_into: Option<&'a Room>,
}

impl<'a> ResolvedConnection<'a> {
    pub fn connection(&self) -> &'a Connection {
        self.connection
    }

    pub fn from(&self) -> &ResolvedEndpoint<'a> {
        &self.from
    }

    pub fn to(&self) -> &ResolvedEndpoint<'a> {
        &self.to
    }

    pub fn door_type(&self) -> &'a str {
        self.connection.door_type()
    }

    /// Door position as a percentage along the wall.
    pub fn position(&self) -> Option<f64> {
        self.connection.position()
    }

    pub fn opens_into(&self) -> Option<&'a Room> {
        self.opens_into
    }

    pub fn swing(&self) -> Option<Swing> {
        self.connection.swing()
    }

    /// Fraction of the wall length the door sits at; the center when no
    /// position was given.
    pub fn anchor_fraction(&self) -> f64 {
        self.position()
            .map_or(CENTER_FRACTION, |percent| (percent / 100.0).clamp(0.0, 1.0))
    }

    /// Rooms and walls whose door glyph this connection pins.
    ///
    /// Only endpoints naming a wall take part, and only when the connection
    /// gives a position.
    pub fn pinned_walls(&self) -> impl Iterator<Item = (&'a Room, Direction, f64)> + use<'a> {
        let fraction = self.anchor_fraction();
        let endpoints = if self.position().is_some() {
            vec![self.from, self.to]
        } else {
            Vec::new()
        };
        endpoints
            .into_iter()
            .filter_map(move |endpoint| match endpoint {
                ResolvedEndpoint::Room {
                    room,
                    wall: Some(wall),
                } => Some((room, wall, fraction)),
                _ => None,
            })
    }

    /// Point on the given endpoint's wall where the door sits.
    ///
    /// `None` for `outside` and for endpoints that do not name a wall.
    pub fn anchor_point(&self, endpoint: &ResolvedEndpoint<'a>) -> Option<Point> {
        let ResolvedEndpoint::Room {
            room,
            wall: Some(wall),
        } = *endpoint
        else {
            return None;
        };

        let bounds = wall_bounds(room.bounds(), wall, 0.0);
        let (start, end) = if wall.is_horizontal() {
            (
                Point::new(bounds.min_x(), bounds.min_y()),
                Point::new(bounds.max_x(), bounds.min_y()),
            )
        } else {
            (
                Point::new(bounds.min_x(), bounds.min_y()),
                Point::new(bounds.min_x(), bounds.max_y()),
            )
        };
        Some(start.lerp(end, self.anchor_fraction()))
    }
}

/// Outcome of resolving every connection of a floor plan.
#[derive(Debug, Default)]
pub struct Resolution<'a> {
    connections: Vec<ResolvedConnection<'a>>,
    errors: Vec<LinkingError>,
}

impl<'a> Resolution<'a> {
    /// Resolved connections in declaration order.
    pub fn connections(&self) -> &[ResolvedConnection<'a>] {
        &self.connections
    }

    pub fn errors(&self) -> &[LinkingError] {
        &self.errors
    }

    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }
}

fn resolve_endpoint<'a>(
    index: &RoomIndex<'a>,
    endpoint: &Endpoint,
) -> Result<ResolvedEndpoint<'a>, String> {
    match endpoint {
        Endpoint::Outside => Ok(ResolvedEndpoint::Outside),
        Endpoint::Room { name, wall } => index
            .get(name)
            .map(|room| ResolvedEndpoint::Room { room, wall: *wall })
            .ok_or_else(|| name.clone()),
    }
}

/// Resolve every connection of `floorplan` against its rooms.
///
/// Each unresolved name yields one [`LinkingError`]; a connection with any
/// unresolved name is left out of [`Resolution::connections`].
pub fn resolve_connections(floorplan: &Floorplan) -> Resolution<'_> {
    let index = RoomIndex::new(floorplan);
    let mut resolution = Resolution::default();

    for (position, connection) in floorplan.connections().iter().enumerate() {
        let mut errors = Vec::new();
        let mut error = |name: String, role| {
            errors.push(LinkingError {
                connection: position,
                name,
                role,
            })
        };

        let from = resolve_endpoint(&index, connection.from())
            .map_err(|name| error(name, EndpointRole::From))
            .ok();
        let to = resolve_endpoint(&index, connection.to())
            .map_err(|name| error(name, EndpointRole::To))
            .ok();
        let opens_into = match connection.opens_into() {
            Some(name) => match index.get(name) {
                Some(room) => Some(Some(room)),
                None => {
                    error(name.to_string(), EndpointRole::OpensInto);
                    None
                }
            },
            None => Some(None),
        };

        match (from, to, opens_into) {
            (Some(from), Some(to), Some(opens_into)) => {
                trace!(connection:% = connection; "Resolved connection");
                resolution.connections.push(ResolvedConnection {
                    connection,
                    from,
                    to,
                    opens_into,
                });
            }
            _ => resolution.errors.append(&mut errors),
        }
    }

    debug!(
        resolved = resolution.connections.len(),
        errors = resolution.errors.len();
        "Resolved connections"
    );
    resolution
}
