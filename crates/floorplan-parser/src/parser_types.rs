//! Spanned AST produced by the [`parser`](crate::parser).
//!
//! Leaf values (names, numbers, strings) are wrapped in [`Spanned`] so later
//! phases can point diagnostics at the exact source text. Composite types are
//! plain structs and derive their spans from their parts.

use floorplan_core::semantic::RoomKind;

use crate::span::{Span, Spanned};

/// A whole document: floors followed by connections.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Floorplan<'a> {
    pub floors: Vec<Floor<'a>>,
    pub connections: Vec<Connection<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Floor<'a> {
    pub id: Spanned<&'a str>,
    pub rooms: Vec<Room<'a>>,
}

/// A `room` or `sub-room` declaration with its nested rooms.
#[derive(Debug, Clone, PartialEq)]
pub struct Room<'a> {
    pub kind: Spanned<RoomKind>,
    pub name: Spanned<&'a str>,
    pub x: Spanned<f64>,
    pub y: Spanned<f64>,
    pub width: Spanned<f64>,
    pub height: Spanned<f64>,
    pub walls: Vec<WallSpec<'a>>,
    pub label: Option<Spanned<String>>,
    pub sub_rooms: Vec<Room<'a>>,
}

impl Room<'_> {
    /// Span of the `size (W x H)` values.
    pub fn size_span(&self) -> Span {
        self.width.span().union(self.height.span())
    }
}

/// One `direction: type` entry of a `walls [...]` list.
#[derive(Debug, Clone, PartialEq)]
pub struct WallSpec<'a> {
    pub direction: Spanned<&'a str>,
    pub wall_type: Spanned<&'a str>,
}

impl WallSpec<'_> {
    /// Span from the direction to the wall type.
    pub fn span(&self) -> Span {
        self.direction.span().union(self.wall_type.span())
    }
}

/// One side of a `connect` statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint<'a> {
    Room {
        name: Spanned<&'a str>,
        wall: Option<Spanned<&'a str>>,
    },
    Outside(Span),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Connection<'a> {
    pub from: Endpoint<'a>,
    pub to: Endpoint<'a>,
    pub door_type: Spanned<&'a str>,
    pub position: Option<Spanned<f64>>,
    pub opens_into: Option<Spanned<&'a str>>,
    pub swing: Option<Spanned<&'a str>>,
}
