//! Validation of the parsed AST using the visitor pattern.
//!
//! Runs between parsing and elaboration. The traversal is read-only and
//! collects every problem it finds.
//!
//! ## Validations Performed
//!
//! - **Wall directions**: must be `top`, `right`, `bottom` or `left` (E200),
//!   and appear at most once per room (E201)
//! - **Room names**: unique across the whole document, sub-rooms included (E202)
//! - **Door positions**: `at N%` within `0..=100` (E203)
//! - **Swing**: `left` or `right` (E204)
//! - **Room sizes**: width and height greater than zero (E205)

use std::str::FromStr;

use indexmap::IndexMap;
use log::trace;

use floorplan_core::semantic::{Direction, Swing};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    parser_types::{Connection, Endpoint, Floor, Floorplan, Room, WallSpec},
    span::{Span, Spanned},
};

/// Visitor trait for traversing/analyzing AST nodes.
///
/// Default implementations perform recursive traversal so implementors can override
/// only the methods they care about.
pub trait Visitor<'a> {
    /// Visit a complete document
    fn visit_floorplan(&mut self, floorplan: &Floorplan<'a>) {
        for floor in &floorplan.floors {
            self.visit_floor(floor);
        }
        for connection in &floorplan.connections {
            self.visit_connection(connection);
        }
    }

    fn visit_floor(&mut self, floor: &Floor<'a>) {
        self.visit_rooms(&floor.rooms);
    }

    /// Visit a list of sibling rooms
    fn visit_rooms(&mut self, rooms: &[Room<'a>]) {
        for room in rooms {
            self.visit_room(room);
        }
    }

    /// Visit a room, its walls and then its sub-rooms
    fn visit_room(&mut self, room: &Room<'a>) {
        self.visit_room_name(&room.name);
        self.visit_room_size(room);
        self.visit_walls(&room.walls);
        self.visit_rooms(&room.sub_rooms);
    }

    fn visit_room_name(&mut self, _name: &Spanned<&'a str>) {}

    fn visit_room_size(&mut self, _room: &Room<'a>) {}

    fn visit_walls(&mut self, walls: &[WallSpec<'a>]) {
        for wall in walls {
            self.visit_wall_spec(wall);
        }
    }

    fn visit_wall_spec(&mut self, wall: &WallSpec<'a>) {
        self.visit_direction(&wall.direction);
    }

    /// Visit a wall direction name (in a wall list or an endpoint)
    fn visit_direction(&mut self, _direction: &Spanned<&'a str>) {}

    fn visit_connection(&mut self, connection: &Connection<'a>) {
        self.visit_endpoint(&connection.from);
        self.visit_endpoint(&connection.to);
        if let Some(position) = &connection.position {
            self.visit_door_position(position);
        }
        if let Some(swing) = &connection.swing {
            self.visit_swing(swing);
        }
    }

    fn visit_endpoint(&mut self, endpoint: &Endpoint<'a>) {
        if let Endpoint::Room {
            wall: Some(wall), ..
        } = endpoint
        {
            self.visit_direction(wall);
        }
    }

    fn visit_door_position(&mut self, _position: &Spanned<f64>) {}

    fn visit_swing(&mut self, _swing: &Spanned<&'a str>) {}
}

/// Validator that checks the semantic constraints of a document
///
/// Room names are registered in an insertion-ordered map as they are
/// visited so a duplicate can point back at the first definition.
struct Validator<'a> {
    room_names: IndexMap<&'a str, Span>,
    diagnostics: DiagnosticCollector,
}

impl<'a> Validator<'a> {
    fn new() -> Self {
        Self {
            room_names: IndexMap::new(),
            diagnostics: DiagnosticCollector::new(),
        }
    }

    fn check_positive(&mut self, room: &Room<'a>, value: &Spanned<f64>, dimension: &str) {
        if !(**value > 0.0 && value.is_finite()) {
            self.diagnostics.emit(
                Diagnostic::error(format!("room {dimension} must be greater than zero"))
                    .with_code(ErrorCode::E205)
                    .with_label(value.span(), format!("{dimension} is {value}"))
                    .with_secondary_label(room.size_span(), format!("size of room `{}`", room.name))
                    .with_help("room sizes are written as `size (W x H)` with W, H > 0"),
            );
        }
    }
}

impl<'a> Visitor<'a> for Validator<'a> {
    fn visit_room_name(&mut self, name: &Spanned<&'a str>) {
        match self.room_names.get(name.inner()) {
            Some(first) => {
                let first = *first;
                self.diagnostics.emit(
                    Diagnostic::error(format!("room `{name}` is defined multiple times"))
                        .with_code(ErrorCode::E202)
                        .with_label(name.span(), "duplicate definition")
                        .with_secondary_label(first, "first defined here")
                        .with_help("room names must be unique across all floors"),
                );
            }
            None => {
                self.room_names.insert(*name.inner(), name.span());
            }
        }
    }

    fn visit_room_size(&mut self, room: &Room<'a>) {
        self.check_positive(room, &room.width, "width");
        self.check_positive(room, &room.height, "height");
    }

    fn visit_walls(&mut self, walls: &[WallSpec<'a>]) {
        let mut seen: IndexMap<&'a str, Span> = IndexMap::new();

        for wall in walls {
            self.visit_wall_spec(wall);

            let direction = *wall.direction.inner();
            if let Some(first) = seen.get(direction) {
                self.diagnostics.emit(
                    Diagnostic::error(format!(
                        "wall direction `{direction}` is specified multiple times"
                    ))
                    .with_code(ErrorCode::E201)
                    .with_label(wall.span(), "duplicate direction")
                    .with_secondary_label(*first, "first specified here")
                    .with_help("each wall direction may appear once per room"),
                );
            } else {
                seen.insert(direction, wall.direction.span());
            }
        }
    }

    fn visit_direction(&mut self, direction: &Spanned<&'a str>) {
        if let Err(message) = Direction::from_str(direction.inner()) {
            self.diagnostics.emit(
                Diagnostic::error(message)
                    .with_code(ErrorCode::E200)
                    .with_label(direction.span(), "unknown direction")
                    .with_help("use one of `top`, `right`, `bottom`, `left`"),
            );
        }
    }

    fn visit_door_position(&mut self, position: &Spanned<f64>) {
        if !(0.0..=100.0).contains(position.inner()) {
            self.diagnostics.emit(
                Diagnostic::error(format!("door position {position}% is out of range"))
                    .with_code(ErrorCode::E203)
                    .with_label(position.span(), "out of range")
                    .with_help("positions are percentages between 0 and 100"),
            );
        }
    }

    fn visit_swing(&mut self, swing: &Spanned<&'a str>) {
        if let Err(message) = Swing::from_str(swing.inner()) {
            self.diagnostics.emit(
                Diagnostic::error(message)
                    .with_code(ErrorCode::E204)
                    .with_label(swing.span(), "unknown swing")
                    .with_help("use `swing: left` or `swing: right`"),
            );
        }
    }
}

/// Run all document validations, reporting every problem found.
pub fn validate_floorplan(floorplan: &Floorplan<'_>) -> Result<(), ParseError> {
    let mut validator = Validator::new();
    validator.visit_floorplan(floorplan);
    trace!(rooms = validator.room_names.len(); "Validated floorplan");
    validator.diagnostics.finish()
}
