//! Elaboration of the validated AST into the semantic model.
//!
//! Converts spanned parser types into the owned values of
//! [`floorplan_core::semantic`]. Wall types are kept by name; names that are
//! not one of the built-in types become [`WallType::Other`].

use log::{debug, trace};

use floorplan_core::{
    geometry::{Point, Size},
    semantic::{self, Direction, Swing, WallSet, WallSpec, WallType},
};

use crate::{
    error::{Diagnostic, ErrorCode},
    parser_types as types,
    span::Spanned,
};

type Result<T> = std::result::Result<T, Diagnostic>;

fn direction(name: &Spanned<&str>) -> Result<Direction> {
    name.parse().map_err(|message: String| {
        Diagnostic::error(message)
            .with_code(ErrorCode::E200)
            .with_label(name.span(), "unknown direction")
    })
}

fn swing(name: &Spanned<&str>) -> Result<Swing> {
    name.parse().map_err(|message: String| {
        Diagnostic::error(message)
            .with_code(ErrorCode::E204)
            .with_label(name.span(), "unknown swing")
    })
}

fn walls(specs: &[types::WallSpec<'_>]) -> Result<WallSet> {
    let specs = specs
        .iter()
        .map(|spec| {
            let wall_type = WallType::from_name(spec.wall_type.inner());
            if let WallType::Other(name) = &wall_type {
                debug!(wall_type = name.as_str(); "Keeping custom wall type");
            }
            Ok(WallSpec::new(direction(&spec.direction)?, wall_type))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(WallSet::new(specs))
}

fn room(room: &types::Room<'_>) -> Result<semantic::Room> {
    let sub_rooms = room
        .sub_rooms
        .iter()
        .map(self::room)
        .collect::<Result<Vec<_>>>()?;

    let mut elaborated = semantic::Room::new(
        *room.name.inner(),
        *room.kind.inner(),
        Point::new(*room.x.inner(), *room.y.inner()),
        Size::new(*room.width.inner(), *room.height.inner()),
    )
    .with_walls(walls(&room.walls)?)
    .with_sub_rooms(sub_rooms);

    if let Some(label) = &room.label {
        elaborated = elaborated.with_label(label.inner().as_str());
    }

    trace!(name = room.name.inner(), kind:% = room.kind.inner(); "Elaborated room");
    Ok(elaborated)
}

fn floor(floor: &types::Floor<'_>) -> Result<semantic::Floor> {
    let rooms = floor
        .rooms
        .iter()
        .map(room)
        .collect::<Result<Vec<_>>>()?;
    Ok(semantic::Floor::new(*floor.id.inner(), rooms))
}

fn endpoint(endpoint: &types::Endpoint<'_>) -> Result<semantic::Endpoint> {
    match endpoint {
        types::Endpoint::Room { name, wall } => {
            let wall = wall.as_ref().map(direction).transpose()?;
            Ok(semantic::Endpoint::room(*name.inner(), wall))
        }
        types::Endpoint::Outside(_) => Ok(semantic::Endpoint::Outside),
    }
}

fn connection(connection: &types::Connection<'_>) -> Result<semantic::Connection> {
    let mut elaborated = semantic::Connection::new(
        endpoint(&connection.from)?,
        endpoint(&connection.to)?,
        *connection.door_type.inner(),
    );

    if let Some(position) = &connection.position {
        elaborated = elaborated.with_position(*position.inner());
    }
    if let Some(room) = &connection.opens_into {
        elaborated = elaborated.with_opens_into(*room.inner());
    }
    if let Some(side) = &connection.swing {
        elaborated = elaborated.with_swing(swing(side)?);
    }

    Ok(elaborated)
}

/// Convert a validated AST into a semantic [`Floorplan`](semantic::Floorplan).
pub fn elaborate(floorplan: &types::Floorplan<'_>) -> Result<semantic::Floorplan> {
    let floors = floorplan
        .floors
        .iter()
        .map(floor)
        .collect::<Result<Vec<_>>>()?;
    let connections = floorplan
        .connections
        .iter()
        .map(connection)
        .collect::<Result<Vec<_>>>()?;

    debug!(floors = floors.len(), connections = connections.len(); "Elaborated floorplan");
    Ok(semantic::Floorplan::new(floors, connections))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lexer::tokenize, parser::build_floorplan};
    use floorplan_core::semantic::RoomKind;

    fn elaborate_source(source: &str) -> semantic::Floorplan {
        let tokens = tokenize(source).expect("Failed to tokenize input");
        let ast = build_floorplan(&tokens).expect("Failed to parse input");
        elaborate(&ast).expect("Failed to elaborate")
    }

    #[test]
    fn test_room_fields() {
        let plan = elaborate_source(
            "floorplan floor f1 { room Kitchen at (1.5,2) size (10 x 12.25) walls [top: solid, left: door, bottom: glass-brick] label \"Cook here\" }",
        );

        let room = &plan.floors()[0].rooms()[0];
        assert_eq!(room.name(), "Kitchen");
        assert_eq!(room.kind(), RoomKind::Room);
        assert_eq!(room.position(), Point::new(1.5, 2.0));
        assert_eq!(room.size(), Size::new(10.0, 12.25));
        assert_eq!(room.label(), Some("Cook here"));
        assert_eq!(room.walls().wall_type(Direction::Left), &WallType::Door);
        assert_eq!(
            room.walls().wall_type(Direction::Bottom),
            &WallType::Other("glass-brick".to_string())
        );
        // Undeclared directions read as solid
        assert_eq!(room.walls().wall_type(Direction::Right), &WallType::Solid);
    }

    #[test]
    fn test_nested_rooms_keep_order() {
        let plan = elaborate_source(
            "floorplan floor f { room A at (0,0) size (9 x 9) walls [] composed of [
                sub-room B at (0,0) size (1 x 1) walls []
                sub-room C at (2,0) size (3 x 3) walls [] composed of [
                    sub-room D at (2,0) size (1 x 1) walls []
                ]
            ] }",
        );

        let names: Vec<_> = plan.rooms().map(|room| room.name()).collect();
        assert_eq!(names, ["A", "B", "C", "D"]);
        assert_eq!(plan.floors()[0].rooms()[0].sub_rooms()[1].kind(), RoomKind::SubRoom);
    }

    #[test]
    fn test_connection_fields() {
        let plan = elaborate_source(
            "floorplan connect RoomA.right to RoomB.left door at 50% opens into RoomA swing: left",
        );

        let connection = &plan.connections()[0];
        assert_eq!(connection.from(), &semantic::Endpoint::room("RoomA", Some(Direction::Right)));
        assert_eq!(connection.to(), &semantic::Endpoint::room("RoomB", Some(Direction::Left)));
        assert_eq!(connection.door_type(), "door");
        assert_eq!(connection.position(), Some(50.0));
        assert_eq!(connection.opens_into(), Some("RoomA"));
        assert_eq!(connection.swing(), Some(Swing::Left));
    }

    #[test]
    fn test_outside_endpoint() {
        let plan = elaborate_source("floorplan connect Hall.bottom to outside door");
        assert_eq!(plan.connections()[0].to(), &semantic::Endpoint::Outside);
    }

    #[test]
    fn test_unvalidated_direction_is_reported() {
        let tokens = tokenize("floorplan floor f { room A at (0,0) size (1 x 1) walls [up: solid] }")
            .unwrap();
        let ast = build_floorplan(&tokens).unwrap();

        let diag = elaborate(&ast).unwrap_err();
        assert_eq!(diag.code(), Some(ErrorCode::E200));
    }
}
