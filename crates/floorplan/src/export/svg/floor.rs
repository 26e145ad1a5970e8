//! SVG rendering for floors and their room trees.

use log::{debug, trace};
use svg::node::element as svg_element;

use floorplan_core::{
    draw::{Drawable, FloorBoundary, LayeredOutput, RoomDrawing},
    semantic::{Floor, Room},
};

use super::{DoorAnchors, Svg};
use crate::layout;

impl Svg {
    /// Renders one floor into a `<g data-floor="...">` group.
    ///
    /// A floor without rooms yields an empty group.
    pub(super) fn render_floor(&self, floor: &Floor, anchors: &DoorAnchors<'_>) -> svg_element::Group {
        let group = svg_element::Group::new().set("data-floor", floor.id());

        let Some(bounds) = layout::floor_bounds(floor.rooms()) else {
            debug!(floor = floor.id(); "Skipping empty floor");
            return group;
        };
        trace!(floor = floor.id(), bounds:?; "Rendering floor");

        let boundary = FloorBoundary::new(&self.floor_stroke, bounds.to_size());
        let group = add_nodes(group, boundary.render_to_layers(bounds.min_point()));

        floor
            .rooms()
            .iter()
            .fold(group, |group, room| group.add(self.render_room(room, anchors)))
    }

    /// Renders a room followed by its sub-rooms, depth-first.
    fn render_room(&self, room: &Room, anchors: &DoorAnchors<'_>) -> svg_element::Group {
        let group = svg_element::Group::new()
            .set("data-room", room.name())
            .set("data-kind", room.kind().as_str());

        let drawing = room
            .walls()
            .iter()
            .filter_map(|(direction, _)| {
                anchors
                    .get(&(room.name(), direction))
                    .map(|&fraction| (direction, fraction))
            })
            .fold(
                RoomDrawing::new(&self.room_definition, room),
                |drawing, (direction, fraction)| drawing.with_door_anchor(direction, fraction),
            );
        let group = add_nodes(group, drawing.render_to_layers(room.position()));

        room.sub_rooms()
            .iter()
            .fold(group, |group, sub_room| group.add(self.render_room(sub_room, anchors)))
    }
}

fn add_nodes(group: svg_element::Group, output: LayeredOutput) -> svg_element::Group {
    output
        .render()
        .into_iter()
        .fold(group, |group, node| group.add(node))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::svg::SvgBuilder;
    use floorplan_core::{
        geometry::{Point, Size},
        semantic::{Direction, RoomKind, WallSet, WallSpec, WallType},
    };

    fn room(name: &str, kind: RoomKind) -> Room {
        Room::new(name, kind, Point::new(0.0, 0.0), Size::new(4.0, 4.0))
    }

    #[test]
    fn test_empty_floor_renders_nothing() {
        let svg = SvgBuilder::new().build().unwrap();
        let output = svg
            .render_floor(&Floor::new("empty", Vec::new()), &DoorAnchors::new())
            .to_string();

        assert!(output.contains(r#"data-floor="empty""#));
        assert!(!output.contains("<rect"));
        assert!(!output.contains("data-room"));
    }

    #[test]
    fn test_boundary_precedes_rooms() {
        let svg = SvgBuilder::new().build().unwrap();
        let floor = Floor::new("f", vec![room("A", RoomKind::Room)]);
        let output = svg.render_floor(&floor, &DoorAnchors::new()).to_string();

        let boundary = output.find("floor-boundary").unwrap();
        let room = output.find(r#"data-room="A""#).unwrap();
        assert!(boundary < room);
    }

    #[test]
    fn test_sub_rooms_nest_after_parent_content() {
        let svg = SvgBuilder::new().build().unwrap();
        let parent = room("A", RoomKind::Room)
            .with_walls(WallSet::solid())
            .with_sub_rooms(vec![room("B", RoomKind::SubRoom)]);
        let output = svg.render_room(&parent, &DoorAnchors::new()).to_string();

        let child = output.find(r#"data-room="B""#).unwrap();
        let parent_content = &output[..child];
        assert!(parent_content.contains("<text"));
        assert_eq!(parent_content.matches(r#"data-type="wall""#).count(), 4);
        assert!(output.contains(r#"data-kind="sub-room""#));
        assert_eq!(output.matches("</g>").count(), 2);
    }

    #[test]
    fn test_anchor_moves_door_glyph() {
        let svg = SvgBuilder::new().build().unwrap();
        let hall = room("Hall", RoomKind::Room).with_walls(WallSet::new(vec![WallSpec::new(
            Direction::Top,
            WallType::Door,
        )]));

        let centered = svg.render_room(&hall, &DoorAnchors::new()).to_string();
        let mut anchors = DoorAnchors::new();
        anchors.insert(("Hall", Direction::Top), 0.25);
        let pinned = svg.render_room(&hall, &anchors).to_string();

        assert_ne!(centered, pinned);

        let mut other_room = DoorAnchors::new();
        other_room.insert(("Kitchen", Direction::Top), 0.25);
        assert_eq!(centered, svg.render_room(&hall, &other_room).to_string());
    }
}
