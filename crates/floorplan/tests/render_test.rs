//! Rendering scenarios over parsed floor plans.

use floorplan::{
    FloorplanBuilder,
    geometry::{Point, Size},
    resolve::EndpointRole,
    semantic::{Floor, Floorplan, Room, RoomKind, WallSet},
};

fn render(source: &str) -> String {
    let builder = FloorplanBuilder::default();
    let floorplan = builder.parse(source).expect("Failed to parse");
    builder.render_svg(&floorplan).expect("Failed to render")
}

/// Room names in document order.
fn room_order(svg: &str) -> Vec<&str> {
    svg.match_indices(r#"data-room=""#)
        .map(|(start, pattern)| {
            let rest = &svg[start + pattern.len()..];
            &rest[..rest.find('"').unwrap()]
        })
        .collect()
}

#[test]
fn test_nested_rooms_render_depth_first() {
    let svg = render(
        r#"
        floorplan
            floor f1 {
                room A at (0,0) size (10 x 10) walls [] composed of [
                    sub-room B at (0,0) size (2 x 2) walls []
                    sub-room C at (5,5) size (4 x 4) walls [] composed of [
                        sub-room D at (6,6) size (1 x 1) walls []
                    ]
                ]
            }
        "#,
    );

    assert_eq!(room_order(&svg), ["A", "B", "C", "D"]);
}

#[test]
fn test_rendering_is_idempotent() {
    let builder = FloorplanBuilder::default();
    let floorplan = builder
        .parse(
            r#"
            floorplan
                floor f1 {
                    room A at (0,0) size (4 x 4) walls [top: window, right: door, bottom: open]
                    room B at (4,0) size (4 x 4) walls [left: door] label "Bath"
                }
            connect A.right to B.left door at 30%
            "#,
        )
        .expect("Failed to parse");

    let first = builder.render_svg(&floorplan).expect("Failed to render");
    let second = builder.render_svg(&floorplan).expect("Failed to render");
    assert_eq!(first, second);
}

#[test]
fn test_empty_floor_draws_nothing() {
    let svg = render("floorplan floor empty { }");

    assert!(svg.contains(r#"data-floor="empty""#));
    assert!(!svg.contains("<rect"));
    assert!(svg.contains(r#"viewBox="0 0 0 0""#));
}

#[test]
fn test_empty_document_is_valid_svg() {
    let svg = render("floorplan");

    assert!(svg.contains("<svg"));
    assert!(svg.contains(r#"viewBox="0 0 0 0""#));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn test_open_wall_emits_no_element() {
    let svg = render(
        r#"
        floorplan
            floor f1 {
                room A at (0,0) size (4 x 4) walls [top: open, right: solid, bottom: solid, left: solid]
            }
        "#,
    );

    assert!(!svg.contains(r#"data-direction="top""#));
    assert!(svg.contains(r#"data-direction="right""#));
}

#[test]
fn test_unknown_wall_type_renders_solid() {
    let unknown = render(
        r#"
        floorplan
            floor f1 {
                room A at (0,0) size (4 x 4) walls [left: glass-brick]
            }
        "#,
    );
    let solid = render(
        r#"
        floorplan
            floor f1 {
                room A at (0,0) size (4 x 4) walls [left: solid]
            }
        "#,
    );

    assert_eq!(unknown, solid);
}

#[test]
fn test_room_rectangle_matches_declaration() {
    let svg = render(
        r#"
        floorplan
            floor f1 {
                room Hall at (2,3) size (4 x 5) walls []
            }
        "#,
    );

    assert!(svg.contains(r#"viewBox="2 3 4 5""#), "{svg}");
    let rect = svg
        .split("<rect")
        .find(|element| element.contains(r#"fill="lightblue""#))
        .expect("room rectangle");
    assert!(rect.contains(r#"x="2""#));
    assert!(rect.contains(r#"y="3""#));
    assert!(rect.contains(r#"width="4""#));
    assert!(rect.contains(r#"height="5""#));
}

/// The `<rect` element of the given `data-type`, or the room rectangle when `None`.
fn rect_of<'a>(svg: &'a str, room: &str, data_type: Option<&str>) -> &'a str {
    let start = svg.find(&format!(r#"data-room="{room}""#)).expect("room group");
    svg[start..]
        .split("<rect")
        .skip(1)
        .find(|element| match data_type {
            Some(kind) => element.contains(&format!(r#"data-type="{kind}""#)),
            None => element.contains(r#"fill="lightblue""#),
        })
        .map(|element| &element[..element.find("/>").unwrap_or(element.len())])
        .expect("rectangle")
}

#[test]
fn test_fractional_coordinates_reach_svg_unchanged() {
    let svg = render(
        r#"
        floorplan
            floor f1 {
                room A at (0.1, 0.7) size (0.2 x 3.3) walls [top: solid]
                room B at (1000.3, 7.1) size (0.7 x 0.3) walls [top: solid]
            }
        "#,
    );

    let a = rect_of(&svg, "A", None);
    assert!(a.contains(r#"x="0.1""#), "{a}");
    assert!(a.contains(r#"y="0.7""#), "{a}");
    assert!(a.contains(r#"width="0.2""#), "{a}");
    assert!(a.contains(r#"height="3.3""#), "{a}");

    let b = rect_of(&svg, "B", None);
    assert!(b.contains(r#"x="1000.3""#), "{b}");
    assert!(b.contains(r#"y="7.1""#), "{b}");
    assert!(b.contains(r#"width="0.7""#), "{b}");
    assert!(b.contains(r#"height="0.3""#), "{b}");

    let wall = rect_of(&svg, "A", Some("wall"));
    assert!(wall.contains(r#"x="0.1""#), "{wall}");
    assert!(wall.contains(r#"width="0.2""#), "{wall}");
    assert!(wall.contains(r#"height="0.1""#), "{wall}");

    // The floor outline and the view box start at the same corner.
    assert!(svg.contains(r#"viewBox="0.1 0.7 "#), "{svg}");
    let boundary = svg
        .split("<rect")
        .find(|element| element.contains("floor-boundary"))
        .expect("floor boundary");
    assert!(boundary.contains(r#"x="0.1""#), "{boundary}");
    assert!(boundary.contains(r#"y="0.7""#), "{boundary}");
}

#[test]
fn test_pinned_door_moves_along_wall() {
    let source = |position: &str| {
        format!(
            r#"
            floorplan
                floor f1 {{
                    room A at (0,0) size (4 x 4) walls [right: door]
                    room B at (4,0) size (4 x 4) walls [left: door]
                }}
            connect A.right to B.left door {position}
            "#
        )
    };

    let centered = render(&source(""));
    let explicit_center = render(&source("at 50%"));
    let pinned = render(&source("at 20%"));

    assert_eq!(centered, explicit_center);
    assert_ne!(centered, pinned);
}

#[test]
fn test_linking_error_keeps_rendering() {
    let builder = FloorplanBuilder::default();
    let floorplan = builder
        .parse(
            r#"
            floorplan
                floor f1 {
                    room RoomA at (0,0) size (5 x 5) walls [right: door]
                    room RoomB at (5,0) size (5 x 5) walls [left: door]
                }
            connect Nonexistent.right to RoomB.left door
            connect RoomA.right to RoomB.left door at 50%
            "#,
        )
        .expect("Failed to parse");

    let resolution = builder.resolve_connections(&floorplan);
    assert_eq!(resolution.errors().len(), 1);
    assert_eq!(resolution.errors()[0].name(), "Nonexistent");
    assert_eq!(resolution.errors()[0].role(), EndpointRole::From);
    assert_eq!(resolution.connections().len(), 1);

    let svg = builder.render_svg(&floorplan).expect("Failed to render");
    assert_eq!(room_order(&svg), ["RoomA", "RoomB"]);
}

#[test]
fn test_floors_share_one_canvas() {
    let floorplan = Floorplan::new(
        vec![
            Floor::new(
                "ground",
                vec![
                    Room::new("A", RoomKind::Room, Point::new(0.0, 0.0), Size::new(3.0, 3.0))
                        .with_walls(WallSet::solid()),
                ],
            ),
            Floor::new(
                "upper",
                vec![Room::new(
                    "B",
                    RoomKind::Room,
                    Point::new(1.0, 1.0),
                    Size::new(3.0, 3.0),
                )],
            ),
        ],
        Vec::new(),
    );

    let svg = FloorplanBuilder::default()
        .render_svg(&floorplan)
        .expect("Failed to render");

    assert!(svg.contains(r#"viewBox="0 0 4 4""#), "{svg}");
    let ground = svg.find(r#"data-floor="ground""#).unwrap();
    let upper = svg.find(r#"data-floor="upper""#).unwrap();
    assert!(ground < upper);
    assert_eq!(svg.matches("<svg").count(), 1);
}
