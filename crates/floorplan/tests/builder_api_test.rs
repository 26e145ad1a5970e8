//! Integration tests for the FloorplanBuilder API

use floorplan::{FloorplanBuilder, FloorplanError, config::AppConfig};

const TWO_ROOMS: &str = r#"
    floorplan
        floor f1 {
            room RoomA at (0,0) size (5 x 5) walls [top: solid, right: door, bottom: solid, left: solid]
            room RoomB at (5,0) size (5 x 5) walls [top: solid, right: solid, bottom: solid, left: door]
        }
    connect RoomA.right to RoomB.left door at 50% opens into RoomA swing: left
"#;

#[test]
fn test_parse_simple_floorplan() {
    let builder = FloorplanBuilder::default();
    let result = builder.parse(TWO_ROOMS);
    assert!(
        result.is_ok(),
        "Should parse valid floorplan: {:?}",
        result.err()
    );
}

#[test]
fn test_render_simple_floorplan() {
    let builder = FloorplanBuilder::default();
    let floorplan = builder.parse(TWO_ROOMS).expect("Failed to parse floorplan");
    let result = builder.render_svg(&floorplan);

    match result {
        Ok(svg) => {
            assert!(svg.contains("<svg"), "Output should contain SVG tag");
            assert!(svg.contains("</svg>"), "Output should be complete SVG");
            assert!(svg.contains(r#"viewBox="0 0 10 5""#), "{svg}");
        }
        Err(err) => panic!("Failed to render: {err:?}"),
    }
}

#[test]
fn test_parse_invalid_syntax_returns_error() {
    let builder = FloorplanBuilder::default();
    let err = builder
        .parse("this is not a floorplan")
        .expect_err("Should return error for invalid syntax");

    match err {
        FloorplanError::Parse { err, src } => {
            assert!(!err.diagnostics().is_empty());
            assert_eq!(src, "this is not a floorplan");
        }
        other => panic!("Expected parse error, got {other:?}"),
    }
}

#[test]
fn test_resolve_connections() {
    let builder = FloorplanBuilder::default();
    let floorplan = builder.parse(TWO_ROOMS).expect("Failed to parse floorplan");

    let resolution = builder.resolve_connections(&floorplan);
    assert!(resolution.is_complete());
    assert_eq!(resolution.connections().len(), 1);
    assert_eq!(resolution.connections()[0].position(), Some(50.0));
}

#[test]
fn test_invalid_config_color() {
    let mut config = AppConfig::default();
    config.style = config.style.with_room_fill("not-a-color");

    let builder = FloorplanBuilder::new(config);
    let floorplan = builder.parse(TWO_ROOMS).expect("Failed to parse floorplan");
    let err = builder.render_svg(&floorplan).expect_err("Should reject color");

    assert!(matches!(err, FloorplanError::Config(_)), "{err:?}");
}

#[test]
fn test_builder_reusability() {
    let builder = FloorplanBuilder::default();

    let first = builder
        .parse("floorplan floor a { room A at (0,0) size (1 x 1) walls [] }")
        .expect("Failed to parse first floorplan");
    let second = builder
        .parse("floorplan floor b { room B at (0,0) size (2 x 2) walls [] }")
        .expect("Failed to parse second floorplan");

    let svg1 = builder.render_svg(&first).expect("Failed to render first");
    let svg2 = builder.render_svg(&second).expect("Failed to render second");

    assert!(svg1.contains(r#"data-room="A""#));
    assert!(svg2.contains(r#"data-room="B""#));
    assert_ne!(svg1, svg2);
}
