//! SVG export.
//!
//! [`SvgBuilder`] turns an [`AppConfig`] into the drawing definitions used by
//! [`Svg`], which renders every floor into one shared canvas.

mod floor;

use indexmap::IndexMap;
use log::{debug, info, trace};
use svg::{Document, node::element as svg_element};

use floorplan_core::{
    color::Color,
    draw::{RoomDefinition, StrokeDefinition},
    geometry::Bounds,
    semantic::{Direction, Floorplan},
};

use crate::{
    FloorplanError,
    config::AppConfig,
    export::{self, Exporter},
    layout,
    resolve::Resolution,
};

/// Door anchors keyed by room name and wall, as a fraction of the wall length.
type DoorAnchors<'a> = IndexMap<(&'a str, Direction), f64>;

/// Builder for [`Svg`].
#[derive(Debug, Default)]
pub struct SvgBuilder<'a> {
    config: Option<&'a AppConfig>,
}

impl<'a> SvgBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: &'a AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the exporter, validating colors and sizes from the config.
    ///
    /// # Errors
    ///
    /// Returns [`FloorplanError::Config`] for an invalid color, stroke style,
    /// wall thickness or font size.
    pub fn build(self) -> Result<Svg, FloorplanError> {
        let default_config = AppConfig::default();
        let config = self.config.unwrap_or(&default_config);

        let room_definition = RoomDefinition::try_from(config).map_err(FloorplanError::Config)?;
        let floor_stroke = config
            .style()
            .floor_stroke()
            .map_err(FloorplanError::Config)?;
        let background_color = config
            .style()
            .background_color()
            .map_err(FloorplanError::Config)?;

        Ok(Svg {
            room_definition,
            floor_stroke,
            background_color,
        })
    }
}

/// SVG renderer for whole floor plans.
#[derive(Debug, Clone)]
pub struct Svg {
    room_definition: RoomDefinition,
    floor_stroke: StrokeDefinition,
    background_color: Option<Color>,
}

impl Svg {
    /// Renders `floorplan` to an SVG document.
    ///
    /// The view box is the union of every floor's bounds, or `0 0 0 0` when
    /// no floor has rooms.
    pub fn render_floorplan(
        &self,
        floorplan: &Floorplan,
        resolution: &Resolution<'_>,
    ) -> Result<Document, export::Error> {
        let bounds = layout::floorplan_bounds(floorplan).unwrap_or_default();
        check_finite(bounds)?;
        debug!(
            min_x = bounds.min_x(),
            min_y = bounds.min_y(),
            width = bounds.width(),
            height = bounds.height();
            "Floorplan bounds"
        );

        let mut doc = Document::new()
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    bounds.min_x(),
                    bounds.min_y(),
                    bounds.width(),
                    bounds.height()
                ),
            );

        if let Some(color) = self.background_color {
            doc = doc.add(background(color, bounds));
        }

        let anchors = door_anchors(resolution);
        for floor in floorplan.floors() {
            doc = doc.add(self.render_floor(floor, &anchors));
        }

        Ok(doc)
    }
}

impl Exporter for Svg {
    fn export_floorplan(
        &mut self,
        floorplan: &Floorplan,
        resolution: &Resolution<'_>,
    ) -> Result<String, export::Error> {
        info!(floors = floorplan.floors().len(); "Rendering floorplan");
        let doc = self.render_floorplan(floorplan, resolution)?;
        debug!("SVG document rendered");
        Ok(doc.to_string())
    }
}

fn check_finite(bounds: Bounds) -> Result<(), export::Error> {
    let values = [
        bounds.min_x(),
        bounds.min_y(),
        bounds.max_x(),
        bounds.max_y(),
    ];
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(export::Error::Render(format!(
            "floorplan bounds are not finite: {bounds:?}"
        )))
    }
}

fn background(color: Color, bounds: Bounds) -> svg_element::Rectangle {
    svg_element::Rectangle::new()
        .set("x", bounds.min_x())
        .set("y", bounds.min_y())
        .set("width", bounds.width())
        .set("height", bounds.height())
        .set("fill", color.to_string())
        .set("fill-opacity", color.alpha())
        .set("data-type", "background")
}

/// Collects the door anchors pinned by resolved connections.
///
/// When several connections pin the same wall, the last one wins.
fn door_anchors<'a>(resolution: &Resolution<'a>) -> DoorAnchors<'a> {
    let mut anchors = DoorAnchors::new();
    for connection in resolution.connections() {
        for (room, wall, fraction) in connection.pinned_walls() {
            trace!(room = room.name(), wall:% = wall, fraction; "Pinned door anchor");
            anchors.insert((room.name(), wall), fraction);
        }
    }
    anchors
}
