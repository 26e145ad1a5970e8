//! Rendering configuration.
//!
//! [`AppConfig`] is deserialized from TOML by the command-line tool; every
//! field has a default, so an empty file (or no file) is a valid config.

use serde::Deserialize;

use floorplan_core::{
    color::Color,
    draw::{RoomDefinition, StrokeDefinition, StrokeStyle},
};

/// Application configuration loaded from TOML file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render configuration section
    #[serde(default)]
    pub render: RenderConfig,

    /// Style configuration section
    #[serde(default)]
    pub style: StyleConfig,
}

impl AppConfig {
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Render configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Wall inset thickness in plan units
    wall_thickness: f64,

    /// Add a "W x H" line under each room name
    show_size: bool,
}

impl RenderConfig {
    pub fn wall_thickness(&self) -> f64 {
        self.wall_thickness
    }

    pub fn show_size(&self) -> bool {
        self.show_size
    }

    pub fn with_wall_thickness(mut self, thickness: f64) -> Self {
        self.wall_thickness = thickness;
        self
    }

    pub fn with_show_size(mut self, show_size: bool) -> Self {
        self.show_size = show_size;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            wall_thickness: 0.1,
            show_size: false,
        }
    }
}

/// Style configuration section
///
/// Colors use CSS syntax (`"white"`, `"#d0e8ff"`, `"rgb(0 0 0 / 50%)"`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Background color for the whole drawing; transparent when unset
    background_color: Option<String>,
    room_fill: String,
    wall_color: String,
    /// Label color; inherits from the SVG when unset
    text_color: Option<String>,
    font_family: String,
    font_size: f64,
    /// `solid`, `dashed`, `dotted` or a raw SVG dasharray
    floor_stroke_style: String,
}

impl StyleConfig {
    /// Get the background color from configuration
    /// Returns None if no background color is configured
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn with_room_fill(mut self, color: impl Into<String>) -> Self {
        self.room_fill = color.into();
        self
    }

    pub fn with_floor_stroke_style(mut self, style: impl Into<String>) -> Self {
        self.floor_stroke_style = style.into();
        self
    }

    fn wall_color(&self) -> Result<Color, String> {
        Color::new(&self.wall_color).map_err(|err| format!("Invalid wall color in config: {err}"))
    }

    /// Builds the stroke used for floor boundaries.
    pub fn floor_stroke(&self) -> Result<StrokeDefinition, String> {
        let style: StrokeStyle = self
            .floor_stroke_style
            .parse()
            .map_err(|err| format!("Invalid floor stroke style in config: {err}"))?;
        Ok(StrokeDefinition::new(self.wall_color()?, 0.1).with_style(style))
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            room_fill: "lightblue".to_string(),
            wall_color: "black".to_string(),
            text_color: None,
            font_family: "sans-serif".to_string(),
            font_size: 0.5,
            floor_stroke_style: "solid".to_string(),
        }
    }
}

impl TryFrom<&AppConfig> for RoomDefinition {
    type Error = String;

    fn try_from(config: &AppConfig) -> Result<Self, Self::Error> {
        let style = config.style();
        let render = config.render();

        if !(render.wall_thickness > 0.0 && render.wall_thickness.is_finite()) {
            return Err(format!(
                "Invalid wall thickness in config: {} (must be greater than zero)",
                render.wall_thickness
            ));
        }
        if !(style.font_size > 0.0 && style.font_size.is_finite()) {
            return Err(format!(
                "Invalid font size in config: {} (must be greater than zero)",
                style.font_size
            ));
        }

        let mut definition = RoomDefinition::default();

        let fill = Color::new(&style.room_fill)
            .map_err(|err| format!("Invalid room fill color in config: {err}"))?;
        definition.set_fill(fill);

        let wall_color = style.wall_color()?;
        let mut stroke = definition.stroke().clone();
        stroke.set_color(wall_color);
        definition.set_stroke(stroke);

        let mut wall = definition.wall().clone();
        wall.set_color(wall_color);
        definition.set_wall(wall);

        let mut text = definition.text().clone();
        text.set_font_family(style.font_family.as_str());
        text.set_font_size(style.font_size);
        let text_color = style
            .text_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| format!("Invalid text color in config: {err}"))?;
        text.set_color(text_color);
        definition.set_text(text);

        definition.set_wall_thickness(render.wall_thickness);
        definition.set_show_size(render.show_size);

        Ok(definition)
    }
}
