//! Stroke and line-style definitions.
//!
//! - [`StrokeDefinition`]: color, width and dash style of an outline
//! - [`StrokeStyle`]: solid or patterned lines
//! - [`apply_stroke!`](crate::apply_stroke!): applies a definition to an SVG element
//!
//! Widths and dash lengths are in plan units, the same units rooms are
//! declared in, so a dashed floor outline scales with the drawing.
//!
//! # Example
//!
//! ```
//! use floorplan_core::color::Color;
//! use floorplan_core::draw::StrokeDefinition;
//! use svg::node::element as svg_element;
//!
//! let stroke = StrokeDefinition::dashed(Color::new("gray").unwrap(), 0.1);
//! let rect = svg_element::Rectangle::new().set("fill", "none");
//! let rect = floorplan_core::apply_stroke!(rect, &stroke);
//!
//! assert!(rect.to_string().contains("stroke-dasharray=\"0.5,0.5\""));
//! ```

use std::str::FromStr;

use crate::color::Color;

/// Visual style of a stroke.
///
/// # SVG Mapping
///
/// - `Solid`: no dasharray attribute
/// - `Dashed`: "0.5,0.5"
/// - `Dotted`: "0.1,0.2"
/// - `Custom(pattern)`: the pattern as given
#[derive(Debug, Default, Clone, PartialEq)]
pub enum StrokeStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
    /// Raw SVG dasharray, e.g. "1,0.5,0.2,0.5"
    Custom(String),
}

impl FromStr for StrokeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "dotted" => Ok(Self::Dotted),
            "" => Err("stroke style must not be empty".to_string()),
            // Any other value is treated as a custom dasharray pattern
            _ => Ok(Self::Custom(s.to_string())),
        }
    }
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(&self) -> Option<String> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("0.5,0.5".to_string()),
            Self::Dotted => Some("0.1,0.2".to_string()),
            Self::Custom(pattern) => Some(pattern.clone()),
        }
    }
}

/// A stroke definition for walls, rooms and floor outlines.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f64,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a solid stroke with the given color and width.
    pub fn new(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    /// Same as [`StrokeDefinition::new`].
    pub fn solid(color: Color, width: f64) -> Self {
        Self::new(color, width)
    }

    pub fn dashed(color: Color, width: f64) -> Self {
        Self::new(color, width).with_style(StrokeStyle::Dashed)
    }

    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        self.style = style;
        self
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the stroke style.
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }
}

impl Default for StrokeDefinition {
    /// Black, 0.1 units wide, solid.
    fn default() -> Self {
        Self::new(Color::default(), 0.1)
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// Sets color, opacity and width, plus the dash pattern when the style is not
/// solid.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width());

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}
