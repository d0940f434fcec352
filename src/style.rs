//! Colors and presentation attributes.
//!
//! [`Presentation`] is the set of styling values that flow from a scatter
//! series down to its marks and connecting line. Every field is optional so
//! that layers of attributes can be overlaid, with the overlay winning.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseColorError;

/// RGBA color.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Return the color with its alpha multiplied by `factor`.
    pub fn with_alpha_factor(self, factor: f32) -> Self {
        Self {
            a: (self.a * factor).clamp(0.0, 1.0),
            ..self
        }
    }

    fn channel_to_u8(value: f32) -> u8 {
        (value.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let Some(hex) = trimmed.strip_prefix('#') else {
            return Err(ParseColorError::MissingHash(s.to_string()));
        };
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(s.to_string()));
        }

        let invalid = |_: std::num::ParseIntError| ParseColorError::InvalidDigit(s.to_string());
        let digits: Vec<u8> = match hex.len() {
            3 | 4 => hex
                .char_indices()
                .map(|(i, _)| u8::from_str_radix(&hex[i..=i], 16).map(|v| v * 17))
                .collect::<Result<_, _>>()
                .map_err(invalid)?,
            6 | 8 => (0..hex.len())
                .step_by(2)
                .map(|i| u8::from_str_radix(&hex[i..i + 2], 16))
                .collect::<Result<_, _>>()
                .map_err(invalid)?,
            _ => return Err(ParseColorError::InvalidLength(s.to_string())),
        };

        let channel = |i: usize| digits.get(i).map_or(1.0, |v| f32::from(*v) / 255.0);
        Ok(Self::new(channel(0), channel(1), channel(2), channel(3)))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}",
            Self::channel_to_u8(self.r),
            Self::channel_to_u8(self.g),
            Self::channel_to_u8(self.b)
        )?;
        if self.a < 1.0 {
            write!(f, "{:02x}", Self::channel_to_u8(self.a))?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// A fill or stroke paint: either nothing, or a solid color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Paint {
    /// Paint nothing (`none`).
    None,
    /// Paint with a solid color.
    Color(Color),
}

impl Paint {
    /// Access the color, if any.
    pub fn color(&self) -> Option<Color> {
        match self {
            Self::None => None,
            Self::Color(color) => Some(*color),
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl FromStr for Paint {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("none") {
            Ok(Self::None)
        } else {
            s.parse().map(Self::Color)
        }
    }
}

impl TryFrom<String> for Paint {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Paint> for String {
    fn from(paint: Paint) -> Self {
        match paint {
            Paint::None => "none".to_string(),
            Paint::Color(color) => color.to_string(),
        }
    }
}

/// Presentation attributes forwarded to drawing primitives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Presentation {
    /// Fill paint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Paint>,
    /// Stroke paint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Paint>,
    /// Stroke width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f32>,
    /// Overall opacity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    /// Fill opacity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f32>,
    /// Stroke opacity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_opacity: Option<f32>,
    /// Dash pattern in pixels, alternating on and off lengths.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_dasharray: Option<Vec<f32>>,
}

impl Presentation {
    /// Create an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Paint>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    /// Set the stroke paint.
    pub fn with_stroke(mut self, stroke: impl Into<Paint>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    /// Set the stroke width.
    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = Some(width);
        self
    }

    /// Set the overall opacity.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Check whether no attribute is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overlay `other` onto `self`; values present in `other` win.
    pub fn overlay(&self, other: &Self) -> Self {
        Self {
            fill: other.fill.or(self.fill),
            stroke: other.stroke.or(self.stroke),
            stroke_width: other.stroke_width.or(self.stroke_width),
            opacity: other.opacity.or(self.opacity),
            fill_opacity: other.fill_opacity.or(self.fill_opacity),
            stroke_opacity: other.stroke_opacity.or(self.stroke_opacity),
            stroke_dasharray: other
                .stroke_dasharray
                .clone()
                .or_else(|| self.stroke_dasharray.clone()),
        }
    }

    /// Effective fill color after opacity, or `default` when unset.
    pub(crate) fn resolved_fill(&self, default: Option<Color>) -> Option<Color> {
        let color = match self.fill {
            Some(paint) => paint.color(),
            None => default,
        }?;
        let factor = self.opacity.unwrap_or(1.0) * self.fill_opacity.unwrap_or(1.0);
        Some(color.with_alpha_factor(factor))
    }

    /// Effective stroke color after opacity, if any stroke is painted.
    pub(crate) fn resolved_stroke(&self) -> Option<Color> {
        let color = self.stroke?.color()?;
        let factor = self.opacity.unwrap_or(1.0) * self.stroke_opacity.unwrap_or(1.0);
        Some(color.with_alpha_factor(factor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_short_and_long_hex() {
        assert_eq!("#fff".parse::<Color>().expect("short hex"), Color::WHITE);
        assert_eq!("#000000".parse::<Color>().expect("long hex"), Color::BLACK);
        let translucent: Color = "#ff000080".parse().expect("hex with alpha");
        assert_eq!(translucent.r, 1.0);
        assert!((translucent.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!(matches!(
            "fff".parse::<Color>(),
            Err(ParseColorError::MissingHash(_))
        ));
        assert!(matches!(
            "#ffff0".parse::<Color>(),
            Err(ParseColorError::InvalidLength(_))
        ));
        for input in ["#ggg", "#+fff", "#12345é", "#12 456"] {
            assert!(matches!(
                input.parse::<Color>(),
                Err(ParseColorError::InvalidDigit(_))
            ));
        }
    }

    #[test]
    fn short_hex_expands_each_digit() {
        let color: Color = "#0a8f".parse().expect("short hex with alpha");
        assert_eq!(color.to_string(), "#00aa88");
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn display_roundtrips_hex() {
        let color: Color = "#3366cc".parse().expect("valid color");
        assert_eq!(color.to_string(), "#3366cc");
    }

    #[test]
    fn paint_none_parses() {
        assert_eq!("none".parse::<Paint>().expect("none"), Paint::None);
        assert_eq!(
            "#fff".parse::<Paint>().expect("color"),
            Paint::Color(Color::WHITE)
        );
    }

    #[test]
    fn overlay_prefers_overlay_values() {
        let base = Presentation::new()
            .with_fill(Color::WHITE)
            .with_stroke_width(2.0);
        let top = Presentation::new().with_fill(Color::BLACK);
        let merged = base.overlay(&top);
        assert_eq!(merged.fill, Some(Paint::Color(Color::BLACK)));
        assert_eq!(merged.stroke_width, Some(2.0));
    }

    #[test]
    fn resolved_fill_applies_opacity() {
        let attrs = Presentation {
            fill: Some(Paint::Color(Color::WHITE)),
            opacity: Some(0.5),
            fill_opacity: Some(0.5),
            ..Presentation::default()
        };
        let fill = attrs.resolved_fill(None).expect("fill present");
        assert!((fill.a - 0.25).abs() < 1e-6);
        assert!(
            Presentation::new()
                .with_fill(Paint::None)
                .resolved_fill(Some(Color::BLACK))
                .is_none()
        );
    }
}
