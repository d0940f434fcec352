//! Scatter point records.

use serde::{Deserialize, Serialize};

use crate::geom::ScreenPoint;
use crate::style::Presentation;

/// Third data dimension, either numeric or categorical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ZValue {
    /// Numeric value.
    Number(f64),
    /// Category label.
    Category(String),
}

/// Original data values behind a scatter point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    /// X value in data coordinates.
    pub x: f64,
    /// Y value in data coordinates.
    pub y: f64,
    /// Optional third dimension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<ZValue>,
}

impl Payload {
    /// Create a two-dimensional payload.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    /// Attach a third dimension.
    pub fn with_z(mut self, z: ZValue) -> Self {
        self.z = Some(z);
        self
    }
}

/// A scatter point positioned in screen space.
///
/// Points arrive already projected: `cx`/`cy` are pixels and `size` is the
/// symbol area in square pixels. The component never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    /// Center X in pixels.
    pub cx: f32,
    /// Center Y in pixels.
    pub cy: f32,
    /// Symbol area in square pixels.
    #[serde(default = "default_size")]
    pub size: f32,
    /// Original data values.
    #[serde(default)]
    pub payload: Payload,
    /// Per-point presentation attributes, overriding the series attributes.
    #[serde(flatten)]
    pub attrs: Presentation,
}

/// Symbol area used when a point carries no size.
pub const DEFAULT_SYMBOL_SIZE: f32 = 64.0;

fn default_size() -> f32 {
    DEFAULT_SYMBOL_SIZE
}

impl ScatterPoint {
    /// Create a point at the given pixel position with the default size.
    pub fn new(cx: f32, cy: f32, payload: Payload) -> Self {
        Self {
            cx,
            cy,
            size: DEFAULT_SYMBOL_SIZE,
            payload,
            attrs: Presentation::default(),
        }
    }

    /// Replace the symbol area.
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Replace the per-point presentation attributes.
    pub fn with_attrs(mut self, attrs: Presentation) -> Self {
        self.attrs = attrs;
        self
    }

    /// Screen-space center.
    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new(self.cx, self.cy)
    }
}
