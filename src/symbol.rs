//! Built-in symbol kinds and their outlines.
//!
//! Sizes are areas in square pixels, so a `size` of 64 yields symbols of
//! roughly eight pixels across regardless of kind.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseSymbolError;
use crate::geom::{ScreenPoint, ScreenRect};

/// Built-in mark kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    /// Filled circle.
    #[default]
    Circle,
    /// Plus-shaped cross.
    Cross,
    /// Rhombus, taller than wide.
    Diamond,
    /// Axis-aligned square.
    Square,
    /// Five-pointed star.
    Star,
    /// Upward triangle.
    Triangle,
    /// Three-armed Y shape.
    Wye,
}

impl SymbolKind {
    /// Every built-in kind, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Circle,
        Self::Cross,
        Self::Diamond,
        Self::Square,
        Self::Star,
        Self::Triangle,
        Self::Wye,
    ];

    /// Lowercase name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Cross => "cross",
            Self::Diamond => "diamond",
            Self::Square => "square",
            Self::Star => "star",
            Self::Triangle => "triangle",
            Self::Wye => "wye",
        }
    }

    /// Compute the outline of this symbol centered at `center` with the given area.
    pub fn geometry(self, center: ScreenPoint, size: f32) -> SymbolGeometry {
        let size = f64::from(size);
        if self == Self::Circle {
            let radius = (size / PI).sqrt();
            return SymbolGeometry::Circle {
                center,
                radius: radius as f32,
            };
        }
        let local = match self {
            Self::Circle => Vec::new(),
            Self::Cross => cross(size),
            Self::Diamond => diamond(size),
            Self::Square => square(size),
            Self::Star => star(size),
            Self::Triangle => triangle(size),
            Self::Wye => wye(size),
        };
        SymbolGeometry::Polygon(
            local
                .into_iter()
                .map(|(x, y)| ScreenPoint::new(center.x + x as f32, center.y + y as f32))
                .collect(),
        )
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SymbolKind {
    type Err = ParseSymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSymbolError(s.to_string()))
    }
}

/// Screen-space outline of a symbol.
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolGeometry {
    /// A circle.
    Circle {
        /// Circle center.
        center: ScreenPoint,
        /// Circle radius in pixels.
        radius: f32,
    },
    /// A closed polygon.
    Polygon(Vec<ScreenPoint>),
}

impl SymbolGeometry {
    /// Bounding rectangle of the outline, if it has finite coordinates.
    pub fn bounds(&self) -> Option<ScreenRect> {
        match self {
            Self::Circle { center, radius } => {
                if !center.is_finite() || !radius.is_finite() {
                    return None;
                }
                Some(ScreenRect::new(*center, *center).inflate(*radius))
            }
            Self::Polygon(points) => ScreenRect::bounding(points.iter().copied()),
        }
    }
}

fn cross(size: f64) -> Vec<(f64, f64)> {
    let r = (size / 5.0).sqrt() / 2.0;
    vec![
        (-3.0 * r, -r),
        (-r, -r),
        (-r, -3.0 * r),
        (r, -3.0 * r),
        (r, -r),
        (3.0 * r, -r),
        (3.0 * r, r),
        (r, r),
        (r, 3.0 * r),
        (-r, 3.0 * r),
        (-r, r),
        (-3.0 * r, r),
    ]
}

fn diamond(size: f64) -> Vec<(f64, f64)> {
    let tan30 = (1.0_f64 / 3.0).sqrt();
    let y = (size / (tan30 * 2.0)).sqrt();
    let x = y * tan30;
    vec![(0.0, -y), (x, 0.0), (0.0, y), (-x, 0.0)]
}

fn square(size: f64) -> Vec<(f64, f64)> {
    let half = size.sqrt() / 2.0;
    vec![(-half, -half), (half, -half), (half, half), (-half, half)]
}

fn star(size: f64) -> Vec<(f64, f64)> {
    const KA: f64 = 0.890_813_091_529_285_2;
    let kr = (PI / 10.0).sin() / (7.0 * PI / 10.0).sin();
    let kx = (2.0 * PI / 10.0).sin() * kr;
    let ky = -(2.0 * PI / 10.0).cos() * kr;

    let r = (size * KA).sqrt();
    let x = kx * r;
    let y = ky * r;
    let mut out = vec![(0.0, -r), (x, y)];
    for i in 1..5 {
        let a = 2.0 * PI * f64::from(i) / 5.0;
        let (s, c) = a.sin_cos();
        out.push((s * r, -c * r));
        out.push((c * x - s * y, s * x + c * y));
    }
    out
}

fn triangle(size: f64) -> Vec<(f64, f64)> {
    let sqrt3 = 3.0_f64.sqrt();
    let y = -(size / (sqrt3 * 3.0)).sqrt();
    vec![(0.0, y * 2.0), (-sqrt3 * y, -y), (sqrt3 * y, -y)]
}

fn wye(size: f64) -> Vec<(f64, f64)> {
    let c = -0.5;
    let s = 3.0_f64.sqrt() / 2.0;
    let k = 1.0 / 12.0_f64.sqrt();
    let a = (k / 2.0 + 1.0) * 3.0;

    let r = (size / a).sqrt();
    let (x0, y0) = (r / 2.0, r * k);
    let (x1, y1) = (x0, r * k + r);
    let (x2, y2) = (-x1, y1);
    vec![
        (x0, y0),
        (x1, y1),
        (x2, y2),
        (c * x0 - s * y0, s * x0 + c * y0),
        (c * x1 - s * y1, s * x1 + c * y1),
        (c * x2 - s * y2, s * x2 + c * y2),
        (c * x0 + s * y0, c * y0 - s * x0),
        (c * x1 + s * y1, c * y1 - s * x1),
        (c * x2 + s * y2, c * y2 - s * x2),
    ]
}
