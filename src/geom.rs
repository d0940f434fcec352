//! Geometric primitives used by the scatter pipeline.
//!
//! All coordinates are screen-space pixels. Projection from data space
//! happens before points reach this crate.

/// A point in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    /// X value in screen pixels.
    pub x: f32,
    /// Y value in screen pixels.
    pub y: f32,
}

impl ScreenPoint {
    /// Create a new screen point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Check whether both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A rectangle in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    /// Top-left corner.
    pub min: ScreenPoint,
    /// Bottom-right corner.
    pub max: ScreenPoint,
}

impl ScreenRect {
    /// Create a new screen rectangle from corners.
    pub const fn new(min: ScreenPoint, max: ScreenPoint) -> Self {
        Self { min, max }
    }

    /// Smallest rectangle containing every finite point, if any.
    pub fn bounding(points: impl IntoIterator<Item = ScreenPoint>) -> Option<Self> {
        let mut rect: Option<Self> = None;
        for point in points.into_iter().filter(ScreenPoint::is_finite) {
            let single = Self::new(point, point);
            rect = Some(match rect {
                None => single,
                Some(existing) => existing.union(single),
            });
        }
        rect
    }

    /// Rectangle width in pixels.
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Rectangle height in pixels.
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Check whether the rectangle has positive area.
    pub fn is_valid(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }

    /// Check whether the point lies inside the rectangle (edges included).
    pub fn contains(&self, point: ScreenPoint) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Smallest rectangle covering both rectangles.
    pub fn union(self, other: Self) -> Self {
        Self::new(
            ScreenPoint::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            ScreenPoint::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        )
    }

    /// Grow the rectangle by `amount` pixels on every side.
    pub fn inflate(self, amount: f32) -> Self {
        Self::new(
            ScreenPoint::new(self.min.x - amount, self.min.y - amount),
            ScreenPoint::new(self.max.x + amount, self.max.y + amount),
        )
    }
}
