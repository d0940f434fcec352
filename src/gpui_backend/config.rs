use crate::style::Color;

/// Configuration for the GPUI scatter view.
#[derive(Debug, Clone)]
pub struct ScatterViewConfig {
    /// Extra pixels around each mark that still count as a hit.
    pub hit_padding_px: f32,
    /// Background painted behind the scatter.
    pub background: Color,
}

impl Default for ScatterViewConfig {
    fn default() -> Self {
        Self {
            hit_padding_px: 2.0,
            background: Color::new(0.0, 0.0, 0.0, 0.0),
        }
    }
}
