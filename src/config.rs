//! Declarative scatter configuration.
//!
//! [`ScatterConfig`] mirrors the component's property surface so that a series
//! can be described in JSON or TOML. Render overrides (prebuilt visuals and
//! render functions) and callbacks are code-only and are attached to the
//! resulting [`Scatter`] afterwards.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::legend::LegendType;
use crate::point::ScatterPoint;
use crate::scatter::Scatter;
use crate::selector::{ActiveShape, LineSelector, LineType};
use crate::style::{Color, Paint, Presentation};
use crate::symbol::SymbolKind;

/// Line setting: a flag, or the attributes of a styled line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LineConfig {
    /// Draw (`true`) or hide (`false`) the default line.
    Enabled(bool),
    /// Draw the default line with these attributes.
    Styled(Presentation),
}

impl Default for LineConfig {
    fn default() -> Self {
        Self::Enabled(false)
    }
}

impl From<LineConfig> for LineSelector {
    fn from(config: LineConfig) -> Self {
        match config {
            LineConfig::Enabled(enabled) => enabled.into(),
            LineConfig::Styled(attrs) => Self::Styled(attrs),
        }
    }
}

/// Active mark setting: a symbol name, or attributes layered on the default shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActiveShapeConfig {
    /// Draw the active mark as this symbol.
    Named(SymbolKind),
    /// Draw the default shape with these attributes.
    Styled(Presentation),
}

impl From<ActiveShapeConfig> for ActiveShape {
    fn from(config: ActiveShapeConfig) -> Self {
        match config {
            ActiveShapeConfig::Named(kind) => kind.into(),
            ActiveShapeConfig::Styled(attrs) => Self::Styled(attrs),
        }
    }
}

/// Serializable scatter description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScatterConfig {
    /// Pre-positioned points.
    pub points: Vec<ScatterPoint>,
    /// Default mark kind.
    pub shape: SymbolKind,
    /// Active mark override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_shape: Option<ActiveShapeConfig>,
    /// Highlighted index; negative means none.
    pub active_index: i64,
    /// Connecting line.
    pub line: LineConfig,
    /// Connector interpolation mode.
    pub line_type: LineType,
    /// Legend icon type.
    pub legend_type: LegendType,
    /// X axis id.
    pub x_axis_id: u32,
    /// Y axis id.
    pub y_axis_id: u32,
    /// Z axis id.
    pub z_axis_id: u32,
    /// Extra class for the outer group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Series presentation attributes.
    #[serde(flatten)]
    pub attrs: Presentation,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            shape: SymbolKind::Circle,
            active_shape: None,
            active_index: -1,
            line: LineConfig::default(),
            line_type: LineType::Joint,
            legend_type: LegendType::Scatter,
            x_axis_id: 0,
            y_axis_id: 0,
            z_axis_id: 0,
            class_name: None,
            attrs: Presentation {
                fill: Some(Paint::Color(Color::WHITE)),
                ..Presentation::default()
            },
        }
    }
}

impl ScatterConfig {
    /// Parse a configuration from JSON.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let config = serde_json::from_str::<Self>(input)?.with_default_fill();
        tracing::debug!(points = config.points.len(), "loaded scatter config from JSON");
        Ok(config)
    }

    /// Parse a configuration from TOML.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str::<Self>(input)?.with_default_fill();
        tracing::debug!(points = config.points.len(), "loaded scatter config from TOML");
        Ok(config)
    }

    /// Flattened attributes bypass struct defaults, so an absent fill is restored here.
    fn with_default_fill(mut self) -> Self {
        if self.attrs.fill.is_none() {
            self.attrs.fill = Some(Paint::Color(Color::WHITE));
        }
        self
    }

    /// The highlighted index, if non-negative.
    pub fn active_index(&self) -> Option<usize> {
        usize::try_from(self.active_index).ok()
    }

    /// Build the component described by this configuration.
    pub fn into_scatter(self) -> Scatter {
        let active_index = self.active_index();
        let mut scatter = Scatter::new(self.points)
            .with_attrs(self.attrs)
            .with_shape(self.shape)
            .with_active_index(active_index)
            .with_line(self.line)
            .with_line_type(self.line_type)
            .with_legend_type(self.legend_type)
            .with_axis_ids(self.x_axis_id, self.y_axis_id, self.z_axis_id);
        if let Some(active_shape) = self.active_shape {
            scatter = scatter.with_active_shape(active_shape);
        }
        if let Some(class_name) = self.class_name {
            scatter = scatter.with_class_name(class_name);
        }
        scatter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scatter::LINE_CLASS;

    #[test]
    fn defaults_match_component_defaults() {
        let config = ScatterConfig::from_json_str("{}").expect("empty object is valid");
        assert_eq!(config.shape, SymbolKind::Circle);
        assert_eq!(config.line_type, LineType::Joint);
        assert_eq!(config.legend_type, LegendType::Scatter);
        assert_eq!(config.attrs.fill, Some(Paint::Color(Color::WHITE)));
        assert_eq!(config.active_index(), None);
        assert!(config.into_scatter().render().is_none());
    }

    #[test]
    fn json_with_styled_line() {
        let config = ScatterConfig::from_json_str(
            r##"{
                "shape": "star",
                "activeIndex": 1,
                "activeShape": "diamond",
                "line": {"strokeWidth": 2},
                "fill": "#336699",
                "points": [
                    {"cx": 0, "cy": 0, "payload": {"x": 0, "y": 0}},
                    {"cx": 5, "cy": 5, "payload": {"x": 1, "y": 1}}
                ]
            }"##,
        )
        .expect("valid config");
        assert_eq!(config.active_index(), Some(1));
        let scatter = config.into_scatter();
        let line = scatter.line_props();
        assert_eq!(line.attrs.stroke_width, Some(2.0));
        assert_eq!(line.attrs.stroke, scatter.attrs().fill);

        let tree = scatter.render().expect("renders");
        assert!(tree.find_layer(LINE_CLASS).is_some());
        let kinds: Vec<_> = scatter
            .render_symbols()
            .iter()
            .map(|mark| mark.children()[0].as_symbol().map(|s| s.kind))
            .collect();
        assert_eq!(kinds, vec![Some(SymbolKind::Star), Some(SymbolKind::Diamond)]);
    }

    #[test]
    fn toml_with_flag_line() {
        let config = ScatterConfig::from_toml_str(
            r##"
            line = true
            lineType = "fitting"
            legendType = "square"
            stroke = "#000"

            [[points]]
            cx = 1.0
            cy = 2.0
            size = 36.0
            payload = { x = 1.0, y = 2.0, z = "a" }
            "##,
        )
        .expect("valid toml");
        assert_eq!(config.line, LineConfig::Enabled(true));
        assert_eq!(config.legend_type, LegendType::Symbol(SymbolKind::Square));
        assert_eq!(config.attrs.stroke, Some(Paint::Color(Color::BLACK)));
        assert_eq!(config.points[0].size, 36.0);
        let scatter = config.into_scatter();
        assert!(scatter.line().is_drawn());
        assert_eq!(scatter.line_type(), LineType::Fitting);
    }

    #[test]
    fn bad_color_is_reported() {
        let err = ScatterConfig::from_json_str(r#"{"fill": "white"}"#).expect_err("bad color");
        assert!(matches!(err, ConfigError::JsonParse(_)));
    }
}
