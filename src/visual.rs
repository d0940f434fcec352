//! Backend-agnostic visual tree produced by the scatter renderer.
//!
//! A [`Visual`] is either a grouping [`Layer`], a [`SymbolMark`], or a
//! [`CurveMark`]. Caller-supplied prebuilt visuals are re-targeted to each
//! mark with [`Visual::with_mark_props`] / [`Visual::with_line_props`], where
//! the supplied props override the visual's own values.

use crate::events::MarkHandlers;
use crate::geom::{ScreenPoint, ScreenRect};
use crate::point::Payload;
use crate::selector::LineType;
use crate::style::Presentation;
use crate::symbol::{SymbolGeometry, SymbolKind};

/// Props handed to a mark's drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkProps {
    /// Index of the point within the series.
    pub index: usize,
    /// Symbol center in pixels.
    pub center: ScreenPoint,
    /// Symbol area in square pixels.
    pub size: f32,
    /// Original data values.
    pub payload: Payload,
    /// Merged presentation attributes (point values over series values).
    pub attrs: Presentation,
}

impl MarkProps {
    /// Stable key for the mark.
    pub fn key(&self) -> String {
        format!("symbol-{}", self.index)
    }
}

/// Props handed to the connecting line's drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct LineProps {
    /// Vertices for a joint line; `None` leaves interpolation to the primitive.
    pub points: Option<Vec<ScreenPoint>>,
    /// Connector interpolation mode.
    pub line_type: LineType,
    /// Merged presentation attributes.
    pub attrs: Presentation,
}

/// A grouping container.
#[derive(Debug, Clone, Default)]
pub struct Layer {
    /// Class name used by styling and selection tooling.
    pub class_name: Option<String>,
    /// Stable key among siblings.
    pub key: Option<String>,
    /// Attributes applied to the group.
    pub attrs: Presentation,
    /// Pointer handlers attached to the group.
    pub handlers: Option<MarkHandlers>,
    /// Child visuals, in paint order.
    pub children: Vec<Visual>,
}

impl Layer {
    /// Create an empty layer with a class name.
    pub fn with_class(class_name: impl Into<String>) -> Self {
        Self {
            class_name: Some(class_name.into()),
            ..Self::default()
        }
    }

    /// Check whether the class list contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.class_name
            .as_deref()
            .is_some_and(|names| names.split_whitespace().any(|name| name == class))
    }
}

/// A symbol drawn at a point.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolMark {
    /// Built-in kind.
    pub kind: SymbolKind,
    /// Center in pixels.
    pub center: ScreenPoint,
    /// Area in square pixels.
    pub size: f32,
    /// Presentation attributes.
    pub attrs: Presentation,
}

impl SymbolMark {
    /// Build a symbol primitive from mark props.
    pub fn from_props(kind: SymbolKind, props: &MarkProps) -> Self {
        Self {
            kind,
            center: props.center,
            size: props.size,
            attrs: props.attrs.clone(),
        }
    }

    /// Screen-space outline.
    pub fn geometry(&self) -> SymbolGeometry {
        self.kind.geometry(self.center, self.size)
    }

    fn translated(&self, offset: ScreenPoint) -> Self {
        Self {
            center: offset_point(self.center, offset),
            ..self.clone()
        }
    }
}

/// A path through a list of vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveMark {
    /// Vertices; `None` draws nothing.
    pub points: Option<Vec<ScreenPoint>>,
    /// Presentation attributes.
    pub attrs: Presentation,
}

impl CurveMark {
    /// Build a curve primitive from line props.
    pub fn from_props(props: &LineProps) -> Self {
        Self {
            points: props.points.clone(),
            attrs: props.attrs.clone(),
        }
    }

    fn translated(&self, offset: ScreenPoint) -> Self {
        Self {
            points: self.points.as_ref().map(|points| {
                points
                    .iter()
                    .map(|point| offset_point(*point, offset))
                    .collect()
            }),
            attrs: self.attrs.clone(),
        }
    }
}

fn offset_point(point: ScreenPoint, offset: ScreenPoint) -> ScreenPoint {
    ScreenPoint::new(point.x + offset.x, point.y + offset.y)
}

/// Node of the rendered visual tree.
#[derive(Debug, Clone)]
pub enum Visual {
    /// Grouping container.
    Layer(Layer),
    /// Symbol primitive.
    Symbol(SymbolMark),
    /// Curve primitive.
    Curve(CurveMark),
}

impl Visual {
    /// Re-target this visual to a mark, with the props taking precedence.
    pub fn with_mark_props(&self, props: &MarkProps) -> Self {
        match self {
            Self::Layer(layer) => Self::Layer(Layer {
                attrs: layer.attrs.overlay(&props.attrs),
                key: Some(props.key()),
                children: layer
                    .children
                    .iter()
                    .map(|child| child.translated(props.center))
                    .collect(),
                ..layer.clone()
            }),
            Self::Symbol(symbol) => Self::Symbol(SymbolMark {
                kind: symbol.kind,
                center: props.center,
                size: props.size,
                attrs: symbol.attrs.overlay(&props.attrs),
            }),
            Self::Curve(curve) => Self::Curve(CurveMark {
                attrs: curve.attrs.overlay(&props.attrs),
                ..curve.translated(props.center)
            }),
        }
    }

    /// Shift all geometry by `offset`.
    ///
    /// Composite mark children are authored around the origin and placed at
    /// the mark center this way.
    pub fn translated(&self, offset: ScreenPoint) -> Self {
        match self {
            Self::Layer(layer) => Self::Layer(Layer {
                children: layer
                    .children
                    .iter()
                    .map(|child| child.translated(offset))
                    .collect(),
                ..layer.clone()
            }),
            Self::Symbol(symbol) => Self::Symbol(symbol.translated(offset)),
            Self::Curve(curve) => Self::Curve(curve.translated(offset)),
        }
    }

    /// Re-target this visual to the connecting line, with the props taking precedence.
    pub fn with_line_props(&self, props: &LineProps) -> Self {
        match self {
            Self::Layer(layer) => Self::Layer(Layer {
                attrs: layer.attrs.overlay(&props.attrs),
                ..layer.clone()
            }),
            Self::Symbol(symbol) => Self::Symbol(SymbolMark {
                attrs: symbol.attrs.overlay(&props.attrs),
                ..symbol.clone()
            }),
            Self::Curve(curve) => Self::Curve(CurveMark {
                points: props.points.clone(),
                attrs: curve.attrs.overlay(&props.attrs),
            }),
        }
    }

    /// The visual's own presentation attributes.
    pub fn presentation(&self) -> &Presentation {
        match self {
            Self::Layer(layer) => &layer.attrs,
            Self::Symbol(symbol) => &symbol.attrs,
            Self::Curve(curve) => &curve.attrs,
        }
    }

    /// Access the layer, if this visual is one.
    pub fn as_layer(&self) -> Option<&Layer> {
        match self {
            Self::Layer(layer) => Some(layer),
            _ => None,
        }
    }

    /// Access the symbol, if this visual is one.
    pub fn as_symbol(&self) -> Option<&SymbolMark> {
        match self {
            Self::Symbol(symbol) => Some(symbol),
            _ => None,
        }
    }

    /// Access the curve, if this visual is one.
    pub fn as_curve(&self) -> Option<&CurveMark> {
        match self {
            Self::Curve(curve) => Some(curve),
            _ => None,
        }
    }

    /// Children of a layer, empty for primitives.
    pub fn children(&self) -> &[Visual] {
        match self {
            Self::Layer(layer) => &layer.children,
            _ => &[],
        }
    }

    /// Find the first descendant layer (self included) carrying `class`.
    pub fn find_layer(&self, class: &str) -> Option<&Layer> {
        if let Self::Layer(layer) = self {
            if layer.has_class(class) {
                return Some(layer);
            }
        }
        self.children()
            .iter()
            .find_map(|child| child.find_layer(class))
    }

    /// Screen-space bounds of everything drawn by this visual.
    pub fn bounds(&self) -> Option<ScreenRect> {
        match self {
            Self::Layer(layer) => layer
                .children
                .iter()
                .filter_map(Visual::bounds)
                .reduce(ScreenRect::union),
            Self::Symbol(symbol) => symbol.geometry().bounds(),
            Self::Curve(curve) => curve
                .points
                .as_ref()
                .and_then(|points| ScreenRect::bounding(points.iter().copied())),
        }
    }
}

impl From<Layer> for Visual {
    fn from(layer: Layer) -> Self {
        Self::Layer(layer)
    }
}

impl From<SymbolMark> for Visual {
    fn from(symbol: SymbolMark) -> Self {
        Self::Symbol(symbol)
    }
}

impl From<CurveMark> for Visual {
    fn from(curve: CurveMark) -> Self {
        Self::Curve(curve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Color, Paint};

    fn props() -> MarkProps {
        MarkProps {
            index: 2,
            center: ScreenPoint::new(30.0, 40.0),
            size: 64.0,
            payload: Payload::new(1.0, 2.0),
            attrs: Presentation::new().with_fill(Color::BLACK),
        }
    }

    #[test]
    fn prebuilt_symbol_takes_mark_geometry_and_attrs() {
        let prebuilt = Visual::Symbol(SymbolMark {
            kind: SymbolKind::Star,
            center: ScreenPoint::new(0.0, 0.0),
            size: 10.0,
            attrs: Presentation::new()
                .with_fill(Color::WHITE)
                .with_stroke_width(3.0),
        });
        let cloned = prebuilt.with_mark_props(&props());
        let symbol = cloned.as_symbol().expect("still a symbol");
        assert_eq!(symbol.kind, SymbolKind::Star);
        assert_eq!(symbol.center, ScreenPoint::new(30.0, 40.0));
        assert_eq!(symbol.size, 64.0);
        assert_eq!(symbol.attrs.fill, Some(Paint::Color(Color::BLACK)));
        assert_eq!(symbol.attrs.stroke_width, Some(3.0));
    }

    #[test]
    fn prebuilt_curve_takes_line_points() {
        let prebuilt = Visual::Curve(CurveMark {
            points: None,
            attrs: Presentation::new().with_stroke_width(4.0),
        });
        let line = LineProps {
            points: Some(vec![ScreenPoint::new(1.0, 1.0), ScreenPoint::new(2.0, 2.0)]),
            line_type: LineType::Joint,
            attrs: Presentation::new().with_fill(Paint::None),
        };
        let curve = prebuilt.with_line_props(&line);
        let curve = curve.as_curve().expect("still a curve");
        assert_eq!(curve.points.as_ref().map(Vec::len), Some(2));
        assert_eq!(curve.attrs.stroke_width, Some(4.0));
        assert_eq!(curve.attrs.fill, Some(Paint::None));
    }

    #[test]
    fn prebuilt_curve_mark_is_placed_at_center() {
        let prebuilt = Visual::Curve(CurveMark {
            points: Some(vec![ScreenPoint::new(-2.0, 0.0), ScreenPoint::new(2.0, 0.0)]),
            attrs: Presentation::default(),
        });
        let cloned = prebuilt.with_mark_props(&props());
        let curve = cloned.as_curve().expect("still a curve");
        assert_eq!(
            curve.points,
            Some(vec![ScreenPoint::new(28.0, 40.0), ScreenPoint::new(32.0, 40.0)])
        );
        assert_eq!(curve.attrs.fill, Some(Paint::Color(Color::BLACK)));
    }

    #[test]
    fn layer_bounds_union_children() {
        let layer = Visual::Layer(Layer {
            children: vec![
                Visual::Symbol(SymbolMark::from_props(SymbolKind::Square, &props())),
                Visual::Curve(CurveMark {
                    points: Some(vec![ScreenPoint::new(0.0, 0.0)]),
                    attrs: Presentation::default(),
                }),
            ],
            ..Layer::default()
        });
        let bounds = layer.bounds().expect("children have bounds");
        assert_eq!(bounds.min, ScreenPoint::new(0.0, 0.0));
        assert!((bounds.max.x - 34.0).abs() < 1e-4);
        assert!((bounds.max.y - 44.0).abs() < 1e-4);
    }

    #[test]
    fn find_layer_matches_class_tokens() {
        let tree = Visual::Layer(Layer {
            class_name: Some("scatter custom".into()),
            children: vec![Visual::Layer(Layer::with_class("scatter-symbols"))],
            ..Layer::default()
        });
        assert!(tree.find_layer("custom").is_some());
        assert!(tree.find_layer("scatter-symbols").is_some());
        assert!(tree.find_layer("scatter-line").is_none());
    }
}
