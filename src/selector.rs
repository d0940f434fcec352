//! Mark and line selectors.
//!
//! A selector says how a mark (or the connecting line) gets drawn: as a
//! built-in primitive, by re-targeting a prebuilt visual, or by calling a
//! render function with the per-item props.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::style::Presentation;
use crate::symbol::SymbolKind;
use crate::visual::{CurveMark, LineProps, MarkProps, SymbolMark, Visual};

/// Render function producing a mark from its props.
pub type MarkRenderer = Arc<dyn Fn(&MarkProps) -> Visual + Send + Sync>;

/// Render function producing the connecting line from its props.
pub type LineRenderer = Arc<dyn Fn(&LineProps) -> Visual + Send + Sync>;

/// How each mark is drawn.
#[derive(Clone)]
pub enum ShapeSelector {
    /// Draw a built-in symbol.
    Named(SymbolKind),
    /// Re-target a prebuilt visual to every mark.
    Prebuilt(Visual),
    /// Call a render function per mark.
    Render(MarkRenderer),
}

impl ShapeSelector {
    /// Create a selector from a render function.
    pub fn render(f: impl Fn(&MarkProps) -> Visual + Send + Sync + 'static) -> Self {
        Self::Render(Arc::new(f))
    }

    /// Produce the visual for one mark.
    pub fn resolve(&self, props: &MarkProps) -> Visual {
        match self {
            Self::Named(kind) => Visual::Symbol(SymbolMark::from_props(*kind, props)),
            Self::Prebuilt(visual) => visual.with_mark_props(props),
            Self::Render(render) => render(props),
        }
    }

    /// The built-in kind, when this selector names one.
    pub fn named_kind(&self) -> Option<SymbolKind> {
        match self {
            Self::Named(kind) => Some(*kind),
            _ => None,
        }
    }
}

impl Default for ShapeSelector {
    fn default() -> Self {
        Self::Named(SymbolKind::Circle)
    }
}

impl From<SymbolKind> for ShapeSelector {
    fn from(kind: SymbolKind) -> Self {
        Self::Named(kind)
    }
}

impl fmt::Debug for ShapeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(kind) => f.debug_tuple("Named").field(kind).finish(),
            Self::Prebuilt(visual) => f.debug_tuple("Prebuilt").field(visual).finish(),
            Self::Render(_) => f.write_str("Render(..)"),
        }
    }
}

/// How the mark at the active index is drawn.
#[derive(Debug, Clone)]
pub enum ActiveShape {
    /// Draw with a separate shape selector.
    Shape(ShapeSelector),
    /// Draw the default shape with these attributes layered on top.
    Styled(Presentation),
}

impl ActiveShape {
    /// Produce the visual for the active mark, falling back to `default` for styling.
    pub fn resolve(&self, default: &ShapeSelector, props: &MarkProps) -> Visual {
        match self {
            Self::Shape(selector) => selector.resolve(props),
            Self::Styled(attrs) => {
                let styled = MarkProps {
                    attrs: props.attrs.overlay(attrs),
                    ..props.clone()
                };
                default.resolve(&styled)
            }
        }
    }
}

impl From<ShapeSelector> for ActiveShape {
    fn from(selector: ShapeSelector) -> Self {
        Self::Shape(selector)
    }
}

impl From<SymbolKind> for ActiveShape {
    fn from(kind: SymbolKind) -> Self {
        Self::Shape(ShapeSelector::Named(kind))
    }
}

/// Whether and how the connecting line is drawn.
#[derive(Clone, Default)]
pub enum LineSelector {
    /// No line.
    #[default]
    Hidden,
    /// Draw the default curve.
    Default,
    /// Draw the default curve with these attributes.
    Styled(Presentation),
    /// Re-target a prebuilt visual.
    Prebuilt(Visual),
    /// Call a render function.
    Render(LineRenderer),
}

impl LineSelector {
    /// Create a selector from a render function.
    pub fn render(f: impl Fn(&LineProps) -> Visual + Send + Sync + 'static) -> Self {
        Self::Render(Arc::new(f))
    }

    /// Check whether a line should be drawn.
    pub fn is_drawn(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Attributes the line itself contributes on top of the series attributes.
    pub fn own_attrs(&self) -> Presentation {
        match self {
            Self::Styled(attrs) => attrs.clone(),
            Self::Prebuilt(visual) => visual.presentation().clone(),
            Self::Hidden | Self::Default | Self::Render(_) => Presentation::default(),
        }
    }

    /// Produce the line visual, or `None` when hidden.
    pub fn resolve(&self, props: &LineProps) -> Option<Visual> {
        match self {
            Self::Hidden => None,
            Self::Default | Self::Styled(_) => Some(Visual::Curve(CurveMark::from_props(props))),
            Self::Prebuilt(visual) => Some(visual.with_line_props(props)),
            Self::Render(render) => Some(render(props)),
        }
    }
}

impl From<bool> for LineSelector {
    fn from(enabled: bool) -> Self {
        if enabled { Self::Default } else { Self::Hidden }
    }
}

impl fmt::Debug for LineSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hidden => f.write_str("Hidden"),
            Self::Default => f.write_str("Default"),
            Self::Styled(attrs) => f.debug_tuple("Styled").field(attrs).finish(),
            Self::Prebuilt(visual) => f.debug_tuple("Prebuilt").field(visual).finish(),
            Self::Render(_) => f.write_str("Render(..)"),
        }
    }
}

/// Connector interpolation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineType {
    /// Fitted curve; interpolation belongs to the curve primitive.
    Fitting,
    /// Straight segments joining the points in input order.
    #[default]
    Joint,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::ScreenPoint;
    use crate::point::Payload;
    use crate::style::{Color, Paint};

    fn props() -> MarkProps {
        MarkProps {
            index: 0,
            center: ScreenPoint::new(1.0, 2.0),
            size: 64.0,
            payload: Payload::new(0.0, 0.0),
            attrs: Presentation::new().with_fill(Color::WHITE),
        }
    }

    #[test]
    fn named_builds_symbol() {
        let visual = ShapeSelector::Named(SymbolKind::Diamond).resolve(&props());
        let symbol = visual.as_symbol().expect("symbol");
        assert_eq!(symbol.kind, SymbolKind::Diamond);
        assert_eq!(symbol.center, ScreenPoint::new(1.0, 2.0));
    }

    #[test]
    fn render_function_receives_props() {
        let selector = ShapeSelector::render(|props| {
            Visual::Symbol(SymbolMark {
                kind: SymbolKind::Wye,
                center: ScreenPoint::new(props.center.x * 2.0, props.center.y),
                size: props.size,
                attrs: props.attrs.clone(),
            })
        });
        let visual = selector.resolve(&props());
        let symbol = visual.as_symbol().expect("symbol");
        assert_eq!(symbol.kind, SymbolKind::Wye);
        assert_eq!(symbol.center.x, 2.0);
    }

    #[test]
    fn styled_active_layers_attrs_on_default() {
        let active = ActiveShape::Styled(Presentation::new().with_fill(Color::BLACK));
        let visual = active.resolve(&ShapeSelector::Named(SymbolKind::Square), &props());
        let symbol = visual.as_symbol().expect("symbol");
        assert_eq!(symbol.kind, SymbolKind::Square);
        assert_eq!(symbol.attrs.fill, Some(Paint::Color(Color::BLACK)));
    }

    #[test]
    fn line_selector_from_bool() {
        assert!(!LineSelector::from(false).is_drawn());
        assert!(LineSelector::from(true).is_drawn());
        let props = LineProps {
            points: None,
            line_type: LineType::Fitting,
            attrs: Presentation::default(),
        };
        assert!(LineSelector::Hidden.resolve(&props).is_none());
        assert!(LineSelector::Default.resolve(&props).is_some());
    }

    #[test]
    fn line_type_names() {
        let parsed: LineType = serde_json::from_str("\"fitting\"").expect("known line type");
        assert_eq!(parsed, LineType::Fitting);
        assert_eq!(LineType::default(), LineType::Joint);
    }
}
