//! Scatter series component.
//!
//! A [`Scatter`] turns pre-positioned points into a [`Visual`] tree: an
//! optional connecting line followed by one interactive mark per point.

use std::sync::Arc;

use crate::events::{MarkHandlers, PointerEvent, ScatterHandlers};
use crate::legend::{LegendEntry, LegendType};
use crate::point::ScatterPoint;
use crate::selector::{ActiveShape, LineSelector, LineType, ShapeSelector};
use crate::style::{Color, Paint, Presentation};
use crate::symbol::SymbolKind;
use crate::visual::{Layer, LineProps, MarkProps, Visual};

/// Class of the outer scatter group.
pub const SCATTER_CLASS: &str = "scatter";
/// Class of the group holding every mark.
pub const SYMBOLS_CLASS: &str = "scatter-symbols";
/// Class of each interactive mark container.
pub const SYMBOL_CLASS: &str = "scatter-symbol";
/// Class of the connecting line container.
pub const LINE_CLASS: &str = "scatter-line";

/// Scatter series with its points, styling and interaction callbacks.
#[derive(Debug, Clone)]
pub struct Scatter {
    points: Vec<ScatterPoint>,
    attrs: Presentation,
    shape: ShapeSelector,
    active_shape: Option<ActiveShape>,
    active_index: Option<usize>,
    line: LineSelector,
    line_type: LineType,
    legend_type: LegendType,
    x_axis_id: u32,
    y_axis_id: u32,
    z_axis_id: u32,
    class_name: Option<String>,
    handlers: ScatterHandlers,
}

impl Default for Scatter {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            attrs: Presentation::new().with_fill(Color::WHITE),
            shape: ShapeSelector::default(),
            active_shape: None,
            active_index: None,
            line: LineSelector::Hidden,
            line_type: LineType::Joint,
            legend_type: LegendType::Scatter,
            x_axis_id: 0,
            y_axis_id: 0,
            z_axis_id: 0,
            class_name: None,
            handlers: ScatterHandlers::default(),
        }
    }
}

impl Scatter {
    /// Create a scatter over the given points with default styling.
    pub fn new(points: impl IntoIterator<Item = ScatterPoint>) -> Self {
        Self {
            points: points.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Replace the points.
    pub fn with_points(mut self, points: impl IntoIterator<Item = ScatterPoint>) -> Self {
        self.points = points.into_iter().collect();
        self
    }

    /// Replace the series presentation attributes.
    ///
    /// These replace the defaults wholesale; include a fill to keep one.
    pub fn with_attrs(mut self, attrs: Presentation) -> Self {
        self.attrs = attrs;
        self
    }

    /// Replace the default mark selector.
    pub fn with_shape(mut self, shape: impl Into<ShapeSelector>) -> Self {
        self.shape = shape.into();
        self
    }

    /// Set the selector used for the mark at the active index.
    pub fn with_active_shape(mut self, active_shape: impl Into<ActiveShape>) -> Self {
        self.active_shape = Some(active_shape.into());
        self
    }

    /// Set the highlighted point index.
    pub fn with_active_index(mut self, index: Option<usize>) -> Self {
        self.active_index = index;
        self
    }

    /// Set whether and how the connecting line is drawn.
    pub fn with_line(mut self, line: impl Into<LineSelector>) -> Self {
        self.line = line.into();
        self
    }

    /// Set the connector interpolation mode.
    pub fn with_line_type(mut self, line_type: LineType) -> Self {
        self.line_type = line_type;
        self
    }

    /// Set the legend icon type.
    pub fn with_legend_type(mut self, legend_type: LegendType) -> Self {
        self.legend_type = legend_type;
        self
    }

    /// Set the X, Y and Z axis ids this series binds to.
    pub fn with_axis_ids(mut self, x: u32, y: u32, z: u32) -> Self {
        self.x_axis_id = x;
        self.y_axis_id = y;
        self.z_axis_id = z;
        self
    }

    /// Add a custom class to the outer group.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Replace every interaction callback.
    pub fn with_handlers(mut self, handlers: ScatterHandlers) -> Self {
        self.handlers = handlers;
        self
    }

    /// Set the pointer-enter callback.
    pub fn on_mouse_enter(
        mut self,
        f: impl Fn(&ScatterPoint, usize, &PointerEvent) + Send + Sync + 'static,
    ) -> Self {
        self.handlers.on_mouse_enter = Arc::new(f);
        self
    }

    /// Set the pointer-leave callback.
    pub fn on_mouse_leave(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.handlers.on_mouse_leave = Arc::new(f);
        self
    }

    /// Set the click callback.
    pub fn on_click(
        mut self,
        f: impl Fn(&ScatterPoint, usize, &PointerEvent) + Send + Sync + 'static,
    ) -> Self {
        self.handlers.on_click = Arc::new(f);
        self
    }

    /// Access the points.
    pub fn points(&self) -> &[ScatterPoint] {
        &self.points
    }

    /// Access the series presentation attributes.
    pub fn attrs(&self) -> &Presentation {
        &self.attrs
    }

    /// Access the default mark selector.
    pub fn shape(&self) -> &ShapeSelector {
        &self.shape
    }

    /// Access the highlighted point index.
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    /// Update the highlighted point index in place.
    pub fn set_active_index(&mut self, index: Option<usize>) {
        self.active_index = index;
    }

    /// Access the line selector.
    pub fn line(&self) -> &LineSelector {
        &self.line
    }

    /// Access the connector interpolation mode.
    pub fn line_type(&self) -> LineType {
        self.line_type
    }

    /// Access the X, Y and Z axis ids.
    pub fn axis_ids(&self) -> (u32, u32, u32) {
        (self.x_axis_id, self.y_axis_id, self.z_axis_id)
    }

    /// Build the props for the mark at `index`.
    pub fn mark_props(&self, index: usize, point: &ScatterPoint) -> MarkProps {
        MarkProps {
            index,
            center: point.center(),
            size: point.size,
            payload: point.payload.clone(),
            attrs: self.attrs.overlay(&point.attrs),
        }
    }

    /// Render one interactive container per point, in input order.
    pub fn render_symbols(&self) -> Vec<Visual> {
        self.points
            .iter()
            .enumerate()
            .map(|(index, point)| {
                let props = self.mark_props(index, point);
                let mark = match (&self.active_shape, self.active_index == Some(index)) {
                    (Some(active), true) => active.resolve(&self.shape, &props),
                    (None, true) => ShapeSelector::default().resolve(&props),
                    (_, false) => self.shape.resolve(&props),
                };
                Visual::Layer(Layer {
                    class_name: Some(SYMBOL_CLASS.to_string()),
                    key: Some(props.key()),
                    attrs: Presentation::default(),
                    handlers: Some(MarkHandlers::new(
                        point.clone(),
                        index,
                        self.handlers.clone(),
                    )),
                    children: vec![mark],
                })
            })
            .collect()
    }

    /// Build the props for the connecting line.
    pub fn line_props(&self) -> LineProps {
        let points = match self.line_type {
            LineType::Joint => Some(self.points.iter().map(ScatterPoint::center).collect()),
            LineType::Fitting => None,
        };
        let base = Presentation {
            fill: Some(Paint::None),
            stroke: self.attrs.fill,
            ..self.attrs.clone()
        };
        let attrs = base.overlay(&self.line.own_attrs());
        LineProps {
            points,
            line_type: self.line_type,
            attrs,
        }
    }

    /// Render the connecting line, or `None` when no line is requested.
    pub fn render_line(&self) -> Option<Visual> {
        if !self.line.is_drawn() {
            return None;
        }
        let item = self.line.resolve(&self.line_props())?;
        Some(Visual::Layer(Layer {
            class_name: Some(LINE_CLASS.to_string()),
            key: Some(LINE_CLASS.to_string()),
            children: vec![item],
            ..Layer::default()
        }))
    }

    /// Render the whole series, or `None` when there are no points.
    pub fn render(&self) -> Option<Visual> {
        if self.points.is_empty() {
            return None;
        }
        tracing::debug!(
            points = self.points.len(),
            line = self.line.is_drawn(),
            active_index = ?self.active_index,
            "rendering scatter"
        );

        let class_name = match &self.class_name {
            Some(extra) => format!("{SCATTER_CLASS} {extra}"),
            None => SCATTER_CLASS.to_string(),
        };
        let mut children = Vec::with_capacity(2);
        if let Some(line) = self.render_line() {
            children.push(line);
        }
        children.push(Visual::Layer(Layer {
            class_name: Some(SYMBOLS_CLASS.to_string()),
            key: Some(SYMBOLS_CLASS.to_string()),
            children: self.render_symbols(),
            ..Layer::default()
        }));

        Some(Visual::Layer(Layer {
            class_name: Some(class_name),
            children,
            ..Layer::default()
        }))
    }

    /// Legend metadata for this series.
    pub fn legend_entry(&self) -> LegendEntry {
        LegendEntry {
            legend_type: self.legend_type,
            color: self.attrs.fill.and_then(|paint| paint.color()),
            symbol: self.shape.named_kind().unwrap_or(SymbolKind::Circle),
        }
    }
}
