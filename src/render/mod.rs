//! Rendering primitives.
//!
//! These types are backend-agnostic and are used by render backends (such as the
//! GPUI backend) to describe how a rendered scatter should be drawn.

use crate::geom::ScreenPoint;
use crate::style::{Color, Presentation};
use crate::symbol::SymbolGeometry;
use crate::visual::{CurveMark, SymbolMark, Visual};

const DEFAULT_STROKE_WIDTH: f32 = 1.0;

/// Line stroke styling.
///
/// The width is expressed in logical pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
    /// Dash pattern; empty for a solid line.
    pub dash: Vec<f32>,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: DEFAULT_STROKE_WIDTH,
            dash: Vec::new(),
        }
    }
}

/// Fill and outline for closed shapes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShapeStyle {
    /// Fill color, if filled.
    pub fill: Option<Color>,
    /// Outline, if stroked.
    pub stroke: Option<LineStyle>,
}

/// Render command list.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Draw a circle.
    Circle {
        /// Circle center.
        center: ScreenPoint,
        /// Circle radius in pixels.
        radius: f32,
        /// Fill and outline.
        style: ShapeStyle,
    },
    /// Draw a closed polygon.
    Polygon {
        /// Polygon vertices.
        points: Vec<ScreenPoint>,
        /// Fill and outline.
        style: ShapeStyle,
    },
    /// Draw an open polyline.
    Polyline {
        /// Polyline vertices.
        points: Vec<ScreenPoint>,
        /// Stroke styling.
        style: LineStyle,
    },
}

/// Aggregated render commands.
#[derive(Debug, Default, Clone)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Create an empty render list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Access all render commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Check whether nothing will be drawn.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Flatten a visual tree into draw commands, in paint order.
///
/// Layer attributes cascade to their children underneath the children's own
/// attributes.
pub fn build_render_list(scene: &Visual) -> RenderList {
    let mut list = RenderList::new();
    push_visual(scene, &Presentation::default(), &mut list);
    list
}

fn push_visual(visual: &Visual, inherited: &Presentation, out: &mut RenderList) {
    match visual {
        Visual::Layer(layer) => {
            let attrs = inherited.overlay(&layer.attrs);
            for child in &layer.children {
                push_visual(child, &attrs, out);
            }
        }
        Visual::Symbol(symbol) => push_symbol(symbol, inherited, out),
        Visual::Curve(curve) => push_curve(curve, inherited, out),
    }
}

fn push_symbol(symbol: &SymbolMark, inherited: &Presentation, out: &mut RenderList) {
    let attrs = inherited.overlay(&symbol.attrs);
    let style = shape_style(&attrs);
    if style.fill.is_none() && style.stroke.is_none() {
        return;
    }
    match symbol.geometry() {
        SymbolGeometry::Circle { center, radius } => {
            if !center.is_finite() || !radius.is_finite() || radius <= 0.0 {
                return;
            }
            out.push(RenderCommand::Circle {
                center,
                radius,
                style,
            });
        }
        SymbolGeometry::Polygon(points) => {
            if points.len() < 3 || !points.iter().all(ScreenPoint::is_finite) {
                return;
            }
            out.push(RenderCommand::Polygon { points, style });
        }
    }
}

fn push_curve(curve: &CurveMark, inherited: &Presentation, out: &mut RenderList) {
    let Some(points) = curve.points.as_ref() else {
        return;
    };
    let attrs = inherited.overlay(&curve.attrs);
    let Some(style) = line_style(&attrs) else {
        return;
    };
    let points: Vec<ScreenPoint> = points.iter().copied().filter(ScreenPoint::is_finite).collect();
    if points.len() < 2 {
        return;
    }
    out.push(RenderCommand::Polyline { points, style });
}

/// Shortest dash cycle, in pixels, that is still split into runs.
const MIN_DASH_CYCLE: f32 = 1e-3;

/// Upper bound on emitted dash runs per polyline.
const MAX_DASH_RUNS: usize = 100_000;

/// Split a polyline into the visible runs of a dash pattern.
///
/// An empty pattern, one without positive lengths, or one whose cycle is too
/// short to step along the line yields the whole line.
pub fn dash_polyline(points: &[ScreenPoint], pattern: &[f32]) -> Vec<Vec<ScreenPoint>> {
    let total: f32 = pattern.iter().filter(|len| **len > 0.0).sum();
    if pattern.is_empty()
        || !total.is_finite()
        || total < MIN_DASH_CYCLE
        || pattern.iter().any(|len| *len < 0.0 || !len.is_finite())
    {
        return vec![points.to_vec()];
    }

    let mut runs = Vec::new();
    let mut current: Vec<ScreenPoint> = Vec::new();
    let mut dash_index = 0;
    let mut remaining = pattern[0];
    let mut drawing = true;

    for window in points.windows(2) {
        let (start, end) = (window[0], window[1]);
        let length = ((end.x - start.x).powi(2) + (end.y - start.y).powi(2)).sqrt();
        let mut travelled = 0.0;
        if drawing && current.is_empty() {
            current.push(start);
        }
        while length - travelled > remaining {
            let next = travelled + remaining;
            if (remaining > 0.0 && next <= travelled) || runs.len() >= MAX_DASH_RUNS {
                tracing::debug!(length, runs = runs.len(), "dash pattern too fine, drawing solid");
                return vec![points.to_vec()];
            }
            travelled = next;
            let t = travelled / length;
            let split = ScreenPoint::new(
                start.x + (end.x - start.x) * t,
                start.y + (end.y - start.y) * t,
            );
            if drawing {
                current.push(split);
                runs.push(std::mem::take(&mut current));
            } else {
                current.push(split);
            }
            drawing = !drawing;
            dash_index = (dash_index + 1) % pattern.len();
            remaining = pattern[dash_index];
        }
        remaining -= length - travelled;
        if drawing {
            current.push(end);
        }
    }
    if drawing && current.len() >= 2 {
        runs.push(current);
    }
    runs
}

fn shape_style(attrs: &Presentation) -> ShapeStyle {
    ShapeStyle {
        fill: attrs.resolved_fill(Some(Color::BLACK)),
        stroke: line_style(attrs),
    }
}

fn line_style(attrs: &Presentation) -> Option<LineStyle> {
    let color = attrs.resolved_stroke()?;
    let width = attrs.stroke_width.unwrap_or(DEFAULT_STROKE_WIDTH);
    if width <= 0.0 {
        return None;
    }
    Some(LineStyle {
        color,
        width,
        dash: attrs.stroke_dasharray.clone().unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::{Payload, ScatterPoint};
    use crate::scatter::Scatter;
    use crate::style::Paint;
    use crate::symbol::SymbolKind;

    fn scatter() -> Scatter {
        Scatter::new([
            ScatterPoint::new(0.0, 0.0, Payload::new(0.0, 0.0)),
            ScatterPoint::new(10.0, 10.0, Payload::new(1.0, 1.0)),
        ])
    }

    #[test]
    fn line_paints_before_marks() {
        let scene = scatter()
            .with_shape(SymbolKind::Triangle)
            .with_line(true)
            .render()
            .expect("renders");
        let list = build_render_list(&scene);
        let commands = list.commands();
        assert_eq!(commands.len(), 3);
        let RenderCommand::Polyline { points, style } = &commands[0] else {
            panic!("line first");
        };
        assert_eq!(points.len(), 2);
        assert_eq!(style.color, Color::WHITE);
        assert!(matches!(commands[1], RenderCommand::Polygon { .. }));
    }

    #[test]
    fn circle_marks_use_fill() {
        let scene = scatter().render().expect("renders");
        let list = build_render_list(&scene);
        let RenderCommand::Circle { style, .. } = &list.commands()[0] else {
            panic!("circle expected");
        };
        assert_eq!(style.fill, Some(Color::WHITE));
        assert!(style.stroke.is_none());
    }

    #[test]
    fn fitting_line_draws_nothing() {
        let scene = scatter()
            .with_line(true)
            .with_line_type(crate::selector::LineType::Fitting)
            .render()
            .expect("renders");
        let list = build_render_list(&scene);
        assert!(
            list.commands()
                .iter()
                .all(|c| !matches!(c, RenderCommand::Polyline { .. }))
        );
    }

    #[test]
    fn dash_pattern_splits_runs() {
        let line = [ScreenPoint::new(0.0, 0.0), ScreenPoint::new(10.0, 0.0)];
        let runs = dash_polyline(&line, &[2.0, 3.0]);
        assert_eq!(
            runs,
            vec![
                vec![ScreenPoint::new(0.0, 0.0), ScreenPoint::new(2.0, 0.0)],
                vec![ScreenPoint::new(5.0, 0.0), ScreenPoint::new(7.0, 0.0)],
            ]
        );
        assert_eq!(dash_polyline(&line, &[]), vec![line.to_vec()]);
    }

    #[test]
    fn too_fine_dash_draws_solid_line() {
        let line = [ScreenPoint::new(0.0, 0.0), ScreenPoint::new(100.0, 0.0)];
        assert_eq!(dash_polyline(&line, &[1e-6]), vec![line.to_vec()]);

        let long = [ScreenPoint::new(0.0, 0.0), ScreenPoint::new(1.0e6, 0.0)];
        assert_eq!(dash_polyline(&long, &[0.01]), vec![long.to_vec()]);
        assert_eq!(dash_polyline(&long, &[5.0, f32::INFINITY]), vec![long.to_vec()]);
    }

    #[test]
    fn unpainted_and_degenerate_marks_are_skipped() {
        let scene = Scatter::new([
            ScatterPoint::new(f32::NAN, 0.0, Payload::new(0.0, 0.0)),
            ScatterPoint::new(5.0, 5.0, Payload::new(0.0, 0.0)),
        ])
        .with_attrs(Presentation::new().with_fill(Paint::None))
        .render()
        .expect("renders");
        assert!(build_render_list(&scene).is_empty());
    }
}
