use gpui::{
    BorderStyle, Bounds, Corners, Edges, PathBuilder, Pixels, Point, Window, point, px, quad,
};

use crate::geom::ScreenPoint;
use crate::render::{LineStyle, RenderCommand, RenderList, ShapeStyle, dash_polyline};
use crate::style::Color;

const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

#[derive(Debug, Clone)]
pub(crate) struct ScatterFrame {
    pub(crate) render: RenderList,
    pub(crate) origin: ScreenPoint,
}

pub(crate) fn paint_frame(frame: &ScatterFrame, window: &mut Window) {
    let origin = frame.origin;
    for command in frame.render.commands() {
        match command {
            RenderCommand::Circle {
                center,
                radius,
                style,
            } => paint_circle(window, origin, *center, *radius, style),
            RenderCommand::Polygon { points, style } => {
                paint_polygon(window, origin, points, style);
            }
            RenderCommand::Polyline { points, style } => {
                paint_polyline(window, origin, points, style, false);
            }
        }
    }
}

fn paint_circle(
    window: &mut Window,
    origin: ScreenPoint,
    center: ScreenPoint,
    radius: f32,
    style: &ShapeStyle,
) {
    let bounds = Bounds::from_corners(
        to_point(origin, ScreenPoint::new(center.x - radius, center.y - radius)),
        to_point(origin, ScreenPoint::new(center.x + radius, center.y + radius)),
    );
    let (border_width, border_color) = match &style.stroke {
        Some(stroke) => (stroke.width, stroke.color),
        None => (0.0, TRANSPARENT),
    };
    window.paint_quad(quad(
        bounds,
        Corners::all(px(radius)),
        to_rgba(style.fill.unwrap_or(TRANSPARENT)),
        Edges::all(px(border_width)),
        to_rgba(border_color),
        BorderStyle::default(),
    ));
}

fn paint_polygon(window: &mut Window, origin: ScreenPoint, points: &[ScreenPoint], style: &ShapeStyle) {
    if points.len() < 3 {
        return;
    }
    if let Some(fill) = style.fill {
        let mut builder = PathBuilder::fill();
        builder.move_to(to_point(origin, points[0]));
        for pt in &points[1..] {
            builder.line_to(to_point(origin, *pt));
        }
        builder.close();
        if let Ok(path) = builder.build() {
            window.paint_path(path, to_rgba(fill));
        }
    }
    if let Some(stroke) = &style.stroke {
        paint_polyline(window, origin, points, stroke, true);
    }
}

fn paint_polyline(
    window: &mut Window,
    origin: ScreenPoint,
    points: &[ScreenPoint],
    style: &LineStyle,
    closed: bool,
) {
    if points.len() < 2 {
        return;
    }
    let mut vertices = points.to_vec();
    if closed {
        vertices.push(points[0]);
    }
    let width = style.width.max(0.5);
    let mut builder = PathBuilder::stroke(px(width));
    for run in dash_polyline(&vertices, &style.dash) {
        let Some((first, rest)) = run.split_first() else {
            continue;
        };
        builder.move_to(to_point(origin, *first));
        for pt in rest {
            builder.line_to(to_point(origin, *pt));
        }
    }
    if let Ok(path) = builder.build() {
        window.paint_path(path, to_rgba(style.color));
    }
}

fn to_point(origin: ScreenPoint, pt: ScreenPoint) -> Point<Pixels> {
    point(px(origin.x + pt.x), px(origin.y + pt.y))
}

fn to_rgba(color: Color) -> gpui::Rgba {
    gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

pub(crate) fn to_hsla(color: Color) -> gpui::Hsla {
    gpui::Hsla::from(to_rgba(color))
}
