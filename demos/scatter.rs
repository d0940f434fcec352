use gpui::{AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};
use tracing_subscriber::EnvFilter;

use gpui_scatter::{
    Color, GpuiScatterView, LineSelector, Payload, Presentation, Scatter, ScatterPoint,
    ScatterViewConfig, SymbolKind, ZValue,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    Application::new().run(|cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(720.0), px(480.0)),
                cx,
            ))),
            ..Default::default()
        };

        cx.open_window(options, |_window, cx| {
            let points = (0..24).map(|i| {
                let t = i as f32 * 0.26;
                let x = 60.0 + i as f32 * 26.0;
                let y = 240.0 - t.sin() * 140.0;
                ScatterPoint::new(x, y, Payload::new(f64::from(t), f64::from(t.sin())))
                    .with_size(40.0 + (i % 5) as f32 * 30.0)
            });
            let points: Vec<_> = points
                .enumerate()
                .map(|(i, mut point)| {
                    point.payload.z = Some(ZValue::Number(i as f64));
                    if i % 6 == 0 {
                        point.with_attrs(Presentation::new().with_fill(Color::new(
                            0.95, 0.45, 0.3, 1.0,
                        )))
                    } else {
                        point
                    }
                })
                .collect();

            let scatter = Scatter::new(points)
                .with_attrs(
                    Presentation::new()
                        .with_fill(Color::new(0.2, 0.75, 0.95, 1.0))
                        .with_stroke(Color::WHITE),
                )
                .with_shape(SymbolKind::Diamond)
                .with_active_shape(SymbolKind::Star)
                .with_line(LineSelector::Styled(
                    Presentation::new().with_stroke_width(1.5).with_opacity(0.6),
                ));

            let config = ScatterViewConfig {
                background: Color::new(0.08, 0.09, 0.11, 1.0),
                ..Default::default()
            };
            let view = GpuiScatterView::with_config(scatter, config);

            let handle = view.scatter_handle();
            let enter_handle = handle.clone();
            let leave_handle = handle.clone();
            handle.write(|scatter| {
                *scatter = std::mem::take(scatter)
                    .on_mouse_enter(move |point, index, _| {
                        tracing::info!(index, x = point.payload.x, y = point.payload.y, "enter");
                        enter_handle.write(|s| s.set_active_index(Some(index)));
                    })
                    .on_mouse_leave(move || {
                        leave_handle.write(|s| s.set_active_index(None));
                    })
                    .on_click(|point, index, event| {
                        tracing::info!(index, z = ?point.payload.z, clicks = event.click_count, "click");
                    });
            });

            cx.new(|_| view)
        })
        .unwrap();
    });
}
