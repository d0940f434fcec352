use std::sync::{Arc, RwLock};

use gpui::prelude::*;
use gpui::{MouseButton, MouseDownEvent, MouseMoveEvent, MouseUpEvent, Pixels, Point, Window, canvas, div};

use crate::events::PointerEvent;
use crate::geom::ScreenPoint;
use crate::render::{RenderList, build_render_list};
use crate::scatter::Scatter;

use super::config::ScatterViewConfig;
use super::paint::{ScatterFrame, paint_frame, to_hsla};
use super::state::ScatterUiState;

/// A GPUI view that renders a [`Scatter`] and dispatches mark interaction.
///
/// Pointer motion is hit-tested against the marks of the last painted frame;
/// crossing from one mark to another fires leave then enter, and a left
/// press and release on the same mark fires click. Leaving the view, or a
/// frame that drops the hovered mark, fires leave.
#[derive(Clone)]
pub struct GpuiScatterView {
    scatter: Arc<RwLock<Scatter>>,
    state: Arc<RwLock<ScatterUiState>>,
    config: ScatterViewConfig,
}

impl GpuiScatterView {
    /// Create a new GPUI scatter view.
    ///
    /// Uses the default [`ScatterViewConfig`].
    pub fn new(scatter: Scatter) -> Self {
        Self::with_config(scatter, ScatterViewConfig::default())
    }

    /// Create a new GPUI scatter view with a custom configuration.
    pub fn with_config(scatter: Scatter, config: ScatterViewConfig) -> Self {
        Self {
            scatter: Arc::new(RwLock::new(scatter)),
            state: Arc::new(RwLock::new(ScatterUiState::default())),
            config,
        }
    }

    /// Get a handle for mutating the underlying scatter.
    ///
    /// This is how owners update points or the active index.
    pub fn scatter_handle(&self) -> ScatterHandle {
        ScatterHandle {
            scatter: Arc::clone(&self.scatter),
        }
    }

    fn on_mouse_move(&mut self, ev: &MouseMoveEvent, cx: &mut Context<Self>) {
        let (local, change) = {
            let mut state = self.state.write().expect("scatter state lock");
            let local = state.to_local(screen_point(ev.position));
            (local, state.pointer_moved(local, self.config.hit_padding_px))
        };
        let Some(change) = change else {
            return;
        };

        // Callbacks may lock the scatter through a handle, so no lock is held here.
        if let Some(mark) = change.left {
            mark.mouse_leave();
        }
        if let Some(mark) = change.entered {
            mark.mouse_enter(&PointerEvent::motion(local));
        }
        cx.notify();
    }

    fn on_hover(&mut self, hovered: bool, cx: &mut Context<Self>) {
        if hovered {
            return;
        }
        let left = self.state.write().expect("scatter state lock").pointer_exited();
        if let Some(mark) = left {
            mark.mouse_leave();
            cx.notify();
        }
    }

    fn on_mouse_down(&mut self, ev: &MouseDownEvent, cx: &mut Context<Self>) {
        let mut state = self.state.write().expect("scatter state lock");
        let local = state.to_local(screen_point(ev.position));
        state.pointer_pressed(local, self.config.hit_padding_px);
        cx.notify();
    }

    fn on_mouse_up(&mut self, ev: &MouseUpEvent, cx: &mut Context<Self>) {
        let (local, clicked) = {
            let mut state = self.state.write().expect("scatter state lock");
            let local = state.to_local(screen_point(ev.position));
            (local, state.pointer_released(local, self.config.hit_padding_px))
        };

        if let Some(mark) = clicked {
            mark.click(&PointerEvent::click(local, ev.click_count));
        }
        cx.notify();
    }
}

impl Render for GpuiScatterView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let scatter = Arc::clone(&self.scatter);
        let state = Arc::clone(&self.state);

        div()
            .id("gpui-scatter")
            .size_full()
            .bg(to_hsla(self.config.background))
            .child(
                canvas(
                    move |bounds, _window, _| {
                        let scene = scatter.read().expect("scatter lock").render();
                        let render = scene
                            .as_ref()
                            .map(build_render_list)
                            .unwrap_or_else(RenderList::new);
                        let origin = screen_point(bounds.origin);
                        let removed = {
                            let mut state = state.write().expect("scatter state lock");
                            state.origin = origin;
                            state.replace_scene(scene)
                        };
                        if let Some(mark) = removed {
                            mark.mouse_leave();
                        }
                        ScatterFrame { render, origin }
                    },
                    move |_, frame, window, _| {
                        paint_frame(&frame, window);
                    },
                )
                .size_full(),
            )
            .on_mouse_move(cx.listener(|this, ev, _, cx| {
                this.on_mouse_move(ev, cx);
            }))
            .on_hover(cx.listener(|this, hovered: &bool, _, cx| {
                this.on_hover(*hovered, cx);
            }))
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_down(ev, cx);
                }),
            )
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_up(ev, cx);
                }),
            )
    }
}

/// A handle for mutating a [`Scatter`] held inside a `GpuiScatterView`.
///
/// The handle clones cheaply and can be moved into callbacks or async tasks.
#[derive(Clone)]
pub struct ScatterHandle {
    scatter: Arc<RwLock<Scatter>>,
}

impl ScatterHandle {
    /// Read the scatter.
    ///
    /// The scatter is locked for the duration of the callback.
    pub fn read<R>(&self, f: impl FnOnce(&Scatter) -> R) -> R {
        let scatter = self.scatter.read().expect("scatter lock");
        f(&scatter)
    }

    /// Mutate the scatter.
    ///
    /// The scatter is locked for the duration of the callback.
    pub fn write<R>(&self, f: impl FnOnce(&mut Scatter) -> R) -> R {
        let mut scatter = self.scatter.write().expect("scatter lock");
        f(&mut scatter)
    }
}

fn screen_point(point: Point<Pixels>) -> ScreenPoint {
    ScreenPoint::new(f32::from(point.x), f32::from(point.y))
}
