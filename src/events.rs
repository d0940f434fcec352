//! Pointer events and per-mark handler wiring.

use std::fmt;
use std::sync::Arc;

use crate::geom::ScreenPoint;
use crate::point::ScatterPoint;

/// Pointer event forwarded to scatter callbacks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Pointer position relative to the scatter origin.
    pub position: ScreenPoint,
    /// Number of consecutive clicks, zero for motion events.
    pub click_count: usize,
}

impl PointerEvent {
    /// Create a motion event at the given position.
    pub fn motion(position: ScreenPoint) -> Self {
        Self {
            position,
            click_count: 0,
        }
    }

    /// Create a click event at the given position.
    pub fn click(position: ScreenPoint, click_count: usize) -> Self {
        Self {
            position,
            click_count,
        }
    }
}

/// Callback receiving the point, its index, and the triggering event.
pub type PointCallback = Arc<dyn Fn(&ScatterPoint, usize, &PointerEvent) + Send + Sync>;

/// Callback for the pointer leaving a mark.
pub type LeaveCallback = Arc<dyn Fn() + Send + Sync>;

/// Series-wide interaction callbacks.
///
/// Every callback defaults to a no-op.
#[derive(Clone)]
pub struct ScatterHandlers {
    /// Pointer entered a mark.
    pub on_mouse_enter: PointCallback,
    /// Pointer left a mark.
    pub on_mouse_leave: LeaveCallback,
    /// A mark was clicked.
    pub on_click: PointCallback,
}

impl Default for ScatterHandlers {
    fn default() -> Self {
        Self {
            on_mouse_enter: Arc::new(|_: &ScatterPoint, _: usize, _: &PointerEvent| {}),
            on_mouse_leave: Arc::new(|| {}),
            on_click: Arc::new(|_: &ScatterPoint, _: usize, _: &PointerEvent| {}),
        }
    }
}

impl fmt::Debug for ScatterHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScatterHandlers").finish_non_exhaustive()
    }
}

/// Handlers bound to one mark, carrying that mark's point and index.
#[derive(Clone)]
pub struct MarkHandlers {
    point: ScatterPoint,
    index: usize,
    handlers: ScatterHandlers,
}

impl MarkHandlers {
    pub(crate) fn new(point: ScatterPoint, index: usize, handlers: ScatterHandlers) -> Self {
        Self {
            point,
            index,
            handlers,
        }
    }

    /// Index of the bound point.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The bound point.
    pub fn point(&self) -> &ScatterPoint {
        &self.point
    }

    /// Forward a pointer-enter to the series callback.
    pub fn mouse_enter(&self, event: &PointerEvent) {
        tracing::trace!(index = self.index, "scatter mark mouse enter");
        (self.handlers.on_mouse_enter)(&self.point, self.index, event);
    }

    /// Forward a pointer-leave to the series callback. No point data is passed.
    pub fn mouse_leave(&self) {
        tracing::trace!(index = self.index, "scatter mark mouse leave");
        (self.handlers.on_mouse_leave)();
    }

    /// Forward a click to the series callback.
    pub fn click(&self, event: &PointerEvent) {
        tracing::trace!(index = self.index, "scatter mark click");
        (self.handlers.on_click)(&self.point, self.index, event);
    }
}

impl fmt::Debug for MarkHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkHandlers")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::point::Payload;

    #[test]
    fn default_handlers_are_noops() {
        let mark = MarkHandlers::new(
            ScatterPoint::new(1.0, 2.0, Payload::new(0.0, 0.0)),
            3,
            ScatterHandlers::default(),
        );
        let event = PointerEvent::motion(ScreenPoint::new(1.0, 2.0));
        mark.mouse_enter(&event);
        mark.mouse_leave();
        mark.click(&event);
    }

    #[test]
    fn click_forwards_point_and_index() {
        let seen: Arc<Mutex<Vec<(f64, usize, usize)>>> = Arc::default();
        let sink = Arc::clone(&seen);
        let handlers = ScatterHandlers {
            on_click: Arc::new(move |point: &ScatterPoint, index: usize, event: &PointerEvent| {
                sink.lock()
                    .expect("sink lock")
                    .push((point.payload.x, index, event.click_count));
            }),
            ..ScatterHandlers::default()
        };
        let mark = MarkHandlers::new(
            ScatterPoint::new(1.0, 2.0, Payload::new(42.0, 0.0)),
            7,
            handlers,
        );
        mark.click(&PointerEvent::click(ScreenPoint::new(1.0, 2.0), 1));
        assert_eq!(*seen.lock().expect("sink lock"), vec![(42.0, 7, 1)]);
    }
}
