use crate::events::MarkHandlers;
use crate::geom::ScreenPoint;
use crate::hit::{find_mark, hit_test};
use crate::visual::Visual;

/// Marks the pointer left and entered in one transition.
#[derive(Debug, Clone, Default)]
pub(crate) struct HoverChange {
    pub(crate) left: Option<MarkHandlers>,
    pub(crate) entered: Option<MarkHandlers>,
}

/// Pointer routing state of a scatter view.
///
/// The transition methods only update state and report which marks are
/// affected; callers invoke the handlers once no lock is held.
#[derive(Debug, Clone, Default)]
pub(crate) struct ScatterUiState {
    /// Canvas origin in window coordinates.
    pub(crate) origin: ScreenPoint,
    /// Scene from the most recent frame.
    pub(crate) scene: Option<Visual>,
    /// Mark currently under the pointer.
    pub(crate) hovered: Option<MarkHandlers>,
    /// Mark index under the pointer when the left button went down.
    pub(crate) pending_click: Option<usize>,
}

impl ScatterUiState {
    pub(crate) fn to_local(&self, window_point: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(window_point.x - self.origin.x, window_point.y - self.origin.y)
    }

    pub(crate) fn hovered_index(&self) -> Option<usize> {
        self.hovered.as_ref().map(MarkHandlers::index)
    }

    fn mark_at(&self, local: ScreenPoint, padding: f32) -> Option<MarkHandlers> {
        let scene = self.scene.as_ref()?;
        hit_test(scene, local, padding).cloned()
    }

    /// Pointer moved to `local`. Returns `None` when the hovered mark is unchanged.
    pub(crate) fn pointer_moved(&mut self, local: ScreenPoint, padding: f32) -> Option<HoverChange> {
        let hit = self.mark_at(local, padding);
        if hit.as_ref().map(MarkHandlers::index) == self.hovered_index() {
            return None;
        }
        tracing::debug!(
            from = ?self.hovered_index(),
            to = ?hit.as_ref().map(MarkHandlers::index),
            "scatter hover changed"
        );
        let left = std::mem::replace(&mut self.hovered, hit.clone());
        Some(HoverChange { left, entered: hit })
    }

    /// Pointer left the view. Returns the mark that was hovered, if any.
    pub(crate) fn pointer_exited(&mut self) -> Option<MarkHandlers> {
        self.pending_click = None;
        let left = self.hovered.take();
        if let Some(mark) = &left {
            tracing::debug!(from = mark.index(), "scatter pointer exited over mark");
        }
        left
    }

    /// Left button pressed at `local`.
    pub(crate) fn pointer_pressed(&mut self, local: ScreenPoint, padding: f32) {
        self.pending_click = self.mark_at(local, padding).map(|mark| mark.index());
    }

    /// Left button released at `local`. Returns the clicked mark when the
    /// press and release landed on the same one.
    pub(crate) fn pointer_released(&mut self, local: ScreenPoint, padding: f32) -> Option<MarkHandlers> {
        let pending = self.pending_click.take()?;
        self.mark_at(local, padding)
            .filter(|mark| mark.index() == pending)
    }

    /// Install the scene of a new frame.
    ///
    /// The hovered mark is rebound to the new scene; when the new scene no
    /// longer has it, the old mark is returned so the caller can send a leave.
    pub(crate) fn replace_scene(&mut self, scene: Option<Visual>) -> Option<MarkHandlers> {
        self.scene = scene;
        let index = self.hovered_index()?;
        let current = self
            .scene
            .as_ref()
            .and_then(|scene| find_mark(scene, index))
            .cloned();
        match current {
            Some(mark) => {
                self.hovered = Some(mark);
                None
            }
            None => {
                tracing::debug!(from = index, "hovered scatter mark removed from scene");
                self.pending_click = None;
                self.hovered.take()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::point::{Payload, ScatterPoint};
    use crate::scatter::Scatter;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Enter(usize),
        Leave,
        Click(usize),
    }

    fn recording_scatter(n: usize, log: &Arc<Mutex<Vec<Call>>>) -> Scatter {
        let enter = Arc::clone(log);
        let leave = Arc::clone(log);
        let click = Arc::clone(log);
        Scatter::new((0..n).map(|i| {
            ScatterPoint::new(20.0 + i as f32 * 40.0, 20.0, Payload::new(i as f64, 0.0))
        }))
        .on_mouse_enter(move |_, index, _| enter.lock().expect("log").push(Call::Enter(index)))
        .on_mouse_leave(move || leave.lock().expect("log").push(Call::Leave))
        .on_click(move |_, index, _| click.lock().expect("log").push(Call::Click(index)))
    }

    fn state_with(scatter: &Scatter) -> ScatterUiState {
        let mut state = ScatterUiState::default();
        state.replace_scene(scatter.render());
        state
    }

    fn fire(change: Option<HoverChange>) {
        if let Some(change) = change {
            if let Some(mark) = change.left {
                mark.mouse_leave();
            }
            if let Some(mark) = change.entered {
                mark.mouse_enter(&crate::events::PointerEvent::motion(ScreenPoint::default()));
            }
        }
    }

    #[test]
    fn moving_across_marks_sends_leave_then_enter() {
        let log = Arc::default();
        let mut state = state_with(&recording_scatter(3, &log));

        fire(state.pointer_moved(ScreenPoint::new(20.0, 20.0), 0.0));
        assert!(state.pointer_moved(ScreenPoint::new(21.0, 20.0), 0.0).is_none());
        fire(state.pointer_moved(ScreenPoint::new(60.0, 20.0), 0.0));
        fire(state.pointer_moved(ScreenPoint::new(40.0, 60.0), 0.0));

        assert_eq!(
            *log.lock().expect("log"),
            vec![Call::Enter(0), Call::Leave, Call::Enter(1), Call::Leave]
        );
        assert_eq!(state.hovered_index(), None);
    }

    #[test]
    fn exiting_the_view_over_a_mark_clears_hover() {
        let log = Arc::default();
        let mut state = state_with(&recording_scatter(3, &log));

        fire(state.pointer_moved(ScreenPoint::new(100.0, 20.0), 0.0));
        state.pointer_pressed(ScreenPoint::new(100.0, 20.0), 0.0);
        let left = state.pointer_exited().expect("hovered mark");
        left.mouse_leave();

        assert_eq!(state.hovered_index(), None);
        assert_eq!(state.pending_click, None);
        assert!(state.pointer_exited().is_none());
        assert_eq!(*log.lock().expect("log"), vec![Call::Enter(2), Call::Leave]);
    }

    #[test]
    fn click_requires_press_and_release_on_same_mark() {
        let log = Arc::default();
        let mut state = state_with(&recording_scatter(2, &log));

        state.pointer_pressed(ScreenPoint::new(20.0, 20.0), 0.0);
        assert!(state.pointer_released(ScreenPoint::new(60.0, 20.0), 0.0).is_none());

        state.pointer_pressed(ScreenPoint::new(60.0, 20.0), 0.0);
        let clicked = state
            .pointer_released(ScreenPoint::new(61.0, 21.0), 0.0)
            .expect("same mark");
        clicked.click(&crate::events::PointerEvent::click(ScreenPoint::default(), 1));

        assert!(state.pointer_released(ScreenPoint::new(60.0, 20.0), 0.0).is_none());
        assert_eq!(*log.lock().expect("log"), vec![Call::Click(1)]);
    }

    #[test]
    fn scene_without_hovered_mark_reports_leave() {
        let log = Arc::default();
        let mut state = state_with(&recording_scatter(3, &log));
        fire(state.pointer_moved(ScreenPoint::new(100.0, 20.0), 0.0));

        assert!(state.replace_scene(recording_scatter(3, &log).render()).is_none());
        assert_eq!(state.hovered_index(), Some(2));

        let left = state
            .replace_scene(recording_scatter(2, &log).render())
            .expect("hovered mark removed");
        assert_eq!(left.index(), 2);
        assert_eq!(state.hovered_index(), None);

        fire(state.pointer_moved(ScreenPoint::new(20.0, 20.0), 0.0));
        assert!(state.replace_scene(None).is_some());
    }
}
