//! Hit testing of pointer positions against rendered marks.

use crate::events::MarkHandlers;
use crate::geom::ScreenPoint;
use crate::visual::Visual;

/// Find the topmost interactive mark whose bounds, grown by `padding`, contain `point`.
///
/// Marks painted later sit on top, so the search runs in reverse paint order.
pub fn hit_test(scene: &Visual, point: ScreenPoint, padding: f32) -> Option<&MarkHandlers> {
    if !point.is_finite() {
        return None;
    }
    let mut marks = Vec::new();
    collect_marks(scene, &mut marks);
    marks.into_iter().rev().find_map(|(visual, handlers)| {
        let bounds = visual.bounds()?.inflate(padding);
        bounds.contains(point).then_some(handlers)
    })
}

/// Find the handlers of the mark with the given point index.
pub(crate) fn find_mark(scene: &Visual, index: usize) -> Option<&MarkHandlers> {
    let mut marks = Vec::new();
    collect_marks(scene, &mut marks);
    marks
        .into_iter()
        .find_map(|(_, handlers)| (handlers.index() == index).then_some(handlers))
}

fn collect_marks<'a>(visual: &'a Visual, out: &mut Vec<(&'a Visual, &'a MarkHandlers)>) {
    if let Visual::Layer(layer) = visual {
        if let Some(handlers) = &layer.handlers {
            out.push((visual, handlers));
            return;
        }
        for child in &layer.children {
            collect_marks(child, out);
        }
    }
}
