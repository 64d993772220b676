//! Click-drag panning.

use crate::geom::Point;

use super::ViewportState;

/// Incremental drag state. Deltas are taken against the previous pointer
/// event, not the original press, so each move shifts the view by exactly
/// what the cursor moved. A new `begin` replaces any drag in progress.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragAnchor {
    anchor: Option<Point>,
}

impl DragAnchor {
    /// Record the press position.
    pub fn begin(&mut self, pointer: Point) {
        self.anchor = Some(pointer);
    }

    /// Shift the view opposite the pointer delta (drag follows the cursor
    /// 1:1), clamped into the scroll region. Returns the applied offset.
    /// Without a preceding `begin`, the event only sets the anchor.
    pub fn drag_to(&mut self, state: &mut ViewportState, pointer: Point) -> Point {
        let Some(anchor) = self.anchor else {
            self.anchor = Some(pointer);
            return state.offset;
        };
        let delta = pointer - anchor;
        self.anchor = Some(pointer);
        state.set_offset(state.offset - delta)
    }

    /// Release; the next drag starts from its own press position.
    pub fn end(&mut self) {
        self.anchor = None;
    }
}
