//! Wheel zoom with a pointer-anchored focal point.

use crate::geom::Point;
use crate::viewport::scroll;

use super::ViewportState;

/// Direction of one wheel step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// What a zoom request did to the state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomOutcome {
    /// Scale changed; carries the new value for zoom readouts.
    Applied { scale: f64 },
    /// Pointer was not over the image; state untouched.
    OutsideImage,
    /// Step would cross the pixel floor or the scale ceiling; state
    /// untouched.
    Saturated,
}

impl ZoomOutcome {
    pub fn applied(&self) -> Option<f64> {
        match self {
            ZoomOutcome::Applied { scale } => Some(*scale),
            _ => None,
        }
    }
}

/// Apply one zoom step about `pointer` (device coordinates, relative to
/// the viewport's top-left corner). `None` anchors at the viewport center,
/// for keyboard- or API-driven zoom.
///
/// The image point under the pointer before the step is still under the
/// pointer after it.
pub fn zoom(
    state: &mut ViewportState,
    direction: ZoomDirection,
    pointer: Option<Point>,
) -> ZoomOutcome {
    let pointer =
        pointer.unwrap_or_else(|| Point::new(state.view_width / 2.0, state.view_height / 2.0));

    // Honor the gesture only while the cursor is over the image itself.
    if !state.image_bbox().contains_interior(state.offset + pointer) {
        return ZoomOutcome::OutsideImage;
    }

    let old_scale = state.scale;
    let factor = match direction {
        ZoomDirection::Out => state.config.zoom_step,
        ZoomDirection::In => 1.0 / state.config.zoom_step,
    };
    let new_scale = old_scale * factor;

    let shorter = state.image_width.min(state.image_height) as f64;
    let rejected = match direction {
        ZoomDirection::Out => shorter * new_scale < state.config.min_visible_px,
        ZoomDirection::In => new_scale > state.config.max_scale,
    };
    if rejected {
        return ZoomOutcome::Saturated;
    }

    // Re-anchor so the focal image point stays put on screen:
    // canvas position of the pointer scales by new/old, the pointer's
    // device position does not.
    let ratio = new_scale / old_scale;
    state.scale = new_scale;
    state.offset = Point::new(
        (state.offset.x + pointer.x) * ratio - pointer.x,
        (state.offset.y + pointer.y) * ratio - pointer.y,
    );
    state.offset = scroll::clamp_offset(
        state.scroll_region(),
        state.view_width,
        state.view_height,
        state.offset,
    );

    ZoomOutcome::Applied { scale: new_scale }
}
