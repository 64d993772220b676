//! One open viewing session: the raster being shown plus its viewport.

use std::sync::Arc;

use tracing::info;

use crate::geom::Point;
use crate::raster::Raster;
use crate::render::{self, VisibleTile};
use crate::viewport::pan::DragAnchor;
use crate::viewport::zoom::{self, ZoomDirection, ZoomOutcome};
use crate::viewport::{ViewportConfig, ViewportState};

/// Owns the displayed raster and all viewport state for it.
///
/// Single-owner, event-driven: every method is a synchronous, bounded
/// computation meant for the display thread. Long-running image loads
/// happen elsewhere and hand a finished raster in through
/// [`ViewSession::replace_raster`]; the `Arc` swap replaces the pointer,
/// never the pixels.
pub struct ViewSession {
    raster: Arc<Raster>,
    state: ViewportState,
    drag: DragAnchor,
}

impl ViewSession {
    pub fn new(
        raster: Arc<Raster>,
        view_width: f64,
        view_height: f64,
        config: ViewportConfig,
    ) -> Self {
        let state = ViewportState::new(
            raster.width(),
            raster.height(),
            view_width,
            view_height,
            config,
        );
        Self {
            raster,
            state,
            drag: DragAnchor::default(),
        }
    }

    /// Swap in a newly loaded raster and reset the view (scale 1.0,
    /// origin offset), keeping the viewport dimensions and config.
    pub fn replace_raster(&mut self, raster: Arc<Raster>) {
        info!(
            width = raster.width(),
            height = raster.height(),
            "raster replaced, viewport reset"
        );
        self.state = ViewportState::new(
            raster.width(),
            raster.height(),
            self.state.view_width,
            self.state.view_height,
            self.state.config.clone(),
        );
        self.raster = raster;
        self.drag = DragAnchor::default();
    }

    pub fn raster(&self) -> &Arc<Raster> {
        &self.raster
    }

    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    pub fn scale(&self) -> f64 {
        self.state.scale
    }

    pub fn offset(&self) -> Point {
        self.state.offset
    }

    /// Direct scale request, clamped; see `ViewportState::set_scale`.
    pub fn set_scale(&mut self, scale: f64) -> f64 {
        self.state.set_scale(scale)
    }

    /// Direct offset request, clamped; see `ViewportState::set_offset`.
    pub fn set_offset(&mut self, offset: Point) -> Point {
        self.state.set_offset(offset)
    }

    /// Viewport resize event.
    pub fn resize(&mut self, view_width: f64, view_height: f64) {
        self.state.resize(view_width, view_height);
    }

    /// Wheel event. Returns the outcome so callers can refresh a zoom
    /// readout when the scale actually changed.
    pub fn wheel(&mut self, direction: ZoomDirection, pointer: Option<Point>) -> ZoomOutcome {
        zoom::zoom(&mut self.state, direction, pointer)
    }

    pub fn drag_start(&mut self, pointer: Point) {
        self.drag.begin(pointer);
    }

    pub fn drag_move(&mut self, pointer: Point) -> Point {
        self.drag.drag_to(&mut self.state, pointer)
    }

    pub fn drag_end(&mut self) {
        self.drag.end();
    }

    /// Scale the whole raster to fit the viewport (clamped to the legal
    /// range) and return to the origin. Returns the applied scale.
    pub fn fit_to_view(&mut self) -> f64 {
        let fit = (self.state.view_width / self.raster.width() as f64)
            .min(self.state.view_height / self.raster.height() as f64);
        let applied = self.state.set_scale(fit);
        // Jump home first so the clamp sees the origin view, not wherever
        // the previous zoom left the window.
        self.state.offset = Point::default();
        self.state.set_offset(Point::default());
        applied
    }

    /// Produce the next frame for the current state.
    pub fn frame(&self) -> VisibleTile {
        render::render(&self.raster, &self.state)
    }
}
