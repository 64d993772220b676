pub mod pan;
pub mod scroll;
pub mod zoom;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MAX_SCALE, DEFAULT_MIN_VISIBLE_PX, DEFAULT_ZOOM_STEP};
use crate::geom::{Point, Rect};

/// How source pixels are mapped onto device pixels when rendering a tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResampleMethod {
    /// Nearest-neighbour lookup; crisp pixel edges when magnifying.
    #[default]
    Nearest,
    /// Mean over the covered source span; smoother when minifying.
    Area,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Scale multiplier for one zoom-out step; zoom-in uses the reciprocal.
    pub zoom_step: f64,
    /// Smallest on-screen extent (device px) of the image's shorter side.
    pub min_visible_px: f64,
    /// Hard ceiling on device pixels per image pixel.
    pub max_scale: f64,
    pub resample: ResampleMethod,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            zoom_step: DEFAULT_ZOOM_STEP,
            min_visible_px: DEFAULT_MIN_VISIBLE_PX,
            max_scale: DEFAULT_MAX_SCALE,
            resample: ResampleMethod::default(),
        }
    }
}

/// Current view of one raster: scale, viewport size, and scroll offset.
///
/// The scaled image is pinned at the canvas origin; `offset` is the
/// top-left corner of the visible window in canvas coordinates. Plain
/// data plus clamping setters; single-owner (see `session::ViewSession`).
#[derive(Clone, Debug)]
pub struct ViewportState {
    /// Device pixels per image pixel.
    pub scale: f64,
    /// Source raster width, image pixels.
    pub image_width: usize,
    /// Source raster height, image pixels.
    pub image_height: usize,
    /// Viewport width, device pixels.
    pub view_width: f64,
    /// Viewport height, device pixels.
    pub view_height: f64,
    /// Top-left of the visible window, canvas coordinates.
    pub offset: Point,
    pub config: ViewportConfig,
}

impl ViewportState {
    /// Fresh state for a newly loaded raster: scale 1.0, origin offset.
    pub fn new(
        image_width: usize,
        image_height: usize,
        view_width: f64,
        view_height: f64,
        config: ViewportConfig,
    ) -> Self {
        Self {
            scale: 1.0,
            image_width,
            image_height,
            view_width,
            view_height,
            offset: Point::default(),
            config,
        }
    }

    /// Smallest legal scale: the image's shorter side never renders below
    /// the configured pixel floor.
    pub fn min_scale(&self) -> f64 {
        let shorter = self.image_width.min(self.image_height) as f64;
        self.config.min_visible_px / shorter
    }

    pub fn max_scale(&self) -> f64 {
        self.config.max_scale
    }

    /// Image bounding box at the current scale, canvas coordinates.
    pub fn image_bbox(&self) -> Rect {
        Rect::from_size(
            self.image_width as f64 * self.scale,
            self.image_height as f64 * self.scale,
        )
    }

    /// The box the viewport currently shows, canvas coordinates.
    pub fn visible_box(&self) -> Rect {
        Rect::from_origin_size(self.offset, self.view_width, self.view_height)
    }

    /// Scroll region for the current state; recomputed on demand, never
    /// stored.
    pub fn scroll_region(&self) -> Rect {
        scroll::scroll_region(self.image_bbox(), self.visible_box())
    }

    /// Clamp into `[min_scale, max_scale]` and apply. Returns the applied
    /// value so callers can detect a saturated request.
    pub fn set_scale(&mut self, scale: f64) -> f64 {
        // A tiny image under a tight ceiling can push the floor above the
        // ceiling; the ceiling wins then.
        let lo = self.min_scale().min(self.max_scale());
        let clamped = scale.clamp(lo, self.max_scale());
        self.scale = clamped;
        clamped
    }

    /// Clamp into the current scroll region and apply. Returns the
    /// applied offset.
    pub fn set_offset(&mut self, offset: Point) -> Point {
        let clamped = scroll::clamp_offset(
            self.scroll_region(),
            self.view_width,
            self.view_height,
            offset,
        );
        self.offset = clamped;
        clamped
    }

    /// Viewport resize. Zero sizes are tolerated; rendering degenerates
    /// to the empty tile until a real size arrives.
    pub fn resize(&mut self, view_width: f64, view_height: f64) {
        self.view_width = view_width;
        self.view_height = view_height;
        self.offset = scroll::clamp_offset(
            self.scroll_region(),
            self.view_width,
            self.view_height,
            self.offset,
        );
    }
}
