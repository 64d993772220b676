//! Visible-tile extraction: crop the raster to what the viewport can see
//! and resample it to device pixels.

pub mod resample;

use ndarray::{s, Array2};

use crate::geom::Rect;
use crate::raster::Raster;
use crate::viewport::{ResampleMethod, ViewportState};

/// One rendered frame: the image-space rectangle that was sampled, the
/// device-space rectangle to paint it at, and the resampled pixels.
///
/// Created fresh on every render call and handed to the caller for
/// display; nothing is retained.
#[derive(Clone, Debug)]
pub struct VisibleTile {
    /// Sampled sub-rectangle, image coordinates, clamped to the raster.
    pub source_rect: Rect,
    /// Placement inside the viewport, device coordinates.
    pub dest_rect: Rect,
    /// Resampled samples, shape = (dest height, dest width).
    pub pixels: Array2<f32>,
}

impl VisibleTile {
    /// Nothing visible: the viewport is fully off-image or zero-sized.
    /// A normal result, not an error.
    pub fn empty() -> Self {
        Self {
            source_rect: Rect::default(),
            dest_rect: Rect::default(),
            pixels: Array2::zeros((0, 0)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn dest_width(&self) -> usize {
        self.pixels.ncols()
    }

    pub fn dest_height(&self) -> usize {
        self.pixels.nrows()
    }
}

/// Render the visible part of `raster` under `state`.
///
/// Pure function of its inputs: unchanged state yields a bit-identical
/// tile.
pub fn render(raster: &Raster, state: &ViewportState) -> VisibleTile {
    let scale = state.scale;
    let image_bbox = state.image_bbox();
    let visible = state.visible_box();

    let overlap = image_bbox.intersect(&visible);
    if overlap.is_empty() {
        return VisibleTile::empty();
    }

    // Overlap edges relative to the image origin in canvas coordinates.
    let x1 = overlap.left - image_bbox.left;
    let y1 = overlap.top - image_bbox.top;
    let x2 = overlap.right - image_bbox.left;
    let y2 = overlap.bottom - image_bbox.top;

    // Back into image space, clamped to the raster bounds.
    let src_left = (x1 / scale) as usize;
    let src_top = (y1 / scale) as usize;
    let src_right = ((x2 / scale) as usize).min(raster.width());
    let src_bottom = ((y2 / scale) as usize).min(raster.height());

    let dest_w = (x2 - x1) as usize;
    let dest_h = (y2 - y1) as usize;

    if src_right <= src_left || src_bottom <= src_top || dest_w == 0 || dest_h == 0 {
        return VisibleTile::empty();
    }

    let src = raster.data.slice(s![src_top..src_bottom, src_left..src_right]);
    let pixels = match state.config.resample {
        ResampleMethod::Nearest => resample::nearest(&src, dest_h, dest_w),
        ResampleMethod::Area => resample::area(&src, dest_h, dest_w),
    };

    // The tile is painted wherever the image protrudes into the view.
    let dest_left = overlap.left - visible.left;
    let dest_top = overlap.top - visible.top;

    VisibleTile {
        source_rect: Rect::new(
            src_left as f64,
            src_top as f64,
            src_right as f64,
            src_bottom as f64,
        ),
        dest_rect: Rect::new(
            dest_left,
            dest_top,
            dest_left + dest_w as f64,
            dest_top + dest_h as f64,
        ),
        pixels,
    }
}
