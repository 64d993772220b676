use ndarray::Array2;

use callisto_core::raster::Raster;
use callisto_core::viewport::{ViewportConfig, ViewportState};

/// Raster whose sample encodes its own position, so tests can verify
/// exactly which source pixels ended up in a tile.
#[allow(dead_code)]
pub fn gradient_raster(width: usize, height: usize) -> Raster {
    let denom = (width * height) as f32;
    let data = Array2::from_shape_fn((height, width), |(row, col)| {
        (row * width + col) as f32 / denom
    });
    Raster::new(data).expect("gradient raster dimensions")
}

/// Viewport state over a synthetic image with the default config.
#[allow(dead_code)]
pub fn make_state(
    image_width: usize,
    image_height: usize,
    view_width: f64,
    view_height: f64,
) -> ViewportState {
    ViewportState::new(
        image_width,
        image_height,
        view_width,
        view_height,
        ViewportConfig::default(),
    )
}
