//! Image-file loading and saving for the viewer surfaces.
//!
//! Decodes a file into a display-normalized luminance [`Raster`]. The
//! stretch applied here is a fixed percentile mapping; choosing anything
//! smarter belongs to the caller, the engine only ever sees samples in
//! [0.0, 1.0].

use std::path::Path;

use image::{DynamicImage, GrayImage, ImageFormat, Luma};
use ndarray::Array2;
use tracing::info;

use crate::consts::{
    DISPLAY_HIGH_PERCENTILE, DISPLAY_LOW_PERCENTILE, EPSILON, LUMINANCE_B, LUMINANCE_G,
    LUMINANCE_R,
};
use crate::error::{CallistoError, Result};
use crate::raster::{Raster, RasterInfo};
use crate::render::VisibleTile;

/// Load an image file into a normalized luminance raster.
pub fn load_raster(path: &Path) -> Result<Raster> {
    let img = image::open(path)?;
    let bit_depth = match img {
        DynamicImage::ImageLuma16(_)
        | DynamicImage::ImageLumaA16(_)
        | DynamicImage::ImageRgb16(_)
        | DynamicImage::ImageRgba16(_) => 16,
        _ => 8,
    };

    let (w, h) = (img.width() as usize, img.height() as usize);
    let mut data = Array2::<f32>::zeros((h, w));

    match img {
        DynamicImage::ImageLuma8(gray) => {
            for row in 0..h {
                for col in 0..w {
                    data[[row, col]] =
                        gray.get_pixel(col as u32, row as u32).0[0] as f32 / 255.0;
                }
            }
        }
        DynamicImage::ImageLuma16(gray) => {
            for row in 0..h {
                for col in 0..w {
                    data[[row, col]] =
                        gray.get_pixel(col as u32, row as u32).0[0] as f32 / 65535.0;
                }
            }
        }
        other => {
            let rgb = other.to_rgb32f();
            for row in 0..h {
                for col in 0..w {
                    let p = rgb.get_pixel(col as u32, row as u32).0;
                    data[[row, col]] =
                        LUMINANCE_R * p[0] + LUMINANCE_G * p[1] + LUMINANCE_B * p[2];
                }
            }
        }
    }

    stretch_for_display(&mut data);
    info!(path = %path.display(), width = w, height = h, bit_depth, "raster loaded");

    Ok(Raster::new(data)?.with_info(RasterInfo {
        filename: Some(path.to_path_buf()),
        bit_depth,
    }))
}

/// Percentile-based display stretch, in place: maps the sample range
/// between the black and white points onto [0.0, 1.0].
fn stretch_for_display(data: &mut Array2<f32>) {
    let mut sorted: Vec<f32> = data.iter().copied().collect();
    if sorted.is_empty() {
        return;
    }
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let n = sorted.len();
    let lo_idx = ((n as f32 * DISPLAY_LOW_PERCENTILE) as usize).min(n - 1);
    let hi_idx = ((n as f32 * DISPLAY_HIGH_PERCENTILE) as usize).min(n - 1);
    let black = sorted[lo_idx];
    let white = sorted[hi_idx];

    let range = white - black;
    let range = if range.abs() < EPSILON { 1.0 } else { range };
    data.mapv_inplace(|v| ((v - black) / range).clamp(0.0, 1.0));
}

/// Save a rendered tile as 8-bit grayscale PNG.
pub fn save_tile_png(tile: &VisibleTile, path: &Path) -> Result<()> {
    if tile.is_empty() {
        return Err(CallistoError::EmptyTile);
    }

    let h = tile.dest_height();
    let w = tile.dest_width();

    let mut img = GrayImage::new(w as u32, h as u32);
    for row in 0..h {
        for col in 0..w {
            let val = (tile.pixels[[row, col]].clamp(0.0, 1.0) * 255.0) as u8;
            img.put_pixel(col as u32, row as u32, Luma([val]));
        }
    }

    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save a rendered tile as 16-bit grayscale TIFF.
pub fn save_tile_tiff(tile: &VisibleTile, path: &Path) -> Result<()> {
    if tile.is_empty() {
        return Err(CallistoError::EmptyTile);
    }

    let h = tile.dest_height();
    let w = tile.dest_width();

    let mut pixels: Vec<u16> = Vec::with_capacity(h * w);
    for row in 0..h {
        for col in 0..w {
            let val = (tile.pixels[[row, col]].clamp(0.0, 1.0) * 65535.0) as u16;
            pixels.push(val);
        }
    }

    let img = image::ImageBuffer::<Luma<u16>, Vec<u16>>::from_raw(w as u32, h as u32, pixels)
        .expect("buffer size matches dimensions");
    img.save(path)?;
    Ok(())
}

/// Save a tile, choosing the format from the file extension.
pub fn save_tile(tile: &VisibleTile, path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("tiff" | "tif") => save_tile_tiff(tile, path),
        _ => save_tile_png(tile, path),
    }
}
