mod common;

use approx::assert_abs_diff_eq;
use image::{GrayImage, Luma};
use tempfile::tempdir;

use callisto_core::error::CallistoError;
use callisto_core::io::{load_raster, save_tile, save_tile_png};
use callisto_core::render::{render, VisibleTile};
use callisto_core::viewport::{ViewportConfig, ViewportState};

use common::{gradient_raster, make_state};

#[test]
fn test_load_normalizes_to_full_range() {
    // Midtone-only source: samples 100..200 of 255.
    let dir = tempdir().unwrap();
    let path = dir.path().join("midtones.png");
    let mut img = GrayImage::new(50, 40);
    for row in 0..40 {
        for col in 0..50 {
            img.put_pixel(col, row, Luma([(100 + (row + col) % 100) as u8]));
        }
    }
    img.save(&path).unwrap();

    let raster = load_raster(&path).unwrap();
    assert_eq!(raster.width(), 50);
    assert_eq!(raster.height(), 40);
    assert_eq!(raster.info.bit_depth, 8);
    assert_eq!(raster.info.filename.as_deref(), Some(path.as_path()));

    // The display stretch spreads the midtones over the whole range.
    let min = raster.data.iter().cloned().fold(f32::INFINITY, f32::min);
    let max = raster.data.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    assert_abs_diff_eq!(min, 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(max, 1.0, epsilon = 1e-6);
}

#[test]
fn test_tile_save_and_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tile.png");

    let raster = gradient_raster(640, 480);
    let state = make_state(640, 480, 320.0, 240.0);
    let tile = render(&raster, &state);

    save_tile_png(&tile, &path).unwrap();

    let reloaded = load_raster(&path).unwrap();
    assert_eq!(reloaded.width(), 320);
    assert_eq!(reloaded.height(), 240);
}

#[test]
fn test_save_dispatches_on_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tile.tif");

    let raster = gradient_raster(64, 48);
    let state = ViewportState::new(64, 48, 64.0, 48.0, ViewportConfig::default());
    let tile = render(&raster, &state);

    save_tile(&tile, &path).unwrap();

    // 16-bit TIFF comes back as a 16-bit gray source.
    let reloaded = load_raster(&path).unwrap();
    assert_eq!(reloaded.info.bit_depth, 16);
    assert_eq!(reloaded.width(), 64);
}

#[test]
fn test_saving_empty_tile_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.png");
    let err = save_tile_png(&VisibleTile::empty(), &path).unwrap_err();
    assert!(matches!(err, CallistoError::EmptyTile));
}
