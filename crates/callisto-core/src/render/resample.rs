//! Resampling kernels mapping a cropped source region onto a destination
//! tile of device pixels.

use ndarray::{Array2, ArrayView2};
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;

/// Nearest-neighbour resample of `src` to `dst_h` x `dst_w`.
///
/// Samples at destination pixel centers, so a 1:1 mapping reproduces the
/// source exactly.
pub fn nearest(src: &ArrayView2<'_, f32>, dst_h: usize, dst_w: usize) -> Array2<f32> {
    let (src_h, src_w) = src.dim();
    let row_scale = src_h as f64 / dst_h as f64;
    let col_scale = src_w as f64 / dst_w as f64;

    let sample_row = |row: usize| -> Vec<f32> {
        let sr = (((row as f64 + 0.5) * row_scale) as usize).min(src_h - 1);
        (0..dst_w)
            .map(|col| {
                let sc = (((col as f64 + 0.5) * col_scale) as usize).min(src_w - 1);
                src[[sr, sc]]
            })
            .collect()
    };

    let rows: Vec<Vec<f32>> = if dst_h * dst_w >= PARALLEL_PIXEL_THRESHOLD {
        (0..dst_h).into_par_iter().map(sample_row).collect()
    } else {
        (0..dst_h).map(sample_row).collect()
    };

    collect_rows(rows, dst_h, dst_w)
}

/// Area-average resample: each destination pixel is the mean of the source
/// block it covers. Degenerates to a single-sample lookup when magnifying.
pub fn area(src: &ArrayView2<'_, f32>, dst_h: usize, dst_w: usize) -> Array2<f32> {
    let (src_h, src_w) = src.dim();
    let row_scale = src_h as f64 / dst_h as f64;
    let col_scale = src_w as f64 / dst_w as f64;

    let sample_row = |row: usize| -> Vec<f32> {
        let r0 = ((row as f64 * row_scale) as usize).min(src_h - 1);
        let r1 = (((row + 1) as f64 * row_scale).ceil() as usize)
            .clamp(r0 + 1, src_h);
        (0..dst_w)
            .map(|col| {
                let c0 = ((col as f64 * col_scale) as usize).min(src_w - 1);
                let c1 = (((col + 1) as f64 * col_scale).ceil() as usize)
                    .clamp(c0 + 1, src_w);

                let mut sum = 0.0f32;
                for r in r0..r1 {
                    for c in c0..c1 {
                        sum += src[[r, c]];
                    }
                }
                sum / ((r1 - r0) * (c1 - c0)) as f32
            })
            .collect()
    };

    let rows: Vec<Vec<f32>> = if dst_h * dst_w >= PARALLEL_PIXEL_THRESHOLD {
        (0..dst_h).into_par_iter().map(sample_row).collect()
    } else {
        (0..dst_h).map(sample_row).collect()
    };

    collect_rows(rows, dst_h, dst_w)
}

fn collect_rows(rows: Vec<Vec<f32>>, dst_h: usize, dst_w: usize) -> Array2<f32> {
    let mut out = Array2::<f32>::zeros((dst_h, dst_w));
    for (row, row_data) in rows.into_iter().enumerate() {
        for (col, val) in row_data.into_iter().enumerate() {
            out[[row, col]] = val;
        }
    }
    out
}
