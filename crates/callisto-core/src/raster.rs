use ndarray::Array2;
use std::path::PathBuf;

use crate::error::{CallistoError, Result};

/// A single grayscale raster as handed over by the loading collaborator.
/// Sample values are f32 in [0.0, 1.0], row-major, shape = (height, width).
///
/// Immutable for the lifetime of a viewing session; a newly loaded file
/// replaces the whole raster rather than mutating it in place.
#[derive(Clone, Debug)]
pub struct Raster {
    pub data: Array2<f32>,
    pub info: RasterInfo,
}

impl Raster {
    /// Wrap a pixel buffer, rejecting degenerate dimensions. A viewport
    /// must never be constructed over a zero-sized image.
    pub fn new(data: Array2<f32>) -> Result<Self> {
        if data.nrows() == 0 || data.ncols() == 0 {
            return Err(CallistoError::InvalidDimensions {
                width: data.ncols() as u32,
                height: data.nrows() as u32,
            });
        }
        Ok(Self {
            data,
            info: RasterInfo::default(),
        })
    }

    pub fn with_info(mut self, info: RasterInfo) -> Self {
        self.info = info;
        self
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }
}

/// Metadata about the source file, for title bars and info readouts.
#[derive(Clone, Debug)]
pub struct RasterInfo {
    pub filename: Option<PathBuf>,
    /// Original bit depth before conversion to f32 (8 or 16).
    pub bit_depth: u8,
}

impl Default for RasterInfo {
    fn default() -> Self {
        Self {
            filename: None,
            bit_depth: 8,
        }
    }
}
