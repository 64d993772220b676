use thiserror::Error;

#[derive(Error, Debug)]
pub enum CallistoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Empty tile has no pixels to save")]
    EmptyTile,
}

pub type Result<T> = std::result::Result<T, CallistoError>;
