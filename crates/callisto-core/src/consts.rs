/// Minimum pixel count (h*w) in a destination tile to use row-level Rayon
/// parallelism during resampling.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Default multiplier applied to the scale on a single zoom-out step.
/// Zoom-in uses the reciprocal (~1.333).
pub const DEFAULT_ZOOM_STEP: f64 = 0.75;

/// Smallest extent (device pixels) the image's shorter side may render at.
/// Zoom-out steps that would cross this floor are rejected.
pub const DEFAULT_MIN_VISIBLE_PX: f64 = 30.0;

/// Default ceiling on device pixels per image pixel. Zoom-in steps that
/// would exceed it are rejected.
pub const DEFAULT_MAX_SCALE: f64 = 32.0;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Percentile for the black point of the display stretch applied on load.
pub const DISPLAY_LOW_PERCENTILE: f32 = 0.001;

/// Percentile for the white point of the display stretch applied on load.
pub const DISPLAY_HIGH_PERCENTILE: f32 = 0.999;

/// Small epsilon to avoid division by zero in floating-point comparisons.
pub const EPSILON: f32 = 1e-10;
