use std::path::PathBuf;
use std::sync::Arc;

use callisto_core::raster::Raster;
use callisto_core::viewport::ViewportConfig;

/// Commands sent from the UI thread to the loader thread.
pub enum WorkerCommand {
    /// Decode an image file into a display-ready raster.
    ///
    /// `generation` identifies the request; a newer request supersedes
    /// any load still in flight.
    LoadImage { path: PathBuf, generation: u64 },
}

/// Results sent back to the UI thread (from the loader thread or from
/// dialog threads).
pub enum WorkerResult {
    /// A finished raster. Dropped by the app if `generation` no longer
    /// matches the latest request.
    ImageLoaded {
        raster: Arc<Raster>,
        generation: u64,
    },

    /// The user picked a file in the Open dialog.
    FileChosen { path: PathBuf },

    /// A viewport config was read from a TOML file.
    ConfigImported { config: ViewportConfig },

    Error { message: String },
    Log { message: String },
}
