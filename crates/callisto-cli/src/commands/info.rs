use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use callisto_core::io::load_raster;
use callisto_core::viewport::ViewportConfig;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let raster = load_raster(&args.file)
        .with_context(|| format!("Failed to open {}", args.file.display()))?;

    let config = ViewportConfig::default();
    let shorter = raster.width().min(raster.height()) as f64;
    let min_scale = config.min_visible_px / shorter;

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", raster.width(), raster.height());
    println!("Bit depth:   {}", raster.info.bit_depth);

    let sample_mb = (raster.width() * raster.height() * 4) as f64 / (1024.0 * 1024.0);
    println!("Sample data: {:.1} MB", sample_mb);

    println!("Min scale:   {:.4} ({}px floor)", min_scale, config.min_visible_px);
    println!("Max scale:   {:.1}", config.max_scale);

    Ok(())
}
