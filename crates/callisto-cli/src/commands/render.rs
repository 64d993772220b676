use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Args;
use console::Style;
use tracing::debug;

use callisto_core::geom::Point;
use callisto_core::io::{load_raster, save_tile};
use callisto_core::session::ViewSession;
use callisto_core::viewport::ViewportConfig;

#[derive(Args)]
pub struct RenderArgs {
    /// Input image file (PNG or TIFF)
    pub file: PathBuf,

    /// Viewport width in device pixels
    #[arg(long, default_value = "800")]
    pub width: f64,

    /// Viewport height in device pixels
    #[arg(long, default_value = "600")]
    pub height: f64,

    /// Device pixels per image pixel (clamped to the legal range)
    #[arg(long)]
    pub scale: Option<f64>,

    /// Scroll offset as X,Y in canvas coordinates (clamped to the
    /// scroll region)
    #[arg(long)]
    pub offset: Option<String>,

    /// Fit the whole image into the viewport instead of using --scale
    #[arg(long)]
    pub fit: bool,

    /// Viewport config TOML (defaults apply when omitted)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output file path
    #[arg(short, long, default_value = "view.png")]
    pub output: PathBuf,
}

pub fn run(args: &RenderArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config {}", path.display()))?
        }
        None => ViewportConfig::default(),
    };
    debug!(?config, "viewport config");

    let raster = load_raster(&args.file)
        .with_context(|| format!("Failed to open {}", args.file.display()))?;

    let mut session = ViewSession::new(Arc::new(raster), args.width, args.height, config);

    if args.fit {
        session.fit_to_view();
    } else if let Some(scale) = args.scale {
        session.set_scale(scale);
    }
    if let Some(ref offset) = args.offset {
        session.set_offset(parse_offset(offset)?);
    }

    let tile = session.frame();
    if tile.is_empty() {
        bail!("Nothing visible at that offset and scale");
    }

    save_tile(&tile, &args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;

    let s = Style::new().green();
    println!(
        "{} {} ({}x{} at {:.0}%, source {}..{} x {}..{})",
        s.apply_to("Rendered"),
        args.output.display(),
        tile.dest_width(),
        tile.dest_height(),
        session.scale() * 100.0,
        tile.source_rect.left,
        tile.source_rect.right,
        tile.source_rect.top,
        tile.source_rect.bottom,
    );

    Ok(())
}

fn parse_offset(raw: &str) -> Result<Point> {
    let Some((x, y)) = raw.split_once(',') else {
        bail!("Offset must be X,Y (got {raw:?})");
    };
    let x: f64 = x.trim().parse().context("Offset X is not a number")?;
    let y: f64 = y.trim().parse().context("Offset Y is not a number")?;
    Ok(Point::new(x, y))
}
