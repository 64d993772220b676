use std::path::Path;
use std::sync::mpsc;
use std::sync::Arc;

use callisto_core::io::load_raster;

use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the loader thread and return the command channel into it.
///
/// Decoding large rasters is the one long-running operation in the app;
/// it never touches viewport state directly, it only hands finished
/// rasters back over the result channel.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("callisto-loader".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn loader thread");

    cmd_tx
}

pub fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_log(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Log { message: msg.into() });
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Error { message: msg.into() });
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadImage { path, generation } => {
                handle_load_image(&path, generation, &tx, &ctx);
            }
        }
    }
}

fn handle_load_image(
    path: &Path,
    generation: u64,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match load_raster(path) {
        Ok(raster) => {
            send_log(
                tx,
                ctx,
                format!(
                    "Loaded {} ({}x{}, {}-bit)",
                    path.display(),
                    raster.width(),
                    raster.height(),
                    raster.info.bit_depth
                ),
            );
            send(
                tx,
                ctx,
                WorkerResult::ImageLoaded {
                    raster: Arc::new(raster),
                    generation,
                },
            );
        }
        Err(e) => send_error(tx, ctx, format!("Failed to load {}: {e}", path.display())),
    }
}
