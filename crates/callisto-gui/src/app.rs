use std::path::PathBuf;
use std::sync::mpsc;

use tracing::warn;

use callisto_core::geom::Rect;
use callisto_core::session::ViewSession;
use callisto_core::viewport::ViewportConfig;

use crate::convert::tile_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::state::UIState;
use crate::worker;

pub struct CallistoApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub ui_state: UIState,
    /// Open viewing session; `None` until the first image finishes loading.
    pub session: Option<ViewSession>,
    pub config: ViewportConfig,
    pub texture: Option<egui::TextureHandle>,
    /// Placement of the current texture inside the viewport panel.
    pub tile_dest: Option<Rect>,
    /// Session state changed since the texture was last refreshed.
    pub needs_redraw: bool,
    pub show_about: bool,
}

impl CallistoApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx.clone(), ctx.clone());

        Self {
            cmd_tx,
            result_tx,
            result_rx,
            ui_state: UIState::default(),
            session: None,
            config: ViewportConfig::default(),
            texture: None,
            tile_dest: None,
            needs_redraw: false,
            show_about: false,
        }
    }

    /// Ask the loader for a new image. Bumping the generation supersedes
    /// any load still in flight; its result will be dropped on arrival.
    pub fn request_load(&mut self, path: PathBuf) {
        self.ui_state.load_generation += 1;
        self.ui_state.loading = true;
        self.ui_state.add_log(format!("Loading {}...", path.display()));
        let _ = self.cmd_tx.send(WorkerCommand::LoadImage {
            path,
            generation: self.ui_state.load_generation,
        });
    }

    /// Drain all pending results from the loader and dialog threads.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImageLoaded { raster, generation } => {
                    if generation != self.ui_state.load_generation {
                        warn!(generation, "dropping superseded load result");
                        continue;
                    }
                    self.ui_state.loading = false;
                    self.ui_state.file_path = raster.info.filename.clone();

                    if let Some(name) = raster
                        .info
                        .filename
                        .as_ref()
                        .and_then(|p| p.file_name())
                        .and_then(|n| n.to_str())
                    {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Title(format!(
                            "Callisto - {name}"
                        )));
                    }

                    match self.session.take() {
                        Some(mut session) => {
                            session.replace_raster(raster);
                            self.session = Some(session);
                        }
                        None => {
                            // Viewport dimensions arrive with the first
                            // panel pass; start from zero until then.
                            self.session = Some(ViewSession::new(
                                raster,
                                0.0,
                                0.0,
                                self.config.clone(),
                            ));
                        }
                    }
                    self.needs_redraw = true;
                }
                WorkerResult::FileChosen { path } => {
                    self.request_load(path);
                }
                WorkerResult::ConfigImported { config } => {
                    self.config = config.clone();
                    if let Some(session) = self.session.as_mut() {
                        let raster = session.raster().clone();
                        let (vw, vh) = (session.state().view_width, session.state().view_height);
                        *session = ViewSession::new(raster, vw, vh, config);
                        self.needs_redraw = true;
                    }
                    self.ui_state.add_log("Viewport config imported".into());
                }
                WorkerResult::Error { message } => {
                    self.ui_state.loading = false;
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    /// Re-render the visible tile into the texture if anything changed.
    pub fn refresh_texture(&mut self, ctx: &egui::Context) {
        if !self.needs_redraw {
            return;
        }
        self.needs_redraw = false;

        let Some(session) = self.session.as_ref() else {
            return;
        };

        let tile = session.frame();
        if tile.is_empty() {
            self.texture = None;
            self.tile_dest = None;
            return;
        }

        let image = tile_to_color_image(&tile);
        self.texture = Some(ctx.load_texture("viewport", image, egui::TextureOptions::NEAREST));
        self.tile_dest = Some(tile.dest_rect);
    }
}

impl eframe::App for CallistoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);

        // About dialog
        if self.show_about {
            egui::Window::new("About Callisto")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label("Callisto");
                    ui.label("Pan/zoom viewer for large astronomical rasters");
                    ui.add_space(8.0);
                    if ui.button("Close").clicked() {
                        self.show_about = false;
                    }
                });
        }
    }
}
