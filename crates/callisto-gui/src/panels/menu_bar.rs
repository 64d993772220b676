use anyhow::Context as _;

use crate::app::CallistoApp;
use crate::messages::WorkerResult;

pub fn show(ctx: &egui::Context, app: &mut CallistoApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui
                    .add(
                        egui::Button::new("Open...")
                            .shortcut_text(ctx.format_shortcut(&open_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    open_file(app);
                }

                ui.separator();

                if ui.button("Import Config...").clicked() {
                    ui.close();
                    import_config(app);
                }

                if ui.button("Export Config...").clicked() {
                    ui.close();
                    export_config(app);
                }

                ui.separator();

                let quit_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui
                    .add(
                        egui::Button::new("Quit")
                            .shortcut_text(ctx.format_shortcut(&quit_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                let has_session = app.session.is_some();

                if ui
                    .add_enabled(has_session, egui::Button::new("Fit to View"))
                    .clicked()
                {
                    ui.close();
                    if let Some(session) = app.session.as_mut() {
                        session.fit_to_view();
                        app.needs_redraw = true;
                    }
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| {
            i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::COMMAND,
                egui::Key::O,
            ))
        }) {
            open_file(app);
        }
        if ctx.input_mut(|i| {
            i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::COMMAND,
                egui::Key::Q,
            ))
        }) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn open_file(app: &mut CallistoApp) {
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "tif", "tiff", "jpg", "jpeg", "bmp"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let _ = result_tx.send(WorkerResult::FileChosen { path });
        }
    });
}

fn import_config(app: &mut CallistoApp) {
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        let config = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
            .and_then(|path| {
                let content = std::fs::read_to_string(&path).ok()?;
                toml::from_str(&content).ok()
            });
        if let Some(config) = config {
            let _ = result_tx.send(WorkerResult::ConfigImported { config });
        }
    });
}

fn export_config(app: &mut CallistoApp) {
    let config = app.config.clone();
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("callisto_config.toml")
            .save_file()
        {
            let result = toml::to_string_pretty(&config)
                .context("serialize viewport config")
                .and_then(|content| {
                    std::fs::write(&path, content)
                        .with_context(|| format!("write {}", path.display()))
                });
            let message = match result {
                Ok(()) => WorkerResult::Log {
                    message: format!("Config exported to {}", path.display()),
                },
                Err(e) => WorkerResult::Error {
                    message: format!("Config export failed: {e:#}"),
                },
            };
            let _ = result_tx.send(message);
        }
    });
}
