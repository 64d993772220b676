use crate::app::CallistoApp;

pub fn show(ctx: &egui::Context, app: &mut CallistoApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area — fixed height for 3 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 3 empty lines to prevent layout jump.
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            if let Some(session) = &app.session {
                let raster = session.raster();
                ui.label(format!("{}x{}", raster.width(), raster.height()));
                ui.separator();
                ui.label(format!("Zoom: {:.0}%", session.scale() * 100.0));
                ui.separator();
            }
            if app.ui_state.loading {
                ui.spinner();
                ui.label("Loading...");
                ui.separator();
            }
            if let Some(ref path) = app.ui_state.file_path {
                ui.label(path.display().to_string());
            }
        });
        ui.add_space(2.0);
    });
}
