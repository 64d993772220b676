//! Central panel: translates egui pointer events into the engine's
//! abstract gestures and paints the resulting tile.

use callisto_core::geom::Point;
use callisto_core::viewport::zoom::{ZoomDirection, ZoomOutcome};

use crate::app::CallistoApp;

pub fn show(ctx: &egui::Context, app: &mut CallistoApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        if app.session.is_none() {
            show_placeholder(ui);
            return;
        }

        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

        handle_resize(app, rect);
        handle_zoom(ui, &response, app, rect);
        handle_pan(&response, app, rect);

        if response.double_clicked() {
            if let Some(session) = app.session.as_mut() {
                session.fit_to_view();
                app.needs_redraw = true;
            }
        }

        app.refresh_texture(ui.ctx());
        draw_tile(ui, app, rect);
        draw_viewing_label(ui, rect, app);
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

/// Device coordinates relative to the panel's top-left corner, which is
/// what the engine calls pointer position.
fn to_view(pos: egui::Pos2, rect: egui::Rect) -> Point {
    Point::new((pos.x - rect.left()) as f64, (pos.y - rect.top()) as f64)
}

fn handle_resize(app: &mut CallistoApp, rect: egui::Rect) {
    let Some(session) = app.session.as_mut() else {
        return;
    };
    let (w, h) = (rect.width() as f64, rect.height() as f64);
    let state = session.state();
    if state.view_width != w || state.view_height != h {
        session.resize(w, h);
        app.needs_redraw = true;
    }
}

fn handle_zoom(ui: &egui::Ui, response: &egui::Response, app: &mut CallistoApp, rect: egui::Rect) {
    let scroll_delta = ui.input(|i| i.smooth_scroll_delta.y);
    if scroll_delta == 0.0 || !response.hovered() {
        return;
    }

    // One wheel event is one step; only the sign matters here.
    let direction = if scroll_delta > 0.0 {
        ZoomDirection::In
    } else {
        ZoomDirection::Out
    };
    let pointer = ui
        .input(|i| i.pointer.hover_pos())
        .map(|pos| to_view(pos, rect));

    let Some(session) = app.session.as_mut() else {
        return;
    };
    if let ZoomOutcome::Applied { .. } = session.wheel(direction, pointer) {
        app.needs_redraw = true;
    }
}

fn handle_pan(response: &egui::Response, app: &mut CallistoApp, rect: egui::Rect) {
    let Some(session) = app.session.as_mut() else {
        return;
    };

    if response.drag_started() {
        if let Some(pos) = response.interact_pointer_pos() {
            session.drag_start(to_view(pos, rect));
        }
    } else if response.dragged() {
        if let Some(pos) = response.interact_pointer_pos() {
            let before = session.state().offset;
            let after = session.drag_move(to_view(pos, rect));
            if after != before {
                app.needs_redraw = true;
            }
        }
    } else if response.drag_stopped() {
        session.drag_end();
    }
}

fn draw_tile(ui: &egui::Ui, app: &CallistoApp, rect: egui::Rect) {
    let (Some(texture), Some(dest)) = (&app.texture, app.tile_dest) else {
        return;
    };

    let dest = egui::Rect::from_min_size(
        rect.left_top() + egui::vec2(dest.left as f32, dest.top as f32),
        egui::vec2(dest.width() as f32, dest.height() as f32),
    );
    ui.painter().image(
        texture.id(),
        dest,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn draw_viewing_label(ui: &egui::Ui, rect: egui::Rect, app: &CallistoApp) {
    let Some(name) = app
        .ui_state
        .file_path
        .as_ref()
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
    else {
        return;
    };

    let label_pos = rect.left_top() + egui::vec2(8.0, 8.0);
    ui.painter().text(
        label_pos,
        egui::Align2::LEFT_TOP,
        name,
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(200),
    );
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open an image to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
