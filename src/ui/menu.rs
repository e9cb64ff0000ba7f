//! Top-Menü (Datei, Ansicht).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, _state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Datei", |ui| {
                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Ansicht", |ui| {
                if ui.button("Zoom In").clicked() {
                    events.push(AppIntent::ZoomInRequested);
                    ui.close();
                }

                if ui.button("Zoom Out").clicked() {
                    events.push(AppIntent::ZoomOutRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Ansicht zurücksetzen (R)").clicked() {
                    events.push(AppIntent::ResetViewRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
