//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::shape;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(state.active_kind.label());

            ui.separator();

            ui.label(format!("Tiefe: {}", state.depth));

            ui.separator();

            ui.label(format!(
                "Segmente: {}",
                shape::outline_segment_count(state.active_kind, state.depth)
            ));

            ui.separator();

            let view = state.active_view();
            ui.label(format!(
                "Radius: {:.1} | Zentrum: ({:.1}, {:.1})",
                view.radius, view.center.x, view.center.y
            ));

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
