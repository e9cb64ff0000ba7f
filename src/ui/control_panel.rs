//! Control-Panel für Rekursionstiefe und Fraktal-Auswahl.

use crate::app::{AppIntent, AppState};
use crate::core::FractalKind;

/// Rendert das Control-Panel und gibt erzeugte Events zurück.
pub fn render_control_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("control_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Iterationen:");
            let mut depth = state.depth;
            if ui
                .add(egui::DragValue::new(&mut depth).range(0..=state.options.max_depth))
                .changed()
            {
                events.push(AppIntent::DepthChanged { depth });
            }

            ui.separator();

            ui.label("Fraktal:");
            egui::ComboBox::from_id_salt("fractal_kind")
                .selected_text(state.active_kind.label())
                .width(185.0)
                .show_ui(ui, |ui| {
                    for kind in FractalKind::ALL {
                        if ui
                            .selectable_label(state.active_kind == kind, kind.label())
                            .clicked()
                        {
                            events.push(AppIntent::FractalSelected { kind });
                        }
                    }
                });

            ui.separator();

            ui.label("Ziehen verschiebt, Mausrad skaliert");
        });
    });

    events
}
