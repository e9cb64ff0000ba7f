//! Viewport-Input-Handling: Maus-Events und Scroll → AppIntent.

use glam::DVec2;

use crate::app::AppIntent;

use super::keyboard;

/// Verwaltet den Input-Zustand für den Viewport (laufender Drag).
#[derive(Default)]
pub struct InputState {
    /// Primär-Drag aktiv (zwischen Press und Release)
    dragging: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self { dragging: false }
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Drag-Positionen werden absolut gemeldet; die Verschiebung relativ
    /// zum Drückpunkt berechnet der View-Zustand selbst.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        depth: u32,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        // Keyboard-Shortcuts (ausgelagert in keyboard.rs)
        events.extend(keyboard::collect_keyboard_intents(ui, depth));

        if response.drag_started_by(egui::PointerButton::Primary) {
            // press_origin() liefert die exakte Klickposition vor der
            // Drag-Schwelle, interact_pointer_pos() erst die Position danach
            if let Some(pointer_pos) = ui.input(|i| i.pointer.press_origin()) {
                events.push(AppIntent::PointerPressed {
                    pos: to_local(pointer_pos, response),
                });
                self.dragging = true;
            }
        }

        if self.dragging && response.dragged_by(egui::PointerButton::Primary) {
            if let Some(pointer_pos) = response.interact_pointer_pos() {
                events.push(AppIntent::PointerDragged {
                    pos: to_local(pointer_pos, response),
                });
            }
        }

        if response.drag_stopped_by(egui::PointerButton::Primary) {
            events.push(AppIntent::PointerReleased);
            self.dragging = false;
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll != 0.0 {
                events.push(AppIntent::Scrolled {
                    delta: f64::from(scroll),
                });
            }
        }

        events
    }
}

/// Rechnet eine Bildschirmposition in lokale Viewport-Koordinaten um.
fn to_local(pointer_pos: egui::Pos2, response: &egui::Response) -> DVec2 {
    let local = pointer_pos - response.rect.min;
    DVec2::new(f64::from(local.x), f64::from(local.y))
}
