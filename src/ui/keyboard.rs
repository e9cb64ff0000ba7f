//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;
use crate::core::FractalKind;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// `depth` ist die aktuelle Rekursionstiefe; die Obergrenze zieht das
/// Intent-Mapping.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui, depth: u32) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (key_1, key_2, key_3, key_plus, key_minus, key_r) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::Num1),
            i.key_pressed(egui::Key::Num2),
            i.key_pressed(egui::Key::Num3),
            i.key_pressed(egui::Key::Plus),
            i.key_pressed(egui::Key::Minus),
            i.key_pressed(egui::Key::R),
        )
    });

    if key_1 {
        events.push(AppIntent::FractalSelected {
            kind: FractalKind::KochSnowflake,
        });
    }
    if key_2 {
        events.push(AppIntent::FractalSelected {
            kind: FractalKind::IceTriangle,
        });
    }
    if key_3 {
        events.push(AppIntent::FractalSelected {
            kind: FractalKind::IceRectangle,
        });
    }

    if key_plus {
        events.push(AppIntent::DepthChanged { depth: depth + 1 });
    }
    if key_minus {
        events.push(AppIntent::DepthChanged {
            depth: depth.saturating_sub(1),
        });
    }

    if key_r {
        events.push(AppIntent::ResetViewRequested);
    }

    events
}
