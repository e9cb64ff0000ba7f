//! Handler für Ansicht: Drag, Scroll-Zoom, Viewport-Resize, Reset.

use glam::DVec2;

use crate::app::AppState;

/// Setzt die aktive Ansicht auf die Anfangs-Platzierung zurück.
pub fn reset(state: &mut AppState) {
    let margin = state.options.placement_margin;
    state.active_view_mut().reset(margin);
    log::info!("Ansicht zurückgesetzt: {}", state.active_kind.label());
}

/// Übernimmt eine neue Viewport-Größe und führt alle Zentren proportional
/// nach.
///
/// Wird jeden Frame gemeldet; nur echte Größenänderungen lösen die
/// Umskalierung aus. Alle drei Ansichten folgen der Größe, nicht nur die
/// aktive, damit ein Varianten-Wechsel nach dem Resize konsistent bleibt.
pub fn set_viewport_size(state: &mut AppState, size: [f64; 2]) {
    if state.view.viewport_size == size {
        return;
    }
    for view in state.views_mut() {
        view.resize(size);
    }
    state.view.viewport_size = size;
}

/// Beginnt einen Drag der aktiven Ansicht an der Zeigerposition.
pub fn begin_drag(state: &mut AppState, pos: DVec2) {
    state.active_view_mut().begin_drag(pos);
}

/// Verschiebt das Zentrum der aktiven Ansicht relativ zur Drag-Baseline.
pub fn drag_to(state: &mut AppState, pos: DVec2) {
    state.active_view_mut().drag_to(pos);
}

/// Beendet den laufenden Drag der aktiven Ansicht.
pub fn end_drag(state: &mut AppState) {
    state.active_view_mut().end_drag();
}

/// Wendet ein Scroll-Delta auf den Radius der aktiven Ansicht an.
pub fn apply_scroll(state: &mut AppState, delta: f64) {
    state.active_view_mut().apply_scroll(delta);
}
