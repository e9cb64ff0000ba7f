//! Handler für Fraktal-Auswahl und Rekursionstiefe.

use crate::app::AppState;
use crate::core::FractalKind;

/// Wechselt die aktive Fraktal-Variante.
///
/// Die Ansichten der anderen Varianten bleiben unberührt; Zentrum und
/// Radius jeder Variante überleben den Wechsel.
pub fn set_fractal(state: &mut AppState, kind: FractalKind) {
    if state.active_kind == kind {
        return;
    }
    state.active_view_mut().end_drag();
    state.active_kind = kind;
    log::info!("Fraktal gewechselt: {}", kind.label());
}

/// Setzt die gemeinsame Rekursionstiefe.
///
/// Der Wert ist an der Intent-Grenze bereits auf `[0, max_depth]`
/// begrenzt worden.
pub fn set_depth(state: &mut AppState, depth: u32) {
    state.depth = depth;
    log::debug!("Rekursionstiefe: {}", depth);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    #[test]
    fn switching_kind_keeps_the_other_views_untouched() {
        let mut state = AppState::new();
        state.active_view_mut().begin_drag(DVec2::ZERO);
        state.active_view_mut().drag_to(DVec2::new(100.0, 0.0));
        let koch_center = state.active_view().center;

        set_fractal(&mut state, FractalKind::IceRectangle);
        assert_eq!(state.active_kind, FractalKind::IceRectangle);

        set_fractal(&mut state, FractalKind::KochSnowflake);
        assert_eq!(state.active_view().center, koch_center);
    }

    #[test]
    fn switching_kind_ends_a_running_drag() {
        let mut state = AppState::new();
        state.active_view_mut().begin_drag(DVec2::ZERO);

        set_fractal(&mut state, FractalKind::IceTriangle);
        set_fractal(&mut state, FractalKind::KochSnowflake);

        // Drag-Baseline wurde verworfen, Bewegungen wirken nicht mehr
        let before = state.active_view().center;
        state.active_view_mut().drag_to(DVec2::new(500.0, 500.0));
        assert_eq!(state.active_view().center, before);
    }

    #[test]
    fn set_depth_overwrites_the_shared_depth() {
        let mut state = AppState::new();
        assert_eq!(state.depth, 3);

        set_depth(&mut state, 7);
        assert_eq!(state.depth, 7);
    }
}
