//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Die Segmentfolge wird pro Frame neu erzeugt; die Generatoren sind
/// zustandslos, eine neue Szene ersetzt die vorherige vollständig.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    let view = state.active_view();
    RenderScene {
        segments: view.outline(state.depth),
        kind: state.active_kind,
        depth: state.depth,
        viewport_size,
        options: state.options.clone(),
    }
}
