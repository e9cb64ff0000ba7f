//! Handler für Anwendungssteuerung.

use crate::app::AppState;

/// Markiert die Anwendung zum kontrollierten Beenden.
pub fn request_exit(state: &mut AppState) {
    log::info!("Beenden angefordert");
    state.should_exit = true;
}
