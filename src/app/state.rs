//! Application State: zentrale Datenhaltung.

use crate::core::{FractalKind, FractalView};
use crate::shared::options::INITIAL_VIEWPORT;
use crate::shared::ViewerOptions;

use super::CommandLog;

/// View-bezogener Anwendungszustand
pub struct ViewState {
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f64; 2],
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            viewport_size: INITIAL_VIEWPORT,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Eine persistente Ansicht je Fraktal-Variante; Zentrum und Radius
    /// überleben den Varianten-Wechsel
    views: [FractalView; 3],
    /// Aktive Fraktal-Variante
    pub active_kind: FractalKind,
    /// Gemeinsame Rekursionstiefe aller Ansichten
    pub depth: u32,
    /// View-State
    pub view: ViewState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Tiefen, Ränder, Farben)
    pub options: ViewerOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt den Startzustand mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(ViewerOptions::default())
    }

    /// Erstellt den Startzustand mit expliziten Optionen.
    ///
    /// Alle drei Ansichten werden sofort platziert; die erste echte
    /// Viewport-Meldung skaliert die Zentren proportional nach.
    pub fn with_options(options: ViewerOptions) -> Self {
        let margin = options.placement_margin;
        let views = [
            FractalView::new(FractalKind::KochSnowflake, INITIAL_VIEWPORT, margin),
            FractalView::new(FractalKind::IceTriangle, INITIAL_VIEWPORT, margin),
            FractalView::new(FractalKind::IceRectangle, INITIAL_VIEWPORT, margin),
        ];
        Self {
            views,
            active_kind: FractalKind::KochSnowflake,
            depth: options.clamp_depth(options.default_depth),
            view: ViewState::new(),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    fn view_index(kind: FractalKind) -> usize {
        match kind {
            FractalKind::KochSnowflake => 0,
            FractalKind::IceTriangle => 1,
            FractalKind::IceRectangle => 2,
        }
    }

    /// Die Ansicht der aktiven Variante.
    pub fn active_view(&self) -> &FractalView {
        &self.views[Self::view_index(self.active_kind)]
    }

    /// Mutable Referenz auf die aktive Ansicht.
    pub fn active_view_mut(&mut self) -> &mut FractalView {
        &mut self.views[Self::view_index(self.active_kind)]
    }

    /// Die Ansicht einer bestimmten Variante.
    pub fn view_for(&self, kind: FractalKind) -> &FractalView {
        &self.views[Self::view_index(kind)]
    }

    /// Mutable Zugriff auf alle Ansichten (Resize betrifft jede Variante).
    pub fn views_mut(&mut self) -> &mut [FractalView] {
        &mut self.views
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
