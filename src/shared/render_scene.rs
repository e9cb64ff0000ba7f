//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use crate::core::{FractalKind, Segment};

use super::options::ViewerOptions;

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct RenderScene {
    /// Segmentfolge des aktiven Fraktals in Zeichenreihenfolge
    pub segments: Vec<Segment>,
    /// Aktive Fraktal-Variante
    pub kind: FractalKind,
    /// Rekursionstiefe, mit der die Segmente erzeugt wurden
    pub depth: u32,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Laufzeit-Optionen für Farben und Linienstärke
    pub options: ViewerOptions,
}
