//! Zentrale Konfiguration für den Fraktal-Viewer.
//!
//! `ViewerOptions` enthält alle zur Laufzeit geladenen Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Rekursion ───────────────────────────────────────────────────────

/// Standard-Rekursionstiefe beim Start.
pub const DEFAULT_DEPTH: u32 = 3;
/// Obergrenze der Rekursionstiefe (Segmentzahl wächst mit 4ⁿ bzw. 6ⁿ).
pub const MAX_DEPTH: u32 = 8;

// ── Platzierung ─────────────────────────────────────────────────────

/// Pixel-Rand zwischen Fraktal und Viewport bei der Anfangs-Platzierung.
pub const PLACEMENT_MARGIN: f64 = 30.0;
/// Viewport-Größe, mit der die Ansichten vor dem ersten Frame platziert
/// werden. Der erste gemeldete Frame skaliert die Zentren proportional um.
pub const INITIAL_VIEWPORT: [f64; 2] = [1500.0, 700.0];

// ── Zoom ────────────────────────────────────────────────────────────

/// Scroll-Einheiten eines Menü-Zoom-Schritts (eine Mausrad-Raste).
pub const ZOOM_STEP_SCROLL_UNITS: f64 = 120.0;

// ── Darstellung ─────────────────────────────────────────────────────

/// Linienfarbe der Kurven (RGBA).
pub const STROKE_COLOR: [u8; 4] = [220, 235, 255, 255];
/// Linienstärke in Pixeln.
pub const STROKE_WIDTH: f32 = 1.0;
/// Hintergrundfarbe des Viewports (RGBA).
pub const BACKGROUND_COLOR: [u8; 4] = [16, 20, 28, 255];

/// Alle zur Laufzeit änderbaren Viewer-Optionen.
/// Wird als `fraktal_viewer.toml` neben der Binary gelesen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerOptions {
    /// Standard-Rekursionstiefe beim Start
    pub default_depth: u32,
    /// Obergrenze der Rekursionstiefe
    pub max_depth: u32,
    /// Pixel-Rand bei der Anfangs-Platzierung
    pub placement_margin: f64,
    /// Scroll-Einheiten pro Menü-Zoom-Schritt
    pub zoom_step_scroll_units: f64,
    /// Linienfarbe der Kurven (RGBA)
    pub stroke_color: [u8; 4],
    /// Linienstärke in Pixeln
    pub stroke_width: f32,
    /// Hintergrundfarbe des Viewports (RGBA)
    pub background_color: [u8; 4],
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            default_depth: DEFAULT_DEPTH,
            max_depth: MAX_DEPTH,
            placement_margin: PLACEMENT_MARGIN,
            zoom_step_scroll_units: ZOOM_STEP_SCROLL_UNITS,
            stroke_color: STROKE_COLOR,
            stroke_width: STROKE_WIDTH,
            background_color: BACKGROUND_COLOR,
        }
    }
}

impl ViewerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("fraktal_viewer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("fraktal_viewer.toml")
    }

    /// Begrenzt eine gewünschte Rekursionstiefe auf den erlaubten Bereich.
    pub fn clamp_depth(&self, depth: u32) -> u32 {
        depth.min(self.max_depth)
    }
}
