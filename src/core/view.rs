//! Interaktiver View-Zustand eines Fraktals: Zentrum, Radius, Drag, Resize.

use glam::DVec2;

use super::curve::{FractalKind, Segment};
use super::shape;

/// Merkposten eines laufenden Zeiger-Drags.
#[derive(Debug, Clone, Copy)]
struct DragBaseline {
    /// Zentrum beim Drücken der Maustaste
    center_at_press: DVec2,
    /// Zeigerposition beim Drücken der Maustaste
    press_pos: DVec2,
}

/// Zustand einer Fraktal-Ansicht: Zentrum, Anker-Radius und Drag-Verlauf.
///
/// Der Ankerpunkt wird nie gespeichert, sondern vor jedem Zeichnen aus
/// Zentrum und Radius abgeleitet. Jede Variante besitzt ihre eigene
/// Ansicht, die über Varianten-Wechsel hinweg erhalten bleibt.
#[derive(Debug, Clone)]
pub struct FractalView {
    /// Fraktal-Variante dieser Ansicht
    pub kind: FractalKind,
    /// Vom Nutzer verschiebbares Referenzzentrum (Pixelkoordinaten)
    pub center: DVec2,
    /// Abstand Zentrum→Anker; bestimmt die Größe des Fraktals
    pub radius: f64,
    /// Zuletzt übernommene Viewport-Größe (für proportionales Resize)
    prev_viewport: [f64; 2],
    /// Laufender Drag (None = kein Drag aktiv)
    drag: Option<DragBaseline>,
}

impl FractalView {
    /// Skalierung des Scroll-Deltas auf den Radius (Scroll-Einheiten pro Pixel).
    pub const SCROLL_RADIUS_DIVISOR: f64 = 100.0;

    /// Erstellt eine Ansicht mit Anfangs-Platzierung für die Viewport-Größe.
    pub fn new(kind: FractalKind, viewport: [f64; 2], margin: f64) -> Self {
        let (center, radius) = shape::initial_placement(kind, viewport, margin);
        Self {
            kind,
            center,
            radius,
            prev_viewport: viewport,
            drag: None,
        }
    }

    /// Leitet den Ankerpunkt aus Zentrum und Radius ab.
    pub fn anchor(&self) -> DVec2 {
        shape::anchor_for(self.kind, self.center, self.radius)
    }

    /// Beginnt einen Drag an der Zeigerposition.
    pub fn begin_drag(&mut self, pos: DVec2) {
        self.drag = Some(DragBaseline {
            center_at_press: self.center,
            press_pos: pos,
        });
    }

    /// Verschiebt das Zentrum relativ zur Drag-Baseline.
    ///
    /// Ohne aktiven Drag keine Wirkung. Das Zentrum darf den sichtbaren
    /// Bereich verlassen; es gibt bewusst kein Clamping.
    pub fn drag_to(&mut self, pos: DVec2) {
        if let Some(baseline) = self.drag {
            self.center = baseline.center_at_press - baseline.press_pos + pos;
        }
    }

    /// Beendet den laufenden Drag.
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Wendet ein Scroll-Delta auf den Radius an.
    ///
    /// Vergrößerungen sind immer erlaubt; Verkleinerungen nur solange der
    /// Radius positiv ist und das Ergebnis nicht negativ würde. Ein
    /// abgelehntes Delta lässt den Radius unverändert. Nach oben gibt es
    /// keine Grenze.
    pub fn apply_scroll(&mut self, delta: f64) {
        let next = self.radius + delta / Self::SCROLL_RADIUS_DIVISOR;
        if delta > 0.0 || (self.radius > 0.0 && next >= 0.0) {
            self.radius = next;
        }
    }

    /// Passt das Zentrum proportional an eine neue Viewport-Größe an.
    ///
    /// Das Fraktal behält so seine relative Position im Fenster statt der
    /// absoluten Pixelposition. Entartete Größen (Dimension <= 0) werden
    /// ohne Umskalierung übernommen.
    pub fn resize(&mut self, viewport: [f64; 2]) {
        let [w, h] = viewport;
        let [prev_w, prev_h] = self.prev_viewport;
        if w > 0.0 && h > 0.0 && prev_w > 0.0 && prev_h > 0.0 {
            self.center = DVec2::new(self.center.x * w / prev_w, self.center.y * h / prev_h);
        }
        self.prev_viewport = viewport;
    }

    /// Setzt die Ansicht auf die Anfangs-Platzierung für die zuletzt
    /// übernommene Viewport-Größe zurück.
    pub fn reset(&mut self, margin: f64) {
        let (center, radius) = shape::initial_placement(self.kind, self.prev_viewport, margin);
        self.center = center;
        self.radius = radius;
        self.drag = None;
    }

    /// Erzeugt die Segmentfolge des Umrisses für die Rekursionstiefe `depth`.
    pub fn outline(&self, depth: u32) -> Vec<Segment> {
        let mut segments = Vec::with_capacity(shape::outline_segment_count(self.kind, depth));
        shape::outline(self.kind, self.center, self.anchor(), depth, &mut segments);
        segments
    }
}
