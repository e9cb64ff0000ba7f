//! Rekursive Kurvengeneratoren für die drei Fraktal-Varianten.
//!
//! Jeder Generator expandiert eine Basisstrecke `a`→`b` in eine geordnete
//! Segmentfolge. Basisfall `depth == 0` emittiert genau ein Segment; die
//! Emissionsreihenfolge ist Teil des Vertrags (deterministische
//! Zeichenreihenfolge). Eine Tiefenobergrenze setzen die Aufrufer, nicht
//! die Generatoren selbst.

use glam::DVec2;

use super::geometry::{rotate_120, rotate_60, rotate_90};

/// Ein gerichtetes Liniensegment in Pixel-Koordinaten (Y nach unten).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: DVec2,
    pub to: DVec2,
}

impl Segment {
    /// Erstellt ein Segment von `from` nach `to`.
    pub fn new(from: DVec2, to: DVec2) -> Self {
        Self { from, to }
    }
}

/// Die drei unterstützten Fraktal-Varianten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractalKind {
    /// Klassische Koch-Schneeflocke (4er-Teilung mit Auswärts-Zacke)
    #[default]
    KochSnowflake,
    /// Eis-Fraktal auf Dreiecksbasis (6er-Teilung, zwei Zacken am Mittelpunkt)
    IceTriangle,
    /// Eis-Fraktal auf Rechtecksbasis (4er-Teilung, eine senkrechte Zacke)
    IceRectangle,
}

impl FractalKind {
    /// Alle Varianten in UI-Reihenfolge.
    pub const ALL: [FractalKind; 3] = [
        FractalKind::KochSnowflake,
        FractalKind::IceTriangle,
        FractalKind::IceRectangle,
    ];

    /// Anzeigename für UI und Logs.
    pub fn label(self) -> &'static str {
        match self {
            FractalKind::KochSnowflake => "Koch-Schneeflocke",
            FractalKind::IceTriangle => "Eis-Dreieck",
            FractalKind::IceRectangle => "Eis-Rechteck",
        }
    }

    /// Verzweigungsfaktor der Rekursion (Segmente pro Teilungsschritt).
    pub fn branching_factor(self) -> usize {
        match self {
            FractalKind::KochSnowflake => 4,
            FractalKind::IceTriangle => 6,
            FractalKind::IceRectangle => 4,
        }
    }
}

/// Anzahl der Segmente, die `expand` für eine Basisstrecke erzeugt.
pub fn segment_count(kind: FractalKind, depth: u32) -> usize {
    kind.branching_factor().saturating_pow(depth)
}

/// Expandiert die Basisstrecke `a`→`b` mit der Variante `kind`.
pub fn expand(kind: FractalKind, depth: u32, a: DVec2, b: DVec2, out: &mut Vec<Segment>) {
    match kind {
        FractalKind::KochSnowflake => koch_curve(depth, a, b, out),
        FractalKind::IceTriangle => ice_triangle_curve(depth, a, b, out),
        FractalKind::IceRectangle => ice_rectangle_curve(depth, a, b, out),
    }
}

/// Koch-Teilung: Drittelung der Strecke mit um 60° gedrehter Spitze.
pub fn koch_curve(depth: u32, a: DVec2, b: DVec2, out: &mut Vec<Segment>) {
    if depth == 0 {
        out.push(Segment::new(a, b));
        return;
    }
    let c = (a * 2.0 + b) / 3.0;
    let e = (a + b * 2.0) / 3.0;
    let d = c + rotate_60(e - c);
    koch_curve(depth - 1, a, c, out);
    koch_curve(depth - 1, c, d, out);
    koch_curve(depth - 1, d, e, out);
    koch_curve(depth - 1, e, b, out);
}

/// Eis-Teilung auf Dreiecksbasis: Halbierung plus zwei Zacken am Mittelpunkt.
///
/// Die Zacken laufen hin und zurück (`m`→`c`, `c`→`m`), damit jede
/// Teilkurve am Mittelpunkt angebunden bleibt.
pub fn ice_triangle_curve(depth: u32, a: DVec2, b: DVec2, out: &mut Vec<Segment>) {
    if depth == 0 {
        out.push(Segment::new(a, b));
        return;
    }
    let m = (a + b) / 2.0;
    let v = (b - m) * 0.4;
    let c = m + rotate_60(v);
    let d = m + rotate_120(v);
    ice_triangle_curve(depth - 1, a, m, out);
    ice_triangle_curve(depth - 1, m, b, out);
    ice_triangle_curve(depth - 1, m, c, out);
    ice_triangle_curve(depth - 1, c, m, out);
    ice_triangle_curve(depth - 1, m, d, out);
    ice_triangle_curve(depth - 1, d, m, out);
}

/// Eis-Teilung auf Rechtecksbasis: Halbierung plus eine senkrechte Zacke.
pub fn ice_rectangle_curve(depth: u32, a: DVec2, b: DVec2, out: &mut Vec<Segment>) {
    if depth == 0 {
        out.push(Segment::new(a, b));
        return;
    }
    let m = (a + b) / 2.0;
    let v = (b - m) * (2.0 / 3.0);
    let c = m + rotate_90(v);
    ice_rectangle_curve(depth - 1, a, m, out);
    ice_rectangle_curve(depth - 1, m, b, out);
    ice_rectangle_curve(depth - 1, m, c, out);
    ice_rectangle_curve(depth - 1, c, m, out);
}
