//! Aufbau der Fraktal-Umrisse aus Zentrum und Ankerpunkt.
//!
//! Das Grundpolygon (Dreieck oder Rechteck) entsteht durch fortgesetzte
//! Rotation des Vektors Anker−Zentrum; jede gerichtete Kante wird an den
//! Kurvengenerator übergeben.

use glam::DVec2;

use super::curve::{self, FractalKind, Segment};
use super::geometry::{rotate_120, rotate_90, truncated_length};

/// Anzahl gerichteter Basiskanten des Grundpolygons.
///
/// Die Eis-Varianten durchlaufen jede Polygonkante in beiden Richtungen,
/// weil die Zackenrichtung von der Laufrichtung abhängt.
pub fn base_edge_count(kind: FractalKind) -> usize {
    match kind {
        FractalKind::KochSnowflake => 3,
        FractalKind::IceTriangle => 6,
        FractalKind::IceRectangle => 8,
    }
}

/// Gesamtzahl der Umriss-Segmente für `kind` bei Tiefe `depth`.
pub fn outline_segment_count(kind: FractalKind, depth: u32) -> usize {
    base_edge_count(kind).saturating_mul(curve::segment_count(kind, depth))
}

/// Ankerpunkt zu gegebenem Zentrum und Radius.
///
/// Der Anker ist eine reine Funktion von Zentrum und Radius und wird nie
/// unabhängig gespeichert. Bei den Dreiecks-Varianten liegt er waagerecht
/// links vom Zentrum, beim Rechteck diagonal oben links (45°).
pub fn anchor_for(kind: FractalKind, center: DVec2, radius: f64) -> DVec2 {
    match kind {
        FractalKind::KochSnowflake | FractalKind::IceTriangle => {
            center - DVec2::new(radius, 0.0)
        }
        FractalKind::IceRectangle => {
            let half_diagonal = radius * std::f64::consts::FRAC_1_SQRT_2;
            center - DVec2::new(half_diagonal, half_diagonal)
        }
    }
}

/// Erzeugt den kompletten Umriss als geordnete Segmentfolge.
pub fn outline(
    kind: FractalKind,
    center: DVec2,
    anchor: DVec2,
    depth: u32,
    out: &mut Vec<Segment>,
) {
    let v1 = anchor - center;
    match kind {
        FractalKind::KochSnowflake => {
            let v2 = rotate_120(v1);
            let v3 = rotate_120(v2);
            let b = center + v2;
            let c = center + v3;
            // Eine Richtung pro Kante: die Zacken zeigen so stets nach außen
            curve::koch_curve(depth, b, anchor, out);
            curve::koch_curve(depth, c, b, out);
            curve::koch_curve(depth, anchor, c, out);
        }
        FractalKind::IceTriangle => {
            let v2 = rotate_120(v1);
            let v3 = rotate_120(v2);
            let b = center + v2;
            let c = center + v3;
            let edges = [
                (b, anchor),
                (anchor, b),
                (c, b),
                (b, c),
                (anchor, c),
                (c, anchor),
            ];
            for (from, to) in edges {
                curve::ice_triangle_curve(depth, from, to, out);
            }
        }
        FractalKind::IceRectangle => {
            let v2 = rotate_90(v1);
            let v3 = rotate_90(v2);
            let v4 = rotate_90(v3);
            let b = center + v2;
            let c = center + v3;
            let d = center + v4;
            let edges = [
                (b, anchor),
                (anchor, b),
                (c, b),
                (b, c),
                (d, c),
                (c, d),
                (d, anchor),
                (anchor, d),
            ];
            for (from, to) in edges {
                curve::ice_rectangle_curve(depth, from, to, out);
            }
        }
    }
}

/// Anfangs-Platzierung: Zentrum und Radius aus der Viewport-Größe.
///
/// Das Zentrum liegt in der Viewport-Mitte; der Anker wird mit Rand
/// `margin` in die kleinere Dimension eingepasst. Der Radius ist der
/// ganzzahlig abgeschnittene Anker-Abstand (siehe `truncated_length`).
pub fn initial_placement(kind: FractalKind, viewport: [f64; 2], margin: f64) -> (DVec2, f64) {
    let [w, h] = viewport;
    let center = DVec2::new(w / 2.0, h / 2.0);
    let anchor = match kind {
        FractalKind::KochSnowflake | FractalKind::IceTriangle => {
            if w < h {
                DVec2::new(margin, h / 2.0)
            } else {
                DVec2::new(w / 2.0 - h / 2.0 + margin, h / 2.0)
            }
        }
        FractalKind::IceRectangle => {
            // Das Rechteck steht auf der Spitze und braucht zusätzlichen Rand
            let e = w.min(h) * 0.2 + margin;
            if w < h {
                DVec2::new(e, h / 2.0 - w / 2.0 + e)
            } else {
                DVec2::new(w / 2.0 - h / 2.0 + e, e)
            }
        }
    };
    (center, truncated_length(anchor - center))
}
