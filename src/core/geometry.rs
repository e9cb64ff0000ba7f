//! Reine Geometrie-Funktionen für die Fraktal-Konstruktion.
//!
//! Alle Rotationen arbeiten im Bildschirm-Koordinatensystem (Y wächst nach
//! unten). Eine Drehung mit positivem Winkel erscheint dadurch auf dem
//! Bildschirm gegen den Uhrzeigersinn.

use glam::DVec2;

/// Rotiert einen Vektor um 60° um den Ursprung.
pub fn rotate_60(v: DVec2) -> DVec2 {
    let cos = 0.5;
    let sin = 3.0_f64.sqrt() / 2.0;
    DVec2::new(v.x * cos + v.y * sin, -v.x * sin + v.y * cos)
}

/// Rotiert einen Vektor um 90° um den Ursprung.
pub fn rotate_90(v: DVec2) -> DVec2 {
    DVec2::new(v.y, -v.x)
}

/// Rotiert einen Vektor um 120° um den Ursprung.
pub fn rotate_120(v: DVec2) -> DVec2 {
    let cos = -0.5;
    let sin = 3.0_f64.sqrt() / 2.0;
    DVec2::new(v.x * cos + v.y * sin, -v.x * sin + v.y * cos)
}

/// Betrag eines Vektors, auf die Ganzzahl abgeschnitten.
///
/// Der Startradius einer Ansicht ist der ganzzahlig abgeschnittene Abstand
/// zwischen Anker und Zentrum. Nur dafür gedacht; überall sonst gilt
/// `DVec2::length()`.
pub fn truncated_length(v: DVec2) -> f64 {
    v.length().trunc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rotations_preserve_magnitude() {
        let vectors = [
            DVec2::new(3.0, 4.0),
            DVec2::new(-7.5, 2.25),
            DVec2::new(0.0, 1.0e6),
            DVec2::new(-0.001, -0.002),
        ];
        for v in vectors {
            for rotated in [rotate_60(v), rotate_90(v), rotate_120(v)] {
                assert_relative_eq!(rotated.length(), v.length(), max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn rotate_90_swaps_components() {
        let rotated = rotate_90(DVec2::new(2.0, 5.0));
        assert_eq!(rotated, DVec2::new(5.0, -2.0));
    }

    #[test]
    fn rotate_60_of_unit_x_points_up_on_screen() {
        // Y-nach-unten: die gedrehte X-Achse bekommt eine negative Y-Komponente
        let rotated = rotate_60(DVec2::new(1.0, 0.0));
        assert_relative_eq!(rotated.x, 0.5, epsilon = 1e-12);
        assert_relative_eq!(rotated.y, -(3.0_f64.sqrt()) / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn rotate_60_twice_equals_rotate_120() {
        let v = DVec2::new(4.0, -9.0);
        let twice = rotate_60(rotate_60(v));
        let once = rotate_120(v);
        assert_relative_eq!(twice.x, once.x, epsilon = 1e-12);
        assert_relative_eq!(twice.y, once.y, epsilon = 1e-12);
    }

    #[test]
    fn rotate_120_three_times_is_identity() {
        let v = DVec2::new(12.0, -5.0);
        let w = rotate_120(rotate_120(rotate_120(v)));
        assert_relative_eq!(w.x, v.x, epsilon = 1e-12);
        assert_relative_eq!(w.y, v.y, epsilon = 1e-12);
    }

    #[test]
    fn truncated_length_cuts_to_integer() {
        // Bewusst abgeschnitten, nicht gerundet: seedet den Startradius
        assert_eq!(truncated_length(DVec2::new(3.0, 4.0)), 5.0);
        assert_eq!(truncated_length(DVec2::new(10.5, 0.0)), 10.0);
        assert_eq!(truncated_length(DVec2::new(0.0, -0.9)), 0.0);
    }
}
