//! Geometrie-Primitive (Peilung, Zielpunkt, Lotfußpunkt, Distanz).
//!
//! Die Engine konsumiert nur den Trait. `PlanarGeoOps` ist die mitgelieferte
//! ebene Implementierung: Peilung in Grad im Uhrzeigersinn ab +Y ("Nord").

use glam::DVec2;

/// Geometrie-Operationen, die Korridor- und Split-Berechnung verwenden.
pub trait GeoOps {
    /// Peilung von `from` nach `to` in Grad.
    fn bearing(&self, from: DVec2, to: DVec2) -> f64;

    /// Zielpunkt ausgehend von `origin` mit Peilung (Grad) und Distanz.
    fn destination(&self, origin: DVec2, bearing_deg: f64, distance: f64) -> DVec2;

    /// Nächster Punkt auf der Strecke `a`–`b` zu `p`.
    fn closest_point_on_segment(&self, p: DVec2, a: DVec2, b: DVec2) -> DVec2;

    /// Distanz zwischen zwei Punkten.
    fn distance(&self, a: DVec2, b: DVec2) -> f64;
}

/// Ebene (kartesische) Geometrie.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanarGeoOps;

impl GeoOps for PlanarGeoOps {
    fn bearing(&self, from: DVec2, to: DVec2) -> f64 {
        let delta = to - from;
        delta.x.atan2(delta.y).to_degrees()
    }

    fn destination(&self, origin: DVec2, bearing_deg: f64, distance: f64) -> DVec2 {
        let (sin, cos) = bearing_deg.to_radians().sin_cos();
        origin + DVec2::new(sin, cos) * distance
    }

    fn closest_point_on_segment(&self, p: DVec2, a: DVec2, b: DVec2) -> DVec2 {
        let ab = b - a;
        let len_sq = ab.length_squared();
        if len_sq == 0.0 {
            return a;
        }
        let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
        a + ab * t
    }

    fn distance(&self, a: DVec2, b: DVec2) -> f64 {
        a.distance(b)
    }
}
