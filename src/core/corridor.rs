//! Korridor-Polygone: rechteckiger Puffer um ein Segment.

use super::GeoOps;
use glam::DVec2;
use std::sync::Arc;

/// Vier Eckpunkte eines Korridors (Ring-Reihenfolge, nicht geschlossen).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corridor {
    /// Eckpunkte: Start links, Ende links, Ende rechts, Start rechts
    pub corners: [DVec2; 4],
}

/// Berechnet Korridore senkrecht zur Segment-Peilung mit fester Halbbreite.
#[derive(Clone)]
pub struct CorridorBuilder {
    geo: Arc<dyn GeoOps + Send + Sync>,
    half_width: f64,
}

impl CorridorBuilder {
    /// Erstellt einen Builder mit gegebener Geometrie-Implementierung und Halbbreite.
    pub fn new(geo: Arc<dyn GeoOps + Send + Sync>, half_width: f64) -> Self {
        Self { geo, half_width }
    }

    /// Halbbreite des Korridors.
    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    /// Zugriff auf die Geometrie-Implementierung.
    pub fn geo(&self) -> &(dyn GeoOps + Send + Sync) {
        self.geo.as_ref()
    }

    /// Builder mit gleicher Geometrie-Implementierung, aber anderer Halbbreite.
    pub fn with_half_width(&self, half_width: f64) -> Self {
        Self {
            geo: self.geo.clone(),
            half_width,
        }
    }

    /// Korridor für das Segment `start`→`end`.
    ///
    /// Reine Funktion der beiden Endpunkte; bei jeder Endpunkt-Änderung neu berechnen.
    pub fn corridor_for(&self, start: DVec2, end: DVec2) -> Corridor {
        let theta = self.geo.bearing(start, end);
        let w = self.half_width;
        Corridor {
            corners: [
                self.geo.destination(start, theta - 90.0, w),
                self.geo.destination(end, theta - 90.0, w),
                self.geo.destination(end, theta + 90.0, w),
                self.geo.destination(start, theta + 90.0, w),
            ],
        }
    }
}

impl std::fmt::Debug for CorridorBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CorridorBuilder")
            .field("half_width", &self.half_width)
            .finish_non_exhaustive()
    }
}
