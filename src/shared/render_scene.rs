//! Render-Szene als expliziter Übergabevertrag zwischen App und Render-Adapter.
//!
//! Lebt im shared-Modul, da `app` sie baut und der Adapter sie konsumiert.

use super::style::ShapeStyle;
use crate::core::{IdxTuple, ShapeHandle};
use glam::DVec2;

/// Ein gerenderter Punkt.
#[derive(Debug, Clone, PartialEq)]
pub struct PointItem {
    /// Render-Identität
    pub handle: ShapeHandle,
    /// Positionale Identität
    pub idx: IdxTuple,
    /// Koordinate
    pub position: DVec2,
    /// Stil
    pub style: ShapeStyle,
}

/// Ein gerendertes Segment.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentItem {
    /// Render-Identität
    pub handle: ShapeHandle,
    /// Positionale Identität
    pub idx: IdxTuple,
    /// Startpunkt
    pub start: DVec2,
    /// Endpunkt
    pub end: DVec2,
    /// Stil
    pub style: ShapeStyle,
}

/// Ein gerenderter Korridor.
#[derive(Debug, Clone, PartialEq)]
pub struct CorridorItem {
    /// Render-Identität
    pub handle: ShapeHandle,
    /// Positionale Identität (Segment)
    pub idx: IdxTuple,
    /// Polygon-Ecken
    pub corners: [DVec2; 4],
    /// Stil
    pub style: ShapeStyle,
}

/// Read-only Daten für einen vollständigen Neuaufbau der Darstellung.
#[derive(Debug, Clone, Default)]
pub struct RenderScene {
    /// Store-Generation, aus der die Handles stammen
    pub generation: u64,
    /// Alle Punkte
    pub points: Vec<PointItem>,
    /// Alle Segmente
    pub segments: Vec<SegmentItem>,
    /// Alle Korridore
    pub corridors: Vec<CorridorItem>,
}

impl RenderScene {
    /// Gibt zurück, ob die Szene Formen enthält.
    pub fn has_geometry(&self) -> bool {
        !self.points.is_empty()
    }
}
