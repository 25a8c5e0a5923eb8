//! Reine Stil-Berechnung für Punkte, Segmente und Korridore.
//!
//! `style_for` hängt nur von Form, Index, Modus-Snapshot und Optionen ab und
//! kann vom Render-Adapter beliebig oft aufgerufen werden.

use super::EditorOptions;
use crate::core::{IdxTuple, ShapeKind};
use std::collections::HashSet;
use std::sync::Arc;

/// Grobe Art des Interaktionsmodus (ohne transiente Daten).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModeKind {
    /// Kein Modus aktiv
    #[default]
    Idle,
    /// Punkt wird bearbeitet
    EditingPoint,
    /// Drag läuft
    Dragging,
    /// Split-Modus
    Splitting,
    /// Segmentbereich auswählen
    SelectingSegment,
    /// Linie auswählen
    SelectingLine,
    /// Startpunkt verlegen
    ShiftingStart,
}

/// Read-only Momentaufnahme des Interaktionszustands für die Stil-Berechnung.
#[derive(Debug, Clone, Default)]
pub struct ModeSnapshot {
    /// Aktueller Modus
    pub mode: ModeKind,
    /// Aktive Linie
    pub active_line: Option<usize>,
    /// Bearbeiteter bzw. gezogener Punkt
    pub focus_point: Option<IdxTuple>,
    /// Auswahl-Anker bzw. gezogener Korridor
    pub focus_segment: Option<IdxTuple>,
    /// Punkte mit nicht-benachbartem Overlap (Arc für O(1)-Clone)
    pub overlap_points: Arc<HashSet<IdxTuple>>,
}

/// Stil-Deskriptor einer Form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    /// Farbe (RGBA)
    pub color: [f32; 4],
    /// Radius (Punkt) bzw. Linienstärke (Segment); 0 für Korridore
    pub size: f32,
    /// Deckkraft
    pub opacity: f32,
}

/// Berechnet den Stil einer Form.
pub fn style_for(
    kind: ShapeKind,
    idx: IdxTuple,
    mode: &ModeSnapshot,
    options: &EditorOptions,
) -> ShapeStyle {
    let on_active_line = mode.active_line == Some(idx.line);
    match kind {
        ShapeKind::Point => {
            let (color, size) = if mode.focus_point == Some(idx) {
                (options.point_color_editing, options.point_radius * 1.5)
            } else if mode.overlap_points.contains(&idx) {
                (options.point_color_overlap, options.point_radius)
            } else if idx == IdxTuple::new(0, 0) {
                (options.point_color_start, options.point_radius)
            } else if on_active_line {
                (options.point_color_active, options.point_radius)
            } else {
                (options.point_color_default, options.point_radius)
            };
            ShapeStyle {
                color,
                size,
                opacity: 1.0,
            }
        }
        ShapeKind::Segment => {
            let color = if mode.focus_segment == Some(idx) {
                options.segment_color_selected
            } else if mode.mode == ModeKind::Splitting {
                options.segment_color_target
            } else if on_active_line {
                options.segment_color_active
            } else {
                options.segment_color_default
            };
            ShapeStyle {
                color,
                size: options.segment_width,
                opacity: 1.0,
            }
        }
        ShapeKind::Corridor => {
            let highlighted = on_active_line || mode.focus_segment == Some(idx);
            ShapeStyle {
                color: options.corridor_color,
                size: 0.0,
                opacity: if highlighted {
                    options.corridor_opacity_active
                } else {
                    options.corridor_opacity
                },
            }
        }
    }
}
