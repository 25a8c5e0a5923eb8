//! Schnittstellen zur Außenwelt: Änderungs-Beobachter, Render-Adapter
//! und optionale synchrone Overlap-Auswahl.

use crate::core::{EditEvent, IdxTuple, ShapeHandle};
use crate::shared::{RenderScene, ShapeStyle};
use glam::DVec2;

/// Empfängt die Events jeder festgeschriebenen Operation (inkl. Undo/Redo).
pub trait ChangeListener {
    /// Wird genau einmal pro Commit mit der geordneten Eventliste aufgerufen.
    fn on_change(&mut self, events: &[EditEvent]);
}

impl<F> ChangeListener for F
where
    F: FnMut(&[EditEvent]),
{
    fn on_change(&mut self, events: &[EditEvent]) {
        self(events)
    }
}

/// Empfängt Darstellungs-Updates. Die Engine liest nie Zustand zurück.
pub trait RenderAdapter {
    /// Ersetzt die komplette Darstellung (nach jedem Rebuild oder Moduswechsel).
    fn replace_scene(&mut self, scene: &RenderScene);

    /// Aktualisiert einen einzelnen Punkt (Live-Drag).
    fn update_point(&mut self, handle: ShapeHandle, position: DVec2, style: ShapeStyle);

    /// Aktualisiert ein einzelnes Segment (Live-Drag).
    fn update_segment(&mut self, handle: ShapeHandle, start: DVec2, end: DVec2, style: ShapeStyle);

    /// Aktualisiert einen einzelnen Korridor (Live-Drag).
    fn update_corridor(&mut self, handle: ShapeHandle, corners: &[DVec2; 4], style: ShapeStyle);
}

/// Synchrone Auswahl zwischen zwei zusammenfallenden Punkten.
///
/// Ohne Chooser wird die Aktion geparkt und per `AppIntent::OverlapChosen`
/// fortgesetzt.
pub trait OverlapChooser {
    /// Liefert den gewählten Kandidaten oder `None` für Abbruch.
    fn choose(&mut self, candidates: [IdxTuple; 2]) -> Option<IdxTuple>;
}
