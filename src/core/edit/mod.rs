//! Strukturelle Editier-Operationen auf der Transekt-Geometrie.
//!
//! Alle Operationen sind rein: sie lesen eine Geometrie und liefern eine neue
//! samt Vorwärts-Events. Bei einem Fehler bleibt der Store unberührt.
//!
//! Aufgeteilt nach Operation:
//! - `split` — Segment teilen, hinterer Teil wird neue Linie
//! - `insert` — Punkt in ein Segment einfügen
//! - `remove` — Punkt entfernen (inkl. Naht-Merge)
//! - `merge` — Segmentbereich zusammenfassen
//! - `shift` — Startpunkt der Gruppe 0 verlegen
//! - `drag` — Punkt-/Korridor-Drag-Sitzung
//! - `append` — neue Linie anhängen

mod append;
mod drag;
mod insert;
mod merge;
mod remove;
mod shift;
mod split;

pub use append::append_line;
pub use drag::{DragSession, DragTarget};
pub use insert::insert_point;
pub use merge::merge_range;
pub use remove::remove_point;
pub use shift::shift_group_start;
pub use split::split_segment;

use super::{EditEvent, TransectGeometry};

/// Ergebnis einer erfolgreichen Operation.
#[derive(Debug, Clone, PartialEq)]
pub struct EditOutcome {
    /// Neue Geometrie
    pub geometry: TransectGeometry,
    /// Vorwärts-Events in Anwendungsreihenfolge
    pub events: Vec<EditEvent>,
    /// Aktive Linie nach der Operation
    pub active: Option<usize>,
}

impl EditOutcome {
    /// Ergebnis ohne Änderung.
    pub fn unchanged(geometry: &TransectGeometry, active: Option<usize>) -> Self {
        Self {
            geometry: geometry.clone(),
            events: Vec::new(),
            active,
        }
    }

    /// Gibt `true` zurück, wenn die Operation nichts verändert hat.
    pub fn is_noop(&self) -> bool {
        self.events.is_empty()
    }
}

/// Hängt ein `active`-Korrektur-Event an, falls sich die aktive Linie verschoben hat.
fn push_active_change(events: &mut Vec<EditEvent>, before: Option<usize>, after: Option<usize>) {
    if before != after {
        events.push(EditEvent::Active { before, after });
    }
}
