//! Domänen-Events strukturverändernder Bearbeitungen und ihre Umkehrung.
//!
//! Jede Operation deklariert nur ihre Vorwärts-Events. Die Undo-Events
//! werden zentral in [`invert_all`] abgeleitet.

use super::LineString;
use serde::{Deserialize, Serialize};

/// Ein einzelnes Edit-Event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EditEvent {
    /// Neue Linie angelegt
    Create {
        /// Linien-Index der neuen Linie
        index: usize,
        /// Geometrie der neuen Linie
        feature: LineString,
    },
    /// Linie eingefügt (z.B. hinterer Teil eines Splits)
    Insert {
        /// Ziel-Index
        index: usize,
        /// Eingefügte Geometrie
        feature: LineString,
    },
    /// Linie entfernt
    Delete {
        /// Index der entfernten Linie
        index: usize,
        /// Geometrie vor dem Entfernen
        feature: LineString,
    },
    /// Geometrie einer Linie geändert
    Edit {
        /// Linien-Index
        index: usize,
        /// Geometrie vorher
        before: LineString,
        /// Geometrie nachher
        after: LineString,
    },
    /// Zwei Linien über eine Naht zusammengeführt
    Merge {
        /// Index der verbleibenden Linie
        index: usize,
        /// Index der aufgelösten Linie (vor dem Merge)
        removed_index: usize,
        /// Geometrie der verbleibenden Linie vor dem Merge
        before: LineString,
        /// Geometrie der aufgelösten Linie
        removed: LineString,
        /// Zusammengeführte Geometrie
        after: LineString,
    },
    /// Linie verschoben: landet vor der Linie, die vorher bei `to` stand
    Move {
        /// Alter Index
        from: usize,
        /// Einfügeposition in alter Nummerierung (`0..=len`)
        to: usize,
    },
    /// Aktive Linie geändert
    Active {
        /// Aktive Linie vorher
        before: Option<usize>,
        /// Aktive Linie nachher
        after: Option<usize>,
    },
}

impl EditEvent {
    /// Kurzname für Logging (entspricht dem serialisierten `type`).
    pub fn kind(&self) -> &'static str {
        match self {
            EditEvent::Create { .. } => "create",
            EditEvent::Insert { .. } => "insert",
            EditEvent::Delete { .. } => "delete",
            EditEvent::Edit { .. } => "edit",
            EditEvent::Merge { .. } => "merge",
            EditEvent::Move { .. } => "move",
            EditEvent::Active { .. } => "active",
        }
    }

    /// Liefert die inversen Events in Abspielreihenfolge.
    pub fn invert(&self) -> Vec<EditEvent> {
        match self {
            EditEvent::Create { index, feature } | EditEvent::Insert { index, feature } => {
                vec![EditEvent::Delete {
                    index: *index,
                    feature: feature.clone(),
                }]
            }
            EditEvent::Delete { index, feature } => vec![EditEvent::Insert {
                index: *index,
                feature: feature.clone(),
            }],
            EditEvent::Edit {
                index,
                before,
                after,
            } => vec![EditEvent::Edit {
                index: *index,
                before: after.clone(),
                after: before.clone(),
            }],
            EditEvent::Merge {
                index,
                removed_index,
                before,
                removed,
                after,
            } => vec![
                EditEvent::Edit {
                    index: *index,
                    before: after.clone(),
                    after: before.clone(),
                },
                EditEvent::Insert {
                    index: *removed_index,
                    feature: removed.clone(),
                },
            ],
            EditEvent::Move { from, to } => {
                let inverse = if from > to {
                    EditEvent::Move {
                        from: *to,
                        to: from + 1,
                    }
                } else {
                    EditEvent::Move {
                        from: to - 1,
                        to: *from,
                    }
                };
                vec![inverse]
            }
            EditEvent::Active { before, after } => vec![EditEvent::Active {
                before: *after,
                after: *before,
            }],
        }
    }
}

/// Kehrt eine Vorwärts-Eventliste um: jedes Event invertiert, Reihenfolge rückwärts.
pub fn invert_all(events: &[EditEvent]) -> Vec<EditEvent> {
    events.iter().rev().flat_map(EditEvent::invert).collect()
}
