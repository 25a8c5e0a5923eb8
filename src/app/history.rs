use crate::core::{invert_all, EditEvent, TransectGeometry};
use std::sync::Arc;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Nutzt Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1),
/// der Geometrie-Klon findet erst beim nächsten `Arc::make_mut()` statt
/// (z.B. im Live-Drag des Stores).
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Geometrie nach der Operation
    pub geometry: Arc<TransectGeometry>,
    /// Aktive Linie nach der Operation
    pub active_line: Option<usize>,
}

impl Snapshot {
    /// Erstellt einen Snapshot.
    pub fn new(geometry: Arc<TransectGeometry>, active_line: Option<usize>) -> Self {
        Self {
            geometry,
            active_line,
        }
    }
}

/// Ein History-Eintrag: Zustand nach der Operation plus beide Eventrichtungen.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    /// Materialisierter Zustand
    pub snapshot: Snapshot,
    /// Events, die diesen Eintrag rückgängig machen (bereits in Abspielreihenfolge)
    pub undo_events: Vec<EditEvent>,
    /// Vorwärts-Events, die zu diesem Eintrag geführt haben
    pub redo_events: Vec<EditEvent>,
}

/// Event-basierter Undo/Redo-Verlauf mit Pointer auf den aktuellen Eintrag.
///
/// Eintrag 0 ist die Baseline (geladene Geometrie) und trägt keine Events.
#[derive(Debug, Default)]
pub struct EditHistory {
    entries: Vec<HistoryEntry>,
    pointer: usize,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        let max_depth = max_depth.max(1);
        Self {
            entries: Vec::with_capacity(max_depth),
            pointer: 0,
            max_depth,
        }
    }

    /// Verwirft den Verlauf; `baseline` wird Eintrag 0.
    pub fn reset(&mut self, baseline: Snapshot) {
        self.entries.clear();
        self.entries.push(HistoryEntry {
            snapshot: baseline,
            undo_events: Vec::new(),
            redo_events: Vec::new(),
        });
        self.pointer = 0;
    }

    /// Ändert die maximale Tiefe und kürzt bei Bedarf die ältesten Einträge.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth.max(1);
        self.trim();
    }

    /// Nimmt einen neuen Eintrag auf. Die Zukunft hinter dem Pointer wird verworfen.
    pub fn push(&mut self, snapshot: Snapshot, forward: Vec<EditEvent>) {
        if self.entries.is_empty() {
            self.reset(snapshot);
            return;
        }
        self.entries.truncate(self.pointer + 1);
        self.entries.push(HistoryEntry {
            snapshot,
            undo_events: invert_all(&forward),
            redo_events: forward,
        });
        self.pointer = self.entries.len() - 1;
        self.trim();
    }

    fn trim(&mut self) {
        if self.entries.len() <= self.max_depth {
            return;
        }
        let excess = self.entries.len() - self.max_depth;
        self.entries.drain(..excess);
        self.pointer = self.pointer.saturating_sub(excess);
        // Neue Baseline: von hier aus gibt es kein Zurück mehr.
        if let Some(first) = self.entries.first_mut() {
            first.undo_events.clear();
            first.redo_events.clear();
        }
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        self.pointer > 0
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        self.pointer + 1 < self.entries.len()
    }

    /// Geht einen Schritt zurück und liefert den nun aktuellen Snapshot sowie
    /// die Undo-Events des verlassenen Eintrags.
    pub fn undo(&mut self) -> Option<(Snapshot, Vec<EditEvent>)> {
        if !self.can_undo() {
            return None;
        }
        let events = self.entries[self.pointer].undo_events.clone();
        self.pointer -= 1;
        Some((self.entries[self.pointer].snapshot.clone(), events))
    }

    /// Geht einen Schritt vor und liefert Snapshot und Vorwärts-Events.
    pub fn redo(&mut self) -> Option<(Snapshot, Vec<EditEvent>)> {
        if !self.can_redo() {
            return None;
        }
        self.pointer += 1;
        let entry = &self.entries[self.pointer];
        Some((entry.snapshot.clone(), entry.redo_events.clone()))
    }

    /// Aktueller Eintrag.
    pub fn current(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.pointer)
    }

    /// Index des aktuellen Eintrags.
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Anzahl gespeicherter Einträge.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn noch keine Baseline existiert.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
