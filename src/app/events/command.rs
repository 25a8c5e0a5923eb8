use super::super::state::SelectMode;
use crate::core::{IdxTuple, ShapeHandle, TransectGeometry};
use crate::shared::EditorOptions;
use glam::DVec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Geometrie aus Datei laden
    LoadFile { path: String },
    /// Geometrie in Datei schreiben
    SaveFile { path: String },
    /// Geometrie übernehmen und History zurücksetzen
    LoadGeometry { geometry: TransectGeometry },
    /// Optionen übernehmen
    ApplyOptions { options: EditorOptions },
    /// Undo-Schritt
    Undo,
    /// Redo-Schritt
    Redo,
    /// Laufenden Modus abbrechen bzw. abschließen
    CancelInteraction,
    /// Laufenden Drag verwerfen, sonstigen Zustand behalten
    CancelDrag,
    /// Pointer-Down verarbeiten (ggf. Drag beginnen)
    BeginPointer {
        pos: DVec2,
        target: Option<ShapeHandle>,
    },
    /// Pointer-Move verarbeiten (Live-Drag)
    MovePointer { pos: DVec2 },
    /// Pointer-Up verarbeiten (Drag festschreiben)
    EndPointer { pos: DVec2 },
    /// Klick verarbeiten
    HandleClick {
        pos: DVec2,
        target: Option<ShapeHandle>,
    },
    /// Doppelklick verarbeiten
    HandleDoubleClick {
        pos: DVec2,
        target: Option<ShapeHandle>,
    },
    /// Host-Uhr fortschreiben (Klick-Timer)
    AdvanceClock { now_ms: u64 },
    /// Zurückgestellte Aufgaben ausführen
    RunDeferredTasks,
    /// Split-Modus betreten
    EnterSplitMode,
    /// Auswahlmodus betreten
    EnterSelectMode { mode: SelectMode },
    /// Startpunkt-Modus betreten
    EnterShiftStartMode,
    /// Geparkte Overlap-Auswahl auflösen
    ResolveOverlap { chosen: IdxTuple },
    /// Aktive Linie setzen
    SetActiveLine { line: Option<usize> },
    /// Neue Linie anhängen
    AppendLine { points: Vec<DVec2> },
}
