use super::super::state::SelectMode;
use crate::core::{IdxTuple, ShapeHandle, TransectGeometry};
use crate::shared::EditorOptions;
use glam::DVec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus Host/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Geometrie aus Datei öffnen
    OpenGeometryRequested { path: String },
    /// Geometrie unter Pfad speichern
    SaveGeometryRequested { path: String },
    /// Host hat eine bereits geparste Geometrie übergeben
    GeometryLoaded { geometry: TransectGeometry },
    /// Optionen geändert
    OptionsChanged { options: EditorOptions },
    /// Undo
    UndoRequested,
    /// Redo
    RedoRequested,
    /// Zeiger gedrückt (optional auf einer Form)
    PointerDown {
        pos: DVec2,
        target: Option<ShapeHandle>,
    },
    /// Zeiger bewegt
    PointerMove { pos: DVec2 },
    /// Zeiger losgelassen
    PointerUp { pos: DVec2 },
    /// Klick (folgt auf PointerUp)
    Click {
        pos: DVec2,
        target: Option<ShapeHandle>,
    },
    /// Doppelklick
    DoubleClick {
        pos: DVec2,
        target: Option<ShapeHandle>,
    },
    /// Abbruch-Taste
    CancelPressed,
    /// Runde der Host-Event-Loop (führt zurückgestellte Aufgaben und Timer aus)
    Tick { now_ms: u64 },
    /// Split-Modus aktivieren
    SplitModeRequested,
    /// Auswahlmodus aktivieren
    SelectModeRequested { mode: SelectMode },
    /// Startpunkt-Verlegen aktivieren
    ShiftStartModeRequested,
    /// Benutzer hat bei einer Overlap-Auswahl gewählt
    OverlapChosen { chosen: IdxTuple },
    /// Aktive Linie setzen
    SetActiveLineRequested { line: Option<usize> },
    /// Neue Linie anhängen
    AppendLineRequested { points: Vec<DVec2> },
}
