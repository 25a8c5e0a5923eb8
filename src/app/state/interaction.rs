use crate::core::{DragSession, IdxTuple};
use crate::shared::ModeKind;
use std::collections::VecDeque;

/// Auswahlart im Selektionsmodus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectMode {
    /// Segmentbereich (zwei Klicks → Merge)
    Segment,
    /// Linie (ein Klick → aktive Linie)
    Line,
}

/// Laufender Drag samt Rückkehr-Modus.
#[derive(Debug, Clone)]
pub struct DragState {
    /// Drag-Sitzung (Ziel, Ursprungspositionen, Geometrie vor dem Drag)
    pub session: DragSession,
    /// Punkt, dessen Bearbeitung nach dem Drag fortgesetzt wird
    pub resume_editing: Option<IdxTuple>,
}

/// Gesten-Modus des Editors
#[derive(Debug, Clone, Default)]
pub enum InteractionMode {
    /// Nichts aktiv
    #[default]
    Idle,
    /// Punkt ist zur Bearbeitung ausgewählt (ziehbar)
    EditingPoint {
        /// Bearbeiteter Punkt
        point: IdxTuple,
    },
    /// Punkt oder Korridor wird gezogen
    Dragging(DragState),
    /// Nächster Segment-Klick teilt
    Splitting,
    /// Auswahl
    Selecting {
        /// Auswahlart
        mode: SelectMode,
        /// Erstes gewähltes Segment
        anchor: Option<IdxTuple>,
    },
    /// Nächster Punkt-Klick verlegt den Startpunkt
    ShiftingStart,
}

impl InteractionMode {
    /// Grobe Art für die Stil-Berechnung.
    pub fn kind(&self) -> ModeKind {
        match self {
            InteractionMode::Idle => ModeKind::Idle,
            InteractionMode::EditingPoint { .. } => ModeKind::EditingPoint,
            InteractionMode::Dragging(_) => ModeKind::Dragging,
            InteractionMode::Splitting => ModeKind::Splitting,
            InteractionMode::Selecting {
                mode: SelectMode::Segment,
                ..
            } => ModeKind::SelectingSegment,
            InteractionMode::Selecting {
                mode: SelectMode::Line,
                ..
            } => ModeKind::SelectingLine,
            InteractionMode::ShiftingStart => ModeKind::ShiftingStart,
        }
    }
}

/// Punkt-bezogene Aktion, die vor der Ausführung ggf. eine Overlap-Auswahl braucht.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    /// Bearbeitung starten
    EditPoint(IdxTuple),
    /// Punkt entfernen
    RemovePoint(IdxTuple),
    /// Startpunkt verlegen
    ShiftStart(IdxTuple),
}

impl PendingAction {
    /// Zielpunkt der Aktion.
    pub fn target(&self) -> IdxTuple {
        match *self {
            PendingAction::EditPoint(p)
            | PendingAction::RemovePoint(p)
            | PendingAction::ShiftStart(p) => p,
        }
    }

    /// Gleiche Aktion mit anderem Zielpunkt.
    pub fn with_target(self, point: IdxTuple) -> Self {
        match self {
            PendingAction::EditPoint(_) => PendingAction::EditPoint(point),
            PendingAction::RemovePoint(_) => PendingAction::RemovePoint(point),
            PendingAction::ShiftStart(_) => PendingAction::ShiftStart(point),
        }
    }
}

/// Geparkte Aktion, die auf die Wahl zwischen zwei Kandidaten wartet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingChoice {
    /// Aufgeschobene Aktion
    pub action: PendingAction,
    /// Zusammenfallende Punkte
    pub candidates: [IdxTuple; 2],
}

/// Einzelklick, der bis zum Ablauf des Zeitfensters zurückgehalten wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingClick {
    /// Auszuführende Aktion
    pub action: PendingAction,
    /// Ablaufzeitpunkt (ms, Host-Uhr)
    pub deadline_ms: u64,
}

/// Beim nächsten Tick auszuführende Aufgabe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredTask {
    /// Drag-Nachlauf-Flag zurücksetzen
    ClearDragTail,
}

/// Transienter Interaktionszustand
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    /// Aktueller Modus
    pub mode: InteractionMode,
    /// Letzter Pointer-Up hat einen Drag beendet; der folgende Klick wird ignoriert
    pub drag_tail: bool,
    /// Aufgaben für den nächsten Tick
    pub deferred: VecDeque<DeferredTask>,
    /// Zurückgehaltener Einzelklick
    pub pending_click: Option<PendingClick>,
    /// Geparkte Overlap-Auswahl
    pub pending_choice: Option<PendingChoice>,
    /// Zuletzt gemeldete Host-Zeit
    pub now_ms: u64,
}

impl InteractionState {
    /// Erstellt einen leeren Interaktionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verwirft alle Index-Tupel-bezogenen transienten Ziele.
    pub fn clear_transient(&mut self) {
        self.mode = InteractionMode::Idle;
        self.pending_click = None;
        self.pending_choice = None;
    }

    /// Bearbeiteter bzw. gezogener Punkt.
    pub fn focus_point(&self) -> Option<IdxTuple> {
        match &self.mode {
            InteractionMode::EditingPoint { point } => Some(*point),
            InteractionMode::Dragging(drag) => match drag.session.target() {
                crate::core::DragTarget::Point(p) => Some(p),
                crate::core::DragTarget::Corridor(_) => None,
            },
            _ => None,
        }
    }

    /// Auswahl-Anker bzw. gezogener Korridor.
    pub fn focus_segment(&self) -> Option<IdxTuple> {
        match &self.mode {
            InteractionMode::Selecting { anchor, .. } => *anchor,
            InteractionMode::Dragging(drag) => match drag.session.target() {
                crate::core::DragTarget::Corridor(seg) => Some(seg),
                crate::core::DragTarget::Point(_) => None,
            },
            _ => None,
        }
    }
}
