//! Positionale Identitäten: Index-Tupel und Render-Handles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Positionale Identität `(line, index)` eines Punkts oder Segments.
///
/// Ändert sich, sobald eine strukturelle Bearbeitung davor liegende Indizes
/// verschiebt. Wird deshalb nie über einen Commit hinweg gehalten.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct IdxTuple {
    /// Index der Linie
    pub line: usize,
    /// Punkt- bzw. Segment-Index innerhalb der Linie
    pub index: usize,
}

impl IdxTuple {
    /// Erstellt ein neues Index-Tupel.
    pub const fn new(line: usize, index: usize) -> Self {
        Self { line, index }
    }
}

impl fmt::Display for IdxTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.line, self.index)
    }
}

impl From<(usize, usize)> for IdxTuple {
    fn from((line, index): (usize, usize)) -> Self {
        Self { line, index }
    }
}

/// Art einer gerenderten Form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Einzelner Punkt (Vertex)
    Point,
    /// Linienstück zwischen zwei Punkten
    Segment,
    /// Puffer-Polygon um ein Segment
    Corridor,
}

/// Identität einer Render-Form.
///
/// Handles tragen die Generation des Stores, in der sie erzeugt wurden.
/// Nach jedem Rebuild sind alle älteren Handles ungültig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeHandle {
    /// Store-Generation bei Erzeugung
    pub generation: u64,
    /// Laufende Nummer innerhalb der Generation
    pub id: u32,
}
