//! Fehler-Taxonomie der Editier-Engine.
//!
//! - `ValidationError`: abgelehnte Vorbedingung, Store bleibt unverändert,
//!   der Aufrufer meldet es dem Benutzer.
//! - `InvariantViolation`: Programmierfehler (Index zeigt ins Leere). Wird
//!   nicht still korrigiert, weil sonst die History korrumpiert würde.

use super::IdxTuple;
use thiserror::Error;

/// Wiederherstellbare Validierungsfehler (keine Mutation).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Segmentbereich ist keine zusammenhängende Kette
    #[error("Segmente {first} bis {last} bilden keine zusammenhängende Kette (Lücke vor {gap})")]
    NonContiguousRange {
        /// Erstes Segment des Bereichs
        first: IdxTuple,
        /// Letztes Segment des Bereichs
        last: IdxTuple,
        /// Segment, dessen Start nicht am Vorgänger anschließt
        gap: IdxTuple,
    },
    /// Punkt ist kein Linienanfang/-ende in Gruppe 0
    #[error("Punkt {0} kann nicht Startpunkt des Transekts werden")]
    NotGroupStartCandidate(IdxTuple),
    /// Das letzte Segment des Transekts kann nicht entfernt werden
    #[error("Das letzte verbleibende Segment kann nicht entfernt werden")]
    LastSegment,
    /// Eingabegeometrie verletzt die Strukturregeln
    #[error("Ungültige Geometrie: {0}")]
    InvalidGeometry(String),
}

/// Interne Invarianten-Verletzung (Programmierfehler).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// Linie existiert nicht
    #[error("Linie {line} existiert nicht (Anzahl Linien: {line_count})")]
    LineOutOfRange {
        /// Angefragter Linien-Index
        line: usize,
        /// Aktuelle Linienanzahl
        line_count: usize,
    },
    /// Punkt existiert nicht
    #[error("Punkt {0} existiert nicht")]
    PointOutOfRange(IdxTuple),
    /// Segment existiert nicht
    #[error("Segment {0} existiert nicht")]
    SegmentOutOfRange(IdxTuple),
    /// Render-Handle stammt aus einer älteren Store-Generation
    #[error("Render-Handle ist veraltet (Generation {handle}, aktuell {current})")]
    StaleHandle {
        /// Generation des Handles
        handle: u64,
        /// Aktuelle Store-Generation
        current: u64,
    },
    /// Punkt hat keinen Nachbarn (Linie mit < 2 Punkten)
    #[error("Punkt {0} hat keinen Nachbarn")]
    IsolatedPoint(IdxTuple),
}

/// Fehler einer Editier-Operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// Abgelehnte Vorbedingung
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Programmierfehler
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

impl EditError {
    /// Gibt `true` zurück, wenn der Fehler dem Benutzer gemeldet werden kann.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, EditError::Validation(_))
    }
}
