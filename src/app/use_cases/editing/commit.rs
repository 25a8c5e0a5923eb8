//! Festschreiben eines Operationsergebnisses: History, Rebuild, Benachrichtigung.

use crate::app::AppState;
use crate::core::{EditError, EditOutcome};
use std::sync::Arc;

/// Ergebnis eines Festschreib-Versuchs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// Geometrie geändert, History-Eintrag angelegt, Events gemeldet
    Applied,
    /// Operation ohne Wirkung (kein History-Eintrag)
    Unchanged,
    /// Validierung fehlgeschlagen, Store unverändert
    Rejected,
}

impl Commit {
    /// Gibt `true` zurück, wenn die Geometrie geändert wurde.
    pub fn is_applied(self) -> bool {
        self == Commit::Applied
    }
}

/// Übernimmt das Ergebnis einer reinen Editier-Operation in den AppState.
///
/// Reihenfolge: History-Eintrag → Rebuild → transiente Ziele verwerfen
/// (falls sich die Nummerierung geändert hat) → Events melden.
/// Validierungsfehler werden geloggt und in `last_error` abgelegt;
/// Invarianten-Verletzungen werden als Fehler weitergereicht.
pub fn apply_outcome(
    state: &mut AppState,
    label: &str,
    result: Result<EditOutcome, EditError>,
) -> anyhow::Result<Commit> {
    let outcome = match result {
        Ok(outcome) => outcome,
        Err(EditError::Validation(err)) => {
            log::warn!("{} abgelehnt: {}", label, err);
            state.last_error = Some(err);
            return Ok(Commit::Rejected);
        }
        Err(EditError::Invariant(err)) => {
            return Err(anyhow::Error::new(err).context(format!("{}: Invariante verletzt", label)));
        }
    };

    if outcome.is_noop() {
        log::debug!("{}: keine Änderung", label);
        return Ok(Commit::Unchanged);
    }

    let renumbered = !state.geometry().same_numbering(&outcome.geometry);
    let EditOutcome {
        geometry,
        events,
        active,
    } = outcome;

    state.set_geometry(Arc::new(geometry), active, Some(events.clone()));
    if renumbered {
        state.interaction.clear_transient();
    }
    state.last_error = None;

    log::info!("{}: {} Event(s) festgeschrieben", label, events.len());
    state.emit(&events);
    Ok(Commit::Applied)
}
