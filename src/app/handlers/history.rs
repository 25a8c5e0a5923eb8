//! Handler für Undo/Redo-Operationen.

use crate::app::history::Snapshot;
use crate::app::AppState;
use crate::core::EditEvent;

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut AppState) {
    if let Some((snapshot, events)) = state.history.undo() {
        restore(state, snapshot, events);
        log::info!("Undo ausgeführt");
    } else {
        log::debug!("Undo: nichts zu tun");
    }
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut AppState) {
    if let Some((snapshot, events)) = state.history.redo() {
        restore(state, snapshot, events);
        log::info!("Redo ausgeführt");
    } else {
        log::debug!("Redo: nichts zu tun");
    }
}

/// Stellt einen Snapshot wieder her und meldet die Events.
///
/// Aktive-Linien-Wechsel haben keinen History-Eintrag; weicht die aktive
/// Linie des Snapshots vom zuletzt gemeldeten Stand ab, wird ein
/// `active`-Event angehängt.
fn restore(state: &mut AppState, snapshot: Snapshot, mut events: Vec<EditEvent>) {
    let reported = events
        .iter()
        .rev()
        .find_map(|event| match event {
            EditEvent::Active { after, .. } => Some(*after),
            _ => None,
        })
        .unwrap_or(state.active_line);
    if reported != snapshot.active_line {
        events.push(EditEvent::Active {
            before: reported,
            after: snapshot.active_line,
        });
    }

    state.interaction.clear_transient();
    state.set_geometry(snapshot.geometry, snapshot.active_line, None);
    log::debug!("{} Event(s) gemeldet", events.len());
    state.emit(&events);
}
