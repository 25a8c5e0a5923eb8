//! Use-Case: Punkte einfügen, entfernen und zur Bearbeitung auswählen.

use super::commit::{apply_outcome, Commit};
use super::overlap_gate;
use crate::app::state::{InteractionMode, PendingAction};
use crate::app::AppState;
use crate::core::{edit, IdxTuple};
use glam::DVec2;

/// Fügt in `segment` einen Punkt am Lotfußpunkt von `pos` ein.
///
/// Mit `options.edit_inserted_point` wird der neue Punkt danach (über das
/// Overlap-Gate) zur Bearbeitung ausgewählt.
pub fn insert_point_at(
    state: &mut AppState,
    segment: IdxTuple,
    pos: DVec2,
) -> anyhow::Result<Commit> {
    let (a, b) = state.geometry().segment_checked(segment)?;
    let projected = state
        .store
        .corridors()
        .geo()
        .closest_point_on_segment(pos, a, b);

    let result = edit::insert_point(state.geometry(), segment, projected, state.active_line);
    let commit = apply_outcome(state, "Punkt einfügen", result)?;

    if commit.is_applied() && state.options.edit_inserted_point {
        let inserted = IdxTuple::new(segment.line, segment.index + 1);
        overlap_gate::request(state, PendingAction::EditPoint(inserted))?;
    }
    Ok(commit)
}

/// Entfernt einen Punkt (ohne Overlap-Prüfung).
pub fn remove_point(state: &mut AppState, point: IdxTuple) -> anyhow::Result<Commit> {
    let result = edit::remove_point(state.geometry(), point, state.active_line);
    apply_outcome(state, "Punkt entfernen", result)
}

/// Wählt einen Punkt zur Bearbeitung aus (ohne Overlap-Prüfung).
pub fn start_editing(state: &mut AppState, point: IdxTuple) -> anyhow::Result<()> {
    state.geometry().point_checked(point)?;
    state.set_mode(InteractionMode::EditingPoint { point });
    log::info!("Bearbeite Punkt {}", point);
    Ok(())
}
