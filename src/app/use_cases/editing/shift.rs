//! Use-Case: Startpunkt des Transekts verlegen.

use super::commit::{apply_outcome, Commit};
use crate::app::state::InteractionMode;
use crate::app::AppState;
use crate::core::{edit, IdxTuple};

/// Macht die Linie an `point` zum Anfang der Gruppe 0.
///
/// Bei Erfolg (oder No-op) endet der Startpunkt-Modus, bei Ablehnung bleibt er aktiv.
pub fn shift_start(state: &mut AppState, point: IdxTuple) -> anyhow::Result<Commit> {
    let result = edit::shift_group_start(state.geometry(), point, state.active_line);
    let commit = apply_outcome(state, "Startpunkt verlegen", result)?;
    if commit != Commit::Rejected && matches!(state.interaction.mode, InteractionMode::ShiftingStart)
    {
        state.set_mode(InteractionMode::Idle);
    }
    Ok(commit)
}
