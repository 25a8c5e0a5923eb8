//! Use-Case: Segment am Lotfußpunkt teilen.

use super::commit::{apply_outcome, Commit};
use crate::app::AppState;
use crate::core::{edit, IdxTuple};
use glam::DVec2;

/// Teilt `segment` am Lotfußpunkt von `pos`.
pub fn split_segment_at(
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

    let result = edit::split_segment(state.geometry(), segment, projected, state.active_line);
    apply_outcome(state, "Segment teilen", result)
}
