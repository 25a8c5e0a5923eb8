//! Use-Case: Segmentbereich zusammenfassen.

use super::commit::{apply_outcome, Commit};
use crate::app::AppState;
use crate::core::{edit, IdxTuple};

/// Fasst die Segmente von `first` bis `last` zu einem Segment zusammen.
pub fn merge_segments(
    state: &mut AppState,
    first: IdxTuple,
    last: IdxTuple,
) -> anyhow::Result<Commit> {
    let result = edit::merge_range(state.geometry(), first, last, state.active_line);
    apply_outcome(state, "Segmente zusammenfassen", result)
}
