//! Use-Case: aktive Linie setzen und neue Linien anhängen.

use super::commit::{apply_outcome, Commit};
use crate::app::AppState;
use crate::core::{edit, EditEvent};
use glam::DVec2;

/// Setzt die aktive Linie. Reine Benachrichtigung, kein History-Eintrag.
pub fn set_active_line(state: &mut AppState, line: Option<usize>) -> anyhow::Result<()> {
    if let Some(line) = line {
        state.geometry().line_checked(line)?;
    }
    if state.active_line == line {
        log::debug!("Aktive Linie unverändert: {:?}", line);
        return Ok(());
    }

    let before = state.active_line;
    state.active_line = line;
    state.mark_scene_dirty();
    log::info!("Aktive Linie: {:?} → {:?}", before, line);
    state.emit(&[EditEvent::Active {
        before,
        after: line,
    }]);
    Ok(())
}

/// Hängt eine neue Linie an das Transekt an.
pub fn append_line(state: &mut AppState, points: Vec<DVec2>) -> anyhow::Result<Commit> {
    let result = edit::append_line(state.geometry(), points, state.active_line);
    apply_outcome(state, "Linie anhängen", result)
}
