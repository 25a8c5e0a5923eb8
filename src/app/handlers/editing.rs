//! Handler für Editing-Operationen ohne Zeiger-Geste.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::IdxTuple;
use glam::DVec2;

/// Setzt die aktive Linie.
pub fn set_active_line(state: &mut AppState, line: Option<usize>) -> anyhow::Result<()> {
    use_cases::editing::set_active_line(state, line)
}

/// Hängt eine neue Linie an.
pub fn append_line(state: &mut AppState, points: Vec<DVec2>) -> anyhow::Result<()> {
    use_cases::editing::append_line(state, points).map(|_| ())
}

/// Setzt eine geparkte Overlap-Auswahl fort.
pub fn resolve_overlap(state: &mut AppState, chosen: IdxTuple) -> anyhow::Result<()> {
    use_cases::editing::resolve_choice(state, chosen)
}
