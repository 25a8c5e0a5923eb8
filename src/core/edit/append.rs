//! Neue Linie am Ende des Transekts anlegen.

use super::EditOutcome;
use crate::core::{EditError, EditEvent, TransectGeometry};
use glam::DVec2;

/// Hängt eine neue Linie aus `points` an (mindestens zwei endliche Punkte).
pub fn append_line(
    geometry: &TransectGeometry,
    points: Vec<DVec2>,
    active: Option<usize>,
) -> Result<EditOutcome, EditError> {
    let feature = TransectGeometry::from_coords(vec![points])?
        .lines()
        .first()
        .cloned()
        .unwrap_or_default();

    let index = geometry.line_count();
    let mut lines = geometry.lines().to_vec();
    lines.push(feature.clone());

    Ok(EditOutcome {
        geometry: TransectGeometry::from_lines_unchecked(lines),
        events: vec![EditEvent::Create { index, feature }],
        active,
    })
}
