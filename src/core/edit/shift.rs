//! Startpunkt des Transekts verlegen (Rotation der Gruppe 0).

use super::{push_active_change, EditOutcome};
use crate::core::{EditError, EditEvent, IdxTuple, TransectGeometry, ValidationError};

/// Macht die Linie an `point` zur ersten Linie der Gruppe 0.
///
/// Zulässig sind nur Anfangs- und Endpunkte von Linien der Gruppe 0. Ein
/// Endpunkt rotiert die nachfolgende Linie nach vorne (am Gruppenende zurück
/// auf den Gruppenanfang).
pub fn shift_group_start(
    geometry: &TransectGeometry,
    point: IdxTuple,
    active: Option<usize>,
) -> Result<EditOutcome, EditError> {
    geometry.point_checked(point)?;
    let line = geometry.line_checked(point.line)?;

    let group = geometry
        .groups()
        .into_iter()
        .next()
        .filter(|g| g.contains(&point.line))
        .ok_or(ValidationError::NotGroupStartCandidate(point))?;

    let target = if point.index == 0 {
        point.line
    } else if point.index + 1 == line.len() {
        if point.line + 1 == group.end {
            group.start
        } else {
            point.line + 1
        }
    } else {
        return Err(ValidationError::NotGroupStartCandidate(point).into());
    };

    if target == group.start {
        log::debug!("Startpunkt {} ist bereits Gruppenanfang", point);
        return Ok(EditOutcome::unchanged(geometry, active));
    }

    let mut lines = geometry.lines().to_vec();
    lines[group.start..group.end].rotate_left(target - group.start);

    let mut events: Vec<EditEvent> = (0..group.end - target)
        .map(|i| EditEvent::Move {
            from: target + i,
            to: group.start + i,
        })
        .collect();

    let new_active = active.map(|a| {
        if !group.contains(&a) {
            a
        } else if a >= target {
            group.start + (a - target)
        } else {
            a + (group.end - target)
        }
    });
    push_active_change(&mut events, active, new_active);

    Ok(EditOutcome {
        geometry: TransectGeometry::from_lines_unchecked(lines),
        events,
        active: new_active,
    })
}
