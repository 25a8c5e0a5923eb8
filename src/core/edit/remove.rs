//! Punkt entfernen. Der Fall ergibt sich aus den vorhandenen Nachbarn:
//!
//! 1. beide Nachbarn in derselben Linie → Punkt herausschneiden
//! 2. nur Vorgänger (Linienende) → letztes Segment fällt weg
//! 3. nur Nachfolger (Linienanfang) → erstes Segment fällt weg
//! 4. Nachbarn in zwei über eine Naht verbundenen Linien → Linien-Merge

use super::{push_active_change, EditOutcome};
use crate::core::{
    EditError, EditEvent, IdxTuple, InvariantViolation, LineString, TransectGeometry,
    ValidationError,
};

/// Entfernt den Punkt `point`.
pub fn remove_point(
    geometry: &TransectGeometry,
    point: IdxTuple,
    active: Option<usize>,
) -> Result<EditOutcome, EditError> {
    geometry.point_checked(point)?;

    match (geometry.prev_point(point), geometry.next_point(point)) {
        (Some(prev), Some(next)) if prev.line == point.line && next.line == point.line => {
            splice_point(geometry, point, active)
        }
        (Some(prev), Some(next)) => merge_at_seam(geometry, prev.line, next.line, active),
        (Some(_), None) | (None, Some(_)) => drop_end_segment(geometry, point, active),
        (None, None) => Err(InvariantViolation::IsolatedPoint(point).into()),
    }
}

fn splice_point(
    geometry: &TransectGeometry,
    point: IdxTuple,
    active: Option<usize>,
) -> Result<EditOutcome, EditError> {
    let original = geometry.line_checked(point.line)?;
    let mut points = original.points().to_vec();
    points.remove(point.index);
    replace_line(geometry, point.line, original, LineString(points), active)
}

fn drop_end_segment(
    geometry: &TransectGeometry,
    point: IdxTuple,
    active: Option<usize>,
) -> Result<EditOutcome, EditError> {
    let original = geometry.line_checked(point.line)?;

    if original.segment_count() > 1 {
        let mut points = original.points().to_vec();
        points.remove(point.index);
        return replace_line(geometry, point.line, original, LineString(points), active);
    }

    // Einziges Segment der Linie: die Linie verschwindet komplett.
    if geometry.line_count() == 1 {
        return Err(ValidationError::LastSegment.into());
    }

    let mut lines = geometry.lines().to_vec();
    lines.remove(point.line);

    let new_active = match active {
        Some(a) if a == point.line => None,
        Some(a) if a > point.line => Some(a - 1),
        other => other,
    };

    let mut events = vec![EditEvent::Delete {
        index: point.line,
        feature: original.clone(),
    }];
    push_active_change(&mut events, active, new_active);

    Ok(EditOutcome {
        geometry: TransectGeometry::from_lines_unchecked(lines),
        events,
        active: new_active,
    })
}

fn merge_at_seam(
    geometry: &TransectGeometry,
    keep: usize,
    removed: usize,
    active: Option<usize>,
) -> Result<EditOutcome, EditError> {
    debug_assert_eq!(keep + 1, removed, "Naht verbindet nur aufeinanderfolgende Linien");
    let head = geometry.line_checked(keep)?;
    let tail = geometry.line_checked(removed)?;

    let mut points = head.points()[..head.len() - 1].to_vec();
    points.extend_from_slice(&tail.points()[1..]);
    let merged = LineString(points);

    let mut lines = geometry.lines().to_vec();
    lines[keep] = merged.clone();
    lines.remove(removed);

    let new_active = active.map(|a| if a > keep { a - 1 } else { a });

    let mut events = vec![EditEvent::Merge {
        index: keep,
        removed_index: removed,
        before: head.clone(),
        removed: tail.clone(),
        after: merged,
    }];
    push_active_change(&mut events, active, new_active);

    Ok(EditOutcome {
        geometry: TransectGeometry::from_lines_unchecked(lines),
        events,
        active: new_active,
    })
}

fn replace_line(
    geometry: &TransectGeometry,
    line: usize,
    original: &LineString,
    updated: LineString,
    active: Option<usize>,
) -> Result<EditOutcome, EditError> {
    let mut lines = geometry.lines().to_vec();
    lines[line] = updated.clone();
    Ok(EditOutcome {
        geometry: TransectGeometry::from_lines_unchecked(lines),
        events: vec![EditEvent::Edit {
            index: line,
            before: original.clone(),
            after: updated,
        }],
        active,
    })
}
