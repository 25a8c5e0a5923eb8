//! Segmentbereich zu einem Segment zusammenfassen.

use super::{remove_point, EditOutcome};
use crate::core::{EditError, IdxTuple, InvariantViolation, TransectGeometry, ValidationError};

/// Fasst alle Segmente von `first` bis `last` (lineare Reihenfolge) zusammen,
/// indem die inneren Punkte von hinten nach vorne entfernt werden.
///
/// Die Reihenfolge der Argumente ist egal. Ein einzelnes Segment ist ein No-op.
pub fn merge_range(
    geometry: &TransectGeometry,
    first: IdxTuple,
    last: IdxTuple,
    active: Option<usize>,
) -> Result<EditOutcome, EditError> {
    geometry.segment_checked(first)?;
    geometry.segment_checked(last)?;

    let linear = geometry.linear_segments();
    let position = |seg: IdxTuple| {
        linear
            .iter()
            .position(|s| *s == seg)
            .ok_or(InvariantViolation::SegmentOutOfRange(seg))
    };
    let (mut from, mut to) = (position(first)?, position(last)?);
    if from > to {
        std::mem::swap(&mut from, &mut to);
    }
    if from == to {
        return Ok(EditOutcome::unchanged(geometry, active));
    }

    let range = &linear[from..=to];
    for pair in range.windows(2) {
        let (_, prev_end) = geometry.segment_checked(pair[0])?;
        let (next_start, _) = geometry.segment_checked(pair[1])?;
        if prev_end != next_start {
            return Err(ValidationError::NonContiguousRange {
                first: range[0],
                last: range[range.len() - 1],
                gap: pair[1],
            }
            .into());
        }
    }

    // Endpunkte aller Segmente außer dem letzten sind innere Punkte.
    let interior: Vec<IdxTuple> = range[..range.len() - 1]
        .iter()
        .map(|seg| IdxTuple::new(seg.line, seg.index + 1))
        .collect();

    let mut current = geometry.clone();
    let mut current_active = active;
    let mut events = Vec::new();
    for point in interior.into_iter().rev() {
        let step = remove_point(&current, point, current_active)?;
        current = step.geometry;
        current_active = step.active;
        events.extend(step.events);
    }

    Ok(EditOutcome {
        geometry: current,
        events,
        active: current_active,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::edit::split_segment;
    use crate::core::edit::test_support::{assert_events_replay, geom};
    use crate::core::EditEvent;
    use glam::DVec2;

    #[test]
    fn bereich_innerhalb_einer_linie() {
        let g = geom(&[&[(0.0, 0.0), (0.0, 10.0), (0.0, 20.0), (0.0, 30.0)]]);
        let out = merge_range(&g, IdxTuple::new(0, 0), IdxTuple::new(0, 2), None).unwrap();

        assert_eq!(out.geometry, geom(&[&[(0.0, 0.0), (0.0, 30.0)]]));
        assert_eq!(out.events.len(), 2);
        assert_events_replay(&g, &out.geometry, &out.events);
    }

    #[test]
    fn reihenfolge_der_argumente_egal() {
        let g = geom(&[&[(0.0, 0.0), (0.0, 10.0), (0.0, 20.0)]]);
        let a = merge_range(&g, IdxTuple::new(0, 1), IdxTuple::new(0, 0), None).unwrap();
        let b = merge_range(&g, IdxTuple::new(0, 0), IdxTuple::new(0, 1), None).unwrap();
        assert_eq!(a.geometry, b.geometry);
    }

    #[test]
    fn einzelnes_segment_ist_noop() {
        let g = geom(&[&[(0.0, 0.0), (0.0, 10.0), (0.0, 20.0)]]);
        let out = merge_range(&g, IdxTuple::new(0, 1), IdxTuple::new(0, 1), Some(0)).unwrap();
        assert!(out.is_noop());
        assert_eq!(out.geometry, g);
    }

    #[test]
    fn split_und_merge_stellen_linie_wieder_her() {
        let g = geom(&[&[(0.0, 0.0), (0.0, 10.0), (0.0, 20.0)]]);
        let split = split_segment(&g, IdxTuple::new(0, 1), DVec2::new(0.0, 15.0), None).unwrap();
        let merged = merge_range(
            &split.geometry,
            IdxTuple::new(0, 1),
            IdxTuple::new(1, 0),
            None,
        )
        .unwrap();

        assert_eq!(merged.geometry, g);
        assert!(matches!(merged.events[0], EditEvent::Merge { .. }));
    }

    #[test]
    fn luecke_zwischen_linien_wird_abgelehnt() {
        let g = geom(&[&[(0.0, 0.0), (0.0, 10.0)], &[(5.0, 10.0), (5.0, 20.0)]]);
        let err = merge_range(&g, IdxTuple::new(0, 0), IdxTuple::new(1, 0), None).unwrap_err();
        assert_eq!(
            err,
            EditError::Validation(ValidationError::NonContiguousRange {
                first: IdxTuple::new(0, 0),
                last: IdxTuple::new(1, 0),
                gap: IdxTuple::new(1, 0),
            })
        );
    }

    #[test]
    fn merge_ueber_naht_korrigiert_aktive_linie() {
        let g = geom(&[
            &[(0.0, 0.0), (0.0, 10.0)],
            &[(0.0, 10.0), (0.0, 20.0)],
            &[(0.0, 20.0), (0.0, 30.0)],
            &[(7.0, 0.0), (7.0, 5.0)],
        ]);
        let out = merge_range(&g, IdxTuple::new(0, 0), IdxTuple::new(2, 0), Some(3)).unwrap();

        assert_eq!(out.geometry, geom(&[&[(0.0, 0.0), (0.0, 30.0)], &[(7.0, 0.0), (7.0, 5.0)]]));
        assert_eq!(out.active, Some(1));
        assert_events_replay(&g, &out.geometry, &out.events);
    }
}
