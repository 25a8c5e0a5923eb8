//! Segment teilen: Linie wird am Teilungspunkt in zwei Linien geschnitten.

use super::{push_active_change, EditOutcome};
use crate::core::geometry::normalize;
use crate::core::{EditError, EditEvent, IdxTuple, LineString, TransectGeometry};
use glam::DVec2;

/// Teilt das Segment `segment` am Punkt `split_point`.
///
/// Alles hinter dem Schnitt wird zur neuen Linie direkt dahinter. Beide Teile
/// teilen sich den Teilungspunkt (neue Naht). Zeigt die aktive Linie hinter
/// den Schnitt, wird sie um eins erhöht.
pub fn split_segment(
    geometry: &TransectGeometry,
    segment: IdxTuple,
    split_point: DVec2,
    active: Option<usize>,
) -> Result<EditOutcome, EditError> {
    geometry.segment_checked(segment)?;
    let original = geometry.line_checked(segment.line)?;
    let points = original.points();
    let p = normalize(split_point);

    let mut head = points[..=segment.index].to_vec();
    head.push(p);
    let mut tail = vec![p];
    tail.extend_from_slice(&points[segment.index + 1..]);
    let head = LineString(head);
    let tail = LineString(tail);

    let mut lines = geometry.lines().to_vec();
    lines[segment.line] = head.clone();
    lines.insert(segment.line + 1, tail.clone());

    let mut events = vec![
        EditEvent::Edit {
            index: segment.line,
            before: original.clone(),
            after: head,
        },
        EditEvent::Insert {
            index: segment.line + 1,
            feature: tail,
        },
    ];

    let new_active = active.map(|a| if a > segment.line { a + 1 } else { a });
    push_active_change(&mut events, active, new_active);

    Ok(EditOutcome {
        geometry: TransectGeometry::from_lines_unchecked(lines),
        events,
        active: new_active,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::edit::test_support::{assert_events_replay, geom};

    #[test]
    fn split_erzeugt_zwei_linien_mit_naht() {
        let g = geom(&[&[(0.0, 0.0), (0.0, 10.0), (0.0, 20.0)]]);
        let out = split_segment(&g, IdxTuple::new(0, 1), DVec2::new(0.0, 15.0), None).unwrap();

        assert_eq!(out.geometry.line_count(), 2);
        assert_eq!(
            out.geometry.line(0).unwrap().points(),
            &[
                DVec2::new(0.0, 0.0),
                DVec2::new(0.0, 10.0),
                DVec2::new(0.0, 15.0)
            ]
        );
        assert_eq!(
            out.geometry.line(1).unwrap().points(),
            &[DVec2::new(0.0, 15.0), DVec2::new(0.0, 20.0)]
        );
        assert!(out.geometry.is_seam(0));

        let kinds: Vec<&str> = out.events.iter().map(EditEvent::kind).collect();
        assert_eq!(kinds, vec!["edit", "insert"]);
        assert_events_replay(&g, &out.geometry, &out.events);
    }

    #[test]
    fn split_korrigiert_aktive_linie_hinter_dem_schnitt() {
        let g = geom(&[
            &[(0.0, 0.0), (0.0, 10.0)],
            &[(5.0, 0.0), (5.0, 10.0)],
        ]);
        let out = split_segment(&g, IdxTuple::new(0, 0), DVec2::new(0.0, 5.0), Some(1)).unwrap();

        assert_eq!(out.active, Some(2));
        assert_eq!(
            out.events.last(),
            Some(&EditEvent::Active {
                before: Some(1),
                after: Some(2)
            })
        );
    }

    #[test]
    fn split_laesst_aktive_linie_vor_dem_schnitt() {
        let g = geom(&[
            &[(0.0, 0.0), (0.0, 10.0)],
            &[(5.0, 0.0), (5.0, 10.0)],
        ]);
        let out = split_segment(&g, IdxTuple::new(1, 0), DVec2::new(5.0, 5.0), Some(1)).unwrap();
        assert_eq!(out.active, Some(1));
        assert_eq!(out.events.len(), 2);
    }

    #[test]
    fn split_auf_unbekanntem_segment_ist_invariantenfehler() {
        let g = geom(&[&[(0.0, 0.0), (0.0, 10.0)]]);
        let err = split_segment(&g, IdxTuple::new(0, 1), DVec2::ZERO, None).unwrap_err();
        assert!(!err.is_recoverable());
    }
}
