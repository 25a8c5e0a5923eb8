//! Punkt in ein Segment einfügen (ohne neue Linie).

use super::EditOutcome;
use crate::core::geometry::normalize;
use crate::core::{EditError, EditEvent, IdxTuple, LineString, TransectGeometry};
use glam::DVec2;

/// Unterteilt `segment` am Punkt `point`. Der neue Punkt erhält den Index
/// `segment.index + 1`.
pub fn insert_point(
    geometry: &TransectGeometry,
    segment: IdxTuple,
    point: DVec2,
    active: Option<usize>,
) -> Result<EditOutcome, EditError> {
    geometry.segment_checked(segment)?;
    let original = geometry.line_checked(segment.line)?;

    let mut points = original.points().to_vec();
    points.insert(segment.index + 1, normalize(point));
    let updated = LineString(points);

    let mut lines = geometry.lines().to_vec();
    lines[segment.line] = updated.clone();

    Ok(EditOutcome {
        geometry: TransectGeometry::from_lines_unchecked(lines),
        events: vec![EditEvent::Edit {
            index: segment.line,
            before: original.clone(),
            after: updated,
        }],
        active,
    })
}
