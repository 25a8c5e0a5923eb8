//! Drag-Sitzung für Punkte und Korridore.
//!
//! Während des Drags wird nur live im Store verschoben; erst `finish`
//! erzeugt die Edit-Events gegen die Geometrie vor Drag-Beginn.

use super::EditOutcome;
use crate::core::{EditError, EditEvent, IdxTuple, TransectGeometry};
use glam::DVec2;
use indexmap::IndexSet;
use std::sync::Arc;

/// Was gezogen wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    /// Einzelner Punkt (samt Naht-Partner)
    Point(IdxTuple),
    /// Korridor eines Segments: beide Endpunkte samt Naht-Partnern
    Corridor(IdxTuple),
}

/// Laufende Drag-Sitzung.
#[derive(Debug, Clone)]
pub struct DragSession {
    target: DragTarget,
    points: Vec<IdxTuple>,
    origin_pointer: DVec2,
    origin_coords: Vec<DVec2>,
    before: Arc<TransectGeometry>,
    moved: bool,
}

impl DragSession {
    /// Startet einen Drag auf `geometry` bei Zeigerposition `pointer`.
    pub fn begin(
        geometry: Arc<TransectGeometry>,
        target: DragTarget,
        pointer: DVec2,
    ) -> Result<Self, EditError> {
        let mut set: IndexSet<IdxTuple> = IndexSet::new();
        match target {
            DragTarget::Point(point) => {
                geometry.point_checked(point)?;
                set.insert(point);
            }
            DragTarget::Corridor(segment) => {
                geometry.segment_checked(segment)?;
                set.insert(segment);
                set.insert(IdxTuple::new(segment.line, segment.index + 1));
            }
        }
        let partners: Vec<IdxTuple> = set
            .iter()
            .filter_map(|p| geometry.seam_partner(*p))
            .collect();
        set.extend(partners);

        let points: Vec<IdxTuple> = set.into_iter().collect();
        let origin_coords = points
            .iter()
            .map(|p| geometry.point_checked(*p))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            target,
            points,
            origin_pointer: pointer,
            origin_coords,
            before: geometry,
            moved: false,
        })
    }

    /// Ziel des Drags.
    pub fn target(&self) -> DragTarget {
        self.target
    }

    /// Alle mitbewegten Punkte.
    pub fn points(&self) -> &[IdxTuple] {
        &self.points
    }

    /// Gibt `true` zurück, sobald sich der Zeiger vom Ursprung entfernt hat.
    pub fn has_moved(&self) -> bool {
        self.moved
    }

    /// Geometrie vor Drag-Beginn.
    pub fn before(&self) -> &Arc<TransectGeometry> {
        &self.before
    }

    /// Neue Positionen aller mitbewegten Punkte für die Zeigerposition `pointer`.
    pub fn positions_for(&mut self, pointer: DVec2) -> Vec<(IdxTuple, DVec2)> {
        let delta = pointer - self.origin_pointer;
        if delta != DVec2::ZERO {
            self.moved = true;
        }
        self.points
            .iter()
            .zip(&self.origin_coords)
            .map(|(p, origin)| (*p, *origin + delta))
            .collect()
    }

    /// Ursprüngliche Positionen (für Abbruch).
    pub fn origin_positions(&self) -> Vec<(IdxTuple, DVec2)> {
        self.points
            .iter()
            .copied()
            .zip(self.origin_coords.iter().copied())
            .collect()
    }

    /// Schließt den Drag ab: ein `edit` je geänderter Linie.
    pub fn finish(
        &self,
        current: &TransectGeometry,
        active: Option<usize>,
    ) -> Result<EditOutcome, EditError> {
        let lines: IndexSet<usize> = self.points.iter().map(|p| p.line).collect();

        let mut events = Vec::new();
        for line in lines {
            let before = self.before.line_checked(line)?;
            let after = current.line_checked(line)?;
            if before != after {
                events.push(EditEvent::Edit {
                    index: line,
                    before: before.clone(),
                    after: after.clone(),
                });
            }
        }

        Ok(EditOutcome {
            geometry: current.clone(),
            events,
            active,
        })
    }
}
