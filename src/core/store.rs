//! Der GeometryStore: normalisierte Geometrie plus abgeleitete Indizes.
//!
//! Nach jedem Rebuild werden Segmente, Korridore, Overlap-Maps und alle
//! Render-Handles neu erzeugt. Handles älterer Generationen lösen zu `None` auf.

use super::{
    Corridor, CorridorBuilder, IdxTuple, InvariantViolation, OverlapIndex, ShapeHandle, ShapeKind,
    TransectGeometry,
};
use glam::DVec2;
use std::collections::HashMap;
use std::ops::Range;
use std::sync::Arc;

/// Abgeleitete Darstellung eines Segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentShape {
    /// Startpunkt
    pub start: DVec2,
    /// Endpunkt
    pub end: DVec2,
    /// Puffer-Polygon
    pub corridor: Corridor,
}

/// Handles einer Linie, parallel zu Punkten bzw. Segmenten.
#[derive(Debug, Clone, Default)]
struct LineHandles {
    points: Vec<ShapeHandle>,
    segments: Vec<ShapeHandle>,
    corridors: Vec<ShapeHandle>,
}

/// Normalisierter In-Memory-Zustand des Transekts.
#[derive(Debug, Clone)]
pub struct TransectStore {
    geometry: Arc<TransectGeometry>,
    segments: Vec<Vec<SegmentShape>>,
    overlaps: OverlapIndex,
    handles: HashMap<ShapeHandle, (ShapeKind, IdxTuple)>,
    line_handles: Vec<LineHandles>,
    generation: u64,
    corridors: CorridorBuilder,
    overlap_tolerance: f64,
}

impl TransectStore {
    /// Erstellt einen leeren Store.
    pub fn new(corridors: CorridorBuilder, overlap_tolerance: f64) -> Self {
        Self {
            geometry: Arc::new(TransectGeometry::default()),
            segments: Vec::new(),
            overlaps: OverlapIndex::default(),
            handles: HashMap::new(),
            line_handles: Vec::new(),
            generation: 0,
            corridors,
            overlap_tolerance,
        }
    }

    /// Baut alle abgeleiteten Strukturen aus der Geometrie neu auf.
    ///
    /// Alle bisherigen Render-Handles werden ungültig.
    pub fn rebuild(&mut self, geometry: Arc<TransectGeometry>) {
        self.generation += 1;
        self.geometry = geometry;
        self.handles.clear();
        self.line_handles.clear();

        let mut next_id: u32 = 0;
        let generation = self.generation;
        let mut allocate = |handles: &mut HashMap<ShapeHandle, (ShapeKind, IdxTuple)>,
                            kind: ShapeKind,
                            idx: IdxTuple| {
            let handle = ShapeHandle {
                generation,
                id: next_id,
            };
            next_id += 1;
            handles.insert(handle, (kind, idx));
            handle
        };

        self.segments = self
            .geometry
            .lines()
            .iter()
            .map(|line| {
                line.points()
                    .windows(2)
                    .map(|w| self.segment_shape_for(w[0], w[1]))
                    .collect()
            })
            .collect();

        for (l, line) in self.geometry.lines().iter().enumerate() {
            let mut lh = LineHandles::default();
            for i in 0..line.len() {
                lh.points
                    .push(allocate(&mut self.handles, ShapeKind::Point, IdxTuple::new(l, i)));
            }
            for s in 0..line.segment_count() {
                let idx = IdxTuple::new(l, s);
                lh.segments
                    .push(allocate(&mut self.handles, ShapeKind::Segment, idx));
                lh.corridors
                    .push(allocate(&mut self.handles, ShapeKind::Corridor, idx));
            }
            self.line_handles.push(lh);
        }

        self.overlaps = OverlapIndex::build(&self.geometry, self.overlap_tolerance);

        log::debug!(
            "Store neu aufgebaut (Generation {}): {} Linie(n), {} Segment(e), {} Overlap(s)",
            self.generation,
            self.geometry.line_count(),
            self.geometry.segment_count(),
            self.overlaps.nonadjacent().len() / 2
        );
    }

    /// Tauscht Korridor-Builder und Overlap-Toleranz aus und baut neu auf.
    ///
    /// Der Generationszähler läuft weiter, alte Handles bleiben veraltet.
    pub fn reconfigure(&mut self, corridors: CorridorBuilder, overlap_tolerance: f64) {
        self.corridors = corridors;
        self.overlap_tolerance = overlap_tolerance;
        let geometry = self.geometry.clone();
        self.rebuild(geometry);
    }

    fn segment_shape_for(&self, start: DVec2, end: DVec2) -> SegmentShape {
        SegmentShape {
            start,
            end,
            corridor: self.corridors.corridor_for(start, end),
        }
    }

    /// Aktuelle Geometrie (Arc-Klon ist O(1)).
    pub fn geometry(&self) -> &Arc<TransectGeometry> {
        &self.geometry
    }

    /// Gibt `true` zurück, wenn keine Linien geladen sind.
    pub fn is_empty(&self) -> bool {
        self.geometry.line_count() == 0
    }

    /// Aktuelle Store-Generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Korridor-Builder (inkl. Geometrie-Operationen).
    pub fn corridors(&self) -> &CorridorBuilder {
        &self.corridors
    }

    /// Overlap-Klassifikation.
    pub fn overlaps(&self) -> &OverlapIndex {
        &self.overlaps
    }

    /// Nicht benachbarter Partner eines Punkts, auch wenn er nur am
    /// Naht-Partner hängt. Beide Naht-Tupel verlangen damit dieselbe Auswahl.
    pub fn crossing_partner(&self, idx: IdxTuple) -> Option<IdxTuple> {
        self.overlaps.nonadjacent_partner(idx).or_else(|| {
            self.geometry
                .seam_partner(idx)
                .and_then(|seam| self.overlaps.nonadjacent_partner(seam))
        })
    }

    /// Löst ein Render-Handle in O(1) zu Form-Art und Index-Tupel auf.
    pub fn resolve(&self, handle: ShapeHandle) -> Option<(ShapeKind, IdxTuple)> {
        self.handles.get(&handle).copied()
    }

    /// Wie [`Self::resolve`], aber ein veraltetes Handle ist ein Invarianten-Fehler.
    pub fn resolve_checked(
        &self,
        handle: ShapeHandle,
    ) -> Result<(ShapeKind, IdxTuple), InvariantViolation> {
        self.resolve(handle).ok_or(InvariantViolation::StaleHandle {
            handle: handle.generation,
            current: self.generation,
        })
    }

    /// Handle eines Punkts.
    pub fn point_handle(&self, idx: IdxTuple) -> Option<ShapeHandle> {
        self.line_handles.get(idx.line)?.points.get(idx.index).copied()
    }

    /// Handle eines Segments.
    pub fn segment_handle(&self, idx: IdxTuple) -> Option<ShapeHandle> {
        self.line_handles
            .get(idx.line)?
            .segments
            .get(idx.index)
            .copied()
    }

    /// Handle eines Korridors.
    pub fn corridor_handle(&self, idx: IdxTuple) -> Option<ShapeHandle> {
        self.line_handles
            .get(idx.line)?
            .corridors
            .get(idx.index)
            .copied()
    }

    /// Abgeleitete Segment-Form.
    pub fn segment_shape(&self, idx: IdxTuple) -> Option<&SegmentShape> {
        self.segments.get(idx.line)?.get(idx.index)
    }

    /// Alle Segment-Formen je Linie.
    pub fn segment_shapes(&self) -> &[Vec<SegmentShape>] {
        &self.segments
    }

    /// Vorgänger-Punkt (über Nähte hinweg).
    pub fn prev_point(&self, idx: IdxTuple) -> Option<IdxTuple> {
        self.geometry.prev_point(idx)
    }

    /// Nachfolger-Punkt (über Nähte hinweg).
    pub fn next_point(&self, idx: IdxTuple) -> Option<IdxTuple> {
        self.geometry.next_point(idx)
    }

    /// Gruppen der aktuellen Geometrie.
    pub fn groups(&self) -> Vec<Range<usize>> {
        self.geometry.groups()
    }

    /// Verschiebt einen Punkt live (Drag-Tick) und berechnet nur die
    /// angrenzenden Segmente/Korridore neu. Handles bleiben gültig.
    ///
    /// Gibt die neu berechneten Segmente zurück.
    pub fn move_point_live(
        &mut self,
        idx: IdxTuple,
        pos: DVec2,
    ) -> Result<Vec<IdxTuple>, InvariantViolation> {
        Arc::make_mut(&mut self.geometry).set_point(idx, pos)?;

        let line = self.geometry.line_checked(idx.line)?;
        let mut touched = Vec::with_capacity(2);
        if idx.index > 0 {
            touched.push(IdxTuple::new(idx.line, idx.index - 1));
        }
        if idx.index + 1 < line.len() {
            touched.push(IdxTuple::new(idx.line, idx.index));
        }

        for seg in &touched {
            let (start, end) = self.geometry.segment_checked(*seg)?;
            let shape = self.segment_shape_for(start, end);
            if let Some(slot) = self
                .segments
                .get_mut(seg.line)
                .and_then(|l| l.get_mut(seg.index))
            {
                *slot = shape;
            }
        }
        Ok(touched)
    }
}

#[cfg(test)]
mod tests;
