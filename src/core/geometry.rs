//! Normalisierte Transekt-Geometrie: geordnete Linien aus geordneten Punkten.
//!
//! Gruppen (über Nähte verbundene Linienfolgen) werden nie gespeichert,
//! sondern bei Bedarf aus den Linien-Grenzen abgeleitet.

use super::{EditEvent, IdxTuple, InvariantViolation, ValidationError};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use thiserror::Error;

/// Normalisiert eine Koordinate (`-0.0` → `0.0`), damit Bit-Vergleiche und
/// Hashing mit numerischer Gleichheit übereinstimmen.
#[inline]
pub fn normalize(p: DVec2) -> DVec2 {
    DVec2::new(p.x + 0.0, p.y + 0.0)
}

/// Hash-Schlüssel einer normalisierten Koordinate.
#[inline]
pub fn coord_key(p: DVec2) -> (u64, u64) {
    let n = normalize(p);
    (n.x.to_bits(), n.y.to_bits())
}

/// Geordnete Punktfolge einer Linie.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineString(pub Vec<DVec2>);

impl LineString {
    /// Erstellt eine Linie aus Punkten (normalisiert).
    pub fn new(points: Vec<DVec2>) -> Self {
        Self(points.into_iter().map(normalize).collect())
    }

    /// Read-only Sicht auf die Punkte.
    pub fn points(&self) -> &[DVec2] {
        &self.0
    }

    /// Anzahl Punkte.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Gibt `true` zurück, wenn die Linie keine Punkte hat.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Anzahl Segmente (`Punkte - 1`).
    pub fn segment_count(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Erster Punkt.
    pub fn first(&self) -> Option<DVec2> {
        self.0.first().copied()
    }

    /// Letzter Punkt.
    pub fn last(&self) -> Option<DVec2> {
        self.0.last().copied()
    }
}

/// Fehler beim Einlesen einer Geometrie.
#[derive(Debug, Error)]
pub enum GeometryParseError {
    /// JSON nicht lesbar
    #[error("Geometrie-JSON nicht lesbar: {0}")]
    Json(#[from] serde_json::Error),
    /// Struktur verletzt die Regeln
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Container-Format an der Serialisierungsgrenze.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
enum GeometryDto {
    LineString { coordinates: Vec<DVec2> },
    MultiLineString { coordinates: Vec<Vec<DVec2>> },
}

/// Vollständige Transekt-Geometrie.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransectGeometry {
    lines: Vec<LineString>,
}

impl TransectGeometry {
    /// Erstellt eine Geometrie und prüft die Strukturregeln
    /// (mindestens eine Linie, jede Linie ≥ 2 endliche Punkte).
    pub fn new(lines: Vec<LineString>) -> Result<Self, ValidationError> {
        if lines.is_empty() {
            return Err(ValidationError::InvalidGeometry(
                "Transekt ohne Linien".to_string(),
            ));
        }
        for (i, line) in lines.iter().enumerate() {
            if line.len() < 2 {
                return Err(ValidationError::InvalidGeometry(format!(
                    "Linie {} hat {} Punkt(e), mindestens 2 erforderlich",
                    i,
                    line.len()
                )));
            }
            if line.points().iter().any(|p| !p.is_finite()) {
                return Err(ValidationError::InvalidGeometry(format!(
                    "Linie {} enthält nicht-endliche Koordinaten",
                    i
                )));
            }
        }
        let lines = lines
            .into_iter()
            .map(|line| LineString::new(line.0))
            .collect();
        Ok(Self { lines })
    }

    /// Baut eine Geometrie aus Koordinatenfolgen (eine Folge = eine Linie).
    pub fn from_coords(lines: Vec<Vec<DVec2>>) -> Result<Self, ValidationError> {
        Self::new(lines.into_iter().map(LineString::new).collect())
    }

    /// Intern: ohne Prüfung, für Edit-Operationen, die die Regeln selbst einhalten.
    pub(crate) fn from_lines_unchecked(lines: Vec<LineString>) -> Self {
        Self { lines }
    }

    /// Liest `LineString`- oder `MultiLineString`-JSON.
    pub fn from_json(json: &str) -> Result<Self, GeometryParseError> {
        let dto: GeometryDto = serde_json::from_str(json)?;
        let lines = match dto {
            GeometryDto::LineString { coordinates } => vec![coordinates],
            GeometryDto::MultiLineString { coordinates } => coordinates,
        };
        Ok(Self::from_coords(lines)?)
    }

    /// Schreibt JSON: eine Linie als `LineString`, sonst `MultiLineString`.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let dto = if self.lines.len() == 1 {
            GeometryDto::LineString {
                coordinates: self.lines[0].0.clone(),
            }
        } else {
            GeometryDto::MultiLineString {
                coordinates: self.lines.iter().map(|l| l.0.clone()).collect(),
            }
        };
        serde_json::to_string(&dto)
    }

    /// Alle Linien in Reihenfolge.
    pub fn lines(&self) -> &[LineString] {
        &self.lines
    }

    /// Eine Linie per Index.
    pub fn line(&self, line: usize) -> Option<&LineString> {
        self.lines.get(line)
    }

    /// Linie per Index oder Invarianten-Fehler.
    pub fn line_checked(&self, line: usize) -> Result<&LineString, InvariantViolation> {
        self.lines.get(line).ok_or(InvariantViolation::LineOutOfRange {
            line,
            line_count: self.lines.len(),
        })
    }

    /// Anzahl Linien.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Gesamtzahl der Segmente.
    pub fn segment_count(&self) -> usize {
        self.lines.iter().map(LineString::segment_count).sum()
    }

    /// Koordinate eines Punkts.
    pub fn point(&self, idx: IdxTuple) -> Option<DVec2> {
        self.lines.get(idx.line)?.0.get(idx.index).copied()
    }

    /// Koordinate eines Punkts oder Invarianten-Fehler.
    pub fn point_checked(&self, idx: IdxTuple) -> Result<DVec2, InvariantViolation> {
        self.point(idx)
            .ok_or(InvariantViolation::PointOutOfRange(idx))
    }

    /// Start- und Endpunkt eines Segments.
    pub fn segment(&self, idx: IdxTuple) -> Option<(DVec2, DVec2)> {
        let points = &self.lines.get(idx.line)?.0;
        Some((*points.get(idx.index)?, *points.get(idx.index + 1)?))
    }

    /// Segment oder Invarianten-Fehler.
    pub fn segment_checked(&self, idx: IdxTuple) -> Result<(DVec2, DVec2), InvariantViolation> {
        self.segment(idx)
            .ok_or(InvariantViolation::SegmentOutOfRange(idx))
    }

    /// Gibt `true` zurück, wenn das Ende von `line` exakt auf dem Start von `line + 1` liegt.
    pub fn is_seam(&self, line: usize) -> bool {
        match (self.lines.get(line), self.lines.get(line + 1)) {
            (Some(a), Some(b)) => a.last().is_some() && a.last() == b.first(),
            _ => false,
        }
    }

    /// Zerlegt die Linien in Gruppen (maximale Folgen über Nähte verbundener Linien).
    pub fn groups(&self) -> Vec<Range<usize>> {
        let mut groups = Vec::new();
        let mut start = 0;
        for line in 0..self.lines.len() {
            if !self.is_seam(line) {
                groups.push(start..line + 1);
                start = line + 1;
            }
        }
        groups
    }

    /// Gruppe, zu der eine Linie gehört.
    pub fn group_of(&self, line: usize) -> Option<Range<usize>> {
        self.groups().into_iter().find(|g| g.contains(&line))
    }

    /// Naht-Partner eines Punkts (`(l,last)` ↔ `(l+1,0)`).
    pub fn seam_partner(&self, idx: IdxTuple) -> Option<IdxTuple> {
        let len = self.lines.get(idx.line)?.len();
        if idx.index + 1 == len && self.is_seam(idx.line) {
            return Some(IdxTuple::new(idx.line + 1, 0));
        }
        if idx.index == 0 && idx.line > 0 && self.is_seam(idx.line - 1) {
            let prev_len = self.lines[idx.line - 1].len();
            return Some(IdxTuple::new(idx.line - 1, prev_len - 1));
        }
        None
    }

    /// Vorgänger-Punkt; überquert eine Liniengrenze nur an einer Naht.
    pub fn prev_point(&self, idx: IdxTuple) -> Option<IdxTuple> {
        let line = self.lines.get(idx.line)?;
        if idx.index >= line.len() {
            return None;
        }
        if idx.index > 0 {
            return Some(IdxTuple::new(idx.line, idx.index - 1));
        }
        if idx.line > 0 && self.is_seam(idx.line - 1) {
            let prev_len = self.lines[idx.line - 1].len();
            return Some(IdxTuple::new(idx.line - 1, prev_len - 2));
        }
        None
    }

    /// Nachfolger-Punkt; überquert eine Liniengrenze nur an einer Naht.
    pub fn next_point(&self, idx: IdxTuple) -> Option<IdxTuple> {
        let line = self.lines.get(idx.line)?;
        if idx.index + 1 < line.len() {
            return Some(IdxTuple::new(idx.line, idx.index + 1));
        }
        if idx.index + 1 == line.len() && self.is_seam(idx.line) {
            return Some(IdxTuple::new(idx.line + 1, 1));
        }
        None
    }

    /// Alle Segmente in linearer Reihenfolge (linienweise).
    pub fn linear_segments(&self) -> Vec<IdxTuple> {
        self.lines
            .iter()
            .enumerate()
            .flat_map(|(l, line)| (0..line.segment_count()).map(move |s| IdxTuple::new(l, s)))
            .collect()
    }

    /// Gibt `true` zurück, wenn beide Geometrien dieselbe Index-Nummerierung haben
    /// (gleiche Linienanzahl und gleiche Punktanzahl je Linie).
    pub fn same_numbering(&self, other: &TransectGeometry) -> bool {
        self.lines.len() == other.lines.len()
            && self
                .lines
                .iter()
                .zip(&other.lines)
                .all(|(a, b)| a.len() == b.len())
    }

    /// Setzt die Koordinate eines Punkts (Live-Drag).
    pub(crate) fn set_point(&mut self, idx: IdxTuple, pos: DVec2) -> Result<(), InvariantViolation> {
        let slot = self
            .lines
            .get_mut(idx.line)
            .and_then(|l| l.0.get_mut(idx.index))
            .ok_or(InvariantViolation::PointOutOfRange(idx))?;
        *slot = normalize(pos);
        Ok(())
    }

    /// Wendet ein Event auf die Geometrie an (Replay für Beobachter und Tests).
    pub fn apply_event(&mut self, event: &EditEvent) -> Result<(), InvariantViolation> {
        let line_count = self.lines.len();
        let out_of_range = |line: usize| InvariantViolation::LineOutOfRange { line, line_count };

        match event {
            EditEvent::Create { index, feature } | EditEvent::Insert { index, feature } => {
                if *index > line_count {
                    return Err(out_of_range(*index));
                }
                self.lines.insert(*index, feature.clone());
            }
            EditEvent::Delete { index, .. } => {
                if *index >= line_count {
                    return Err(out_of_range(*index));
                }
                self.lines.remove(*index);
            }
            EditEvent::Edit { index, after, .. } => {
                let slot = self.lines.get_mut(*index).ok_or(out_of_range(*index))?;
                *slot = after.clone();
            }
            EditEvent::Merge {
                index,
                removed_index,
                after,
                ..
            } => {
                if *index >= line_count {
                    return Err(out_of_range(*index));
                }
                if *removed_index >= line_count {
                    return Err(out_of_range(*removed_index));
                }
                self.lines[*index] = after.clone();
                self.lines.remove(*removed_index);
            }
            EditEvent::Move { from, to } => {
                if *from >= line_count {
                    return Err(out_of_range(*from));
                }
                if *to > line_count {
                    return Err(out_of_range(*to));
                }
                let moved = self.lines.remove(*from);
                let target = if from < to { to - 1 } else { *to };
                self.lines.insert(target, moved);
            }
            EditEvent::Active { .. } => {}
        }
        Ok(())
    }

    /// Wendet eine Eventliste in Reihenfolge an.
    pub fn apply_events(&mut self, events: &[EditEvent]) -> Result<(), InvariantViolation> {
        events.iter().try_for_each(|e| self.apply_event(e))
    }
}
