//! Overlap-Klassifikation deckungsgleicher Punkte.
//!
//! - `adjacent`: Naht (`(l,last)` ↔ `(l+1,0)`) oder zwei aufeinanderfolgende
//!   gleiche Punkte derselben Linie.
//! - `nonadjacent`: echte Koinzidenz ohne topologische Nachbarschaft
//!   (z.B. Transekt kreuzt sich selbst). Punkt-Operationen verlangen hier
//!   eine Auswahl durch den Benutzer.
//!
//! Beide Maps sind symmetrisch. Cluster mit mehr als zwei Punkten werden in
//! aufsteigender Tupel-Reihenfolge gierig gepaart.

use super::geometry::coord_key;
use super::{IdxTuple, TransectGeometry};
use kiddo::{KdTree, SquaredEuclidean};
use std::collections::HashMap;

/// Symmetrische Overlap-Maps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlapIndex {
    adjacent: HashMap<IdxTuple, IdxTuple>,
    nonadjacent: HashMap<IdxTuple, IdxTuple>,
}

impl OverlapIndex {
    /// Klassifiziert alle deckungsgleichen Punkte einer Geometrie.
    ///
    /// `tolerance == 0.0` vergleicht exakt (nach `-0.0`-Normalisierung),
    /// größere Werte clustern per KD-Tree-Radiusabfrage.
    pub fn build(geometry: &TransectGeometry, tolerance: f64) -> Self {
        let clusters = if tolerance > 0.0 {
            clusters_within_tolerance(geometry, tolerance)
        } else {
            clusters_exact(geometry)
        };

        let mut index = Self::default();
        for cluster in clusters.iter().filter(|c| c.len() > 1) {
            index.classify_cluster(geometry, cluster);
        }
        index
    }

    fn classify_cluster(&mut self, geometry: &TransectGeometry, cluster: &[IdxTuple]) {
        for (i, &a) in cluster.iter().enumerate() {
            for &b in &cluster[i + 1..] {
                if is_adjacent(geometry, a, b)
                    && !self.adjacent.contains_key(&a)
                    && !self.adjacent.contains_key(&b)
                {
                    self.adjacent.insert(a, b);
                    self.adjacent.insert(b, a);
                }
            }
        }

        for (i, &a) in cluster.iter().enumerate() {
            if self.nonadjacent.contains_key(&a) {
                continue;
            }
            let partner = cluster[i + 1..]
                .iter()
                .copied()
                .find(|&b| !self.nonadjacent.contains_key(&b) && !is_adjacent(geometry, a, b));
            if let Some(b) = partner {
                self.nonadjacent.insert(a, b);
                self.nonadjacent.insert(b, a);
            }
        }
    }

    /// Naht-/Nachbar-Partner eines Punkts.
    pub fn adjacent_partner(&self, idx: IdxTuple) -> Option<IdxTuple> {
        self.adjacent.get(&idx).copied()
    }

    /// Nicht-benachbarter deckungsgleicher Partner (verlangt Disambiguierung).
    pub fn nonadjacent_partner(&self, idx: IdxTuple) -> Option<IdxTuple> {
        self.nonadjacent.get(&idx).copied()
    }

    /// Read-only Sicht auf die Adjacent-Map.
    pub fn adjacent(&self) -> &HashMap<IdxTuple, IdxTuple> {
        &self.adjacent
    }

    /// Read-only Sicht auf die Nonadjacent-Map.
    pub fn nonadjacent(&self) -> &HashMap<IdxTuple, IdxTuple> {
        &self.nonadjacent
    }

    /// Prüft die Symmetrie beider Maps.
    pub fn is_symmetric(&self) -> bool {
        [&self.adjacent, &self.nonadjacent]
            .iter()
            .all(|map| map.iter().all(|(a, b)| map.get(b) == Some(a)))
    }
}

fn is_adjacent(geometry: &TransectGeometry, a: IdxTuple, b: IdxTuple) -> bool {
    if geometry.seam_partner(a) == Some(b) {
        return true;
    }
    a.line == b.line && a.index.abs_diff(b.index) == 1
}

fn all_points(geometry: &TransectGeometry) -> impl Iterator<Item = (IdxTuple, glam::DVec2)> + '_ {
    geometry.lines().iter().enumerate().flat_map(|(l, line)| {
        line.points()
            .iter()
            .enumerate()
            .map(move |(i, p)| (IdxTuple::new(l, i), *p))
    })
}

fn clusters_exact(geometry: &TransectGeometry) -> Vec<Vec<IdxTuple>> {
    let mut by_coord: HashMap<(u64, u64), usize> = HashMap::new();
    let mut clusters: Vec<Vec<IdxTuple>> = Vec::new();
    for (idx, p) in all_points(geometry) {
        let slot = *by_coord.entry(coord_key(p)).or_insert_with(|| {
            clusters.push(Vec::new());
            clusters.len() - 1
        });
        clusters[slot].push(idx);
    }
    clusters
}

fn clusters_within_tolerance(geometry: &TransectGeometry, tolerance: f64) -> Vec<Vec<IdxTuple>> {
    let (ids, entries): (Vec<IdxTuple>, Vec<[f64; 2]>) =
        all_points(geometry).map(|(idx, p)| (idx, [p.x, p.y])).unzip();
    if entries.is_empty() {
        return Vec::new();
    }

    let tree: KdTree<f64, 2> = (&entries).into();
    let mut parent: Vec<usize> = (0..entries.len()).collect();

    for (i, entry) in entries.iter().enumerate() {
        for hit in tree.within::<SquaredEuclidean>(entry, tolerance * tolerance) {
            union(&mut parent, i, hit.item as usize);
        }
    }

    let mut by_root: HashMap<usize, usize> = HashMap::new();
    let mut clusters: Vec<Vec<IdxTuple>> = Vec::new();
    for (i, idx) in ids.iter().enumerate() {
        let root = find(&mut parent, i);
        let slot = *by_root.entry(root).or_insert_with(|| {
            clusters.push(Vec::new());
            clusters.len() - 1
        });
        clusters[slot].push(*idx);
    }
    // Punkte werden linienweise eingefügt, Cluster sind damit bereits sortiert.
    clusters
}

fn find(parent: &mut [usize], mut i: usize) -> usize {
    while parent[i] != i {
        parent[i] = parent[parent[i]];
        i = parent[i];
    }
    i
}

fn union(parent: &mut [usize], a: usize, b: usize) {
    let ra = find(parent, a);
    let rb = find(parent, b);
    if ra != rb {
        parent[ra.max(rb)] = ra.min(rb);
    }
}
