//! Spatial-Index (KD-Tree) für Fenster- und Radius-Abfragen.

use std::collections::HashMap;

use glam::DVec2;
use kiddo::{ImmutableKdTree, SquaredEuclidean};

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// ID des gefundenen Eintrags
    pub id: u64,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f64,
}

/// Read-only Spatial-Index über Einträgen `(id, position)`.
///
/// Nach jeder Positionsänderung neu aufbauen. Der unveränderliche Baum
/// verträgt beliebig viele Einträge mit identischer Position.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: ImmutableKdTree<f64, 2>,
    ids: Vec<u64>,
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: ImmutableKdTree::new_from_slice(&[]),
            ids: Vec::new(),
        }
    }

    /// Baut einen neuen Index aus den übergebenen Einträgen.
    pub fn from_points(points: impl IntoIterator<Item = (u64, DVec2)>) -> Self {
        let positions: HashMap<u64, DVec2> = points.into_iter().collect();

        let mut ids: Vec<u64> = positions.keys().copied().collect();
        ids.sort_unstable();

        let entries: Vec<[f64; 2]> = ids
            .iter()
            .filter_map(|id| positions.get(id).map(|p| [p.x, p.y]))
            .collect();

        let tree = ImmutableKdTree::new_from_slice(&entries);

        Self { tree, ids }
    }

    /// Gibt die Anzahl indexierter Einträge zurück.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Gibt `true` zurück, wenn keine Einträge im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Findet den nächsten Eintrag zur gegebenen Position.
    pub fn nearest(&self, query: DVec2) -> Option<SpatialMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self.tree.nearest_one::<SquaredEuclidean>(&[query.x, query.y]);
        let id = *self.ids.get(result.item as usize)?;

        Some(SpatialMatch {
            id,
            distance: result.distance.sqrt(),
        })
    }

    /// Findet alle Einträge innerhalb eines Radius, aufsteigend nach Distanz.
    ///
    /// Bei gleicher Distanz entscheidet die kleinere ID; `limit` kappt das Ergebnis.
    pub fn within_radius(&self, query: DVec2, radius: f64, limit: usize) -> Vec<SpatialMatch> {
        if self.is_empty() || radius.is_sign_negative() || limit == 0 {
            return Vec::new();
        }

        let mut results = self
            .tree
            .within::<SquaredEuclidean>(&[query.x, query.y], radius * radius)
            .into_iter()
            .filter_map(|entry| {
                let id = *self.ids.get(entry.item as usize)?;
                Some(SpatialMatch {
                    id,
                    distance: entry.distance.sqrt(),
                })
            })
            .collect::<Vec<_>>();

        results.sort_by(|a, b| a.distance.total_cmp(&b.distance).then(a.id.cmp(&b.id)));
        results.truncate(limit);
        results
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::empty()
    }
}
