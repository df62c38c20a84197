//! Die Netz-Sicht eines begrenzten Ausschnitts: Nodes plus abgeleitete Anzeige-Kanten.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::Serialize;

use super::{DisplayEdge, EdgeKey, NetworkNode};

/// Momentaufnahme eines geladenen Nachbarschafts-Fensters.
///
/// Wird nach jeder strukturellen Änderung komplett neu gebaut, nie inkrementell gepatcht.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NetworkGraph {
    /// Alle geladenen Nodes, indexiert nach ID
    nodes: HashMap<u64, NetworkNode>,
    /// Anzeige-Kanten in Entdeckungsreihenfolge
    edges: IndexMap<EdgeKey, DisplayEdge>,
    /// Anzahl ignorierter Referenzen auf Nodes außerhalb des Fensters
    dangling_references: usize,
}

impl NetworkGraph {
    /// Erstellt eine leere Sicht.
    pub fn new() -> Self {
        Self::default()
    }

    /// Baut die Sicht aus den geladenen Nodes auf.
    ///
    /// Ein Durchlauf in aufsteigender ID-Reihenfolge: die erste gesehene gerichtete Kante
    /// eines Paares erzeugt eine Einbahn-Kante, die Gegenrichtung macht sie bidirektional.
    /// Ziele außerhalb des Fensters werden stillschweigend übergangen.
    pub fn build(loaded: impl IntoIterator<Item = NetworkNode>) -> Self {
        let nodes: HashMap<u64, NetworkNode> = loaded.into_iter().map(|n| (n.id, n)).collect();

        let mut ids: Vec<u64> = nodes.keys().copied().collect();
        ids.sort_unstable();

        let mut edges: IndexMap<EdgeKey, DisplayEdge> = IndexMap::new();
        let mut dangling_references = 0usize;

        for id in ids {
            let node = &nodes[&id];
            for &target in &node.adjacency {
                let Some(target_node) = nodes.get(&target) else {
                    dangling_references += 1;
                    continue;
                };
                // Self-Referenz im Speicher → kein gültiger Schlüssel
                let Ok(key) = EdgeKey::canonical(id, target) else {
                    dangling_references += 1;
                    continue;
                };

                match edges.get_mut(&key) {
                    Some(edge) => edge.mark_two_way(),
                    None => {
                        let edge =
                            DisplayEdge::new(key, id, target, node.position, target_node.position);
                        edges.insert(key, edge);
                    }
                }
            }
        }

        if dangling_references > 0 {
            log::debug!(
                "{} Referenz(en) außerhalb des Fensters ignoriert",
                dangling_references
            );
        }

        Self {
            nodes,
            edges,
            dangling_references,
        }
    }

    /// Findet einen Node
    pub fn node(&self, id: u64) -> Option<&NetworkNode> {
        self.nodes.get(&id)
    }

    /// Prüft ob ein Node geladen ist
    pub fn contains_node(&self, id: u64) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Findet eine Anzeige-Kante — O(1)
    pub fn edge(&self, key: &EdgeKey) -> Option<&DisplayEdge> {
        self.edges.get(key)
    }

    /// Findet die Anzeige-Kante zwischen zwei Nodes (Reihenfolge egal).
    pub fn edge_between(&self, a: u64, b: u64) -> Option<&DisplayEdge> {
        let key = EdgeKey::canonical(a, b).ok()?;
        self.edges.get(&key)
    }

    /// Iterator über alle Nodes (read-only).
    pub fn nodes_iter(&self) -> impl Iterator<Item = &NetworkNode> {
        self.nodes.values()
    }

    /// Iterator über alle Anzeige-Kanten in Entdeckungsreihenfolge.
    pub fn edges_iter(&self) -> impl Iterator<Item = &DisplayEdge> {
        self.edges.values()
    }

    /// Alle Anzeige-Kanten, die `node_id` berühren.
    pub fn incident_edges(&self, node_id: u64) -> Vec<&DisplayEdge> {
        self.edges
            .values()
            .filter(|edge| edge.key.touches(node_id))
            .collect()
    }

    /// Gibt die Anzahl der Nodes zurück
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Gibt die Anzahl der Anzeige-Kanten zurück
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Anzahl beim Aufbau ignorierter Referenzen (Ziele außerhalb des Fensters).
    pub fn dangling_references(&self) -> usize {
        self.dangling_references
    }
}
