//! In-Memory-Geometrie-Speicher mit KD-Tree-Index für Nodes und Signs.

use std::cell::OnceCell;
use std::collections::{BTreeMap, HashMap};

use glam::DVec2;

use super::{DataKind, GeometryStore, SignHit, StoreStats};
use crate::core::{Line, Midpoint, NetworkNode, Sign, SignKey, SpatialIndex, Stop};
use crate::error::StoreError;

/// Verweis eines Sign-Index-Eintrags auf `(stop_code, sign_index)`.
type SignSlot = (u32, usize);

/// Sign-Index samt Zuordnung der Index-IDs zu ihren Signs.
#[derive(Debug, Clone, Default)]
struct SignIndex {
    slots: Vec<SignSlot>,
    index: SpatialIndex,
}

/// Speicher für Nodes, Haltestellen, Linien und Midpoints im Arbeitsspeicher.
///
/// Die Spatial-Indizes werden bei Änderungen nur verworfen und erst bei der
/// nächsten räumlichen Abfrage neu aufgebaut.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    nodes: HashMap<u64, NetworkNode>,
    node_index: OnceCell<SpatialIndex>,
    /// Nächste zu vergebende Node-ID; wächst nur, gelöschte IDs werden nie wiederverwendet
    next_id: u64,
    stops: BTreeMap<u32, Stop>,
    sign_index: OnceCell<SignIndex>,
    lines: BTreeMap<u32, Line>,
    line_names: HashMap<u32, String>,
    midpoints: HashMap<(SignKey, SignKey), Midpoint>,
}

impl MemoryStore {
    /// Erstellt einen leeren Speicher
    pub fn new() -> Self {
        Self::default()
    }

    /// Übernimmt Nodes mit festen IDs (z.B. aus einem Snapshot).
    pub fn load_nodes(&mut self, nodes: impl IntoIterator<Item = NetworkNode>) {
        for node in nodes {
            self.reserve_node_id(node.id);
            self.nodes.insert(node.id, node);
        }
        self.node_index.take();
    }

    /// Übernimmt Haltestellen in einem Schritt.
    pub fn load_stops(&mut self, stops: impl IntoIterator<Item = Stop>) {
        for stop in stops {
            self.stops.insert(stop.code, stop);
        }
        self.sign_index.take();
    }

    /// Nächste freie Node-ID (wird in Snapshots mitgeschrieben).
    pub fn next_node_id(&self) -> u64 {
        self.next_id.max(1)
    }

    /// Hebt den ID-Zähler an, sodass `next_id` nie vergeben wird, bevor er erreicht ist.
    ///
    /// Ein niedrigerer Wert als der aktuelle Zähler wird ignoriert.
    pub fn advance_next_node_id(&mut self, next_id: u64) {
        self.next_id = self.next_id.max(next_id);
    }

    /// Iterator über alle Nodes (read-only).
    pub fn nodes_iter(&self) -> impl Iterator<Item = &NetworkNode> {
        self.nodes.values()
    }

    /// Iterator über alle Haltestellen, aufsteigend nach Code.
    pub fn stops_iter(&self) -> impl Iterator<Item = &Stop> {
        self.stops.values()
    }

    /// Iterator über alle Linien, aufsteigend nach Code (ohne zusammengeführte Namen).
    pub fn lines_iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.values()
    }

    /// Iterator über alle Midpoints.
    pub fn midpoints_iter(&self) -> impl Iterator<Item = &Midpoint> {
        self.midpoints.values()
    }

    /// Iterator über alle Linien-Namen.
    pub fn line_names_iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.line_names.iter().map(|(code, name)| (*code, name.as_str()))
    }

    fn reserve_node_id(&mut self, id: u64) {
        self.advance_next_node_id(id.saturating_add(1));
    }

    fn node_index(&self) -> &SpatialIndex {
        self.node_index.get_or_init(|| {
            SpatialIndex::from_points(self.nodes.values().map(|n| (n.id, n.position)))
        })
    }

    fn sign_index(&self) -> &SignIndex {
        self.sign_index.get_or_init(|| {
            let slots: Vec<SignSlot> = self
                .stops
                .values()
                .flat_map(|stop| (0..stop.signs.len()).map(move |i| (stop.code, i)))
                .collect();

            let points: Vec<(u64, DVec2)> = slots
                .iter()
                .enumerate()
                .filter_map(|(slot, &(code, i))| {
                    let sign = self.stops.get(&code)?.signs.get(i)?;
                    Some((slot as u64, sign.position))
                })
                .collect();

            SignIndex {
                slots,
                index: SpatialIndex::from_points(points),
            }
        })
    }
}

impl GeometryStore for MemoryStore {
    fn get_node(&self, id: u64) -> Result<Option<NetworkNode>, StoreError> {
        Ok(self.nodes.get(&id).cloned())
    }

    fn insert_node(&mut self, position: DVec2, adjacency: &[u64]) -> Result<u64, StoreError> {
        let id = self.next_node_id();
        if id == u64::MAX {
            return Err(StoreError::new("insert_node", "Node-IDs erschöpft"));
        }
        self.reserve_node_id(id);
        let node = NetworkNode::with_adjacency(id, position, adjacency.iter().copied());
        self.nodes.insert(id, node);
        self.node_index.take();
        Ok(id)
    }

    fn put_node(&mut self, node: &NetworkNode) -> Result<(), StoreError> {
        let moved = self
            .nodes
            .get(&node.id)
            .is_none_or(|old| old.position != node.position);
        self.reserve_node_id(node.id);
        self.nodes.insert(node.id, node.clone());
        if moved {
            self.node_index.take();
        }
        Ok(())
    }

    fn delete_node(&mut self, id: u64) -> Result<bool, StoreError> {
        let removed = self.nodes.remove(&id).is_some();
        if removed {
            self.node_index.take();
        }
        Ok(removed)
    }

    fn nodes_in_window(
        &self,
        center: DVec2,
        radius: f64,
        limit: usize,
    ) -> Result<Vec<NetworkNode>, StoreError> {
        Ok(self
            .node_index()
            .within_radius(center, radius, limit)
            .into_iter()
            .filter_map(|hit| self.nodes.get(&hit.id).cloned())
            .collect())
    }

    fn get_stop(&self, code: u32) -> Result<Option<Stop>, StoreError> {
        Ok(self.stops.get(&code).cloned())
    }

    fn put_stop(&mut self, stop: Stop) -> Result<(), StoreError> {
        self.stops.insert(stop.code, stop);
        self.sign_index.take();
        Ok(())
    }

    fn get_sign(&self, key: &SignKey) -> Result<Option<Sign>, StoreError> {
        Ok(self
            .stops
            .get(&key.stop_code)
            .and_then(|stop| stop.sign_for(&key.sub_code))
            .cloned())
    }

    fn signs_in_radius(
        &self,
        center: DVec2,
        radius: f64,
        limit: usize,
    ) -> Result<Vec<SignHit>, StoreError> {
        let signs = self.sign_index();
        Ok(signs
            .index
            .within_radius(center, radius, limit)
            .into_iter()
            .filter_map(|hit| {
                let &(stop_code, i) = signs.slots.get(hit.id as usize)?;
                let sign = self.stops.get(&stop_code)?.signs.get(i)?.clone();
                Some(SignHit {
                    stop_code,
                    sign,
                    distance: hit.distance,
                })
            })
            .collect())
    }

    fn get_midpoint(&self, from: &SignKey, to: &SignKey) -> Result<Option<Midpoint>, StoreError> {
        Ok(self.midpoints.get(&(from.clone(), to.clone())).cloned())
    }

    fn put_midpoint(&mut self, midpoint: Midpoint) -> Result<(), StoreError> {
        self.midpoints.insert(midpoint.key(), midpoint);
        Ok(())
    }

    fn get_line(&self, code: u32) -> Result<Option<Line>, StoreError> {
        Ok(self.lines.get(&code).map(|line| {
            let mut line = line.clone();
            if let Some(name) = self.line_names.get(&code) {
                line.name = Some(name.clone());
            }
            line
        }))
    }

    fn put_line(&mut self, line: Line) -> Result<(), StoreError> {
        self.lines.insert(line.code, line);
        Ok(())
    }

    fn lines(&self) -> Result<Vec<Line>, StoreError> {
        self.lines
            .keys()
            .filter_map(|&code| self.get_line(code).transpose())
            .collect()
    }

    fn put_line_name(&mut self, code: u32, name: String) -> Result<(), StoreError> {
        self.line_names.insert(code, name);
        Ok(())
    }

    fn clear(&mut self, kind: DataKind) -> Result<(), StoreError> {
        match kind {
            DataKind::Stops => {
                self.stops.clear();
                self.sign_index.take();
            }
            DataKind::Lines => self.lines.clear(),
            DataKind::LineNames => self.line_names.clear(),
            DataKind::Midpoints => self.midpoints.clear(),
        }
        Ok(())
    }

    fn stats(&self) -> Result<StoreStats, StoreError> {
        Ok(StoreStats {
            nodes: self.nodes.len(),
            directed_edges: self.nodes.values().map(|n| n.adjacency.len()).sum(),
            stops: self.stops.len(),
            signs: self.stops.values().map(|stop| stop.signs.len()).sum(),
            lines: self.lines.len(),
            midpoints: self.midpoints.len(),
        })
    }
}
