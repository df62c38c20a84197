//! JSON-Snapshot eines kompletten Netzes (Nodes, Haltestellen, Linien, Midpoints).

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::{Line, Midpoint, NetworkNode, Stop};
use crate::store::{GeometryStore, MemoryStore};

/// Serialisierbarer Gesamtzustand eines `MemoryStore`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSnapshot {
    /// Alle Nodes, aufsteigend nach ID
    pub nodes: Vec<NetworkNode>,
    /// Alle Haltestellen inklusive Signs
    pub stops: Vec<Stop>,
    /// Alle Linien (ohne zusammengeführte Namen)
    pub lines: Vec<Line>,
    /// Anzeigenamen nach Linien-Code
    pub line_names: BTreeMap<u32, String>,
    /// Vorberechnete Midpoints
    pub midpoints: Vec<Midpoint>,
    /// Nächste freie Node-ID (0 = aus den Nodes ableiten)
    pub next_node_id: u64,
}

impl NetworkSnapshot {
    /// Erfasst den kompletten Inhalt eines Speichers.
    pub fn capture(store: &MemoryStore) -> Self {
        let mut nodes: Vec<NetworkNode> = store.nodes_iter().cloned().collect();
        nodes.sort_by_key(|node| node.id);

        let mut midpoints: Vec<Midpoint> = store.midpoints_iter().cloned().collect();
        midpoints.sort_by(|a, b| a.key().cmp(&b.key()));

        Self {
            nodes,
            stops: store.stops_iter().cloned().collect(),
            lines: store.lines_iter().cloned().collect(),
            line_names: store
                .line_names_iter()
                .map(|(code, name)| (code, name.to_string()))
                .collect(),
            midpoints,
            next_node_id: store.next_node_id(),
        }
    }

    /// Baut einen neuen Speicher aus dem Snapshot auf.
    pub fn into_store(self) -> anyhow::Result<MemoryStore> {
        let mut store = MemoryStore::new();
        store.load_nodes(self.nodes);
        store.advance_next_node_id(self.next_node_id);
        store.load_stops(self.stops);
        for line in self.lines {
            store.put_line(line)?;
        }
        for (code, name) in self.line_names {
            store.put_line_name(code, name)?;
        }
        for midpoint in self.midpoints {
            store.put_midpoint(midpoint)?;
        }
        Ok(store)
    }

    /// Lädt einen Snapshot aus einer JSON-Datei.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Netz-Datei nicht lesbar: {}", path.display()))?;
        let snapshot: Self = serde_json::from_str(&content)
            .with_context(|| format!("Netz-Datei fehlerhaft: {}", path.display()))?;
        log::info!(
            "Netz geladen: {} Nodes, {} Haltestellen, {} Linien",
            snapshot.nodes.len(),
            snapshot.stops.len(),
            snapshot.lines.len()
        );
        Ok(snapshot)
    }

    /// Speichert den Snapshot als JSON-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Netz-Datei nicht schreibbar: {}", path.display()))?;
        log::info!("Netz gespeichert nach: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Sign, SignKey, TransportLayer};
    use glam::DVec2;

    fn sample_store() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.load_nodes([
            NetworkNode::with_adjacency(1, DVec2::new(0.0, 0.0), [2]),
            NetworkNode::with_adjacency(2, DVec2::new(0.0, 1.0), [1]),
        ]);
        store.load_stops([Stop::new(100, "Markt").with_sign(Sign::new(DVec2::ZERO, ["A"]))]);
        store
            .put_line(Line::new(7, TransportLayer::Road))
            .expect("put_line");
        store.put_line_name(7, "Ring".to_string()).expect("name");
        store
            .put_midpoint(Midpoint::new(
                SignKey::new(100, "A"),
                SignKey::new(101, "A"),
                vec![DVec2::new(0.5, 0.5)],
            ))
            .expect("midpoint");
        store
    }

    #[test]
    fn capture_and_restore_keeps_content() {
        let snapshot = NetworkSnapshot::capture(&sample_store());
        let json = serde_json::to_string(&snapshot).expect("serialisierbar");
        let parsed: NetworkSnapshot = serde_json::from_str(&json).expect("deserialisierbar");
        assert_eq!(parsed, snapshot);

        let restored = parsed.into_store().expect("Speicher aufbaubar");
        let stats = restored.stats().expect("stats");
        assert_eq!((stats.nodes, stats.directed_edges, stats.signs), (2, 2, 1));
        assert_eq!(
            restored.get_line(7).expect("get").and_then(|l| l.name).as_deref(),
            Some("Ring")
        );
    }

    #[test]
    fn id_counter_survives_roundtrip() {
        let mut store = sample_store();
        let id = store.insert_node(DVec2::new(5.0, 5.0), &[]).expect("insert");
        assert!(store.delete_node(id).expect("delete"));

        let json = serde_json::to_string(&NetworkSnapshot::capture(&store)).expect("serialisierbar");
        let mut restored = serde_json::from_str::<NetworkSnapshot>(&json)
            .expect("deserialisierbar")
            .into_store()
            .expect("Speicher aufbaubar");

        let next = restored.insert_node(DVec2::ZERO, &[]).expect("insert");
        assert_eq!(next, id + 1);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let snapshot: NetworkSnapshot =
            serde_json::from_str(r#"{"nodes": [{"id": 4, "position": [1.0, 2.0]}]}"#)
                .expect("gültiges JSON");
        assert_eq!(snapshot.nodes.len(), 1);
        assert!(snapshot.nodes[0].adjacency.is_empty());
        assert!(snapshot.stops.is_empty());

        let mut store = snapshot.into_store().expect("Speicher aufbaubar");
        assert_eq!(store.insert_node(DVec2::ZERO, &[]).expect("insert"), 5);
    }
}
