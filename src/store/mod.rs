//! Adapter-Schnittstelle zum Geometrie-Speicher.
//!
//! Der eigentliche Speicher (Datenbank mit räumlichen Abfragen) ist ein externer
//! Kollaborateur. `MemoryStore` ist die In-Memory-Referenzimplementierung für
//! Tests, Benchmarks und die CLI.

pub mod memory;

use std::str::FromStr;

use glam::DVec2;
use serde::Serialize;

use crate::core::{Line, Midpoint, NetworkNode, Sign, SignKey, Stop};
use crate::error::{NetworkError, StoreError};

pub use memory::MemoryStore;

/// Ein Sign-Treffer einer Umkreissuche.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignHit {
    /// Stop-Code der Haltestelle
    pub stop_code: u32,
    /// Gefundenes Sign
    pub sign: Sign,
    /// Distanz zum Suchpunkt
    pub distance: f64,
}

/// Datenart für `GeometryStore::clear`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataKind {
    /// Haltestellen inklusive Signs
    Stops,
    /// Linien
    Lines,
    /// Linien-Namen
    LineNames,
    /// Vorberechnete Midpoints
    Midpoints,
}

impl FromStr for DataKind {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stops" => Ok(Self::Stops),
            "lines" => Ok(Self::Lines),
            "lineCodes" | "line_names" => Ok(Self::LineNames),
            "midpoints" => Ok(Self::Midpoints),
            other => Err(NetworkError::validation(format!("unbekannte Datenart '{other}'"))),
        }
    }
}

/// Mengenübersicht über den Speicherinhalt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    /// Anzahl Nodes
    pub nodes: usize,
    /// Anzahl gerichteter Kanten (Summe aller Adjazenzen)
    pub directed_edges: usize,
    /// Anzahl Haltestellen
    pub stops: usize,
    /// Anzahl Signs
    pub signs: usize,
    /// Anzahl Linien
    pub lines: usize,
    /// Anzahl Midpoints
    pub midpoints: usize,
}

/// Persistenz- und Abfrage-Schnittstelle des Geometrie-Speichers.
///
/// Lesende Abfragen liefern `Ok(None)` für fehlende Objekte; `Err` ist
/// ausschließlich für Backend-Fehler reserviert.
pub trait GeometryStore {
    /// Liest einen Node
    fn get_node(&self, id: u64) -> Result<Option<NetworkNode>, StoreError>;

    /// Legt einen neuen Node an und liefert die vom Speicher vergebene ID.
    fn insert_node(&mut self, position: DVec2, adjacency: &[u64]) -> Result<u64, StoreError>;

    /// Schreibt Position und Adjazenz eines Nodes (last-write-wins).
    fn put_node(&mut self, node: &NetworkNode) -> Result<(), StoreError>;

    /// Löscht einen Node. Gibt `false` zurück, wenn er nicht existierte.
    fn delete_node(&mut self, id: u64) -> Result<bool, StoreError>;

    /// Nodes im Umkreis `radius` um `center`, aufsteigend nach Distanz, höchstens `limit`.
    fn nodes_in_window(
        &self,
        center: DVec2,
        radius: f64,
        limit: usize,
    ) -> Result<Vec<NetworkNode>, StoreError>;

    /// Liest eine Haltestelle
    fn get_stop(&self, code: u32) -> Result<Option<Stop>, StoreError>;

    /// Schreibt eine Haltestelle inklusive ihrer Signs
    fn put_stop(&mut self, stop: Stop) -> Result<(), StoreError>;

    /// Liest das Sign zu `(stopCode, subCode)`
    fn get_sign(&self, key: &SignKey) -> Result<Option<Sign>, StoreError>;

    /// Signs im Umkreis, aufsteigend nach Distanz, höchstens `limit`
    fn signs_in_radius(
        &self,
        center: DVec2,
        radius: f64,
        limit: usize,
    ) -> Result<Vec<SignHit>, StoreError>;

    /// Liest den Midpoint für das geordnete Paar `from → to`
    fn get_midpoint(&self, from: &SignKey, to: &SignKey) -> Result<Option<Midpoint>, StoreError>;

    /// Schreibt einen Midpoint
    fn put_midpoint(&mut self, midpoint: Midpoint) -> Result<(), StoreError>;

    /// Liest eine Linie (inklusive Anzeigename, falls bekannt)
    fn get_line(&self, code: u32) -> Result<Option<Line>, StoreError>;

    /// Schreibt eine Linie
    fn put_line(&mut self, line: Line) -> Result<(), StoreError>;

    /// Alle Linien, aufsteigend nach Code
    fn lines(&self) -> Result<Vec<Line>, StoreError>;

    /// Setzt den Anzeigenamen eines Linien-Codes
    fn put_line_name(&mut self, code: u32, name: String) -> Result<(), StoreError>;

    /// Leert eine Datenart vollständig
    fn clear(&mut self, kind: DataKind) -> Result<(), StoreError>;

    /// Mengenübersicht
    fn stats(&self) -> Result<StoreStats, StoreError>;
}
