use serde::Serialize;

use crate::app::use_cases::editing::DeleteReport;
use crate::app::use_cases::lines::LineSummary;
use crate::app::use_cases::routing::AssembledRoute;
use crate::app::use_cases::stops::NearbySign;
use crate::core::{EdgeKey, NetworkGraph, NetworkNode};
use crate::store::{DataKind, StoreStats};

/// Ergebnis eines ausgeführten Commands.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum CommandOutcome {
    /// Geladenes Nachbarschafts-Fenster
    Neighborhood(NetworkGraph),
    /// Gezielt gelesene Nodes
    Points(Vec<NetworkNode>),
    /// Neuer Node
    PointCreated { id: u64 },
    /// Neue Kette in Einfügereihenfolge
    ChainCreated { ids: Vec<u64> },
    /// Verschobener Node
    PointMoved { id: u64 },
    /// Gelöschter Node mit Bereinigungs-Bericht
    PointDeleted(DeleteReport),
    /// Neue bidirektionale Kante
    PointsJoined { key: EdgeKey },
    /// Entfernte Kante
    EdgeDeleted { key: EdgeKey },
    /// Eingefügter Node auf einer Kante
    EdgeSplit { id: u64 },
    /// Neue Richtung einer Kante
    DirectionChanged {
        key: EdgeKey,
        low_to_high: bool,
        high_to_low: bool,
    },
    /// Zusammengesetzte Route
    Route(AssembledRoute),
    /// Linien-Übersicht
    Lines(Vec<LineSummary>),
    /// Signs im Umkreis
    Stops(Vec<NearbySign>),
    /// Anzahl importierter Datensätze
    Imported { count: usize },
    /// Geleerte Datenart
    Cleared { kind: DataKind },
    /// Mengenübersicht
    Stats(StoreStats),
}
