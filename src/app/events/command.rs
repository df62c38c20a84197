use glam::DVec2;

use crate::app::use_cases::editing::DirectionChange;
use crate::core::{EdgeKey, LineDirection, TransportLayer, WaypointToken};
use crate::io::{LineNameRecord, LineRecord, StopRecord};
use crate::store::DataKind;

/// Commands sind Schritte, die zentral über den Controller ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // === Editieren ===
    /// Nachbarschafts-Fenster um `center` laden
    LoadNeighborhood { center: DVec2 },
    /// Nodes gezielt nach ID lesen
    FetchPoints { ids: Vec<u64> },
    /// Neuen Node mit gerichteten Kanten zu `neighbors` anlegen
    CreatePoint { position: DVec2, neighbors: Vec<u64> },
    /// Neue Nodes als bidirektionale Kette anlegen
    CreateChain { positions: Vec<DVec2> },
    /// Node verschieben
    MovePoint { id: u64, position: DVec2 },
    /// Node löschen und Nachbarn bereinigen
    DeletePoint { id: u64 },
    /// Zwei Nodes bidirektional verbinden
    JoinPoints { a: u64, b: u64 },
    /// Kante (beide Richtungen) entfernen
    DeleteEdge { key: EdgeKey },
    /// Neuen Node auf einer Kante einfügen (None = Mittelpunkt)
    SplitEdge { key: EdgeKey, position: Option<DVec2> },
    /// Richtung einer Kante ändern
    ChangeDirection {
        key: EdgeKey,
        change: DirectionChange,
    },

    // === Routing ===
    /// Route einer gespeicherten Linie auflösen
    ResolveLineRoute { code: u32, direction: LineDirection },
    /// Route aus einer freien Token-Liste auflösen
    ResolveAdHocRoute {
        tokens: Vec<WaypointToken>,
        layer: TransportLayer,
    },

    // === Kataloge & Wartung ===
    /// Linien-Übersicht
    ListLines,
    /// Haltestellen-Signs im Umkreis
    StopsInRadius { center: DVec2 },
    /// Haltestellen importieren
    ImportStops { records: Vec<StopRecord> },
    /// Linien importieren
    ImportLines { records: Vec<LineRecord> },
    /// Linien-Namen importieren
    ImportLineNames { records: Vec<LineNameRecord> },
    /// Eine Datenart leeren
    ClearData { kind: DataKind },
    /// Mengenübersicht
    NetworkStats,
}

impl AppCommand {
    /// Gibt `true` zurück, wenn der Command gespeicherte Daten verändert.
    pub fn is_mutating(&self) -> bool {
        !matches!(
            self,
            Self::LoadNeighborhood { .. }
                | Self::FetchPoints { .. }
                | Self::ResolveLineRoute { .. }
                | Self::ResolveAdHocRoute { .. }
                | Self::ListLines
                | Self::StopsInRadius { .. }
                | Self::NetworkStats
        )
    }
}
