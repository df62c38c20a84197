//! Abgeleitete, ungerichtete Darstellung von ein oder zwei gerichteten Kanten.

use glam::DVec2;
use serde::Serialize;

use super::EdgeKey;

/// Richtung einer Anzeige-Kante
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeDirection {
    /// Nur eine gerichtete Kante (from → to) vorhanden
    #[default]
    OneWay,
    /// Beide Richtungen vorhanden
    TwoWay,
}

/// Eine Anzeige-Kante zwischen zwei geladenen Nodes. Wird nie persistiert.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayEdge {
    /// Kanonischer Schlüssel
    pub key: EdgeKey,
    /// Node, von dem die zuerst gesehene Kante ausgeht
    pub from_id: u64,
    /// Ziel der zuerst gesehenen Kante
    pub to_id: u64,
    /// Richtung der Kante
    pub direction: EdgeDirection,
    /// Mittelpunkt der Kante
    pub midpoint: DVec2,
    /// Winkel from → to (Radiant)
    pub angle: f64,
}

impl DisplayEdge {
    /// Erstellt eine neue Einbahn-Kante from → to.
    pub fn new(key: EdgeKey, from_id: u64, to_id: u64, from_pos: DVec2, to_pos: DVec2) -> Self {
        let (midpoint, angle) = Self::calculate_geometry(from_pos, to_pos);

        Self {
            key,
            from_id,
            to_id,
            direction: EdgeDirection::OneWay,
            midpoint,
            angle,
        }
    }

    /// Gibt `true` zurück, wenn beide Richtungen existieren.
    pub fn is_two_way(&self) -> bool {
        self.direction == EdgeDirection::TwoWay
    }

    /// Markiert die Kante als bidirektional.
    pub fn mark_two_way(&mut self) {
        self.direction = EdgeDirection::TwoWay;
    }

    fn calculate_geometry(from_pos: DVec2, to_pos: DVec2) -> (DVec2, f64) {
        let midpoint = (from_pos + to_pos) * 0.5;
        let delta = to_pos - from_pos;
        let angle = delta.y.atan2(delta.x);

        (midpoint, angle)
    }
}
