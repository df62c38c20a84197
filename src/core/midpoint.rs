//! Vorberechnete Zwischengeometrie zwischen zwei benachbarten Waypoints.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::SignKey;

/// Ein Midpoint überbrückt das geordnete Sign-Paar `from → to` ohne Router-Aufruf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Midpoint {
    /// Start-Sign
    pub from: SignKey,
    /// Ziel-Sign
    pub to: SignKey,
    /// Zwischenpunkte (ohne die beiden Endpunkte), in Fahrtrichtung
    pub geometries: Vec<DVec2>,
}

impl Midpoint {
    /// Erstellt einen neuen Midpoint
    pub fn new(from: SignKey, to: SignKey, geometries: Vec<DVec2>) -> Self {
        Self {
            from,
            to,
            geometries,
        }
    }

    /// Lookup-Schlüssel `(from, to)`
    pub fn key(&self) -> (SignKey, SignKey) {
        (self.from.clone(), self.to.clone())
    }
}
