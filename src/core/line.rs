//! Linien mit zwei Fahrtrichtungen und ihrer Verkehrsart.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::WaypointToken;
use crate::error::NetworkError;

/// Verkehrsart einer Linie (wird an den Router weitergereicht)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportLayer {
    /// Schienenverkehr
    Rail,
    /// Straßenverkehr (Bus)
    Road,
    /// Straßenbahn
    Tram,
}

impl fmt::Display for TransportLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Rail => "rail",
            Self::Road => "road",
            Self::Tram => "tram",
        };
        f.write_str(name)
    }
}

impl FromStr for TransportLayer {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rail" => Ok(Self::Rail),
            "road" => Ok(Self::Road),
            "tram" => Ok(Self::Tram),
            other => Err(NetworkError::validation(format!("unbekannte Verkehrsart '{other}'"))),
        }
    }
}

/// Fahrtrichtung einer Linie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineDirection {
    /// Hinrichtung
    A,
    /// Rückrichtung
    B,
}

impl FromStr for LineDirection {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "a" | "A" => Ok(Self::A),
            "b" | "B" => Ok(Self::B),
            other => Err(NetworkError::validation(format!("unbekannte Fahrtrichtung '{other}'"))),
        }
    }
}

/// Eine Linie mit zwei geordneten Routen-Spezifikationen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Numerischer Linien-Code
    pub code: u32,
    /// Verkehrsart
    pub layer: TransportLayer,
    /// Anzeigename (falls bekannt)
    #[serde(default)]
    pub name: Option<String>,
    /// Tokens der Hinrichtung
    #[serde(default)]
    pub route_a: Vec<WaypointToken>,
    /// Tokens der Rückrichtung
    #[serde(default)]
    pub route_b: Vec<WaypointToken>,
}

impl Line {
    /// Erstellt eine Linie ohne Routen
    pub fn new(code: u32, layer: TransportLayer) -> Self {
        Self {
            code,
            layer,
            name: None,
            route_a: Vec::new(),
            route_b: Vec::new(),
        }
    }

    /// Tokens der angegebenen Richtung
    pub fn route(&self, direction: LineDirection) -> &[WaypointToken] {
        match direction {
            LineDirection::A => &self.route_a,
            LineDirection::B => &self.route_b,
        }
    }

    /// Anzeigename, ersatzweise der Linien-Code.
    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.code.to_string())
    }
}
