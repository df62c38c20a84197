//! Kanonischer Schlüssel für ungerichtete Node-Paare.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NetworkError;

/// Trennzeichen zwischen den beiden Node-IDs.
pub const EDGE_KEY_SEPARATOR: char = '_';

/// Ungeordnetes Node-Paar, aufsteigend sortiert.
///
/// `EdgeKey::canonical(a, b) == EdgeKey::canonical(b, a)` gilt für alle `a != b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EdgeKey {
    low: u64,
    high: u64,
}

impl EdgeKey {
    /// Bildet den kanonischen Schlüssel. Self-Loops sind nicht erlaubt.
    pub fn canonical(x: u64, y: u64) -> Result<Self, NetworkError> {
        match x.cmp(&y) {
            std::cmp::Ordering::Less => Ok(Self { low: x, high: y }),
            std::cmp::Ordering::Greater => Ok(Self { low: y, high: x }),
            std::cmp::Ordering::Equal => Err(NetworkError::validation(format!(
                "Self-Loop nicht erlaubt (Node {x})"
            ))),
        }
    }

    /// Kleinere Node-ID
    pub fn low(&self) -> u64 {
        self.low
    }

    /// Größere Node-ID
    pub fn high(&self) -> u64 {
        self.high
    }

    /// Beide Endpunkte als `(low, high)`.
    pub fn endpoints(&self) -> (u64, u64) {
        (self.low, self.high)
    }

    /// Prüft ob `node_id` einer der beiden Endpunkte ist.
    pub fn touches(&self, node_id: u64) -> bool {
        self.low == node_id || self.high == node_id
    }

    /// Liefert den jeweils anderen Endpunkt, falls `node_id` Teil des Schlüssels ist.
    pub fn other(&self, node_id: u64) -> Option<u64> {
        if node_id == self.low {
            Some(self.high)
        } else if node_id == self.high {
            Some(self.low)
        } else {
            None
        }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.low, EDGE_KEY_SEPARATOR, self.high)
    }
}

impl FromStr for EdgeKey {
    type Err = NetworkError;

    /// Akzeptiert beide Reihenfolgen (`"7_3"` wird zu `3_7`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (a, b) = s
            .split_once(EDGE_KEY_SEPARATOR)
            .ok_or_else(|| NetworkError::validation(format!("Kanten-Schlüssel '{s}' ohne Trenner")))?;
        let parse = |part: &str| {
            part.parse::<u64>().map_err(|_| {
                NetworkError::validation(format!("Kanten-Schlüssel '{s}': '{part}' ist keine Node-ID"))
            })
        };
        Self::canonical(parse(a)?, parse(b)?)
    }
}

impl TryFrom<String> for EdgeKey {
    type Error = NetworkError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EdgeKey> for String {
    fn from(key: EdgeKey) -> Self {
        key.to_string()
    }
}
