//! Use-Case: Richtung einer bestehenden Kante ändern.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::app::use_cases::neighborhood::reload_session;
use crate::app::AppState;
use crate::core::EdgeKey;
use crate::error::{NetworkError, NetworkResult};
use crate::store::GeometryStore;

/// Gewünschte Richtung einer Kante, bezogen auf ihren Schlüssel `low_high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionChange {
    /// Nur `low → high`
    LowToHigh,
    /// Nur `high → low`
    HighToLow,
    /// Beide Richtungen
    TwoWay,
    /// Bestehende Einbahn umkehren
    Reverse,
}

impl FromStr for DirectionChange {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low_to_high" => Ok(Self::LowToHigh),
            "high_to_low" => Ok(Self::HighToLow),
            "two_way" => Ok(Self::TwoWay),
            "reverse" => Ok(Self::Reverse),
            other => Err(NetworkError::validation(format!(
                "unbekannte Richtung '{other}'"
            ))),
        }
    }
}

impl fmt::Display for DirectionChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LowToHigh => "low_to_high",
            Self::HighToLow => "high_to_low",
            Self::TwoWay => "two_way",
            Self::Reverse => "reverse",
        };
        f.write_str(name)
    }
}

/// Setzt die Richtung der Kante `key` und schreibt beide Adjazenzen.
///
/// Die aktuelle Richtung wird aus dem Speicher gelesen. `NotFound`, wenn
/// keine Richtung existiert; `Conflict` bei `Reverse` auf einer
/// bidirektionalen Kante. Ungeänderte Nodes werden nicht geschrieben.
/// Liefert die neue Richtung als `(low → high, high → low)`.
pub fn change_direction<S: GeometryStore>(
    state: &mut AppState<S>,
    key: EdgeKey,
    change: DirectionChange,
) -> NetworkResult<(bool, bool)> {
    let (low_id, high_id) = key.endpoints();
    let low = state.store.get_node(low_id)?;
    let high = state.store.get_node(high_id)?;

    let forward = low.as_ref().is_some_and(|n| n.links_to(high_id));
    let backward = high.as_ref().is_some_and(|n| n.links_to(low_id));
    if !forward && !backward {
        log::warn!("Kante {} nicht vorhanden, Richtung nicht änderbar", key);
        return Err(NetworkError::not_found(format!("Kante {key}")));
    }

    let wanted = match change {
        DirectionChange::LowToHigh => (true, false),
        DirectionChange::HighToLow => (false, true),
        DirectionChange::TwoWay => (true, true),
        DirectionChange::Reverse if forward && backward => {
            log::warn!("Kante {} ist bidirektional, Umkehren nicht möglich", key);
            return Err(NetworkError::Conflict(format!(
                "Kante {key} ist bidirektional"
            )));
        }
        DirectionChange::Reverse => (backward, forward),
    };

    // Beide Endpunkte müssen existieren, sobald eine Richtung neu entsteht
    let (Some(mut low), Some(mut high)) = (low, high) else {
        let missing = if forward { high_id } else { low_id };
        return Err(NetworkError::not_found(format!("Node {missing}")));
    };

    let low_changed = if wanted.0 {
        low.link(high_id)
    } else {
        low.unlink(high_id)
    };
    let high_changed = if wanted.1 {
        high.link(low_id)
    } else {
        high.unlink(low_id)
    };

    if low_changed {
        state.store.put_node(&low)?;
    }
    if high_changed {
        state.store.put_node(&high)?;
    }

    log::info!(
        "Richtung von Kante {} geändert: {} (vorher {}→{}: {}, {}→{}: {})",
        key,
        change,
        low_id,
        high_id,
        forward,
        high_id,
        low_id,
        backward
    );

    reload_session(state, (low.position + high.position) * 0.5)?;
    Ok(wanted)
}
