//! Datensätze der Bulk-Importe für Haltestellen, Linien und Linien-Namen.
//!
//! Die Feldnamen entsprechen den bestehenden Export-Dateien (`lc`, `routeA`, `lName`, …).

use glam::DVec2;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{Line, Sign, Stop, TransportLayer, WaypointToken};
use crate::error::{NetworkError, NetworkResult};

/// Eine Haltestelle im Import-Format.
///
/// `signs` bildet `"x_y"` auf die an dieser Position haltenden Sub-Codes ab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopRecord {
    /// Numerischer Stop-Code
    pub code: u32,
    /// Anzeigename
    pub name: String,
    /// Sign-Positionen mit Sub-Codes
    #[serde(default)]
    pub signs: IndexMap<String, Vec<String>>,
}

/// Eine Linie im Import-Format; Routen sind kommagetrennte Token-Listen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineRecord {
    /// Linien-Code
    pub lc: u32,
    /// Verkehrsart (`rail`, `road`, `tram`)
    #[serde(rename = "type")]
    pub layer: String,
    /// Tokens der Hinrichtung
    #[serde(rename = "routeA", default)]
    pub route_a: String,
    /// Tokens der Rückrichtung
    #[serde(rename = "routeB", default)]
    pub route_b: String,
}

/// Anzeigename eines Linien-Codes im Import-Format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineNameRecord {
    /// Linien-Code
    pub lc: u32,
    /// Anzeigename
    #[serde(rename = "lName")]
    pub name: String,
}

/// Parst einen Sign-Schlüssel `"x_y"` in eine Position.
fn parse_sign_position(raw: &str) -> NetworkResult<DVec2> {
    let invalid = || NetworkError::validation(format!("Sign-Position '{raw}' ist nicht 'x_y'"));

    let (x, y) = raw.split_once('_').ok_or_else(invalid)?;
    let x: f64 = x.trim().parse().map_err(|_| invalid())?;
    let y: f64 = y.trim().parse().map_err(|_| invalid())?;
    let position = DVec2::new(x, y);
    if !position.is_finite() {
        return Err(invalid());
    }
    Ok(position)
}

impl StopRecord {
    /// Wandelt den Datensatz in eine Haltestelle mit Signs um.
    pub fn into_stop(self) -> NetworkResult<Stop> {
        let mut stop = Stop::new(self.code, self.name);
        for (raw_position, sub_codes) in self.signs {
            let position = parse_sign_position(&raw_position)?;
            stop.signs.push(Sign::new(position, sub_codes));
        }
        Ok(stop)
    }
}

impl From<&Stop> for StopRecord {
    fn from(stop: &Stop) -> Self {
        let signs = stop
            .signs
            .iter()
            .map(|sign| {
                (
                    format!("{}_{}", sign.position.x, sign.position.y),
                    sign.sub_codes.iter().cloned().collect(),
                )
            })
            .collect();
        Self {
            code: stop.code,
            name: stop.name.clone(),
            signs,
        }
    }
}

impl LineRecord {
    /// Wandelt den Datensatz in eine Linie um (Tokens werden strikt geparst).
    pub fn into_line(self) -> NetworkResult<Line> {
        let layer: TransportLayer = self.layer.parse()?;
        let mut line = Line::new(self.lc, layer);
        line.route_a = WaypointToken::parse_list(&self.route_a)?;
        line.route_b = WaypointToken::parse_list(&self.route_b)?;
        Ok(line)
    }
}
