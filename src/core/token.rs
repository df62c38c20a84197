//! Zusammengesetzte Waypoint-Tokens der Form `stopCode_subCode[_qualifier]`.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::NetworkError;

/// Stop-Code, Sub-Code und optionaler Qualifier; der Qualifier darf `_` enthalten.
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)_([^_\s]+)(?:_(\S+))?$").expect("statisches Token-Pattern ist gültig")
});

/// Schlüssel eines Sign: Stop-Code plus Sub-Code, ohne Qualifier.
///
/// Dient als Lookup-Schlüssel für Signs und Midpoints.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SignKey {
    /// Numerischer Stop-Code
    pub stop_code: u32,
    /// Sub-Code des Sign (Richtungsvariante)
    pub sub_code: String,
}

impl SignKey {
    /// Erstellt einen neuen Sign-Schlüssel
    pub fn new(stop_code: u32, sub_code: impl Into<String>) -> Self {
        Self {
            stop_code,
            sub_code: sub_code.into(),
        }
    }
}

impl fmt::Display for SignKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.stop_code, self.sub_code)
    }
}

impl FromStr for SignKey {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token: WaypointToken = s.parse()?;
        if token.qualifier.is_some() {
            return Err(NetworkError::validation(format!(
                "Sign-Schlüssel '{s}' darf keinen Qualifier enthalten"
            )));
        }
        Ok(token.sign)
    }
}

impl TryFrom<String> for SignKey {
    type Error = NetworkError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SignKey> for String {
    fn from(key: SignKey) -> Self {
        key.to_string()
    }
}

/// Ein Waypoint-Token: wählt genau ein Sign und optional einen Einstiegs-Qualifier.
///
/// Der Qualifier wird nur an den Router weitergereicht, nie für Midpoint-Lookups genutzt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WaypointToken {
    /// Referenziertes Sign
    pub sign: SignKey,
    /// Einstiegs-Qualifier (Routing-Hinweis)
    pub qualifier: Option<String>,
}

impl WaypointToken {
    /// Erstellt ein Token ohne Qualifier
    pub fn new(stop_code: u32, sub_code: impl Into<String>) -> Self {
        Self {
            sign: SignKey::new(stop_code, sub_code),
            qualifier: None,
        }
    }

    /// Setzt den Qualifier
    pub fn with_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.qualifier = Some(qualifier.into());
        self
    }

    /// Stop-Code des referenzierten Sign
    pub fn stop_code(&self) -> u32 {
        self.sign.stop_code
    }

    /// Parst eine kommagetrennte Token-Liste (Leerraum und leere Einträge werden übergangen).
    pub fn parse_list(list: &str) -> Result<Vec<Self>, NetworkError> {
        list.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::parse)
            .collect()
    }
}

impl fmt::Display for WaypointToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.qualifier {
            Some(qualifier) => write!(f, "{}_{}", self.sign, qualifier),
            None => write!(f, "{}", self.sign),
        }
    }
}

impl FromStr for WaypointToken {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = TOKEN_PATTERN.captures(s.trim()).ok_or_else(|| {
            NetworkError::validation(format!(
                "Waypoint-Token '{s}' entspricht nicht stopCode_subCode[_qualifier]"
            ))
        })?;

        let stop_code = captures[1].parse::<u32>().map_err(|_| {
            NetworkError::validation(format!("Stop-Code in '{s}' außerhalb des Wertebereichs"))
        })?;

        Ok(Self {
            sign: SignKey::new(stop_code, &captures[2]),
            qualifier: captures.get(3).map(|m| m.as_str().to_string()),
        })
    }
}

impl TryFrom<String> for WaypointToken {
    type Error = NetworkError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WaypointToken> for String {
    fn from(token: WaypointToken) -> Self {
        token.to_string()
    }
}
