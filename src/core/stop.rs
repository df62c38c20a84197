//! Haltestellen (Stops) und ihre physischen Einstiegsorte (Signs).

use glam::DVec2;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Ein physischer Einstiegsort einer Haltestelle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sign {
    /// Position des Sign
    pub position: DVec2,
    /// Sub-Codes der Richtungsvarianten, die hier halten
    pub sub_codes: IndexSet<String>,
}

impl Sign {
    /// Erstellt ein Sign mit den angegebenen Sub-Codes.
    pub fn new(position: DVec2, sub_codes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            position,
            sub_codes: sub_codes.into_iter().map(Into::into).collect(),
        }
    }

    /// Prüft ob der Sub-Code an diesem Sign bedient wird.
    pub fn serves(&self, sub_code: &str) -> bool {
        self.sub_codes.contains(sub_code)
    }
}

/// Eine benannte Haltestelle mit einem oder mehreren Signs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    /// Numerischer Stop-Code
    pub code: u32,
    /// Anzeigename
    pub name: String,
    /// Einstiegsorte
    pub signs: Vec<Sign>,
}

impl Stop {
    /// Erstellt eine Haltestelle ohne Signs
    pub fn new(code: u32, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
            signs: Vec::new(),
        }
    }

    /// Fügt ein Sign hinzu (Builder)
    pub fn with_sign(mut self, sign: Sign) -> Self {
        self.signs.push(sign);
        self
    }

    /// Findet das erste Sign, das den Sub-Code bedient.
    pub fn sign_for(&self, sub_code: &str) -> Option<&Sign> {
        self.signs.iter().find(|sign| sign.serves(sub_code))
    }
}
