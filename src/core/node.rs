//! Netzpunkt mit Position und gerichteter Adjazenz.

use glam::DVec2;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Ein Wegpunkt des Verkehrsnetzes.
///
/// Die Adjazenz ist gerichtet: `b` in `a.adjacency` bedeutet Kante a→b.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkNode {
    /// Vom Speicher vergebene ID
    pub id: u64,
    /// Planare Position (x = Ost/Länge, y = Nord/Breite)
    pub position: DVec2,
    /// Ziel-IDs der ausgehenden Kanten, in Einfügereihenfolge
    #[serde(default)]
    pub adjacency: IndexSet<u64>,
}

impl NetworkNode {
    /// Erstellt einen Node ohne Verbindungen.
    pub fn new(id: u64, position: DVec2) -> Self {
        Self {
            id,
            position,
            adjacency: IndexSet::new(),
        }
    }

    /// Erstellt einen Node mit den angegebenen Zielen (Duplikate und Self-Referenz entfallen).
    pub fn with_adjacency(id: u64, position: DVec2, targets: impl IntoIterator<Item = u64>) -> Self {
        let adjacency = targets.into_iter().filter(|&t| t != id).collect();
        Self {
            id,
            position,
            adjacency,
        }
    }

    /// Prüft ob eine Kante self→target existiert.
    pub fn links_to(&self, target: u64) -> bool {
        self.adjacency.contains(&target)
    }

    /// Fügt eine Kante self→target hinzu. Gibt `false` zurück, wenn sie schon existierte.
    pub fn link(&mut self, target: u64) -> bool {
        if target == self.id {
            return false;
        }
        self.adjacency.insert(target)
    }

    /// Entfernt die Kante self→target (Reihenfolge der übrigen bleibt erhalten).
    pub fn unlink(&mut self, target: u64) -> bool {
        self.adjacency.shift_remove(&target)
    }

    /// Ersetzt das Ziel `old` an derselben Position durch `new`.
    ///
    /// Ist `new` bereits vorhanden, wird `old` nur entfernt.
    pub fn replace_link(&mut self, old: u64, new: u64) -> bool {
        let Some(index) = self.adjacency.get_index_of(&old) else {
            return false;
        };
        if self.adjacency.contains(&new) {
            self.adjacency.shift_remove_index(index);
        } else {
            // IndexSet kann nicht direkt ersetzen: am Ende einfügen, dann an alte Stelle schieben
            self.adjacency.shift_remove_index(index);
            let (new_index, _) = self.adjacency.insert_full(new);
            self.adjacency.move_index(new_index, index);
        }
        true
    }
}
