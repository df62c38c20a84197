//! Zustand der laufenden Editier-Sitzung.

use glam::DVec2;

use crate::core::NetworkGraph;

/// Zuletzt geladenes Nachbarschafts-Fenster.
///
/// Wird nach jeder strukturellen Änderung komplett ersetzt.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    /// Zentrum des zuletzt geladenen Fensters (None = noch nichts geladen)
    pub center: Option<DVec2>,
    /// Netz-Sicht des Fensters
    pub graph: NetworkGraph,
}

impl EditSession {
    /// Erstellt eine leere Sitzung.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt `true` zurück, wenn bereits ein Fenster geladen wurde.
    pub fn is_loaded(&self) -> bool {
        self.center.is_some()
    }

    /// Ersetzt das geladene Fenster.
    pub fn replace(&mut self, center: DVec2, graph: NetworkGraph) {
        self.center = Some(center);
        self.graph = graph;
    }
}
