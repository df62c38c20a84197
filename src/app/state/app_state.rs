use crate::app::CommandLog;
use crate::router::{PathRouter, StraightLineRouter};
use crate::shared::ServiceOptions;
use crate::store::{GeometryStore, MemoryStore};

use super::EditSession;

/// Hauptzustand des Dienstes
///
/// Der Speicher-Typ ist generisch, damit Aufrufer (CLI, Tests) nach der
/// Verarbeitung wieder auf die konkrete Implementierung zugreifen können.
pub struct AppState<S = MemoryStore> {
    /// Geometrie-Speicher (externer Kollaborateur)
    pub store: S,
    /// Externer Path-Router
    pub router: Box<dyn PathRouter>,
    /// Laufzeit-Optionen (Radien, Limits, Router-Schrittweite)
    pub options: ServiceOptions,
    /// Zuletzt geladenes Nachbarschafts-Fenster
    pub session: EditSession,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl<S: GeometryStore> AppState<S> {
    /// Erstellt einen neuen App-State über einem bestehenden Speicher.
    pub fn new(store: S, router: Box<dyn PathRouter>, options: ServiceOptions) -> Self {
        Self {
            store,
            router,
            options,
            session: EditSession::new(),
            command_log: CommandLog::new(),
        }
    }

    /// Erstellt einen App-State mit dem Geraden-Router aus den Optionen.
    pub fn with_straight_router(store: S, options: ServiceOptions) -> Self {
        let router = Box::new(StraightLineRouter::new(options.router_step));
        Self::new(store, router, options)
    }

    /// Gibt die Anzahl der geladenen Nodes zurück
    pub fn node_count(&self) -> usize {
        self.session.graph.node_count()
    }

    /// Gibt die Anzahl der geladenen Anzeige-Kanten zurück
    pub fn edge_count(&self) -> usize {
        self.session.graph.edge_count()
    }
}

impl AppState<MemoryStore> {
    /// Erstellt einen leeren In-Memory-State mit Standard-Optionen.
    pub fn in_memory() -> Self {
        Self::with_straight_router(MemoryStore::new(), ServiceOptions::default())
    }
}

impl Default for AppState<MemoryStore> {
    fn default() -> Self {
        Self::in_memory()
    }
}
