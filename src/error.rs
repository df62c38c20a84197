//! Fehlertypen des Netz-Editors.
//!
//! Jede öffentliche Operation liefert entweder ihr Ergebnis oder genau eine
//! der fünf Fehlerarten aus [`NetworkError`].

use serde::Serialize;
use thiserror::Error;

/// Fehler einer Netz-, Editier- oder Routing-Operation.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Ungültige Eingabe (fehlerhaftes Token, Self-Loop, fehlendes Feld)
    #[error("ungültige Eingabe: {0}")]
    Validation(String),

    /// Referenziertes Objekt existiert nicht (Node, Stop, Sign, Linie)
    #[error("nicht gefunden: {0}")]
    NotFound(String),

    /// Operation kollidiert mit bestehendem Zustand (z.B. doppelte Verbindung)
    #[error("Konflikt: {0}")]
    Conflict(String),

    /// Fehler des Geometrie-Speichers
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Fehler des externen Routers
    #[error(transparent)]
    Router(#[from] RouterError),
}

impl NetworkError {
    /// Kurzform für `NetworkError::NotFound` mit formatierter Beschreibung.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Kurzform für `NetworkError::Validation`.
    pub fn validation(what: impl Into<String>) -> Self {
        Self::Validation(what.into())
    }
}

/// Fehler beim Zugriff auf den Geometrie-Speicher.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[error("Speicherfehler bei {operation}: {message}")]
pub struct StoreError {
    /// Betroffene Speicher-Operation (z.B. `put_node`)
    pub operation: &'static str,
    /// Beschreibung des Backends
    pub message: String,
}

impl StoreError {
    /// Erstellt einen neuen Speicherfehler.
    pub fn new(operation: &'static str, message: impl Into<String>) -> Self {
        Self {
            operation,
            message: message.into(),
        }
    }
}

/// Fehler des externen Path-Routers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Routing fehlgeschlagen: {0}")]
pub struct RouterError(pub String);

/// Ergebnis-Alias für Netz-Operationen.
pub type NetworkResult<T> = Result<T, NetworkError>;
