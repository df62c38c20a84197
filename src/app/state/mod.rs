//! Application State und Editier-Sitzung.
//!
//! Dieses Modul verwaltet den Zustand des Dienstes (Speicher, Router, Optionen, geladenes Fenster).

mod app_state;
mod session;

pub use app_state::AppState;
pub use session::EditSession;
