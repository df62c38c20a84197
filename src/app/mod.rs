//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
/// Application State
///
/// Dieses Modul verwaltet den Zustand des Dienstes (Speicher, Router, geladenes Fenster).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, CommandOutcome};
pub use state::{AppState, EditSession};
pub use use_cases::editing::{CleanupFailure, DeleteReport, DirectionChange};
pub use use_cases::lines::{LineSummary, Terminus};
pub use use_cases::routing::{AssembledRoute, ResolvedRoute, ResolvedWaypoint};
pub use use_cases::stops::NearbySign;
