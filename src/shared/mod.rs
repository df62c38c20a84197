//! Geteilte Typen für schichtübergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die Controller, Use-Cases und CLI gemeinsam nutzen.

pub mod options;

pub use options::ServiceOptions;
pub use options::{MAX_LOAD_POINTS, NEIGHBORHOOD_RADIUS};
