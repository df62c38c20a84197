//! Use-Cases der Application-Layer-Orchestrierung.

pub mod editing;
pub mod lines;
pub mod maintenance;
pub mod neighborhood;
pub mod routing;
pub mod stops;
