//! Transit Network Editor Library.
//! Netzmodell, Editier-Operationen und Routen-Zusammensetzung als Library für CLI, Tests und Benchmarks.

pub mod app;
pub mod core;
pub mod error;
pub mod io;
pub mod router;
pub mod shared;
pub mod store;

pub use app::{
    AppCommand, AppController, AppState, CommandOutcome, DeleteReport, DirectionChange,
};
pub use core::{
    DisplayEdge, EdgeDirection, EdgeKey, Line, LineDirection, Midpoint, NetworkGraph,
    NetworkNode, Sign, SignKey, Stop, TransportLayer, WaypointToken,
};
pub use core::{SpatialIndex, SpatialMatch};
pub use error::{NetworkError, NetworkResult, RouterError, StoreError};
pub use io::NetworkSnapshot;
pub use router::{PathRouter, RoutePoint, StraightLineRouter};
pub use shared::ServiceOptions;
pub use store::{DataKind, GeometryStore, MemoryStore};
