//! Core-Domänentypen: Nodes, Anzeige-Kanten, Netz-Sicht, Stops, Linien, Spatial-Index.

pub mod display_edge;
pub mod edge_key;
pub mod line;
pub mod midpoint;
/// Core-Datenmodelle des Verkehrsnetzes
///
/// - NetworkGraph: geladenes Fenster mit Nodes und abgeleiteten Kanten
/// - NetworkNode: einzelner Wegpunkt mit Position und gerichteter Adjazenz
/// - DisplayEdge: ungerichtete Sicht auf ein oder zwei gerichtete Kanten
pub mod network_graph;
pub mod node;
pub mod spatial;
pub mod stop;
pub mod token;

pub use display_edge::{DisplayEdge, EdgeDirection};
pub use edge_key::{EdgeKey, EDGE_KEY_SEPARATOR};
pub use line::{Line, LineDirection, TransportLayer};
pub use midpoint::Midpoint;
pub use network_graph::NetworkGraph;
pub use node::NetworkNode;
pub use spatial::{SpatialIndex, SpatialMatch};
pub use stop::{Sign, Stop};
pub use token::{SignKey, WaypointToken};
