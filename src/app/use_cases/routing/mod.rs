//! Use-Cases für die Routen-Auflösung aus Waypoint-Tokens.
//!
//! - `resolve` — Tokens → Sign-Positionen plus Midpoint-Brücken
//! - `assemble` — Polyline aus Waypoints, Brücken und Router-Fragmenten
//! - `line_route` — Einstiegspunkte für Linien- und freie Routen

mod assemble;
mod line_route;
mod resolve;

pub use assemble::{assemble_route, AssembledRoute};
pub use line_route::{resolve_ad_hoc_route, resolve_line_route, route_tokens};
pub use resolve::{resolve_waypoints, ResolvedRoute, ResolvedWaypoint};
