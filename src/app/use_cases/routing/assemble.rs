//! Zusammensetzen der Polyline aus Waypoints, Midpoint-Brücken und Router-Fragmenten.

use glam::DVec2;
use serde::Serialize;

use super::ResolvedRoute;
use crate::core::TransportLayer;
use crate::error::NetworkResult;
use crate::router::PathRouter;

/// Fertig zusammengesetzte Route.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssembledRoute {
    /// Marker-Positionen: Waypoints und Midpoint-Geometrien in Reihenfolge
    pub stops: Vec<DVec2>,
    /// Durchgehende Polyline in Token-Reihenfolge
    pub polyline: Vec<DVec2>,
    /// Anzahl ausgeführter Router-Aufrufe
    pub router_calls: usize,
}

/// Setzt die Route zusammen.
///
/// Abschnitte mit Midpoint übernehmen dessen Geometrien unverändert, alle
/// anderen werden in Token-Reihenfolge an den Router delegiert. Ein
/// Router-Fehler bricht ab, es entsteht keine Teil-Polyline.
pub fn assemble_route(
    resolved: &ResolvedRoute,
    layer: TransportLayer,
    router: &dyn PathRouter,
) -> NetworkResult<AssembledRoute> {
    let mut route = AssembledRoute::default();

    for (i, waypoint) in resolved.waypoints.iter().enumerate() {
        route.stops.push(waypoint.position);
        route.polyline.push(waypoint.position);

        let Some(next) = resolved.waypoints.get(i + 1) else {
            break;
        };

        match resolved.bridges.get(i).and_then(Option::as_ref) {
            Some(geometries) => {
                route.stops.extend_from_slice(geometries);
                route.polyline.extend_from_slice(geometries);
            }
            None => {
                let fragment =
                    router.route(&waypoint.route_point(), &next.route_point(), layer)?;
                route.router_calls += 1;
                route.polyline.extend(fragment);
            }
        }
    }

    Ok(route)
}
