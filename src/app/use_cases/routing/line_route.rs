//! Use-Case: Routen für gespeicherte Linien und freie Token-Listen.

use crate::app::AppState;
use crate::core::{LineDirection, TransportLayer, WaypointToken};
use crate::error::{NetworkError, NetworkResult};
use crate::store::GeometryStore;

use super::{assemble_route, resolve_waypoints, AssembledRoute};

/// Löst `tokens` auf und setzt die Route für `layer` zusammen.
pub fn route_tokens<S: GeometryStore>(
    state: &AppState<S>,
    tokens: &[WaypointToken],
    layer: TransportLayer,
) -> NetworkResult<AssembledRoute> {
    let resolved = resolve_waypoints(&state.store, tokens)?;
    let route = assemble_route(&resolved, layer, state.router.as_ref())?;

    log::info!(
        "Route über {} Waypoint(s) zusammengesetzt: {} Punkte, {} Router-Aufruf(e)",
        resolved.waypoints.len(),
        route.polyline.len(),
        route.router_calls
    );
    Ok(route)
}

/// Route aus einer freien Token-Liste.
pub fn resolve_ad_hoc_route<S: GeometryStore>(
    state: &AppState<S>,
    tokens: &[WaypointToken],
    layer: TransportLayer,
) -> NetworkResult<AssembledRoute> {
    route_tokens(state, tokens, layer)
}

/// Route einer gespeicherten Linie in Fahrtrichtung `direction`.
pub fn resolve_line_route<S: GeometryStore>(
    state: &AppState<S>,
    code: u32,
    direction: LineDirection,
) -> NetworkResult<AssembledRoute> {
    let Some(line) = state.store.get_line(code)? else {
        log::warn!("Linie {} nicht gefunden", code);
        return Err(NetworkError::not_found(format!("Linie {code}")));
    };

    route_tokens(state, line.route(direction), line.layer)
}
