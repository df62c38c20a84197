//! Auflösung von Waypoint-Tokens zu Sign-Positionen.

use glam::DVec2;
use serde::Serialize;

use crate::core::WaypointToken;
use crate::error::{NetworkError, NetworkResult};
use crate::router::RoutePoint;
use crate::store::GeometryStore;

/// Ein aufgelöstes Token
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedWaypoint {
    /// Ursprüngliches Token
    pub token: WaypointToken,
    /// Position des referenzierten Sign
    pub position: DVec2,
}

impl ResolvedWaypoint {
    /// Endpunkt für den Router (inklusive Qualifier)
    pub fn route_point(&self) -> RoutePoint {
        RoutePoint {
            position: self.position,
            qualifier: self.token.qualifier.clone(),
        }
    }
}

/// Aufgelöste Tokens in Eingabereihenfolge.
///
/// `bridges[i]` überbrückt `waypoints[i] → waypoints[i + 1]`, falls ein Midpoint existiert.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedRoute {
    /// Aufgelöste Waypoints
    pub waypoints: Vec<ResolvedWaypoint>,
    /// Midpoint-Geometrien je Abschnitt (None = Router nötig)
    pub bridges: Vec<Option<Vec<DVec2>>>,
}

impl ResolvedRoute {
    /// Anzahl der Abschnitte ohne Midpoint
    pub fn unbridged_legs(&self) -> usize {
        self.bridges.iter().filter(|b| b.is_none()).count()
    }
}

/// Löst jedes Token über `get_sign` auf und sucht Midpoints zwischen Nachbarn.
///
/// Ein nicht auflösbares Token lässt die gesamte Auflösung mit `NotFound` scheitern.
/// Qualifier werden für den Midpoint-Lookup ignoriert.
pub fn resolve_waypoints<S: GeometryStore + ?Sized>(
    store: &S,
    tokens: &[WaypointToken],
) -> NetworkResult<ResolvedRoute> {
    if tokens.is_empty() {
        return Err(NetworkError::validation("leere Token-Liste"));
    }

    let mut waypoints = Vec::with_capacity(tokens.len());
    for token in tokens {
        let Some(sign) = store.get_sign(&token.sign)? else {
            log::warn!("Token {} nicht auflösbar", token);
            return Err(NetworkError::not_found(format!("Sign für Token {token}")));
        };
        waypoints.push(ResolvedWaypoint {
            token: token.clone(),
            position: sign.position,
        });
    }

    let mut bridges = Vec::with_capacity(tokens.len().saturating_sub(1));
    for pair in tokens.windows(2) {
        let midpoint = store.get_midpoint(&pair[0].sign, &pair[1].sign)?;
        bridges.push(midpoint.map(|m| m.geometries));
    }

    Ok(ResolvedRoute { waypoints, bridges })
}
