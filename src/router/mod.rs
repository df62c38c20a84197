//! Schnittstelle zum externen Path-Router.
//!
//! Die eigentliche Wegsuche ist ausgelagert. `StraightLineRouter` ist eine
//! Referenzimplementierung ohne Netzkenntnis für Offline-Betrieb und Tests.

use glam::DVec2;
use serde::Serialize;

use crate::core::TransportLayer;
use crate::error::RouterError;

/// Ein Routing-Endpunkt: Position plus optionaler Einstiegs-Qualifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePoint {
    /// Position des Waypoints
    pub position: DVec2,
    /// Einstiegs-Qualifier aus dem Token
    pub qualifier: Option<String>,
}

impl RoutePoint {
    /// Erstellt einen Endpunkt ohne Qualifier
    pub fn new(position: DVec2) -> Self {
        Self {
            position,
            qualifier: None,
        }
    }
}

/// Externer Router: liefert die Zwischengeometrie von `from` nach `to`.
///
/// Das Fragment enthält die beiden Endpunkte nicht. Aufrufe gelten als teuer.
pub trait PathRouter {
    /// Berechnet ein Pfad-Fragment für die Verkehrsart `layer`.
    fn route(
        &self,
        from: &RoutePoint,
        to: &RoutePoint,
        layer: TransportLayer,
    ) -> Result<Vec<DVec2>, RouterError>;
}

/// Router ohne Netz: interpoliert auf der Geraden mit fester Schrittweite.
#[derive(Debug, Clone, Copy)]
pub struct StraightLineRouter {
    step: f64,
}

impl StraightLineRouter {
    /// Maximale Anzahl Zwischenpunkte pro Teilstrecke.
    pub const MAX_FRAGMENT_POINTS: usize = 100_000;

    /// Erstellt den Router. `step <= 0` liefert leere Fragmente (direkte Gerade).
    pub fn new(step: f64) -> Self {
        Self { step }
    }
}

impl PathRouter for StraightLineRouter {
    fn route(
        &self,
        from: &RoutePoint,
        to: &RoutePoint,
        _layer: TransportLayer,
    ) -> Result<Vec<DVec2>, RouterError> {
        if !from.position.is_finite() || !to.position.is_finite() {
            return Err(RouterError(format!(
                "ungültige Endpunkte {:?} → {:?}",
                from.position, to.position
            )));
        }

        if self.step.is_nan() {
            return Err(RouterError(format!("ungültige Schrittweite {}", self.step)));
        }

        let length = from.position.distance(to.position);
        if self.step <= 0.0 || length <= self.step {
            return Ok(Vec::new());
        }

        let segments = (length / self.step).ceil();
        if segments > Self::MAX_FRAGMENT_POINTS as f64 {
            return Err(RouterError(format!(
                "Teilstrecke mit {:.0} Abschnitten überschreitet das Limit von {} (Schrittweite {})",
                segments,
                Self::MAX_FRAGMENT_POINTS,
                self.step
            )));
        }
        let segments = segments as usize;
        Ok((1..segments)
            .map(|i| from.position.lerp(to.position, i as f64 / segments as f64))
            .collect())
    }
}
