//! Use-Cases: Haltestellen-Umkreissuche und Haltestellen-Import.

use glam::DVec2;
use serde::Serialize;

use crate::app::AppState;
use crate::core::Stop;
use crate::error::{NetworkError, NetworkResult};
use crate::io::StopRecord;
use crate::store::GeometryStore;

/// Ein Sign im Umkreis, ergänzt um den Namen seiner Haltestelle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbySign {
    /// Stop-Code
    pub code: u32,
    /// Name der Haltestelle (falls bekannt)
    pub name: Option<String>,
    /// Position des Sign
    pub position: DVec2,
    /// Sub-Codes des Sign
    pub sub_codes: Vec<String>,
    /// Distanz zum Suchpunkt
    pub distance: f64,
}

/// Signs im Umkreis `stop_search_radius` um `center`, aufsteigend nach Distanz.
pub fn stops_in_radius<S: GeometryStore>(
    state: &AppState<S>,
    center: DVec2,
) -> NetworkResult<Vec<NearbySign>> {
    if !center.is_finite() {
        return Err(NetworkError::validation(format!(
            "ungültiger Suchpunkt {center:?}"
        )));
    }

    let hits = state.store.signs_in_radius(
        center,
        state.options.stop_search_radius,
        state.options.stop_search_limit,
    )?;

    hits.into_iter()
        .map(|hit| -> NetworkResult<NearbySign> {
            let name = state.store.get_stop(hit.stop_code)?.map(|stop| stop.name);
            Ok(NearbySign {
                code: hit.stop_code,
                name,
                position: hit.sign.position,
                sub_codes: hit.sign.sub_codes.into_iter().collect(),
                distance: hit.distance,
            })
        })
        .collect()
}

/// Importiert Haltestellen inklusive Signs. Alle Datensätze werden vorab geprüft.
pub fn import_stops<S: GeometryStore>(
    state: &mut AppState<S>,
    records: Vec<StopRecord>,
) -> NetworkResult<usize> {
    let stops: Vec<Stop> = records
        .into_iter()
        .map(StopRecord::into_stop)
        .collect::<NetworkResult<_>>()?;

    let count = stops.len();
    for stop in stops {
        state.store.put_stop(stop)?;
    }

    log::info!("{} Haltestelle(n) importiert", count);
    Ok(count)
}
