//! Use-Cases: Linien-Übersicht sowie Import von Linien und Linien-Namen.

use serde::Serialize;

use crate::app::AppState;
use crate::core::{Line, TransportLayer, WaypointToken};
use crate::error::NetworkResult;
use crate::io::{LineNameRecord, LineRecord};
use crate::store::GeometryStore;

/// Start- und Endhaltestelle einer Fahrtrichtung.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Terminus {
    /// Name der ersten Haltestelle
    pub start: String,
    /// Name der letzten Haltestelle
    pub end: String,
}

/// Eine Zeile der Linien-Übersicht.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineSummary {
    /// Linien-Code
    pub code: u32,
    /// Verkehrsart
    pub layer: TransportLayer,
    /// Anzeigename (ersatzweise der Code)
    pub name: String,
    /// Endpunkte der Hinrichtung, falls beide auflösbar
    pub route_a: Option<Terminus>,
    /// Endpunkte der Rückrichtung, falls beide auflösbar
    pub route_b: Option<Terminus>,
}

/// Ermittelt die Namen der ersten und letzten Haltestelle einer Token-Liste.
fn terminus<S: GeometryStore + ?Sized>(
    store: &S,
    tokens: &[WaypointToken],
) -> NetworkResult<Option<Terminus>> {
    let (Some(first), Some(last)) = (tokens.first(), tokens.last()) else {
        return Ok(None);
    };
    let start = store.get_stop(first.stop_code())?;
    let end = store.get_stop(last.stop_code())?;
    Ok(start.zip(end).map(|(start, end)| Terminus {
        start: start.name,
        end: end.name,
    }))
}

/// Alle Linien aufsteigend nach Code, mit Anzeigenamen und Endhaltestellen.
pub fn list_lines<S: GeometryStore>(state: &AppState<S>) -> NetworkResult<Vec<LineSummary>> {
    state
        .store
        .lines()?
        .into_iter()
        .map(|line| -> NetworkResult<LineSummary> {
            Ok(LineSummary {
                code: line.code,
                layer: line.layer,
                name: line.display_name(),
                route_a: terminus(&state.store, &line.route_a)?,
                route_b: terminus(&state.store, &line.route_b)?,
            })
        })
        .collect()
}

/// Importiert Linien. Alle Datensätze werden vor dem ersten Schreiben geprüft.
pub fn import_lines<S: GeometryStore>(
    state: &mut AppState<S>,
    records: Vec<LineRecord>,
) -> NetworkResult<usize> {
    let lines: Vec<Line> = records
        .into_iter()
        .map(LineRecord::into_line)
        .collect::<NetworkResult<_>>()?;

    let count = lines.len();
    for line in lines {
        state.store.put_line(line)?;
    }

    log::info!("{} Linie(n) importiert", count);
    Ok(count)
}

/// Importiert Anzeigenamen für Linien-Codes.
pub fn import_line_names<S: GeometryStore>(
    state: &mut AppState<S>,
    records: Vec<LineNameRecord>,
) -> NetworkResult<usize> {
    let count = records.len();
    for record in records {
        state.store.put_line_name(record.lc, record.name)?;
    }

    log::info!("{} Linien-Name(n) importiert", count);
    Ok(count)
}
