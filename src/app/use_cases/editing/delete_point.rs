//! Use-Case: Node löschen und Referenzen der Nachbarn bereinigen.

use indexmap::IndexSet;
use serde::Serialize;

use super::helpers::load_node;
use crate::app::use_cases::neighborhood::{fetch_neighborhood, reload_session};
use crate::app::AppState;
use crate::error::{NetworkError, NetworkResult, StoreError};
use crate::store::GeometryStore;

/// Fehlgeschlagene Bereinigung eines einzelnen Nachbarn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanupFailure {
    /// Nachbar, dessen Adjazenz nicht geschrieben werden konnte
    pub neighbor_id: u64,
    /// Fehler des Speichers
    pub error: StoreError,
}

/// Ergebnis von `delete_point`.
///
/// Der Node selbst ist gelöscht; `failed` enthält Nachbarn, die noch auf ihn
/// verweisen können und vom Aufrufer erneut bereinigt werden sollten.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeleteReport {
    /// Gelöschter Node
    pub node_id: u64,
    /// Nachbarn, deren Adjazenz umgeschrieben wurde
    pub cleaned: Vec<u64>,
    /// Nachbarn, die nicht mehr existieren
    pub skipped: Vec<u64>,
    /// Nachbarn, deren Bereinigung fehlschlug
    pub failed: Vec<CleanupFailure>,
}

impl DeleteReport {
    /// Gibt `true` zurück, wenn alle Nachbarn bereinigt werden konnten.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Ausgang der Bereinigung eines Nachbarn
enum Cleanup {
    Rewritten,
    Untouched,
    Missing,
}

/// Entfernt `removed_id` aus der Adjazenz von `neighbor_id`.
fn cleanup_neighbor<S: GeometryStore>(
    store: &mut S,
    neighbor_id: u64,
    removed_id: u64,
) -> Result<Cleanup, StoreError> {
    let Some(mut neighbor) = store.get_node(neighbor_id)? else {
        return Ok(Cleanup::Missing);
    };
    if !neighbor.unlink(removed_id) {
        return Ok(Cleanup::Untouched);
    }
    store.put_node(&neighbor)?;
    Ok(Cleanup::Rewritten)
}

/// Löscht einen Node.
///
/// Lädt das Fenster um den Node, entfernt ihn aus der Adjazenz aller
/// Nachbarn (inzidente Anzeige-Kanten plus eigene Ziele) und löscht ihn dann.
/// Fehler bei einzelnen Nachbarn landen im Bericht und brechen nicht ab.
///
/// Schlägt erst das anschließende Neuladen des Fensters fehl, ist der Node
/// bereits gelöscht: der Fehler wird zurückgegeben und der Bericht mit den
/// offenen Nachbarn vorher als Warnung geloggt.
pub fn delete_point<S: GeometryStore>(
    state: &mut AppState<S>,
    id: u64,
) -> NetworkResult<DeleteReport> {
    let node = load_node(&state.store, id)?;

    let graph = fetch_neighborhood(
        &state.store,
        node.position,
        state.options.neighborhood_radius,
        state.options.max_load_points,
    )?;

    let mut neighbors: IndexSet<u64> = graph
        .incident_edges(id)
        .into_iter()
        .filter_map(|edge| edge.key.other(id))
        .collect();
    neighbors.extend(node.adjacency.iter().copied());

    let mut report = DeleteReport {
        node_id: id,
        ..DeleteReport::default()
    };

    for neighbor_id in neighbors {
        match cleanup_neighbor(&mut state.store, neighbor_id, id) {
            Ok(Cleanup::Rewritten) => report.cleaned.push(neighbor_id),
            Ok(Cleanup::Untouched) => {}
            Ok(Cleanup::Missing) => report.skipped.push(neighbor_id),
            Err(error) => {
                log::warn!(
                    "Bereinigung von Nachbar {} fehlgeschlagen: {}",
                    neighbor_id,
                    error
                );
                report.failed.push(CleanupFailure { neighbor_id, error });
            }
        }
    }

    if !state.store.delete_node(id)? {
        return Err(NetworkError::not_found(format!("Node {id}")));
    }

    log::info!(
        "Node {} gelöscht ({} Nachbar(n) bereinigt, {} fehlgeschlagen)",
        id,
        report.cleaned.len(),
        report.failed.len()
    );

    if let Err(error) = reload_session(state, node.position) {
        log::warn!(
            "Node {} gelöscht, Neuladen fehlgeschlagen: {} (offene Nachbarn: {:?}, bereinigt: {:?})",
            id,
            error,
            report.failed.iter().map(|f| f.neighbor_id).collect::<Vec<_>>(),
            report.cleaned
        );
        return Err(error);
    }
    Ok(report)
}
