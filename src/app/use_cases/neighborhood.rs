//! Use-Case: Nachbarschafts-Fenster laden, nach Änderungen neu laden und Nodes gezielt lesen.

use glam::DVec2;
use indexmap::IndexSet;

use crate::app::AppState;
use crate::core::{NetworkGraph, NetworkNode};
use crate::error::{NetworkError, NetworkResult};
use crate::store::GeometryStore;

/// Liest das Fenster um `center` aus dem Speicher und baut die Netz-Sicht auf.
///
/// Liest nur; die Sitzung bleibt unverändert.
pub fn fetch_neighborhood<S: GeometryStore + ?Sized>(
    store: &S,
    center: DVec2,
    radius: f64,
    limit: usize,
) -> NetworkResult<NetworkGraph> {
    let nodes = store.nodes_in_window(center, radius, limit)?;
    Ok(NetworkGraph::build(nodes))
}

/// Lädt das Fenster um `center` und ersetzt die Sitzung.
pub fn load_neighborhood<S: GeometryStore>(
    state: &mut AppState<S>,
    center: DVec2,
) -> NetworkResult<&NetworkGraph> {
    if !center.is_finite() {
        return Err(NetworkError::validation(format!(
            "ungültiges Fenster-Zentrum {center:?}"
        )));
    }

    let graph = fetch_neighborhood(
        &state.store,
        center,
        state.options.neighborhood_radius,
        state.options.max_load_points,
    )?;

    log::debug!(
        "Fenster um ({:.3}, {:.3}) geladen: {} Nodes, {} Kanten",
        center.x,
        center.y,
        graph.node_count(),
        graph.edge_count()
    );

    state.session.replace(center, graph);
    Ok(&state.session.graph)
}

/// Lädt das Sitzungs-Fenster nach einer Änderung komplett neu.
///
/// Ohne bisheriges Fenster wird um `fallback` (die geänderte Stelle) geladen.
pub fn reload_session<S: GeometryStore>(
    state: &mut AppState<S>,
    fallback: DVec2,
) -> NetworkResult<()> {
    let center = state.session.center.unwrap_or(fallback);
    load_neighborhood(state, center)?;
    Ok(())
}

/// Liest Nodes gezielt nach ID, in Anfrage-Reihenfolge und ohne Duplikate.
///
/// Unbekannte IDs werden übersprungen; die Sitzung bleibt unverändert.
pub fn fetch_points<S: GeometryStore>(
    state: &AppState<S>,
    ids: &[u64],
) -> NetworkResult<Vec<NetworkNode>> {
    let ids: IndexSet<u64> = ids.iter().copied().collect();
    let mut nodes = Vec::with_capacity(ids.len());
    for id in ids {
        match state.store.get_node(id)? {
            Some(node) => nodes.push(node),
            None => log::debug!("Node {} nicht vorhanden, übersprungen", id),
        }
    }
    Ok(nodes)
}
