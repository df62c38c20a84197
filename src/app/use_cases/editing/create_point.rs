//! Use-Case: Neue Nodes anlegen.

use glam::DVec2;
use indexmap::IndexSet;

use super::helpers::{ensure_finite, load_node};
use crate::app::use_cases::neighborhood::reload_session;
use crate::app::AppState;
use crate::error::{NetworkError, NetworkResult};
use crate::store::GeometryStore;

/// Legt einen neuen Node mit gerichteten Kanten zu `neighbors` an.
///
/// Die Nachbarn erhalten keine Rück-Kante; dafür ist der Aufrufer zuständig
/// (z.B. über `join_points`). Jeder Nachbar muss existieren.
pub fn create_point<S: GeometryStore>(
    state: &mut AppState<S>,
    position: DVec2,
    neighbors: &[u64],
) -> NetworkResult<u64> {
    ensure_finite(position)?;

    let targets: IndexSet<u64> = neighbors.iter().copied().collect();
    for &target in &targets {
        if state.store.get_node(target)?.is_none() {
            log::warn!("Node nicht angelegt: Nachbar {} existiert nicht", target);
            return Err(NetworkError::not_found(format!("Nachbar-Node {target}")));
        }
    }

    let adjacency: Vec<u64> = targets.into_iter().collect();
    let id = state.store.insert_node(position, &adjacency)?;

    log::info!(
        "Node {} bei ({:.3}, {:.3}) mit {} Nachbar(n) angelegt",
        id,
        position.x,
        position.y,
        adjacency.len()
    );

    reload_session(state, position)?;
    Ok(id)
}

/// Legt Nodes in Reihenfolge an und verbindet jeden bidirektional mit seinem Vorgänger.
pub fn create_chain<S: GeometryStore>(
    state: &mut AppState<S>,
    positions: &[DVec2],
) -> NetworkResult<Vec<u64>> {
    let Some(&first) = positions.first() else {
        return Err(NetworkError::validation("leere Punkt-Kette"));
    };
    for &position in positions {
        ensure_finite(position)?;
    }

    let mut ids: Vec<u64> = Vec::with_capacity(positions.len());
    for &position in positions {
        let id = match ids.last().copied() {
            None => state.store.insert_node(position, &[])?,
            Some(previous) => {
                let id = state.store.insert_node(position, &[previous])?;
                let mut predecessor = load_node(&state.store, previous)?;
                predecessor.link(id);
                state.store.put_node(&predecessor)?;
                id
            }
        };
        ids.push(id);
    }

    log::info!("Kette mit {} Node(s) angelegt", ids.len());

    reload_session(state, first)?;
    Ok(ids)
}
