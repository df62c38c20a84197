//! Use-Case: Kante entfernen.

use crate::app::use_cases::neighborhood::reload_session;
use crate::app::AppState;
use crate::core::EdgeKey;
use crate::error::{NetworkError, NetworkResult};
use crate::store::GeometryStore;

/// Entfernt beide gerichteten Kanten eines Paares.
///
/// Eine fehlende Gegenrichtung ist kein Fehler; fehlen beide, ist das ein `NotFound`.
pub fn delete_edge<S: GeometryStore>(state: &mut AppState<S>, key: EdgeKey) -> NetworkResult<()> {
    let (low_id, high_id) = key.endpoints();
    let low = state.store.get_node(low_id)?;
    let high = state.store.get_node(high_id)?;

    let forward = low.as_ref().is_some_and(|n| n.links_to(high_id));
    let backward = high.as_ref().is_some_and(|n| n.links_to(low_id));
    if !forward && !backward {
        log::warn!("Kante {} nicht vorhanden", key);
        return Err(NetworkError::not_found(format!("Kante {key}")));
    }

    let mut fallback = None;
    for (node, target) in [(low, high_id), (high, low_id)] {
        let Some(mut node) = node else {
            continue;
        };
        fallback = Some(node.position);
        if node.unlink(target) {
            state.store.put_node(&node)?;
        }
    }

    log::info!("Kante {} entfernt", key);

    match fallback {
        Some(position) => reload_session(state, position),
        None => Ok(()),
    }
}
