//! Use-Case: Node auf einer bestehenden Kante einfügen.

use glam::DVec2;

use super::helpers::{ensure_finite, load_node};
use crate::app::use_cases::neighborhood::reload_session;
use crate::app::AppState;
use crate::core::EdgeKey;
use crate::error::{NetworkError, NetworkResult};
use crate::store::GeometryStore;

/// Teilt die Kante `key` an `position` (None = Mittelpunkt der Endpunkte).
///
/// Die Fahrtrichtung wird aus dem Speicher gelesen: eine Einbahn-Kante
/// from → to wird zu from → neu → to, eine bidirektionale Kante bleibt in
/// beiden Hälften bidirektional. Die Reihenfolge der übrigen Adjazenz bleibt erhalten.
pub fn split_edge<S: GeometryStore>(
    state: &mut AppState<S>,
    key: EdgeKey,
    position: Option<DVec2>,
) -> NetworkResult<u64> {
    let (low_id, high_id) = key.endpoints();
    let low = load_node(&state.store, low_id)?;
    let high = load_node(&state.store, high_id)?;

    let forward = low.links_to(high_id);
    let backward = high.links_to(low_id);
    let (mut from, mut to) = match (forward, backward) {
        (true, _) => (low, high),
        (false, true) => (high, low),
        (false, false) => {
            log::warn!("Kante {} nicht vorhanden, Teilen nicht möglich", key);
            return Err(NetworkError::not_found(format!("Kante {key}")));
        }
    };
    let two_way = forward && backward;

    let position = position.unwrap_or((from.position + to.position) * 0.5);
    ensure_finite(position)?;

    let adjacency: Vec<u64> = if two_way {
        vec![to.id, from.id]
    } else {
        vec![to.id]
    };
    let new_id = state.store.insert_node(position, &adjacency)?;

    from.replace_link(to.id, new_id);
    state.store.put_node(&from)?;
    if two_way {
        to.replace_link(from.id, new_id);
        state.store.put_node(&to)?;
    }

    log::info!(
        "Kante {} bei Node {} geteilt ({})",
        key,
        new_id,
        if two_way { "bidirektional" } else { "Einbahn" }
    );

    reload_session(state, position)?;
    Ok(new_id)
}
