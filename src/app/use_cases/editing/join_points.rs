//! Use-Case: Zwei Nodes bidirektional verbinden.

use super::helpers::load_node;
use crate::app::use_cases::neighborhood::reload_session;
use crate::app::AppState;
use crate::core::EdgeKey;
use crate::error::{NetworkError, NetworkResult};
use crate::store::GeometryStore;

/// Verbindet `a` und `b` in beide Richtungen.
///
/// Existiert bereits eine der beiden gerichteten Kanten, ist das ein `Conflict`.
pub fn join_points<S: GeometryStore>(
    state: &mut AppState<S>,
    a: u64,
    b: u64,
) -> NetworkResult<EdgeKey> {
    let key = EdgeKey::canonical(a, b).inspect_err(|_| {
        log::warn!("Self-Loop nicht erlaubt (Node {})", a);
    })?;

    let mut node_a = load_node(&state.store, a)?;
    let mut node_b = load_node(&state.store, b)?;

    if node_a.links_to(b) || node_b.links_to(a) {
        log::warn!("Verbindung {} existiert bereits", key);
        return Err(NetworkError::Conflict(format!(
            "Nodes {a} und {b} sind bereits verbunden"
        )));
    }

    node_a.link(b);
    node_b.link(a);
    state.store.put_node(&node_a)?;
    state.store.put_node(&node_b)?;

    log::info!("Verbindung {} (bidirektional) erstellt", key);

    reload_session(state, (node_a.position + node_b.position) * 0.5)?;
    Ok(key)
}
