//! Use-Case: Node verschieben.

use glam::DVec2;

use super::helpers::{ensure_finite, load_node};
use crate::app::use_cases::neighborhood::reload_session;
use crate::app::AppState;
use crate::error::NetworkResult;
use crate::store::GeometryStore;

/// Setzt die Position eines Nodes. Die Adjazenz bleibt unverändert.
pub fn move_point<S: GeometryStore>(
    state: &mut AppState<S>,
    id: u64,
    position: DVec2,
) -> NetworkResult<()> {
    ensure_finite(position)?;

    let mut node = load_node(&state.store, id)?;
    node.position = position;
    state.store.put_node(&node)?;

    log::info!(
        "Node {} nach ({:.3}, {:.3}) verschoben",
        id,
        position.x,
        position.y
    );

    reload_session(state, position)
}
