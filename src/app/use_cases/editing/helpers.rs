//! Gemeinsame Hilfsfunktionen der Editier-Use-Cases.

use glam::DVec2;

use crate::core::NetworkNode;
use crate::error::{NetworkError, NetworkResult};
use crate::store::GeometryStore;

/// Liest einen Node; fehlt er, ist das ein `NotFound`.
pub(super) fn load_node<S: GeometryStore + ?Sized>(
    store: &S,
    id: u64,
) -> NetworkResult<NetworkNode> {
    store
        .get_node(id)?
        .ok_or_else(|| NetworkError::not_found(format!("Node {id}")))
}

/// Lehnt nicht-endliche Positionen ab.
pub(super) fn ensure_finite(position: DVec2) -> NetworkResult<()> {
    if position.is_finite() {
        Ok(())
    } else {
        Err(NetworkError::validation(format!(
            "ungültige Position {position:?}"
        )))
    }
}
