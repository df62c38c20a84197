//! Use-Cases: Datenarten leeren und Mengenübersicht.

use crate::app::AppState;
use crate::error::NetworkResult;
use crate::store::{DataKind, GeometryStore, StoreStats};

/// Leert eine Datenart vollständig.
pub fn clear_data<S: GeometryStore>(state: &mut AppState<S>, kind: DataKind) -> NetworkResult<()> {
    state.store.clear(kind)?;
    log::info!("Datenart {:?} geleert", kind);
    Ok(())
}

/// Mengenübersicht über den Speicher.
pub fn network_stats<S: GeometryStore>(state: &AppState<S>) -> NetworkResult<StoreStats> {
    Ok(state.store.stats()?)
}
