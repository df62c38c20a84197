//! Datei-Import/Export: Netz-Snapshots und Bulk-Import-Datensätze.

pub mod import;
pub mod snapshot;

pub use import::{LineNameRecord, LineRecord, StopRecord};
pub use snapshot::NetworkSnapshot;
