//! Use-Case-Funktionen für Node/Kanten-Editing.
//!
//! Aufgeteilt nach Operation:
//! - `create_point` — Neuen Node anlegen (einzeln oder als Kette)
//! - `move_point` — Node verschieben
//! - `delete_point` — Node löschen inkl. Nachbar-Bereinigung
//! - `join_points` — Zwei Nodes bidirektional verbinden
//! - `delete_edge` — Kante entfernen
//! - `change_direction` — Richtung einer Kante ändern
//! - `split_edge` — Node auf einer Kante einfügen
//!
//! Jede strukturelle Änderung lädt das Sitzungs-Fenster anschließend neu.

mod change_direction;
mod create_point;
mod delete_edge;
mod delete_point;
mod helpers;
mod join_points;
mod move_point;
mod split_edge;

pub use change_direction::{change_direction, DirectionChange};
pub use create_point::{create_chain, create_point};
pub use delete_edge::delete_edge;
pub use delete_point::{delete_point, CleanupFailure, DeleteReport};
pub use join_points::join_points;
pub use move_point::move_point;
pub use split_edge::split_edge;
