//! Integrationstests für die Editing-Use-Cases:
//! - Fenster laden und Kanten-Ableitung
//! - Create/Move/Delete von Nodes inkl. Nachbar-Bereinigung
//! - Join/DeleteEdge/SplitEdge mit Richtungserhalt
//! - Richtungswechsel von Kanten

use std::collections::HashSet;

use glam::DVec2;
use transit_net_editor::store::{DataKind, SignHit, StoreStats};
use transit_net_editor::{
    AppCommand, AppController, AppState, CommandOutcome, DirectionChange, EdgeDirection, EdgeKey,
    GeometryStore,
    Line, MemoryStore, Midpoint, NetworkError, NetworkNode, ServiceOptions, Sign, SignKey, Stop,
    StoreError,
};

/// Erstellt einen State aus `(id, x, y, adjacency)`-Tupeln.
fn state_with(nodes: &[(u64, f64, f64, &[u64])]) -> AppState {
    let mut store = MemoryStore::new();
    store.load_nodes(nodes.iter().map(|&(id, x, y, adjacency)| {
        NetworkNode::with_adjacency(id, DVec2::new(x, y), adjacency.iter().copied())
    }));
    AppState::with_straight_router(store, ServiceOptions::default())
}

/// Gerichtete Ziele eines Nodes in Speicher-Reihenfolge.
fn adjacency<S: GeometryStore>(state: &AppState<S>, id: u64) -> Vec<u64> {
    state
        .store
        .get_node(id)
        .expect("Speicher lesbar")
        .unwrap_or_else(|| panic!("Node {id} muss existieren"))
        .adjacency
        .into_iter()
        .collect()
}

fn key(a: u64, b: u64) -> EdgeKey {
    EdgeKey::canonical(a, b).expect("gültiges Paar")
}

// ─── Fenster laden ───────────────────────────────────────────────────────────

#[test]
fn test_load_window_merges_reverse_edges() {
    let mut controller = AppController::new();
    let mut state = state_with(&[(1, 0.0, 0.0, &[2]), (2, 0.0, 1.0, &[1])]);

    let outcome = controller
        .handle_command(
            &mut state,
            AppCommand::LoadNeighborhood {
                center: DVec2::new(0.0, 0.5),
            },
        )
        .expect("Fenster ladbar");

    let CommandOutcome::Neighborhood(graph) = outcome else {
        panic!("Neighborhood-Ergebnis erwartet");
    };
    assert_eq!(graph.node_count(), 2);
    assert!(graph.contains_node(1) && graph.contains_node(2));
    assert_eq!(graph.edge_count(), 1);
    let edge = graph.edge(&key(1, 2)).expect("Kante 1_2 erwartet");
    assert_eq!(edge.key.to_string(), "1_2");
    assert_eq!(edge.direction, EdgeDirection::TwoWay);
    assert_eq!(state.session.center, Some(DVec2::new(0.0, 0.5)));
}

#[test]
fn test_window_respects_radius_and_drops_dangling_targets() {
    let mut controller = AppController::new();
    let mut state = state_with(&[
        (1, 0.0, 0.0, &[2, 3]),
        (2, 10.0, 0.0, &[]),
        (3, 5000.0, 0.0, &[1]),
    ]);

    controller
        .handle_command(&mut state, AppCommand::LoadNeighborhood { center: DVec2::ZERO })
        .expect("Fenster ladbar");

    let graph = &state.session.graph;
    assert_eq!(graph.node_count(), 2, "Node 3 liegt außerhalb des Radius");
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.dangling_references(), 1);
    assert_eq!(
        graph.edge_between(1, 2).map(|e| e.direction),
        Some(EdgeDirection::OneWay)
    );
}

#[test]
fn test_window_limit_keeps_nearest_nodes() {
    let mut controller = AppController::new();
    let mut state = state_with(&[
        (1, 0.0, 0.0, &[]),
        (2, 1.0, 0.0, &[]),
        (3, 2.0, 0.0, &[]),
    ]);
    state.options.max_load_points = 2;

    controller
        .handle_command(&mut state, AppCommand::LoadNeighborhood { center: DVec2::ZERO })
        .expect("Fenster ladbar");

    assert_eq!(state.node_count(), 2);
    assert!(!state.session.graph.contains_node(3));
}

#[test]
fn test_fetch_points_in_request_order() {
    let mut controller = AppController::new();
    let mut state = state_with(&[(1, 0.0, 0.0, &[2]), (2, 9000.0, 0.0, &[1]), (3, 5.0, 5.0, &[])]);

    let outcome = controller
        .handle_command(&mut state, AppCommand::FetchPoints { ids: vec![2, 7, 1, 2] })
        .expect("Nodes lesbar");

    let CommandOutcome::Points(nodes) = outcome else {
        panic!("Points erwartet");
    };
    let ids: Vec<u64> = nodes.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![2, 1]);
    assert!(!state.session.is_loaded());
}

// ─── create_point / create_chain ─────────────────────────────────────────────

#[test]
fn test_create_point_with_neighbors_is_one_directional() {
    let mut controller = AppController::new();
    let mut state = state_with(&[(1, 0.0, 0.0, &[]), (2, 10.0, 0.0, &[])]);

    let outcome = controller
        .handle_command(
            &mut state,
            AppCommand::CreatePoint {
                position: DVec2::new(5.0, 5.0),
                neighbors: vec![1, 2, 1],
            },
        )
        .expect("Node anlegbar");

    let CommandOutcome::PointCreated { id } = outcome else {
        panic!("PointCreated erwartet");
    };
    assert_eq!(id, 3);
    assert_eq!(adjacency(&state, id), vec![1, 2], "Duplikate entfallen");
    assert!(adjacency(&state, 1).is_empty(), "keine automatische Rück-Kante");
    assert_eq!(state.edge_count(), 2, "Sitzung wurde neu geladen");
}

#[test]
fn test_create_point_with_unknown_neighbor_fails() {
    let mut controller = AppController::new();
    let mut state = state_with(&[(1, 0.0, 0.0, &[])]);

    let result = controller.handle_command(
        &mut state,
        AppCommand::CreatePoint {
            position: DVec2::ZERO,
            neighbors: vec![42],
        },
    );

    assert!(matches!(result, Err(NetworkError::NotFound(_))));
    assert_eq!(state.store.stats().expect("stats").nodes, 1);
}

#[test]
fn test_create_point_rejects_non_finite_position() {
    let mut controller = AppController::new();
    let mut state = state_with(&[]);

    let result = controller.handle_command(
        &mut state,
        AppCommand::CreatePoint {
            position: DVec2::new(f64::NAN, 0.0),
            neighbors: Vec::new(),
        },
    );
    assert!(matches!(result, Err(NetworkError::Validation(_))));
}

#[test]
fn test_create_chain_links_both_directions() {
    let mut controller = AppController::new();
    let mut state = state_with(&[]);

    let outcome = controller
        .handle_command(
            &mut state,
            AppCommand::CreateChain {
                positions: vec![
                    DVec2::new(0.0, 0.0),
                    DVec2::new(10.0, 0.0),
                    DVec2::new(20.0, 0.0),
                ],
            },
        )
        .expect("Kette anlegbar");

    let CommandOutcome::ChainCreated { ids } = outcome else {
        panic!("ChainCreated erwartet");
    };
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(adjacency(&state, 1), vec![2]);
    assert_eq!(adjacency(&state, 2), vec![1, 3]);
    assert_eq!(adjacency(&state, 3), vec![2]);
    assert!(state
        .session
        .graph
        .edges_iter()
        .all(|edge| edge.direction == EdgeDirection::TwoWay));
    assert_eq!(state.edge_count(), 2);
}

#[test]
fn test_create_chain_rejects_empty_input() {
    let mut controller = AppController::new();
    let mut state = state_with(&[]);

    let result =
        controller.handle_command(&mut state, AppCommand::CreateChain { positions: Vec::new() });
    assert!(matches!(result, Err(NetworkError::Validation(_))));
}

// ─── move_point ──────────────────────────────────────────────────────────────

#[test]
fn test_move_point_keeps_adjacency() {
    let mut controller = AppController::new();
    let mut state = state_with(&[(1, 0.0, 0.0, &[2]), (2, 10.0, 0.0, &[1])]);

    controller
        .handle_command(
            &mut state,
            AppCommand::MovePoint {
                id: 1,
                position: DVec2::new(0.0, 7.5),
            },
        )
        .expect("Node verschiebbar");

    let node = state.store.get_node(1).expect("lesbar").expect("Node 1");
    assert_eq!(node.position, DVec2::new(0.0, 7.5));
    assert_eq!(adjacency(&state, 1), vec![2]);
    let edge = state.session.graph.edge_between(1, 2).expect("Kante 1_2");
    assert_eq!(edge.midpoint, DVec2::new(5.0, 3.75));
}

#[test]
fn test_move_unknown_point_is_not_found() {
    let mut controller = AppController::new();
    let mut state = state_with(&[]);

    let result = controller.handle_command(
        &mut state,
        AppCommand::MovePoint {
            id: 9,
            position: DVec2::ONE,
        },
    );
    assert!(matches!(result, Err(NetworkError::NotFound(_))));
}

// ─── delete_point ────────────────────────────────────────────────────────────

#[test]
fn test_delete_point_scrubs_all_references() {
    let mut controller = AppController::new();
    // 2 ist Mittelknoten: 1↔2 bidirektional, 3→2 Einbahn, 2→4 Einbahn
    let mut state = state_with(&[
        (1, 0.0, 0.0, &[2]),
        (2, 10.0, 0.0, &[1, 4]),
        (3, 10.0, 10.0, &[2, 4]),
        (4, 20.0, 0.0, &[]),
    ]);

    let outcome = controller
        .handle_command(&mut state, AppCommand::DeletePoint { id: 2 })
        .expect("Node löschbar");

    let CommandOutcome::PointDeleted(report) = outcome else {
        panic!("PointDeleted erwartet");
    };
    assert!(report.is_complete());
    let mut cleaned = report.cleaned.clone();
    cleaned.sort_unstable();
    assert_eq!(cleaned, vec![1, 3]);

    assert!(state.store.get_node(2).expect("lesbar").is_none());
    assert!(adjacency(&state, 1).is_empty());
    assert_eq!(adjacency(&state, 3), vec![4]);

    controller
        .handle_command(&mut state, AppCommand::LoadNeighborhood { center: DVec2::ZERO })
        .expect("Fenster ladbar");
    assert!(state.session.graph.incident_edges(2).is_empty());
    assert_eq!(state.edge_count(), 1);
}

#[test]
fn test_delete_point_skips_missing_neighbor() {
    let mut controller = AppController::new();
    // 2 verweist auf den nicht existierenden Node 99
    let mut state = state_with(&[(1, 0.0, 0.0, &[2]), (2, 1.0, 0.0, &[1, 99])]);

    let outcome = controller
        .handle_command(&mut state, AppCommand::DeletePoint { id: 2 })
        .expect("Node löschbar");

    let CommandOutcome::PointDeleted(report) = outcome else {
        panic!("PointDeleted erwartet");
    };
    assert_eq!(report.cleaned, vec![1]);
    assert_eq!(report.skipped, vec![99]);
    assert!(report.failed.is_empty());
}

#[test]
fn test_delete_unknown_point_is_not_found() {
    let mut controller = AppController::new();
    let mut state = state_with(&[(1, 0.0, 0.0, &[])]);

    let result = controller.handle_command(&mut state, AppCommand::DeletePoint { id: 5 });
    assert!(matches!(result, Err(NetworkError::NotFound(_))));
}

/// Speicher, dessen `put_node` für bestimmte Nodes fehlschlägt.
struct FlakyStore {
    inner: MemoryStore,
    failing_writes: HashSet<u64>,
    /// Fensterabfragen schlagen fehl, sobald ein Node gelöscht wurde
    window_fails_after_delete: bool,
    deleted: bool,
}

impl FlakyStore {
    fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            failing_writes: HashSet::new(),
            window_fails_after_delete: false,
            deleted: false,
        }
    }
}

impl GeometryStore for FlakyStore {
    fn get_node(&self, id: u64) -> Result<Option<NetworkNode>, StoreError> {
        self.inner.get_node(id)
    }
    fn insert_node(&mut self, position: DVec2, adjacency: &[u64]) -> Result<u64, StoreError> {
        self.inner.insert_node(position, adjacency)
    }
    fn put_node(&mut self, node: &NetworkNode) -> Result<(), StoreError> {
        if self.failing_writes.contains(&node.id) {
            return Err(StoreError::new("put_node", format!("Node {} gesperrt", node.id)));
        }
        self.inner.put_node(node)
    }
    fn delete_node(&mut self, id: u64) -> Result<bool, StoreError> {
        self.deleted = true;
        self.inner.delete_node(id)
    }
    fn nodes_in_window(
        &self,
        center: DVec2,
        radius: f64,
        limit: usize,
    ) -> Result<Vec<NetworkNode>, StoreError> {
        if self.window_fails_after_delete && self.deleted {
            return Err(StoreError::new("nodes_in_window", "Verbindung verloren"));
        }
        self.inner.nodes_in_window(center, radius, limit)
    }
    fn get_stop(&self, code: u32) -> Result<Option<Stop>, StoreError> {
        self.inner.get_stop(code)
    }
    fn put_stop(&mut self, stop: Stop) -> Result<(), StoreError> {
        self.inner.put_stop(stop)
    }
    fn get_sign(&self, key: &SignKey) -> Result<Option<Sign>, StoreError> {
        self.inner.get_sign(key)
    }
    fn signs_in_radius(
        &self,
        center: DVec2,
        radius: f64,
        limit: usize,
    ) -> Result<Vec<SignHit>, StoreError> {
        self.inner.signs_in_radius(center, radius, limit)
    }
    fn get_midpoint(&self, from: &SignKey, to: &SignKey) -> Result<Option<Midpoint>, StoreError> {
        self.inner.get_midpoint(from, to)
    }
    fn put_midpoint(&mut self, midpoint: Midpoint) -> Result<(), StoreError> {
        self.inner.put_midpoint(midpoint)
    }
    fn get_line(&self, code: u32) -> Result<Option<Line>, StoreError> {
        self.inner.get_line(code)
    }
    fn put_line(&mut self, line: Line) -> Result<(), StoreError> {
        self.inner.put_line(line)
    }
    fn lines(&self) -> Result<Vec<Line>, StoreError> {
        self.inner.lines()
    }
    fn put_line_name(&mut self, code: u32, name: String) -> Result<(), StoreError> {
        self.inner.put_line_name(code, name)
    }
    fn clear(&mut self, kind: DataKind) -> Result<(), StoreError> {
        self.inner.clear(kind)
    }
    fn stats(&self) -> Result<StoreStats, StoreError> {
        self.inner.stats()
    }
}

#[test]
fn test_delete_point_continues_after_failed_cleanup() {
    let mut inner = MemoryStore::new();
    inner.load_nodes([
        NetworkNode::with_adjacency(1, DVec2::new(0.0, 0.0), [2]),
        NetworkNode::with_adjacency(2, DVec2::new(1.0, 0.0), [1, 3]),
        NetworkNode::with_adjacency(3, DVec2::new(2.0, 0.0), [2]),
    ]);
    let mut store = FlakyStore::new(inner);
    store.failing_writes.insert(1);
    let mut state = AppState::with_straight_router(store, ServiceOptions::default());
    let mut controller = AppController::new();

    let outcome = controller
        .handle_command(&mut state, AppCommand::DeletePoint { id: 2 })
        .expect("Teilfehler brechen nicht ab");

    let CommandOutcome::PointDeleted(report) = outcome else {
        panic!("PointDeleted erwartet");
    };
    assert!(!report.is_complete());
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].neighbor_id, 1);
    assert_eq!(report.failed[0].error.operation, "put_node");
    assert_eq!(report.cleaned, vec![3]);

    assert!(state.store.get_node(2).expect("lesbar").is_none());
    assert_eq!(adjacency(&state, 1), vec![2], "verwaiste Referenz bleibt zurück");
    // Die verwaiste Referenz wird beim Laden stillschweigend übergangen
    assert_eq!(state.session.graph.dangling_references(), 1);
    assert_eq!(state.edge_count(), 0);
}

#[test]
fn test_delete_point_reports_error_when_reload_fails() {
    let mut inner = MemoryStore::new();
    inner.load_nodes([
        NetworkNode::with_adjacency(1, DVec2::new(0.0, 0.0), [2]),
        NetworkNode::with_adjacency(2, DVec2::new(1.0, 0.0), [1]),
    ]);
    let mut store = FlakyStore::new(inner);
    store.window_fails_after_delete = true;
    let mut state = AppState::with_straight_router(store, ServiceOptions::default());
    let mut controller = AppController::new();

    let result = controller.handle_command(&mut state, AppCommand::DeletePoint { id: 2 });

    assert!(matches!(result, Err(NetworkError::Store(ref e)) if e.operation == "nodes_in_window"));
    // Der Node ist trotz Fehler gelöscht und der Nachbar bereinigt
    assert!(state.store.get_node(2).expect("lesbar").is_none());
    assert!(adjacency(&state, 1).is_empty());
}

#[test]
fn test_stale_reference_never_reattaches_to_new_point() {
    let mut controller = AppController::new();
    // Node 1 liegt außerhalb des Lösch-Fensters und verweist einseitig auf 2
    let mut state = state_with(&[(1, 5000.0, 0.0, &[2]), (2, 0.0, 0.0, &[])]);

    let outcome = controller
        .handle_command(&mut state, AppCommand::DeletePoint { id: 2 })
        .expect("Node löschbar");
    let CommandOutcome::PointDeleted(report) = outcome else {
        panic!("PointDeleted erwartet");
    };
    assert!(report.cleaned.is_empty());
    assert_eq!(adjacency(&state, 1), vec![2]);

    let created = controller
        .handle_command(
            &mut state,
            AppCommand::CreatePoint {
                position: DVec2::new(4990.0, 0.0),
                neighbors: vec![],
            },
        )
        .expect("Node anlegbar");
    let CommandOutcome::PointCreated { id } = created else {
        panic!("PointCreated erwartet");
    };
    assert_eq!(id, 3, "gelöschte ID wird nicht wiederverwendet");

    controller
        .handle_command(
            &mut state,
            AppCommand::LoadNeighborhood {
                center: DVec2::new(5000.0, 0.0),
            },
        )
        .expect("Fenster ladbar");
    assert_eq!(state.node_count(), 2);
    assert_eq!(state.edge_count(), 0);
    assert_eq!(state.session.graph.dangling_references(), 1);
}

#[test]
fn test_many_points_at_one_position() {
    let mut controller = AppController::new();
    let mut state = AppState::in_memory();
    let position = DVec2::new(14.42, 50.08);

    for _ in 0..40 {
        controller
            .handle_command(
                &mut state,
                AppCommand::CreatePoint {
                    position,
                    neighbors: vec![],
                },
            )
            .expect("Node anlegbar");
    }

    controller
        .handle_command(&mut state, AppCommand::LoadNeighborhood { center: position })
        .expect("Fenster ladbar");
    assert_eq!(state.node_count(), 40);
}

// ─── join_points ─────────────────────────────────────────────────────────────

#[test]
fn test_join_points_twice_conflicts() {
    let mut controller = AppController::new();
    let mut state = state_with(&[(1, 0.0, 0.0, &[]), (2, 10.0, 0.0, &[])]);

    let outcome = controller
        .handle_command(&mut state, AppCommand::JoinPoints { a: 2, b: 1 })
        .expect("Nodes verbindbar");
    assert!(matches!(outcome, CommandOutcome::PointsJoined { key: k } if k == key(1, 2)));
    assert_eq!(adjacency(&state, 1), vec![2]);
    assert_eq!(adjacency(&state, 2), vec![1]);
    assert_eq!(
        state.session.graph.edge_between(1, 2).map(|e| e.direction),
        Some(EdgeDirection::TwoWay)
    );

    let again = controller.handle_command(&mut state, AppCommand::JoinPoints { a: 1, b: 2 });
    assert!(matches!(again, Err(NetworkError::Conflict(_))));
}

#[test]
fn test_join_points_conflicts_on_existing_one_way() {
    let mut controller = AppController::new();
    let mut state = state_with(&[(1, 0.0, 0.0, &[]), (2, 10.0, 0.0, &[1])]);

    let result = controller.handle_command(&mut state, AppCommand::JoinPoints { a: 1, b: 2 });
    assert!(matches!(result, Err(NetworkError::Conflict(_))));
    assert!(adjacency(&state, 1).is_empty(), "nichts geschrieben");
}

#[test]
fn test_join_points_validates_input() {
    let mut controller = AppController::new();
    let mut state = state_with(&[(1, 0.0, 0.0, &[])]);

    let self_loop = controller.handle_command(&mut state, AppCommand::JoinPoints { a: 1, b: 1 });
    assert!(matches!(self_loop, Err(NetworkError::Validation(_))));

    let missing = controller.handle_command(&mut state, AppCommand::JoinPoints { a: 1, b: 7 });
    assert!(matches!(missing, Err(NetworkError::NotFound(_))));
}

// ─── delete_edge ─────────────────────────────────────────────────────────────

#[test]
fn test_delete_edge_removes_both_directions() {
    let mut controller = AppController::new();
    let mut state = state_with(&[(1, 0.0, 0.0, &[2, 3]), (2, 10.0, 0.0, &[1]), (3, 0.0, 10.0, &[])]);

    controller
        .handle_command(&mut state, AppCommand::DeleteEdge { key: key(2, 1) })
        .expect("Kante entfernbar");

    assert_eq!(adjacency(&state, 1), vec![3]);
    assert!(adjacency(&state, 2).is_empty());
    assert!(state.session.graph.edge_between(1, 2).is_none());

    let again = controller.handle_command(&mut state, AppCommand::DeleteEdge { key: key(1, 2) });
    assert!(matches!(again, Err(NetworkError::NotFound(_))));
}

#[test]
fn test_delete_one_way_edge_ignores_missing_reverse() {
    let mut controller = AppController::new();
    let mut state = state_with(&[(4, 0.0, 0.0, &[]), (8, 10.0, 0.0, &[4])]);

    controller
        .handle_command(&mut state, AppCommand::DeleteEdge { key: key(4, 8) })
        .expect("Einbahn-Kante entfernbar");
    assert!(adjacency(&state, 8).is_empty());
}

// ─── split_edge ──────────────────────────────────────────────────────────────

#[test]
fn test_split_one_way_edge_keeps_direction() {
    let mut controller = AppController::new();
    let mut state = state_with(&[(1, 0.0, 0.0, &[2]), (2, 10.0, 0.0, &[])]);

    let outcome = controller
        .handle_command(
            &mut state,
            AppCommand::SplitEdge {
                key: key(1, 2),
                position: Some(DVec2::new(4.0, 1.0)),
            },
        )
        .expect("Kante teilbar");

    let CommandOutcome::EdgeSplit { id: n } = outcome else {
        panic!("EdgeSplit erwartet");
    };
    assert_eq!(adjacency(&state, 1), vec![n]);
    assert_eq!(adjacency(&state, n), vec![2]);
    assert!(adjacency(&state, 2).is_empty());
    let node = state.store.get_node(n).expect("lesbar").expect("neuer Node");
    assert_eq!(node.position, DVec2::new(4.0, 1.0));
}

#[test]
fn test_split_one_way_edge_from_higher_id() {
    let mut controller = AppController::new();
    let mut state = state_with(&[(1, 0.0, 0.0, &[]), (2, 10.0, 0.0, &[1])]);

    let outcome = controller
        .handle_command(
            &mut state,
            AppCommand::SplitEdge {
                key: key(1, 2),
                position: None,
            },
        )
        .expect("Kante teilbar");

    let CommandOutcome::EdgeSplit { id: n } = outcome else {
        panic!("EdgeSplit erwartet");
    };
    assert_eq!(adjacency(&state, 2), vec![n]);
    assert_eq!(adjacency(&state, n), vec![1]);
    assert!(adjacency(&state, 1).is_empty());
    let node = state.store.get_node(n).expect("lesbar").expect("neuer Node");
    assert_eq!(node.position, DVec2::new(5.0, 0.0), "Mittelpunkt als Standard");
}

#[test]
fn test_split_two_way_edge_stays_two_way() {
    let mut controller = AppController::new();
    let mut state = state_with(&[
        (1, 0.0, 0.0, &[5, 2, 6]),
        (2, 10.0, 0.0, &[1]),
        (5, 0.0, 5.0, &[]),
        (6, 0.0, -5.0, &[]),
    ]);

    let outcome = controller
        .handle_command(
            &mut state,
            AppCommand::SplitEdge {
                key: key(1, 2),
                position: None,
            },
        )
        .expect("Kante teilbar");

    let CommandOutcome::EdgeSplit { id: n } = outcome else {
        panic!("EdgeSplit erwartet");
    };
    assert_eq!(adjacency(&state, 1), vec![5, n, 6], "Position in der Adjazenz bleibt");
    assert_eq!(adjacency(&state, 2), vec![n]);
    let mut new_targets = adjacency(&state, n);
    new_targets.sort_unstable();
    assert_eq!(new_targets, vec![1, 2]);

    let graph = &state.session.graph;
    assert!(graph.edge_between(1, 2).is_none());
    assert_eq!(
        graph.edge_between(1, n).map(|e| e.direction),
        Some(EdgeDirection::TwoWay)
    );
    assert_eq!(
        graph.edge_between(n, 2).map(|e| e.direction),
        Some(EdgeDirection::TwoWay)
    );
}

#[test]
fn test_split_missing_edge_is_not_found() {
    let mut controller = AppController::new();
    let mut state = state_with(&[(1, 0.0, 0.0, &[]), (2, 10.0, 0.0, &[])]);

    let result = controller.handle_command(
        &mut state,
        AppCommand::SplitEdge {
            key: key(1, 2),
            position: None,
        },
    );
    assert!(matches!(result, Err(NetworkError::NotFound(_))));
    assert_eq!(state.store.stats().expect("stats").nodes, 2);
}

// ─── change_direction ────────────────────────────────────────────────────────

fn change(
    state: &mut AppState,
    key: EdgeKey,
    change: DirectionChange,
) -> Result<CommandOutcome, NetworkError> {
    AppController::new().handle_command(state, AppCommand::ChangeDirection { key, change })
}

#[test]
fn test_reverse_one_way_edge() {
    let mut state = state_with(&[(1, 0.0, 0.0, &[2, 3]), (2, 10.0, 0.0, &[]), (3, 0.0, 10.0, &[])]);

    let outcome = change(&mut state, key(1, 2), DirectionChange::Reverse).expect("umkehrbar");

    assert!(matches!(
        outcome,
        CommandOutcome::DirectionChanged {
            low_to_high: false,
            high_to_low: true,
            ..
        }
    ));
    assert_eq!(adjacency(&state, 1), vec![3]);
    assert_eq!(adjacency(&state, 2), vec![1]);
    let edge = state.session.graph.edge_between(1, 2).expect("Kante 1_2 geladen");
    assert_eq!(edge.direction, EdgeDirection::OneWay);
    assert_eq!((edge.from_id, edge.to_id), (2, 1));
}

#[test]
fn test_one_way_edge_becomes_two_way() {
    let mut state = state_with(&[(1, 0.0, 0.0, &[]), (2, 10.0, 0.0, &[1])]);

    change(&mut state, key(1, 2), DirectionChange::TwoWay).expect("änderbar");

    assert_eq!(adjacency(&state, 1), vec![2]);
    assert_eq!(adjacency(&state, 2), vec![1]);
    assert_eq!(
        state.session.graph.edge_between(1, 2).map(|e| e.direction),
        Some(EdgeDirection::TwoWay)
    );
}

#[test]
fn test_two_way_edge_becomes_one_way() {
    let mut state = state_with(&[(1, 0.0, 0.0, &[2]), (2, 10.0, 0.0, &[1])]);

    change(&mut state, key(1, 2), DirectionChange::HighToLow).expect("änderbar");

    assert!(adjacency(&state, 1).is_empty());
    assert_eq!(adjacency(&state, 2), vec![1]);
    let edge = state.session.graph.edge_between(1, 2).expect("Kante 1_2 geladen");
    assert_eq!(edge.direction, EdgeDirection::OneWay);
    assert_eq!((edge.from_id, edge.to_id), (2, 1));
}

#[test]
fn test_change_direction_rejects_missing_and_two_way_reverse() {
    let mut state = state_with(&[(1, 0.0, 0.0, &[2]), (2, 10.0, 0.0, &[1]), (3, 20.0, 0.0, &[])]);

    let missing = change(&mut state, key(2, 3), DirectionChange::TwoWay);
    assert!(matches!(missing, Err(NetworkError::NotFound(_))));

    let reverse = change(&mut state, key(1, 2), DirectionChange::Reverse);
    assert!(matches!(reverse, Err(NetworkError::Conflict(_))));
    assert_eq!(adjacency(&state, 1), vec![2]);
    assert_eq!(adjacency(&state, 2), vec![1]);
}
