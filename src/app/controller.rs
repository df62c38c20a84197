//! Application Controller für zentrale Command-Verarbeitung.

use super::use_cases::{editing, lines, maintenance, neighborhood, routing, stops};
use super::{AppCommand, AppState, CommandOutcome};
use crate::error::NetworkResult;
use crate::store::GeometryStore;

/// Orchestriert Commands und Use-Cases auf den AppState.
#[derive(Debug, Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Führt einen Command auf dem AppState aus und liefert sein Ergebnis.
    pub fn handle_command<S: GeometryStore>(
        &mut self,
        state: &mut AppState<S>,
        command: AppCommand,
    ) -> NetworkResult<CommandOutcome> {
        state.command_log.record(&command);

        let outcome = match command {
            // === Editieren ===
            AppCommand::LoadNeighborhood { center } => {
                let graph = neighborhood::load_neighborhood(state, center)?;
                CommandOutcome::Neighborhood(graph.clone())
            }
            AppCommand::FetchPoints { ids } => {
                CommandOutcome::Points(neighborhood::fetch_points(state, &ids)?)
            }
            AppCommand::CreatePoint {
                position,
                neighbors,
            } => CommandOutcome::PointCreated {
                id: editing::create_point(state, position, &neighbors)?,
            },
            AppCommand::CreateChain { positions } => CommandOutcome::ChainCreated {
                ids: editing::create_chain(state, &positions)?,
            },
            AppCommand::MovePoint { id, position } => {
                editing::move_point(state, id, position)?;
                CommandOutcome::PointMoved { id }
            }
            AppCommand::DeletePoint { id } => {
                CommandOutcome::PointDeleted(editing::delete_point(state, id)?)
            }
            AppCommand::JoinPoints { a, b } => CommandOutcome::PointsJoined {
                key: editing::join_points(state, a, b)?,
            },
            AppCommand::DeleteEdge { key } => {
                editing::delete_edge(state, key)?;
                CommandOutcome::EdgeDeleted { key }
            }
            AppCommand::SplitEdge { key, position } => CommandOutcome::EdgeSplit {
                id: editing::split_edge(state, key, position)?,
            },

            AppCommand::ChangeDirection { key, change } => {
                let (low_to_high, high_to_low) = editing::change_direction(state, key, change)?;
                CommandOutcome::DirectionChanged {
                    key,
                    low_to_high,
                    high_to_low,
                }
            }

            // === Routing ===
            AppCommand::ResolveLineRoute { code, direction } => {
                CommandOutcome::Route(routing::resolve_line_route(state, code, direction)?)
            }
            AppCommand::ResolveAdHocRoute { tokens, layer } => {
                CommandOutcome::Route(routing::resolve_ad_hoc_route(state, &tokens, layer)?)
            }

            // === Kataloge & Wartung ===
            AppCommand::ListLines => CommandOutcome::Lines(lines::list_lines(state)?),
            AppCommand::StopsInRadius { center } => {
                CommandOutcome::Stops(stops::stops_in_radius(state, center)?)
            }
            AppCommand::ImportStops { records } => CommandOutcome::Imported {
                count: stops::import_stops(state, records)?,
            },
            AppCommand::ImportLines { records } => CommandOutcome::Imported {
                count: lines::import_lines(state, records)?,
            },
            AppCommand::ImportLineNames { records } => CommandOutcome::Imported {
                count: lines::import_line_names(state, records)?,
            },
            AppCommand::ClearData { kind } => {
                maintenance::clear_data(state, kind)?;
                CommandOutcome::Cleared { kind }
            }
            AppCommand::NetworkStats => {
                CommandOutcome::Stats(maintenance::network_stats(state)?)
            }
        };

        Ok(outcome)
    }
}
