//! Transit Network Editor (CLI).
//!
//! Kommandozeilen-Frontend für Netz-Editing, Routen-Auflösung und Datenimporte.
//! Das Netz liegt als JSON-Snapshot vor und wird nach ändernden Commands zurückgeschrieben.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use glam::DVec2;
use serde::de::DeserializeOwned;
use transit_net_editor::{
    AppCommand, AppController, AppState, DataKind, DirectionChange, EdgeKey, LineDirection, MemoryStore,
    NetworkSnapshot, ServiceOptions, TransportLayer, WaypointToken,
};

/// Editor für Verkehrsnetze: Wegpunkte, Kanten, Haltestellen und Linien
#[derive(Parser, Debug)]
#[command(name = "transit-net-editor")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Netz-Datei (JSON-Snapshot); fehlt sie, wird mit leerem Netz begonnen
    #[arg(long, global = true, default_value = "network.json")]
    network: PathBuf,

    /// Optionen-Datei (TOML); Standard: neben der Binary
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug-Logging aktivieren
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

/// Verfügbare Commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Nachbarschafts-Fenster um einen Punkt laden
    Neighborhood {
        /// Zentrum als `x,y`
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        center: DVec2,
    },
    /// Wegpunkte nach ID lesen
    Points {
        /// Node-IDs
        #[arg(required = true)]
        ids: Vec<u64>,
    },
    /// Neuen Wegpunkt anlegen
    CreatePoint {
        /// Position als `x,y`
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        position: DVec2,
        /// Nachbar-IDs für ausgehende Kanten
        #[arg(long = "neighbor", value_name = "ID")]
        neighbors: Vec<u64>,
    },
    /// Wegpunkte als bidirektionale Kette anlegen
    CreateChain {
        /// Positionen als `x,y` in Reihenfolge
        #[arg(value_parser = parse_point, allow_hyphen_values = true, required = true)]
        positions: Vec<DVec2>,
    },
    /// Wegpunkt verschieben
    MovePoint {
        /// Node-ID
        id: u64,
        /// Neue Position als `x,y`
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        position: DVec2,
    },
    /// Wegpunkt löschen
    DeletePoint {
        /// Node-ID
        id: u64,
    },
    /// Zwei Wegpunkte bidirektional verbinden
    Join {
        /// Erster Node
        a: u64,
        /// Zweiter Node
        b: u64,
    },
    /// Kante entfernen
    DeleteEdge {
        /// Kanten-Schlüssel `a_b`
        key: EdgeKey,
    },
    /// Wegpunkt auf einer Kante einfügen
    SplitEdge {
        /// Kanten-Schlüssel `a_b`
        key: EdgeKey,
        /// Position als `x,y` (Standard: Mittelpunkt)
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        at: Option<DVec2>,
    },
    /// Richtung einer Kante ändern
    ChangeDirection {
        /// Kanten-Schlüssel `a_b`
        key: EdgeKey,
        /// `low_to_high`, `high_to_low`, `two_way` oder `reverse`
        change: DirectionChange,
    },
    /// Route einer gespeicherten Linie
    LineRoute {
        /// Linien-Code
        code: u32,
        /// Fahrtrichtung (`a` oder `b`)
        direction: LineDirection,
    },
    /// Route aus einer freien Token-Liste
    Route {
        /// Verkehrsart (`rail`, `road`, `tram`)
        #[arg(long)]
        layer: TransportLayer,
        /// Kommagetrennte Tokens `stopCode_subCode[_qualifier]`
        tokens: String,
    },
    /// Linien-Übersicht
    Lines,
    /// Haltestellen-Signs im Umkreis
    StopsNear {
        /// Suchpunkt als `x,y`
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        center: DVec2,
    },
    /// Haltestellen aus JSON importieren
    ImportStops {
        /// JSON-Datei mit `{code, name, signs}`-Datensätzen
        file: PathBuf,
    },
    /// Linien aus JSON importieren
    ImportLines {
        /// JSON-Datei mit `{lc, type, routeA, routeB}`-Datensätzen
        file: PathBuf,
    },
    /// Linien-Namen aus JSON importieren
    ImportLineNames {
        /// JSON-Datei mit `{lc, lName}`-Datensätzen
        file: PathBuf,
    },
    /// Eine Datenart leeren (`stops`, `lines`, `lineCodes`, `midpoints`)
    Clear {
        /// Datenart
        kind: DataKind,
    },
    /// Mengenübersicht
    Stats,
    /// Aktuelle Optionen in die Optionen-Datei schreiben
    WriteConfig,
}

/// Parst eine Position `x,y`.
fn parse_point(raw: &str) -> Result<DVec2, String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("'{raw}' ist nicht 'x,y'"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("x in '{raw}': {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("y in '{raw}': {e}"))?;
    Ok(DVec2::new(x, y))
}

/// Liest eine JSON-Datei mit Import-Datensätzen.
fn read_records<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Import-Datei nicht lesbar: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Import-Datei fehlerhaft: {}", path.display()))
}

/// Lädt das Netz oder beginnt leer, wenn die Datei fehlt.
fn load_store(path: &Path) -> anyhow::Result<MemoryStore> {
    if !path.exists() {
        log::info!("Keine Netz-Datei unter {}, beginne leer", path.display());
        return Ok(MemoryStore::new());
    }
    NetworkSnapshot::load_from_file(path)?.into_store()
}

impl Command {
    /// Übersetzt den CLI-Aufruf in einen AppCommand (None = reiner Options-Command).
    fn into_app_command(self) -> anyhow::Result<Option<AppCommand>> {
        let command = match self {
            Self::Neighborhood { center } => AppCommand::LoadNeighborhood { center },
            Self::Points { ids } => AppCommand::FetchPoints { ids },
            Self::CreatePoint {
                position,
                neighbors,
            } => AppCommand::CreatePoint {
                position,
                neighbors,
            },
            Self::CreateChain { positions } => AppCommand::CreateChain { positions },
            Self::MovePoint { id, position } => AppCommand::MovePoint { id, position },
            Self::DeletePoint { id } => AppCommand::DeletePoint { id },
            Self::Join { a, b } => AppCommand::JoinPoints { a, b },
            Self::DeleteEdge { key } => AppCommand::DeleteEdge { key },
            Self::SplitEdge { key, at } => AppCommand::SplitEdge { key, position: at },
            Self::ChangeDirection { key, change } => AppCommand::ChangeDirection { key, change },
            Self::LineRoute { code, direction } => {
                AppCommand::ResolveLineRoute { code, direction }
            }
            Self::Route { layer, tokens } => AppCommand::ResolveAdHocRoute {
                tokens: WaypointToken::parse_list(&tokens)?,
                layer,
            },
            Self::Lines => AppCommand::ListLines,
            Self::StopsNear { center } => AppCommand::StopsInRadius { center },
            Self::ImportStops { file } => AppCommand::ImportStops {
                records: read_records(&file)?,
            },
            Self::ImportLines { file } => AppCommand::ImportLines {
                records: read_records(&file)?,
            },
            Self::ImportLineNames { file } => AppCommand::ImportLineNames {
                records: read_records(&file)?,
            },
            Self::Clear { kind } => AppCommand::ClearData { kind },
            Self::Stats => AppCommand::NetworkStats,
            Self::WriteConfig => return Ok(None),
        };
        Ok(Some(command))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    log::info!(
        "Transit Network Editor v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let config_path = cli.config.clone().unwrap_or_else(ServiceOptions::config_path);
    let options = ServiceOptions::load_from_file(&config_path);

    let Some(command) = cli.command.into_app_command()? else {
        return options.save_to_file(&config_path);
    };

    let store = load_store(&cli.network)?;
    let mut state = AppState::with_straight_router(store, options);
    let mut controller = AppController::new();

    let mutating = command.is_mutating();
    let outcome = controller.handle_command(&mut state, command)?;

    println!("{}", serde_json::to_string_pretty(&outcome)?);

    if mutating {
        NetworkSnapshot::capture(&state.store).save_to_file(&cli.network)?;
    }

    Ok(())
}
