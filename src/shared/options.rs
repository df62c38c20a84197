//! Zentrale Konfiguration des Netz-Editors.
//!
//! `ServiceOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use anyhow::Context;
use serde::{Deserialize, Serialize};

// ── Nachbarschaft ───────────────────────────────────────────────────

/// Radius des Nachbarschafts-Fensters um das Zentrum (Welteinheiten).
pub const NEIGHBORHOOD_RADIUS: f64 = 500.0;
/// Maximale Anzahl Nodes pro Fenster (speicherseitiges Limit).
pub const MAX_LOAD_POINTS: usize = 1000;

// ── Haltestellen ────────────────────────────────────────────────────

/// Suchradius für Haltestellen-Umkreissuche (Welteinheiten).
pub const STOP_SEARCH_RADIUS: f64 = 2000.0;
/// Maximale Anzahl Signs pro Umkreissuche.
pub const STOP_SEARCH_LIMIT: usize = MAX_LOAD_POINTS * 3;

// ── Routing ─────────────────────────────────────────────────────────

/// Schrittweite des Geraden-Routers (Welteinheiten, 0 = keine Unterteilung).
pub const ROUTER_STEP: f64 = 25.0;
/// Kleinste zulässige positive Schrittweite des Geraden-Routers.
pub const MIN_ROUTER_STEP: f64 = 0.01;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `transit_net_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServiceOptions {
    /// Radius des Nachbarschafts-Fensters
    pub neighborhood_radius: f64,
    /// Maximale Anzahl Nodes pro Fenster
    pub max_load_points: usize,
    /// Suchradius für Haltestellen
    pub stop_search_radius: f64,
    /// Maximale Anzahl Signs pro Umkreissuche
    pub stop_search_limit: usize,
    /// Schrittweite des Geraden-Routers
    pub router_step: f64,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            neighborhood_radius: NEIGHBORHOOD_RADIUS,
            max_load_points: MAX_LOAD_POINTS,
            stop_search_radius: STOP_SEARCH_RADIUS,
            stop_search_limit: STOP_SEARCH_LIMIT,
            router_step: ROUTER_STEP,
        }
    }
}

impl ServiceOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    Self::validated(opts)
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Ersetzt unbrauchbare Werte durch Standardwerte.
    ///
    /// Radien müssen endlich und nicht negativ sein, die Router-Schrittweite
    /// endlich und entweder `<= 0` (keine Unterteilung) oder `>= MIN_ROUTER_STEP`.
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();
        if !self.neighborhood_radius.is_finite() || self.neighborhood_radius < 0.0 {
            log::warn!(
                "neighborhood_radius {} ungültig, verwende {}",
                self.neighborhood_radius,
                defaults.neighborhood_radius
            );
            self.neighborhood_radius = defaults.neighborhood_radius;
        }
        if !self.stop_search_radius.is_finite() || self.stop_search_radius < 0.0 {
            log::warn!(
                "stop_search_radius {} ungültig, verwende {}",
                self.stop_search_radius,
                defaults.stop_search_radius
            );
            self.stop_search_radius = defaults.stop_search_radius;
        }
        if !self.router_step.is_finite()
            || (self.router_step > 0.0 && self.router_step < MIN_ROUTER_STEP)
        {
            log::warn!(
                "router_step {} ungültig, verwende {}",
                self.router_step,
                defaults.router_step
            );
            self.router_step = defaults.router_step;
        }
        self
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen nicht schreibbar: {}", path.display()))?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("transit_net_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("transit_net_editor.toml")
    }
}
