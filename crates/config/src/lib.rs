//! Configuration models and loaders for the Cosmic Catapult.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Body catalog entry parsed from `configs/bodies.yaml`.
#[derive(Debug, Deserialize, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub mu_km3_s2: f64,
    pub radius_km: f64,
    pub mass_kg: f64,
    /// Circular orbit radius about the primary; absent for the primary itself.
    #[serde(default)]
    pub orbit_radius_km: Option<f64>,
}

/// Scenario preset parsed from TOML or YAML manifests.
#[derive(Debug, Deserialize, Clone)]
pub struct ScenarioConfig {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Base integrator step in seconds.
    pub dt_s: f64,
    /// Tick multiplier; the model default applies when absent.
    #[serde(default)]
    pub time_scale: Option<f64>,
    #[serde(default = "default_max_trajectory_points")]
    pub max_trajectory_points: usize,
    #[serde(default)]
    pub integrator: IntegratorChoice,
    #[serde(default = "default_clear_trajectories")]
    pub clear_trajectories: bool,
    pub ship: ShipConfig,
    #[serde(default)]
    pub assist: Option<AssistConfig>,
}

/// Initial ship state in a scenario manifest.
#[derive(Debug, Deserialize, Clone)]
pub struct ShipConfig {
    pub position_km: [f64; 2],
    pub velocity_km_s: [f64; 2],
}

/// Gravity-assist request in a scenario manifest.
#[derive(Debug, Deserialize, Clone)]
pub struct AssistConfig {
    pub target: AssistTarget,
}

/// Assist target selector accepted in manifests.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AssistTarget {
    Earth,
    Jupiter,
}

/// Integration scheme selector accepted in manifests.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum IntegratorChoice {
    Euler,
    #[default]
    Rk4,
}

fn default_max_trajectory_points() -> usize {
    5_000
}

fn default_clear_trajectories() -> bool {
    true
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load the body catalog from a YAML file.
pub fn load_bodies<P: AsRef<Path>>(path: P) -> Result<Vec<BodyConfig>, ConfigError> {
    let reader = File::open(path)?;
    Ok(serde_yaml::from_reader(reader)?)
}

/// Load a single scenario manifest, dispatching on the file extension
/// (`.toml` parses as TOML, anything else as YAML).
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<ScenarioConfig, ConfigError> {
    let path = path.as_ref();
    if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

/// Load every `.toml` scenario in a directory, sorted by path.
pub fn load_scenarios<P: AsRef<Path>>(dir: P) -> Result<Vec<ScenarioConfig>, ConfigError> {
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir.as_ref())?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();

    let mut scenarios = Vec::new();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        scenarios.push(toml::from_str(&contents)?);
    }
    Ok(scenarios)
}
