//! Mission plan models and loaders for the Intercept Calculator.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// A mission request as written in a plan file.
///
/// Values stay as raw strings here; the engine validates them when converting
/// into mission parameters.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MissionPlanConfig {
    #[serde(default)]
    pub name: Option<String>,
    pub propulsion: String,
    pub payload_mass_kg: f64,
    pub mode: MissionModeConfig,
    /// Fixes the random source for anytime launches.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Launch mode section of a mission plan.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum MissionModeConfig {
    /// Pick one of the preset windows by label or ISO date.
    #[serde(rename = "best-interception", alias = "best_interception")]
    BestInterception { window: String },
    /// Launch on an arbitrary date (`YYYY-MM-DD` or RFC 3339).
    #[serde(rename = "anytime")]
    Anytime { launch_date: String },
}

/// Errors that can occur while loading plan files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read plan: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("no mission plans found in {0}")]
    Empty(PathBuf),
}

/// Load mission plans from a YAML list, a single TOML file, or a directory of TOML files.
pub fn load_mission_plans<P: AsRef<Path>>(path: P) -> Result<Vec<MissionPlanConfig>, ConfigError> {
    let path = path.as_ref();
    let plans: Vec<MissionPlanConfig> = load_records(path)?;
    if plans.is_empty() {
        return Err(ConfigError::Empty(path.to_path_buf()));
    }
    Ok(plans)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
