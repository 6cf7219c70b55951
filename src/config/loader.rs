//! Preset loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading deployment
//! presets from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{HappinessWeights, TeamCostData};

use super::defaults::builtin_presets;
use super::types::{Presets, ScoringPresets, TeamPreset};

/// Loads and provides access to presets.
///
/// # Directory Structure
///
/// ```text
/// config/defaults/
/// ├── scoring.yaml   # Default weights and base wage
/// └── team.yaml      # Default positions, salaries and work items
/// ```
///
/// # Example
///
/// ```no_run
/// use wage_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/defaults").unwrap();
/// println!("Default team: {}", loader.team().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    presets: Presets,
}

impl ConfigLoader {
    /// Loads presets from the specified directory.
    ///
    /// Returns an error if either file is missing or is not valid YAML for
    /// its preset type.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let scoring = Self::load_yaml::<ScoringPresets>(&path.join("scoring.yaml"))?;
        let team = Self::load_yaml::<TeamPreset>(&path.join("team.yaml"))?;

        debug!(
            path = %path.display(),
            positions = team.positions.len(),
            work_items = team.work_items.len(),
            "Loaded presets"
        );

        Ok(Self {
            presets: Presets { scoring, team },
        })
    }

    /// Returns a loader holding the built-in presets, without touching the
    /// filesystem.
    pub fn builtin() -> Self {
        Self {
            presets: builtin_presets(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns all loaded presets.
    pub fn presets(&self) -> &Presets {
        &self.presets
    }

    /// Returns the scoring presets.
    pub fn scoring(&self) -> &ScoringPresets {
        &self.presets.scoring
    }

    /// Returns the default category weights.
    pub fn default_weights(&self) -> &HappinessWeights {
        &self.presets.scoring.weights
    }

    /// Returns the team preset.
    pub fn team(&self) -> &TeamPreset {
        &self.presets.team
    }

    /// Builds a fresh team from the team preset.
    pub fn default_team_data(&self) -> TeamCostData {
        self.presets.team.build()
    }
}
