//! Defaults and preset loading for the wage engine.
//!
//! Built-in defaults live in one place and can be overridden per deployment
//! by a directory of YAML preset files.
//!
//! # Example
//!
//! ```no_run
//! use wage_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/defaults").unwrap();
//! println!("Default base wage: {}", config.scoring().base_wage);
//! ```

mod defaults;
mod loader;
mod types;

pub use defaults::{
    DEFAULT_BASE_WAGE, NEUTRAL_RATING, NEUTRAL_SCORE, builtin_presets, builtin_scoring_presets,
    builtin_team_preset, default_factors, default_team_data, default_weights,
};
pub use loader::ConfigLoader;
pub use types::{PositionPreset, Presets, ScoringPresets, TeamPreset, WorkItemPreset};
