//! Built-in default values.
//!
//! Every entry point that needs a default (first load, reset, the HTTP
//! `/defaults` endpoint) reads it from here.

use rust_decimal::Decimal;

use crate::models::{Frequency, HappinessFactors, HappinessWeights, PayPeriodKind, TeamCostData};

use super::types::{PositionPreset, Presets, ScoringPresets, TeamPreset, WorkItemPreset};

/// The rating an unset sub-factor reads as.
pub const NEUTRAL_RATING: Decimal = Decimal::from_parts(55, 0, 0, false, 1);

/// The category or total score that leaves the wage unchanged.
pub const NEUTRAL_SCORE: Decimal = Decimal::from_parts(55, 0, 0, false, 0);

/// Default base wage offered to new users, per hour.
pub const DEFAULT_BASE_WAGE: Decimal = Decimal::from_parts(1500, 0, 0, false, 0);

/// Default category weights. They sum to 100.
pub fn default_weights() -> HappinessWeights {
    HappinessWeights {
        job: Decimal::from(30),
        health: Decimal::from(25),
        family: Decimal::from(20),
        hobby: Decimal::from(15),
        sns: Decimal::from(10),
    }
}

/// Default factors: nothing rated yet, so every sub-factor reads as neutral.
pub fn default_factors() -> HappinessFactors {
    HappinessFactors::default()
}

/// The built-in scoring presets.
pub fn builtin_scoring_presets() -> ScoringPresets {
    ScoringPresets {
        weights: default_weights(),
        base_wage: DEFAULT_BASE_WAGE,
    }
}

/// The built-in team: a leader, a middle and three juniors on monthly
/// salaries (in 10,000 currency units) with three recurring work items.
pub fn builtin_team_preset() -> TeamPreset {
    TeamPreset {
        name: "My Team".to_string(),
        salary_type: PayPeriodKind::Monthly,
        positions: vec![
            PositionPreset {
                name: "Leader".to_string(),
                count: 1,
                salary: Some(Decimal::from(55)),
            },
            PositionPreset {
                name: "Middle".to_string(),
                count: 1,
                salary: Some(Decimal::from(40)),
            },
            PositionPreset {
                name: "Junior".to_string(),
                count: 3,
                salary: Some(Decimal::from(20)),
            },
        ],
        work_items: vec![
            WorkItemPreset {
                name: "Daily standup".to_string(),
                frequency: Frequency::Daily,
                hours: Decimal::new(25, 2),
            },
            WorkItemPreset {
                name: "Weekly meeting".to_string(),
                frequency: Frequency::Weekly,
                hours: Decimal::ONE,
            },
            WorkItemPreset {
                name: "Monthly report".to_string(),
                frequency: Frequency::Monthly,
                hours: Decimal::from(4),
            },
        ],
    }
}

/// All built-in presets.
pub fn builtin_presets() -> Presets {
    Presets {
        scoring: builtin_scoring_presets(),
        team: builtin_team_preset(),
    }
}

/// A fresh copy of the built-in team, with new ids and timestamps.
pub fn default_team_data() -> TeamCostData {
    builtin_team_preset().build()
}
