//! Preset types.
//!
//! These structures are deserialized from the YAML preset files and describe
//! the values a presentation layer starts from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    Frequency, HappinessWeights, PayPeriodKind, Position, TeamCostData, WorkItem,
};

/// Defaults for the happiness form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringPresets {
    /// Initial category weights.
    pub weights: HappinessWeights,
    /// Initial base wage per hour.
    pub base_wage: Decimal,
}

/// A position in a team preset, with its salary inline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionPreset {
    /// Position name.
    pub name: String,
    /// Headcount.
    pub count: u32,
    /// Salary in the preset's pay period units. Left unset when absent.
    #[serde(default)]
    pub salary: Option<Decimal>,
}

/// A work item in a team preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItemPreset {
    /// Work item name.
    pub name: String,
    /// Recurrence.
    pub frequency: Frequency,
    /// Hours per execution.
    pub hours: Decimal,
}

/// Defaults for the team-cost form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamPreset {
    /// Team name.
    pub name: String,
    /// Unit the position salaries are entered in.
    pub salary_type: PayPeriodKind,
    /// Staffing roles.
    pub positions: Vec<PositionPreset>,
    /// Recurring work items.
    #[serde(default)]
    pub work_items: Vec<WorkItemPreset>,
}

impl TeamPreset {
    /// Builds a new [`TeamCostData`] from this preset.
    ///
    /// Every call generates new ids and timestamps.
    pub fn build(&self) -> TeamCostData {
        let mut team = TeamCostData::new(self.name.clone(), self.salary_type);

        for preset in &self.positions {
            team.positions
                .push(Position::new(preset.name.clone(), preset.count));
            if let Some(salary) = preset.salary {
                team.salary_data.set(preset.name.clone(), salary);
            }
        }

        team.work_items = self
            .work_items
            .iter()
            .map(|w| WorkItem::new(w.name.clone(), w.frequency, w.hours))
            .collect();

        team
    }
}

/// Every preset a deployment provides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presets {
    /// Happiness form defaults.
    pub scoring: ScoringPresets,
    /// Team-cost form defaults.
    pub team: TeamPreset,
}
