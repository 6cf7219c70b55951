//! Request types for the wage engine API.
//!
//! Request bodies mirror the engine inputs but leave out what a client
//! should not have to send, such as ids and timestamps.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    Frequency, HappinessFactors, HappinessWeights, Position, SalaryData, TeamCostData, WorkItem,
};

/// Request body for the `/happiness` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HappinessRequest {
    /// Sub-factor ratings. Anything left out reads as neutral.
    #[serde(default)]
    pub factors: HappinessFactors,
    /// Category weights. The configured defaults are used when absent.
    #[serde(default)]
    pub weights: Option<HappinessWeights>,
    /// Base hourly wage. Must be greater than zero.
    pub base_wage: Decimal,
    /// Optional score to measure improvement areas against.
    #[serde(default)]
    pub target_score: Option<Decimal>,
}

/// Position information in a team cost request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionRequest {
    /// Identifier. Generated when absent.
    #[serde(default)]
    pub id: Option<String>,
    /// Position name.
    pub name: String,
    /// Headcount.
    pub count: u32,
}

/// Work item information in a team cost request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkItemRequest {
    /// Identifier. Generated when absent.
    #[serde(default)]
    pub id: Option<String>,
    /// Work item name.
    pub name: String,
    /// Recurrence.
    pub frequency: Frequency,
    /// Hours per execution.
    pub hours: Decimal,
}

/// Request body for the `/team-cost` and `/team-cost/validate` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamCostRequest {
    /// Team name.
    #[serde(default = "default_team_name")]
    pub name: String,
    /// Staffing roles.
    #[serde(default)]
    pub positions: Vec<PositionRequest>,
    /// Recurring work items.
    #[serde(default)]
    pub work_items: Vec<WorkItemRequest>,
    /// Salaries keyed by position name.
    pub salary_data: SalaryData,
}

fn default_team_name() -> String {
    "Team".to_string()
}

impl From<PositionRequest> for Position {
    fn from(req: PositionRequest) -> Self {
        let mut position = Position::new(req.name, req.count);
        if let Some(id) = req.id {
            position.id = id;
        }
        position
    }
}

impl From<WorkItemRequest> for WorkItem {
    fn from(req: WorkItemRequest) -> Self {
        let mut item = WorkItem::new(req.name, req.frequency, req.hours);
        if let Some(id) = req.id {
            item.id = id;
        }
        item
    }
}

impl From<TeamCostRequest> for TeamCostData {
    fn from(req: TeamCostRequest) -> Self {
        let mut team = TeamCostData::new(req.name, req.salary_data.salary_type);
        team.positions = req.positions.into_iter().map(Into::into).collect();
        team.work_items = req.work_items.into_iter().map(Into::into).collect();
        team.salary_data = req.salary_data;
        team
    }
}
