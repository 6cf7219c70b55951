//! Team cost result models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AuditTrace;

/// Salary figures for one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionBreakdown {
    /// Position name.
    pub name: String,
    /// Headcount.
    pub count: u32,
    /// Annual salary of one person in the role.
    pub annual_salary: Decimal,
    /// Annual salary of everyone in the role.
    pub total_annual_salary: Decimal,
    /// Hourly rate derived from the per-person annual salary.
    pub hourly_rate: Decimal,
}

/// Time and cost figures for one work item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItemBreakdown {
    /// Work item name.
    pub name: String,
    /// Display label of the frequency.
    pub frequency: String,
    /// Hours per execution.
    pub hours_per_execution: Decimal,
    /// Executions per year.
    pub annual_executions: Decimal,
    /// Hours consumed per year.
    pub total_annual_hours: Decimal,
    /// Cost of one execution at the team average hourly rate.
    pub cost_per_execution: Decimal,
    /// Cost per year.
    pub total_annual_cost: Decimal,
}

/// The complete result of a team cost calculation.
///
/// `total_annual_cost` is the sum of the work item costs only. Position
/// salaries are reported for information and are never added to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostCalculationResult {
    /// Sum of every work item's annual cost.
    pub total_annual_cost: Decimal,
    /// Sum of every work item's annual hours.
    pub total_annual_hours: Decimal,
    /// Annual hours divided by 12.
    pub total_monthly_hours: Decimal,
    /// Headcount-weighted mean hourly rate of the team.
    pub average_hourly_rate: Decimal,
    /// Sum of every position's total annual salary.
    pub total_position_salary: Decimal,
    /// Per-position figures, in input order.
    pub position_breakdown: Vec<PositionBreakdown>,
    /// Per-work-item figures, in input order.
    pub work_item_breakdown: Vec<WorkItemBreakdown>,
    /// Record of every calculation step.
    pub audit_trace: AuditTrace,
}
