//! Team cost engine.
//!
//! Costs a team's recurring work at the team's headcount-weighted average
//! hourly rate. Position salaries are reported alongside but never added to
//! the total annual cost.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditTrace, CostCalculationResult, Position, PositionBreakdown, SalaryData,
    TeamCostData, WorkItemBreakdown,
};

use super::salary::{MONTHS_PER_YEAR, to_annual, to_hourly_rate};
use super::stats::{checked_add, checked_mul, checked_sum};
use super::work_item::{annual_executions, annual_hours};

/// Returns a position's per-person annual salary. Unset salaries count as 0.
fn annual_salary(position: &Position, salary_data: &SalaryData) -> EngineResult<Decimal> {
    let amount = salary_data
        .amount_for(&position.name)
        .unwrap_or(Decimal::ZERO);
    to_annual(amount, salary_data.salary_type)
}

/// Total number of people across all positions.
fn headcount(positions: &[Position]) -> Decimal {
    positions.iter().map(|p| Decimal::from(p.count)).sum()
}

fn weighted_hourly_rate(
    positions: &[Position],
    salary_data: &SalaryData,
    headcount: Decimal,
) -> EngineResult<Decimal> {
    if headcount.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let mut weighted = Decimal::ZERO;
    for position in positions {
        let rate = to_hourly_rate(annual_salary(position, salary_data)?);
        let contribution = checked_mul(rate, Decimal::from(position.count), "team average rate")?;
        weighted = checked_add(weighted, contribution, "team average rate")?;
    }

    Ok(weighted / headcount)
}

/// Calculates the headcount-weighted mean hourly rate of the team.
///
/// Positions without a salary contribute a rate of 0 but still count toward
/// the headcount. Returns 0 when the total headcount is 0, and
/// `ArithmeticOverflow` when a salary is too large to annualize.
pub fn average_hourly_rate(
    positions: &[Position],
    salary_data: &SalaryData,
) -> EngineResult<Decimal> {
    weighted_hourly_rate(positions, salary_data, headcount(positions))
}

/// Checks a team for the findings that make costing it meaningless.
///
/// Returns every finding, not just the first. An empty list means the team
/// can be costed. A salary explicitly set to 0 is reported the same as a
/// salary that was never entered.
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::validate_team;
/// use wage_engine::models::{PayPeriodKind, TeamCostData};
///
/// let team = TeamCostData::new("Empty", PayPeriodKind::Monthly);
/// let errors = validate_team(&team);
/// assert_eq!(errors.len(), 2);
/// ```
pub fn validate_team(team: &TeamCostData) -> Vec<String> {
    let mut errors = Vec::new();

    if team.positions.is_empty() {
        errors.push("no positions configured".to_string());
    }
    if team.work_items.is_empty() {
        errors.push("no work items configured".to_string());
    }

    let missing: Vec<&str> = team
        .positions
        .iter()
        .filter(|p| {
            team.salary_data
                .amount_for(&p.name)
                .is_none_or(|amount| amount.is_zero())
        })
        .map(|p| p.name.as_str())
        .collect();
    if !missing.is_empty() {
        errors.push(format!(
            "salary missing for positions: {}",
            missing.join(", ")
        ));
    }

    errors
}

/// Calculates the annual cost and time of a team's recurring work.
///
/// Produces a fully populated result unless an amount is too large to
/// calculate with, which returns `ArithmeticOverflow`. Callers should run
/// [`validate_team`] first, or use [`try_calculate_team_cost`].
pub fn calculate_team_cost(team: &TeamCostData) -> EngineResult<CostCalculationResult> {
    let mut trace = AuditTrace::default();
    let salary_data = &team.salary_data;

    let mut position_breakdown = Vec::with_capacity(team.positions.len());
    for position in &team.positions {
        let annual = annual_salary(position, salary_data)?;
        let breakdown = PositionBreakdown {
            name: position.name.clone(),
            count: position.count,
            annual_salary: annual,
            total_annual_salary: checked_mul(
                annual,
                Decimal::from(position.count),
                "total position salary",
            )?,
            hourly_rate: to_hourly_rate(annual),
        };

        trace.steps.push(AuditStep {
            step_number: trace.next_step_number(),
            rule_id: "position_salary".to_string(),
            rule_name: "Position Salary".to_string(),
            input: serde_json::json!({
                "position": position.name,
                "count": position.count,
                "amount": salary_data.amount_for(&position.name).map(|a| a.to_string()),
                "salary_type": salary_data.salary_type
            }),
            output: serde_json::json!({
                "annual_salary": breakdown.annual_salary.normalize().to_string(),
                "total_annual_salary": breakdown.total_annual_salary.normalize().to_string(),
                "hourly_rate": breakdown.hourly_rate.normalize().to_string()
            }),
            reasoning: format!(
                "{}: {} per person per year x {} = {}",
                position.name,
                breakdown.annual_salary.normalize(),
                position.count,
                breakdown.total_annual_salary.normalize()
            ),
        });
        position_breakdown.push(breakdown);
    }

    let people = headcount(&team.positions);
    let average_rate = weighted_hourly_rate(&team.positions, salary_data, people)?;
    if people.is_zero() {
        warn!(team_id = %team.id, "Team has no headcount; work is costed at zero");
    }
    trace.steps.push(AuditStep {
        step_number: trace.next_step_number(),
        rule_id: "team_average_rate".to_string(),
        rule_name: "Team Average Hourly Rate".to_string(),
        input: serde_json::json!({
            "headcount": people.to_string()
        }),
        output: serde_json::json!({
            "average_hourly_rate": average_rate.normalize().to_string()
        }),
        reasoning: format!(
            "Headcount-weighted mean of position hourly rates over {} people = {}",
            people,
            average_rate.round_dp(2).normalize()
        ),
    });

    let mut work_item_breakdown = Vec::with_capacity(team.work_items.len());
    for item in &team.work_items {
        let executions = annual_executions(item.frequency);
        let cost_per_execution = checked_mul(item.hours, average_rate, "work item cost")?;
        let breakdown = WorkItemBreakdown {
            name: item.name.clone(),
            frequency: item.frequency.label().to_string(),
            hours_per_execution: item.hours,
            annual_executions: executions,
            total_annual_hours: annual_hours(item)?,
            cost_per_execution,
            total_annual_cost: checked_mul(cost_per_execution, executions, "work item cost")?,
        };

        trace.steps.push(AuditStep {
            step_number: trace.next_step_number(),
            rule_id: "work_item_cost".to_string(),
            rule_name: "Work Item Cost".to_string(),
            input: serde_json::json!({
                "work_item": item.name,
                "frequency": item.frequency,
                "hours": item.hours.to_string()
            }),
            output: serde_json::json!({
                "annual_executions": executions.to_string(),
                "total_annual_hours": breakdown.total_annual_hours.normalize().to_string(),
                "total_annual_cost": breakdown.total_annual_cost.normalize().to_string()
            }),
            reasoning: format!(
                "{}: {}h x {} runs = {}h; {}h x {} = {} per run",
                item.name,
                item.hours.normalize(),
                executions,
                breakdown.total_annual_hours.normalize(),
                item.hours.normalize(),
                average_rate.round_dp(2).normalize(),
                cost_per_execution.round_dp(2).normalize()
            ),
        });
        work_item_breakdown.push(breakdown);
    }

    let total_annual_cost = checked_sum(
        work_item_breakdown.iter().map(|w| w.total_annual_cost),
        "total annual cost",
    )?;
    let total_annual_hours = checked_sum(
        work_item_breakdown.iter().map(|w| w.total_annual_hours),
        "total annual hours",
    )?;
    let total_monthly_hours = total_annual_hours / MONTHS_PER_YEAR;
    let total_position_salary = checked_sum(
        position_breakdown.iter().map(|p| p.total_annual_salary),
        "total position salary",
    )?;

    trace.steps.push(AuditStep {
        step_number: trace.next_step_number(),
        rule_id: "cost_totals".to_string(),
        rule_name: "Cost Totals".to_string(),
        input: serde_json::json!({
            "work_items": work_item_breakdown.len()
        }),
        output: serde_json::json!({
            "total_annual_cost": total_annual_cost.normalize().to_string(),
            "total_annual_hours": total_annual_hours.normalize().to_string(),
            "total_monthly_hours": total_monthly_hours.normalize().to_string()
        }),
        reasoning: format!(
            "Sum of work item costs = {}; {}h per year / {} = {}h per month",
            total_annual_cost.round_dp(2).normalize(),
            total_annual_hours.normalize(),
            MONTHS_PER_YEAR,
            total_monthly_hours.round_dp(2).normalize()
        ),
    });

    debug!(
        team_id = %team.id,
        positions = position_breakdown.len(),
        work_items = work_item_breakdown.len(),
        total_annual_cost = %total_annual_cost,
        "Team cost calculation completed"
    );

    Ok(CostCalculationResult {
        total_annual_cost,
        total_annual_hours,
        total_monthly_hours,
        average_hourly_rate: average_rate,
        total_position_salary,
        position_breakdown,
        work_item_breakdown,
        audit_trace: trace,
    })
}

/// Validates a team and, if it passes, costs it.
///
/// Returns `InvalidTeam` carrying every validation finding otherwise.
pub fn try_calculate_team_cost(team: &TeamCostData) -> EngineResult<CostCalculationResult> {
    let messages = validate_team(team);
    if !messages.is_empty() {
        return Err(EngineError::InvalidTeam { messages });
    }
    calculate_team_cost(team)
}
