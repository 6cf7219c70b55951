//! Happiness engine.
//!
//! Scores the five categories, combines them into a weighted total, applies
//! bonuses to the wage multiplier and picks areas to improve.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, Category, HappinessFactors, HappinessResult,
    HappinessWeights,
};

use super::bonus::calculate_bonuses;
use super::category_score::score_categories;
use super::improvement::calculate_improvement_areas;
use super::wage_adjustment::{adjust_wage, total_score};

/// Runs the full happiness calculation.
///
/// Returns `InvalidBaseWage` when `base_wage` is not positive and
/// `ZeroWeightSum` when every weight is zero. Ratings outside 1 to 10 and
/// weights outside 0 to 100 are rejected, and a base wage too large to
/// adjust returns `ArithmeticOverflow`. Weights that do not sum to 100 are
/// computed through and reported as an audit warning.
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::calculate_happiness;
/// use wage_engine::models::{HappinessFactors, HappinessWeights};
/// use rust_decimal::Decimal;
///
/// let result = calculate_happiness(
///     &HappinessFactors::default(),
///     &HappinessWeights::default(),
///     Decimal::from(1500),
///     None,
/// )
/// .unwrap();
///
/// assert_eq!(result.total_score, Decimal::from(55));
/// assert_eq!(result.adjusted_wage, Decimal::from(1500));
/// ```
pub fn calculate_happiness(
    factors: &HappinessFactors,
    weights: &HappinessWeights,
    base_wage: Decimal,
    target_score: Option<Decimal>,
) -> EngineResult<HappinessResult> {
    if base_wage <= Decimal::ZERO {
        return Err(EngineError::InvalidBaseWage { wage: base_wage });
    }

    let mut trace = AuditTrace::default();

    let scoring = score_categories(factors, trace.next_step_number())?;
    let scores = scoring.scores;
    trace.steps.extend(scoring.audit_steps);

    let total = total_score(&scores, weights)?;

    // total_score has range-checked the weights, so the sum cannot overflow
    let weight_sum = weights.sum();
    if !weights.is_valid() {
        warn!(weight_sum = %weight_sum, "Category weights do not sum to 100");
        trace.warnings.push(AuditWarning {
            code: "WEIGHTS_NOT_100".to_string(),
            message: format!(
                "Category weights sum to {} instead of 100; scores are averaged over the actual sum",
                weight_sum.normalize()
            ),
        });
    }

    let per_category: serde_json::Map<String, serde_json::Value> = Category::ALL
        .iter()
        .map(|c| {
            let entry = serde_json::json!({
                "score": scores.get(*c).normalize().to_string(),
                "weight": weights.get(*c).normalize().to_string()
            });
            (c.as_str().to_string(), entry)
        })
        .collect();
    trace.steps.push(AuditStep {
        step_number: trace.next_step_number(),
        rule_id: "total_score".to_string(),
        rule_name: "Total Score".to_string(),
        input: serde_json::Value::Object(per_category),
        output: serde_json::json!({
            "total_score": total.to_string()
        }),
        reasoning: format!(
            "Weighted average over weight sum {} = {}",
            weight_sum.normalize(),
            total.round_dp(2).normalize()
        ),
    });
    debug!(total_score = %total, "Scored categories");

    let bonuses = calculate_bonuses(&scores, trace.next_step_number());
    trace.steps.extend(bonuses.audit_steps);

    let wage = adjust_wage(
        base_wage,
        total,
        bonuses.balance,
        bonuses.synergy,
        trace.next_step_number(),
    )?;
    trace.steps.push(wage.audit_step);

    let improvement = calculate_improvement_areas(&scores, target_score, trace.next_step_number());
    trace.steps.push(improvement.audit_step);

    debug!(
        multiplier = %wage.multiplier,
        adjusted_wage = %wage.adjusted_wage,
        improvement_areas = improvement.areas.len(),
        "Happiness calculation completed"
    );

    Ok(HappinessResult {
        total_score: total,
        category_scores: scores,
        adjusted_wage: wage.adjusted_wage,
        happiness_bonus: wage.happiness_bonus,
        multiplier: wage.multiplier,
        balance_bonus: Some(bonuses.balance * Decimal::ONE_HUNDRED),
        synergy_bonus: Some(bonuses.synergy * Decimal::ONE_HUNDRED),
        target_score,
        improvement_areas: improvement.areas,
        audit_trace: trace,
    })
}
