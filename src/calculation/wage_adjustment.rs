//! Total score and wage multiplier.
//!
//! The multiplier is linear in the total score around the neutral point,
//! raised by the bonuses and by two high-score steps, then clamped.

use rust_decimal::Decimal;

use crate::config::NEUTRAL_SCORE;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, Category, CategoryScores, HappinessWeights};

use super::stats::{checked_mul, clamp};

/// Distance from the neutral score to a perfect 100.
pub const SCORE_RANGE_ABOVE_NEUTRAL: Decimal = Decimal::from_parts(45, 0, 0, false, 0);

/// Multiplier change across [`SCORE_RANGE_ABOVE_NEUTRAL`].
pub const MULTIPLIER_SLOPE: Decimal = Decimal::from_parts(6, 0, 0, false, 1);

/// Total score that earns the first step bonus.
pub const HIGH_SCORE_THRESHOLD: Decimal = Decimal::from_parts(75, 0, 0, false, 0);

/// Total score that earns the second step bonus.
pub const VERY_HIGH_SCORE_THRESHOLD: Decimal = Decimal::from_parts(85, 0, 0, false, 0);

/// Multiplier added at each step threshold.
pub const STEP_BONUS: Decimal = Decimal::from_parts(1, 0, 0, false, 1);

/// Lowest multiplier the engine will produce.
pub const MIN_MULTIPLIER: Decimal = Decimal::from_parts(6, 0, 0, false, 1);

/// Highest multiplier the engine will produce.
pub const MAX_MULTIPLIER: Decimal = Decimal::from_parts(18, 0, 0, false, 1);

/// Largest accepted weight for a single category.
pub const MAX_WEIGHT: Decimal = Decimal::ONE_HUNDRED;

/// Calculates the weighted average of the category scores.
///
/// The divisor is the actual sum of `weights`, so weights that do not sum to
/// 100 still give a proper average. Returns `WeightOutOfRange` for a negative
/// weight or one above [`MAX_WEIGHT`], and `ZeroWeightSum` when they sum to
/// zero.
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::total_score;
/// use wage_engine::models::{CategoryScores, HappinessWeights};
/// use rust_decimal::Decimal;
///
/// let scores = CategoryScores::uniform(Decimal::from(55));
/// let total = total_score(&scores, &HappinessWeights::default()).unwrap();
/// assert_eq!(total, Decimal::from(55));
/// ```
pub fn total_score(scores: &CategoryScores, weights: &HappinessWeights) -> EngineResult<Decimal> {
    for category in Category::ALL {
        let weight = weights.get(category);
        if weight < Decimal::ZERO || weight > MAX_WEIGHT {
            return Err(EngineError::WeightOutOfRange { category, weight });
        }
    }

    let weight_sum = weights.sum();
    if weight_sum.is_zero() {
        return Err(EngineError::ZeroWeightSum);
    }

    let weighted: Decimal = Category::ALL
        .iter()
        .map(|c| scores.get(*c) * weights.get(*c))
        .sum();

    Ok(weighted / weight_sum)
}

/// Derives the wage multiplier from the total score and bonus fractions.
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::wage_multiplier;
/// use rust_decimal::Decimal;
///
/// // Neutral score, no bonuses.
/// let m = wage_multiplier(Decimal::from(55), Decimal::ZERO, Decimal::ZERO);
/// assert_eq!(m, Decimal::ONE);
///
/// // Far below neutral clamps to the floor.
/// let m = wage_multiplier(Decimal::from(-500), Decimal::ZERO, Decimal::ZERO);
/// assert_eq!(m, Decimal::new(6, 1));
/// ```
pub fn wage_multiplier(total_score: Decimal, balance: Decimal, synergy: Decimal) -> Decimal {
    // saturating: anything this far out clamps anyway
    let normalized = total_score.saturating_sub(NEUTRAL_SCORE) / SCORE_RANGE_ABOVE_NEUTRAL;
    let mut multiplier = Decimal::ONE + normalized * MULTIPLIER_SLOPE;

    multiplier = multiplier.saturating_add(balance).saturating_add(synergy);

    if total_score >= HIGH_SCORE_THRESHOLD {
        multiplier = multiplier.saturating_add(STEP_BONUS);
    }
    if total_score >= VERY_HIGH_SCORE_THRESHOLD {
        multiplier = multiplier.saturating_add(STEP_BONUS);
    }

    clamp(multiplier, MIN_MULTIPLIER, MAX_MULTIPLIER)
}

/// The adjusted wage, including the audit step.
#[derive(Debug, Clone)]
pub struct WageAdjustmentResult {
    /// The clamped multiplier.
    pub multiplier: Decimal,
    /// Base wage times multiplier.
    pub adjusted_wage: Decimal,
    /// Percentage change over the base wage.
    pub happiness_bonus: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Applies the happiness multiplier to a base wage.
///
/// Returns `InvalidBaseWage` when `base_wage` is zero or negative, since the
/// bonus percentage would otherwise divide by zero. Returns
/// `ArithmeticOverflow` when the adjusted wage is too large to represent.
pub fn adjust_wage(
    base_wage: Decimal,
    total_score: Decimal,
    balance: Decimal,
    synergy: Decimal,
    step_number: u32,
) -> EngineResult<WageAdjustmentResult> {
    if base_wage <= Decimal::ZERO {
        return Err(EngineError::InvalidBaseWage { wage: base_wage });
    }

    let multiplier = wage_multiplier(total_score, balance, synergy);
    let adjusted_wage = checked_mul(base_wage, multiplier, "adjusted wage")?;
    let happiness_bonus = (adjusted_wage - base_wage) / base_wage * Decimal::ONE_HUNDRED;

    let steps_applied = [HIGH_SCORE_THRESHOLD, VERY_HIGH_SCORE_THRESHOLD]
        .iter()
        .filter(|t| total_score >= **t)
        .count();

    let audit_step = AuditStep {
        step_number,
        rule_id: "wage_multiplier".to_string(),
        rule_name: "Wage Multiplier".to_string(),
        input: serde_json::json!({
            "base_wage": base_wage.to_string(),
            "total_score": total_score.to_string(),
            "balance_bonus": balance.to_string(),
            "synergy_bonus": synergy.to_string()
        }),
        output: serde_json::json!({
            "multiplier": multiplier.normalize().to_string(),
            "adjusted_wage": adjusted_wage.normalize().to_string(),
            "happiness_bonus": happiness_bonus.normalize().to_string(),
            "score_steps_applied": steps_applied
        }),
        reasoning: format!(
            "{} x {} = {} ({}{}%)",
            base_wage.normalize(),
            multiplier.round_dp(4).normalize(),
            adjusted_wage.round_dp(2).normalize(),
            if happiness_bonus >= Decimal::ZERO { "+" } else { "" },
            happiness_bonus.round_dp(2).normalize()
        ),
    };

    Ok(WageAdjustmentResult {
        multiplier,
        adjusted_wage,
        happiness_bonus,
        audit_step,
    })
}
