//! Balance and synergy bonuses.
//!
//! Both bonuses reward category scores above the neutral point and are
//! expressed as fractions (0.2 = 20%). Neither applies while the mean
//! category score is at or below neutral.

use rust_decimal::Decimal;

use crate::config::NEUTRAL_SCORE;
use crate::models::{AuditStep, Category, CategoryScores};

use super::stats::{clamp, population_std_dev};

/// Standard deviation at which the balance bonus reaches zero.
pub const BALANCE_MAX_STD_DEV: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// Balance bonus for perfectly even scores.
pub const MAX_BALANCE_BONUS: Decimal = Decimal::from_parts(2, 0, 0, false, 1);

/// Category pairs that reward each other, with their weights.
pub const SYNERGY_PAIRS: [(Category, Category, Decimal); 3] = [
    (
        Category::Job,
        Category::Health,
        Decimal::from_parts(8, 0, 0, false, 2),
    ),
    (
        Category::Family,
        Category::Hobby,
        Decimal::from_parts(6, 0, 0, false, 2),
    ),
    (
        Category::Health,
        Category::Sns,
        Decimal::from_parts(4, 0, 0, false, 2),
    ),
];

/// Score every category must reach for the all-high bonus.
pub const ALL_HIGH_THRESHOLD: Decimal = Decimal::from_parts(65, 0, 0, false, 0);

/// Flat bonus when every category reaches [`ALL_HIGH_THRESHOLD`].
pub const ALL_HIGH_BONUS: Decimal = Decimal::from_parts(12, 0, 0, false, 2);

/// Upper bound of the synergy bonus.
pub const MAX_SYNERGY_BONUS: Decimal = Decimal::from_parts(30, 0, 0, false, 2);

fn score_values(scores: &CategoryScores) -> Vec<Decimal> {
    scores.iter().map(|(_, score)| score).collect()
}

/// Calculates the balance bonus fraction.
///
/// Above neutral, the bonus shrinks linearly with the population standard
/// deviation of the five scores and reaches zero at [`BALANCE_MAX_STD_DEV`].
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::balance_bonus;
/// use wage_engine::models::CategoryScores;
/// use rust_decimal::Decimal;
///
/// // Perfectly even scores above neutral earn the full 20%.
/// let scores = CategoryScores::uniform(Decimal::from(70));
/// assert_eq!(balance_bonus(&scores), Decimal::new(2, 1));
///
/// // Neutral scores earn nothing.
/// let scores = CategoryScores::uniform(Decimal::from(55));
/// assert_eq!(balance_bonus(&scores), Decimal::ZERO);
/// ```
pub fn balance_bonus(scores: &CategoryScores) -> Decimal {
    if scores.mean() <= NEUTRAL_SCORE {
        return Decimal::ZERO;
    }

    let std_dev = population_std_dev(&score_values(scores)).unwrap_or(Decimal::ZERO);
    let balance = (Decimal::ONE - std_dev / BALANCE_MAX_STD_DEV).max(Decimal::ZERO);
    balance * MAX_BALANCE_BONUS
}

/// Calculates the synergy bonus fraction.
///
/// Each pair in [`SYNERGY_PAIRS`] contributes in proportion to how far the
/// weaker of its two scores sits above neutral. All five categories at or
/// above [`ALL_HIGH_THRESHOLD`] add [`ALL_HIGH_BONUS`]. The total never
/// exceeds [`MAX_SYNERGY_BONUS`].
pub fn synergy_bonus(scores: &CategoryScores) -> Decimal {
    if scores.mean() <= NEUTRAL_SCORE {
        return Decimal::ZERO;
    }

    let mut bonus: Decimal = SYNERGY_PAIRS
        .iter()
        .map(|(a, b, weight)| {
            let floor = scores.get(*a).min(scores.get(*b));
            (floor - NEUTRAL_SCORE).max(Decimal::ZERO) / Decimal::ONE_HUNDRED * weight
        })
        .sum();

    if scores.iter().all(|(_, score)| score >= ALL_HIGH_THRESHOLD) {
        bonus += ALL_HIGH_BONUS;
    }

    clamp(bonus, Decimal::ZERO, MAX_SYNERGY_BONUS)
}

/// Both bonus fractions, including audit steps.
#[derive(Debug, Clone)]
pub struct BonusResult {
    /// Balance bonus fraction.
    pub balance: Decimal,
    /// Synergy bonus fraction.
    pub synergy: Decimal,
    /// Balance step followed by synergy step.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates both bonuses and records how they were reached.
pub fn calculate_bonuses(scores: &CategoryScores, step_number: u32) -> BonusResult {
    let mean = scores.mean();
    let above_neutral = mean > NEUTRAL_SCORE;
    let balance = balance_bonus(scores);
    let synergy = synergy_bonus(scores);
    let std_dev = population_std_dev(&score_values(scores)).unwrap_or(Decimal::ZERO);

    let balance_reasoning = if above_neutral {
        format!(
            "Mean {} above neutral {}; std dev {} gives (1 - {}/{}) x {} = {}",
            mean.round_dp(2).normalize(),
            NEUTRAL_SCORE,
            std_dev.round_dp(2).normalize(),
            std_dev.round_dp(2).normalize(),
            BALANCE_MAX_STD_DEV,
            MAX_BALANCE_BONUS,
            balance.round_dp(4).normalize()
        )
    } else {
        format!(
            "No balance bonus - mean {} is not above neutral {}",
            mean.round_dp(2).normalize(),
            NEUTRAL_SCORE
        )
    };

    let all_high = scores.iter().all(|(_, score)| score >= ALL_HIGH_THRESHOLD);
    let synergy_reasoning = if above_neutral {
        format!(
            "Pair synergies{} = {} (capped at {})",
            if all_high { " plus all-high bonus" } else { "" },
            synergy.round_dp(4).normalize(),
            MAX_SYNERGY_BONUS.normalize()
        )
    } else {
        format!(
            "No synergy bonus - mean {} is not above neutral {}",
            mean.round_dp(2).normalize(),
            NEUTRAL_SCORE
        )
    };

    let audit_steps = vec![
        AuditStep {
            step_number,
            rule_id: "balance_bonus".to_string(),
            rule_name: "Balance Bonus".to_string(),
            input: serde_json::json!({
                "mean_score": mean.to_string(),
                "std_dev": std_dev.to_string()
            }),
            output: serde_json::json!({
                "balance_bonus": balance.normalize().to_string(),
                "applied": !balance.is_zero()
            }),
            reasoning: balance_reasoning,
        },
        AuditStep {
            step_number: step_number + 1,
            rule_id: "synergy_bonus".to_string(),
            rule_name: "Synergy Bonus".to_string(),
            input: serde_json::json!({
                "mean_score": mean.to_string(),
                "all_high": all_high
            }),
            output: serde_json::json!({
                "synergy_bonus": synergy.normalize().to_string(),
                "applied": !synergy.is_zero()
            }),
            reasoning: synergy_reasoning,
        },
    ];

    BonusResult {
        balance,
        synergy,
        audit_steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn scores(job: &str, health: &str, family: &str, hobby: &str, sns: &str) -> CategoryScores {
        CategoryScores {
            job: dec(job),
            health: dec(health),
            family: dec(family),
            hobby: dec(hobby),
            sns: dec(sns),
        }
    }

    #[test]
    fn test_neutral_scores_earn_no_bonus() {
        let neutral = CategoryScores::uniform(dec("55"));
        assert_eq!(balance_bonus(&neutral), Decimal::ZERO);
        assert_eq!(synergy_bonus(&neutral), Decimal::ZERO);
    }

    #[test]
    fn test_uneven_scores_below_neutral_earn_no_bonus() {
        let low = scores("100", "10", "10", "10", "10");
        assert_eq!(balance_bonus(&low), Decimal::ZERO);
        assert_eq!(synergy_bonus(&low), Decimal::ZERO);
    }

    #[test]
    fn test_even_scores_earn_full_balance_bonus() {
        assert_eq!(balance_bonus(&CategoryScores::uniform(dec("60"))), dec("0.2"));
    }

    #[test]
    fn test_balance_bonus_shrinks_with_spread() {
        // mean 60, deviations -10/+10/0/0/0 -> variance 40, std dev ~6.3246
        let spread = scores("50", "70", "60", "60", "60");
        let bonus = balance_bonus(&spread);
        assert!(bonus > Decimal::ZERO);
        assert!(bonus < dec("0.2"));
        assert_eq!(bonus.round_dp(4), dec("0.1368"));
    }

    #[test]
    fn test_balance_bonus_floors_at_zero_for_wide_spread() {
        // mean 64, std dev ~44
        let wide = scores("100", "100", "10", "100", "10");
        assert_eq!(balance_bonus(&wide), Decimal::ZERO);
    }

    #[test]
    fn test_synergy_pairs_without_all_high() {
        // job/health floor 60 -> 5/100*0.08 = 0.004
        // family/hobby floor 55 -> 0
        // health/sns floor 60 -> 5/100*0.04 = 0.002
        let s = scores("70", "60", "55", "55", "60");
        assert_eq!(synergy_bonus(&s), dec("0.006"));
    }

    #[test]
    fn test_synergy_all_high_bonus() {
        // every pair floor 65 -> 10/100*(0.08+0.06+0.04) = 0.018, plus 0.12
        let s = CategoryScores::uniform(dec("65"));
        assert_eq!(synergy_bonus(&s), dec("0.138"));
    }

    #[test]
    fn test_synergy_at_maximum_scores() {
        // 45/100*0.18 = 0.081, plus 0.12
        let s = CategoryScores::uniform(dec("100"));
        assert_eq!(synergy_bonus(&s), dec("0.201"));
    }

    #[test]
    fn test_one_category_below_threshold_skips_all_high_bonus() {
        let s = scores("65", "65", "65", "65", "64.9");
        assert!(synergy_bonus(&s) < ALL_HIGH_BONUS);
    }

    #[test]
    fn test_calculate_bonuses_records_two_steps() {
        let result = calculate_bonuses(&CategoryScores::uniform(dec("70")), 7);

        assert_eq!(result.balance, dec("0.2"));
        assert_eq!(result.audit_steps.len(), 2);
        assert_eq!(result.audit_steps[0].rule_id, "balance_bonus");
        assert_eq!(result.audit_steps[0].step_number, 7);
        assert_eq!(result.audit_steps[1].rule_id, "synergy_bonus");
        assert_eq!(result.audit_steps[1].step_number, 8);
        assert_eq!(result.audit_steps[1].input["all_high"], true);
    }

    #[test]
    fn test_calculate_bonuses_explains_neutral() {
        let result = calculate_bonuses(&CategoryScores::uniform(dec("55")), 1);

        assert!(result.audit_steps[0].reasoning.contains("No balance bonus"));
        assert!(result.audit_steps[1].reasoning.contains("No synergy bonus"));
        assert_eq!(result.audit_steps[0].output["applied"], false);
    }

    fn score_strategy() -> impl Strategy<Value = Decimal> {
        // every score reachable from half-point ratings, 10 to 100
        (6u32..=60).prop_map(|k| Decimal::from(k * 5) / Decimal::from(3))
    }

    fn scores_strategy() -> impl Strategy<Value = CategoryScores> {
        prop::array::uniform5(score_strategy()).prop_map(|[job, health, family, hobby, sns]| {
            CategoryScores {
                job,
                health,
                family,
                hobby,
                sns,
            }
        })
    }

    proptest! {
        #[test]
        fn prop_synergy_never_exceeds_cap(s in scores_strategy()) {
            let bonus = synergy_bonus(&s);
            prop_assert!(bonus <= MAX_SYNERGY_BONUS);
            prop_assert!(bonus >= Decimal::ZERO);
        }

        #[test]
        fn prop_balance_zero_at_or_below_neutral(s in scores_strategy()) {
            if s.mean() <= NEUTRAL_SCORE {
                prop_assert_eq!(balance_bonus(&s), Decimal::ZERO);
            }
        }

        #[test]
        fn prop_balance_positive_above_neutral_with_moderate_spread(s in scores_strategy()) {
            let std_dev = population_std_dev(&score_values(&s)).unwrap();
            if s.mean() > NEUTRAL_SCORE
                && std_dev > Decimal::ZERO
                && std_dev < BALANCE_MAX_STD_DEV
            {
                prop_assert!(balance_bonus(&s) > Decimal::ZERO);
            }
        }

        #[test]
        fn prop_balance_within_bounds(s in scores_strategy()) {
            let bonus = balance_bonus(&s);
            prop_assert!(bonus >= Decimal::ZERO);
            prop_assert!(bonus <= MAX_BALANCE_BONUS);
        }
    }
}
