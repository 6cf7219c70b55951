//! Category scoring.
//!
//! A category's score is the mean of its sub-factor ratings scaled by 10, so
//! ratings in [1, 10] map onto scores in [10, 100].

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, Category, CategoryScores, HappinessFactors};

use super::stats::mean;

/// Factor applied to the mean rating to produce a score.
pub const SCORE_SCALE: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Lowest accepted sub-factor rating.
pub const MIN_RATING: Decimal = Decimal::from_parts(1, 0, 0, false, 0);

/// Highest accepted sub-factor rating.
pub const MAX_RATING: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Scores one category from its ratings.
///
/// Returns `EmptyCategory` when `ratings` is empty and `RatingOutOfRange`
/// when a rating falls outside [`MIN_RATING`]..=[`MAX_RATING`].
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::category_score;
/// use wage_engine::models::Category;
/// use rust_decimal::Decimal;
///
/// let ratings = [Decimal::new(55, 1); 3];
/// assert_eq!(category_score(Category::Job, &ratings).unwrap(), Decimal::from(55));
/// ```
pub fn category_score(category: Category, ratings: &[Decimal]) -> EngineResult<Decimal> {
    if let Some(rating) = ratings
        .iter()
        .find(|r| !(MIN_RATING..=MAX_RATING).contains(*r))
    {
        return Err(EngineError::RatingOutOfRange {
            category,
            rating: *rating,
        });
    }

    mean(ratings)
        .map(|m| m * SCORE_SCALE)
        .ok_or(EngineError::EmptyCategory { category })
}

/// The scores of all five categories, including audit steps.
#[derive(Debug, Clone)]
pub struct CategoryScoringResult {
    /// The score of every category.
    pub scores: CategoryScores,
    /// One audit step per category, in declaration order.
    pub audit_steps: Vec<AuditStep>,
}

/// Scores every category of `factors`, reading unset sub-factors as neutral.
pub fn score_categories(
    factors: &HappinessFactors,
    first_step_number: u32,
) -> EngineResult<CategoryScoringResult> {
    let mut scores = CategoryScores::uniform(Decimal::ZERO);
    let mut audit_steps = Vec::with_capacity(Category::ALL.len());

    for (step_number, category) in (first_step_number..).zip(Category::ALL) {
        let ratings = factors.ratings(category);
        let score = category_score(category, &ratings)?;

        match category {
            Category::Job => scores.job = score,
            Category::Health => scores.health = score,
            Category::Family => scores.family = score,
            Category::Hobby => scores.hobby = score,
            Category::Sns => scores.sns = score,
        }

        let names = category.sub_factor_names();
        audit_steps.push(AuditStep {
            step_number,
            rule_id: "category_score".to_string(),
            rule_name: "Category Score".to_string(),
            input: serde_json::json!({
                "category": category.as_str(),
                (names[0]): ratings[0].to_string(),
                (names[1]): ratings[1].to_string(),
                (names[2]): ratings[2].to_string(),
            }),
            output: serde_json::json!({
                "score": score.normalize().to_string()
            }),
            reasoning: format!(
                "{}: mean of ({}, {}, {}) x {} = {}",
                category,
                ratings[0],
                ratings[1],
                ratings[2],
                SCORE_SCALE,
                score.round_dp(2).normalize()
            ),
        });
    }

    Ok(CategoryScoringResult {
        scores,
        audit_steps,
    })
}
