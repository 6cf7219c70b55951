//! Improvement area selection.
//!
//! Picks the categories worth working on, either those furthest below a
//! target score or those below the user's own average. The result is never
//! empty: when nothing qualifies, the single lowest category is returned.
//! Ties keep declaration order.

use rust_decimal::Decimal;

use crate::models::{AuditStep, Category, CategoryScores};

/// How far below the target a category must be to qualify.
pub const TARGET_GAP_THRESHOLD: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Most categories returned when measuring against a target.
pub const MAX_TARGET_AREAS: usize = 3;

/// Most categories returned when measuring against the average.
pub const MAX_BELOW_AVERAGE_AREAS: usize = 2;

fn lowest(scores: &CategoryScores) -> Vec<Category> {
    // min_by_key keeps the first of equal minimums
    scores
        .iter()
        .min_by_key(|(_, score)| *score)
        .map(|(category, _)| vec![category])
        .unwrap_or_default()
}

/// Selects the categories to surface as areas to improve.
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::select_improvement_areas;
/// use wage_engine::models::{Category, CategoryScores};
/// use rust_decimal::Decimal;
///
/// // Flat scores: nothing is below average, so the first lowest is chosen.
/// let scores = CategoryScores::uniform(Decimal::from(60));
/// assert_eq!(select_improvement_areas(&scores, None), vec![Category::Job]);
/// ```
pub fn select_improvement_areas(
    scores: &CategoryScores,
    target_score: Option<Decimal>,
) -> Vec<Category> {
    let selected: Vec<Category> = match target_score {
        Some(target) => {
            let mut gaps: Vec<(Category, Decimal)> = scores
                .iter()
                .map(|(category, score)| (category, target - score))
                .filter(|(_, gap)| *gap > TARGET_GAP_THRESHOLD)
                .collect();
            // sort_by is stable, so equal gaps keep declaration order
            gaps.sort_by(|a, b| b.1.cmp(&a.1));
            gaps.into_iter()
                .take(MAX_TARGET_AREAS)
                .map(|(category, _)| category)
                .collect()
        }
        None => {
            let average = scores.mean();
            let mut below: Vec<(Category, Decimal)> = scores
                .iter()
                .filter(|(_, score)| *score < average)
                .collect();
            below.sort_by(|a, b| a.1.cmp(&b.1));
            below
                .into_iter()
                .take(MAX_BELOW_AVERAGE_AREAS)
                .map(|(category, _)| category)
                .collect()
        }
    };

    if selected.is_empty() {
        lowest(scores)
    } else {
        selected
    }
}

/// Improvement areas, including the audit step.
#[derive(Debug, Clone)]
pub struct ImprovementResult {
    /// Selected categories, most pressing first.
    pub areas: Vec<Category>,
    /// The audit step recording this selection.
    pub audit_step: AuditStep,
}

/// Selects improvement areas and records how they were chosen.
pub fn calculate_improvement_areas(
    scores: &CategoryScores,
    target_score: Option<Decimal>,
    step_number: u32,
) -> ImprovementResult {
    let areas = select_improvement_areas(scores, target_score);
    let names: Vec<&str> = areas.iter().map(|c| c.as_str()).collect();

    let reasoning = match target_score {
        Some(target) => format!(
            "Categories more than {} below target {}, largest gap first: {}",
            TARGET_GAP_THRESHOLD,
            target.normalize(),
            names.join(", ")
        ),
        None => format!(
            "Categories below average {}, lowest first: {}",
            scores.mean().round_dp(2).normalize(),
            names.join(", ")
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "improvement_areas".to_string(),
        rule_name: "Improvement Areas".to_string(),
        input: serde_json::json!({
            "target_score": target_score.map(|t| t.to_string()),
            "mean_score": scores.mean().to_string()
        }),
        output: serde_json::json!({
            "improvement_areas": names
        }),
        reasoning,
    };

    ImprovementResult { areas, audit_step }
}
