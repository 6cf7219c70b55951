//! Calculation logic for the wage engine.
//!
//! This module contains the happiness engine (category scoring, balance and
//! synergy bonuses, the wage multiplier and improvement area selection) and
//! the team cost engine (salary normalization, work item annualization,
//! team validation and cost rollups).

mod bonus;
mod category_score;
mod happiness;
mod improvement;
mod salary;
mod stats;
mod team_cost;
mod wage_adjustment;
mod work_item;

pub use bonus::{
    ALL_HIGH_BONUS, ALL_HIGH_THRESHOLD, BALANCE_MAX_STD_DEV, BonusResult, MAX_BALANCE_BONUS,
    MAX_SYNERGY_BONUS, SYNERGY_PAIRS, balance_bonus, calculate_bonuses, synergy_bonus,
};
pub use category_score::{
    CategoryScoringResult, MAX_RATING, MIN_RATING, SCORE_SCALE, category_score, score_categories,
};
pub use happiness::calculate_happiness;
pub use improvement::{
    ImprovementResult, MAX_BELOW_AVERAGE_AREAS, MAX_TARGET_AREAS, TARGET_GAP_THRESHOLD,
    calculate_improvement_areas, select_improvement_areas,
};
pub use salary::{
    HOURS_PER_DAY, MONTHS_PER_YEAR, SALARY_UNIT, WORKING_DAYS_PER_YEAR, to_annual,
    to_hourly_rate, working_hours_per_year,
};
pub use team_cost::{
    average_hourly_rate, calculate_team_cost, try_calculate_team_cost, validate_team,
};
pub use wage_adjustment::{
    HIGH_SCORE_THRESHOLD, MAX_MULTIPLIER, MAX_WEIGHT, MIN_MULTIPLIER, MULTIPLIER_SLOPE,
    SCORE_RANGE_ABOVE_NEUTRAL, STEP_BONUS, VERY_HIGH_SCORE_THRESHOLD, WageAdjustmentResult,
    adjust_wage, total_score, wage_multiplier,
};
pub use work_item::{annual_executions, annual_hours};
