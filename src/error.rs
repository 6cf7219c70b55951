//! Error types for the wage engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every precondition the engines refuse to compute through.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::Category;

/// The main error type for the wage engine.
///
/// # Example
///
/// ```
/// use wage_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/scoring.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/scoring.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The base wage was zero or negative.
    #[error("Base wage must be greater than zero, got {wage}")]
    InvalidBaseWage {
        /// The rejected base wage.
        wage: Decimal,
    },

    /// The category weights sum to zero, so no weighted average exists.
    #[error("Category weights sum to zero")]
    ZeroWeightSum,

    /// A category was scored without any sub-factor ratings.
    #[error("Category '{category}' has no ratings to score")]
    EmptyCategory {
        /// The category that had no ratings.
        category: Category,
    },

    /// A sub-factor rating fell outside the rating scale.
    #[error("Rating {rating} for category '{category}' is outside the 1 to 10 scale")]
    RatingOutOfRange {
        /// The category the rating belongs to.
        category: Category,
        /// The rejected rating.
        rating: Decimal,
    },

    /// A category weight was negative or above 100.
    #[error("Weight {weight} for category '{category}' must be between 0 and 100")]
    WeightOutOfRange {
        /// The category the weight belongs to.
        category: Category,
        /// The rejected weight.
        weight: Decimal,
    },

    /// An amount was too large to calculate with.
    #[error("Arithmetic overflow while calculating {operation}")]
    ArithmeticOverflow {
        /// The quantity being calculated.
        operation: &'static str,
    },

    /// The team failed validation and cannot be costed.
    #[error("Invalid team: {}", messages.join("; "))]
    InvalidTeam {
        /// Every validation finding for the team.
        messages: Vec<String>,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/team.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/team.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_base_wage_displays_wage() {
        let error = EngineError::InvalidBaseWage {
            wage: Decimal::new(-150, 1),
        };
        assert_eq!(
            error.to_string(),
            "Base wage must be greater than zero, got -15.0"
        );
    }

    #[test]
    fn test_zero_weight_sum_display() {
        assert_eq!(
            EngineError::ZeroWeightSum.to_string(),
            "Category weights sum to zero"
        );
    }

    #[test]
    fn test_empty_category_displays_category() {
        let error = EngineError::EmptyCategory {
            category: Category::Hobby,
        };
        assert_eq!(error.to_string(), "Category 'hobby' has no ratings to score");
    }

    #[test]
    fn test_rating_out_of_range_displays_rating() {
        let error = EngineError::RatingOutOfRange {
            category: Category::Job,
            rating: Decimal::from(11),
        };
        assert_eq!(
            error.to_string(),
            "Rating 11 for category 'job' is outside the 1 to 10 scale"
        );
    }

    #[test]
    fn test_arithmetic_overflow_displays_operation() {
        let error = EngineError::ArithmeticOverflow {
            operation: "annual salary",
        };
        assert_eq!(
            error.to_string(),
            "Arithmetic overflow while calculating annual salary"
        );
    }

    #[test]
    fn test_invalid_team_joins_messages() {
        let error = EngineError::InvalidTeam {
            messages: vec![
                "no positions configured".to_string(),
                "no work items configured".to_string(),
            ],
        };
        assert_eq!(
            error.to_string(),
            "Invalid team: no positions configured; no work items configured"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_zero_weight_sum() -> EngineResult<()> {
            Err(EngineError::ZeroWeightSum)
        }

        fn propagates_error() -> EngineResult<()> {
            returns_zero_weight_sum()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
