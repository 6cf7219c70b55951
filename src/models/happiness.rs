//! Happiness input and result models.
//!
//! Categories are a closed enumeration and every per-category record is a
//! statically-typed struct, so no lookup by category name can ever miss.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::AuditTrace;
use crate::config::{NEUTRAL_RATING, default_weights};

/// One of the five fixed life dimensions that are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Work and career.
    Job,
    /// Physical and mental health.
    Health,
    /// Family and close relationships.
    Family,
    /// Hobbies and leisure.
    Hobby,
    /// Social networking and online life.
    Sns,
}

impl Category {
    /// All categories in declaration order. This order is the tie-break order
    /// wherever categories are ranked.
    pub const ALL: [Category; 5] = [
        Category::Job,
        Category::Health,
        Category::Family,
        Category::Hobby,
        Category::Sns,
    ];

    /// Returns the stable snake_case identifier of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Job => "job",
            Category::Health => "health",
            Category::Family => "family",
            Category::Hobby => "hobby",
            Category::Sns => "sns",
        }
    }

    /// Returns the names of the three sub-factors rated for this category.
    pub fn sub_factor_names(self) -> [&'static str; 3] {
        match self {
            Category::Job => ["satisfaction", "growth", "relationships"],
            Category::Health => ["physical", "mental", "sleep"],
            Category::Family => ["relationship", "time", "support"],
            Category::Hobby => ["time", "fulfillment", "variety"],
            Category::Sns => ["connection", "balance", "positivity"],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn read(rating: Option<Decimal>) -> Decimal {
    rating.unwrap_or(NEUTRAL_RATING)
}

/// Sub-factor ratings for the job category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobFactors {
    /// Satisfaction with the work itself.
    pub satisfaction: Option<Decimal>,
    /// Sense of professional growth.
    pub growth: Option<Decimal>,
    /// Relationships with colleagues.
    pub relationships: Option<Decimal>,
}

impl JobFactors {
    /// Returns the three ratings, unset ones read as neutral.
    pub fn ratings(&self) -> [Decimal; 3] {
        [
            read(self.satisfaction),
            read(self.growth),
            read(self.relationships),
        ]
    }
}

/// Sub-factor ratings for the health category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthFactors {
    /// Physical condition.
    pub physical: Option<Decimal>,
    /// Mental condition.
    pub mental: Option<Decimal>,
    /// Sleep quality.
    pub sleep: Option<Decimal>,
}

impl HealthFactors {
    /// Returns the three ratings, unset ones read as neutral.
    pub fn ratings(&self) -> [Decimal; 3] {
        [read(self.physical), read(self.mental), read(self.sleep)]
    }
}

/// Sub-factor ratings for the family category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FamilyFactors {
    /// Quality of family relationships.
    pub relationship: Option<Decimal>,
    /// Time spent together.
    pub time: Option<Decimal>,
    /// Support received from family.
    pub support: Option<Decimal>,
}

impl FamilyFactors {
    /// Returns the three ratings, unset ones read as neutral.
    pub fn ratings(&self) -> [Decimal; 3] {
        [read(self.relationship), read(self.time), read(self.support)]
    }
}

/// Sub-factor ratings for the hobby category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HobbyFactors {
    /// Time available for hobbies.
    pub time: Option<Decimal>,
    /// Fulfillment gained from hobbies.
    pub fulfillment: Option<Decimal>,
    /// Variety of activities.
    pub variety: Option<Decimal>,
}

impl HobbyFactors {
    /// Returns the three ratings, unset ones read as neutral.
    pub fn ratings(&self) -> [Decimal; 3] {
        [read(self.time), read(self.fulfillment), read(self.variety)]
    }
}

/// Sub-factor ratings for the sns category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnsFactors {
    /// Feeling of connection with others.
    pub connection: Option<Decimal>,
    /// Balance between online and offline life.
    pub balance: Option<Decimal>,
    /// Positivity of the online experience.
    pub positivity: Option<Decimal>,
}

impl SnsFactors {
    /// Returns the three ratings, unset ones read as neutral.
    pub fn ratings(&self) -> [Decimal; 3] {
        [read(self.connection), read(self.balance), read(self.positivity)]
    }
}

/// Ratings for every sub-factor of every category.
///
/// Ratings live in [1, 10] with half-point steps. A sub-factor that was never
/// rated reads as the neutral 5.5, so a default value is always computable.
///
/// # Example
///
/// ```
/// use wage_engine::models::{Category, HappinessFactors};
/// use rust_decimal::Decimal;
///
/// let mut factors = HappinessFactors::default();
/// factors.job.growth = Some(Decimal::from(8));
///
/// let ratings = factors.ratings(Category::Job);
/// assert_eq!(ratings[1], Decimal::from(8));
/// assert_eq!(ratings[0], Decimal::new(55, 1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HappinessFactors {
    /// Job sub-factors.
    pub job: JobFactors,
    /// Health sub-factors.
    pub health: HealthFactors,
    /// Family sub-factors.
    pub family: FamilyFactors,
    /// Hobby sub-factors.
    pub hobby: HobbyFactors,
    /// SNS sub-factors.
    pub sns: SnsFactors,
}

impl HappinessFactors {
    /// Returns the ratings of one category, unset sub-factors read as neutral.
    pub fn ratings(&self, category: Category) -> [Decimal; 3] {
        match category {
            Category::Job => self.job.ratings(),
            Category::Health => self.health.ratings(),
            Category::Family => self.family.ratings(),
            Category::Hobby => self.hobby.ratings(),
            Category::Sns => self.sns.ratings(),
        }
    }

    /// Builds factors where every sub-factor carries the same rating.
    pub fn uniform(rating: Decimal) -> Self {
        let r = Some(rating);
        Self {
            job: JobFactors {
                satisfaction: r,
                growth: r,
                relationships: r,
            },
            health: HealthFactors {
                physical: r,
                mental: r,
                sleep: r,
            },
            family: FamilyFactors {
                relationship: r,
                time: r,
                support: r,
            },
            hobby: HobbyFactors {
                time: r,
                fulfillment: r,
                variety: r,
            },
            sns: SnsFactors {
                connection: r,
                balance: r,
                positivity: r,
            },
        }
    }
}

/// Percentage weight of each category in the total score.
///
/// A valid configuration sums to 100. The engine still divides by the actual
/// sum when it does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HappinessWeights {
    /// Weight of the job category.
    pub job: Decimal,
    /// Weight of the health category.
    pub health: Decimal,
    /// Weight of the family category.
    pub family: Decimal,
    /// Weight of the hobby category.
    pub hobby: Decimal,
    /// Weight of the sns category.
    pub sns: Decimal,
}

impl HappinessWeights {
    /// Returns the weight of a category.
    pub fn get(&self, category: Category) -> Decimal {
        match category {
            Category::Job => self.job,
            Category::Health => self.health,
            Category::Family => self.family,
            Category::Hobby => self.hobby,
            Category::Sns => self.sns,
        }
    }

    /// Returns the sum of all weights.
    pub fn sum(&self) -> Decimal {
        Category::ALL
            .iter()
            .fold(Decimal::ZERO, |acc, c| acc.saturating_add(self.get(*c)))
    }

    /// Returns true when the weights sum to exactly 100.
    ///
    /// ```
    /// use wage_engine::models::HappinessWeights;
    ///
    /// assert!(HappinessWeights::default().is_valid());
    /// ```
    pub fn is_valid(&self) -> bool {
        self.sum() == Decimal::ONE_HUNDRED
    }
}

impl Default for HappinessWeights {
    fn default() -> Self {
        default_weights()
    }
}

/// The 0-100 score of each category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScores {
    /// Job score.
    pub job: Decimal,
    /// Health score.
    pub health: Decimal,
    /// Family score.
    pub family: Decimal,
    /// Hobby score.
    pub hobby: Decimal,
    /// SNS score.
    pub sns: Decimal,
}

impl CategoryScores {
    /// Builds scores with the same value for every category.
    pub fn uniform(score: Decimal) -> Self {
        Self {
            job: score,
            health: score,
            family: score,
            hobby: score,
            sns: score,
        }
    }

    /// Returns the score of a category.
    pub fn get(&self, category: Category) -> Decimal {
        match category {
            Category::Job => self.job,
            Category::Health => self.health,
            Category::Family => self.family,
            Category::Hobby => self.hobby,
            Category::Sns => self.sns,
        }
    }

    /// Iterates over `(category, score)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, Decimal)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// Returns the arithmetic mean of the five scores.
    pub fn mean(&self) -> Decimal {
        let sum = self
            .iter()
            .fold(Decimal::ZERO, |acc, (_, score)| acc.saturating_add(score));
        sum / Decimal::from(Category::ALL.len())
    }
}

/// The complete result of a happiness calculation.
///
/// Bonuses are expressed as percentages here; the engine works with
/// fractions internally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HappinessResult {
    /// Weighted total score.
    pub total_score: Decimal,
    /// Score of each category.
    pub category_scores: CategoryScores,
    /// Base wage multiplied by the happiness multiplier.
    pub adjusted_wage: Decimal,
    /// Percentage change of the adjusted wage over the base wage.
    pub happiness_bonus: Decimal,
    /// The clamped wage multiplier.
    pub multiplier: Decimal,
    /// Balance bonus in percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_bonus: Option<Decimal>,
    /// Synergy bonus in percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synergy_bonus: Option<Decimal>,
    /// The target score improvement areas were measured against, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_score: Option<Decimal>,
    /// Categories to improve, most pressing first.
    pub improvement_areas: Vec<Category>,
    /// Record of every calculation step.
    pub audit_trace: AuditTrace,
}
