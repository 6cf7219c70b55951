//! Team staffing models.
//!
//! This module defines positions, salary data, recurring work items and the
//! [`TeamCostData`] aggregate that the team-cost engine reads.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named staffing role with a headcount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Stable identifier for the position.
    pub id: String,
    /// Display name. Salary entries are keyed by this name.
    pub name: String,
    /// Number of people in the role.
    pub count: u32,
}

impl Position {
    /// Creates a position with a freshly generated id.
    ///
    /// ```
    /// use wage_engine::models::Position;
    ///
    /// let position = Position::new("Leader", 1);
    /// assert_eq!(position.name, "Leader");
    /// assert!(!position.id.is_empty());
    /// ```
    pub fn new(name: impl Into<String>, count: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            count,
        }
    }
}

/// The unit salary amounts are entered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayPeriodKind {
    /// Currency per hour.
    Hourly,
    /// 10,000 currency units per month.
    Monthly,
    /// 10,000 currency units per year.
    Annual,
    /// Any value not recognized when deserializing. Annualizes to zero.
    #[serde(other)]
    Unknown,
}

/// Salary amounts for every position, in the units of one pay period kind.
///
/// Entries are keyed by position *name*. Renaming a position orphans its
/// entry unless [`SalaryData::rename_position`] moves it along.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryData {
    /// The unit every amount is expressed in.
    pub salary_type: PayPeriodKind,
    /// Position name to pay amount.
    #[serde(default)]
    pub positions: HashMap<String, Decimal>,
}

impl SalaryData {
    /// Creates salary data with no entries.
    pub fn new(salary_type: PayPeriodKind) -> Self {
        Self {
            salary_type,
            positions: HashMap::new(),
        }
    }

    /// Returns the amount entered for a position, if any.
    pub fn amount_for(&self, position_name: &str) -> Option<Decimal> {
        self.positions.get(position_name).copied()
    }

    /// Sets the amount for a position, replacing any previous entry.
    pub fn set(&mut self, position_name: impl Into<String>, amount: Decimal) {
        self.positions.insert(position_name.into(), amount);
    }

    /// Moves the entry stored under `old_name` to `new_name`.
    ///
    /// Returns false when there was nothing stored under `old_name`. An
    /// existing entry under `new_name` is overwritten.
    ///
    /// ```
    /// use wage_engine::models::{PayPeriodKind, SalaryData};
    /// use rust_decimal::Decimal;
    ///
    /// let mut salary = SalaryData::new(PayPeriodKind::Monthly);
    /// salary.set("Leader", Decimal::from(55));
    ///
    /// assert!(salary.rename_position("Leader", "Lead"));
    /// assert_eq!(salary.amount_for("Lead"), Some(Decimal::from(55)));
    /// assert_eq!(salary.amount_for("Leader"), None);
    /// ```
    pub fn rename_position(&mut self, old_name: &str, new_name: impl Into<String>) -> bool {
        match self.positions.remove(old_name) {
            Some(amount) => {
                self.positions.insert(new_name.into(), amount);
                true
            }
            None => false,
        }
    }
}

/// How often a work item recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    /// Every day of the year.
    Daily,
    /// Once a week.
    Weekly,
    /// Once a month.
    Monthly,
    /// Once a year.
    Yearly,
}

impl Frequency {
    /// Returns the display label of the frequency.
    pub fn label(self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
            Frequency::Yearly => "Yearly",
        }
    }
}

/// A recurring task that consumes team time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    /// Stable identifier for the work item.
    pub id: String,
    /// Display name.
    pub name: String,
    /// How often the item recurs.
    pub frequency: Frequency,
    /// Hours consumed by one execution.
    pub hours: Decimal,
}

impl WorkItem {
    /// Creates a work item with a freshly generated id.
    pub fn new(name: impl Into<String>, frequency: Frequency, hours: Decimal) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            frequency,
            hours,
        }
    }
}

/// Everything the team-cost engine needs to cost a team.
///
/// Owned by the caller. Engines only ever borrow it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamCostData {
    /// Identifier of this team snapshot.
    pub id: String,
    /// Team name.
    pub name: String,
    /// Staffing roles.
    pub positions: Vec<Position>,
    /// Recurring work items.
    pub work_items: Vec<WorkItem>,
    /// Salaries for the positions.
    pub salary_data: SalaryData,
    /// When the data was first created.
    pub created_at: DateTime<Utc>,
    /// When the data was last edited.
    pub updated_at: DateTime<Utc>,
}

impl TeamCostData {
    /// Creates an empty team.
    pub fn new(name: impl Into<String>, salary_type: PayPeriodKind) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            positions: Vec::new(),
            work_items: Vec::new(),
            salary_data: SalaryData::new(salary_type),
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the data as edited now.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Renames the position with the given id and moves its salary entry to
    /// the new name.
    ///
    /// Returns false when no position has that id.
    pub fn rename_position(&mut self, position_id: &str, new_name: impl Into<String>) -> bool {
        let new_name = new_name.into();
        let Some(position) = self.positions.iter_mut().find(|p| p.id == position_id) else {
            return false;
        };

        let old_name = std::mem::replace(&mut position.name, new_name.clone());
        self.salary_data.rename_position(&old_name, new_name);
        self.touch();
        true
    }
}
