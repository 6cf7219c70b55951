//! Core data models for the wage engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod cost_result;
mod happiness;
mod team;

pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use cost_result::{CostCalculationResult, PositionBreakdown, WorkItemBreakdown};
pub use happiness::{
    Category, CategoryScores, FamilyFactors, HappinessFactors, HappinessResult, HappinessWeights,
    HealthFactors, HobbyFactors, JobFactors, SnsFactors,
};
pub use team::{Frequency, PayPeriodKind, Position, SalaryData, TeamCostData, WorkItem};
