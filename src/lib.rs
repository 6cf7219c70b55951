//! Happiness-adjusted wage and team labor cost engines.
//!
//! This crate turns subjective well-being ratings into a happiness-adjusted
//! hourly wage, and organizational staffing inputs (positions, salaries and
//! recurring work items) into an annualized team labor cost. Both engines are
//! pure functions over plain value objects.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
