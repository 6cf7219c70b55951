//! HTTP API module for the wage engine.
//!
//! A thin JSON wrapper around the happiness and team cost engines. The
//! engines themselves stay plain function calls.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{HappinessRequest, PositionRequest, TeamCostRequest, WorkItemRequest};
pub use response::{ApiError, ApiErrorResponse, ValidationResponse};
pub use state::AppState;
