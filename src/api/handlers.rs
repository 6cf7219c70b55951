//! HTTP request handlers for the wage engine API.
//!
//! This module contains the handler functions for all API endpoints. Each
//! handler converts the request into engine inputs, calls the engine and
//! renders the result or error as JSON.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_happiness, try_calculate_team_cost, validate_team};
use crate::models::TeamCostData;

use super::request::{HappinessRequest, TeamCostRequest};
use super::response::{ApiError, ApiErrorResponse, ValidationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/happiness", post(happiness_handler))
        .route("/team-cost", post(team_cost_handler))
        .route("/team-cost/validate", post(validate_handler))
        .route("/defaults", get(defaults_handler))
        .with_state(state)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Turns a JSON extraction failure into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

/// Handler for POST /happiness.
async fn happiness_handler(
    State(state): State<AppState>,
    payload: Result<Json<HappinessRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing happiness request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let weights = request
        .weights
        .unwrap_or_else(|| state.config().default_weights().clone());

    match calculate_happiness(
        &request.factors,
        &weights,
        request.base_wage,
        request.target_score,
    ) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                total_score = %result.total_score,
                adjusted_wage = %result.adjusted_wage,
                "Happiness calculation completed successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Happiness calculation refused"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /team-cost.
async fn team_cost_handler(
    payload: Result<Json<TeamCostRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing team cost request");

    let team: TeamCostData = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match try_calculate_team_cost(&team) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                positions = team.positions.len(),
                work_items = team.work_items.len(),
                total_annual_cost = %result.total_annual_cost,
                "Team cost calculation completed successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Team cost calculation refused"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /team-cost/validate.
async fn validate_handler(
    payload: Result<Json<TeamCostRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let team: TeamCostData = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let response: ValidationResponse = validate_team(&team).into();
    info!(
        correlation_id = %correlation_id,
        valid = response.valid,
        findings = response.errors.len(),
        "Validated team"
    );
    json_response(StatusCode::OK, response)
}

/// Handler for GET /defaults.
async fn defaults_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, state.config().presets())
}
