//! Integration tests for the wage engine.
//!
//! This test suite covers:
//! - Happiness engine scenarios from neutral to extreme inputs
//! - Team cost scenarios with the default team and a custom team
//! - Team validation
//! - The HTTP API end to end

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use wage_engine::api::{AppState, create_router};
use wage_engine::calculation::{
    annual_executions, calculate_happiness, calculate_team_cost, to_annual, to_hourly_rate,
    validate_team,
};
use wage_engine::config::{ConfigLoader, default_factors, default_team_data, default_weights};
use wage_engine::error::EngineError;
use wage_engine::models::{
    Category, Frequency, HappinessFactors, PayPeriodKind, Position, TeamCostData, WorkItem,
};

// =============================================================================
// Test Helpers
// =============================================================================

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/defaults").expect("Failed to load config");
    create_router(AppState::new(config))
}

async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn scenario_team() -> TeamCostData {
    let mut team = TeamCostData::new("Scenario", PayPeriodKind::Monthly);
    team.positions = vec![
        Position::new("Leader", 1),
        Position::new("Middle", 2),
        Position::new("Junior", 3),
    ];
    team.salary_data.set("Leader", dec("50"));
    team.salary_data.set("Middle", dec("35"));
    team.salary_data.set("Junior", dec("20"));
    team.work_items = vec![
        WorkItem::new("Weekly sync", Frequency::Weekly, dec("1")),
        WorkItem::new("Monthly report", Frequency::Monthly, dec("4")),
        WorkItem::new("Daily check", Frequency::Daily, dec("0.5")),
    ];
    team
}

// =============================================================================
// Happiness engine
// =============================================================================

#[test]
fn test_all_neutral_input_is_wage_neutral() {
    let result =
        calculate_happiness(&default_factors(), &default_weights(), dec("2000"), None).unwrap();

    assert_eq!(result.total_score, dec("55"));
    assert_eq!(result.balance_bonus, Some(Decimal::ZERO));
    assert_eq!(result.synergy_bonus, Some(Decimal::ZERO));
    assert_eq!(result.multiplier, Decimal::ONE);
    assert_eq!(result.adjusted_wage, dec("2000"));
    assert_eq!(result.happiness_bonus, Decimal::ZERO);
    assert!(!result.improvement_areas.is_empty());
}

#[test]
fn test_mixed_profile_surfaces_weakest_categories() {
    let mut factors = HappinessFactors::uniform(dec("7"));
    factors.health.physical = Some(dec("3"));
    factors.health.mental = Some(dec("4"));
    factors.health.sleep = Some(dec("2"));
    factors.sns.connection = Some(dec("5"));
    factors.sns.balance = Some(dec("5"));
    factors.sns.positivity = Some(dec("5"));

    let result =
        calculate_happiness(&factors, &default_weights(), dec("1500"), None).unwrap();

    assert_eq!(result.category_scores.health, dec("30"));
    assert_eq!(result.category_scores.sns, dec("50"));
    assert_eq!(
        result.improvement_areas,
        vec![Category::Health, Category::Sns]
    );
    // 21 + 7.5 + 14 + 10.5 + 5
    assert_eq!(result.total_score, dec("58"));
}

#[test]
fn test_improvement_areas_never_empty_for_flat_profiles() {
    for rating in ["1", "3.5", "5.5", "8", "10"] {
        let factors = HappinessFactors::uniform(dec(rating));
        let result =
            calculate_happiness(&factors, &default_weights(), dec("1000"), None).unwrap();
        assert_eq!(result.improvement_areas, vec![Category::Job]);
    }
}

#[test]
fn test_multiplier_stays_clamped_at_extremes() {
    let high = calculate_happiness(
        &HappinessFactors::uniform(dec("10")),
        &default_weights(),
        dec("1000"),
        None,
    )
    .unwrap();
    let low = calculate_happiness(
        &HappinessFactors::uniform(dec("1")),
        &default_weights(),
        dec("1000"),
        None,
    )
    .unwrap();

    assert_eq!(high.multiplier, dec("1.8"));
    assert_eq!(low.multiplier, dec("0.6"));
}

// =============================================================================
// Team cost engine
// =============================================================================

#[test]
fn test_salary_normalization_reference_values() {
    assert_eq!(to_annual(dec("3000"), PayPeriodKind::Hourly).unwrap(), dec("6000000"));
    assert_eq!(to_annual(dec("30"), PayPeriodKind::Monthly).unwrap(), dec("3600000"));
    assert_eq!(to_annual(dec("500"), PayPeriodKind::Annual).unwrap(), dec("5000000"));
    assert_eq!(to_hourly_rate(dec("6000000")), dec("3000"));
}

#[test]
fn test_annual_execution_mapping() {
    assert_eq!(annual_executions(Frequency::Daily), dec("365"));
    assert_eq!(annual_executions(Frequency::Weekly), dec("52"));
    assert_eq!(annual_executions(Frequency::Monthly), dec("12"));
    assert_eq!(annual_executions(Frequency::Yearly), dec("1"));
}

#[test]
fn test_default_team_costs_are_positive() {
    let team = default_team_data();
    assert!(validate_team(&team).is_empty());

    let result = calculate_team_cost(&team).unwrap();
    assert!(result.total_annual_cost > Decimal::ZERO);
    assert!(result.total_annual_hours > Decimal::ZERO);
    assert_eq!(
        result.total_monthly_hours,
        result.total_annual_hours / dec("12")
    );
}

#[test]
fn test_end_to_end_scenario() {
    let result = calculate_team_cost(&scenario_team()).unwrap();

    assert_eq!(result.position_breakdown.len(), 3);
    let leader = &result.position_breakdown[0];
    let middle = &result.position_breakdown[1];
    let junior = &result.position_breakdown[2];
    assert!(leader.annual_salary > middle.annual_salary);
    assert!(middle.annual_salary > junior.annual_salary);

    let weekly = &result.work_item_breakdown[0];
    let monthly = &result.work_item_breakdown[1];
    let daily = &result.work_item_breakdown[2];
    assert!(daily.total_annual_hours > weekly.total_annual_hours);
    assert!(daily.total_annual_hours > monthly.total_annual_hours);

    // 52h + 48h + 182.5h
    assert_eq!(result.total_annual_hours, dec("282.5"));
    let summed: Decimal = result
        .work_item_breakdown
        .iter()
        .map(|w| w.total_annual_cost)
        .sum();
    assert_eq!(result.total_annual_cost, summed);
}

#[test]
fn test_oversized_inputs_return_errors_instead_of_panicking() {
    let mut team = scenario_team();
    team.salary_data.salary_type = PayPeriodKind::Annual;
    team.salary_data.set("Leader", dec("10000000000000000000000000"));
    assert!(validate_team(&team).is_empty());
    assert!(matches!(
        calculate_team_cost(&team),
        Err(EngineError::ArithmeticOverflow { .. })
    ));

    let happiness = calculate_happiness(
        &HappinessFactors::uniform(dec("10")),
        &default_weights(),
        Decimal::MAX,
        None,
    );
    assert!(matches!(
        happiness,
        Err(EngineError::ArithmeticOverflow { .. })
    ));
}

#[test]
fn test_empty_team_has_exactly_two_findings() {
    let team = TeamCostData::new("Empty", PayPeriodKind::Monthly);
    let errors = validate_team(&team);

    assert_eq!(errors.len(), 2);
    assert!(errors.contains(&"no positions configured".to_string()));
    assert!(errors.contains(&"no work items configured".to_string()));
}

#[test]
fn test_rename_keeps_team_valid() {
    let mut team = scenario_team();
    let id = team.positions[0].id.clone();

    assert!(team.rename_position(&id, "Lead"));
    assert!(validate_team(&team).is_empty());
}

#[test]
fn test_rename_without_rekey_orphans_salary() {
    let mut team = scenario_team();
    team.positions[0].name = "Lead".to_string();

    assert_eq!(
        validate_team(&team),
        vec!["salary missing for positions: Lead".to_string()]
    );
}

// =============================================================================
// HTTP API
// =============================================================================

#[tokio::test]
async fn test_api_happiness_with_target() {
    let body = json!({
        "factors": {
            "job": { "satisfaction": "9", "growth": "9", "relationships": "9" },
            "hobby": { "time": "3", "fulfillment": "3", "variety": "3" }
        },
        "base_wage": "1800",
        "target_score": "75"
    });

    let (status, result) = post_json(create_router_for_test(), "/happiness", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["target_score"], "75");
    // hobby 30 (gap 45), health/family/sns 55 (gap 20), job 90 (no gap)
    assert_eq!(
        result["improvement_areas"],
        json!(["hobby", "health", "family"])
    );
    assert_eq!(result["audit_trace"]["steps"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_api_happiness_zero_weights() {
    let body = json!({
        "weights": { "job": "0", "health": "0", "family": "0", "hobby": "0", "sns": "0" },
        "base_wage": "1000"
    });

    let (status, result) = post_json(create_router_for_test(), "/happiness", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["code"], "ZERO_WEIGHT_SUM");
}

#[tokio::test]
async fn test_api_team_cost_scenario() {
    let body = json!({
        "name": "Scenario",
        "positions": [
            { "name": "Leader", "count": 1 },
            { "name": "Middle", "count": 2 },
            { "name": "Junior", "count": 3 }
        ],
        "work_items": [
            { "name": "Weekly sync", "frequency": "weekly", "hours": "1" },
            { "name": "Monthly report", "frequency": "monthly", "hours": "4" },
            { "name": "Daily check", "frequency": "daily", "hours": "0.5" }
        ],
        "salary_data": {
            "salary_type": "monthly",
            "positions": { "Leader": "50", "Middle": "35", "Junior": "20" }
        }
    });

    let (status, result) = post_json(create_router_for_test(), "/team-cost", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["position_breakdown"].as_array().unwrap().len(), 3);
    assert_eq!(result["work_item_breakdown"][2]["frequency"], "Daily");
    assert_eq!(dec(result["total_annual_hours"].as_str().unwrap()), dec("282.5"));
}

#[tokio::test]
async fn test_api_unknown_salary_type_is_tolerated() {
    let body = json!({
        "positions": [{ "name": "Leader", "count": 1 }],
        "work_items": [{ "name": "Sync", "frequency": "weekly", "hours": "1" }],
        "salary_data": { "salary_type": "fortnightly", "positions": { "Leader": "50" } }
    });

    let (status, result) = post_json(create_router_for_test(), "/team-cost", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(dec(result["total_annual_cost"].as_str().unwrap()), Decimal::ZERO);
}

#[tokio::test]
async fn test_api_validate_empty_team() {
    let body = json!({ "salary_data": { "salary_type": "monthly" } });

    let (status, result) = post_json(create_router_for_test(), "/team-cost/validate", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["valid"], false);
    assert_eq!(result["errors"].as_array().unwrap().len(), 2);
}
