//! End-to-end tests for the HOS Trip Planner.
//!
//! These tests drive the axum router (and, where the duty clock must be
//! inspected, the trip simulator directly) against a stub route provider:
//! - the baseline trip with no HOS limit triggered
//! - the 30-minute break inserted after 8 hours of driving
//! - the immediate failure when the 70-hour cycle is already spent
//! - fuel stops, daily resets, and multi-day log grouping
//! - validation and provider-failure error mapping

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::{Value, json};
use tower::ServiceExt;

use hos_trip_planner::api::{AppState, create_router};
use hos_trip_planner::error::{EngineError, EngineResult};
use hos_trip_planner::models::{DutyStatus, Position, RouteLeg, TripPlan};
use hos_trip_planner::route::RouteProvider;
use hos_trip_planner::simulation::TripSimulator;

// =============================================================================
// Test Helpers
// =============================================================================

const START: Position = [-87.65, 41.85]; // Chicago, IL
const PICKUP: Position = [-87.35, 41.6]; // Gary, IN
const DROPOFF: Position = [-83.05, 42.33]; // Detroit, MI

/// Stub provider with a fixed leg per origin coordinate.
struct StubProvider {
    leg1: RouteLeg,
    leg2: RouteLeg,
}

impl StubProvider {
    fn new(leg1: RouteLeg, leg2: RouteLeg) -> Self {
        StubProvider { leg1, leg2 }
    }
}

#[async_trait]
impl RouteProvider for StubProvider {
    async fn geocode(&self, place_name: &str) -> EngineResult<Position> {
        match place_name {
            "Chicago, IL" => Ok(START),
            "Gary, IN" => Ok(PICKUP),
            "Detroit, MI" => Ok(DROPOFF),
            other => Err(EngineError::external(format!("unknown place '{other}'"))),
        }
    }

    async fn route(&self, origin: Position, _destination: Position) -> EngineResult<RouteLeg> {
        if origin == START {
            Ok(self.leg1.clone())
        } else {
            Ok(self.leg2.clone())
        }
    }
}

/// Provider whose routing call always fails.
struct BrokenRouting;

#[async_trait]
impl RouteProvider for BrokenRouting {
    async fn geocode(&self, _place_name: &str) -> EngineResult<Position> {
        Ok(START)
    }

    async fn route(&self, _origin: Position, _destination: Position) -> EngineResult<RouteLeg> {
        Err(EngineError::external("directions request timed out"))
    }
}

fn leg(duration_minutes: i64, distance_km: f64, points: usize) -> RouteLeg {
    let geometry = (0..points.max(2))
        .map(|i| [-87.0 + i as f64 * 0.2, 41.5 + i as f64 * 0.05])
        .collect();
    RouteLeg {
        duration_minutes,
        distance_km,
        geometry,
    }
}

fn start_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 2)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

fn simulator(cycle_used_hours: f64) -> TripSimulator {
    TripSimulator::new(
        "Chicago, IL",
        "Gary, IN",
        "Detroit, MI",
        cycle_used_hours,
        start_time(),
    )
}

fn router_with(provider: impl RouteProvider + 'static) -> Router {
    create_router(AppState::new(Arc::new(provider)))
}

fn request_body(cycle_used_hours: f64) -> Value {
    json!({
        "start_location": "Chicago, IL",
        "pickup_location": "Gary, IN",
        "dropoff_location": "Detroit, MI",
        "cycle_used_hours": cycle_used_hours,
        "start_time": "2026-03-02T08:00:00"
    })
}

async fn post_plan_trip(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/plan-trip")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

fn event_summaries(sim: &TripSimulator) -> Vec<(DutyStatus, i64, String)> {
    sim.events()
        .iter()
        .map(|e| (e.status, e.duration_minutes, e.remarks.clone()))
        .collect()
}

// =============================================================================
// Baseline trip: two short legs, no HOS limit triggered
// =============================================================================

#[tokio::test]
async fn test_baseline_trip_event_sequence_and_cycle_budget() {
    let provider = StubProvider::new(leg(100, 80.0, 5), leg(100, 80.0, 5));
    let mut sim = simulator(0.0);
    let plan = sim.run(&provider).await.unwrap();

    assert_eq!(
        event_summaries(&sim),
        vec![
            (DutyStatus::OnDutyNotDriving, 15, "Pre-Trip Inspection".to_string()),
            (DutyStatus::Driving, 100, "Driving to Gary, IN".to_string()),
            (DutyStatus::OnDutyNotDriving, 30, "Pickup at Gary, IN".to_string()),
            (DutyStatus::Driving, 100, "Driving to Detroit, MI".to_string()),
            (DutyStatus::OnDutyNotDriving, 30, "Dropoff at Detroit, MI".to_string()),
            (DutyStatus::OnDutyNotDriving, 15, "Post-Trip Inspection".to_string()),
            (DutyStatus::OffDuty, 60, "End of Trip".to_string()),
        ]
    );

    // 290 on-duty minutes consumed from the 4200-minute budget.
    assert_eq!(sim.clock().cycle_time_remaining, 3910);

    // The whole trip fits in one day.
    assert_eq!(plan.daily_logs.len(), 1);
    assert_eq!(plan.daily_logs[0].date, "03-02-2026");
}

#[tokio::test]
async fn test_baseline_trip_through_the_api() {
    let provider = StubProvider::new(leg(100, 80.0, 5), leg(100, 80.0, 5));
    let (status, body) = post_plan_trip(router_with(provider), request_body(0.0)).await;

    assert_eq!(status, StatusCode::OK);
    let plan: TripPlan = serde_json::from_value(body.clone()).unwrap();

    assert_eq!(plan.route_info.start_coords, START);
    assert_eq!(plan.route_info.pickup_coords, PICKUP);
    assert_eq!(plan.route_info.dropoff_coords, DROPOFF);
    assert_eq!(plan.route_info.leg1_geometry.len(), 5);

    // Pickup and dropoff duty produce map markers at the current position.
    let remarks: Vec<&str> = plan.route_info.stops.iter().map(|s| s.remark.as_str()).collect();
    assert!(remarks.contains(&"Pickup at Gary, IN"));
    assert!(remarks.contains(&"Dropoff at Detroit, MI"));

    // Totals serialize under the log-sheet status names.
    let totals = &body["daily_logs"][0]["totals"];
    assert!(totals.get("Driving").is_some());
    assert!(totals.get("On Duty (Not Driving)").is_some());
}

// =============================================================================
// 30-minute break after 8 hours of driving
// =============================================================================

#[tokio::test]
async fn test_break_inserted_after_eight_hours_within_a_leg() {
    // A single 600-minute leg; the second leg is negligible.
    let provider = StubProvider::new(leg(600, 500.0, 20), leg(10, 8.0, 2));
    let mut sim = simulator(0.0);
    sim.run(&provider).await.unwrap();

    let events = event_summaries(&sim);
    assert_eq!(
        events[1..4],
        [
            (DutyStatus::Driving, 480, "Driving to Gary, IN".to_string()),
            (DutyStatus::OffDuty, 30, "30-Min Break".to_string()),
            (DutyStatus::Driving, 120, "Driving to Gary, IN".to_string()),
        ]
    );

    // Exactly one break in the whole run.
    let breaks = events.iter().filter(|e| e.2 == "30-Min Break").count();
    assert_eq!(breaks, 1);
}

// =============================================================================
// Cycle limit exhausted
// =============================================================================

#[tokio::test]
async fn test_spent_cycle_fails_before_any_driving() {
    let provider = StubProvider::new(leg(100, 80.0, 5), leg(100, 80.0, 5));
    let mut sim = simulator(70.0);
    let err = sim.run(&provider).await.unwrap_err();

    assert!(matches!(err, EngineError::CycleLimitExceeded));
    assert!(
        sim.events().iter().all(|e| e.status != DutyStatus::Driving),
        "no driving event may be appended once the cycle is spent"
    );
}

#[tokio::test]
async fn test_spent_cycle_maps_to_422_with_regulatory_message() {
    let provider = StubProvider::new(leg(100, 80.0, 5), leg(100, 80.0, 5));
    let (status, body) = post_plan_trip(router_with(provider), request_body(70.0)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "TRIP_INFEASIBLE");
    assert_eq!(body["message"], "Trip not possible. 70-hour cycle limit reached.");
}

// =============================================================================
// Fuel stops
// =============================================================================

#[tokio::test]
async fn test_fuel_stop_inserted_past_thousand_miles() {
    // 1700 km in one leg crosses the 1609.34 km threshold.
    let provider = StubProvider::new(leg(600, 1700.0, 30), leg(10, 8.0, 2));
    let mut sim = simulator(0.0);
    let plan = sim.run(&provider).await.unwrap();

    let events = event_summaries(&sim);
    let fuel_stops: Vec<_> = events.iter().filter(|e| e.2 == "Fuel Stop").collect();
    assert_eq!(fuel_stops.len(), 1);
    assert_eq!(fuel_stops[0].0, DutyStatus::OnDutyNotDriving);
    assert_eq!(fuel_stops[0].1, 30);

    // The fuel stop appears as a map marker too.
    assert!(plan.route_info.stops.iter().any(|s| s.remark == "Fuel Stop"));
}

// =============================================================================
// Daily reset and multi-day grouping
// =============================================================================

#[tokio::test]
async fn test_long_trip_spans_days_with_sleeper_resets() {
    // 22 hours of driving needs a 10-hour reset and several 30-min breaks.
    let provider = StubProvider::new(leg(660, 500.0, 20), leg(660, 500.0, 20));
    let (status, body) = post_plan_trip(router_with(provider), request_body(0.0)).await;

    assert_eq!(status, StatusCode::OK);
    let plan: TripPlan = serde_json::from_value(body).unwrap();

    assert!(plan.daily_logs.len() >= 2, "trip must span multiple days");
    assert_eq!(plan.daily_logs[0].date, "03-02-2026");
    assert_eq!(plan.daily_logs[1].date, "03-03-2026");

    let reset_markers = plan
        .route_info
        .stops
        .iter()
        .filter(|s| s.remark == "Daily Limit Reset")
        .count();
    assert!(reset_markers >= 1);
}

#[tokio::test]
async fn test_midnight_spanning_event_attributed_to_start_day() {
    // Start at 23:00 with a 2-hour leg: the driving chunk crosses midnight
    // but belongs wholly to March 2nd.
    let provider = StubProvider::new(leg(120, 100.0, 5), leg(10, 8.0, 2));
    let body = json!({
        "start_location": "Chicago, IL",
        "pickup_location": "Gary, IN",
        "dropoff_location": "Detroit, MI",
        "cycle_used_hours": 0.0,
        "start_time": "2026-03-02T23:00:00"
    });
    let (status, body) = post_plan_trip(router_with(provider), body).await;

    assert_eq!(status, StatusCode::OK);
    let plan: TripPlan = serde_json::from_value(body).unwrap();

    let day1 = &plan.daily_logs[0];
    assert_eq!(day1.date, "03-02-2026");
    let driving = day1
        .events
        .iter()
        .find(|e| e.remarks == "Driving to Gary, IN")
        .unwrap();
    assert_eq!(driving.start_minutes, 23 * 60 + 15);
    assert_eq!(driving.duration_minutes, 120);
}

// =============================================================================
// Error mapping at the boundary
// =============================================================================

#[tokio::test]
async fn test_routing_failure_maps_to_502() {
    let (status, body) = post_plan_trip(router_with(BrokenRouting), request_body(0.0)).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "ROUTE_SERVICE_ERROR");
    assert_eq!(body["details"], "directions request timed out");
}

#[tokio::test]
async fn test_validation_rejects_out_of_range_cycle_hours() {
    let provider = StubProvider::new(leg(100, 80.0, 5), leg(100, 80.0, 5));
    let (status, body) = post_plan_trip(router_with(provider), request_body(70.1)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["message"].as_str().unwrap().contains("cycle_used_hours"));
}

#[tokio::test]
async fn test_validation_rejects_blank_location() {
    let provider = StubProvider::new(leg(100, 80.0, 5), leg(100, 80.0, 5));
    let body = json!({
        "start_location": "",
        "pickup_location": "Gary, IN",
        "dropoff_location": "Detroit, MI",
        "cycle_used_hours": 0.0
    });
    let (status, body) = post_plan_trip(router_with(provider), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["message"].as_str().unwrap().contains("start_location"));
}
