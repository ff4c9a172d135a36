//! HTTP API module for the HOS Trip Planner.
//!
//! This module provides the REST endpoint for planning a trip and
//! producing the daily duty logs.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::PlanTripRequest;
pub use response::ApiError;
pub use state::AppState;
