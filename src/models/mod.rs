//! Core data models for the HOS Trip Planner.
//!
//! This module contains all the domain types used throughout the engine.

mod daily_log;
mod duty_event;
mod duty_status;
mod route_leg;
mod trip_plan;

pub use daily_log::{DailyLog, LogEvent, StatusTotals};
pub use duty_event::DutyEvent;
pub use duty_status::DutyStatus;
pub use route_leg::{Position, RouteLeg, StopMarker};
pub use trip_plan::{RouteInfo, TripPlan};
