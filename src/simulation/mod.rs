//! The duty-time simulation engine.
//!
//! This module contains the core of the planner: the duty clock that tracks
//! the regulatory counters, the drive-segment simulator that chunks route
//! legs around mandatory breaks and resets, the trip orchestrator that runs
//! the fixed trip skeleton, and the formatter that turns the event log into
//! per-day report sheets.

mod clock;
mod drive;
mod format;
mod trip;

pub use clock::DutyClock;
pub use drive::position_along;
pub use format::build_daily_logs;
pub use trip::TripSimulator;

/// Maximum driving time per day (11 hours), in minutes.
pub const MAX_DAILY_DRIVING_MINUTES: i64 = 11 * 60;

/// Maximum on-duty time per shift (14 hours), in minutes.
pub const MAX_SHIFT_ON_DUTY_MINUTES: i64 = 14 * 60;

/// Driving time allowed before a 30-minute break is due (8 hours), in minutes.
pub const DRIVING_MINUTES_BEFORE_BREAK: i64 = 8 * 60;

/// Length of the mandatory rest break, in minutes.
pub const BREAK_MINUTES: i64 = 30;

/// Off-duty time required to reset the daily driving and on-duty
/// allowances (10 hours), in minutes.
pub const DAILY_RESET_MINUTES: i64 = 10 * 60;

/// The rolling 70-hour/8-day on-duty budget, in minutes.
pub const CYCLE_LIMIT_MINUTES: i64 = 70 * 60;

/// Distance between fuel stops: 1000 miles, in kilometers.
pub const FUEL_STOP_DISTANCE_KM: f64 = 1000.0 * 1.60934;

/// Time spent at a fuel stop, in minutes.
pub const FUEL_STOP_MINUTES: i64 = 30;

/// Time spent on the pre-trip inspection, in minutes.
pub const PRE_TRIP_INSPECTION_MINUTES: i64 = 15;

/// Time spent on the post-trip inspection, in minutes.
pub const POST_TRIP_INSPECTION_MINUTES: i64 = 15;

/// On-duty time spent at the pickup and at the dropoff, in minutes each.
pub const PICKUP_DROPOFF_MINUTES: i64 = 30;

/// Off-duty time appended after the post-trip inspection to close the log.
pub const END_OF_TRIP_OFF_DUTY_MINUTES: i64 = 60;
