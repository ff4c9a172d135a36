//! Request types for the HOS Trip Planner API.
//!
//! This module defines the JSON request structure for the `/plan-trip`
//! endpoint and its field validation.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Request body for the `/plan-trip` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanTripRequest {
    /// Where the driver currently is.
    pub start_location: String,
    /// Where the load is picked up.
    pub pickup_location: String,
    /// Where the load is dropped off.
    pub dropoff_location: String,
    /// Hours of the 70-hour/8-day cycle already used, in `[0, 70]`.
    pub cycle_used_hours: f64,
    /// Optional log start; defaults to now, truncated to the minute.
    #[serde(default)]
    pub start_time: Option<NaiveDateTime>,
}

impl PlanTripRequest {
    /// Validates the request fields before the simulation runs.
    pub fn validate(&self) -> EngineResult<()> {
        for (field, value) in [
            ("start_location", &self.start_location),
            ("pickup_location", &self.pickup_location),
            ("dropoff_location", &self.dropoff_location),
        ] {
            if value.trim().is_empty() {
                return Err(EngineError::invalid(field, "must not be empty"));
            }
        }

        if !self.cycle_used_hours.is_finite() {
            return Err(EngineError::invalid("cycle_used_hours", "must be a finite number"));
        }
        if !(0.0..=70.0).contains(&self.cycle_used_hours) {
            return Err(EngineError::invalid(
                "cycle_used_hours",
                "must be between 0 and 70",
            ));
        }

        Ok(())
    }
}
