//! The drive-segment simulator: chunking one route leg around breaks,
//! resets, and fuel stops.

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{DutyStatus, Position, RouteLeg};

use super::trip::TripSimulator;
use super::{BREAK_MINUTES, DAILY_RESET_MINUTES, FUEL_STOP_DISTANCE_KM, FUEL_STOP_MINUTES};

/// Selects the geometry point for a given fraction of elapsed leg time.
///
/// The index is `floor((len - 1) × fraction)` with the fraction clamped to
/// `[0, 1]`, so a leg that is 40% driven maps to the point 40% of the way
/// through the polyline. Geometry with fewer than two points yields a
/// constant position; empty geometry yields `None`.
pub fn position_along(geometry: &[Position], fraction: f64) -> Option<Position> {
    if geometry.is_empty() {
        return None;
    }
    let fraction = fraction.clamp(0.0, 1.0);
    let index = ((geometry.len() - 1) as f64 * fraction).floor() as usize;
    Some(geometry[index.min(geometry.len() - 1)])
}

impl TripSimulator {
    /// Drives one route leg to completion, inserting whatever breaks,
    /// daily resets, and fuel stops the duty clock demands along the way.
    ///
    /// The caller guarantees `leg.duration_minutes > 0`. Fails with
    /// [`EngineError::CycleLimitExceeded`] if the 70-hour budget runs out
    /// while driving remains; that failure is fatal to the run.
    pub(super) fn drive_leg(&mut self, leg: &RouteLeg, destination: &str) -> EngineResult<()> {
        let mut remaining_minutes = leg.duration_minutes;
        let mut driven_this_leg = 0i64;

        while remaining_minutes > 0 {
            if self.clock().cycle_time_remaining <= 0 {
                return Err(EngineError::CycleLimitExceeded);
            }

            let chunk = self.clock().max_drive_chunk(remaining_minutes);
            if chunk <= 0 {
                // The daily/shift caps take precedence over the break cap: a
                // spent 14-hour shift or 11-hour driving window forces a full
                // reset even when a 30-minute break alone would be legal.
                if self.clock().needs_daily_reset() {
                    debug!(destination, "Daily limit reached, inserting 10-hour reset");
                    self.apply_event(
                        DutyStatus::SleeperBerth,
                        DAILY_RESET_MINUTES,
                        "Daily Limit Reset",
                    );
                } else if self.clock().needs_break() {
                    debug!(destination, "8-hour driving window spent, inserting break");
                    self.apply_event(DutyStatus::OffDuty, BREAK_MINUTES, "30-Min Break");
                }
                continue;
            }

            self.apply_event(DutyStatus::Driving, chunk, format!("Driving to {destination}"));

            driven_this_leg += chunk;
            let fraction = driven_this_leg as f64 / leg.duration_minutes as f64;
            if let Some(position) = position_along(&leg.geometry, fraction) {
                self.current_position = Some(position);
            }

            let chunk_distance_km =
                chunk as f64 / leg.duration_minutes as f64 * leg.distance_km;
            self.clock_mut().distance_since_fuel_stop_km += chunk_distance_km;
            if self.clock().distance_since_fuel_stop_km >= FUEL_STOP_DISTANCE_KM {
                debug!(destination, "Fuel threshold reached, inserting fuel stop");
                self.apply_event(DutyStatus::OnDutyNotDriving, FUEL_STOP_MINUTES, "Fuel Stop");
                self.clock_mut().distance_since_fuel_stop_km = 0.0;
            }

            remaining_minutes -= chunk;
        }

        Ok(())
    }
}
