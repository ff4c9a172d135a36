//! The duty clock: the regulatory counters of one simulation run.

use crate::models::DutyStatus;

use super::{
    BREAK_MINUTES, CYCLE_LIMIT_MINUTES, DAILY_RESET_MINUTES, DRIVING_MINUTES_BEFORE_BREAK,
    MAX_DAILY_DRIVING_MINUTES, MAX_SHIFT_ON_DUTY_MINUTES,
};

/// Running Hours-of-Service counters for a single simulation run.
///
/// The clock is a pure state container: it is created once per run, mutated
/// only through [`DutyClock::record`], and never shared across runs. The
/// counters stay within their regulatory caps because the drive-segment
/// simulator caps every driving chunk with [`DutyClock::max_drive_chunk`]
/// before recording it.
#[derive(Debug, Clone, PartialEq)]
pub struct DutyClock {
    /// Minutes left in the rolling 70-hour/8-day cycle budget.
    pub cycle_time_remaining: i64,
    /// Minutes driven since the last 10-hour reset.
    pub daily_driving_time: i64,
    /// On-duty minutes (driving or not) since the last 10-hour reset.
    pub daily_on_duty_time: i64,
    /// Minutes driven since the last qualifying 30-minute break.
    pub drive_time_since_break: i64,
    /// Kilometers driven since the last fuel stop.
    pub distance_since_fuel_stop_km: f64,
}

impl DutyClock {
    /// Creates a fresh clock for a driver who has already used
    /// `cycle_used_hours` of the 70-hour cycle budget.
    pub fn new(cycle_used_hours: f64) -> Self {
        DutyClock {
            cycle_time_remaining: CYCLE_LIMIT_MINUTES - (cycle_used_hours * 60.0).round() as i64,
            daily_driving_time: 0,
            daily_on_duty_time: 0,
            drive_time_since_break: 0,
            distance_since_fuel_stop_km: 0.0,
        }
    }

    /// Applies one duty event of `duration_minutes` in `status` to the counters.
    ///
    /// On-duty time consumes the cycle budget and the 14-hour shift window;
    /// driving additionally consumes the 11-hour and 8-hour driving windows.
    /// Rest of at least 30 minutes clears the break timer; rest of at least
    /// 10 hours clears both daily counters.
    pub fn record(&mut self, status: DutyStatus, duration_minutes: i64) {
        if status.counts_against_cycle() {
            self.cycle_time_remaining -= duration_minutes;
            self.daily_on_duty_time += duration_minutes;
        }

        if status == DutyStatus::Driving {
            self.daily_driving_time += duration_minutes;
            self.drive_time_since_break += duration_minutes;
        }

        if status.is_rest() && duration_minutes >= BREAK_MINUTES {
            self.drive_time_since_break = 0;
        }

        if status.is_rest() && duration_minutes >= DAILY_RESET_MINUTES {
            self.daily_driving_time = 0;
            self.daily_on_duty_time = 0;
        }
    }

    /// The largest driving chunk currently permitted, given the remaining
    /// leg time and every regulatory window.
    ///
    /// A result of zero (or less) means no driving is possible until a
    /// break or reset resolves the binding constraint.
    pub fn max_drive_chunk(&self, remaining_leg_minutes: i64) -> i64 {
        remaining_leg_minutes
            .min(MAX_DAILY_DRIVING_MINUTES - self.daily_driving_time)
            .min(MAX_SHIFT_ON_DUTY_MINUTES - self.daily_on_duty_time)
            .min(DRIVING_MINUTES_BEFORE_BREAK - self.drive_time_since_break)
            .min(self.cycle_time_remaining)
    }

    /// Whether the 11-hour driving cap or the 14-hour shift cap is exhausted,
    /// requiring a full 10-hour reset before any more driving.
    pub fn needs_daily_reset(&self) -> bool {
        self.daily_on_duty_time >= MAX_SHIFT_ON_DUTY_MINUTES
            || self.daily_driving_time >= MAX_DAILY_DRIVING_MINUTES
    }

    /// Whether the 8-hour drive-since-break window is exhausted, requiring
    /// a 30-minute break before any more driving.
    pub fn needs_break(&self) -> bool {
        self.drive_time_since_break >= DRIVING_MINUTES_BEFORE_BREAK
    }
}
