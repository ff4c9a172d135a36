//! Per-day log views derived from the event log.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DutyStatus;

/// One event as it appears on a daily log sheet: offset from midnight
/// rather than an absolute timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEvent {
    /// The duty status of the interval.
    pub status: DutyStatus,
    /// Minutes from the day's midnight to the event start.
    pub start_minutes: i64,
    /// Length of the interval in minutes.
    pub duration_minutes: i64,
    /// Free-text annotation carried over from the duty event.
    pub remarks: String,
}

/// Per-status hour totals for one day, rounded to 2 decimal places.
///
/// Serialized with the log-sheet status strings as keys, matching the
/// wire format of the daily log report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusTotals {
    /// Hours spent off duty.
    #[serde(rename = "Off Duty")]
    pub off_duty: Decimal,
    /// Hours spent in the sleeper berth.
    #[serde(rename = "Sleeper Berth")]
    pub sleeper_berth: Decimal,
    /// Hours spent driving.
    #[serde(rename = "Driving")]
    pub driving: Decimal,
    /// Hours spent on duty but not driving.
    #[serde(rename = "On Duty (Not Driving)")]
    pub on_duty_not_driving: Decimal,
}

impl StatusTotals {
    /// Converts per-status minute totals to hours rounded to 2 decimals.
    pub fn from_minutes(
        off_duty: i64,
        sleeper_berth: i64,
        driving: i64,
        on_duty_not_driving: i64,
    ) -> Self {
        StatusTotals {
            off_duty: minutes_to_hours(off_duty),
            sleeper_berth: minutes_to_hours(sleeper_berth),
            driving: minutes_to_hours(driving),
            on_duty_not_driving: minutes_to_hours(on_duty_not_driving),
        }
    }
}

fn minutes_to_hours(minutes: i64) -> Decimal {
    (Decimal::from(minutes) / Decimal::from(60)).round_dp(2)
}

/// All events and totals for one calendar day of the trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLog {
    /// The day in `MM-DD-YYYY` form.
    pub date: String,
    /// Events attributed to this day, in chronological order.
    pub events: Vec<LogEvent>,
    /// Hour totals per duty status.
    pub totals: StatusTotals,
}
