//! Duty event record.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::DutyStatus;

/// A single entry in the driver's duty log.
///
/// Events are immutable once appended and the append order is the
/// chronological order: no event ever starts before the previous one ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DutyEvent {
    /// The duty status held for the whole interval.
    pub status: DutyStatus,
    /// When the interval started.
    pub start_time: NaiveDateTime,
    /// When the interval ended.
    pub end_time: NaiveDateTime,
    /// Length of the interval in minutes.
    pub duration_minutes: i64,
    /// Free-text annotation ("Pre-Trip Inspection", "30-Min Break", ...).
    pub remarks: String,
}
