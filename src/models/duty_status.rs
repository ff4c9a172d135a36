//! Duty status classification.
//!
//! Every interval of a driver's day belongs to exactly one of the four
//! FMCSA duty statuses. The JSON representation uses the strings printed
//! on a paper log sheet.

use serde::{Deserialize, Serialize};

/// The four mutually exclusive duty statuses of a driver's log.
///
/// # Example
///
/// ```
/// use hos_trip_planner::models::DutyStatus;
///
/// assert_eq!(DutyStatus::Driving.to_string(), "Driving");
/// assert!(DutyStatus::SleeperBerth.is_rest());
/// assert!(DutyStatus::OnDutyNotDriving.counts_against_cycle());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DutyStatus {
    /// Off duty, free of all work responsibility.
    #[serde(rename = "Off Duty")]
    OffDuty,
    /// Resting in the sleeper berth.
    #[serde(rename = "Sleeper Berth")]
    SleeperBerth,
    /// At the wheel of the commercial vehicle.
    #[serde(rename = "Driving")]
    Driving,
    /// Working but not driving (inspections, loading, fueling).
    #[serde(rename = "On Duty (Not Driving)")]
    OnDutyNotDriving,
}

impl DutyStatus {
    /// Whether time in this status consumes the 70-hour cycle budget and
    /// the 14-hour shift window.
    pub fn counts_against_cycle(self) -> bool {
        matches!(self, DutyStatus::Driving | DutyStatus::OnDutyNotDriving)
    }

    /// Whether this status is rest time that can qualify as a break or reset.
    pub fn is_rest(self) -> bool {
        matches!(self, DutyStatus::OffDuty | DutyStatus::SleeperBerth)
    }
}

impl std::fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DutyStatus::OffDuty => write!(f, "Off Duty"),
            DutyStatus::SleeperBerth => write!(f, "Sleeper Berth"),
            DutyStatus::Driving => write!(f, "Driving"),
            DutyStatus::OnDutyNotDriving => write!(f, "On Duty (Not Driving)"),
        }
    }
}
