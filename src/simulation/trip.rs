//! The trip simulator: event application and the fixed trip skeleton.

use chrono::{Duration, NaiveDateTime, Timelike, Utc};
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{DutyEvent, DutyStatus, Position, RouteInfo, StopMarker, TripPlan};
use crate::route::RouteProvider;

use super::{
    DutyClock, END_OF_TRIP_OFF_DUTY_MINUTES, PICKUP_DROPOFF_MINUTES, PRE_TRIP_INSPECTION_MINUTES,
    POST_TRIP_INSPECTION_MINUTES, build_daily_logs,
};

/// Remark keywords that identify an event as a stop worth a map marker.
const STOP_REMARK_KEYWORDS: [&str; 6] =
    ["Break", "Reset", "Fuel Stop", "Inspection", "Pickup", "Dropoff"];

/// One trip simulation run.
///
/// Owns every piece of mutable state for the run: the duty clock, the
/// append-only event log, the wall clock, and the tracked position along
/// the route. Created per request and discarded after the plan is built,
/// so no state leaks between runs.
pub struct TripSimulator {
    start_location: String,
    pickup_location: String,
    dropoff_location: String,
    clock: DutyClock,
    events: Vec<DutyEvent>,
    stop_markers: Vec<StopMarker>,
    current_time: NaiveDateTime,
    pub(super) current_position: Option<Position>,
}

impl TripSimulator {
    /// Creates a simulator for the given trip request.
    ///
    /// `cycle_used_hours` is the portion of the 70-hour budget already
    /// consumed before this trip; `start_time` is the wall-clock instant
    /// the log begins at.
    pub fn new(
        start_location: impl Into<String>,
        pickup_location: impl Into<String>,
        dropoff_location: impl Into<String>,
        cycle_used_hours: f64,
        start_time: NaiveDateTime,
    ) -> Self {
        TripSimulator {
            start_location: start_location.into(),
            pickup_location: pickup_location.into(),
            dropoff_location: dropoff_location.into(),
            clock: DutyClock::new(cycle_used_hours),
            events: Vec::new(),
            stop_markers: Vec::new(),
            current_time: start_time,
            current_position: None,
        }
    }

    /// The current wall time, truncated to the minute. Used as the default
    /// log start when the request does not supply one.
    pub fn default_start_time() -> NaiveDateTime {
        let now = Utc::now().naive_utc();
        now.with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(now)
    }

    /// Applies one duty event: appends it to the log, advances the wall
    /// clock, updates the duty counters, and records a stop marker when the
    /// event is a stop at a known position.
    ///
    /// Always valid; the caller is responsible for only proposing durations
    /// that respect the regulatory caps (see [`DutyClock::max_drive_chunk`]).
    pub fn apply_event(
        &mut self,
        status: DutyStatus,
        duration_minutes: i64,
        remarks: impl Into<String>,
    ) {
        let remarks = remarks.into();
        let start_time = self.current_time;
        let end_time = start_time + Duration::minutes(duration_minutes);

        // Stops are identified by keywords in their remarks and pinned at
        // the position reached before the event.
        if status != DutyStatus::Driving {
            if let Some(coords) = self.current_position {
                if STOP_REMARK_KEYWORDS.iter().any(|k| remarks.contains(k)) {
                    self.stop_markers.push(StopMarker {
                        coords,
                        remark: remarks.clone(),
                        time: start_time,
                    });
                }
            }
        }

        self.events.push(DutyEvent {
            status,
            start_time,
            end_time,
            duration_minutes,
            remarks,
        });

        self.current_time = end_time;
        self.clock.record(status, duration_minutes);
    }

    /// Runs the whole trip: route acquisition up front, then the fixed
    /// skeleton of inspections, two drive legs, and pickup/dropoff duty.
    ///
    /// Any provider failure or an exhausted cycle budget aborts the run;
    /// the partial event log stays in the simulator but is never reported.
    pub async fn run(&mut self, provider: &dyn RouteProvider) -> EngineResult<TripPlan> {
        let pickup_name = self.pickup_location.clone();
        let dropoff_name = self.dropoff_location.clone();

        let start_coords = provider.geocode(&self.start_location).await?;
        self.current_position = Some(start_coords);
        let pickup_coords = provider.geocode(&self.pickup_location).await?;
        let dropoff_coords = provider.geocode(&self.dropoff_location).await?;

        let leg1 = provider.route(start_coords, pickup_coords).await?;
        let leg2 = provider.route(pickup_coords, dropoff_coords).await?;
        debug!(
            leg1_minutes = leg1.duration_minutes,
            leg2_minutes = leg2.duration_minutes,
            "Route legs acquired"
        );

        self.apply_event(
            DutyStatus::OnDutyNotDriving,
            PRE_TRIP_INSPECTION_MINUTES,
            "Pre-Trip Inspection",
        );

        if leg1.duration_minutes > 0 {
            self.drive_leg(&leg1, &pickup_name)?;
        }
        self.apply_event(
            DutyStatus::OnDutyNotDriving,
            PICKUP_DROPOFF_MINUTES,
            format!("Pickup at {pickup_name}"),
        );

        if leg2.duration_minutes > 0 {
            self.drive_leg(&leg2, &dropoff_name)?;
        }
        self.apply_event(
            DutyStatus::OnDutyNotDriving,
            PICKUP_DROPOFF_MINUTES,
            format!("Dropoff at {dropoff_name}"),
        );

        self.apply_event(
            DutyStatus::OnDutyNotDriving,
            POST_TRIP_INSPECTION_MINUTES,
            "Post-Trip Inspection",
        );
        self.apply_event(DutyStatus::OffDuty, END_OF_TRIP_OFF_DUTY_MINUTES, "End of Trip");

        let daily_logs = build_daily_logs(&self.events);
        Ok(TripPlan {
            daily_logs,
            route_info: RouteInfo {
                start_coords,
                pickup_coords,
                dropoff_coords,
                leg1_geometry: leg1.geometry,
                leg2_geometry: leg2.geometry,
                stops: self.stop_markers.clone(),
            },
        })
    }

    /// The duty clock of this run.
    pub fn clock(&self) -> &DutyClock {
        &self.clock
    }

    /// Mutable access for the drive loop.
    pub(super) fn clock_mut(&mut self) -> &mut DutyClock {
        &mut self.clock
    }

    /// The events appended so far, in chronological order.
    pub fn events(&self) -> &[DutyEvent] {
        &self.events
    }

    /// The stop markers recorded so far, in chronological order.
    pub fn stop_markers(&self) -> &[StopMarker] {
        &self.stop_markers
    }
}
