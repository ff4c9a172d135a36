//! Route legs and stop markers.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A map position as `[longitude, latitude]` (GeoJSON coordinate order).
pub type Position = [f64; 2];

/// One origin-to-destination segment of the trip, as produced by the
/// route provider. Read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    /// Total driving time for the leg in minutes.
    pub duration_minutes: i64,
    /// Total driving distance for the leg in kilometers.
    pub distance_km: f64,
    /// Ordered polyline of the leg's path in `[lon, lat]` points.
    pub geometry: Vec<Position>,
}

/// A non-driving waypoint recorded whenever a stop-like event (break,
/// reset, fuel stop, inspection, pickup, dropoff) happens at a known
/// position along the route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopMarker {
    /// Position of the stop in `[lon, lat]`.
    pub coords: Position,
    /// The remark of the event that caused the stop.
    pub remark: String,
    /// When the stop began.
    pub time: NaiveDateTime,
}
