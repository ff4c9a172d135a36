//! The externally visible result of a planned trip.

use serde::{Deserialize, Serialize};

use super::{DailyLog, Position, StopMarker};

/// Map-drawing data for the planned trip: endpoint coordinates, the path
/// of both legs, and every stop inserted by the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteInfo {
    /// Geocoded coordinates of the trip start.
    pub start_coords: Position,
    /// Geocoded coordinates of the pickup location.
    pub pickup_coords: Position,
    /// Geocoded coordinates of the dropoff location.
    pub dropoff_coords: Position,
    /// Path geometry of the start-to-pickup leg.
    pub leg1_geometry: Vec<Position>,
    /// Path geometry of the pickup-to-dropoff leg.
    pub leg2_geometry: Vec<Position>,
    /// Stops (breaks, resets, fuel stops, inspections, pickup, dropoff)
    /// in the order they occurred.
    pub stops: Vec<StopMarker>,
}

/// The complete trip plan: per-day duty logs plus route drawing data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    /// One log per calendar day touched by the trip, in first-occurrence order.
    pub daily_logs: Vec<DailyLog>,
    /// Route and stop data for map display.
    pub route_info: RouteInfo,
}
