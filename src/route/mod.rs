//! Route acquisition: geocoding place names and computing driving routes.
//!
//! The simulation consumes routes through the [`RouteProvider`] trait so the
//! engine can be tested without network access; [`OrsClient`] is the
//! production implementation backed by openrouteservice.

mod ors;

pub use ors::{OrsClient, OrsConfig};

use async_trait::async_trait;

use crate::error::EngineResult;
use crate::models::{Position, RouteLeg};

/// External collaborator that resolves place names and computes routes.
///
/// Both operations are blocking from the simulation's point of view and
/// happen up front, before any duty events are generated. Failures are
/// surfaced as [`crate::error::EngineError::ExternalService`] and abort the
/// run; there is no retry logic anywhere in the core.
#[async_trait]
pub trait RouteProvider: Send + Sync {
    /// Resolves a place name to `[longitude, latitude]`.
    async fn geocode(&self, place_name: &str) -> EngineResult<Position>;

    /// Computes the driving route from `origin` to `destination`.
    async fn route(&self, origin: Position, destination: Position) -> EngineResult<RouteLeg>;
}
