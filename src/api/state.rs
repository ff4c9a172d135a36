//! Application state for the HOS Trip Planner API.

use std::sync::Arc;

use crate::route::RouteProvider;

/// Shared application state.
///
/// Holds the route provider used by all request handlers. The provider is
/// behind an `Arc` trait object so tests can inject a stub.
#[derive(Clone)]
pub struct AppState {
    route_provider: Arc<dyn RouteProvider>,
}

impl AppState {
    /// Creates a new application state with the given route provider.
    pub fn new(route_provider: Arc<dyn RouteProvider>) -> Self {
        Self { route_provider }
    }

    /// Returns a reference to the route provider.
    pub fn route_provider(&self) -> &dyn RouteProvider {
        self.route_provider.as_ref()
    }
}
