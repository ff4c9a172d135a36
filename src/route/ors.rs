//! openrouteservice client.
//!
//! API documentation: <https://openrouteservice.org/dev/#/api-docs>

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Position, RouteLeg};

use super::RouteProvider;

/// openrouteservice client configuration.
#[derive(Debug, Clone)]
pub struct OrsConfig {
    /// Base URL of the API (default `https://api.openrouteservice.org`).
    pub base_url: String,
    /// API key sent in the `Authorization` header.
    pub api_key: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
}

impl OrsConfig {
    /// Creates a configuration for the public API with the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        OrsConfig {
            base_url: "https://api.openrouteservice.org".to_string(),
            api_key: api_key.into(),
            timeout_seconds: 30,
        }
    }
}

/// Geocoding and directions client for openrouteservice.
pub struct OrsClient {
    client: Client,
    config: OrsConfig,
}

impl OrsClient {
    /// Creates a client with the given configuration.
    ///
    /// Fails if the underlying HTTP client cannot be constructed.
    pub fn new(config: OrsConfig) -> EngineResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(EngineError::external)?;

        Ok(OrsClient { client, config })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> EngineResult<T> {
        let response = self
            .client
            .get(url)
            .header("Authorization", &self.config.api_key)
            .send()
            .await
            .map_err(EngineError::external)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(EngineError::ExternalService {
                message: format!("openrouteservice returned {status}: {body}"),
            });
        }

        response.json::<T>().await.map_err(EngineError::external)
    }
}

#[async_trait]
impl RouteProvider for OrsClient {
    async fn geocode(&self, place_name: &str) -> EngineResult<Position> {
        let url = format!(
            "{}/geocode/search?text={}&size=1",
            self.config.base_url,
            urlencoding::encode(place_name)
        );
        debug!(place_name, "Geocoding location");

        let response: FeatureCollection<GeocodeProperties> = self.get_json(&url).await?;
        let feature = response.features.into_iter().next().ok_or_else(|| {
            EngineError::ExternalService {
                message: format!("no geocoding result for '{place_name}'"),
            }
        })?;

        match feature.geometry.coordinates {
            GeometryCoordinates::Point(position) => Ok(position),
            GeometryCoordinates::Line(_) => Err(EngineError::ExternalService {
                message: format!("unexpected geometry type for '{place_name}'"),
            }),
        }
    }

    async fn route(&self, origin: Position, destination: Position) -> EngineResult<RouteLeg> {
        // The car profile stands in for truck speeds.
        let url = format!(
            "{}/v2/directions/driving-car?start={},{}&end={},{}",
            self.config.base_url, origin[0], origin[1], destination[0], destination[1]
        );
        debug!(?origin, ?destination, "Requesting route");

        let response: FeatureCollection<RouteProperties> = self.get_json(&url).await?;
        let feature =
            response
                .features
                .into_iter()
                .next()
                .ok_or_else(|| EngineError::ExternalService {
                    message: "no route found between the given coordinates".to_string(),
                })?;

        let geometry = match feature.geometry.coordinates {
            GeometryCoordinates::Line(points) => points,
            GeometryCoordinates::Point(point) => vec![point],
        };
        let summary = feature.properties.summary;

        Ok(RouteLeg {
            duration_minutes: (summary.duration / 60.0).round() as i64,
            distance_km: summary.distance / 1000.0,
            geometry,
        })
    }
}

#[derive(Debug, Deserialize)]
struct FeatureCollection<P> {
    features: Vec<Feature<P>>,
}

#[derive(Debug, Deserialize)]
struct Feature<P> {
    properties: P,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    coordinates: GeometryCoordinates,
}

/// GeoJSON coordinates: a single point for geocoding results, a line
/// string for directions.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GeometryCoordinates {
    Point(Position),
    Line(Vec<Position>),
}

#[derive(Debug, Deserialize)]
struct GeocodeProperties {}

#[derive(Debug, Deserialize)]
struct RouteProperties {
    summary: RouteSummary,
}

/// Route totals in openrouteservice units: seconds and meters.
#[derive(Debug, Deserialize)]
struct RouteSummary {
    duration: f64,
    distance: f64,
}
