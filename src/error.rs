//! Error types for the HOS Trip Planner.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while planning a trip.

use thiserror::Error;

/// The main error type for the trip planning engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use hos_trip_planner::error::EngineError;
///
/// let error = EngineError::CycleLimitExceeded;
/// assert_eq!(error.to_string(), "Trip not possible. 70-hour cycle limit reached.");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A request field was missing, malformed, or out of range.
    #[error("Invalid field '{field}': {message}")]
    InvalidRequest {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A geocoding or routing call to the external route service failed.
    #[error("Route service error: {message}")]
    ExternalService {
        /// A description of the upstream failure.
        message: String,
    },

    /// The driver's 70-hour/8-day cycle budget ran out before the trip
    /// could be completed. Fatal to the simulation run.
    #[error("Trip not possible. 70-hour cycle limit reached.")]
    CycleLimitExceeded,
}

impl EngineError {
    /// Creates an external-service error from any displayable cause.
    pub fn external(cause: impl std::fmt::Display) -> Self {
        EngineError::ExternalService {
            message: cause.to_string(),
        }
    }

    /// Creates an invalid-request error for the given field.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidRequest {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
