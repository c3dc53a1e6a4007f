use thiserror::Error;

use crate::price_source::ApiError;

/// Validation errors for user-supplied search parameters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("airport code cannot be empty")]
    EmptyAirportCode,
    #[error("airport code '{value}' must be exactly 3 ASCII letters")]
    InvalidAirportCode { value: String },

    #[error("trip date must be YYYY-MM-DD: '{value}'")]
    InvalidTripDate { value: String },

    #[error("passenger count must be at least 1")]
    NoPassengers,

    #[error("unknown preset '{name}', expected one of: {available}")]
    UnknownPreset { name: String, available: String },
}

/// Top-level error type for flight search operations.
#[derive(Debug, Error)]
pub enum FlightError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
