use std::io;
use thiserror::Error;

/// Custom error types for the skycast application
#[derive(Error, Debug)]
pub enum AppError {
    /// Error when the submitted city name is empty after trimming
    #[error("Please enter a city name.")]
    EmptyCity,

    /// Error when the city name contains characters outside letters, whitespace and hyphen
    #[error("Invalid characters in city name.")]
    InvalidCity,

    /// Error when the current-weather endpoint returns a non-success status
    #[error("City not found.")]
    CityNotFound,

    /// Error when the forecast endpoint returns a non-success status
    #[error("Forecast not found.")]
    ForecastNotFound,

    /// Error when a required environment variable is not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    /// Error when a favorite is selected by an index that does not exist
    #[error("No favorite at position {0}")]
    UnknownFavorite(usize),

    /// Wrapper for reqwest errors
    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Wrapper for I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// Wrapper for JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}
