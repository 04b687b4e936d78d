use std::env;
use std::path::PathBuf;

use crate::error::AppError;

/// Production OpenWeatherMap API base
const DEFAULT_API_BASE: &str = "https://api.openweathermap.org/data/2.5";

/// Settings the fetch layer needs for every request. The base URL is a
/// field rather than a constant so tests can point the client at a mock
/// server.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: String,
    pub api_key: String,
}

impl Config {
    /// Read the API key from the `OPENWEATHER_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, AppError> {
        let api_key = env::var("OPENWEATHER_API_KEY")
            .map_err(|_| AppError::EnvVarNotSet("OPENWEATHER_API_KEY".to_string()))?;

        Ok(Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_key,
        })
    }
}

/// Location of the persisted favorites list. Falls back to the working
/// directory on platforms without a user config directory.
pub fn favorites_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("skycast")
        .join("favorites.json")
}
