// Module containing the OpenWeatherMap fetch layer
mod response;

pub use response::{Condition, CurrentWeather, Forecast, ForecastEntry, Measurements};

use futures::future::try_join;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::AppError;

/// Fetches current conditions for a city.
///
/// # Arguments
/// * `client` - Shared HTTP client
/// * `config` - API base and key
/// * `city` - City name as entered by the user
///
/// # Returns
/// * `CurrentWeather` with temperature, humidity and conditions
/// * `AppError::CityNotFound` when the API answers with a non-success status
pub async fn fetch_weather(
    client: &reqwest::Client,
    config: &Config,
    city: &str,
) -> Result<CurrentWeather, AppError> {
    info!("Fetching current weather for city: {}", city);

    let url = format!("{}/weather", config.api_base);
    let response = client
        .get(&url)
        .query(&[("q", city), ("appid", config.api_key.as_str()), ("units", "metric")])
        .send()
        .await?;

    if response.status().is_success() {
        let weather: CurrentWeather = response.json().await?;
        debug!("Current weather fetched successfully: {:?}", weather);
        Ok(weather)
    } else {
        error!("Failed to fetch current weather: {}", response.status());
        Err(AppError::CityNotFound)
    }
}

/// Fetches the 5-day/3-hour forecast feed for a city.
///
/// Same contract as [`fetch_weather`], with non-success statuses mapped
/// to `AppError::ForecastNotFound`.
pub async fn fetch_forecast(
    client: &reqwest::Client,
    config: &Config,
    city: &str,
) -> Result<Forecast, AppError> {
    info!("Fetching forecast for city: {}", city);

    let url = format!("{}/forecast", config.api_base);
    let response = client
        .get(&url)
        .query(&[("q", city), ("appid", config.api_key.as_str()), ("units", "metric")])
        .send()
        .await?;

    if response.status().is_success() {
        let forecast: Forecast = response.json().await?;
        debug!("Forecast fetched successfully: {} samples", forecast.list.len());
        Ok(forecast)
    } else {
        error!("Failed to fetch forecast: {}", response.status());
        Err(AppError::ForecastNotFound)
    }
}

/// Runs both reads of a search concurrently and joins them fail-fast:
/// the pair resolves only when both succeed, and the first failure wins.
/// No retry, no timeout, no caching of responses.
pub async fn fetch_both(
    client: &reqwest::Client,
    config: &Config,
    city: &str,
) -> Result<(CurrentWeather, Forecast), AppError> {
    try_join(
        fetch_weather(client, config, city),
        fetch_forecast(client, config, city),
    )
    .await
}
