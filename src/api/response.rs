use chrono::NaiveDateTime;

/// Response structure for the OpenWeatherMap current-conditions endpoint
/// Represents the JSON structure returned by {base}/weather
#[derive(serde::Deserialize, Debug, Clone)]
pub struct CurrentWeather {
    /// Resolved city name (as spelled by the API, not the query)
    pub name: String,
    /// Temperature and humidity readings
    pub main: Measurements,
    /// Weather conditions; the first entry is the primary one
    pub weather: Vec<Condition>,
}

/// Response structure for the 5-day/3-hour forecast endpoint
/// Represents the JSON structure returned by {base}/forecast
#[derive(serde::Deserialize, Debug, Clone)]
pub struct Forecast {
    /// Ordered forecast feed, typically 8 samples/day over 5 days
    pub list: Vec<ForecastEntry>,
}

/// One timestamped sample of the forecast feed
#[derive(serde::Deserialize, Debug, Clone)]
pub struct ForecastEntry {
    /// Sample timestamp in the form "YYYY-MM-DD HH:MM:SS"
    pub dt_txt: String,
    pub main: Measurements,
    pub weather: Vec<Condition>,
}

/// Temperature and humidity block shared by both endpoints
#[derive(serde::Deserialize, Debug, Clone)]
pub struct Measurements {
    /// Temperature in degrees Celsius (metric units are requested)
    pub temp: f64,
    /// Humidity percentage (0-100)
    pub humidity: i64,
}

/// One weather condition descriptor
#[derive(serde::Deserialize, Debug, Clone)]
pub struct Condition {
    /// Condition group, e.g. "Clouds"
    pub main: String,
    /// Lower-case long description, e.g. "scattered clouds"
    pub description: String,
    /// Icon identifier for the hosted icon set, e.g. "03d"
    pub icon: String,
}

impl ForecastEntry {
    /// Parse the sample timestamp; `None` for a malformed feed entry.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.dt_txt, "%Y-%m-%d %H:%M:%S").ok()
    }
}
