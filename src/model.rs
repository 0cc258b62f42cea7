// Core structs: Flight, AirlinePolicy, WeatherReport
use serde::Deserialize;
use thiserror::Error;

/// One row of the flight catalog CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct Flight {
    pub flight_number: String,
    pub airline: String,
    pub origin: String,
    pub destination: String,
    /// Free text in `%Y-%m-%d %H:%M`, produced by upstream data entry.
    pub departure: String,
    pub status: String,
}

/// Per-airline policy details, keyed by airline name in the config.
#[derive(Debug, Clone, Deserialize)]
pub struct AirlinePolicy {
    pub check_in: String,
    pub baggage_drop: String,
    pub boarding: String,
    pub contact: String,
}

/// Current conditions at a destination city, as reported by the weather API.
#[derive(Debug, Clone)]
pub struct WeatherReport {
    pub city: String,
    pub temp_c: f64,
    pub description: String,
    pub icon: String,
}

impl WeatherReport {
    pub fn icon_url(&self) -> String {
        format!("http://openweathermap.org/img/wn/{}.png", self.icon)
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    // csv::Error wraps the underlying I/O failures too.
    #[error("failed to load flight catalog: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("weather request failed: {0}")]
    HttpError(String),
    #[error("weather request timed out")]
    Timeout,
    #[error("no weather data for the requested city")]
    NotFound,
    #[error("unexpected weather API response: {0}")]
    InvalidResponse(String),
}
