use crate::model::AirlinePolicy;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub weather_api_key: String,
    pub flights_csv: String,
    /// Airline policy details, keyed by airline name as it appears in the
    /// flight catalog.
    pub airlines: HashMap<String, AirlinePolicy>,
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
