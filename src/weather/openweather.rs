use crate::model::{WeatherError, WeatherReport};
use crate::utils::title_case;
use crate::weather::traits::WeatherProvider;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::info;

const API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// One best-effort lookup per render, fixed timeout, no retries.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct OpenWeatherClient {
    client: Client,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .user_agent("FlySmart/0.1")
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap();

        Self { client, api_key }
    }
}

#[async_trait::async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        info!("Fetching weather for {}...", city);
        let response = self
            .client
            .get(API_URL)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    WeatherError::Timeout
                } else {
                    WeatherError::HttpError(e.to_string())
                }
            })?;

        let body: Value = response
            .json()
            .await
            .map_err(|e| WeatherError::InvalidResponse(e.to_string()))?;
        decode_response(city, &body)
    }
}

/// Decodes an OpenWeatherMap current-weather body. The API reports its own
/// status in the `cod` field: 200 as a number on success, an error code as
/// a string otherwise, so anything but the number 200 means "not found".
fn decode_response(city: &str, body: &Value) -> Result<WeatherReport, WeatherError> {
    if body.get("cod").and_then(Value::as_i64) != Some(200) {
        return Err(WeatherError::NotFound);
    }

    let temp_c = body["main"]["temp"]
        .as_f64()
        .ok_or_else(|| WeatherError::InvalidResponse("missing main.temp".into()))?;
    let conditions = &body["weather"][0];
    let description = conditions["description"]
        .as_str()
        .ok_or_else(|| WeatherError::InvalidResponse("missing weather description".into()))?;
    let icon = conditions["icon"].as_str().unwrap_or_default();

    Ok(WeatherReport {
        city: city.to_string(),
        temp_c,
        description: title_case(description),
        icon: icon.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_successful_body() {
        let body = json!({
            "cod": 200,
            "main": { "temp": 17.4, "humidity": 81 },
            "weather": [{ "description": "scattered clouds", "icon": "03d" }]
        });
        let report = decode_response("London", &body).unwrap();
        assert_eq!(report.city, "London");
        assert_eq!(report.temp_c, 17.4);
        assert_eq!(report.description, "Scattered Clouds");
        assert_eq!(report.icon_url(), "http://openweathermap.org/img/wn/03d.png");
    }

    #[test]
    fn string_cod_means_not_found() {
        // The API reports errors with a string code.
        let body = json!({ "cod": "404", "message": "city not found" });
        assert!(matches!(
            decode_response("Atlantis", &body),
            Err(WeatherError::NotFound)
        ));
    }

    #[test]
    fn missing_cod_means_not_found() {
        let body = json!({ "message": "shrug" });
        assert!(matches!(
            decode_response("London", &body),
            Err(WeatherError::NotFound)
        ));
    }

    #[test]
    fn successful_cod_with_missing_fields_is_invalid() {
        let body = json!({ "cod": 200, "weather": [] });
        assert!(matches!(
            decode_response("London", &body),
            Err(WeatherError::InvalidResponse(_))
        ));
    }
}
