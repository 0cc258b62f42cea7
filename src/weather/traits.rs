use crate::model::{WeatherError, WeatherReport};

#[async_trait::async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, city: &str) -> Result<WeatherReport, WeatherError>;
}
