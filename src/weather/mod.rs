// Weather module: provider trait plus the OpenWeatherMap implementation.

pub mod openweather;
pub mod traits;

pub use openweather::OpenWeatherClient;
pub use traits::WeatherProvider;
