mod catalog;
mod config;
mod dashboard;
mod model;
mod normalizer;
mod utils;
mod weather;

use catalog::FlightCatalog;
use clap::Parser;
use config::load_config;
use dashboard::{
    airline_info, countdown, flight_summary, no_city_advisory, position_section,
    simulated_position, weather_section,
};
use normalizer::normalize_city;
use tracing::{error, info, warn};
use weather::{OpenWeatherClient, WeatherProvider};

/// Flight-information dashboard: finds a flight in the catalog and shows
/// its summary, countdown, airline policy, simulated position and live
/// destination weather.
#[derive(Parser, Debug)]
#[command(name = "flysmart", version)]
struct Args {
    /// Flight number or airline to search for (e.g. BA102 or Emirates).
    query: String,

    /// Path to the configuration file.
    #[arg(long, default_value = "config.json")]
    config: String,
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    // Load configuration from file
    let config = match load_config(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    let catalog = match FlightCatalog::load(&config.flights_csv) {
        Ok(c) => c,
        Err(e) => {
            error!("Catalog load error: {}", e);
            return;
        }
    };

    // Exact flight-number hit wins; otherwise take the top search match.
    let flight = match catalog.get(&args.query) {
        Some(f) => f,
        None => {
            let matches = catalog.search(&args.query);
            let Some(&first) = matches.first() else {
                warn!("❌ No flights found for \"{}\". Try another query.", args.query);
                return;
            };
            if matches.len() > 1 {
                let others: Vec<&str> = matches[1..]
                    .iter()
                    .map(|f| f.flight_number.as_str())
                    .collect();
                info!("Other matches: {}", others.join(", "));
            }
            first
        }
    };
    info!("✅ Showing details for flight {}", flight.flight_number);

    println!("{}\n", flight_summary(flight));
    println!("{}\n", countdown(flight, chrono::Local::now().naive_local()));
    println!(
        "{}\n",
        airline_info(&flight.airline, config.airlines.get(&flight.airline))
    );
    let (lat, lon) = simulated_position();
    println!("{}\n", position_section(lat, lon));

    // Weather at the destination, via the normalized city name.
    let city = normalize_city(&flight.destination);
    if city.is_empty() {
        println!("{}", no_city_advisory(&flight.destination));
        return;
    }
    let provider = OpenWeatherClient::new(config.weather_api_key.clone());
    let result = provider.current(&city).await;
    if let Err(e) = &result {
        warn!("Weather lookup failed: {}", e);
    }
    println!("{}", weather_section(&result));
}
