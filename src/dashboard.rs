// Dashboard sections: formats each block of the flight view as text.
use crate::model::{AirlinePolicy, Flight, WeatherError, WeatherReport};
use crate::utils::parse_departure;
use chrono::NaiveDateTime;
use rand::Rng;

pub fn flight_summary(flight: &Flight) -> String {
    format!(
        "✈️ Flight Summary\n\
         Flight: {} — {}\n\
         Route: {} → {}\n\
         Departure: {}\n\
         Status: {}",
        flight.flight_number,
        flight.airline,
        flight.origin,
        flight.destination,
        flight.departure,
        flight.status
    )
}

/// Renders the time-to-departure block relative to `now` (local wall time).
pub fn countdown(flight: &Flight, now: NaiveDateTime) -> String {
    let Some(departure) = parse_departure(&flight.departure) else {
        return "⏰ Departure time is not available for this flight.".to_string();
    };

    let remaining = (departure - now).num_seconds();
    if remaining > 0 {
        let hours = remaining / 3600;
        let minutes = (remaining % 3600) / 60;
        format!("⏰ {hours} hours and {minutes} minutes remaining until departure.")
    } else {
        "⏰ This flight has already departed or is currently in progress.".to_string()
    }
}

pub fn airline_info(airline: &str, policy: Option<&AirlinePolicy>) -> String {
    match policy {
        Some(info) => format!(
            "🧳 Airline Information\n\
             - Check-in: {}\n\
             - Baggage Drop: {}\n\
             - Boarding: {}\n\
             Visit {}: {}",
            info.check_in, info.baggage_drop, info.boarding, airline, info.contact
        ),
        None => "🧳 No policy data available for this airline.".to_string(),
    }
}

/// Draws a random position for the "current flight position" map stand-in.
pub fn simulated_position() -> (f64, f64) {
    let mut rng = rand::rng();
    let lat = rng.random_range(-60.0..=60.0);
    let lon = rng.random_range(-150.0..=150.0);
    (lat, lon)
}

pub fn position_section(lat: f64, lon: f64) -> String {
    format!(
        "🌍 Current Flight Position (Simulated)\n\
         lat {lat:.4}, lon {lon:.4}\n\
         This position is simulated for demonstration purposes."
    )
}

/// Shown instead of the weather block when no usable city name could be
/// extracted from the destination.
pub fn no_city_advisory(destination: &str) -> String {
    format!("🌤 Weather lookup skipped: no recognizable city in \"{destination}\".")
}

pub fn weather_section(result: &Result<WeatherReport, WeatherError>) -> String {
    match result {
        Ok(report) => format!(
            "🌤 Weather in {}: {} °C, {}\n   icon: {}",
            report.city, report.temp_c, report.description, report.icon_url()
        ),
        Err(WeatherError::NotFound) => {
            "🌤 Weather data not available right now.".to_string()
        }
        Err(_) => "🌤 Unable to fetch live weather data.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_flight() -> Flight {
        Flight {
            flight_number: "BA102".into(),
            airline: "British Airways".into(),
            origin: "London Heathrow (LHR)".into(),
            destination: "Dubai Intl (DXB)".into(),
            departure: "2026-09-01 08:30".into(),
            status: "On Time".into(),
        }
    }

    #[test]
    fn summary_shows_route_and_status() {
        let text = flight_summary(&sample_flight());
        assert!(text.contains("BA102 — British Airways"));
        assert!(text.contains("London Heathrow (LHR) → Dubai Intl (DXB)"));
        assert!(text.contains("Status: On Time"));
    }

    #[test]
    fn countdown_reports_hours_and_minutes() {
        let now = parse_departure("2026-09-01 06:00").unwrap();
        let text = countdown(&sample_flight(), now);
        assert!(text.contains("2 hours and 30 minutes remaining"));
    }

    #[test]
    fn countdown_handles_departed_flight() {
        let now = parse_departure("2026-09-01 09:00").unwrap();
        let text = countdown(&sample_flight(), now);
        assert!(text.contains("already departed"));
    }

    #[test]
    fn countdown_at_departure_time_counts_as_departed() {
        let now = parse_departure("2026-09-01 08:30").unwrap();
        let text = countdown(&sample_flight(), now);
        assert!(text.contains("already departed"));
    }

    #[test]
    fn countdown_handles_unparseable_departure() {
        let mut flight = sample_flight();
        flight.departure = "TBD".into();
        let now = parse_departure("2026-09-01 06:00").unwrap();
        assert!(countdown(&flight, now).contains("not available"));
    }

    #[test]
    fn airline_info_renders_policy() {
        let policy = AirlinePolicy {
            check_in: "Online, 24h before".into(),
            baggage_drop: "Opens 3h before".into(),
            boarding: "Closes 20 min before".into(),
            contact: "https://www.britishairways.com".into(),
        };
        let text = airline_info("British Airways", Some(&policy));
        assert!(text.contains("Check-in: Online, 24h before"));
        assert!(text.contains("https://www.britishairways.com"));
    }

    #[test]
    fn airline_info_without_policy_is_an_advisory() {
        let text = airline_info("Mystery Air", None);
        assert!(text.contains("No policy data available"));
    }

    #[test]
    fn simulated_position_stays_in_bounds() {
        for _ in 0..100 {
            let (lat, lon) = simulated_position();
            assert!((-60.0..=60.0).contains(&lat));
            assert!((-150.0..=150.0).contains(&lon));
        }
    }

    #[test]
    fn weather_section_renders_report() {
        let report = WeatherReport {
            city: "Dubai".into(),
            temp_c: 38.2,
            description: "Clear Sky".into(),
            icon: "01d".into(),
        };
        let text = weather_section(&Ok(report));
        assert!(text.contains("Weather in Dubai: 38.2 °C, Clear Sky"));
        assert!(text.contains("01d.png"));
    }

    #[test]
    fn weather_section_distinguishes_not_found_from_transport_errors() {
        let not_found = weather_section(&Err(WeatherError::NotFound));
        assert!(not_found.contains("not available right now"));

        let timeout = weather_section(&Err(WeatherError::Timeout));
        assert!(timeout.contains("Unable to fetch"));
    }
}
