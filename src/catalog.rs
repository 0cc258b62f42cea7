// Flight catalog: CSV load and search.
use crate::model::{CatalogError, Flight};
use csv::ReaderBuilder;
use std::path::Path;
use tracing::info;

/// At most this many matches are surfaced for a search query, mirroring the
/// dashboard's "top matches" list.
const MAX_MATCHES: usize = 5;

pub struct FlightCatalog {
    flights: Vec<Flight>,
}

impl FlightCatalog {
    /// Loads the catalog from a CSV file with a header row:
    /// `flight_number,airline,origin,destination,departure,status`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let mut reader = ReaderBuilder::new().from_path(path.as_ref())?;
        let mut flights = Vec::new();
        for row in reader.deserialize() {
            let flight: Flight = row?;
            flights.push(flight);
        }
        info!("Loaded {} flights from {:?}", flights.len(), path.as_ref());
        Ok(Self { flights })
    }

    /// Exact lookup by flight number, case-insensitive.
    pub fn get(&self, flight_number: &str) -> Option<&Flight> {
        self.flights
            .iter()
            .find(|f| f.flight_number.eq_ignore_ascii_case(flight_number))
    }

    /// Case-insensitive substring search over flight number and airline,
    /// capped at the first [`MAX_MATCHES`] hits in catalog order. An empty
    /// query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&Flight> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.flights
            .iter()
            .filter(|f| {
                f.flight_number.to_lowercase().contains(&query)
                    || f.airline.to_lowercase().contains(&query)
            })
            .take(MAX_MATCHES)
            .collect()
    }
}
