// Utility functions
use chrono::NaiveDateTime;

/// Parses a catalog departure timestamp (`%Y-%m-%d %H:%M`), if possible.
pub fn parse_departure(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text.trim(), "%Y-%m-%d %H:%M").ok()
}

/// Title-cases each whitespace-separated word ("scattered clouds" →
/// "Scattered Clouds"), like the weather descriptions on the dashboard.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
