//! Destination-string-to-city-name normalization.
//!
//! Catalog destinations are free text like "London Heathrow (LHR)" or
//! "New York JFK"; the weather API wants a bare city name. There is no
//! grammar for these strings, so this is a best-effort heuristic: strip
//! annotations, then cut the airport-name portion off the tail.

/// Lowercase tokens that mark the start of the airport-name portion of a
/// destination string. Generic airport words plus well-known airport and
/// terminal proper nouns.
static AIRPORT_TOKENS: phf::Set<&'static str> = phf::phf_set! {
    // generic
    "airport",
    "airfield",
    "aerodrome",
    "airpark",
    "international",
    "intl",
    "regional",
    "municipal",
    "metropolitan",
    "national",
    "terminal",
    "field",
    "base",
    // proper nouns
    "heathrow",
    "gatwick",
    "stansted",
    "luton",
    "schiphol",
    "orly",
    "roissy",
    "charles",
    "gaulle",
    "fiumicino",
    "ciampino",
    "malpensa",
    "linate",
    "barajas",
    "tegel",
    "tempelhof",
    "arlanda",
    "gardermoen",
    "kastrup",
    "haneda",
    "narita",
    "kansai",
    "changi",
    "incheon",
    "kingsford",
    "suvarnabhumi",
    "chhatrapati",
    "indira",
    "atatürk",
    "ataturk",
    "sheremetyevo",
    "domodedovo",
    "vnukovo",
    "kennedy",
    "laguardia",
    "dulles",
    "logan",
    "midway",
    "pearson",
    "trudeau",
    "galeão",
    "galeao",
    "ezeiza",
    "jomo",
    "kenyatta",
    "tambo",
};

/// Extracts a best-effort city name from a free-text destination, for use
/// as a weather-lookup query. Returns an empty string when no usable city
/// name is found; this never fails.
///
/// Steps, in order:
/// 1. drop every parenthesized group (IATA/ICAO codes and similar),
/// 2. turn hyphens/en-dashes into spaces and collapse whitespace,
/// 3. drop a trailing bare 3-letter upper-case token ("New York JFK"),
/// 4. keep tokens up to the first airport-word (see [`AIRPORT_TOKENS`]),
/// 5. if the very first token was an airport-word, fall back to the first
///    two tokens rather than returning nothing.
pub fn normalize_city(destination: &str) -> String {
    let stripped = strip_parenthesized(destination);
    let dashless: String = stripped
        .chars()
        .map(|c| if c == '-' || c == '–' { ' ' } else { c })
        .collect();

    let mut tokens: Vec<&str> = dashless.split_whitespace().collect();
    if tokens.is_empty() {
        return String::new();
    }

    // A trailing all-caps 3-letter token is an airport code written
    // without parentheses. Lowercase 3-letter words stay.
    let trailing_code = tokens
        .last()
        .is_some_and(|last| last.chars().count() == 3 && last.chars().all(|c| c.is_ascii_uppercase()));
    if trailing_code {
        tokens.pop();
    }

    let mut city_tokens: Vec<&str> = Vec::new();
    for &tok in &tokens {
        if AIRPORT_TOKENS.contains(tok.to_lowercase().as_str()) {
            break;
        }
        city_tokens.push(tok);
    }

    // First token itself matched an airport word: rather than return
    // nothing, take the first two tokens as-is.
    if city_tokens.is_empty() && !tokens.is_empty() {
        return tokens.iter().take(2).copied().collect::<Vec<_>>().join(" ");
    }

    city_tokens.join(" ")
}

/// Removes every `(...)` group from the text. An unmatched `(` swallows
/// the rest of the string; an unmatched `)` is dropped.
fn strip_parenthesized(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut depth: usize = 0;
    for c in input.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}
