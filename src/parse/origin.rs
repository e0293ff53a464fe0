//! Genre and origin line parsing.
//!
//! The profile renders genres as `Drama / Komedie` and the origin as one
//! comma-separated line, `Česko, 1999, 115 min`, where the year and runtime
//! are each optional.

use crate::config::RUNTIME_MARKER;
use crate::utils::text::is_all_digits;

/// Countries, year and runtime split out of an origin line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Origin {
    pub countries: Vec<String>,
    pub year: Option<i32>,
    pub runtime: Option<String>,
}

/// Splits a genre line on `/`.
pub fn parse_genres(line: &str) -> Vec<String> {
    line.split('/')
        .map(str::trim)
        .filter(|genre| !genre.is_empty())
        .map(String::from)
        .collect()
}

/// Parses an origin line from the end backwards.
///
/// The runtime is popped first, then the year, and whatever is left is the
/// country list. Popping in this order keeps a year from being read as a
/// country.
pub fn parse_origin(line: &str) -> Origin {
    let mut tokens: Vec<&str> = line.split(',').map(str::trim).collect();
    let mut origin = Origin::default();

    if tokens
        .last()
        .is_some_and(|token| token.contains(RUNTIME_MARKER))
    {
        origin.runtime = tokens.pop().map(String::from);
    }

    // An all-digit token is the year slot even when it does not fit an i32
    if tokens.last().is_some_and(|token| is_all_digits(token)) {
        origin.year = tokens.pop().and_then(|token| token.parse::<i32>().ok());
    }

    origin.countries = tokens
        .iter()
        .flat_map(|token| token.split('/'))
        .map(str::trim)
        .filter(|country| !country.is_empty())
        .map(String::from)
        .collect();

    origin
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origin_full_line() {
        let origin = parse_origin("Česko, 2005, 120 min");
        assert_eq!(origin.countries, vec!["Česko"]);
        assert_eq!(origin.year, Some(2005));
        assert_eq!(origin.runtime.as_deref(), Some("120 min"));
    }

    #[test]
    fn test_parse_origin_without_runtime_splits_countries() {
        let origin = parse_origin("USA / Velká Británie, 1999");
        assert_eq!(origin.countries, vec!["USA", "Velká Británie"]);
        assert_eq!(origin.year, Some(1999));
        assert_eq!(origin.runtime, None);
    }

    #[test]
    fn test_parse_origin_runtime_with_extra_cut() {
        let origin = parse_origin("USA, 2001, 178 min (Prodloužená verze: 208 min)");
        assert_eq!(origin.countries, vec!["USA"]);
        assert_eq!(origin.year, Some(2001));
        assert_eq!(
            origin.runtime.as_deref(),
            Some("178 min (Prodloužená verze: 208 min)")
        );
    }

    #[test]
    fn test_parse_origin_countries_only() {
        let origin = parse_origin("Francie / Německo");
        assert_eq!(origin.countries, vec!["Francie", "Německo"]);
        assert_eq!(origin.year, None);
        assert_eq!(origin.runtime, None);
    }

    #[test]
    fn test_parse_origin_runtime_without_year() {
        // The token before the runtime is not numeric, so it stays a country
        let origin = parse_origin("Japonsko, 95 min");
        assert_eq!(origin.countries, vec!["Japonsko"]);
        assert_eq!(origin.year, None);
        assert_eq!(origin.runtime.as_deref(), Some("95 min"));
    }

    #[test]
    fn test_parse_origin_keeps_every_country_segment() {
        let origin = parse_origin("Česko / Slovensko, Polsko, 2010");
        assert_eq!(origin.countries, vec!["Česko", "Slovensko", "Polsko"]);
        assert_eq!(origin.year, Some(2010));
    }

    #[test]
    fn test_parse_origin_oversized_year_is_not_a_country() {
        let origin = parse_origin("Česko, 99999999999, 90 min");
        assert_eq!(origin.countries, vec!["Česko"]);
        assert_eq!(origin.year, None);
        assert_eq!(origin.runtime.as_deref(), Some("90 min"));
    }

    #[test]
    fn test_parse_origin_empty_line() {
        assert_eq!(parse_origin(""), Origin::default());
        assert_eq!(parse_origin("  "), Origin::default());
    }

    #[test]
    fn test_parse_genres() {
        assert_eq!(
            parse_genres("Komedie / Drama / Romantický"),
            vec!["Komedie", "Drama", "Romantický"]
        );
        assert_eq!(parse_genres("Dokumentární"), vec!["Dokumentární"]);
        assert!(parse_genres(" ").is_empty());
    }
}
