use std::collections::HashMap;

use serde::Serialize;

use crate::error_handling::LookupError;
use crate::parse::resolve_original_title_code;

/// A credited person linked from a movie page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub name: String,
    pub profile_url: String,
}

/// Everything extracted from one movie page.
///
/// Only `titles_by_region` and `source_url` are guaranteed; every other field
/// is independently empty when the page does not carry it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieRecord {
    /// Title per region/language code. Always holds the home-market title.
    pub titles_by_region: HashMap<String, String>,
    pub genres: Vec<String>,
    /// Production countries as rendered on the page (not ISO codes).
    pub countries: Vec<String>,
    pub year: Option<i32>,
    /// Runtime string as shown, possibly listing several cuts.
    pub runtime_raw: Option<String>,
    pub directors: Vec<Person>,
    pub composers: Vec<Person>,
    pub actors: Vec<Person>,
    pub synopsis: Option<String>,
    /// Rating in percent (0-100).
    pub rating: Option<u8>,
    pub best_rank: Option<u32>,
    pub worst_rank: Option<u32>,
    pub favorite_rank: Option<u32>,
    pub controversial_rank: Option<u32>,
    pub poster_urls: Vec<String>,
    pub imdb_url: Option<String>,
    pub official_site_url: Option<String>,
    pub source_url: String,
}

impl MovieRecord {
    /// Parses an already-fetched movie page.
    pub fn from_html(
        html: &str,
        source_url: &str,
    ) -> Result<MovieRecord, crate::error_handling::ExtractionError> {
        let document = scraper::Html::parse_document(html);
        crate::parse::extract_movie(&document, source_url)
    }

    /// Standard runtime in minutes: the leading number of `runtime_raw`.
    pub fn runtime_minutes(&self) -> Option<u32> {
        self.runtime_raw
            .as_deref()
            .and_then(|raw| raw.split_whitespace().next())
            .and_then(|minutes| minutes.parse().ok())
    }

    /// Code of the region the original title belongs to. Heuristic.
    pub fn original_title_code(&self) -> String {
        resolve_original_title_code(self)
    }

    /// Title from the production country, as far as the heuristic can tell.
    pub fn original_title(&self) -> Result<&str, LookupError> {
        let code = self.original_title_code();
        self.titles_by_region
            .get(&code)
            .map(String::as_str)
            .ok_or(LookupError::MissingTitle(code))
    }
}

/// One entry of the search results page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub title: String,
    /// Second title, usually the original one.
    pub alternate_title: Option<String>,
    pub year: Option<i32>,
    pub url: String,
}
