//! Error type definitions.
//!
//! This module defines the error and warning types used throughout the crate.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configured base URL is not an absolute URL.
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Structural extraction failures.
///
/// Missing optional fields never produce one of these; they only signal that
/// the document is not the kind of page the extractor expects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// The movie profile section is absent, so the page is not a movie page.
    #[error("Profile section not found in {url}: not a movie page")]
    MissingProfile { url: String },

    /// The profile section exists but carries no title heading.
    #[error("Movie title not found in profile section of {url}")]
    MissingTitle { url: String },

    /// The search results container is absent.
    #[error("Search results container not found")]
    MissingSearchResults,

    /// A search result item has no title link.
    #[error("Search result {position} in tier {tier} has no title link")]
    MalformedSearchHit { tier: u8, position: usize },

    /// A secondary-tier search result has a missing or non-numeric year.
    #[error("Search result '{title}' has invalid year {raw:?}")]
    InvalidSearchYear { title: String, raw: Option<String> },
}

/// The resolved original-title code has no title stored for it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("No title stored for region code '{0}'")]
    MissingTitle(String),
}

/// Errors fetching a page.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The movie id or URL could not be turned into a request URL.
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The request failed before a response arrived, or the body was unreadable.
    #[error("HTTP request error: {0}")]
    Request(#[from] ReqwestError),

    /// The server answered with a non-success status.
    #[error("HTTP status {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

/// Top-level error returned by the client API.
#[derive(Error, Debug)]
pub enum CsfdError {
    #[error(transparent)]
    Initialization(#[from] InitializationError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

/// Optional movie fields that can be absent from a page.
///
/// Absence is not an error; it is counted so callers can notice markup drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum MissingField {
    Genres,
    Origin,
    Countries,
    Year,
    Runtime,
    Directors,
    Composers,
    Actors,
    Synopsis,
    Rating,
    BestRank,
    WorstRank,
    FavoriteRank,
    ControversialRank,
    Posters,
    ImdbUrl,
    OfficialSiteUrl,
}

impl std::fmt::Display for MissingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl MissingField {
    pub fn as_str(&self) -> &'static str {
        match self {
            MissingField::Genres => "genres",
            MissingField::Origin => "origin line",
            MissingField::Countries => "countries",
            MissingField::Year => "year",
            MissingField::Runtime => "runtime",
            MissingField::Directors => "directors",
            MissingField::Composers => "composers",
            MissingField::Actors => "actors",
            MissingField::Synopsis => "synopsis",
            MissingField::Rating => "rating",
            MissingField::BestRank => "best rank",
            MissingField::WorstRank => "worst rank",
            MissingField::FavoriteRank => "favorite rank",
            MissingField::ControversialRank => "controversial rank",
            MissingField::Posters => "posters",
            MissingField::ImdbUrl => "IMDb link",
            MissingField::OfficialSiteUrl => "official website",
        }
    }
}
