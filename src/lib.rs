//! csfd_parser library: movie records and search results from ČSFD.cz
//!
//! This library fetches pages from the Czech-Slovak movie database and turns
//! them into typed records: localized titles, genres, origin, credits, rating,
//! chart positions, posters and external links. Search pages yield a list of
//! hits that can each be resolved into a full record.
//!
//! # Example
//!
//! ```no_run
//! use csfd_parser::{Config, CsfdClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CsfdClient::new(&Config::default())?;
//!
//! let hits = client.find_movie("pelíšky").await?;
//! if let Some(hit) = hits.first() {
//!     let movie = hit.resolve(&client).await?;
//!     println!("{} ({:?})", movie.original_title()?, movie.year);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Already downloaded pages can be handed to the extractors directly:
//!
//! ```no_run
//! use csfd_parser::MovieRecord;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let html = std::fs::read_to_string("pelisky.html")?;
//! let movie = MovieRecord::from_html(&html, "https://www.csfd.cz/film/1-pelisky/")?;
//! println!("{:?}", movie.genres);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The client API requires a Tokio runtime. The extractors are synchronous.

pub mod cli;
mod client;
pub mod config;
mod error_handling;
mod fetch;
pub mod initialization;
mod models;
pub mod parse;
mod utils;

// Re-export public API
pub use client::{find_movie, get_movie, CsfdClient};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{
    CsfdError, ExtractionError, ExtractionStats, FetchError, InitializationError, LookupError,
    MissingField,
};
pub use fetch::{movie_url, search_url};
pub use models::{MovieRecord, Person, SearchHit};
pub use parse::{
    extract_movie, extract_movie_with_stats, extract_search_results, resolve_original_title_code,
};
