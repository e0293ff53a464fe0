//! ČSFD client: fetch a page, parse it, extract a record.

use std::sync::Arc;

use scraper::Html;
use url::Url;

use crate::config::Config;
use crate::error_handling::{CsfdError, ExtractionError, ExtractionStats};
use crate::fetch::{fetch_html, movie_url, search_url};
use crate::initialization::{init_client, parse_base_url};
use crate::models::{MovieRecord, SearchHit};
use crate::parse::{extract_movie_with_stats, extract_search_results};

/// Client for movie pages and search on ČSFD.
///
/// Cheap to clone; clones share the HTTP connection pool and the
/// missing-field counters.
#[derive(Debug, Clone)]
pub struct CsfdClient {
    http: reqwest::Client,
    base_url: Url,
    stats: Arc<ExtractionStats>,
}

impl CsfdClient {
    /// Builds a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns an initialization error if the base URL is invalid or the
    /// HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, CsfdError> {
        Ok(Self {
            http: init_client(config)?,
            base_url: parse_base_url(&config.base_url)?,
            stats: Arc::new(ExtractionStats::new()),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Counters of optional fields missing from the movie pages fetched so far.
    pub fn stats(&self) -> &ExtractionStats {
        &self.stats
    }

    /// Searches movies by keywords.
    ///
    /// # Errors
    ///
    /// Fails if the page cannot be fetched, has no results container, or
    /// contains a malformed hit.
    pub async fn find_movie(&self, query: &str) -> Result<Vec<SearchHit>, CsfdError> {
        let url = search_url(&self.base_url, query)?;
        log::info!("Searching for '{}'", query);
        let body = fetch_html(&self.http, &url).await?;
        let hits = parse_search_page(&body, &self.base_url)?;
        log::info!("Found {} movies for '{}'", hits.len(), query);
        Ok(hits)
    }

    /// Fetches a movie by numeric id or full page URL.
    ///
    /// # Errors
    ///
    /// Fails if the input is neither an id nor a URL, the page cannot be
    /// fetched, or it is not a movie page.
    pub async fn get_movie(&self, id_or_url: &str) -> Result<MovieRecord, CsfdError> {
        let url = movie_url(&self.base_url, id_or_url)?;
        log::info!("Fetching movie {}", url);
        let body = fetch_html(&self.http, &url).await?;
        let movie = parse_movie_page(&body, url.as_str(), &self.stats)?;
        Ok(movie)
    }
}

// Html is not Send; parsing stays in sync helpers so the client futures are.
fn parse_search_page(body: &str, base: &Url) -> Result<Vec<SearchHit>, ExtractionError> {
    let document = Html::parse_document(body);
    extract_search_results(&document, base)
}

fn parse_movie_page(
    body: &str,
    url: &str,
    stats: &ExtractionStats,
) -> Result<MovieRecord, ExtractionError> {
    let document = Html::parse_document(body);
    extract_movie_with_stats(&document, url, stats)
}

impl SearchHit {
    /// Fetches the full movie record behind this hit.
    pub async fn resolve(&self, client: &CsfdClient) -> Result<MovieRecord, CsfdError> {
        client.get_movie(&self.url).await
    }
}

/// Searches movies with a default-configured client.
pub async fn find_movie(query: &str) -> Result<Vec<SearchHit>, CsfdError> {
    CsfdClient::new(&Config::default())?.find_movie(query).await
}

/// Fetches a movie by id or URL with a default-configured client.
pub async fn get_movie(id_or_url: &str) -> Result<MovieRecord, CsfdError> {
    CsfdClient::new(&Config::default())?.get_movie(id_or_url).await
}
