//! Page fetching.
//!
//! One GET per page; the body is returned as text for the caller to parse.
//! Retries and caching are left to the caller.

mod request;

use url::Url;

use crate::error_handling::FetchError;
use request::apply_request_headers;

pub use request::{movie_url, search_url};

/// Fetches `url` and returns the response body.
///
/// # Errors
///
/// - `FetchError::Request` if the request fails or the body cannot be decoded
/// - `FetchError::Status` if the server answers with a non-success status
pub async fn fetch_html(client: &reqwest::Client, url: &Url) -> Result<String, FetchError> {
    log::debug!("GET {}", url);
    let response = apply_request_headers(client.get(url.clone())).send().await?;

    let status = response.status();
    if !status.is_success() {
        log::warn!("{} returned HTTP {}", url, status);
        return Err(FetchError::Status {
            status,
            url: url.to_string(),
        });
    }
    if response.url() != url {
        log::debug!("{} redirected to {}", url, response.url());
    }

    let body = response.text().await?;
    log::debug!("Fetched {} bytes from {}", body.len(), url);
    Ok(body)
}
