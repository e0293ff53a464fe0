//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;
use url::Url;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - Timeout from the configuration
/// - Default redirect following
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}

/// Parses the configured site root.
///
/// # Errors
///
/// Returns `InitializationError::InvalidBaseUrl` if `base_url` is not absolute.
pub fn parse_base_url(base_url: &str) -> Result<Url, InitializationError> {
    Url::parse(base_url).map_err(|source| InitializationError::InvalidBaseUrl {
        url: base_url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_default_config() {
        assert!(init_client(&Config::default()).is_ok());
    }

    #[test]
    fn test_parse_base_url() {
        let url = parse_base_url("https://www.csfd.cz").unwrap();
        assert_eq!(url.as_str(), "https://www.csfd.cz/");
    }

    #[test]
    fn test_parse_base_url_rejects_relative() {
        let err = parse_base_url("www.csfd.cz").unwrap_err();
        assert!(matches!(err, InitializationError::InvalidBaseUrl { .. }));
        assert!(err.to_string().contains("www.csfd.cz"));
    }
}
