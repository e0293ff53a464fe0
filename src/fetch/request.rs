//! Request URL building and header application.

use url::Url;

use crate::config::{MOVIES_PATH, REQUEST_HEADERS, SEARCH_PATH};
use crate::error_handling::FetchError;
use crate::utils::text::is_all_digits;

/// Applies the standard request headers to a `reqwest::RequestBuilder`.
pub(crate) fn apply_request_headers(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    REQUEST_HEADERS
        .iter()
        .fold(builder, |builder, (name, value)| builder.header(*name, *value))
}

/// URL of the search page for `query`.
pub fn search_url(base: &Url, query: &str) -> Result<Url, FetchError> {
    let mut url = base
        .join(SEARCH_PATH)
        .map_err(|source| FetchError::InvalidUrl {
            url: format!("{base}{SEARCH_PATH}"),
            source,
        })?;
    url.query_pairs_mut().append_pair("q", query);
    Ok(url)
}

/// URL of a movie page.
///
/// An all-digit input is a movie id and is expanded under the movies path;
/// anything else must be a complete URL.
pub fn movie_url(base: &Url, id_or_url: &str) -> Result<Url, FetchError> {
    let id_or_url = id_or_url.trim();
    let result = if is_all_digits(id_or_url) {
        base.join(&format!("{MOVIES_PATH}{id_or_url}"))
    } else {
        Url::parse(id_or_url)
    };
    result.map_err(|source| FetchError::InvalidUrl {
        url: id_or_url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://www.csfd.cz").unwrap()
    }

    #[test]
    fn test_movie_url_from_id() {
        assert_eq!(
            movie_url(&base(), "10135").unwrap().as_str(),
            "https://www.csfd.cz/film/10135"
        );
        assert_eq!(
            movie_url(&base(), " 42 ").unwrap().as_str(),
            "https://www.csfd.cz/film/42"
        );
    }

    #[test]
    fn test_movie_url_passthrough() {
        let url = "https://www.csfd.cz/film/10135-pelisky/";
        assert_eq!(movie_url(&base(), url).unwrap().as_str(), url);
    }

    #[test]
    fn test_movie_url_invalid() {
        let err = movie_url(&base(), "pelisky").unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { ref url, .. } if url == "pelisky"));
    }

    #[test]
    fn test_search_url_encodes_query() {
        let url = search_url(&base(), "pelíšky 2").unwrap();
        assert_eq!(url.path(), "/hledat/");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs, vec![("q".to_string(), "pelíšky 2".to_string())]);
    }
}
