//! HTTP request header values.
//!
//! Applied to every page request so the site serves the regular Czech
//! desktop markup the extractors are written against.

/// Accept header for HTML documents
pub const ACCEPT_HTML: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Accept-Language header. Credit labels and chart names are matched in Czech.
pub const ACCEPT_LANGUAGE_CS: &str = "cs-CZ,cs;q=0.9,en;q=0.5";

/// Request headers as (name, value) pairs.
pub const REQUEST_HEADERS: &[(&str, &str)] = &[
    ("accept", ACCEPT_HTML),
    ("accept-language", ACCEPT_LANGUAGE_CS),
];
