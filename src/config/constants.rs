//! Configuration constants.
//!
//! Site locations, request defaults and the literal markers the extractors
//! look for in ČSFD markup.

/// Default site root. Relative links on scraped pages are resolved against it.
pub const DEFAULT_BASE_URL: &str = "https://www.csfd.cz";

/// Path prefix of movie pages; a numeric movie id is appended to it.
pub const MOVIES_PATH: &str = "/film/";

/// Path of the search page, queried with `?q=<text>`.
pub const SEARCH_PATH: &str = "/hledat/";

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Region code of the home market. The profile heading is always stored under it.
pub const HOME_CODE: &str = "CZ";

/// Neighbouring market whose localized title is never the original one.
pub const NEIGHBOR_CODE: &str = "SK";

/// English-language code, dropped when several foreign titles compete.
pub const ENGLISH_CODE: &str = "US";

/// Code returned for flag images with no known mapping.
pub const UNKNOWN_FLAG_CODE: &str = "-";

/// Country names (as rendered on the page) that mark a domestic production.
pub const HOME_COUNTRY_NAMES: &[&str] = &["Česko", "Československo"];

// Credit section headings
pub const DIRECTORS_LABEL: &str = "Režie:";
pub const COMPOSERS_LABEL: &str = "Hudba:";
pub const ACTORS_LABEL: &str = "Hrají:";

/// Substring of the last origin token that marks it as a runtime.
pub const RUNTIME_MARKER: &str = "min";

// Chart link markers (matched against link hrefs)
pub const BEST_RANK_MARKER: &str = "nejlepsi";
pub const WORST_RANK_MARKER: &str = "nejhorsi";
pub const FAVORITE_RANK_MARKER: &str = "nejoblibenejsi";
pub const CONTROVERSIAL_RANK_MARKER: &str = "nejrozporuplnejsi";

/// `title` attribute of the IMDb profile link in the share box.
pub const IMDB_LINK_TITLE: &str = "profil na IMDb.com";

/// Class of the official website link in the share box.
pub const WEBSITE_LINK_CLASS: &str = "www";
