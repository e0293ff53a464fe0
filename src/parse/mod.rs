//! HTML extraction.
//!
//! This module turns parsed ČSFD pages into records:
//! - Movie pages into `MovieRecord` (titles, credits, origin, rating, charts, posters, links)
//! - Search pages into `SearchHit` lists
//! - Movie records into an original-title guess
//!
//! Sections are located with CSS selectors via the `scraper` crate and read
//! with the child/text-node queries in `query`.

mod flags;
mod movie;
mod origin;
mod original_title;
mod query;
mod search;

// Re-export public API
pub use flags::{code_for_flag_number, flag_code};
pub use movie::{extract_movie, extract_movie_with_stats};
pub use origin::{parse_genres, parse_origin, Origin};
pub use original_title::resolve_original_title_code;
pub use query::NodeExt;
pub use search::extract_search_results;

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
