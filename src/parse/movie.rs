//! Movie page extraction.
//!
//! Only the profile section and its title are mandatory. Every other field
//! is looked up independently and left empty when its markup is missing, so
//! one changed section never costs the rest of the record.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashMap;
use std::sync::LazyLock;
use url::Url;

use super::flags::flag_code;
use super::origin::{parse_genres, parse_origin, Origin};
use super::query::NodeExt;
use crate::config::{
    ACTORS_LABEL, BEST_RANK_MARKER, COMPOSERS_LABEL, CONTROVERSIAL_RANK_MARKER,
    DEFAULT_BASE_URL, DIRECTORS_LABEL, FAVORITE_RANK_MARKER, HOME_CODE, IMDB_LINK_TITLE,
    WEBSITE_LINK_CLASS, WORST_RANK_MARKER,
};
use crate::error_handling::{ExtractionError, ExtractionStats, MissingField};
use crate::models::{MovieRecord, Person};
use crate::utils::text::{absolute_url, non_blank, parse_percent, parse_rank};
use crate::utils::{compile_regex_unsafe, parse_selector_unsafe};

// CSS selector strings
const PROFILE_SELECTOR_STR: &str = "div#profile > div > div:nth-of-type(2)";
const PLOTS_SELECTOR_STR: &str = "div#plots > div:nth-of-type(2)";
const RATING_SELECTOR_STR: &str = "div#rating";
const POSTER_GALLERY_SELECTOR_STR: &str = "div#posters > div:nth-of-type(2)";
const MAIN_POSTER_SELECTOR_STR: &str = "div#poster > img[src]";

const POSTER_URL_PATTERN: &str = r"url\('(.*)'";

static PROFILE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(PROFILE_SELECTOR_STR, "PROFILE_SELECTOR"));

static PLOTS_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(PLOTS_SELECTOR_STR, "PLOTS_SELECTOR"));

static RATING_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(RATING_SELECTOR_STR, "RATING_SELECTOR"));

static POSTER_GALLERY_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(POSTER_GALLERY_SELECTOR_STR, "POSTER_GALLERY_SELECTOR")
});

static MAIN_POSTER_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(MAIN_POSTER_SELECTOR_STR, "MAIN_POSTER_SELECTOR"));

static IMDB_LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(
        &format!("div#share a[title='{IMDB_LINK_TITLE}']"),
        "IMDB_LINK_SELECTOR",
    )
});

static WEBSITE_LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(
        &format!("div#share a.{WEBSITE_LINK_CLASS}"),
        "WEBSITE_LINK_SELECTOR",
    )
});

static POSTER_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(POSTER_URL_PATTERN, "POSTER_URL_RE"));

/// Extracts a movie record from a parsed movie page.
///
/// # Arguments
///
/// * `document` - The parsed movie page
/// * `source_url` - URL the page was fetched from; relative links resolve against it
///
/// # Errors
///
/// Returns `ExtractionError::MissingProfile` if the page has no profile
/// section and `ExtractionError::MissingTitle` if the profile has no title.
pub fn extract_movie(document: &Html, source_url: &str) -> Result<MovieRecord, ExtractionError> {
    extract_movie_with_stats(document, source_url, &ExtractionStats::new())
}

/// Same as [`extract_movie`], recording every absent optional field in `stats`.
pub fn extract_movie_with_stats(
    document: &Html,
    source_url: &str,
    stats: &ExtractionStats,
) -> Result<MovieRecord, ExtractionError> {
    let profile = document
        .select(&PROFILE_SELECTOR)
        .next()
        .ok_or_else(|| ExtractionError::MissingProfile {
            url: source_url.to_string(),
        })?;

    let home_title = profile
        .child("h1")
        .and_then(|h1| h1.first_own_text())
        .and_then(non_blank)
        .ok_or_else(|| ExtractionError::MissingTitle {
            url: source_url.to_string(),
        })?;

    let base = link_base(source_url);

    // The home title is written last so it always wins for the home code
    let mut titles_by_region = extract_foreign_titles(profile);
    titles_by_region.insert(HOME_CODE.to_string(), home_title);

    let genres = profile
        .child_with_class("p", "genre")
        .and_then(|p| p.first_own_text())
        .map(parse_genres)
        .unwrap_or_default();

    let origin_line = profile
        .child_with_class("p", "origin")
        .and_then(|p| p.first_own_text());
    if origin_line.is_none() {
        note_missing(stats, MissingField::Origin, source_url);
    }
    let origin = origin_line.map(parse_origin).unwrap_or_default();
    let Origin {
        countries,
        year,
        runtime,
    } = origin;

    let rating_section = document.select(&RATING_SELECTOR).next();

    let record = MovieRecord {
        titles_by_region,
        genres,
        countries,
        year,
        runtime_raw: runtime,
        directors: extract_people(profile, DIRECTORS_LABEL, &base),
        composers: extract_people(profile, COMPOSERS_LABEL, &base),
        actors: extract_people(profile, ACTORS_LABEL, &base),
        synopsis: extract_synopsis(document),
        rating: rating_section.and_then(extract_rating),
        best_rank: rating_section.and_then(|r| extract_rank(r, BEST_RANK_MARKER)),
        worst_rank: rating_section.and_then(|r| extract_rank(r, WORST_RANK_MARKER)),
        favorite_rank: rating_section.and_then(|r| extract_rank(r, FAVORITE_RANK_MARKER)),
        controversial_rank: rating_section
            .and_then(|r| extract_rank(r, CONTROVERSIAL_RANK_MARKER)),
        poster_urls: extract_posters(document),
        imdb_url: extract_href(document, &IMDB_LINK_SELECTOR),
        official_site_url: extract_href(document, &WEBSITE_LINK_SELECTOR),
        source_url: source_url.to_string(),
    };

    record_missing_fields(&record, stats);
    log::debug!(
        "Extracted movie '{}' from {} ({} titles, {} actors, {} posters)",
        record.titles_by_region[HOME_CODE],
        source_url,
        record.titles_by_region.len(),
        record.actors.len(),
        record.poster_urls.len()
    );

    Ok(record)
}

/// Base for resolving relative links: the page URL, or the site root if it does not parse.
fn link_base(source_url: &str) -> Url {
    Url::parse(source_url)
        .or_else(|_| Url::parse(DEFAULT_BASE_URL))
        .unwrap_or_else(|e| panic!("DEFAULT_BASE_URL must parse: {e}. This is a programming error."))
}

/// Alternate titles keyed by the region code of their flag. First title per code wins.
fn extract_foreign_titles(profile: ElementRef<'_>) -> HashMap<String, String> {
    let mut titles = HashMap::new();
    let Some(list) = profile.child_with_class("ul", "names") else {
        return titles;
    };

    for item in list.children_named("li") {
        let Some(flag) = item.child("img").and_then(|img| img.attr_value("src")) else {
            log::debug!("Alternate title entry without flag image, skipping");
            continue;
        };
        let Some(title) = item.child("h3").and_then(|h3| non_blank(&h3.text_content())) else {
            continue;
        };
        titles.entry(flag_code(flag).to_string()).or_insert(title);
    }

    titles
}

/// People linked from the profile block headed by `label`.
fn extract_people(profile: ElementRef<'_>, label: &str, base: &Url) -> Vec<Person> {
    profile
        .children_named("div")
        .into_iter()
        .filter(|block| {
            block
                .children_named("h4")
                .iter()
                .any(|h4| h4.text_content().trim() == label)
        })
        .flat_map(|block| block.descendants_named("a"))
        .filter_map(|link| {
            let href = link.attr_value("href")?;
            Some(Person {
                name: link.text_content().trim().to_string(),
                profile_url: absolute_url(base, href),
            })
        })
        .collect()
}

/// The plot text is the second text node of the content divs.
fn extract_synopsis(document: &Html) -> Option<String> {
    let plots = document.select(&PLOTS_SELECTOR).next()?;
    plots
        .texts_under("div")
        .get(1)
        .and_then(|text| non_blank(text))
}

fn extract_rating(rating_section: ElementRef<'_>) -> Option<u8> {
    rating_section
        .child("h2")
        .and_then(|h2| h2.first_own_text())
        .and_then(parse_percent)
}

/// Chart position from the first link in the rating section whose href contains `marker`.
///
/// Narrower than a whole-document search: chart links outside the rating
/// section (sidebars, related lists) are ignored.
fn extract_rank(rating_section: ElementRef<'_>, marker: &str) -> Option<u32> {
    rating_section
        .descendants_named("a")
        .into_iter()
        .find(|link| link.attr_value("href").is_some_and(|href| href.contains(marker)))
        .and_then(|link| link.first_own_text())
        .and_then(parse_rank)
}

/// Gallery posters, or the main poster when the gallery yields nothing.
fn extract_posters(document: &Html) -> Vec<String> {
    let gallery: Vec<String> = document
        .select(&POSTER_GALLERY_SELECTOR)
        .next()
        .map(|gallery| {
            gallery
                .descendants_named("div")
                .into_iter()
                .filter_map(|entry| entry.attr_value("style"))
                .filter_map(poster_url_from_style)
                .collect()
        })
        .unwrap_or_default();

    if !gallery.is_empty() {
        return gallery;
    }

    document
        .select(&MAIN_POSTER_SELECTOR)
        .next()
        .and_then(|img| img.attr_value("src"))
        .map(|src| vec![src.to_string()])
        .unwrap_or_default()
}

/// URL inside a `url('...')` style value, with backslashes removed.
pub(crate) fn poster_url_from_style(style: &str) -> Option<String> {
    let url = POSTER_URL_RE.captures(style)?.get(1)?.as_str().replace('\\', "");
    if url.is_empty() {
        log::debug!("Empty poster URL in style '{}'", style);
        return None;
    }
    Some(url)
}

fn extract_href(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .and_then(|link| link.attr_value("href"))
        .map(String::from)
}

fn note_missing(stats: &ExtractionStats, field: MissingField, url: &str) {
    log::debug!("No {} on {}", field, url);
    stats.increment(field);
}

fn record_missing_fields(record: &MovieRecord, stats: &ExtractionStats) {
    let url = record.source_url.as_str();
    let checks = [
        (record.genres.is_empty(), MissingField::Genres),
        (record.countries.is_empty(), MissingField::Countries),
        (record.year.is_none(), MissingField::Year),
        (record.runtime_raw.is_none(), MissingField::Runtime),
        (record.directors.is_empty(), MissingField::Directors),
        (record.composers.is_empty(), MissingField::Composers),
        (record.actors.is_empty(), MissingField::Actors),
        (record.synopsis.is_none(), MissingField::Synopsis),
        (record.rating.is_none(), MissingField::Rating),
        (record.best_rank.is_none(), MissingField::BestRank),
        (record.worst_rank.is_none(), MissingField::WorstRank),
        (record.favorite_rank.is_none(), MissingField::FavoriteRank),
        (
            record.controversial_rank.is_none(),
            MissingField::ControversialRank,
        ),
        (record.poster_urls.is_empty(), MissingField::Posters),
        (record.imdb_url.is_none(), MissingField::ImdbUrl),
        (record.official_site_url.is_none(), MissingField::OfficialSiteUrl),
    ];

    for (missing, field) in checks {
        if missing {
            note_missing(stats, field, url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poster_url_from_style() {
        assert_eq!(
            poster_url_from_style("background-image: url('http://img.csfd.cz/posters/1.jpg');"),
            Some("http://img.csfd.cz/posters/1.jpg".to_string())
        );
    }

    #[test]
    fn test_poster_url_from_style_strips_backslashes() {
        assert_eq!(
            poster_url_from_style(r"background: url('http:\/\/img.csfd.cz\/posters\/2.jpg')"),
            Some("http://img.csfd.cz/posters/2.jpg".to_string())
        );
    }

    #[test]
    fn test_poster_url_from_style_no_url() {
        assert_eq!(poster_url_from_style("width: 100px"), None);
        assert_eq!(poster_url_from_style("background: url('')"), None);
    }

    #[test]
    fn test_link_base_falls_back_to_site_root() {
        assert_eq!(link_base("not a url").as_str(), "https://www.csfd.cz/");
        assert_eq!(
            link_base("http://localhost:8080/film/1/").as_str(),
            "http://localhost:8080/film/1/"
        );
    }

    #[test]
    fn test_missing_profile_is_error() {
        let document = Html::parse_document("<html><body><div id='content'></div></body></html>");
        let err = extract_movie(&document, "https://www.csfd.cz/x").unwrap_err();
        assert_eq!(
            err,
            ExtractionError::MissingProfile {
                url: "https://www.csfd.cz/x".to_string()
            }
        );
    }

    #[test]
    fn test_profile_without_title_is_error() {
        let document = Html::parse_document(
            "<div id='profile'><div><div>left</div><div><p class='genre'>Drama</p></div></div></div>",
        );
        let err = extract_movie(&document, "u").unwrap_err();
        assert!(matches!(err, ExtractionError::MissingTitle { .. }));
    }

    #[test]
    fn test_minimal_page_counts_missing_fields() {
        let document = Html::parse_document(
            "<div id='profile'><div><div></div><div><h1>Pelíšky</h1></div></div></div>",
        );
        let stats = ExtractionStats::new();
        let movie = extract_movie_with_stats(&document, "u", &stats).unwrap();

        assert_eq!(movie.titles_by_region.len(), 1);
        assert_eq!(movie.titles_by_region["CZ"], "Pelíšky");
        assert_eq!(stats.get_count(MissingField::Origin), 1);
        assert_eq!(stats.get_count(MissingField::Synopsis), 1);
        assert_eq!(stats.get_count(MissingField::Posters), 1);
        // Origin, plus every optional field on the record
        assert_eq!(stats.total(), 17);
    }
}
