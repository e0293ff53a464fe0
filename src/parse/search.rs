//! Search results extraction.
//!
//! The results page lists movies in two tiers: a detailed primary list and a
//! compact secondary list. Both are read in page order, primary first.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use url::Url;

use super::query::NodeExt;
use crate::error_handling::ExtractionError;
use crate::models::SearchHit;
use crate::utils::parse_selector_unsafe;
use crate::utils::text::{absolute_url, strip_parens};

const RESULTS_SELECTOR_STR: &str = "div#search-films > div:nth-of-type(1)";

static RESULTS_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(RESULTS_SELECTOR_STR, "RESULTS_SELECTOR"));

/// Extracts movie hits from a parsed search results page.
///
/// The primary tier tolerates a missing year; the secondary tier does not,
/// and a single bad secondary item fails the whole extraction.
///
/// # Arguments
///
/// * `document` - The parsed search page
/// * `base` - Base URL for the relative movie links
///
/// # Errors
///
/// - `ExtractionError::MissingSearchResults` if the results container is absent
/// - `ExtractionError::MalformedSearchHit` if an item has no title link
/// - `ExtractionError::InvalidSearchYear` if a secondary item has no numeric year
pub fn extract_search_results(
    document: &Html,
    base: &Url,
) -> Result<Vec<SearchHit>, ExtractionError> {
    let container = document
        .select(&RESULTS_SELECTOR)
        .next()
        .ok_or(ExtractionError::MissingSearchResults)?;

    let lists = container.children_named("ul");
    let mut hits = Vec::new();

    if let Some(primary) = lists.first() {
        for (idx, item) in primary.children_named("li").into_iter().enumerate() {
            hits.push(primary_hit(item, idx + 1, base)?);
        }
    }
    let primary_count = hits.len();

    if let Some(secondary) = lists.get(1) {
        for (idx, item) in secondary.children_named("li").into_iter().enumerate() {
            hits.push(secondary_hit(item, idx + 1, base)?);
        }
    }

    log::debug!(
        "Extracted {} search hits ({} primary, {} secondary)",
        hits.len(),
        primary_count,
        hits.len() - primary_count
    );
    Ok(hits)
}

/// Title link in `h3`, year as the last comma token of the summary paragraph.
fn primary_hit(item: ElementRef<'_>, position: usize, base: &Url) -> Result<SearchHit, ExtractionError> {
    let link = item
        .child("h3")
        .and_then(|h3| h3.child("a"))
        .ok_or(ExtractionError::MalformedSearchHit { tier: 1, position })?;
    let (title, url) = title_and_url(link, base)
        .ok_or(ExtractionError::MalformedSearchHit { tier: 1, position })?;

    let year = item
        .child("p")
        .and_then(|p| p.first_own_text())
        .and_then(|summary| summary.rsplit(',').next())
        .and_then(|token| token.trim().parse::<i32>().ok());

    Ok(SearchHit {
        title,
        alternate_title: alternate_title(item),
        year,
        url,
    })
}

/// Plain title link, year in its own parenthesised span.
fn secondary_hit(item: ElementRef<'_>, position: usize, base: &Url) -> Result<SearchHit, ExtractionError> {
    let link = item
        .child("a")
        .ok_or(ExtractionError::MalformedSearchHit { tier: 2, position })?;
    let (title, url) = title_and_url(link, base)
        .ok_or(ExtractionError::MalformedSearchHit { tier: 2, position })?;

    let raw_year = item
        .child_with_class("span", "film-year")
        .and_then(|span| span.first_own_text());
    let year = raw_year
        .and_then(|raw| strip_parens(raw).parse::<i32>().ok())
        .ok_or_else(|| ExtractionError::InvalidSearchYear {
            title: title.clone(),
            raw: raw_year.map(String::from),
        })?;

    Ok(SearchHit {
        title,
        alternate_title: alternate_title(item),
        year: Some(year),
        url,
    })
}

fn title_and_url(link: ElementRef<'_>, base: &Url) -> Option<(String, String)> {
    let href = link.attr_value("href")?;
    Some((link.text_content().trim().to_string(), absolute_url(base, href)))
}

/// Second name shown next to the hit, usually the original title.
fn alternate_title(item: ElementRef<'_>) -> Option<String> {
    item.child_with_class("span", "search-name")
        .and_then(|span| span.first_own_text())
        .map(strip_parens)
        .filter(|name| !name.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://www.csfd.cz").unwrap()
    }

    fn page(primary: &str, secondary: &str) -> Html {
        Html::parse_document(&format!(
            r#"<div id="search-films"><div><ul class="ui-image-list">{primary}</ul><ul class="films">{secondary}</ul></div></div>"#
        ))
    }

    #[test]
    fn test_missing_container_is_error() {
        let document = Html::parse_document("<div id='search-users'></div>");
        assert_eq!(
            extract_search_results(&document, &base()),
            Err(ExtractionError::MissingSearchResults)
        );
    }

    #[test]
    fn test_empty_tiers() {
        let document = page("", "");
        assert_eq!(extract_search_results(&document, &base()), Ok(vec![]));
    }

    #[test]
    fn test_primary_hit_without_year() {
        let document = page(
            r#"<li><h3><a href="/film/9-x/" class="film c1">X</a></h3><p>Dokumentární, Česko, ?</p></li>"#,
            "",
        );
        let hits = extract_search_results(&document, &base()).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].year, None);
        assert_eq!(hits[0].alternate_title, None);
        assert_eq!(hits[0].url, "https://www.csfd.cz/film/9-x/");
    }

    #[test]
    fn test_primary_hit_without_link_is_error() {
        let document = page(r#"<li><h3>No link</h3></li>"#, "");
        assert_eq!(
            extract_search_results(&document, &base()),
            Err(ExtractionError::MalformedSearchHit {
                tier: 1,
                position: 1
            })
        );
    }

    #[test]
    fn test_secondary_hit_without_year_is_error() {
        let document = page(
            "",
            r#"<li><a href="/film/5-y/">Y</a><span class="film-year">(neuvedeno)</span></li>"#,
        );
        assert_eq!(
            extract_search_results(&document, &base()),
            Err(ExtractionError::InvalidSearchYear {
                title: "Y".to_string(),
                raw: Some("(neuvedeno)".to_string()),
            })
        );
    }

    #[test]
    fn test_secondary_hit_missing_year_span_is_error() {
        let document = page("", r#"<li><a href="/film/5-y/">Y</a></li>"#);
        assert!(matches!(
            extract_search_results(&document, &base()),
            Err(ExtractionError::InvalidSearchYear { raw: None, .. })
        ));
    }

    #[test]
    fn test_secondary_hit_with_alternate_title() {
        let document = page(
            "",
            r#"<li><a href="/film/7-z/">Z</a> <span class="search-name">(Zed)</span> <span class="film-year">(2003)</span></li>"#,
        );
        let hits = extract_search_results(&document, &base()).unwrap();
        assert_eq!(
            hits,
            vec![SearchHit {
                title: "Z".to_string(),
                alternate_title: Some("Zed".to_string()),
                year: Some(2003),
                url: "https://www.csfd.cz/film/7-z/".to_string(),
            }]
        );
    }
}
