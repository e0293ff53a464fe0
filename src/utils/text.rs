//! Text cleanup helpers.
//!
//! Small string heuristics applied to text nodes pulled out of the markup.

use url::Url;

/// Returns `true` for a non-empty string made only of ASCII digits.
pub fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Trims whitespace, then surrounding parentheses, then whitespace again.
pub fn strip_parens(s: &str) -> &str {
    s.trim().trim_matches(|c| c == '(' || c == ')').trim()
}

/// Trims `s` and returns it as an owned string unless nothing is left.
pub fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Parses a percentage such as `"85%"`. Values above 100 are rejected.
pub fn parse_percent(s: &str) -> Option<u8> {
    s.trim()
        .trim_matches('%')
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|pct| *pct <= 100)
}

/// Parses a chart position such as `"12. nejlepší film"`: the integer before the first `.`.
pub fn parse_rank(s: &str) -> Option<u32> {
    s.split('.').next()?.trim().parse().ok()
}

/// Resolves `href` against `base`. Unresolvable references are kept verbatim.
pub fn absolute_url(base: &Url, href: &str) -> String {
    match base.join(href) {
        Ok(url) => url.to_string(),
        Err(e) => {
            log::debug!("Keeping unresolvable link '{}': {}", href, e);
            href.to_string()
        }
    }
}
