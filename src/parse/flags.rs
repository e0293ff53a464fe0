//! Flag icon to region code lookup.
//!
//! Alternate titles on a movie page are marked with a flag icon whose file
//! name embeds a number (`flag_34.gif`). The site reuses several numbers for
//! the same country, so the mapping is many-to-one.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::UNKNOWN_FLAG_CODE;
use crate::utils::compile_regex_unsafe;

const FLAG_NUMBER_PATTERN: &str = r"_([0-9]+)";

static FLAG_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(FLAG_NUMBER_PATTERN, "FLAG_NUMBER_RE"));

/// Flag number to ISO 3166-1 code, sorted by number.
static FLAG_CODES: &[(u32, &str)] = &[
    (1, "US"),
    (2, "GB"),
    (3, "AU"),
    (4, "DE"),
    (5, "AT"),
    (6, "CA"),
    (7, "DK"),
    (8, "FI"),
    (10, "HU"),
    (11, "NL"),
    (12, "PL"),
    (13, "RU"),
    (14, "SE"),
    (15, "CH"),
    (16, "TH"),
    (17, "TR"),
    (18, "BE"),
    (19, "FR"),
    (21, "IE"),
    (22, "IT"),
    (23, "ES"),
    (25, "NO"),
    (27, "AR"),
    (30, "PT"),
    (31, "TJ"),
    (33, "JP"),
    (34, "CZ"),
    (35, "AU"),
    (36, "CZ"),
    (37, "BG"),
    (41, "EG"),
    (47, "DE"),
    (48, "DE"),
    (49, "CN"),
    (52, "SK"),
    (55, "PE"),
    (62, "IS"),
];

/// Region code for a flag number, or `"-"` when the number is not mapped.
pub fn code_for_flag_number(number: u32) -> &'static str {
    FLAG_CODES
        .binary_search_by_key(&number, |(n, _)| *n)
        .map(|idx| FLAG_CODES[idx].1)
        .unwrap_or(UNKNOWN_FLAG_CODE)
}

/// Region code for a flag image reference (URL or file name).
///
/// References without an embedded number resolve to `"-"`, like unmapped ones.
pub fn flag_code(flag_ref: &str) -> &'static str {
    let number = FLAG_NUMBER_RE
        .captures(flag_ref)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok());

    match number {
        Some(number) => code_for_flag_number(number),
        None => {
            log::debug!("No flag number in image reference '{}'", flag_ref);
            UNKNOWN_FLAG_CODE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_table_is_sorted() {
        assert!(FLAG_CODES.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_code_for_flag_number() {
        assert_eq!(code_for_flag_number(1), "US");
        assert_eq!(code_for_flag_number(34), "CZ");
        assert_eq!(code_for_flag_number(36), "CZ");
        assert_eq!(code_for_flag_number(52), "SK");
        assert_eq!(code_for_flag_number(62), "IS");
    }

    #[test]
    fn test_unmapped_flag_number_is_sentinel() {
        assert_eq!(code_for_flag_number(9), "-");
        assert_eq!(code_for_flag_number(999), "-");
    }

    #[test]
    fn test_flag_code_from_url() {
        assert_eq!(flag_code("http://img.csfd.cz/images/flags/flag_19.gif"), "FR");
        assert_eq!(flag_code("/assets/flags_v2/flag_4.gif"), "DE");
    }

    #[test]
    fn test_flag_code_without_number() {
        assert_eq!(flag_code("/images/flags/unknown.gif"), "-");
        assert_eq!(flag_code(""), "-");
    }
}
