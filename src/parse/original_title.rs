//! Original-title resolution.
//!
//! A movie page does not say which of its titles is the original one. Czech
//! productions are recognised by their first production country; for foreign
//! ones the home and neighbouring-market titles are eliminated, and English is
//! dropped when several candidates remain.
//!
//! This is a heuristic. When two or more non-English foreign titles remain the
//! smallest code wins, which is reproducible but not necessarily right.

use std::collections::BTreeSet;

use crate::config::{ENGLISH_CODE, HOME_CODE, HOME_COUNTRY_NAMES, NEIGHBOR_CODE};
use crate::models::MovieRecord;

/// Region code whose title is most likely the original one.
///
/// Always returns either `"CZ"` or a key of `record.titles_by_region`.
pub fn resolve_original_title_code(record: &MovieRecord) -> String {
    if record
        .countries
        .first()
        .is_some_and(|country| HOME_COUNTRY_NAMES.contains(&country.as_str()))
    {
        return HOME_CODE.to_string();
    }

    let mut codes: BTreeSet<&str> = record
        .titles_by_region
        .keys()
        .map(String::as_str)
        .collect();
    codes.remove(HOME_CODE);
    codes.remove(NEIGHBOR_CODE);

    if codes.len() > 1 {
        codes.remove(ENGLISH_CODE);
    }

    codes
        .first()
        .map(|code| code.to_string())
        .unwrap_or_else(|| HOME_CODE.to_string())
}
