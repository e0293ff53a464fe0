//! Error handling and extraction statistics.
//!
//! Error types are categorized into:
//! - **Structural errors**: the document is not the expected kind of page
//! - **Fetch errors**: the page could not be retrieved
//! - **Missing fields**: optional data absent from a page, counted but not raised

mod stats;
mod types;

// Re-export public API
pub use stats::ExtractionStats;
pub use types::{
    CsfdError, ExtractionError, FetchError, InitializationError, LookupError, MissingField,
};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_extraction_stats_initialization() {
        let stats = ExtractionStats::new();
        for field in MissingField::iter() {
            assert_eq!(stats.get_count(field), 0);
        }
        assert_eq!(stats.total(), 0);
        assert!(stats.nonzero().is_empty());
    }

    #[test]
    fn test_extraction_stats_increment() {
        let stats = ExtractionStats::new();
        stats.increment(MissingField::Synopsis);
        stats.increment(MissingField::Synopsis);
        stats.increment(MissingField::Rating);

        assert_eq!(stats.get_count(MissingField::Synopsis), 2);
        assert_eq!(stats.get_count(MissingField::Rating), 1);
        assert_eq!(stats.total(), 3);
        assert_eq!(
            stats.nonzero(),
            vec![(MissingField::Synopsis, 2), (MissingField::Rating, 1)]
        );
    }

    #[test]
    fn test_extraction_error_messages() {
        let err = ExtractionError::MissingProfile {
            url: "https://www.csfd.cz/uzivatel/1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Profile section not found in https://www.csfd.cz/uzivatel/1: not a movie page"
        );

        let err = ExtractionError::InvalidSearchYear {
            title: "Pelíšky".to_string(),
            raw: None,
        };
        assert_eq!(err.to_string(), "Search result 'Pelíšky' has invalid year None");
    }

    #[test]
    fn test_csfd_error_is_transparent() {
        let err = CsfdError::from(ExtractionError::MissingSearchResults);
        assert_eq!(err.to_string(), "Search results container not found");
        assert!(matches!(
            err,
            CsfdError::Extraction(ExtractionError::MissingSearchResults)
        ));
    }

    #[test]
    fn test_missing_field_display() {
        assert_eq!(MissingField::ImdbUrl.to_string(), "IMDb link");
        assert_eq!(MissingField::Origin.to_string(), "origin line");
    }
}
