//! Extraction statistics tracking.
//!
//! Counts optional fields that were absent from extracted movie pages.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::MissingField;

/// Thread-safe tracker of absent optional fields.
///
/// Every `MissingField` variant is initialized to zero on creation, so the
/// counters can be shared across tasks behind an `Arc` without locking.
#[derive(Debug)]
pub struct ExtractionStats {
    missing: HashMap<MissingField, AtomicUsize>,
}

impl Default for ExtractionStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionStats {
    pub fn new() -> Self {
        let mut missing = HashMap::new();
        for field in MissingField::iter() {
            missing.insert(field, AtomicUsize::new(0));
        }
        ExtractionStats { missing }
    }

    /// Record that `field` was absent from a page.
    pub fn increment(&self, field: MissingField) {
        if let Some(counter) = self.missing.get(&field) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment counter for {:?} which is not in the map. \
                 This indicates a bug in ExtractionStats initialization.",
                field
            );
        }
    }

    /// Get the count for a field.
    ///
    /// Returns 0 if the field is not in the map (should never happen if properly initialized).
    pub fn get_count(&self, field: MissingField) -> usize {
        self.missing
            .get(&field)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get total count across all fields.
    pub fn total(&self) -> usize {
        MissingField::iter().map(|f| self.get_count(f)).sum()
    }

    /// Non-zero counters, in declaration order.
    pub fn nonzero(&self) -> Vec<(MissingField, usize)> {
        MissingField::iter()
            .map(|f| (f, self.get_count(f)))
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}
