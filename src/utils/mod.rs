//! Utility functions.
//!
//! This module provides:
//! - CSS selector parsing for static selectors
//! - Regex compilation for static patterns
//! - Text cleanup helpers shared by the extractors

mod pattern;
mod selector;
pub mod text;

pub use pattern::compile_regex_unsafe;
pub use selector::parse_selector_unsafe;

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
