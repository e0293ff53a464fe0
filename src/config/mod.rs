//! Client configuration and constants.
//!
//! This module provides:
//! - Site constants (base URL, paths, markup labels)
//! - Request header values
//! - Library configuration and logging option types

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{Config, LogFormat, LogLevel};
