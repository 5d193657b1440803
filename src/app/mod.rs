//! Top-level controller tying the form, catalog, selection and renderer
//! together.

mod config;
mod core;

pub use config::{CheckerConfig, DEFAULT_BACKGROUND_IMAGE, PLACEHOLDER_MESSAGE};
pub use self::core::{FitChecker, ListingEntry};
