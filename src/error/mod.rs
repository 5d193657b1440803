mod types;

pub use types::{FitError, Result};
