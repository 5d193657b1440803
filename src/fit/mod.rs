//! Bounding-box fit evaluation.
//!
//! Each axis is compared independently and the boundary is inclusive. Items are
//! never rotated, so a bed that would fit turned sideways still reports a
//! mismatch.

mod core;

pub use self::core::{FitStatus, annotate, evaluate, fits};
