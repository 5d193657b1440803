//! Room dimension entry.
//!
//! Field edits never fail: the leading number of the text is used (`2.5m`
//! reads as 2.5), text without one becomes zero, and negative values are
//! clamped. Submission is where zero-sized rooms get rejected, so
//! the layout never sees a room without floor area.

mod core;

pub use self::core::{DimensionField, DimensionForm};
