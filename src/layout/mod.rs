//! Scene layout: maps room and furniture meters onto canvas pixels.
//!
//! The renderer consumes a solved [`SceneLayout`]; nothing in here draws.

mod core;

pub use self::core::{
    DIMENSION_FONT_PX, ITEM_FONT_PX, Label, PlacedItem, SceneLayout, layout, measure_text,
};
