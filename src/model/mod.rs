//! Value types shared by the fit evaluator, the layout and the catalog.

mod core;

pub use self::core::{FurnitureItem, ItemId, RoomDimensions, format_meters};
