use serde::Serialize;

use crate::catalog::Catalog;
use crate::model::{FurnitureItem, RoomDimensions};

/// Per-axis containment of `item` inside `room`.
pub fn fits(room: &RoomDimensions, item: &FurnitureItem) -> bool {
    item.length <= room.length && item.width <= room.width && item.height <= room.height
}

/// Fit check that stays undecided until room dimensions are known.
pub fn evaluate(room: Option<&RoomDimensions>, item: &FurnitureItem) -> Option<bool> {
    room.map(|room| fits(room, item))
}

/// Tri-state fit outcome used by listings and renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FitStatus {
    Unknown,
    Fits,
    DoesNotFit,
}

impl FitStatus {
    pub fn of(room: Option<&RoomDimensions>, item: &FurnitureItem) -> Self {
        evaluate(room, item).into()
    }

    pub fn is_known(self) -> bool {
        self != FitStatus::Unknown
    }

    pub fn as_bool(self) -> Option<bool> {
        match self {
            FitStatus::Unknown => None,
            FitStatus::Fits => Some(true),
            FitStatus::DoesNotFit => Some(false),
        }
    }
}

impl From<Option<bool>> for FitStatus {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => FitStatus::Unknown,
            Some(true) => FitStatus::Fits,
            Some(false) => FitStatus::DoesNotFit,
        }
    }
}

/// Evaluate every catalog entry in catalog order.
pub fn annotate<'a>(
    catalog: &'a Catalog,
    room: Option<&RoomDimensions>,
) -> Vec<(&'a FurnitureItem, FitStatus)> {
    catalog
        .iter()
        .map(|item| (item, FitStatus::of(room, item)))
        .collect()
}
