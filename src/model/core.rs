use serde::{Deserialize, Serialize};

use crate::error::{FitError, Result};

/// Catalog identifier of a furniture item.
pub type ItemId = String;

/// Room bounding box in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomDimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl RoomDimensions {
    pub const fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// Longer of the two floor axes.
    pub fn floor_extent(&self) -> f64 {
        self.length.max(self.width)
    }
}

/// Read-only catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureItem {
    pub id: ItemId,
    pub name: String,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub image: String,
}

impl FurnitureItem {
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        length: f64,
        width: f64,
        height: f64,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            length,
            width,
            height,
            image: image.into(),
        }
    }

    /// Reject entries a catalog file could carry but the checker cannot use.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(FitError::InvalidItem {
                id: self.id.clone(),
                reason: "id is empty".to_string(),
            });
        }

        for (axis, value) in [
            ("length", self.length),
            ("width", self.width),
            ("height", self.height),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(FitError::InvalidItem {
                    id: self.id.clone(),
                    reason: format!("{axis} must be a non-negative number (got {value})"),
                });
            }
        }

        Ok(())
    }

    /// Caption drawn next to the item on the canvas.
    pub fn caption(&self) -> String {
        format!(
            "{} ({}m × {}m)",
            self.name,
            format_meters(self.length),
            format_meters(self.width)
        )
    }
}

/// Shortest round-trip rendering of a meter value (`3`, `2.2`, `0.95`).
pub fn format_meters(value: f64) -> String {
    format!("{value}")
}
