use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{FitError, Result};
use crate::model::FurnitureItem;

/// Ordered, read-only furniture catalog with unique ids.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<FurnitureItem>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and unusable dimensions.
    pub fn new(items: Vec<FurnitureItem>) -> Result<Self> {
        let mut seen = HashSet::new();
        for item in &items {
            item.validate()?;
            if !seen.insert(item.id.as_str()) {
                return Err(FitError::DuplicateItem(item.id.clone()));
            }
        }
        Ok(Self { items })
    }

    /// Catalog shipped with the checker.
    pub fn builtin() -> Self {
        Self {
            items: vec![
                FurnitureItem::new(
                    "1",
                    "3-Seater Sofa",
                    2.2,
                    0.95,
                    0.85,
                    "https://images.unsplash.com/photo-1555041469-a586c61ea9bc?auto=format&fit=crop&w=300&q=80",
                ),
                FurnitureItem::new(
                    "2",
                    "Double Bed",
                    2.0,
                    1.6,
                    1.2,
                    "https://images.unsplash.com/photo-1505693416388-ac5ce068fe85?auto=format&fit=crop&w=300&q=80",
                ),
                FurnitureItem::new(
                    "3",
                    "Dining Table",
                    1.8,
                    0.9,
                    0.75,
                    "https://images.unsplash.com/photo-1577140917170-285929fb55b7?auto=format&fit=crop&w=300&q=80",
                ),
                FurnitureItem::new(
                    "4",
                    "Wardrobe",
                    1.5,
                    0.6,
                    2.0,
                    "https://images.unsplash.com/photo-1595428774223-ef52624120d2?auto=format&fit=crop&w=300&q=80",
                ),
            ],
        }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let items: Vec<FurnitureItem> = serde_json::from_str(raw)?;
        Self::new(items)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn get(&self, id: &str) -> Option<&FurnitureItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn require(&self, id: &str) -> Result<&FurnitureItem> {
        self.get(id)
            .ok_or_else(|| FitError::ItemNotFound(id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &FurnitureItem> {
        self.items.iter()
    }

    pub fn items(&self) -> &[FurnitureItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let builtin = Catalog::builtin();
        let rebuilt = Catalog::new(builtin.items().to_vec()).unwrap();
        assert_eq!(rebuilt.len(), 4);
        assert_eq!(rebuilt.get("4").unwrap().name, "Wardrobe");
    }

    #[test]
    fn unknown_id_is_reported() {
        let err = Catalog::builtin().require("99").unwrap_err();
        assert!(matches!(err, FitError::ItemNotFound(ref id) if id == "99"));
    }

    #[test]
    fn json_catalog_keeps_order() {
        let raw = r#"[
            {"id": "b", "name": "Bench", "length": 1.2, "width": 0.4, "height": 0.45, "image": "bench.jpg"},
            {"id": "a", "name": "Armchair", "length": 0.9, "width": 0.85, "height": 1.0, "image": "chair.jpg"}
        ]"#;
        let catalog = Catalog::from_json(raw).unwrap();
        let ids: Vec<_> = catalog.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn json_catalog_rejects_duplicate_ids() {
        let raw = r#"[
            {"id": "a", "name": "One", "length": 1, "width": 1, "height": 1, "image": ""},
            {"id": "a", "name": "Two", "length": 2, "width": 2, "height": 2, "image": ""}
        ]"#;
        let err = Catalog::from_json(raw).unwrap_err();
        assert!(matches!(err, FitError::DuplicateItem(ref id) if id == "a"));
    }

    #[test]
    fn json_catalog_rejects_malformed_input() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(FitError::Json(_))
        ));
    }
}
