use crate::model::ItemId;

/// Holds at most one selected catalog item id.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Selection {
    current: Option<ItemId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `id`, or clear the selection when `id` is already selected.
    pub fn toggle(&mut self, id: impl Into<ItemId>) -> Option<&str> {
        let id = id.into();
        if self.current.as_deref() == Some(id.as_str()) {
            self.current = None;
        } else {
            self.current = Some(id);
        }
        self.current()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.current() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_selects_then_clears() {
        let mut selection = Selection::new();
        assert_eq!(selection.toggle("1"), Some("1"));
        assert_eq!(selection.toggle("1"), None);
        assert!(selection.current().is_none());
    }

    #[test]
    fn selecting_other_item_replaces() {
        let mut selection = Selection::new();
        selection.toggle("1");
        assert_eq!(selection.toggle("3"), Some("3"));
        assert!(selection.is_selected("3"));
        assert!(!selection.is_selected("1"));
    }

    #[test]
    fn clear_resets() {
        let mut selection = Selection::new();
        selection.toggle("2");
        selection.clear();
        assert_eq!(selection, Selection::default());
    }
}
