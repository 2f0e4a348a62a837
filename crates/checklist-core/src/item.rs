//! Checklist entries.

use std::fmt;

/// Stable identifier of a checklist item. Rows in the view are keyed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single checklist entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    /// Trimmed, never empty
    pub text: String,
    pub completed: bool,
}

impl Item {
    /// Create an incomplete item. Returns `None` when `text` is blank.
    pub fn new(id: ItemId, text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            id,
            text: text.to_string(),
            completed: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation_trims_text() {
        let item = Item::new(ItemId(7), "  Pack the laptop \n").unwrap();
        assert_eq!(item.id, ItemId(7));
        assert_eq!(item.text, "Pack the laptop");
        assert!(!item.completed);
    }

    #[test]
    fn test_blank_item_is_rejected() {
        assert!(Item::new(ItemId(1), "").is_none());
        assert!(Item::new(ItemId(1), " \t ").is_none());
    }
}
