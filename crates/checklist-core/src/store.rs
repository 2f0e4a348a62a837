//! Item Store
//!
//! The ordered list of checklist items. Insertion order is display order.

use crate::ids::{IdGenerator, SequentialIds};
use crate::item::{Item, ItemId};

#[derive(Debug, Default)]
pub struct ItemStore<G = SequentialIds> {
    items: Vec<Item>,
    ids: G,
}

impl<G: IdGenerator> ItemStore<G> {
    /// Empty store drawing ids from `ids`
    pub fn new(ids: G) -> Self {
        Self {
            items: Vec::new(),
            ids,
        }
    }

    /// Store pre-filled with `seed`, all incomplete
    pub fn with_seed<S: AsRef<str>>(ids: G, seed: &[S]) -> Self {
        let mut store = Self::new(ids);
        store.replace_all(seed);
        store
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    /// Append a new incomplete item. Blank text is ignored and returns `None`.
    pub fn add(&mut self, text: &str) -> Option<&Item> {
        if text.trim().is_empty() {
            return None;
        }
        let item = Item::new(self.ids.next_id(), text)?;
        self.items.push(item);
        self.items.last()
    }

    /// Flip `completed` on the item with `id`, returning the new value.
    /// Unknown ids are ignored.
    pub fn toggle(&mut self, id: ItemId) -> Option<bool> {
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.completed = !item.completed;
        Some(item.completed)
    }

    /// Remove the item with `id`. Unknown ids are ignored.
    pub fn delete(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Discard every item and install one fresh incomplete item per line.
    /// Blank lines are skipped.
    pub fn replace_all<S: AsRef<str>>(&mut self, lines: &[S]) -> &[Item] {
        let ids = &self.ids;
        self.items = lines
            .iter()
            .filter_map(|line| {
                let line = line.as_ref();
                if line.trim().is_empty() {
                    None
                } else {
                    Item::new(ids.next_id(), line)
                }
            })
            .collect();
        &self.items
    }

    /// Empty the store
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// True iff the list is non-empty and every item is completed
    pub fn is_all_complete(&self) -> bool {
        !self.items.is_empty() && self.items.iter().all(|item| item.completed)
    }
}
