//! Item id generation.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::item::ItemId;

/// Source of item ids. Every call must return an id never returned before.
pub trait IdGenerator {
    fn next_id(&self) -> ItemId;
}

/// Monotonic counter. Ids stay unique however many items are created in the
/// same instant, e.g. during a bulk import.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> ItemId {
        ItemId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids_are_strictly_increasing() {
        let ids = SequentialIds::starting_at(1_700_000_000_000);
        let a = ids.next_id();
        let b = ids.next_id();
        let c = ids.next_id();
        assert!(a < b && b < c);
        assert_eq!(a, ItemId(1_700_000_000_000));
    }
}
