//! Bounded backpack store
//!
//! A fixed-capacity, ordered collection of items bundled with the record of
//! which key (if any) the sequence is currently sorted by. The sort-state
//! tag lives in the same struct as the items; every mutation path runs
//! through the store's own operations.

use crate::item::Item;
use crate::sort::{self, SortKey};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Backpack operation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackpackError {
    /// Add attempted at capacity
    #[error("Backpack full: capacity {0} items")]
    Full(usize),
    /// Remove or search missed
    #[error("Item not found: {0}")]
    NotFound(String),
    /// Binary search attempted without the name-sort precondition
    #[error("Binary search requires the backpack to be sorted by name")]
    NotSortedByName,
}

/// Which key the item sequence is currently ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortState {
    /// No ordering guarantee
    Unsorted,
    /// Ascending by name
    ByName,
    /// Ascending by kind
    ByKind,
    /// Descending by priority
    ByPriority,
}

impl Default for SortState {
    fn default() -> Self {
        Self::Unsorted
    }
}

impl From<SortKey> for SortState {
    fn from(key: SortKey) -> Self {
        match key {
            SortKey::Name => Self::ByName,
            SortKey::Kind => Self::ByKind,
            SortKey::Priority => Self::ByPriority,
        }
    }
}

/// Fixed-capacity backpack
///
/// Holds up to [`Backpack::CAPACITY`] items in insertion order and tracks
/// its sort state. Any successful add or remove drops the state back to
/// [`SortState::Unsorted`]; only [`Backpack::sort`] establishes an ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Backpack {
    /// Items in sequence order
    items: Vec<Item>,
    /// Ordering currently in effect
    sort_state: SortState,
}

impl Default for Backpack {
    fn default() -> Self {
        Self::new()
    }
}

impl Backpack {
    /// Maximum number of items carried
    pub const CAPACITY: usize = 10;

    /// Create an empty backpack
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(Self::CAPACITY),
            sort_state: SortState::Unsorted,
        }
    }

    /// Get the capacity
    pub fn capacity(&self) -> usize {
        Self::CAPACITY
    }

    /// Get the number of items carried
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the backpack is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if the backpack is full
    pub fn is_full(&self) -> bool {
        self.items.len() == Self::CAPACITY
    }

    /// Get the number of free slots
    pub fn free_slots(&self) -> usize {
        Self::CAPACITY - self.items.len()
    }

    /// Get the current sort state
    pub fn sort_state(&self) -> SortState {
        self.sort_state
    }

    /// Get the item sequence as a read-only view
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Get the item at an index
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Add an item to the end of the sequence
    ///
    /// The item's fields are taken as already validated; quantity and
    /// priority sanitization is the caller's concern. Fails when the
    /// backpack is at capacity, leaving it unchanged.
    pub fn add(&mut self, item: Item) -> Result<(), BackpackError> {
        if self.is_full() {
            return Err(BackpackError::Full(Self::CAPACITY));
        }

        self.items.push(item);
        self.sort_state = SortState::Unsorted;
        Ok(())
    }

    /// Remove the first item with the given name
    ///
    /// Later items shift left to close the gap, preserving their relative
    /// order. Returns the index the item occupied. Fails with
    /// [`BackpackError::NotFound`] leaving the backpack unchanged.
    pub fn remove(&mut self, name: &str) -> Result<usize, BackpackError> {
        let index = self.search_linear(name)?;

        self.items.remove(index);
        self.sort_state = SortState::Unsorted;
        Ok(index)
    }

    /// Linear search for the first item with the given name
    ///
    /// Scans the full sequence regardless of sort state.
    pub fn search_linear(&self, name: &str) -> Result<usize, BackpackError> {
        self.items
            .iter()
            .position(|item| item.name == name)
            .ok_or_else(|| BackpackError::NotFound(name.to_string()))
    }

    /// Sort the items by the given key, returning the comparison count
    ///
    /// Insertion sort with one comparison counted per element examined; the
    /// count is part of the result surface, not a diagnostic. On return the
    /// sort state matches the key, including for empty and single-item
    /// sequences.
    pub fn sort(&mut self, key: SortKey) -> usize {
        let comparisons = sort::insertion_sort(&mut self.items, key);
        self.sort_state = SortState::from(key);
        comparisons
    }

    /// Binary search for an item by name
    ///
    /// Requires the backpack to be sorted by name; an unsorted backpack is a
    /// usage error distinct from a miss, even when the items happen to be in
    /// name order.
    pub fn search_binary(&self, name: &str) -> Result<usize, BackpackError> {
        if self.sort_state != SortState::ByName {
            return Err(BackpackError::NotSortedByName);
        }

        sort::binary_search_by_name(&self.items, name)
            .ok_or_else(|| BackpackError::NotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_backpack() {
        let pack = Backpack::new();

        assert_eq!(pack.capacity(), Backpack::CAPACITY);
        assert_eq!(pack.len(), 0);
        assert!(pack.is_empty());
        assert!(!pack.is_full());
        assert_eq!(pack.free_slots(), Backpack::CAPACITY);
        assert_eq!(pack.sort_state(), SortState::Unsorted);
    }

    #[test]
    fn test_add_and_list() {
        let mut pack = Backpack::new();

        pack.add(Item::new("Rope", "Tool")).unwrap();
        pack.add(Item::new("Medkit", "Heal")).unwrap();

        assert_eq!(pack.len(), 2);
        assert_eq!(pack.items()[0].name, "Rope");
        assert_eq!(pack.items()[1].name, "Medkit");
        assert_eq!(pack.get(1).unwrap().kind, "Heal");
        assert!(pack.get(2).is_none());
    }

    #[test]
    fn test_add_at_capacity() {
        let mut pack = Backpack::new();
        for i in 0..Backpack::CAPACITY {
            pack.add(Item::new(format!("Item{i}"), "Misc")).unwrap();
        }
        assert!(pack.is_full());

        let err = pack.add(Item::new("Overflow", "Misc")).unwrap_err();
        assert_eq!(err, BackpackError::Full(Backpack::CAPACITY));
        assert_eq!(pack.len(), Backpack::CAPACITY);
        assert_eq!(pack.items().last().unwrap().name, "Item9");
    }

    #[test]
    fn test_remove_compacts_in_order() {
        let mut pack = Backpack::new();
        pack.add(Item::new("Axe", "Tool")).unwrap();
        pack.add(Item::new("Rope", "Tool")).unwrap();
        pack.add(Item::new("Medkit", "Heal")).unwrap();

        let index = pack.remove("Rope").unwrap();

        assert_eq!(index, 1);
        assert_eq!(pack.len(), 2);
        let names: Vec<&str> = pack.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Axe", "Medkit"]);
    }

    #[test]
    fn test_remove_missing_leaves_store_unchanged() {
        let mut pack = Backpack::new();
        pack.add(Item::new("Axe", "Tool")).unwrap();
        let before = pack.items().to_vec();

        let err = pack.remove("Torch").unwrap_err();

        assert_eq!(err, BackpackError::NotFound("Torch".to_string()));
        assert_eq!(pack.items(), &before[..]);
    }

    #[test]
    fn test_mutations_reset_sort_state() {
        let mut pack = Backpack::new();
        pack.add(Item::new("Rope", "Tool")).unwrap();
        pack.add(Item::new("Axe", "Tool")).unwrap();

        pack.sort(SortKey::Name);
        assert_eq!(pack.sort_state(), SortState::ByName);

        pack.add(Item::new("Medkit", "Heal")).unwrap();
        assert_eq!(pack.sort_state(), SortState::Unsorted);

        pack.sort(SortKey::Priority);
        assert_eq!(pack.sort_state(), SortState::ByPriority);

        pack.remove("Axe").unwrap();
        assert_eq!(pack.sort_state(), SortState::Unsorted);
    }

    #[test]
    fn test_failed_mutations_keep_sort_state() {
        let mut pack = Backpack::new();
        pack.add(Item::new("Rope", "Tool")).unwrap();
        pack.sort(SortKey::Name);

        assert!(pack.remove("Torch").is_err());
        assert_eq!(pack.sort_state(), SortState::ByName);
    }

    #[test]
    fn test_linear_search_first_match() {
        let mut pack = Backpack::new();
        pack.add(Item::new("Rope", "Tool").with_quantity(1)).unwrap();
        pack.add(Item::new("Rope", "Tool").with_quantity(3)).unwrap();

        // Duplicates are allowed; the first one wins.
        assert_eq!(pack.search_linear("Rope").unwrap(), 0);
    }

    #[test]
    fn test_linear_search_ignores_sort_state() {
        let mut pack = Backpack::new();
        pack.add(Item::new("Rope", "Tool")).unwrap();
        pack.add(Item::new("Axe", "Tool")).unwrap();

        assert_eq!(pack.search_linear("Axe").unwrap(), 1);

        pack.sort(SortKey::Name);
        assert_eq!(pack.search_linear("Axe").unwrap(), 0);
    }

    #[test]
    fn test_binary_search_requires_name_sort() {
        let mut pack = Backpack::new();
        // Added in name order, so the data is coincidentally sorted.
        pack.add(Item::new("Axe", "Tool")).unwrap();
        pack.add(Item::new("Rope", "Tool")).unwrap();

        let err = pack.search_binary("Axe").unwrap_err();
        assert_eq!(err, BackpackError::NotSortedByName);

        pack.sort(SortKey::Kind);
        let err = pack.search_binary("Axe").unwrap_err();
        assert_eq!(err, BackpackError::NotSortedByName);

        pack.sort(SortKey::Name);
        assert_eq!(pack.search_binary("Axe").unwrap(), 0);
    }

    #[test]
    fn test_binary_search_miss() {
        let mut pack = Backpack::new();
        pack.add(Item::new("Axe", "Tool")).unwrap();
        pack.sort(SortKey::Name);

        let err = pack.search_binary("Torch").unwrap_err();
        assert_eq!(err, BackpackError::NotFound("Torch".to_string()));
    }

    #[test]
    fn test_sort_empty_sets_state() {
        let mut pack = Backpack::new();

        assert_eq!(pack.sort(SortKey::Name), 0);
        assert_eq!(pack.sort_state(), SortState::ByName);
        assert!(pack.search_binary("Axe").is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut pack = Backpack::new();
        pack.add(Item::new("Medkit", "Heal").with_quantity(2).with_priority(5))
            .unwrap();
        pack.sort(SortKey::Name);

        let json = serde_json::to_string(&pack).unwrap();
        let back: Backpack = serde_json::from_str(&json).unwrap();

        assert_eq!(back.items(), pack.items());
        assert_eq!(back.sort_state(), SortState::ByName);
    }
}
