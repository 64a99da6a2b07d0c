//! Sorting and binary search over item slices
//!
//! Insertion sort is the only ordering algorithm here. The backpack holds
//! at most ten items, and the comparison count is part of the result
//! surface.

use crate::item::Item;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort criterion for a backpack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// Ascending lexicographic by item name
    Name,
    /// Ascending lexicographic by item kind
    Kind,
    /// Descending numeric by priority (highest first)
    Priority,
}

impl SortKey {
    /// True when `a` must appear strictly before `b` under this key
    fn precedes(&self, a: &Item, b: &Item) -> bool {
        match self {
            Self::Name => a.name < b.name,
            Self::Kind => a.kind < b.kind,
            Self::Priority => a.priority > b.priority,
        }
    }
}

/// Insertion sort, returning the number of comparisons performed
///
/// Each pass holds one item and shifts it left past every preceding item
/// that must come after it. One comparison is counted per element examined,
/// including the comparison that stops a shift. Equal keys never shift past
/// each other, so the sort is stable.
pub fn insertion_sort(items: &mut [Item], key: SortKey) -> usize {
    let mut comparisons = 0;

    for i in 1..items.len() {
        let held = items[i].clone();
        let mut j = i;

        while j > 0 {
            comparisons += 1;
            if key.precedes(&held, &items[j - 1]) {
                items[j] = items[j - 1].clone();
                j -= 1;
            } else {
                break;
            }
        }

        items[j] = held;
    }

    comparisons
}

/// Binary search by name over a slice already sorted ascending by name
///
/// Returns the index of a matching item, or `None` when the range is
/// exhausted. The slice must actually be name-sorted; callers go through
/// [`Backpack::search_binary`](crate::backpack::Backpack::search_binary),
/// which checks the sort state before dispatching here.
pub fn binary_search_by_name(items: &[Item], name: &str) -> Option<usize> {
    let mut lo = 0;
    let mut hi = items.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match name.cmp(items[mid].name.as_str()) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => hi = mid,
            Ordering::Greater => lo = mid + 1,
        }
    }

    None
}
