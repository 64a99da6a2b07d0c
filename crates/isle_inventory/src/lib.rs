//! Isle Inventory - Backpack and Item System
//!
//! This crate provides the fixed-capacity backpack store used by the
//! survival runtime.
//!
//! # Features
//!
//! - Item records with name, kind, quantity, and priority
//! - Bounded backpack holding up to ten items in sequence order
//! - Linear and binary search by name
//! - Insertion sort by name, kind, or priority with a comparison count
//! - Sort-state tracking that gates binary search
//!
//! # Example
//!
//! ```
//! use isle_inventory::prelude::*;
//!
//! let mut pack = Backpack::new();
//! pack.add(Item::new("Medkit", "Heal").with_quantity(2).with_priority(5))?;
//! pack.add(Item::new("Rope", "Tool").with_priority(2))?;
//!
//! let comparisons = pack.sort(SortKey::Name);
//! assert_eq!(comparisons, 1);
//! assert_eq!(pack.search_binary("Rope")?, 1);
//! # Ok::<(), BackpackError>(())
//! ```

pub mod backpack;
pub mod item;
pub mod sort;

pub mod prelude {
    pub use crate::backpack::{Backpack, BackpackError, SortState};
    pub use crate::item::{Item, PRIORITY_MAX, PRIORITY_MIN};
    pub use crate::sort::SortKey;
}

pub use prelude::*;
