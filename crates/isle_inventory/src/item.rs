//! Item records carried in a backpack

use serde::{Deserialize, Serialize};

/// Lowest item priority
pub const PRIORITY_MIN: u8 = 1;
/// Highest item priority
pub const PRIORITY_MAX: u8 = 5;

/// A single backpack entry
///
/// The name doubles as the lookup key for searches and removal. Names are
/// not required to be unique; lookups return the first match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display name; also the lookup key
    pub name: String,
    /// Item kind, e.g. "Tool" or "Heal"
    pub kind: String,
    /// How many are carried
    pub quantity: u32,
    /// Priority from 1 (lowest) to 5 (highest)
    pub priority: u8,
}

impl Item {
    /// Create a new item with quantity 1 and the lowest priority
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            quantity: 1,
            priority: PRIORITY_MIN,
        }
    }

    /// Set quantity
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Set priority, clamped to the valid range
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority.clamp(PRIORITY_MIN, PRIORITY_MAX);
        self
    }
}
