//! Inventory of named, valued items.
//!
//! A thin collection over [`InventoryItem`] sorted through
//! [`merge_sort`], by name or by value. Rendering goes through
//! `Display`; callers pick the sink (stdout, a log line, a UI list).

use serde::{Deserialize, Serialize};

use crate::sort::merge_sort;

/// A single inventory entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub name: String,
    pub value: i32,
}

impl InventoryItem {
    /// Create a named item.
    pub fn new(name: impl Into<String>, value: i32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl std::fmt::Display for InventoryItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.value)
    }
}

/// Ordered collection of items.
///
/// ## Example
///
/// ```
/// use party_kit::{Inventory, InventoryItem};
///
/// let mut inventory = Inventory::new();
/// inventory.add_item(InventoryItem::new("Axe", 3));
/// inventory.add_item(InventoryItem::new("Bread", 1));
/// inventory.add_item(InventoryItem::new("Cloak", 2));
///
/// inventory.sort_by_value();
/// let names: Vec<_> = inventory.items().iter().map(|i| i.name.as_str()).collect();
/// assert_eq!(names, ["Bread", "Cloak", "Axe"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<InventoryItem>,
}

impl Inventory {
    /// Create an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item.
    pub fn add_item(&mut self, item: InventoryItem) {
        self.items.push(item);
    }

    /// Items in current order.
    #[must_use]
    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    /// Number of items held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the inventory is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sort items alphabetically by name.
    pub fn sort_by_name(&mut self) {
        merge_sort(&mut self.items, |left, right| left.name < right.name);
    }

    /// Sort items ascending by value.
    pub fn sort_by_value(&mut self) {
        merge_sort(&mut self.items, |left, right| left.value < right.value);
    }
}

impl std::fmt::Display for Inventory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "----------------")?;
        for item in &self.items {
            writeln!(f, "{item}")?;
        }
        write!(f, "----------------")
    }
}
