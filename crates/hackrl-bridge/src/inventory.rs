//! Inventory mirror

use hackrl_core::InventoryItem;

/// Carried items as of the last refresh.
///
/// Never patched; every refresh replaces the whole list.
#[derive(Debug, Clone, Default)]
pub struct InventoryMirror {
    items: Vec<InventoryItem>,
}

impl InventoryMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list with the host's current items
    pub fn refresh<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = InventoryItem>,
    {
        self.items.clear();
        self.items.extend(items);
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
