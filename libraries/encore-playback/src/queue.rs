//! Now-playing queue
//!
//! Ordered working set of items the controller traverses. Insertion order
//! defines next/previous order. Ids are expected to be unique but this is
//! not enforced: lookups return the first match.

use encore_core::{ItemId, PlayableItem};

/// Ordered queue of playable items
///
/// ```text
///   index:   0      1      2
///          [ A ] -> [ B ] -> [ C ] --+
///            ^                       |
///            +-------- wrap ---------+
/// ```
#[derive(Debug, Clone, Default)]
pub struct Queue {
    items: Vec<PlayableItem>,
}

impl Queue {
    /// Create new empty queue
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Replace the entire queue
    pub fn replace(&mut self, items: Vec<PlayableItem>) {
        self.items = items;
    }

    /// Append an item, returning its index
    pub fn push(&mut self, item: PlayableItem) -> usize {
        self.items.push(item);
        self.items.len() - 1
    }

    /// Index of the first item with the given id
    pub fn position_of(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    /// Get item at index
    pub fn get(&self, index: usize) -> Option<&PlayableItem> {
        self.items.get(index)
    }

    /// Index after `current`, wrapping to the start
    ///
    /// With no current index the first item is next.
    pub fn next_index(&self, current: Option<usize>) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }
        Some(current.map_or(0, |i| (i + 1) % self.items.len()))
    }

    /// Index before `current`, wrapping to the end
    ///
    /// With no current index the last item is previous.
    pub fn previous_index(&self, current: Option<usize>) -> Option<usize> {
        let len = self.items.len();
        if len == 0 {
            return None;
        }
        Some(current.map_or(len - 1, |i| (i % len + len - 1) % len))
    }

    /// Ids in traversal order
    pub fn ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id.clone()).collect()
    }

    /// All items in traversal order
    pub fn items(&self) -> &[PlayableItem] {
        &self.items
    }

    /// Total number of items in queue
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if queue is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
