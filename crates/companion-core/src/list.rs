//! Bounded list of user-entered names.

use rand::Rng;
use rand::rngs::StdRng;

/// Default maximum number of entries for character and thread lists.
pub const DEFAULT_CAPACITY: usize = 25;

/// An ordered, capped list of trimmed, non-empty names.
///
/// Duplicates are allowed. Every mutation is guarded: blank input, a full
/// list or an out-of-range index leave the list untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemList {
    items: Vec<String>,
    capacity: usize,
}

impl Default for ItemList {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl ItemList {
    /// Create an empty list holding at most [`DEFAULT_CAPACITY`] items.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty list with a custom cap.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    /// Append the trimmed text. Returns `true` if the list changed.
    pub fn add(&mut self, raw: &str) -> bool {
        let name = raw.trim();
        if name.is_empty() {
            tracing::trace!("ignoring blank item");
            return false;
        }
        if self.is_full() {
            tracing::trace!(capacity = self.capacity, "list full, ignoring item");
            return false;
        }
        self.items.push(name.to_string());
        true
    }

    /// Remove the item at `index`, keeping the order of the rest.
    pub fn delete(&mut self, index: usize) -> Option<String> {
        if index >= self.items.len() {
            tracing::trace!(index, len = self.items.len(), "delete out of range");
            return None;
        }
        Some(self.items.remove(index))
    }

    /// Pick an item uniformly at random. `None` when the list is empty.
    pub fn pick(&self, rng: &mut StdRng) -> Option<&str> {
        if self.items.is_empty() {
            return None;
        }
        Some(&self.items[rng.random_range(0..self.items.len())])
    }

    /// All items in insertion order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Item at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maximum number of items.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether another item would be rejected for lack of room.
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }
}
