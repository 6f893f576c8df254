//! The set of pages currently held by a simulated cache.
//!
//! ```text
//!   slots: HashMap<PageId, usize>      pages: Vec<PageId>
//!   ┌─────────┬─────┐                  ┌─────┬─────┬─────┬─────┐
//!   │ Page(7) │  0  │ ───────────────► │  7  │  3  │  9  │  1  │
//!   │ Page(3) │  1  │                  └─────┴─────┴─────┴─────┘
//!   │ ...     │ ... │
//!   └─────────┴─────┘
//! ```
//!
//! The dense `pages` vector makes a uniform random pick O(1); removal
//! swaps the victim with the last slot and pops.

use std::collections::HashMap;

use crate::common::PageId;

/// Unordered set of resident pages with O(1) membership, insert, remove,
/// and positional access.
#[derive(Debug, Clone, Default)]
pub struct ResidentSet {
    pages: Vec<PageId>,
    slots: HashMap<PageId, usize>,
}

impl ResidentSet {
    /// Create an empty set with room for `capacity` pages.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pages: Vec::with_capacity(capacity),
            slots: HashMap::with_capacity(capacity),
        }
    }

    /// Whether `page` is resident.
    #[inline]
    pub fn contains(&self, page: PageId) -> bool {
        self.slots.contains_key(&page)
    }

    /// Number of resident pages.
    #[inline]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether no page is resident.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Add a page. Returns `false` if it was already resident.
    pub fn insert(&mut self, page: PageId) -> bool {
        if self.slots.contains_key(&page) {
            return false;
        }
        self.slots.insert(page, self.pages.len());
        self.pages.push(page);
        true
    }

    /// Remove a page. Returns `false` if it wasn't resident.
    pub fn remove(&mut self, page: PageId) -> bool {
        let Some(slot) = self.slots.remove(&page) else {
            return false;
        };
        let last = self.pages.len() - 1;
        if slot != last {
            self.pages.swap(slot, last);
            let moved = self.pages[slot];
            self.slots.insert(moved, slot);
        }
        self.pages.pop();
        true
    }

    /// The page in slot `index`. Slot order is arbitrary and changes on removal.
    #[inline]
    pub fn get(&self, index: usize) -> Option<PageId> {
        self.pages.get(index).copied()
    }

    /// Iterate over resident pages in slot order.
    pub fn iter(&self) -> impl Iterator<Item = PageId> + '_ {
        self.pages.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut set = ResidentSet::with_capacity(4);
        assert!(set.insert(PageId::new(1)));
        assert!(set.insert(PageId::new(2)));
        assert!(!set.insert(PageId::new(1)));

        assert_eq!(set.len(), 2);
        assert!(set.contains(PageId::new(1)));
        assert!(!set.contains(PageId::new(3)));
    }

    #[test]
    fn test_remove_swaps_last_into_hole() {
        let mut set = ResidentSet::default();
        for id in [10, 20, 30] {
            set.insert(PageId::new(id));
        }

        assert!(set.remove(PageId::new(10)));
        assert!(!set.remove(PageId::new(10)));

        assert_eq!(set.len(), 2);
        assert_eq!(set.get(0), Some(PageId::new(30)));
        assert_eq!(set.get(1), Some(PageId::new(20)));

        // Slot bookkeeping must survive the swap.
        assert!(set.remove(PageId::new(30)));
        assert_eq!(set.get(0), Some(PageId::new(20)));
    }

    #[test]
    fn test_remove_last() {
        let mut set = ResidentSet::default();
        set.insert(PageId::new(1));
        assert!(set.remove(PageId::new(1)));
        assert!(set.is_empty());
        assert_eq!(set.get(0), None);
    }

    #[test]
    fn test_iter() {
        let mut set = ResidentSet::default();
        set.insert(PageId::new(4));
        set.insert(PageId::new(5));
        let mut pages: Vec<_> = set.iter().collect();
        pages.sort();
        assert_eq!(pages, vec![PageId::new(4), PageId::new(5)]);
    }
}
