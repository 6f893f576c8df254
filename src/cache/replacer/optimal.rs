//! OPT (Belady) replacement policy.
//!
//! On a full-cache miss, evict the resident page whose next reference lies
//! furthest in the future, or that is never referenced again.
//!
//! # Tie-break
//! Finite next-use positions are unique (one reference per position), so
//! ties only occur among pages that never recur. Those are broken by
//! evicting the **lowest** page ID.
//!
//! # Implementations
//! - [`OptimalReplacer`] precomputes, for every position, the position of
//!   the next reference to the same page. Resident pages sit in a
//!   `BTreeSet` keyed by next use, so each decision is O(log m).
//! - [`ForwardScanReplacer`] recomputes [`forward_distance`] for every
//!   resident page at every eviction, O(n·m) per simulation. It makes the
//!   same choices and exists as a reference for the indexed version.

use std::cmp::Reverse;
use std::collections::{BTreeSet, HashMap};

use super::Replacer;
use crate::cache::ResidentSet;
use crate::common::PageId;

/// Next-use position of a page that is never referenced again.
const NEVER: usize = usize::MAX;

/// Number of references from the start of `future` until `page` appears,
/// or `None` if it never does.
///
/// # Example
/// ```
/// use evictsim::cache::replacer::forward_distance;
/// use evictsim::{pages, PageId};
///
/// let future = pages(&[4, 2, 7]);
/// assert_eq!(forward_distance(PageId::new(7), &future), Some(2));
/// assert_eq!(forward_distance(PageId::new(1), &future), None);
/// ```
pub fn forward_distance(page: PageId, future: &[PageId]) -> Option<usize> {
    future.iter().position(|&p| p == page)
}

/// Belady's policy over a known reference sequence.
#[derive(Debug, Clone)]
pub struct OptimalReplacer {
    /// `next_use[i]`: index of the next reference to `sequence[i]` after `i`.
    next_use: Vec<usize>,

    /// Resident pages ordered by next use; the last entry is the victim.
    queue: BTreeSet<(usize, Reverse<PageId>)>,

    /// Current queue key for each resident page.
    scheduled: HashMap<PageId, usize>,
}

impl OptimalReplacer {
    /// Build the next-use table for `sequence` in one reverse pass.
    pub fn new(sequence: &[PageId]) -> Self {
        let mut next_use = vec![NEVER; sequence.len()];
        let mut seen: HashMap<PageId, usize> = HashMap::new();

        for (i, &page) in sequence.iter().enumerate().rev() {
            if let Some(later) = seen.insert(page, i) {
                next_use[i] = later;
            }
        }

        Self {
            next_use,
            queue: BTreeSet::new(),
            scheduled: HashMap::new(),
        }
    }

    /// Position of the next reference after `position` to the page at
    /// `position`, or `None` if there is none.
    pub fn next_use(&self, position: usize) -> Option<usize> {
        match self.next_use.get(position) {
            Some(&NEVER) | None => None,
            Some(&next) => Some(next),
        }
    }
}

impl Replacer for OptimalReplacer {
    fn record_access(&mut self, position: usize, page: PageId) {
        let next = self.next_use.get(position).copied().unwrap_or(NEVER);
        if let Some(old) = self.scheduled.insert(page, next) {
            self.queue.remove(&(old, Reverse(page)));
        }
        self.queue.insert((next, Reverse(page)));
    }

    fn evict(&mut self, resident: &ResidentSet, position: usize) -> Option<PageId> {
        let (next, Reverse(victim)) = self.queue.pop_last()?;
        self.scheduled.remove(&victim);
        debug_assert!(resident.contains(victim));

        if next == NEVER {
            tracing::trace!(position, %victim, "opt evict: never referenced again");
        } else {
            tracing::trace!(position, %victim, distance = next - position, "opt evict");
        }
        Some(victim)
    }
}

/// Belady's policy computed the direct way: scan the remaining sequence
/// for every resident page at every eviction.
#[derive(Debug, Clone, Copy)]
pub struct ForwardScanReplacer<'a> {
    sequence: &'a [PageId],
}

impl<'a> ForwardScanReplacer<'a> {
    /// Create a scanner over `sequence`.
    pub fn new(sequence: &'a [PageId]) -> Self {
        Self { sequence }
    }
}

impl Replacer for ForwardScanReplacer<'_> {
    fn record_access(&mut self, _position: usize, _page: PageId) {}

    fn evict(&mut self, resident: &ResidentSet, position: usize) -> Option<PageId> {
        let future = self.sequence.get(position..).unwrap_or(&[]);
        resident
            .iter()
            .max_by_key(|&page| {
                let distance = forward_distance(page, future).unwrap_or(NEVER);
                (distance, Reverse(page))
            })
    }
}
