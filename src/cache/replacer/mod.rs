//! Eviction policy implementations (replacers).
//!
//! Currently implements:
//! - [`RandomReplacer`] - RAND, uniform random victim
//! - [`OptimalReplacer`] - OPT (Belady), indexed next-use queue
//! - [`ForwardScanReplacer`] - OPT by rescanning the future at every eviction

mod optimal;
mod random;

pub use optimal::{forward_distance, ForwardScanReplacer, OptimalReplacer};
pub use random::RandomReplacer;

use crate::cache::ResidentSet;
use crate::common::PageId;

/// An eviction rule driven by [`CacheSimulator`](crate::cache::CacheSimulator).
///
/// The simulator owns the resident set; a replacer only keeps whatever
/// bookkeeping it needs to choose a victim.
pub trait Replacer {
    /// Record that `page` was referenced at sequence index `position`,
    /// either as a hit or as a freshly inserted page.
    fn record_access(&mut self, position: usize, page: PageId);

    /// Pick and forget a victim among `resident`, before the reference at
    /// `position` is inserted.
    ///
    /// Returns `None` only if `resident` is empty.
    fn evict(&mut self, resident: &ResidentSet, position: usize) -> Option<PageId>;
}
