//! RAND replacement policy.

use rand::Rng;

use super::Replacer;
use crate::cache::ResidentSet;
use crate::common::PageId;

/// Evicts a uniformly random resident page.
///
/// Keeps no per-page state; the only input is the RNG, which the caller
/// supplies so runs can be seeded.
#[derive(Debug)]
pub struct RandomReplacer<R> {
    rng: R,
}

impl<R: Rng> RandomReplacer<R> {
    /// Create a replacer drawing from `rng`.
    ///
    /// Pass `&mut rng` to keep using the generator afterwards.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Give back the RNG.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> Replacer for RandomReplacer<R> {
    fn record_access(&mut self, _position: usize, _page: PageId) {}

    fn evict(&mut self, resident: &ResidentSet, _position: usize) -> Option<PageId> {
        if resident.is_empty() {
            return None;
        }
        let slot = self.rng.gen_range(0..resident.len());
        resident.get(slot)
    }
}
