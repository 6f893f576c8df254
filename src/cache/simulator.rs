//! Replaying a reference sequence against a bounded cache.
//!
//! Every reference is classified exactly once:
//!
//! ```text
//!   page resident? ── yes ──► hit
//!        │
//!        no
//!        │
//!   room left? ──── yes ──► cold miss (insert)
//!        │
//!        no
//!        │
//!   capacity 0? ─── yes ──► capacity miss (nothing stored)
//!        │
//!        no ──────────────► capacity miss (evict victim, insert)
//! ```

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cache::replacer::{OptimalReplacer, RandomReplacer, Replacer};
use crate::cache::ResidentSet;
use crate::common::{Error, PageId, Result};

/// The replacement policies compared by an experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    /// Uniform random eviction.
    #[serde(rename = "RAND")]
    Rand,
    /// Belady's optimal eviction.
    #[serde(rename = "OPT")]
    Opt,
}

impl Policy {
    /// Every policy, in presentation order.
    pub const ALL: [Policy; 2] = [Policy::Rand, Policy::Opt];

    /// Label used in reports and chart legends.
    pub fn label(self) -> &'static str {
        match self {
            Policy::Rand => "RAND",
            Policy::Opt => "OPT",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Counters for one simulation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStats {
    /// References to a resident page.
    pub hits: u64,

    /// Misses while the cache still had free space.
    pub cold_misses: u64,

    /// Misses on a full cache (including every miss at capacity 0).
    pub capacity_misses: u64,

    /// Pages removed to make room.
    pub evictions: u64,
}

impl SimulationStats {
    /// Total references processed.
    pub fn references(&self) -> u64 {
        self.hits + self.misses()
    }

    /// Cold plus capacity misses.
    pub fn misses(&self) -> u64 {
        self.cold_misses + self.capacity_misses
    }

    /// Fraction of references that hit (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.references();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, cold: {}, capacity: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.hits,
            self.cold_misses,
            self.capacity_misses,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}

/// Replays reference sequences against a cache of fixed capacity.
///
/// The cache state lives only for the duration of one [`run`](Self::run);
/// the simulator itself holds nothing but the capacity.
///
/// # Example
/// ```
/// use evictsim::cache::{replacer::OptimalReplacer, CacheSimulator};
/// use evictsim::pages;
///
/// let seq = pages(&[1, 2, 3, 1, 2, 3, 1, 2, 3]);
/// let stats = CacheSimulator::new(2)
///     .run(&seq, &mut OptimalReplacer::new(&seq))
///     .unwrap();
/// assert_eq!(stats.hits, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheSimulator {
    capacity: usize,
}

impl CacheSimulator {
    /// Create a simulator. A capacity of 0 is valid: nothing is ever cached.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Maximum number of resident pages.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Replay `sequence`, consulting `replacer` whenever the cache is full.
    ///
    /// # Errors
    /// - `Error::InvalidArgument` if `sequence` is empty
    /// - `Error::InvalidArgument` if the replacer names no victim, or a
    ///   page that isn't resident, for a full cache
    pub fn run<P>(&self, sequence: &[PageId], replacer: &mut P) -> Result<SimulationStats>
    where
        P: Replacer + ?Sized,
    {
        if sequence.is_empty() {
            return Err(Error::invalid("reference sequence must not be empty"));
        }

        let mut resident = ResidentSet::with_capacity(self.capacity);
        let mut stats = SimulationStats::default();

        for (position, &page) in sequence.iter().enumerate() {
            if resident.contains(page) {
                stats.hits += 1;
                replacer.record_access(position, page);
                continue;
            }

            if resident.len() < self.capacity {
                stats.cold_misses += 1;
            } else {
                stats.capacity_misses += 1;
                if self.capacity == 0 {
                    continue;
                }
                let victim = replacer.evict(&resident, position).ok_or_else(|| {
                    Error::invalid(format!("no victim for a full cache at position {}", position))
                })?;
                if !resident.remove(victim) {
                    return Err(Error::invalid(format!(
                        "victim {} is not resident at position {}",
                        victim, position
                    )));
                }
                stats.evictions += 1;
            }

            resident.insert(page);
            replacer.record_access(position, page);
        }

        Ok(stats)
    }
}

/// Hit rate of RAND on `sequence` with `capacity` pages, drawing victims
/// from `rng`.
///
/// # Errors
/// `Error::InvalidArgument` if `sequence` is empty.
pub fn simulate_rand<R>(sequence: &[PageId], capacity: usize, rng: &mut R) -> Result<f64>
where
    R: Rng + ?Sized,
{
    let stats = CacheSimulator::new(capacity).run(sequence, &mut RandomReplacer::new(rng))?;
    Ok(stats.hit_rate())
}

/// Hit rate of OPT on `sequence` with `capacity` pages.
///
/// A pure function of its inputs.
///
/// # Errors
/// `Error::InvalidArgument` if `sequence` is empty.
pub fn simulate_opt(sequence: &[PageId], capacity: usize) -> Result<f64> {
    let stats = CacheSimulator::new(capacity).run(sequence, &mut OptimalReplacer::new(sequence))?;
    Ok(stats.hit_rate())
}
