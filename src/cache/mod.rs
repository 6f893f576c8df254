//! Cache simulation.
//!
//! A simulated cache is just a bounded set of page IDs. Replaying a
//! reference sequence against it counts hits and misses; a [`Replacer`]
//! decides which page leaves when the set is full.
//!
//! # Components
//! - [`CacheSimulator`] - The replay loop
//! - [`ResidentSet`] - The cache contents
//! - [`SimulationStats`] - Hit/miss counters for one run
//! - [`replacer`] - Eviction policy implementations
//!
//! [`Replacer`]: replacer::Replacer

pub mod replacer;
mod resident;
mod simulator;

pub use resident::ResidentSet;
pub use simulator::{simulate_opt, simulate_rand, CacheSimulator, Policy, SimulationStats};
