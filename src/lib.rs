//! evictsim - Monte Carlo comparison of page replacement policies.
//!
//! Estimates the hit rate of random eviction (RAND) and Belady's optimal
//! policy (OPT) on skewed synthetic workloads, across a sweep of cache
//! sizes.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            evictsim                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Workload (workload/)                       │   │
//! │  │   SkewedGenerator: 80% of refs → 20% of pages           │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Cache simulation (cache/)                  │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │      Replacers: RAND | OPT (indexed / scan)     │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │      CacheSimulator + ResidentSet + SimulationStats      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Experiments (experiment/)                  │   │
//! │  │   ExperimentRunner: sizes × trials, averaged            │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Presentation (report/)                     │   │
//! │  │   TextChart | JsonExport                                │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, config, Error)
//! - [`workload`] - Reference-sequence generation
//! - [`cache`] - Cache simulation and eviction policies
//! - [`experiment`] - Trial averaging across cache sizes
//! - [`report`] - Chart rendering and export
//!
//! # Quick Start
//! ```
//! use evictsim::{simulate_opt, simulate_rand, pages};
//! use rand::SeedableRng;
//!
//! let seq = pages(&[1, 2, 3, 1, 2, 3, 1, 2, 3]);
//! let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
//!
//! let opt = simulate_opt(&seq, 2).unwrap();
//! let rand = simulate_rand(&seq, 2, &mut rng).unwrap();
//! assert_eq!(opt, 3.0 / 9.0);
//! assert!(rand <= opt);
//! ```

pub mod cache;
pub mod common;
pub mod error;
pub mod experiment;
pub mod report;
pub mod workload;

// Re-export commonly used items at crate root for convenience
pub use common::config::{
    DEFAULT_CACHE_SIZES, DEFAULT_MAJORITY_FRACTION, DEFAULT_MAJORITY_TRAFFIC_SHARE,
    DEFAULT_NUM_TRIALS, DEFAULT_SEQUENCE_LENGTH,
};
pub use common::{pages, Error, PageId, Result, SequenceLayout, SimulationConfig};

pub use cache::{simulate_opt, simulate_rand, CacheSimulator, Policy, SimulationStats};
pub use experiment::{ExperimentResults, ExperimentRunner, TrialOutcome};
pub use report::{Presenter, Series};
pub use workload::{SequenceGenerator, SkewedGenerator};
