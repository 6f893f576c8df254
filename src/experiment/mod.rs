//! Experiments: many simulations, averaged.
//!
//! # Components
//! - [`ExperimentRunner`] - Sweeps cache sizes, averaging over trials
//! - [`ExperimentResults`] - Per-policy averaged hit rates
//! - [`TrialOutcome`] - Both policies' statistics for a single sequence

mod runner;

pub use runner::{ExperimentResults, ExperimentRunner, TrialOutcome};
