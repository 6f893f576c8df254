//! Monte Carlo driver comparing RAND and OPT across cache sizes.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::cache::replacer::{OptimalReplacer, RandomReplacer};
use crate::cache::{CacheSimulator, Policy, SimulationStats};
use crate::common::{Error, Result, SimulationConfig};
use crate::workload::{SequenceGenerator, SkewedGenerator};

/// Both policies' statistics for one generated sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialOutcome {
    pub rand: SimulationStats,
    pub opt: SimulationStats,
}

impl TrialOutcome {
    /// Statistics for one policy.
    pub fn stats(&self, policy: Policy) -> &SimulationStats {
        match policy {
            Policy::Rand => &self.rand,
            Policy::Opt => &self.opt,
        }
    }
}

/// Trial-averaged hit rates, positionally aligned with `cache_sizes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentResults {
    pub cache_sizes: Vec<usize>,
    pub rand: Vec<f64>,
    pub opt: Vec<f64>,
    pub num_trials: usize,
    pub seed: u64,
}

impl ExperimentResults {
    /// Averaged hit rates for one policy.
    pub fn hit_rates(&self, policy: Policy) -> &[f64] {
        match policy {
            Policy::Rand => &self.rand,
            Policy::Opt => &self.opt,
        }
    }

    /// `(rand_results, opt_results)`.
    pub fn into_pair(self) -> (Vec<f64>, Vec<f64>) {
        (self.rand, self.opt)
    }

    /// Whether no cache sizes were run.
    pub fn is_empty(&self) -> bool {
        self.cache_sizes.is_empty()
    }
}

/// Runs both policies over freshly generated sequences and averages the
/// hit rates per cache size.
///
/// Every `(cache size, trial)` pair draws its own sequence from its own
/// RNG, seeded by [`trial_seed`](Self::trial_seed). Within a trial the same
/// sequence feeds both policies, and the same RNG goes on to drive RAND's
/// victim choices.
///
/// # Example
/// ```
/// use evictsim::{ExperimentRunner, SkewedGenerator};
///
/// let runner = ExperimentRunner::new(SkewedGenerator::default(), 200, 42);
/// let results = runner.run(&[10, 40], 3).unwrap();
///
/// assert_eq!(results.rand.len(), 2);
/// assert!(results.opt[0] >= results.rand[0]);
/// ```
#[derive(Debug, Clone)]
pub struct ExperimentRunner<G = SkewedGenerator> {
    generator: G,
    sequence_length: usize,
    seed: u64,
    parallel: bool,
}

impl ExperimentRunner<SkewedGenerator> {
    /// Build a runner from a validated config.
    ///
    /// A config without a seed gets one from OS entropy; it is logged and
    /// recorded in the results so the run can be repeated.
    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        config.validate()?;
        let generator = SkewedGenerator::from_config(config)?;
        let seed = match config.seed {
            Some(seed) => seed,
            None => {
                let seed = rand::random();
                tracing::info!(seed, "no seed configured, drew one from entropy");
                seed
            }
        };
        Ok(Self::new(generator, config.sequence_length, seed).with_parallel(config.parallel))
    }
}

impl<G: SequenceGenerator + Sync> ExperimentRunner<G> {
    /// Create a sequential runner producing `sequence_length`-reference sequences.
    pub fn new(generator: G, sequence_length: usize, seed: u64) -> Self {
        Self {
            generator,
            sequence_length,
            seed,
            parallel: false,
        }
    }

    /// Run the trials of each cache size on the rayon pool.
    ///
    /// Results are identical to a sequential run with the same seed.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Base seed all trial seeds derive from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// References per generated sequence.
    pub fn sequence_length(&self) -> usize {
        self.sequence_length
    }

    /// Seed for trial `trial` of the cache size at `size_index`.
    pub fn trial_seed(&self, size_index: usize, trial: usize) -> u64 {
        let slot = ((size_index as u64) << 32) | (trial as u64 & 0xFFFF_FFFF);
        splitmix64(self.seed ^ splitmix64(slot))
    }

    /// Generate one sequence from `seed` and replay it under both policies.
    pub fn run_trial(&self, capacity: usize, seed: u64) -> Result<TrialOutcome> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let sequence = self.generator.generate(self.sequence_length, &mut rng)?;

        let simulator = CacheSimulator::new(capacity);
        let rand = simulator.run(&sequence, &mut RandomReplacer::new(&mut rng))?;
        let opt = simulator.run(&sequence, &mut OptimalReplacer::new(&sequence))?;

        tracing::debug!(
            capacity,
            seed,
            rand_hit_rate = rand.hit_rate(),
            opt_hit_rate = opt.hit_rate(),
            "trial complete"
        );
        Ok(TrialOutcome { rand, opt })
    }

    /// Average each policy's hit rate over `num_trials` sequences, for
    /// every capacity in `cache_sizes`.
    ///
    /// # Errors
    /// - `Error::InvalidArgument` if `num_trials` is 0
    /// - any error from generation or simulation, for the first failing trial
    pub fn run(&self, cache_sizes: &[usize], num_trials: usize) -> Result<ExperimentResults> {
        if num_trials == 0 {
            return Err(Error::invalid("num_trials must be > 0"));
        }

        let mut results = ExperimentResults {
            cache_sizes: cache_sizes.to_vec(),
            rand: Vec::with_capacity(cache_sizes.len()),
            opt: Vec::with_capacity(cache_sizes.len()),
            num_trials,
            seed: self.seed,
        };

        for (size_index, &capacity) in cache_sizes.iter().enumerate() {
            let outcomes = self.run_trials(size_index, capacity, num_trials)?;

            // Summed in trial order so parallel and sequential runs agree bit for bit.
            let mut rand_sum = 0.0;
            let mut opt_sum = 0.0;
            for outcome in &outcomes {
                rand_sum += outcome.rand.hit_rate();
                opt_sum += outcome.opt.hit_rate();
            }
            let rand_avg = rand_sum / num_trials as f64;
            let opt_avg = opt_sum / num_trials as f64;

            tracing::info!(
                capacity,
                num_trials,
                rand = rand_avg,
                opt = opt_avg,
                "cache size complete"
            );
            results.rand.push(rand_avg);
            results.opt.push(opt_avg);
        }

        Ok(results)
    }

    fn run_trials(
        &self,
        size_index: usize,
        capacity: usize,
        num_trials: usize,
    ) -> Result<Vec<TrialOutcome>> {
        if self.parallel {
            (0..num_trials)
                .into_par_iter()
                .map(|trial| self.run_trial(capacity, self.trial_seed(size_index, trial)))
                .collect()
        } else {
            (0..num_trials)
                .map(|trial| self.run_trial(capacity, self.trial_seed(size_index, trial)))
                .collect()
        }
    }
}

fn splitmix64(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
