//! Configuration for evictsim.
//!
//! The defaults reproduce the classic experiment: 2000-reference sequences
//! where 80% of the traffic hits 20% of the pages, averaged over ten trials
//! for each of five cache sizes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::workload::SkewedGenerator;

/// Length of each generated reference sequence, and size of the page space.
pub const DEFAULT_SEQUENCE_LENGTH: usize = 2000;

/// Fraction of the page space that forms the hot set.
pub const DEFAULT_MAJORITY_FRACTION: f64 = 0.2;

/// Fraction of references that go to the hot set.
pub const DEFAULT_MAJORITY_TRAFFIC_SHARE: f64 = 0.8;

/// Cache capacities swept by the default experiment.
pub const DEFAULT_CACHE_SIZES: [usize; 5] = [20, 50, 70, 100, 200];

/// Independent sequences generated per cache size.
pub const DEFAULT_NUM_TRIALS: usize = 10;

/// How hot and cold references are arranged within a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceLayout {
    /// All hot references first, then all cold references.
    #[default]
    Blocked,
    /// Each reference independently hot with probability `majority_traffic_share`.
    Interleaved,
}

/// Everything one experiment needs.
///
/// Every field has a default, so a JSON config only has to name what it
/// changes:
///
/// ```
/// use evictsim::SimulationConfig;
///
/// let config: SimulationConfig = serde_json::from_str(r#"{"num_trials": 3}"#).unwrap();
/// assert_eq!(config.num_trials, 3);
/// assert_eq!(config.sequence_length, 2000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// References per sequence; also the number of distinct page IDs.
    pub sequence_length: usize,

    /// Hot-set size as a fraction of the page space.
    pub majority_fraction: f64,

    /// Share of references drawn from the hot set.
    pub majority_traffic_share: f64,

    /// Arrangement of hot and cold references.
    pub layout: SequenceLayout,

    /// Capacities to sweep, in presentation order.
    pub cache_sizes: Vec<usize>,

    /// Trials averaged per cache size.
    pub num_trials: usize,

    /// Base seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,

    /// Run the trials of each cache size on the rayon pool.
    pub parallel: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            sequence_length: DEFAULT_SEQUENCE_LENGTH,
            majority_fraction: DEFAULT_MAJORITY_FRACTION,
            majority_traffic_share: DEFAULT_MAJORITY_TRAFFIC_SHARE,
            layout: SequenceLayout::default(),
            cache_sizes: DEFAULT_CACHE_SIZES.to_vec(),
            num_trials: DEFAULT_NUM_TRIALS,
            seed: None,
            parallel: false,
        }
    }
}

impl SimulationConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    ///
    /// # Errors
    /// - `Error::Io` if the file can't be read
    /// - `Error::Json` if it isn't valid JSON for this struct
    /// - `Error::InvalidArgument` if the values fail [`validate`](Self::validate)
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: SimulationConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field that would otherwise fail deep inside a run.
    ///
    /// An empty `cache_sizes` is allowed and yields empty results.
    pub fn validate(&self) -> Result<()> {
        if self.num_trials == 0 {
            return Err(Error::invalid("num_trials must be > 0"));
        }
        if self.sequence_length == 0 {
            return Err(Error::invalid("sequence_length must be > 0"));
        }
        if u32::try_from(self.sequence_length).is_err() {
            return Err(Error::invalid(format!(
                "sequence_length {} exceeds the page ID space",
                self.sequence_length
            )));
        }
        check_fraction("majority_fraction", self.majority_fraction)?;
        check_fraction("majority_traffic_share", self.majority_traffic_share)?;
        SkewedGenerator::from_config(self)?.ranges(self.sequence_length)?;
        Ok(())
    }
}

/// Fractions must lie strictly inside `(0, 1)`; either endpoint empties one
/// side of the hot/cold split.
pub(crate) fn check_fraction(name: &str, value: f64) -> Result<()> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(Error::invalid(format!("{} must be in (0, 1), got {}", name, value)))
    }
}
