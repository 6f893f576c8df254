//! Skewed reference-sequence generation.
//!
//! The page space `[0, n)` is split into a hot range at the bottom and a
//! cold range at the top:
//!
//! ```text
//!   0         hot_end                 cold_start         n
//!   ├──────────┤                          ├──────────────┤
//!   │   hot    │        (never drawn)     │     cold     │
//!   └──────────┘                          └──────────────┘
//!     share × n references                (1 - share) × n references
//! ```
//!
//! With the defaults (`n = 2000`, fraction 0.2, share 0.8) this gives 1600
//! references into pages `[0, 400)` and 400 references into `[1600, 2000)`.

use std::collections::HashSet;

use rand::Rng;

use crate::common::config::{check_fraction, SequenceLayout};
use crate::common::{Error, PageId, Result, SimulationConfig};

/// Produces reference sequences for the simulators.
pub trait SequenceGenerator {
    /// Generate `n` references over the page space `[0, n)`.
    fn generate<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<PageId>>;
}

/// Hot/cold generator: `majority_traffic_share` of the references go to the
/// lowest `majority_fraction` of the page space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkewedGenerator {
    majority_fraction: f64,
    majority_traffic_share: f64,
    layout: SequenceLayout,
}

impl SkewedGenerator {
    /// Create a generator.
    ///
    /// # Errors
    /// `Error::InvalidArgument` if either fraction is outside `(0, 1)`.
    pub fn new(
        majority_fraction: f64,
        majority_traffic_share: f64,
        layout: SequenceLayout,
    ) -> Result<Self> {
        check_fraction("majority_fraction", majority_fraction)?;
        check_fraction("majority_traffic_share", majority_traffic_share)?;
        Ok(Self {
            majority_fraction,
            majority_traffic_share,
            layout,
        })
    }

    /// Build the generator described by a config.
    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        Self::new(
            config.majority_fraction,
            config.majority_traffic_share,
            config.layout,
        )
    }

    /// Page ranges for a space of `n` pages: `(hot_end, cold_start)`.
    ///
    /// Hot pages are `[0, hot_end)`, cold pages are `[cold_start, n)`.
    /// The two ranges never overlap.
    pub fn ranges(&self, n: usize) -> Result<(u32, u32)> {
        let n32 = u32::try_from(n)
            .map_err(|_| Error::invalid(format!("page space {} exceeds u32", n)))?;
        let hot_end = (n as f64 * self.majority_fraction) as u32;
        let cold_start = (n as f64 * (1.0 - self.majority_fraction)) as u32;

        if hot_end == 0 {
            return Err(Error::invalid(format!(
                "page space {} too small: hot range is empty",
                n
            )));
        }
        if cold_start >= n32 {
            return Err(Error::invalid(format!(
                "page space {} too small: cold range is empty",
                n
            )));
        }
        if cold_start < hot_end {
            return Err(Error::invalid(format!(
                "majority_fraction {} above 0.5: cold range [{}, {}) overlaps hot range [0, {})",
                self.majority_fraction, cold_start, n, hot_end
            )));
        }
        Ok((hot_end, cold_start))
    }

    /// Arrangement of hot and cold references.
    pub fn layout(&self) -> SequenceLayout {
        self.layout
    }
}

impl Default for SkewedGenerator {
    fn default() -> Self {
        let config = SimulationConfig::default();
        Self {
            majority_fraction: config.majority_fraction,
            majority_traffic_share: config.majority_traffic_share,
            layout: config.layout,
        }
    }
}

impl SequenceGenerator for SkewedGenerator {
    fn generate<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<PageId>> {
        if n == 0 {
            return Err(Error::invalid("sequence length must be > 0"));
        }
        let (hot_end, cold_start) = self.ranges(n)?;
        let n32 = n as u32;

        let hot = |rng: &mut R| PageId::new(rng.gen_range(0..hot_end));
        let cold = |rng: &mut R| PageId::new(rng.gen_range(cold_start..n32));

        let mut sequence = Vec::with_capacity(n);
        match self.layout {
            SequenceLayout::Blocked => {
                let hot_refs = ((n as f64 * self.majority_traffic_share) as usize).min(n);
                sequence.extend((0..hot_refs).map(|_| hot(rng)));
                sequence.extend((hot_refs..n).map(|_| cold(rng)));
            }
            SequenceLayout::Interleaved => {
                for _ in 0..n {
                    let page = if rng.gen_bool(self.majority_traffic_share) {
                        hot(rng)
                    } else {
                        cold(rng)
                    };
                    sequence.push(page);
                }
            }
        }
        Ok(sequence)
    }
}

/// Number of distinct pages referenced by a sequence.
pub fn distinct_pages(sequence: &[PageId]) -> usize {
    sequence.iter().collect::<HashSet<_>>().len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_default_ranges() {
        let generator = SkewedGenerator::default();
        assert_eq!(generator.ranges(2000).unwrap(), (400, 1600));
        assert_eq!(generator.ranges(10).unwrap(), (2, 8));
    }

    #[test]
    fn test_blocked_layout_exact_split() {
        let generator = SkewedGenerator::default();
        let seq = generator.generate(2000, &mut rng()).unwrap();

        assert_eq!(seq.len(), 2000);
        assert!(seq[..1600].iter().all(|p| p.0 < 400));
        assert!(seq[1600..].iter().all(|p| (1600..2000).contains(&p.0)));
    }

    #[test]
    fn test_small_space_split() {
        let generator = SkewedGenerator::default();
        let seq = generator.generate(10, &mut rng()).unwrap();

        assert_eq!(seq.len(), 10);
        assert_eq!(seq.iter().filter(|p| p.0 < 2).count(), 8);
        assert_eq!(seq.iter().filter(|p| p.0 >= 8).count(), 2);
    }

    #[test]
    fn test_interleaved_share_is_statistical() {
        let generator = SkewedGenerator::new(0.2, 0.8, SequenceLayout::Interleaved).unwrap();
        let seq = generator.generate(20_000, &mut rng()).unwrap();

        let hot = seq.iter().filter(|p| p.0 < 4000).count() as f64 / seq.len() as f64;
        assert!((hot - 0.8).abs() < 0.02, "hot share {}", hot);
        assert!(seq.iter().all(|p| p.0 < 4000 || p.0 >= 16_000));
    }

    #[test]
    fn test_interleaved_mixes_hot_and_cold() {
        let generator = SkewedGenerator::new(0.2, 0.8, SequenceLayout::Interleaved).unwrap();
        let seq = generator.generate(2000, &mut rng()).unwrap();

        // A blocked sequence would have all cold pages at the tail.
        assert!(seq[..1600].iter().any(|p| p.0 >= 1600));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let generator = SkewedGenerator::default();
        let a = generator.generate(500, &mut rng()).unwrap();
        let b = generator.generate(500, &mut rng()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_empty_and_tiny_spaces() {
        let generator = SkewedGenerator::default();
        assert!(generator.generate(0, &mut rng()).is_err());
        // 4 × 0.2 floors to 0 hot pages.
        assert!(generator.generate(4, &mut rng()).is_err());
    }

    #[test]
    fn test_rejects_bad_fractions() {
        assert!(SkewedGenerator::new(0.0, 0.8, SequenceLayout::Blocked).is_err());
        assert!(SkewedGenerator::new(0.2, 1.0, SequenceLayout::Blocked).is_err());
    }

    #[test]
    fn test_rejects_overlapping_hot_and_cold_ranges() {
        let generator = SkewedGenerator::new(0.7, 0.8, SequenceLayout::Blocked).unwrap();
        let err = generator.ranges(100).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert!(generator.generate(100, &mut rng()).is_err());

        // Exactly half: hot [0, 50), cold [50, 100) touch but don't overlap.
        let generator = SkewedGenerator::new(0.5, 0.8, SequenceLayout::Blocked).unwrap();
        let (hot_end, cold_start) = generator.ranges(100).unwrap();
        assert!(cold_start >= hot_end);
        let seq = generator.generate(100, &mut rng()).unwrap();
        assert!(seq[80..].iter().all(|p| p.0 >= hot_end));
    }

    #[test]
    fn test_distinct_pages() {
        let seq = crate::common::pages(&[1, 2, 1, 3, 2]);
        assert_eq!(distinct_pages(&seq), 3);
        assert_eq!(distinct_pages(&[]), 0);
    }
}
