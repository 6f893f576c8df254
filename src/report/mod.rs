//! Presenting experiment results.
//!
//! A [`Presenter`] receives the x values (cache sizes) and one labelled
//! series of averaged hit rates per policy. Presentation is best effort:
//! a failed render never invalidates the results it was given.
//!
//! # Components
//! - [`TextChart`] - Table plus horizontal bar chart on any `io::Write`
//! - [`JsonExport`] - Chart data as a JSON file

mod json;
mod text;

pub use json::JsonExport;
pub use text::TextChart;

use crate::cache::Policy;
use crate::common::{Error, Result};
use crate::experiment::ExperimentResults;

/// Chart title.
pub const TITLE: &str = "Cache Simulation Results";

/// X axis label.
pub const X_LABEL: &str = "Cache Size (C)";

/// Y axis label.
pub const Y_LABEL: &str = "Average Hit Rate";

/// One labelled line of a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Series<'a> {
    pub label: &'a str,
    pub values: &'a [f64],
}

/// Something that can display or export a comparison chart.
pub trait Presenter {
    /// Render `series` against `x_values`. Every series must have one
    /// value per x value.
    fn render(&mut self, x_values: &[usize], series: &[Series<'_>]) -> Result<()>;
}

/// One series per policy, in [`Policy::ALL`] order.
pub fn series_of(results: &ExperimentResults) -> Vec<Series<'_>> {
    Policy::ALL
        .iter()
        .map(|&policy| Series {
            label: policy.label(),
            values: results.hit_rates(policy),
        })
        .collect()
}

/// Hand `results` to `presenter`.
pub fn present<P>(presenter: &mut P, results: &ExperimentResults) -> Result<()>
where
    P: Presenter + ?Sized,
{
    presenter.render(&results.cache_sizes, &series_of(results))
}

/// Reject series that don't line up with the x values.
pub(crate) fn check_aligned(x_values: &[usize], series: &[Series<'_>]) -> Result<()> {
    for s in series {
        if s.values.len() != x_values.len() {
            return Err(Error::Render(format!(
                "series {} has {} values for {} cache sizes",
                s.label,
                s.values.len(),
                x_values.len()
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results() -> ExperimentResults {
        ExperimentResults {
            cache_sizes: vec![10, 20],
            rand: vec![0.25, 0.5],
            opt: vec![0.5, 0.75],
            num_trials: 2,
            seed: 1,
        }
    }

    #[test]
    fn test_series_order_and_labels() {
        let results = results();
        let series = series_of(&results);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].label, "RAND");
        assert_eq!(series[0].values, &[0.25, 0.5]);
        assert_eq!(series[1].label, "OPT");
    }

    #[test]
    fn test_check_aligned() {
        let short = Series {
            label: "RAND",
            values: &[0.1],
        };
        assert!(check_aligned(&[1], &[short]).is_ok());

        let err = check_aligned(&[1, 2], &[short]).unwrap_err();
        assert!(matches!(err, Error::Render(_)));
    }

    struct Recorder(Vec<(Vec<usize>, Vec<String>)>);

    impl Presenter for Recorder {
        fn render(&mut self, x_values: &[usize], series: &[Series<'_>]) -> Result<()> {
            let labels = series.iter().map(|s| s.label.to_string()).collect();
            self.0.push((x_values.to_vec(), labels));
            Ok(())
        }
    }

    #[test]
    fn test_present_hands_over_cache_sizes() {
        let mut recorder = Recorder(Vec::new());
        present(&mut recorder, &results()).unwrap();

        assert_eq!(
            recorder.0,
            vec![(vec![10, 20], vec!["RAND".to_string(), "OPT".to_string()])]
        );
    }
}
