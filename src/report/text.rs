//! Plain-text chart.

use std::io::Write;

use super::{check_aligned, Presenter, Series, TITLE, X_LABEL, Y_LABEL};
use crate::common::Result;

/// Default bar width for a hit rate of 1.0.
const DEFAULT_BAR_WIDTH: usize = 50;

/// Writes a table and a horizontal bar chart:
///
/// ```text
/// Cache Simulation Results
///
/// Cache Size (C)      RAND       OPT
///             20    0.3122    0.4478
///
/// Average Hit Rate
///   20 RAND |###############                | 0.3122
///      OPT  |######################         | 0.4478
/// ```
#[derive(Debug)]
pub struct TextChart<W> {
    out: W,
    bar_width: usize,
}

impl<W: Write> TextChart<W> {
    /// Create a chart writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }

    /// Characters used for a hit rate of 1.0.
    pub fn with_bar_width(mut self, bar_width: usize) -> Self {
        self.bar_width = bar_width.max(1);
        self
    }

    /// Give back the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn bar(&self, value: f64) -> String {
        let filled = (value.clamp(0.0, 1.0) * self.bar_width as f64).round() as usize;
        format!("{}{}", "#".repeat(filled), " ".repeat(self.bar_width - filled))
    }
}

impl<W: Write> Presenter for TextChart<W> {
    fn render(&mut self, x_values: &[usize], series: &[Series<'_>]) -> Result<()> {
        check_aligned(x_values, series)?;

        let x_width = x_values
            .iter()
            .map(|x| x.to_string().len())
            .max()
            .unwrap_or(0)
            .max(X_LABEL.len());
        let label_width = series.iter().map(|s| s.label.len()).max().unwrap_or(0);

        writeln!(self.out, "{}", TITLE)?;
        writeln!(self.out)?;

        write!(self.out, "{:<x_width$}", X_LABEL)?;
        for s in series {
            write!(self.out, "  {:>8}", s.label)?;
        }
        writeln!(self.out)?;
        for (row, x) in x_values.iter().enumerate() {
            write!(self.out, "{:>x_width$}", x)?;
            for s in series {
                write!(self.out, "  {:>8.4}", s.values[row])?;
            }
            writeln!(self.out)?;
        }

        writeln!(self.out)?;
        writeln!(self.out, "{}", Y_LABEL)?;
        let tick_width = x_values.iter().map(|x| x.to_string().len()).max().unwrap_or(0);
        for (row, x) in x_values.iter().enumerate() {
            for (i, s) in series.iter().enumerate() {
                let tick = if i == 0 { x.to_string() } else { String::new() };
                let value = s.values[row];
                let bar = self.bar(value);
                writeln!(
                    self.out,
                    "{:>tick_width$} {:<label_width$} |{}| {:.4}",
                    tick, s.label, bar, value
                )?;
            }
        }

        self.out.flush()?;
        Ok(())
    }
}
