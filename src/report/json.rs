//! JSON export of chart data.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::{check_aligned, Presenter, Series, TITLE, X_LABEL, Y_LABEL};
use crate::common::Result;

#[derive(Serialize)]
struct ChartData<'a> {
    title: &'a str,
    x_label: &'a str,
    y_label: &'a str,
    cache_sizes: &'a [usize],
    series: BTreeMap<&'a str, &'a [f64]>,
}

/// Writes chart data to a JSON file, replacing any existing file.
///
/// ```json
/// {
///   "title": "Cache Simulation Results",
///   "x_label": "Cache Size (C)",
///   "y_label": "Average Hit Rate",
///   "cache_sizes": [20, 50],
///   "series": { "OPT": [0.44, 0.61], "RAND": [0.31, 0.47] }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonExport {
    path: PathBuf,
}

impl JsonExport {
    /// Create an exporter writing to `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Destination file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Presenter for JsonExport {
    fn render(&mut self, x_values: &[usize], series: &[Series<'_>]) -> Result<()> {
        check_aligned(x_values, series)?;

        let data = ChartData {
            title: TITLE,
            x_label: X_LABEL,
            y_label: Y_LABEL,
            cache_sizes: x_values,
            series: series.iter().map(|s| (s.label, s.values)).collect(),
        };

        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, &data)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;
    use tempfile::tempdir;

    #[test]
    fn test_export_round_trips_through_serde_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.json");
        let mut export = JsonExport::new(&path);

        let series = [
            Series {
                label: "RAND",
                values: &[0.25, 0.5],
            },
            Series {
                label: "OPT",
                values: &[0.5, 0.75],
            },
        ];
        export.render(&[10, 20], &series).unwrap();

        let text = std::fs::read_to_string(export.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["cache_sizes"], serde_json::json!([10, 20]));
        assert_eq!(value["series"]["OPT"], serde_json::json!([0.5, 0.75]));
        assert_eq!(value["x_label"], "Cache Size (C)");
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let mut export = JsonExport::new(dir.path().join("missing").join("out.json"));

        let err = export.render(&[], &[]).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
