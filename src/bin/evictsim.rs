//! evictsim CLI.
//!
//! Runs the RAND vs OPT sweep and prints a chart. With no arguments it
//! reproduces the classic experiment: cache sizes 20, 50, 70, 100, 200,
//! ten 2000-reference sequences each.

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use evictsim::report::{present, JsonExport, TextChart};
use evictsim::{ExperimentRunner, SequenceLayout, SimulationConfig};

#[derive(Parser, Debug)]
#[command(
    name = "evictsim",
    version,
    about = "Compare random and optimal page replacement by simulation",
    long_about = "Compare random and optimal page replacement by simulation.\n\nSet RUST_LOG=debug to log every trial.\n\nExamples:\n  evictsim\n  evictsim --cache-sizes 10,20,40 --trials 50 --seed 7\n  evictsim --config sweep.json --json results.json"
)]
struct Cli {
    /// JSON config file; flags below override its fields.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Comma-separated cache capacities.
    #[arg(long, value_delimiter = ',')]
    cache_sizes: Option<Vec<usize>>,

    /// Sequences averaged per cache size.
    #[arg(short, long)]
    trials: Option<usize>,

    /// References per sequence (also the page space size).
    #[arg(short = 'n', long)]
    length: Option<usize>,

    /// Base seed for reproducible runs.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Arrangement of hot and cold references.
    #[arg(long, value_enum)]
    layout: Option<LayoutArg>,

    /// Run trials on all cores.
    #[arg(long)]
    parallel: bool,

    /// Also write chart data to this JSON file.
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LayoutArg {
    Blocked,
    Interleaved,
}

impl From<LayoutArg> for SequenceLayout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Blocked => SequenceLayout::Blocked,
            LayoutArg::Interleaved => SequenceLayout::Interleaved,
        }
    }
}

impl Cli {
    fn into_config(self) -> evictsim::Result<(SimulationConfig, Option<PathBuf>)> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::from_json_file(path)?,
            None => SimulationConfig::default(),
        };
        if let Some(cache_sizes) = self.cache_sizes {
            config.cache_sizes = cache_sizes;
        }
        if let Some(trials) = self.trials {
            config.num_trials = trials;
        }
        if let Some(length) = self.length {
            config.sequence_length = length;
        }
        if let Some(layout) = self.layout {
            config.layout = layout.into();
        }
        config.seed = self.seed.or(config.seed);
        config.parallel |= self.parallel;
        config.validate()?;
        Ok((config, self.json))
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let (config, json) = match Cli::parse().into_config() {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(2);
        }
    };

    let results = match ExperimentRunner::from_config(&config)
        .and_then(|runner| runner.run(&config.cache_sizes, config.num_trials))
    {
        Ok(results) => results,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    // Presenters are best effort; the results above stand either way.
    let stdout = std::io::stdout();
    if let Err(e) = present(&mut TextChart::new(stdout.lock()), &results) {
        tracing::warn!(error = %e, "could not render chart");
    }
    if let Some(path) = json {
        match present(&mut JsonExport::new(&path), &results) {
            Ok(()) => tracing::info!(path = %path.display(), "wrote results"),
            Err(e) => tracing::warn!(error = %e, path = %path.display(), "could not export results"),
        }
    }
}
