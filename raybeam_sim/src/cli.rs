// raybeam_sim/src/cli.rs

use clap::Parser;
use std::path::PathBuf;

/// Raybeam: a headless range-finder and fusion-localization simulator.
///
/// This struct defines the command-line arguments that can be passed to any
/// binary application that uses the raybeam simulation library.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The path to the scenario TOML file to run.
    #[arg(short, long, default_value = "assets/scenarios/reference.toml")]
    pub scenario: PathBuf,

    /// Override the scenario's RNG seed for a reproducible run.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Suppress per-tick reading logs (the run summary is still printed).
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}
