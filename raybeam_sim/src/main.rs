// raybeam_sim/src/main.rs

use clap::Parser;
use log::{error, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use raybeam_sim::cli::Cli;
use raybeam_sim::config::ScenarioConfig;
use raybeam_sim::runner;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match ScenarioConfig::load(&cli.scenario) {
        Ok(config) => config,
        Err(e) => {
            error!("scenario '{}': {e}", cli.scenario.display());
            std::process::exit(1);
        }
    };

    // CLI seed wins over the scenario's; with neither, the run is seeded
    // from entropy and not reproducible.
    let mut rng = match cli.seed.or(config.simulation.seed) {
        Some(seed) => {
            info!("seeding RNG with {seed}");
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    };

    let summary = runner::run(&config, &mut rng, cli.quiet);
    info!(
        "run complete: {} ticks, {} hits, {} out of range",
        summary.ticks, summary.hits, summary.misses
    );
}
