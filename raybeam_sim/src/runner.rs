// raybeam_sim/src/runner.rs

//! The tick driver. The core is a pure, synchronous function of
//! `(scene, noise state, input)`; everything about cadence lives here:
//! the fixed tick rate, the angle sweep, and the fusion toggle schedule.

use crate::config::ScenarioConfig;
use log::info;
use rand::RngCore;
use raybeam_core::prelude::{RangeEstimate, RangefinderPipeline, SensorInput};

/// What a finished run looked like, for logging and for assertions in
/// tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub hits: u64,
    pub misses: u64,
}

/// Drives the pipeline through the whole scenario at the configured tick
/// rate, delivering timestamps in strictly increasing order as the core
/// requires.
pub fn run(config: &ScenarioConfig, rng: &mut dyn RngCore, quiet: bool) -> RunSummary {
    let mut pipeline = RangefinderPipeline::new(config.scene);
    let tick_count =
        (config.simulation.duration_seconds * config.simulation.tick_rate_hz).ceil() as u64;
    let tick_period_ms = 1000.0 / config.simulation.tick_rate_hz;

    let mut summary = RunSummary::default();
    for tick in 0..tick_count {
        let t_seconds = tick as f64 / config.simulation.tick_rate_hz;
        let input = SensorInput {
            angle_deg: config.beam.angle_at(t_seconds),
            fusion_enabled: config.beam.fusion_at(t_seconds),
            timestamp_ms: tick as f64 * tick_period_ms,
        };

        let report = pipeline.tick(&input, rng);
        summary.ticks += 1;
        match report.estimate {
            RangeEstimate::Reading { .. } => summary.hits += 1,
            RangeEstimate::OutOfRange => summary.misses += 1,
        }
        if !quiet {
            info!("{}", format_report(&report));
        }
    }

    summary
}

/// Renders one report the way the reference model displays it: distances
/// to one decimal place, the position estimate as an integer, misses as
/// an explicit "out of range" rather than a number.
pub fn format_report(report: &raybeam_core::prelude::SensorReport) -> String {
    match report.estimate {
        RangeEstimate::OutOfRange => format!(
            "t={:7.1}ms angle={:6.1}° reading: out of range",
            report.timestamp_ms, report.angle_deg
        ),
        RangeEstimate::Reading {
            true_distance,
            noisy_reading,
            fused_distance,
            estimated_x,
            ..
        } => {
            let noisy = match noisy_reading {
                Some(value) => format!("{value:.1}"),
                None => "-".to_string(),
            };
            format!(
                "t={:7.1}ms angle={:6.1}° true={:.1} noisy={} fused={:.1} est_x={:.0}",
                report.timestamp_ms, report.angle_deg, true_distance, noisy, fused_distance, estimated_x
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Beam;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use raybeam_core::prelude::SensorReport;

    fn short_scenario() -> ScenarioConfig {
        let mut config = ScenarioConfig::default();
        config.simulation.duration_seconds = 1.0;
        config.simulation.tick_rate_hz = 10.0;
        config
    }

    #[test]
    fn runs_the_configured_number_of_ticks() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let summary = run(&short_scenario(), &mut rng, true);
        assert_eq!(summary.ticks, 10);
        assert_eq!(summary.hits + summary.misses, summary.ticks);
    }

    #[test]
    fn identical_seeds_give_identical_runs() {
        let scenario = short_scenario();
        let mut rng_a = ChaCha8Rng::seed_from_u64(11);
        let mut rng_b = ChaCha8Rng::seed_from_u64(11);
        assert_eq!(
            run(&scenario, &mut rng_a, true),
            run(&scenario, &mut rng_b, true)
        );
    }

    #[test]
    fn a_fixed_straight_beam_never_misses() {
        let mut config = short_scenario();
        config.beam = Beam {
            start_deg: 0.0,
            end_deg: 0.0,
            sweep_rate_deg_per_sec: 0.0,
            fusion_enabled: false,
            fusion_toggle_period_seconds: None,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let summary = run(&config, &mut rng, true);
        assert_eq!(summary.misses, 0);
        assert_eq!(summary.hits, 10);
    }

    #[test]
    fn formats_misses_as_out_of_range() {
        let report = SensorReport {
            timestamp_ms: 16.0,
            angle_deg: 80.0,
            estimate: RangeEstimate::OutOfRange,
        };
        assert!(format_report(&report).ends_with("reading: out of range"));
    }

    #[test]
    fn formats_readings_with_reference_precision() {
        let report = SensorReport {
            timestamp_ms: 0.0,
            angle_deg: 0.0,
            estimate: RangeEstimate::Reading {
                true_distance: 350.0,
                noisy_reading: Some(360.04),
                fused_distance: 355.02,
                estimated_x: 44.98,
                hit_point: raybeam_core::prelude::ScenePoint::new(400.0, 150.0),
            },
        };
        let line = format_report(&report);
        assert!(line.contains("true=350.0"));
        assert!(line.contains("noisy=360.0"));
        assert!(line.contains("fused=355.0"));
        assert!(line.contains("est_x=45"));
    }
}
