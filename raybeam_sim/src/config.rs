// raybeam_sim/src/config.rs

//! Loading and validating the scenario configuration: the scene geometry,
//! the run parameters, and the beam sweep that stands in for the manual
//! angle control of the reference model.

use figment::{
    providers::{Format, Toml},
    Figment,
};
use raybeam_core::prelude::{SceneConfig, ScenePoint};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to load or parse scenario file: {0}")]
    Parse(#[from] Box<figment::Error>),

    #[error("invalid scenario value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

// =========================================================================
// == Top-Level Configuration ==
// =========================================================================

/// # ScenarioConfig
/// The root of the data parsed from a scenario TOML file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)] // Fail if the TOML has fields not in our struct
pub struct ScenarioConfig {
    #[serde(default)] // Use default if the [simulation] section is missing
    pub simulation: Simulation,

    #[serde(default = "reference_scene")]
    pub scene: SceneConfig,

    #[serde(default)]
    pub beam: Beam,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            simulation: Simulation::default(),
            scene: reference_scene(),
            beam: Beam::default(),
        }
    }
}

impl ScenarioConfig {
    /// Loads a scenario from disk. `SceneConfig`'s own invariants are
    /// checked during deserialization; run parameters are checked here.
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let config: ScenarioConfig = Figment::new()
            .merge(Toml::file(path))
            .extract()
            .map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ScenarioError> {
        let invalid = |field, reason| Err(ScenarioError::Invalid { field, reason });
        if !(self.simulation.tick_rate_hz.is_finite() && self.simulation.tick_rate_hz > 0.0) {
            return invalid("simulation.tick_rate_hz", "must be a positive, finite rate");
        }
        if !(self.simulation.duration_seconds.is_finite() && self.simulation.duration_seconds >= 0.0)
        {
            return invalid("simulation.duration_seconds", "must be non-negative");
        }
        if !self.beam.start_deg.is_finite() || !self.beam.end_deg.is_finite() {
            return invalid("beam.start_deg/end_deg", "sweep endpoints must be finite");
        }
        if self.beam.end_deg < self.beam.start_deg {
            return invalid("beam.end_deg", "must not be below beam.start_deg");
        }
        if !(self.beam.sweep_rate_deg_per_sec.is_finite()
            && self.beam.sweep_rate_deg_per_sec >= 0.0)
        {
            return invalid("beam.sweep_rate_deg_per_sec", "must be non-negative");
        }
        if let Some(period) = self.beam.fusion_toggle_period_seconds {
            if !(period.is_finite() && period > 0.0) {
                return invalid(
                    "beam.fusion_toggle_period_seconds",
                    "must be positive when present",
                );
            }
        }
        Ok(())
    }
}

// The scene of the reference model: emitter on the left at (50, 150),
// wall plane at x = 400, hits counted within y ∈ [0, 300].
fn reference_scene() -> SceneConfig {
    SceneConfig::new(ScenePoint::new(50.0, 150.0), 400.0, 0.0, 300.0)
        .expect("reference scene constants satisfy the scene invariants")
}

// =========================================================================
// == Configuration Sub-Structs ==
// =========================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Simulation {
    /// Optional seed for the pseudo-random number generator for determinism.
    pub seed: Option<u64>,
    /// Duration of the simulation in seconds.
    pub duration_seconds: f64,
    /// How many ticks the driver delivers per simulated second.
    pub tick_rate_hz: f64,
}

impl Default for Simulation {
    fn default() -> Self {
        Self {
            seed: None,
            duration_seconds: 10.0,
            tick_rate_hz: 60.0,
        }
    }
}

/// The beam control schedule: a triangle-wave angle sweep between two
/// endpoints plus the fusion toggle, optionally flipped periodically to
/// exercise the on/off transitions.
#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(deny_unknown_fields)]
pub struct Beam {
    pub start_deg: f64,
    pub end_deg: f64,
    pub sweep_rate_deg_per_sec: f64,
    pub fusion_enabled: bool,
    pub fusion_toggle_period_seconds: Option<f64>,
}

impl Default for Beam {
    fn default() -> Self {
        Self {
            start_deg: -45.0,
            end_deg: 45.0,
            sweep_rate_deg_per_sec: 30.0,
            fusion_enabled: true,
            fusion_toggle_period_seconds: None,
        }
    }
}

impl Beam {
    /// The swept angle at `t` seconds: bounces between the endpoints at
    /// the configured rate. A zero rate or a degenerate span holds the
    /// start angle.
    pub fn angle_at(&self, t_seconds: f64) -> f64 {
        let span = self.end_deg - self.start_deg;
        if span <= 0.0 || self.sweep_rate_deg_per_sec == 0.0 {
            return self.start_deg;
        }
        let phase = (t_seconds * self.sweep_rate_deg_per_sec).rem_euclid(2.0 * span);
        if phase <= span {
            self.start_deg + phase
        } else {
            self.start_deg + 2.0 * span - phase
        }
    }

    /// The fusion flag at `t` seconds, flipped once per toggle period
    /// when one is configured.
    pub fn fusion_at(&self, t_seconds: f64) -> bool {
        match self.fusion_toggle_period_seconds {
            Some(period) => {
                let flips = (t_seconds / period) as u64;
                self.fusion_enabled ^ (flips % 2 == 1)
            }
            None => self.fusion_enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn parse(toml: &str) -> ScenarioConfig {
        Figment::new()
            .merge(Toml::string(toml))
            .extract()
            .expect("scenario TOML should parse")
    }

    #[test]
    fn empty_scenario_falls_back_to_the_reference_scene() {
        let config = parse("");
        assert_eq!(config.scene.wall_x(), 400.0);
        assert_eq!(config.scene.emitter(), ScenePoint::new(50.0, 150.0));
        assert_eq!(config.simulation.tick_rate_hz, 60.0);
        assert!(config.beam.fusion_enabled);
        config.validate().unwrap();
    }

    #[test]
    fn scenario_sections_override_the_defaults() {
        let config = parse(
            r#"
            [simulation]
            seed = 9
            duration_seconds = 2.0
            tick_rate_hz = 30.0

            [scene]
            emitter = [10.0, 20.0]
            wall_x = 110.0
            y_top = -50.0
            y_bottom = 90.0

            [beam]
            start_deg = 0.0
            end_deg = 10.0
            sweep_rate_deg_per_sec = 5.0
            fusion_enabled = false
            "#,
        );
        assert_eq!(config.simulation.seed, Some(9));
        assert_eq!(config.scene.reach(), 100.0);
        assert!(!config.beam.fusion_enabled);
        config.validate().unwrap();
    }

    #[test]
    fn scene_invariants_fail_deserialization() {
        let result: Result<ScenarioConfig, _> = Figment::new()
            .merge(Toml::string(
                r#"
                [scene]
                emitter = [400.0, 150.0]
                wall_x = 50.0
                y_top = 0.0
                y_bottom = 300.0
                "#,
            ))
            .extract();
        assert!(result.is_err());
    }

    #[test]
    fn validate_rejects_a_zero_tick_rate() {
        let mut config = ScenarioConfig::default();
        config.simulation.tick_rate_hz = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn sweep_bounces_between_the_endpoints() {
        let beam = Beam {
            start_deg: 0.0,
            end_deg: 10.0,
            sweep_rate_deg_per_sec: 10.0,
            fusion_enabled: true,
            fusion_toggle_period_seconds: None,
        };
        assert_abs_diff_eq!(beam.angle_at(0.0), 0.0);
        assert_abs_diff_eq!(beam.angle_at(0.5), 5.0);
        assert_abs_diff_eq!(beam.angle_at(1.0), 10.0);
        // Past the far end the sweep turns around.
        assert_abs_diff_eq!(beam.angle_at(1.5), 5.0);
        assert_abs_diff_eq!(beam.angle_at(2.0), 0.0);
    }

    #[test]
    fn fusion_toggle_flips_once_per_period() {
        let beam = Beam {
            fusion_toggle_period_seconds: Some(1.0),
            ..Beam::default()
        };
        assert!(beam.fusion_at(0.0));
        assert!(!beam.fusion_at(1.5));
        assert!(beam.fusion_at(2.5));
    }
}
