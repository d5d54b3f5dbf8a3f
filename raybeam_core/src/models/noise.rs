// raybeam_core/src/models/noise.rs

use crate::types::{TimestampMs, TIMESTAMP_NEVER};
use dyn_clone::DynClone;
use rand::RngCore;
use rand_distr::{Distribution, Uniform};
use std::fmt::Debug;

/// Minimum elapsed time between successive noise regenerations, in
/// milliseconds. This is what makes the secondary channel "slow": the
/// sample is held constant across ticks until the gate reopens,
/// regardless of how fast the driver ticks.
pub const NOISE_GATE_INTERVAL_MS: f64 = 500.0;

/// Half-width of the reference perturbation range, in distance units.
pub const DEFAULT_NOISE_MAGNITUDE: f64 = 15.0;

/// The contract for anything that can perturb a range reading.
///
/// Models draw from an injected `RngCore` rather than a thread-local
/// generator so a seeded RNG makes every run reproducible.
pub trait RangeNoiseModel: Send + Sync + DynClone + Debug {
    /// Draws one signed perturbation in distance units.
    fn draw(&self, rng: &mut dyn RngCore) -> f64;
}

// Make the trait object cloneable.
dyn_clone::clone_trait_object!(RangeNoiseModel);

/// The reference noise model: uniform over `[-magnitude, +magnitude]`.
#[derive(Debug, Clone)]
pub struct UniformRangeNoise {
    pub magnitude: f64,
}

impl Default for UniformRangeNoise {
    fn default() -> Self {
        Self {
            magnitude: DEFAULT_NOISE_MAGNITUDE,
        }
    }
}

impl RangeNoiseModel for UniformRangeNoise {
    fn draw(&self, rng: &mut dyn RngCore) -> f64 {
        Uniform::new_inclusive(-self.magnitude, self.magnitude).sample(rng)
    }
}

/// Owns the two fields that persist across ticks (the held sample and the
/// time it was last regenerated) plus the previous fusion flag, which is
/// how the disabled→enabled transition is detected.
#[derive(Debug, Clone, Copy)]
pub struct NoiseState {
    pub sample: f64,
    pub last_update_ms: TimestampMs,
    was_enabled: bool,
}

impl Default for NoiseState {
    fn default() -> Self {
        Self {
            sample: 0.0,
            // Older than any real timestamp, so the first enabled tick
            // always regenerates instead of waiting out a stale gate.
            last_update_ms: TIMESTAMP_NEVER,
            was_enabled: false,
        }
    }
}

/// Rate-limits the perturbation of the secondary channel.
///
/// The scheduler has the exclusive right to mutate its `NoiseState`; the
/// driver only ever sees the returned sample. Ticks must arrive in
/// non-decreasing timestamp order.
#[derive(Debug, Clone)]
pub struct NoiseScheduler {
    model: Box<dyn RangeNoiseModel>,
    state: NoiseState,
}

impl Default for NoiseScheduler {
    fn default() -> Self {
        Self::new(Box::new(UniformRangeNoise::default()))
    }
}

impl NoiseScheduler {
    pub fn new(model: Box<dyn RangeNoiseModel>) -> Self {
        Self {
            model,
            state: NoiseState::default(),
        }
    }

    /// Advances the scheduler by one tick and returns the current sample.
    ///
    /// Disabled ticks force the sample to exactly zero without touching
    /// the regeneration timestamp. Enabled ticks regenerate only once the
    /// gating interval has elapsed; the transition from disabled to
    /// enabled resets the gate so a fresh sample is drawn immediately.
    pub fn update(
        &mut self,
        fusion_enabled: bool,
        now_ms: TimestampMs,
        rng: &mut dyn RngCore,
    ) -> f64 {
        if !fusion_enabled {
            self.state.sample = 0.0;
            self.state.was_enabled = false;
            return 0.0;
        }

        if !self.state.was_enabled {
            self.state.last_update_ms = TIMESTAMP_NEVER;
            self.state.was_enabled = true;
        }

        if now_ms - self.state.last_update_ms > NOISE_GATE_INTERVAL_MS {
            self.state.sample = self.model.draw(rng);
            self.state.last_update_ms = now_ms;
        }

        self.state.sample
    }

    pub fn state(&self) -> &NoiseState {
        &self.state
    }
}
