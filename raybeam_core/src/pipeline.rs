// raybeam_core/src/pipeline.rs

use crate::messages::{SensorInput, SensorReport};
use crate::models::fusion;
use crate::models::geometry::cast_beam;
use crate::models::noise::NoiseScheduler;
use crate::scene::SceneConfig;
use rand::RngCore;

/// The complete per-tick engine: geometry, noise scheduling, and fusion
/// composed into a single synchronous operation.
///
/// The pipeline is single-threaded and never blocks. Its only mutable
/// state is the noise scheduler's; everything else is recomputed from the
/// tick input. The driver owns the cadence; the pipeline has no clock of
/// its own and no notion of cancellation.
#[derive(Debug, Clone)]
pub struct RangefinderPipeline {
    scene: SceneConfig,
    noise: NoiseScheduler,
}

impl RangefinderPipeline {
    pub fn new(scene: SceneConfig) -> Self {
        Self {
            scene,
            noise: NoiseScheduler::default(),
        }
    }

    pub fn with_noise(scene: SceneConfig, noise: NoiseScheduler) -> Self {
        Self { scene, noise }
    }

    pub fn scene(&self) -> &SceneConfig {
        &self.scene
    }

    /// Computes one tick's report.
    ///
    /// Ticks must be delivered in non-decreasing timestamp order; the
    /// noise gate does not defend against a clock running backwards.
    pub fn tick(&mut self, input: &SensorInput, rng: &mut dyn RngCore) -> SensorReport {
        let hit = cast_beam(&self.scene, input.angle_deg);
        let noise_sample = self
            .noise
            .update(input.fusion_enabled, input.timestamp_ms, rng);
        let estimate = fusion::estimate(
            &self.scene,
            hit.as_ref(),
            input.angle_deg,
            input.fusion_enabled,
            noise_sample,
        );

        SensorReport {
            timestamp_ms: input.timestamp_ms,
            angle_deg: input.angle_deg,
            estimate,
        }
    }
}
