// raybeam_core/src/models/fusion.rs

use crate::messages::RangeEstimate;
use crate::models::geometry::BeamHit;
use crate::scene::SceneConfig;

/// Combines the true geometric reading with the noisy secondary channel
/// and inverts the result back into an emitter position estimate.
///
/// The fusion rule is a fixed equal-weight average of the two channels,
/// `(true + noisy) / 2`, deliberately not a variance-weighted filter.
/// The displayed numbers of the reference model depend on this exact
/// formula, so it must not be "improved".
///
/// The inversion `estimated_x = wall_x - fused * cos(angle)` treats the
/// wall position and beam angle as ground truth; the fused range is the
/// only uncertain quantity, so it is the only source of position error.
pub fn estimate(
    scene: &SceneConfig,
    hit: Option<&BeamHit>,
    angle_deg: f64,
    fusion_enabled: bool,
    noise_sample: f64,
) -> RangeEstimate {
    let Some(hit) = hit else {
        // A miss carries no numbers at all.
        return RangeEstimate::OutOfRange;
    };

    let true_distance = hit.distance;
    let (noisy_reading, fused_distance) = if fusion_enabled {
        let noisy = true_distance + noise_sample;
        (Some(noisy), (true_distance + noisy) / 2.0)
    } else {
        (None, true_distance)
    };

    let estimated_x = scene.wall_x() - fused_distance * angle_deg.to_radians().cos();

    RangeEstimate::Reading {
        true_distance,
        noisy_reading,
        fused_distance,
        estimated_x,
        hit_point: hit.point,
    }
}
