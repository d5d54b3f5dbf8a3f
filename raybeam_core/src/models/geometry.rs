// raybeam_core/src/models/geometry.rs

use crate::scene::SceneConfig;
use crate::types::ScenePoint;

/// A beam striking the wall plane within its vertical extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeamHit {
    /// Euclidean distance from the emitter to the hit point (the
    /// hypotenuse of the horizontal reach and the vertical rise).
    pub distance: f64,
    /// The intersection point on the wall plane.
    pub point: ScenePoint,
}

/// Casts the angled beam from the emitter toward the wall plane.
///
/// The beam leaves the emitter at `angle_deg` (0 = straight at the wall,
/// positive toward +y) and, if anything, intersects the vertical line
/// `x = wall_x` at `target_y = emitter.y + reach * tan(angle)`. The hit is
/// valid iff `target_y` falls within the scene's inclusive vertical
/// bounds; everything else, including the degenerate angles near ±90°
/// where `tan` blows up, is a miss.
///
/// Pure function: no side effects, total over all finite angles. A miss is
/// reported as `None`, never as an infinite or NaN distance.
pub fn cast_beam(scene: &SceneConfig, angle_deg: f64) -> Option<BeamHit> {
    let angle_rad = angle_deg.to_radians();
    let dx = scene.reach();
    let target_y = scene.emitter().y + dx * angle_rad.tan();

    // Near ±90° tan saturates toward ±inf, so target_y lands outside any
    // finite bounds (or is non-finite) and the bounds check rejects it
    // before any division happens.
    if !scene.contains_y(target_y) {
        return None;
    }

    // Hypotenuse from the horizontal reach. The absolute value guards the
    // cos sign flip once the angle wraps past ±90°.
    let distance = (dx / angle_rad.cos()).abs();
    if !distance.is_finite() {
        return None;
    }

    Some(BeamHit {
        distance,
        point: ScenePoint::new(scene.wall_x(), target_y),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn reference_scene() -> SceneConfig {
        SceneConfig::new(ScenePoint::new(50.0, 150.0), 400.0, 0.0, 300.0).unwrap()
    }

    #[test]
    fn straight_beam_measures_the_reach_exactly() {
        let hit = cast_beam(&reference_scene(), 0.0).unwrap();
        assert_eq!(hit.distance, 350.0);
        assert_eq!(hit.point, ScenePoint::new(400.0, 150.0));
    }

    #[test]
    fn angled_beam_measures_the_hypotenuse() {
        let scene = reference_scene();
        for angle_deg in [-20.0, -5.0, 1.0, 10.0, 22.5] {
            let hit = cast_beam(&scene, angle_deg).unwrap();
            let expected = 350.0 / angle_deg.to_radians().cos();
            assert_abs_diff_eq!(hit.distance, expected, epsilon = 1e-9);
            // Hypotenuse is never shorter than the adjacent side.
            assert!(hit.distance >= scene.reach());
            assert_abs_diff_eq!(
                hit.point.y,
                150.0 + 350.0 * angle_deg.to_radians().tan(),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn steep_beam_misses_the_wall_extent() {
        // dx * tan(80°) ≈ 1984, target_y ≈ 2134, well past the 300 bound.
        assert_eq!(cast_beam(&reference_scene(), 80.0), None);
        assert_eq!(cast_beam(&reference_scene(), -80.0), None);
    }

    #[test]
    fn degenerate_angles_are_misses_not_nans() {
        let scene = reference_scene();
        for angle_deg in [90.0, -90.0, 270.0, 450.0] {
            assert_eq!(cast_beam(&scene, angle_deg), None);
        }
    }

    #[test]
    fn misses_begin_at_the_bottom_edge() {
        let scene = reference_scene();
        // The angle that lands exactly on the bottom edge: tan = 150 / 350.
        let edge_angle = (150.0_f64 / 350.0).atan().to_degrees();
        let hit = cast_beam(&scene, edge_angle - 1e-6).unwrap();
        assert_abs_diff_eq!(hit.point.y, 300.0, epsilon = 1e-2);
        assert_eq!(cast_beam(&scene, edge_angle + 1e-3), None);
    }
}
