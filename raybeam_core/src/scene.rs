// raybeam_core/src/scene.rs

use crate::types::ScenePoint;
use serde::Deserialize;
use thiserror::Error;

/// Everything that can go wrong when describing a scene. These are
/// construction-time errors only; once a `SceneConfig` exists, every
/// tick-time operation on it is total.
#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("wall plane at x={wall_x} is not in front of the emitter at x={emitter_x}")]
    WallBehindEmitter { emitter_x: f64, wall_x: f64 },

    #[error("scene bounds are inverted or empty: y_top={y_top}, y_bottom={y_bottom}")]
    InvertedBounds { y_top: f64, y_bottom: f64 },

    #[error("scene parameter `{0}` is not a finite number")]
    NonFinite(&'static str),
}

/// # SceneConfig
/// The immutable geometry of the simulated scene: a fixed emitter on the
/// left, a vertical wall plane on the right, and the inclusive vertical
/// extent within which a beam counts as hitting the wall.
///
/// Built once at startup and shared by reference afterwards. The invariant
/// `wall_x > emitter.x` (the beam travels toward +x) is checked in
/// [`SceneConfig::new`] so the rest of the engine can rely on a strictly
/// positive horizontal reach.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(try_from = "RawScene")]
pub struct SceneConfig {
    emitter: ScenePoint,
    wall_x: f64,
    y_top: f64,
    y_bottom: f64,
}

impl SceneConfig {
    pub fn new(
        emitter: ScenePoint,
        wall_x: f64,
        y_top: f64,
        y_bottom: f64,
    ) -> Result<Self, SceneError> {
        for (name, value) in [
            ("emitter.x", emitter.x),
            ("emitter.y", emitter.y),
            ("wall_x", wall_x),
            ("y_top", y_top),
            ("y_bottom", y_bottom),
        ] {
            if !value.is_finite() {
                return Err(SceneError::NonFinite(name));
            }
        }
        if wall_x <= emitter.x {
            return Err(SceneError::WallBehindEmitter {
                emitter_x: emitter.x,
                wall_x,
            });
        }
        if y_top >= y_bottom {
            return Err(SceneError::InvertedBounds { y_top, y_bottom });
        }
        Ok(Self {
            emitter,
            wall_x,
            y_top,
            y_bottom,
        })
    }

    pub fn emitter(&self) -> ScenePoint {
        self.emitter
    }

    pub fn wall_x(&self) -> f64 {
        self.wall_x
    }

    /// Horizontal reach from the emitter to the wall plane. Strictly
    /// positive by construction.
    pub fn reach(&self) -> f64 {
        self.wall_x - self.emitter.x
    }

    /// True if `y` lies within the wall's vertical extent, inclusive.
    pub fn contains_y(&self, y: f64) -> bool {
        y.is_finite() && y >= self.y_top && y <= self.y_bottom
    }
}

// The serde-facing shape of a `[scene]` TOML table. Funnelling the parsed
// values through `SceneConfig::new` keeps the invariants in one place.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawScene {
    emitter: [f64; 2],
    wall_x: f64,
    y_top: f64,
    y_bottom: f64,
}

impl TryFrom<RawScene> for SceneConfig {
    type Error = SceneError;

    fn try_from(raw: RawScene) -> Result<Self, Self::Error> {
        SceneConfig::new(
            ScenePoint::new(raw.emitter[0], raw.emitter[1]),
            raw.wall_x,
            raw.y_top,
            raw.y_bottom,
        )
    }
}
