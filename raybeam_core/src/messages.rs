// raybeam_core/src/messages.rs

use crate::types::{ScenePoint, TimestampMs};

// =========================================================================
// == Tick Input ==
// =========================================================================

/// The per-tick input packet supplied by the driver: the beam angle, the
/// fusion toggle, and the current time on the caller's monotonic clock.
///
/// Ticks must arrive in non-decreasing timestamp order; the noise gate
/// compares timestamps directly and makes no attempt to handle clocks
/// that run backwards.
#[derive(Debug, Clone, Copy)]
pub struct SensorInput {
    /// Beam angle in degrees. 0 points along +x (straight at the wall),
    /// positive angles rotate toward +y. Any finite value is accepted.
    pub angle_deg: f64,
    /// Whether the noisy secondary channel participates this tick.
    pub fusion_enabled: bool,
    pub timestamp_ms: TimestampMs,
}

// =========================================================================
// == Tick Output ==
// =========================================================================

/// One tick's fused range estimate.
///
/// `OutOfRange` is the explicit sentinel for a beam that misses the wall's
/// vertical extent (including degenerate near-±90° angles). It carries no
/// numbers at all: a miss is never reported as a zero or extrapolated
/// distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeEstimate {
    OutOfRange,
    Reading {
        /// Exact Euclidean distance along the beam to the wall.
        true_distance: f64,
        /// The perturbed secondary reading. `Some` only while fusion is
        /// enabled.
        noisy_reading: Option<f64>,
        /// Equal-weight average of the true and noisy channels; equals
        /// `true_distance` exactly while fusion is disabled.
        fused_distance: f64,
        /// Emitter x recovered by inverting the fused range against the
        /// known wall position and beam angle.
        estimated_x: f64,
        /// Where the beam strikes the wall plane.
        hit_point: ScenePoint,
    },
}

impl RangeEstimate {
    pub fn is_valid(&self) -> bool {
        matches!(self, RangeEstimate::Reading { .. })
    }
}

/// The generic message that carries one tick's result back to the driver.
#[derive(Debug, Clone, Copy)]
pub struct SensorReport {
    pub timestamp_ms: TimestampMs,
    pub angle_deg: f64,
    pub estimate: RangeEstimate,
}
