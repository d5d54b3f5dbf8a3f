// raybeam_core/src/types.rs

use nalgebra::Point2;

// --- Core Type Aliases ---
/// A position in the 2D scene plane (x grows toward the wall).
pub type ScenePoint = Point2<f64>;

/// Milliseconds on the caller's monotonic clock.
pub type TimestampMs = f64;

/// Sentinel timestamp older than any real clock reading. Seeding the
/// noise gate with this guarantees the first enabled tick regenerates.
pub const TIMESTAMP_NEVER: TimestampMs = f64::NEG_INFINITY;
