// raybeam_core/src/prelude.rs

// --- Core Abstractions (The main contracts of the library) ---
pub use crate::models::noise::RangeNoiseModel;
pub use crate::pipeline::RangefinderPipeline;
pub use crate::scene::{SceneConfig, SceneError};

// --- Core Data Structures (The "nouns" of the library) ---
pub use crate::messages::{RangeEstimate, SensorInput, SensorReport};
pub use crate::models::geometry::BeamHit;
pub use crate::types::{ScenePoint, TimestampMs};

// --- Concrete Model Implementations (Export common ones for convenience) ---
pub use crate::models::geometry::cast_beam;
pub use crate::models::noise::{NoiseScheduler, UniformRangeNoise};
