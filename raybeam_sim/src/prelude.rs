// raybeam_sim/src/prelude.rs

pub use crate::cli::Cli;
pub use crate::config::{Beam, ScenarioConfig, ScenarioError, Simulation};
pub use crate::runner::{run, RunSummary};

// Re-export the core's prelude so driver code has the full vocabulary.
pub use raybeam_core::prelude::*;
