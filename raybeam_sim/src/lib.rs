// raybeam_sim/src/lib.rs

// This prelude is for convenience for other files WITHIN the raybeam_sim crate.
pub mod prelude;

pub mod cli;
pub mod config;
pub mod runner;
