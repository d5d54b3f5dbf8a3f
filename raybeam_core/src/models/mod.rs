// raybeam_core/src/models/mod.rs

pub mod fusion;
pub mod geometry;
pub mod noise;
