// raybeam_core/src/lib.rs

// This file defines the public modules of your library.
pub mod messages;
pub mod models;
pub mod pipeline;
pub mod prelude;
pub mod scene;
pub mod types;
