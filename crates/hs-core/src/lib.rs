//! hs-core: Shared types, seams, and configuration for HitStage
//!
//! This crate provides the foundational types used across all HitStage crates:
//! - Clip handles and the fixed clip roster for a stage
//! - The `MediaBackend` / `StagePresenter` seams to the host page
//! - Stage configuration with JSON load/save
//! - Core error type

mod clip;
mod config;
mod error;
mod stage;

pub use clip::*;
pub use config::*;
pub use error::*;
pub use stage::*;
