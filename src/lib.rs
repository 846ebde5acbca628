//! Quantum Flux - a gravity-well physics puzzle
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, physics, portals, collisions, timer, phases)
//! - `game`: Run lifecycle controller and the read-only snapshot handed to the frontend
//! - `progress`: Best completion times per level
//! - `persistence`: Progress storage backends (file, LocalStorage, memory)
//! - `tuning`: Data-driven level and physics constants

pub mod game;
pub mod persistence;
pub mod progress;
pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use game::{Game, RunResult, Snapshot};
pub use progress::{LevelBest, ProgressRecord};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Identifier of the only level shipped with the game
    pub const LEVEL_ID: &str = "1";
    /// Storage key for the progress record (LocalStorage key / file stem)
    pub const PROGRESS_KEY: &str = "levelProgress";

    /// Countdown for a run (seconds)
    pub const TIME_LIMIT_SECS: u32 = 30;
    /// Strength of a well spawned by a tap
    pub const WELL_STRENGTH: f32 = 0.02;
    /// Upper bound accepted for a tuned well strength
    pub const MAX_WELL_STRENGTH: f32 = 10.0;

    /// Per-axis half-extent for an obstacle hit
    pub const OBSTACLE_HIT_EXTENT: f32 = 20.0;
    /// Per-axis half-extent for reaching the target
    pub const TARGET_REACH_EXTENT: f32 = 40.0;
    /// Per-axis capture distance around a portal inlet
    pub const PORTAL_THRESHOLD: f32 = 20.0;

    /// Minimum distance used when normalizing a well's pull
    pub const MIN_WELL_DISTANCE: f32 = 1.0;

    /// Host frame rate the native driver ticks at
    pub const FRAME_DT: f32 = 1.0 / 60.0;
}
