//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Tick order is fixed (wells, integrate, portals, collisions, countdown)
//! - Stable iteration order (creation order for wells, list order for portals/obstacles)
//! - No rendering, storage or platform dependencies

pub mod collision;
pub mod phase;
pub mod physics;
pub mod portal;
pub mod state;
pub mod tick;
pub mod timer;

pub use collision::{RunOutcome, box_overlap, detect};
pub use phase::{Command, GamePhase};
pub use physics::{integrate, well_acceleration, well_pull};
pub use portal::route;
pub use state::{Arena, GravityWell, Level, Obstacle, Particle, PortalPair, Target, World};
pub use tick::{TickInput, tick};
pub use timer::Countdown;
