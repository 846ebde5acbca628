//! Simulation tick
//!
//! The stage order is fixed and part of the game rules:
//! wells -> integrate -> portals -> boundary/obstacles/target -> countdown.
//! Portals run before collision so a teleport is judged at the outlet, and failure
//! conditions are checked before the target.

use glam::Vec2;

use super::collision::{RunOutcome, detect};
use super::physics::integrate;
use super::portal::route;
use super::state::World;
use super::timer::Countdown;
use crate::tuning::Tuning;

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Taps queued since the previous tick, in arrival order
    pub taps: Vec<Vec2>,
    /// Real time since the previous tick (seconds)
    pub dt: f32,
}

/// Advance one run by a single tick.
///
/// Returns the outcome if the run ended on this tick.
pub fn tick(
    world: &mut World,
    timer: &mut Countdown,
    input: &TickInput,
    tuning: &Tuning,
) -> Option<RunOutcome> {
    for &tap in &input.taps {
        let id = world.add_well(tap, tuning.well_strength);
        log::debug!("Well {} at ({:.1}, {:.1})", id, tap.x, tap.y);
    }

    integrate(&mut world.particle, &world.wells);
    route(&mut world.particle, &world.portals, tuning.portal_threshold);

    if let Some(outcome) = detect(world) {
        return Some(outcome);
    }

    if timer.advance(input.dt) {
        return Some(RunOutcome::TimeUp);
    }

    None
}
