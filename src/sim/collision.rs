//! Collision and goal detection
//!
//! All tests are axis-aligned boxes: each axis offset is compared independently against
//! a half-extent, never a Euclidean distance.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::World;

/// Terminal result of a run, as seen by a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    /// Particle left the arena
    OutOfBounds,
    /// Particle touched an obstacle (index into the obstacle list)
    HitObstacle(usize),
    /// Countdown reached zero
    TimeUp,
    /// Particle reached the target
    ReachedTarget,
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::ReachedTarget)
    }
}

/// Strict per-axis box test: `|a - b| < half_extent` on both axes
#[inline]
pub fn box_overlap(a: Vec2, b: Vec2, half_extent: f32) -> bool {
    let offset = (a - b).abs();
    offset.x < half_extent && offset.y < half_extent
}

/// Evaluate boundary, obstacles, then target.
///
/// The first qualifying condition wins, so a particle that is simultaneously on an
/// obstacle and inside the target fails the run.
pub fn detect(world: &World) -> Option<RunOutcome> {
    let pos = world.particle.pos;

    if !world.arena.contains(pos) {
        return Some(RunOutcome::OutOfBounds);
    }

    if let Some(index) = world
        .obstacles
        .iter()
        .position(|obstacle| box_overlap(pos, obstacle.pos, obstacle.half_size))
    {
        return Some(RunOutcome::HitObstacle(index));
    }

    if box_overlap(pos, world.target.pos, world.target.half_size) {
        return Some(RunOutcome::ReachedTarget);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Arena, Obstacle, Particle, Target};

    fn world_with(pos: Vec2) -> World {
        World {
            arena: Arena::new(400.0, 800.0),
            particle: Particle::at_rest(pos),
            wells: Vec::new(),
            obstacles: vec![Obstacle {
                pos: Vec2::new(200.0, 400.0),
                half_size: 20.0,
            }],
            target: Target {
                pos: Vec2::new(340.0, 60.0),
                half_size: 40.0,
            },
            portals: Vec::new(),
        }
    }

    #[test]
    fn test_box_overlap_is_per_axis() {
        // Euclidean distance ~26.9 > 20, but each axis offset is 19
        assert!(box_overlap(Vec2::new(19.0, 19.0), Vec2::ZERO, 20.0));
        // Exactly on the extent does not count
        assert!(!box_overlap(Vec2::new(20.0, 0.0), Vec2::ZERO, 20.0));
    }

    #[test]
    fn test_open_space_is_quiet() {
        assert_eq!(detect(&world_with(Vec2::new(50.0, 750.0))), None);
    }

    #[test]
    fn test_out_of_bounds_each_edge() {
        for pos in [
            Vec2::new(-0.5, 100.0),
            Vec2::new(400.5, 100.0),
            Vec2::new(100.0, -0.5),
            Vec2::new(100.0, 800.5),
        ] {
            assert_eq!(detect(&world_with(pos)), Some(RunOutcome::OutOfBounds));
        }
    }

    #[test]
    fn test_obstacle_hit() {
        let outcome = detect(&world_with(Vec2::new(215.0, 385.0)));
        assert_eq!(outcome, Some(RunOutcome::HitObstacle(0)));
    }

    #[test]
    fn test_target_reached() {
        let outcome = detect(&world_with(Vec2::new(310.0, 90.0)));
        assert_eq!(outcome, Some(RunOutcome::ReachedTarget));
        assert!(outcome.is_some_and(|o| o.is_success()));
    }

    #[test]
    fn test_obstacle_beats_target() {
        let mut world = world_with(Vec2::new(340.0, 60.0));
        world.obstacles.push(Obstacle {
            pos: Vec2::new(345.0, 65.0),
            half_size: 20.0,
        });
        assert_eq!(detect(&world), Some(RunOutcome::HitObstacle(1)));
    }
}
