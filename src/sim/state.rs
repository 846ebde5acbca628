//! Entity model and the per-run entity store
//!
//! The `Level` is the immutable definition shared across runs; the `World` is the
//! mutable run state rebuilt from it whenever a run starts.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Playfield extents; the valid region is `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Check if a point is within the arena (edges inclusive)
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width, self.height) * 0.5
    }
}

/// The player-steered particle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Particle {
    /// A particle at rest
    pub fn at_rest(pos: Vec2) -> Self {
        Self { pos, vel: Vec2::ZERO }
    }
}

/// An attractor spawned by a tap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GravityWell {
    /// Creation order within the run (0-based)
    pub id: u32,
    pub pos: Vec2,
    pub strength: f32,
}

/// A static hazard; touching it fails the run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: Vec2,
    /// Per-axis half-extent of the hit box
    pub half_size: f32,
}

/// The goal; reaching it completes the run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub pos: Vec2,
    /// Per-axis half-extent of the goal box
    pub half_size: f32,
}

/// One-way teleport link
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortalPair {
    pub inlet: Vec2,
    pub outlet: Vec2,
}

/// Immutable level definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub id: String,
    pub arena: Arena,
    /// Where the particle spawns at run start
    pub spawn: Vec2,
    pub target: Target,
    pub obstacles: Vec<Obstacle>,
    pub portals: Vec<PortalPair>,
    pub time_limit_secs: u32,
}

impl Level {
    /// The shipped level, laid out relative to the arena edges
    pub fn standard(arena: Arena, tuning: &Tuning) -> Self {
        let Arena { width, height } = arena;
        Self {
            id: crate::consts::LEVEL_ID.to_string(),
            arena,
            spawn: Vec2::new(tuning.spawn_inset, height - tuning.spawn_inset),
            target: Target {
                pos: Vec2::new(width - tuning.target_inset, tuning.target_inset),
                half_size: tuning.target_reach_extent,
            },
            obstacles: vec![Obstacle {
                pos: arena.center(),
                half_size: tuning.obstacle_hit_extent,
            }],
            portals: vec![PortalPair {
                inlet: Vec2::splat(tuning.portal_inlet_inset),
                outlet: Vec2::new(
                    width - tuning.portal_outlet_inset,
                    height - tuning.portal_outlet_inset,
                ),
            }],
            time_limit_secs: tuning.time_limit_secs,
        }
    }
}

/// Mutable state of the current run (the entity store)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub arena: Arena,
    pub particle: Particle,
    /// Append-only during a run, in creation order
    pub wells: Vec<GravityWell>,
    pub obstacles: Vec<Obstacle>,
    pub target: Target,
    pub portals: Vec<PortalPair>,
}

impl World {
    /// Build a fresh run state from a level definition
    pub fn new(level: &Level) -> Self {
        Self {
            arena: level.arena,
            particle: Particle::at_rest(level.spawn),
            wells: Vec::new(),
            obstacles: level.obstacles.clone(),
            target: level.target,
            portals: level.portals.clone(),
        }
    }

    /// Append a well; no validation beyond what the caller does
    pub fn add_well(&mut self, pos: Vec2, strength: f32) -> u32 {
        let id = self.wells.len() as u32;
        self.wells.push(GravityWell { id, pos, strength });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Arena {
        Arena::new(400.0, 800.0)
    }

    #[test]
    fn test_standard_layout() {
        let level = Level::standard(arena(), &Tuning::default());
        assert_eq!(level.id, "1");
        assert_eq!(level.spawn, Vec2::new(50.0, 750.0));
        assert_eq!(level.target.pos, Vec2::new(340.0, 60.0));
        assert_eq!(level.obstacles[0].pos, Vec2::new(200.0, 400.0));
        assert_eq!(level.portals[0].inlet, Vec2::new(100.0, 100.0));
        assert_eq!(level.portals[0].outlet, Vec2::new(300.0, 700.0));
        assert_eq!(level.time_limit_secs, 30);
    }

    #[test]
    fn test_world_starts_clean() {
        let level = Level::standard(arena(), &Tuning::default());
        let world = World::new(&level);
        assert_eq!(world.particle.pos, level.spawn);
        assert_eq!(world.particle.vel, Vec2::ZERO);
        assert!(world.wells.is_empty());
    }

    #[test]
    fn test_wells_keep_creation_order() {
        let level = Level::standard(arena(), &Tuning::default());
        let mut world = World::new(&level);
        let a = world.add_well(Vec2::new(10.0, 10.0), 0.02);
        let b = world.add_well(Vec2::new(20.0, 20.0), 0.02);
        assert_eq!((a, b), (0, 1));
        assert_eq!(world.wells[1].pos, Vec2::new(20.0, 20.0));
    }

    #[test]
    fn test_arena_edges_inclusive() {
        let arena = arena();
        assert!(arena.contains(Vec2::new(0.0, 0.0)));
        assert!(arena.contains(Vec2::new(400.0, 800.0)));
        assert!(!arena.contains(Vec2::new(-0.1, 10.0)));
        assert!(!arena.contains(Vec2::new(10.0, 800.1)));
    }
}
