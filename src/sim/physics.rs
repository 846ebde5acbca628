//! Well attraction and particle integration
//!
//! One explicit Euler step per tick, no timestep scaling: acceleration is added to
//! velocity, velocity to position. The simulation is frame-rate dependent.

use glam::Vec2;

use super::state::{GravityWell, Particle};
use crate::consts::MIN_WELL_DISTANCE;

/// Pull of a single well on a point.
///
/// Direction toward the well divided by the (floored) distance, scaled by strength.
/// Coincident points yield zero rather than NaN. The offset is taken in f64 so any pair
/// of finite f32 coordinates gives a finite, nonzero distance.
#[inline]
pub fn well_pull(pos: Vec2, well: &GravityWell) -> Vec2 {
    let dx = well.pos.x as f64 - pos.x as f64;
    let dy = well.pos.y as f64 - pos.y as f64;
    let distance = dx.hypot(dy).max(MIN_WELL_DISTANCE as f64);
    let scale = well.strength as f64 / distance;
    Vec2::new((dx * scale) as f32, (dy * scale) as f32)
}

/// Summed acceleration from all wells
pub fn well_acceleration(pos: Vec2, wells: &[GravityWell]) -> Vec2 {
    wells.iter().map(|well| well_pull(pos, well)).sum()
}

/// Advance the particle by one tick
pub fn integrate(particle: &mut Particle, wells: &[GravityWell]) {
    particle.vel += well_acceleration(particle.pos, wells);
    particle.pos += particle.vel;
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn well(x: f32, y: f32, strength: f32) -> GravityWell {
        GravityWell {
            id: 0,
            pos: Vec2::new(x, y),
            strength,
        }
    }

    #[test]
    fn test_no_wells_no_motion() {
        let mut particle = Particle::at_rest(Vec2::new(50.0, 50.0));
        for _ in 0..100 {
            integrate(&mut particle, &[]);
        }
        assert_eq!(particle.pos, Vec2::new(50.0, 50.0));
        assert_eq!(particle.vel, Vec2::ZERO);
    }

    #[test]
    fn test_pull_is_unit_direction_times_strength() {
        let a = well_pull(Vec2::ZERO, &well(30.0, 40.0, 0.5));
        assert!((a - Vec2::new(0.3, 0.4)).length() < 1e-6);
    }

    #[test]
    fn test_coincident_well_is_finite() {
        let a = well_pull(Vec2::new(5.0, 5.0), &well(5.0, 5.0, 0.02));
        assert_eq!(a, Vec2::ZERO);
    }

    #[test]
    fn test_distance_floor_inside_one_unit() {
        // Closer than one unit: the offset is divided by 1, not by its length
        let a = well_pull(Vec2::ZERO, &well(0.5, 0.0, 1.0));
        assert!((a.x - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_distant_well_still_pulls() {
        // Squaring 1e20 overflows f32
        let a = well_pull(Vec2::ZERO, &well(1e20, 0.0, 0.02));
        assert!((a.x - 0.02).abs() < 1e-6);
        assert_eq!(a.y, 0.0);

        let a = well_pull(Vec2::new(-f32::MAX, 0.0), &well(f32::MAX, -f32::MAX, 0.02));
        assert!(a.is_finite());
        assert!(a.x > 0.0 && a.y < 0.0);
    }

    #[test]
    fn test_euler_order() {
        let mut particle = Particle::at_rest(Vec2::ZERO);
        integrate(&mut particle, &[well(10.0, 0.0, 1.0)]);
        // Velocity is updated first, then applied to position in the same tick
        assert_eq!(particle.vel, Vec2::new(1.0, 0.0));
        assert_eq!(particle.pos, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_contributions_sum() {
        let wells = [well(10.0, 0.0, 1.0), well(-10.0, 0.0, 1.0)];
        assert_eq!(well_acceleration(Vec2::ZERO, &wells), Vec2::ZERO);
    }

    proptest! {
        #[test]
        fn prop_pull_points_toward_well(
            px in -1e30f32..1e30, py in -1e30f32..1e30,
            wx in -1e30f32..1e30, wy in -1e30f32..1e30,
            strength in 0.001f32..10.0,
        ) {
            let pos = Vec2::new(px, py);
            let w = well(wx, wy, strength);
            let a = well_pull(pos, &w);
            prop_assert!(a.is_finite());
            // Each axis points toward the well (or is zero)
            prop_assert!(a.x == 0.0 || (a.x > 0.0) == (wx > px));
            prop_assert!(a.y == 0.0 || (a.y > 0.0) == (wy > py));
            prop_assert!(a.length() <= strength * 1.0001);
            // Beyond the floor the pull has full strength
            if (wx as f64 - px as f64).hypot(wy as f64 - py as f64) >= 1.0 {
                prop_assert!(a.length() >= strength * 0.999);
            }
        }

        #[test]
        fn prop_integration_stays_finite(
            taps in proptest::collection::vec((0.0f32..800.0, 0.0f32..800.0), 0..8),
        ) {
            let wells: Vec<GravityWell> = taps
                .iter()
                .enumerate()
                .map(|(i, &(x, y))| GravityWell { id: i as u32, pos: Vec2::new(x, y), strength: 0.02 })
                .collect();
            let mut particle = Particle::at_rest(Vec2::new(50.0, 750.0));
            for _ in 0..600 {
                integrate(&mut particle, &wells);
            }
            prop_assert!(particle.pos.is_finite());
            prop_assert!(particle.vel.is_finite());
        }
    }
}
