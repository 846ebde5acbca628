//! Portal routing
//!
//! A particle inside an inlet's capture box is moved to the outlet in the same tick.

use super::collision::box_overlap;
use super::state::{Particle, PortalPair};

/// Teleport the particle through the first portal whose inlet captures it.
///
/// Portals are checked in list order and at most one hop happens per tick, so an
/// outlet that lands inside another inlet is only taken on the next tick.
/// Velocity is left untouched. Returns the index of the portal taken, if any.
pub fn route(particle: &mut Particle, portals: &[PortalPair], threshold: f32) -> Option<usize> {
    for (index, portal) in portals.iter().enumerate() {
        if box_overlap(particle.pos, portal.inlet, threshold) {
            log::debug!("Portal {} -> {:?}", index, portal.outlet);
            particle.pos = portal.outlet;
            return Some(index);
        }
    }
    None
}
