//! Data-driven level and physics constants
//!
//! Defaults reproduce the shipped level; a JSON override can be supplied by the host.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable values for the level and the tick pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Tuning {
    /// Countdown for a run (seconds)
    pub time_limit_secs: u32,
    /// Strength of a tap-spawned well
    pub well_strength: f32,
    /// Per-axis half-extent for an obstacle hit
    pub obstacle_hit_extent: f32,
    /// Per-axis half-extent for reaching the target
    pub target_reach_extent: f32,
    /// Per-axis capture distance around a portal inlet
    pub portal_threshold: f32,

    // === Layout (offsets from the arena edges) ===
    /// Particle spawn inset from the left and bottom edges
    pub spawn_inset: f32,
    /// Target inset from the right and top edges
    pub target_inset: f32,
    /// Portal inlet inset from the top-left corner
    pub portal_inlet_inset: f32,
    /// Portal outlet inset from the bottom-right corner
    pub portal_outlet_inset: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            time_limit_secs: TIME_LIMIT_SECS,
            well_strength: WELL_STRENGTH,
            obstacle_hit_extent: OBSTACLE_HIT_EXTENT,
            target_reach_extent: TARGET_REACH_EXTENT,
            portal_threshold: PORTAL_THRESHOLD,

            spawn_inset: 50.0,
            target_inset: 60.0,
            portal_inlet_inset: 100.0,
            portal_outlet_inset: 100.0,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON, keeping defaults for missing fields.
    /// Malformed input falls back to the defaults.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides");
                tuning
            }
            Err(e) => {
                log::warn!("Invalid tuning JSON ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// Whether every value is usable by the simulation
    pub fn is_valid(&self) -> bool {
        let strength_ok = self.well_strength > 0.0 && self.well_strength <= MAX_WELL_STRENGTH;
        strength_ok
            && [
                self.obstacle_hit_extent,
                self.target_reach_extent,
                self.portal_threshold,
                self.spawn_inset,
                self.target_inset,
                self.portal_inlet_inset,
                self.portal_outlet_inset,
            ]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }

    /// Self if valid, otherwise the defaults
    pub fn validated(self) -> Self {
        if self.is_valid() {
            self
        } else {
            log::warn!("Invalid tuning values, using defaults");
            Self::default()
        }
    }
}
