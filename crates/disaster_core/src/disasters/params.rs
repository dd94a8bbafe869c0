//! Runtime tunables for cascading disasters.
//!
//! Per-type damage and probability constants live in `constants.rs`; the
//! values here control how new fires are spawned by spread and explosions,
//! and can be swapped per scenario without recompiling.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisasterParams {
    /// Child fire intensity as a fraction of the source intensity.
    pub cascade_intensity_factor: f32,
    /// Duration in ticks of every cascaded fire.
    pub cascade_duration: u32,
    /// Radius in cells of every cascaded fire.
    pub cascade_radius: f32,
    /// Flat chance (not intensity-scaled) that fire jumps to an eligible neighbor.
    pub spread_chance: f32,
}

impl Default for DisasterParams {
    fn default() -> Self {
        Self {
            cascade_intensity_factor: 0.7,
            cascade_duration: 4,
            cascade_radius: 1.5,
            spread_chance: 0.4,
        }
    }
}
