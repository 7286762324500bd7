//! The player's grid-constrained avatar

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::config::SimConfig;

/// Where the player stands: a lane and a lateral offset within it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Lane the player stands on
    pub lane_index: u32,
    /// Lateral position, kept within `[-lateral_bound, lateral_bound]`
    pub lateral_offset: f32,
}

impl Player {
    /// Back to the start tile
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Step one lane forward. The caller must have generated the lane.
    pub fn step_forward(&mut self) {
        self.lane_index += 1;
    }

    /// Step one lane back, never behind lane 0
    pub fn step_backward(&mut self) {
        self.lane_index = self.lane_index.saturating_sub(1);
    }

    /// Shift sideways by `delta`, clamped to the lateral bound
    pub fn shift(&mut self, delta: f32, config: &SimConfig) {
        let bound = config.lateral_bound;
        self.lateral_offset = (self.lateral_offset + delta).clamp(-bound, bound);
    }

    pub fn position(&self, config: &SimConfig) -> Vec3 {
        Vec3::new(self.lateral_offset, 0.0, config.lane_z(self.lane_index))
    }

    pub fn aabb(&self, config: &SimConfig) -> Aabb {
        Aabb::from_center(self.position(config), config.player_half_extent)
    }
}
