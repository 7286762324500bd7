//! Tunable simulation options
//!
//! Defaults reproduce the reference scale in [`crate::consts`].

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Inclusive range of obstacle counts for a hazard lane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

/// Half-open range of obstacle speed magnitudes `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedRange {
    pub min: f32,
    pub max: f32,
}

/// All named simulation options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub lane_width: f32,
    pub initial_lanes: u32,
    /// Player lateral clamp L, offsets stay within [-L, L]
    pub lateral_bound: f32,
    pub lateral_step: f32,
    /// Obstacles spawn in [-w, w) and wrap at ±w
    pub road_half_width: f32,
    pub obstacle_speed: SpeedRange,
    pub obstacles_per_lane: CountRange,
    pub hazard_chance: f64,
    pub forward_score: u64,
    pub player_half_extent: Vec3,
    pub obstacle_half_extent: Vec3,
    /// Center height of obstacles; the player sits at y = 0
    pub obstacle_height: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            lane_width: LANE_WIDTH,
            initial_lanes: INITIAL_LANES,
            lateral_bound: LATERAL_BOUND,
            lateral_step: LATERAL_STEP,
            road_half_width: ROAD_HALF_WIDTH,
            obstacle_speed: SpeedRange {
                min: OBSTACLE_MIN_SPEED,
                max: OBSTACLE_MAX_SPEED,
            },
            obstacles_per_lane: CountRange {
                min: OBSTACLES_MIN,
                max: OBSTACLES_MAX,
            },
            hazard_chance: HAZARD_CHANCE,
            forward_score: FORWARD_SCORE,
            player_half_extent: Vec3::splat(0.5),
            obstacle_half_extent: Vec3::new(1.0, 0.5, 0.5),
            obstacle_height: 0.5,
        }
    }
}

impl SimConfig {
    /// z coordinate of a lane
    #[inline]
    pub fn lane_z(&self, index: u32) -> f32 {
        -(index as f32) * self.lane_width
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |m: &str| -> Result<(), ConfigError> {
            Err(ConfigError::Invalid(m.to_string()))
        };

        if !(self.lane_width > 0.0) {
            return invalid("lane_width must be positive");
        }
        if self.initial_lanes == 0 {
            return invalid("initial_lanes must be at least 1");
        }
        if !(self.lateral_bound >= 0.0) || !(self.lateral_step > 0.0) {
            return invalid("lateral_bound must be non-negative and lateral_step positive");
        }
        if !(self.road_half_width > 0.0) {
            return invalid("road_half_width must be positive");
        }
        let speed = self.obstacle_speed;
        if !(speed.min > 0.0) || !(speed.max > speed.min) {
            return invalid("obstacle_speed must satisfy 0 < min < max");
        }
        let count = self.obstacles_per_lane;
        if count.min == 0 || count.max < count.min {
            return invalid("obstacles_per_lane must satisfy 1 <= min <= max");
        }
        if !(0.0..=1.0).contains(&self.hazard_chance) {
            return invalid("hazard_chance must be within [0, 1]");
        }
        if self.forward_score != FORWARD_SCORE {
            return invalid("forward_score is fixed at 1");
        }
        if self.player_half_extent.min_element() <= 0.0
            || self.obstacle_half_extent.min_element() <= 0.0
        {
            return invalid("half extents must be positive on every axis");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_lane_z() {
        let config = SimConfig::default();
        assert_eq!(config.lane_z(0), 0.0);
        assert_eq!(config.lane_z(3), -6.0);
    }

    #[test]
    fn test_rejects_inverted_ranges() {
        let mut config = SimConfig::default();
        config.obstacles_per_lane = CountRange { min: 3, max: 1 };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = SimConfig::default();
        config.obstacle_speed = SpeedRange { min: 0.1, max: 0.1 };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_custom_forward_score() {
        let config = SimConfig {
            forward_score: 2,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SimConfig = serde_json::from_str(r#"{ "initial_lanes": 12 }"#).unwrap();
        assert_eq!(config.initial_lanes, 12);
        assert_eq!(config.lane_width, LANE_WIDTH);
    }
}
