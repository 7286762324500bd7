//! Lanes and procedural lane generation

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::config::SimConfig;

/// Lane surface type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaneKind {
    /// Grass, nothing can hit the player here
    Safe,
    /// Road with moving obstacles
    Hazard,
}

/// One strip of the world at a fixed forward coordinate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lane {
    pub index: u32,
    pub kind: LaneKind,
    /// Forward coordinate, always `-index * lane_width`
    pub z: f32,
    /// Non-empty only for hazard lanes
    pub obstacles: Vec<Actor>,
}

impl Lane {
    pub fn safe(index: u32, config: &SimConfig) -> Self {
        Self {
            index,
            kind: LaneKind::Safe,
            z: config.lane_z(index),
            obstacles: Vec::new(),
        }
    }

    /// Hazard lane with obstacles given as `(x, vel_x)` pairs
    pub fn hazard(index: u32, config: &SimConfig, cars: &[(f32, f32)]) -> Self {
        let z = config.lane_z(index);
        let obstacles = cars
            .iter()
            .map(|&(x, vel_x)| {
                Actor::new(
                    Vec3::new(x, config.obstacle_height, z),
                    vel_x,
                    config.obstacle_half_extent,
                )
            })
            .collect();
        Self {
            index,
            kind: LaneKind::Hazard,
            z,
            obstacles,
        }
    }

    #[inline]
    pub fn is_hazard(&self) -> bool {
        self.kind == LaneKind::Hazard
    }
}

/// Source of new lanes
///
/// The world asks for each index exactly once, in increasing order.
pub trait LaneGenerator {
    fn generate(&mut self, index: u32, config: &SimConfig) -> Lane;
}

/// Uniform random lanes driven by an injectable RNG
#[derive(Debug, Clone)]
pub struct RandomLanes<R = Pcg32> {
    rng: R,
}

impl RandomLanes<Pcg32> {
    /// Deterministic generator, same seed gives the same world
    pub fn seeded(seed: u64) -> Self {
        Self::new(Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomLanes<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn obstacle(&mut self, z: f32, config: &SimConfig) -> Actor {
        let w = config.road_half_width;
        let x = self.rng.random_range(-w..w);
        let speed = self
            .rng
            .random_range(config.obstacle_speed.min..config.obstacle_speed.max);
        let direction = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        Actor::new(
            Vec3::new(x, config.obstacle_height, z),
            speed * direction,
            config.obstacle_half_extent,
        )
    }
}

impl<R: Rng> LaneGenerator for RandomLanes<R> {
    fn generate(&mut self, index: u32, config: &SimConfig) -> Lane {
        // Start tile is always grass
        if index == 0 || !self.rng.random_bool(config.hazard_chance) {
            return Lane::safe(index, config);
        }

        let z = config.lane_z(index);
        let count = self
            .rng
            .random_range(config.obstacles_per_lane.min..=config.obstacles_per_lane.max);
        let obstacles = (0..count).map(|_| self.obstacle(z, config)).collect();

        Lane {
            index,
            kind: LaneKind::Hazard,
            z,
            obstacles,
        }
    }
}
