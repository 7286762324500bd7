//! Axis-aligned box collision between the player and traffic

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::config::SimConfig;
use super::player::Player;
use super::world::World;

/// Closed axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    #[inline]
    pub fn from_center(center: Vec3, half_extent: Vec3) -> Self {
        Self {
            min: center - half_extent,
            max: center + half_extent,
        }
    }

    /// Overlap on all three axes. Touching faces count as contact.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.cmple(other.max).all() && other.min.cmple(self.max).all()
    }
}

/// Returns true if the player's box touches any obstacle in any hazard lane
///
/// Every hazard obstacle is tested against its own box. Generators may hand
/// out obstacles of any size, so a lane's z says nothing about its reach.
pub fn check_collision(player: &Player, world: &World, config: &SimConfig) -> bool {
    let player_box = player.aabb(config);

    world
        .lanes()
        .iter()
        .filter(|lane| lane.is_hazard())
        .flat_map(|lane| lane.obstacles.iter())
        .any(|obstacle| obstacle.aabb().intersects(&player_box))
}
