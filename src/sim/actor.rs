//! Moving entities
//!
//! Obstacles travel along x only and wrap around the road edges instead of
//! bouncing, so each hazard lane behaves like a conveyor of traffic.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;

/// A box-shaped entity with optional lateral velocity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Center position (x lateral, y up, z forward/back)
    pub pos: Vec3,
    /// Lateral velocity in world units per tick (0 = static)
    pub vel_x: f32,
    pub half_extent: Vec3,
}

impl Actor {
    pub fn new(pos: Vec3, vel_x: f32, half_extent: Vec3) -> Self {
        Self {
            pos,
            vel_x,
            half_extent,
        }
    }

    /// Move one tick, wrapping to the opposite side once past `bound`
    pub fn advance(&mut self, bound: f32) {
        self.pos.x += self.vel_x;
        if self.vel_x > 0.0 && self.pos.x > bound {
            self.pos.x = -bound;
        } else if self.vel_x < 0.0 && self.pos.x < -bound {
            self.pos.x = bound;
        }
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center(self.pos, self.half_extent)
    }
}
