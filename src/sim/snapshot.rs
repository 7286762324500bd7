//! Read-only view of the simulation for renderers
//!
//! Renderers never touch simulation state directly; they get a snapshot per
//! frame and return nothing the simulation depends on.

use glam::Vec3;
use serde::Serialize;

use super::lane::{LaneGenerator, LaneKind};
use super::session::{Session, Status};

#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub pos: Vec3,
    pub half_extent: Vec3,
}

#[derive(Debug, Clone, Serialize)]
pub struct LaneView {
    pub index: u32,
    pub kind: LaneKind,
    pub z: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ObstacleView {
    pub lane: u32,
    pub pos: Vec3,
    pub half_extent: Vec3,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct RenderSnapshot {
    pub player: PlayerView,
    pub lanes: Vec<LaneView>,
    /// Obstacles of every hazard lane
    pub obstacles: Vec<ObstacleView>,
    pub status: Status,
}

impl RenderSnapshot {
    pub fn capture<G: LaneGenerator>(session: &Session<G>) -> Self {
        let config = session.config();
        let lanes = session.world().lanes();

        Self {
            player: PlayerView {
                pos: session.player().position(config),
                half_extent: config.player_half_extent,
            },
            lanes: lanes
                .iter()
                .map(|lane| LaneView {
                    index: lane.index,
                    kind: lane.kind,
                    z: lane.z,
                })
                .collect(),
            obstacles: lanes
                .iter()
                .filter(|lane| lane.is_hazard())
                .flat_map(|lane| {
                    lane.obstacles.iter().map(move |o| ObstacleView {
                        lane: lane.index,
                        pos: o.pos,
                        half_extent: o.half_extent,
                    })
                })
                .collect(),
            status: session.status(),
        }
    }
}
