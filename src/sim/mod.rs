//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per frame
//! - Injected RNG only (seeded in tests)
//! - Stable iteration order (by lane index)
//! - No rendering or platform dependencies

pub mod actor;
pub mod autopilot;
pub mod collision;
pub mod config;
pub mod frame;
pub mod lane;
pub mod player;
pub mod session;
pub mod snapshot;
pub mod tick;
pub mod world;

pub use actor::Actor;
pub use autopilot::Autopilot;
pub use collision::{Aabb, check_collision};
pub use config::{CountRange, SimConfig, SpeedRange};
pub use frame::{FrameClock, FrameReport};
pub use lane::{Lane, LaneGenerator, LaneKind, RandomLanes};
pub use player::Player;
pub use session::{Command, GameEvent, GamePhase, Session, Status};
pub use snapshot::{LaneView, ObstacleView, PlayerView, RenderSnapshot};
pub use tick::{TickOutcome, advance_world, tick};
pub use world::World;
