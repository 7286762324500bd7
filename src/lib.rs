//! Road Crossing - endless lane-runner simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (lanes, actors, collisions, session lifecycle)
//! - `input`: Key name to command mapping for host adapters
//! - `settings`: JSON-backed host settings
//! - `error`: Errors raised at the host edge

pub mod error;
pub mod input;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::{DemoSettings, Settings};

/// Reference-scale defaults
pub mod consts {
    /// Fixed tick length used by `FrameClock::frame_timed` (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum timed substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest host frame delta accepted by the frame clock (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Distance between lane centers along z
    pub const LANE_WIDTH: f32 = 2.0;
    /// Lanes generated on start/restart
    pub const INITIAL_LANES: u32 = 30;

    /// Player lateral clamp (symmetric)
    pub const LATERAL_BOUND: f32 = 14.0;
    /// Lateral distance moved by one Left/Right command
    pub const LATERAL_STEP: f32 = 1.0;
    /// Half the road width; obstacles spawn inside it and wrap at its edges
    pub const ROAD_HALF_WIDTH: f32 = 15.0;

    /// Slowest obstacle speed magnitude (world units per tick)
    pub const OBSTACLE_MIN_SPEED: f32 = 0.02;
    /// Upper speed bound, exclusive
    pub const OBSTACLE_MAX_SPEED: f32 = 0.12;
    /// Fewest obstacles on a hazard lane
    pub const OBSTACLES_MIN: u32 = 1;
    /// Most obstacles on a hazard lane (inclusive)
    pub const OBSTACLES_MAX: u32 = 3;
    /// Chance that a lane past the start is a hazard
    pub const HAZARD_CHANCE: f64 = 0.5;

    /// Score awarded per accepted forward move
    pub const FORWARD_SCORE: u64 = 1;
}
