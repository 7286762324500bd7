//! Game session: lifecycle, score and command handling
//!
//! The session exclusively owns the world, the player and the lane generator.
//! Hosts mutate it only through [`Session::start`], [`Session::restart`],
//! [`Session::command`] and [`super::tick`].

use serde::{Deserialize, Serialize};

use super::config::SimConfig;
use super::lane::{LaneGenerator, RandomLanes};
use super::player::Player;
use super::world::World;
use crate::error::ConfigError;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Created, waiting for `start`
    #[default]
    NotStarted,
    /// Ticks advance traffic and check collisions
    Playing,
    /// Hit by traffic; only lifecycle calls do anything
    GameOver,
}

/// Discrete movement command from an input adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Forward,
    Backward,
    Left,
    Right,
}

/// Notification for the score/status display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh run began (start or restart)
    Started,
    ScoreChanged { score: u64 },
    /// Player box touched an obstacle on this lane
    Collided { lane: u32 },
    GameOver { score: u64 },
}

/// Score and phase, as shown by the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub score: u64,
    pub phase: GamePhase,
}

/// One player's game: world, avatar, score and lane source
pub struct Session<G = RandomLanes> {
    pub(crate) config: SimConfig,
    generator: G,
    pub(crate) phase: GamePhase,
    pub(crate) world: World,
    pub(crate) player: Player,
    score: u64,
    best_score: u64,
    /// Ticks simulated in the current run
    pub(crate) time_ticks: u64,
    events: Vec<GameEvent>,
}

impl Session<RandomLanes> {
    /// Session with default options and seeded random lanes
    pub fn seeded(seed: u64) -> Self {
        // Defaults always pass validation
        Self::with_valid_config(SimConfig::default(), RandomLanes::seeded(seed))
    }
}

impl<G: LaneGenerator> Session<G> {
    /// Build an idle session, rejecting options the simulation cannot run with
    pub fn new(config: SimConfig, generator: G) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config, generator))
    }

    fn with_valid_config(config: SimConfig, generator: G) -> Self {
        Self {
            config,
            generator,
            phase: GamePhase::NotStarted,
            world: World::new(),
            player: Player::default(),
            score: 0,
            best_score: 0,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Begin a fresh run. Ignored while already playing.
    pub fn start(&mut self) -> bool {
        if self.phase == GamePhase::Playing {
            log::debug!("start() ignored: already playing");
            return false;
        }

        self.world.reset(&mut self.generator, &self.config);
        self.player.reset();
        self.score = 0;
        self.time_ticks = 0;
        self.phase = GamePhase::Playing;

        self.events.push(GameEvent::Started);
        self.events.push(GameEvent::ScoreChanged { score: 0 });
        log::info!("Run started with {} lanes", self.world.len());
        true
    }

    /// Identical to [`Session::start`]; discards all prior run state
    pub fn restart(&mut self) -> bool {
        self.start()
    }

    /// Apply a movement command. Returns false when rejected (not playing).
    pub fn command(&mut self, command: Command) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }

        match command {
            Command::Forward => {
                let next = self.player.lane_index + 1;
                if next as usize >= self.world.len() {
                    let index = self.world.extend(&mut self.generator, &self.config);
                    log::debug!("Frontier extended to lane {}", index);
                }
                self.player.step_forward();
                self.score += self.config.forward_score;
                self.events.push(GameEvent::ScoreChanged { score: self.score });
            }
            Command::Backward => self.player.step_backward(),
            Command::Left => self.player.shift(-self.config.lateral_step, &self.config),
            Command::Right => self.player.shift(self.config.lateral_step, &self.config),
        }

        debug_assert!(self.world.lane(self.player.lane_index).is_some());
        true
    }

    /// Terminal transition after a collision
    pub(crate) fn end_run(&mut self) {
        let lane = self.player.lane_index;
        self.phase = GamePhase::GameOver;
        self.best_score = self.best_score.max(self.score);
        self.events.push(GameEvent::Collided { lane });
        self.events.push(GameEvent::GameOver { score: self.score });
        log::info!(
            "Game over on lane {} after {} ticks, score {} (best {})",
            lane,
            self.time_ticks,
            self.score,
            self.best_score
        );
    }

    /// Take all pending status notifications, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn status(&self) -> Status {
        Status {
            score: self.score,
            phase: self.phase,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Best final score across finished runs of this session
    pub fn best_score(&self) -> u64 {
        self.best_score
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}
