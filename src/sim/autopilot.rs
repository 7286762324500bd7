//! Idle/demo mode - picks commands so the game can play itself
//!
//! The autopilot only reads session state. It predicts each obstacle a few
//! ticks ahead and prefers, in order: moving forward into a clear lane,
//! escaping a lane about to be hit, sidestepping toward a gap in the next lane.

use super::actor::Actor;
use super::config::SimConfig;
use super::lane::{Lane, LaneGenerator};
use super::session::{Command, GamePhase, Session};

/// Extra lateral clearance kept from predicted traffic
const SAFETY_MARGIN: f32 = 0.25;

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Ticks of obstacle motion to look ahead
    pub horizon: u32,
    /// Lateral steps searched either way for a gap
    pub search_steps: u32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            horizon: 12,
            search_steps: 6,
        }
    }
}

impl Autopilot {
    pub fn new(horizon: u32) -> Self {
        Self {
            horizon,
            ..Default::default()
        }
    }

    /// Next command to issue, or `None` to wait this frame
    pub fn suggest<G: LaneGenerator>(&self, session: &Session<G>) -> Option<Command> {
        if session.phase() != GamePhase::Playing {
            return None;
        }

        let config = session.config();
        let world = session.world();
        let player = session.player();
        let x = player.lateral_offset;
        let step = config.lateral_step;

        let current = world.lane(player.lane_index);
        let next = world.lane(player.lane_index + 1);

        if self.clear(next, x, config) {
            return Some(Command::Forward);
        }

        let clamp = |target: f32| target.clamp(-config.lateral_bound, config.lateral_bound);

        if !self.clear(current, x, config) {
            // Retreat if the previous lane is open, else dodge sideways
            if player.lane_index > 0 && self.clear(world.lane(player.lane_index - 1), x, config) {
                return Some(Command::Backward);
            }
            return [(Command::Left, -step), (Command::Right, step)]
                .into_iter()
                .find(|&(_, dx)| {
                    let target = clamp(x + dx);
                    target != x && self.clear(current, target, config)
                })
                .map(|(cmd, _)| cmd);
        }

        // Current lane is fine; walk toward the nearest gap in the next one
        for k in 1..=self.search_steps {
            let reach = k as f32 * step;
            for (cmd, dx) in [(Command::Left, -reach), (Command::Right, reach)] {
                let target = clamp(x + dx);
                let first_step = clamp(x + dx.signum() * step);
                if target != x
                    && self.clear(next, target, config)
                    && self.clear(current, first_step, config)
                {
                    return Some(cmd);
                }
            }
        }

        None
    }

    /// True if no obstacle in `lane` comes laterally close to `x` within the horizon
    fn clear(&self, lane: Option<&Lane>, x: f32, config: &SimConfig) -> bool {
        let Some(lane) = lane else {
            // Not generated yet, nothing to see
            return true;
        };
        if !lane.is_hazard() {
            return true;
        }
        lane.obstacles
            .iter()
            .all(|obstacle| !self.threatens(obstacle, x, config))
    }

    fn threatens(&self, obstacle: &Actor, x: f32, config: &SimConfig) -> bool {
        let reach = obstacle.half_extent.x + config.player_half_extent.x + SAFETY_MARGIN;
        let mut ghost = obstacle.clone();
        for t in 0..=self.horizon {
            if t > 0 {
                ghost.advance(config.road_half_width);
            }
            if (ghost.pos.x - x).abs() <= reach {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick::{TickOutcome, tick};

    struct Meadow;

    impl LaneGenerator for Meadow {
        fn generate(&mut self, index: u32, config: &SimConfig) -> Lane {
            Lane::safe(index, config)
        }
    }

    /// Lane 1: static car at x = 0
    struct Roadblock;

    impl LaneGenerator for Roadblock {
        fn generate(&mut self, index: u32, config: &SimConfig) -> Lane {
            if index == 1 {
                Lane::hazard(index, config, &[(0.0, 0.0)])
            } else {
                Lane::safe(index, config)
            }
        }
    }

    /// Lane 1: car closing in from the left. Lane 2: static car at x = 0.
    struct Squeeze;

    impl LaneGenerator for Squeeze {
        fn generate(&mut self, index: u32, config: &SimConfig) -> Lane {
            match index {
                1 => Lane::hazard(index, config, &[(-3.0, 0.5)]),
                2 => Lane::hazard(index, config, &[(0.0, 0.0)]),
                _ => Lane::safe(index, config),
            }
        }
    }

    #[test]
    fn test_waits_when_not_playing() {
        let session = Session::new(SimConfig::default(), Meadow).unwrap();
        assert_eq!(Autopilot::default().suggest(&session), None);
    }

    #[test]
    fn test_walks_forward_on_grass() {
        let mut session = Session::new(SimConfig::default(), Meadow).unwrap();
        session.start();
        assert_eq!(Autopilot::default().suggest(&session), Some(Command::Forward));
    }

    #[test]
    fn test_sidesteps_static_roadblock() {
        let mut session = Session::new(SimConfig::default(), Roadblock).unwrap();
        session.start();
        assert_eq!(Autopilot::default().suggest(&session), Some(Command::Left));
    }

    #[test]
    fn test_retreats_from_oncoming_car() {
        let mut session = Session::new(SimConfig::default(), Squeeze).unwrap();
        session.start();
        session.command(Command::Forward);
        assert_eq!(Autopilot::default().suggest(&session), Some(Command::Backward));
    }

    #[test]
    fn test_drives_past_roadblock() {
        let mut session = Session::new(SimConfig::default(), Roadblock).unwrap();
        session.start();
        let pilot = Autopilot::default();

        for _ in 0..50 {
            if let Some(cmd) = pilot.suggest(&session) {
                session.command(cmd);
            }
            assert_ne!(tick(&mut session), TickOutcome::Collided);
        }
        assert!(session.score() >= 10);
        assert_eq!(session.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_seeded_demo_makes_progress() {
        let mut session = Session::seeded(2024);
        session.start();
        let pilot = Autopilot::default();

        for frame in 0..3000 {
            if frame % 4 == 0 {
                if let Some(cmd) = pilot.suggest(&session) {
                    session.command(cmd);
                }
            }
            if tick(&mut session) == TickOutcome::Collided {
                break;
            }
        }
        assert!(session.score() > 0);
    }
}
