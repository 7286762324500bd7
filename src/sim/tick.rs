//! Per-frame simulation tick
//!
//! One tick moves every obstacle, then checks the player against traffic.
//! Advancement always happens before the collision check.

use super::collision::check_collision;
use super::config::SimConfig;
use super::lane::LaneGenerator;
use super::session::{GamePhase, Session};
use super::world::World;

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Session not playing, nothing simulated
    Idle,
    /// Traffic moved, player survived
    Advanced,
    /// Traffic moved and hit the player; the run is over
    Collided,
}

/// Move every obstacle in every hazard lane by one tick
///
/// All lanes advance regardless of distance to the player so obstacle
/// positions never depend on where the player has been.
pub fn advance_world(world: &mut World, config: &SimConfig) {
    let bound = config.road_half_width;
    for lane in world.lanes_mut().iter_mut().filter(|l| l.is_hazard()) {
        for obstacle in &mut lane.obstacles {
            obstacle.advance(bound);
        }
    }
}

/// Advance the session by one tick
pub fn tick<G: LaneGenerator>(session: &mut Session<G>) -> TickOutcome {
    if session.phase != GamePhase::Playing {
        return TickOutcome::Idle;
    }

    session.time_ticks += 1;
    advance_world(&mut session.world, &session.config);

    if check_collision(&session.player, &session.world, &session.config) {
        session.end_run();
        return TickOutcome::Collided;
    }

    TickOutcome::Advanced
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::lane::Lane;
    use crate::sim::session::{Command, GameEvent};

    /// Lane 1: static car at x = 0. Lane 2: car at x = -5 heading right at 0.5/tick.
    struct Crossing;

    impl LaneGenerator for Crossing {
        fn generate(&mut self, index: u32, config: &SimConfig) -> Lane {
            match index {
                1 => Lane::hazard(index, config, &[(0.0, 0.0)]),
                2 => Lane::hazard(index, config, &[(-5.0, 0.5)]),
                _ => Lane::safe(index, config),
            }
        }
    }

    fn session() -> Session<Crossing> {
        let mut session = Session::new(SimConfig::default(), Crossing).unwrap();
        session.start();
        session.drain_events();
        session
    }

    #[test]
    fn test_idle_before_start() {
        let mut session = Session::new(SimConfig::default(), Crossing).unwrap();
        assert_eq!(tick(&mut session), TickOutcome::Idle);
        assert_eq!(session.time_ticks(), 0);
    }

    #[test]
    fn test_safe_tile_survives() {
        let mut session = session();
        for _ in 0..100 {
            assert_eq!(tick(&mut session), TickOutcome::Advanced);
        }
        assert_eq!(session.phase(), GamePhase::Playing);
        assert_eq!(session.time_ticks(), 100);
    }

    #[test]
    fn test_stepping_onto_car_ends_run() {
        let mut session = session();
        session.command(Command::Forward);
        assert_eq!(tick(&mut session), TickOutcome::Collided);
        assert_eq!(session.phase(), GamePhase::GameOver);
        assert_eq!(
            session.drain_events(),
            vec![
                GameEvent::ScoreChanged { score: 1 },
                GameEvent::Collided { lane: 1 },
                GameEvent::GameOver { score: 1 },
            ]
        );
    }

    #[test]
    fn test_no_ticks_after_game_over() {
        let mut session = session();
        session.command(Command::Forward);
        tick(&mut session);
        let ticks = session.time_ticks();
        let car_x = session.world().lane(2).unwrap().obstacles[0].pos.x;

        for _ in 0..10 {
            assert_eq!(tick(&mut session), TickOutcome::Idle);
        }
        assert_eq!(session.time_ticks(), ticks);
        assert_eq!(session.world().lane(2).unwrap().obstacles[0].pos.x, car_x);
    }

    #[test]
    fn test_moving_car_hits_waiting_player() {
        let mut session = session();
        // Sidestep around the static car, then wait on lane 2 at x = 3
        for _ in 0..3 {
            session.command(Command::Right);
        }
        session.command(Command::Forward);
        session.command(Command::Forward);
        assert_eq!(session.player().lane_index, 2);

        // Car right edge starts at -4, player left edge is 2.5: contact on the 13th tick
        let mut ticks = 0;
        while tick(&mut session) == TickOutcome::Advanced {
            ticks += 1;
            assert!(ticks < 100, "car never arrived");
        }
        assert_eq!(ticks, 12);
        assert_eq!(session.phase(), GamePhase::GameOver);
    }

    #[test]
    fn test_advance_precedes_collision_check() {
        let mut session = session();
        for _ in 0..3 {
            session.command(Command::Right);
        }
        session.command(Command::Forward);
        session.command(Command::Forward);
        // Put the car one step short of touching; the same tick must move it and detect the hit
        session.world.lanes_mut()[2].obstacles[0].pos.x = 1.0;
        assert_eq!(tick(&mut session), TickOutcome::Collided);
    }

    #[test]
    fn test_advance_world_wraps_traffic() {
        let config = SimConfig::default();
        let mut world = World::new();
        world.reset(&mut Crossing, &config);
        world.lanes_mut()[2].obstacles[0].pos.x = 14.8;

        advance_world(&mut world, &config);
        let car = &world.lane(2).unwrap().obstacles[0];
        assert_eq!(car.pos.x, -15.0);
        assert_eq!(car.vel_x, 0.5);
    }
}
