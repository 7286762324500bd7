//! Frame drivers
//!
//! Hosts call [`FrameClock::frame`] once per animation callback. Each call
//! runs exactly one simulation tick, so game speed follows the host's frame
//! rate. [`FrameClock::frame_timed`] is the opt-in alternative that converts
//! elapsed wall time into whole fixed-size ticks. Either way the clock stops
//! asking for frames once the run ends; there is no external cancel.

use super::lane::LaneGenerator;
use super::session::{GamePhase, Session};
use super::tick::{TickOutcome, tick};
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

/// Result of one host frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    /// Ticks simulated during this frame
    pub ticks: u32,
    /// Whether the host should schedule another frame
    pub request_next: bool,
}

impl FrameReport {
    fn idle() -> Self {
        Self {
            ticks: 0,
            request_next: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Unspent wall time, only used by `frame_timed`
    accumulator: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one tick for this host frame
    pub fn frame<G: LaneGenerator>(&mut self, session: &mut Session<G>) -> FrameReport {
        if session.phase() != GamePhase::Playing {
            self.accumulator = 0.0;
            return FrameReport::idle();
        }

        tick(session);
        FrameReport {
            ticks: 1,
            request_next: session.phase() == GamePhase::Playing,
        }
    }

    /// Run as many fixed ticks as `dt` seconds allow
    ///
    /// Short frames may run no tick at all; long ones are clamped to
    /// `MAX_FRAME_DT` and at most `MAX_SUBSTEPS` ticks.
    pub fn frame_timed<G: LaneGenerator>(
        &mut self,
        session: &mut Session<G>,
        dt: f32,
    ) -> FrameReport {
        if session.phase() != GamePhase::Playing {
            self.accumulator = 0.0;
            return FrameReport::idle();
        }

        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut ticks = 0;
        while self.accumulator >= SIM_DT && ticks < MAX_SUBSTEPS {
            let outcome = tick(session);
            self.accumulator -= SIM_DT;
            ticks += 1;

            if outcome == TickOutcome::Collided {
                self.accumulator = 0.0;
                break;
            }
        }

        FrameReport {
            ticks,
            request_next: session.phase() == GamePhase::Playing,
        }
    }
}
