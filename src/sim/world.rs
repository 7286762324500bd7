//! Ordered, append-only lane sequence

use super::config::SimConfig;
use super::lane::{Lane, LaneGenerator};

/// All lanes generated in the current session
///
/// Indices are contiguous from 0 and equal to insertion order.
#[derive(Debug, Clone, Default)]
pub struct World {
    lanes: Vec<Lane>,
}

impl World {
    /// Empty world, nothing generated yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard every lane and build a fresh window starting at index 0
    pub fn reset(&mut self, generator: &mut impl LaneGenerator, config: &SimConfig) {
        self.lanes.clear();
        for _ in 0..config.initial_lanes.max(1) {
            self.extend(generator, config);
        }
        log::debug!("World reset with {} lanes", self.lanes.len());
    }

    /// Generate the lane just past the frontier and return its index
    pub fn extend(&mut self, generator: &mut impl LaneGenerator, config: &SimConfig) -> u32 {
        let index = self.lanes.len() as u32;
        let mut lane = generator.generate(index, config);
        assert_eq!(
            lane.index, index,
            "lane generator returned index {} for slot {}",
            lane.index, index
        );
        if index == 0 && lane.is_hazard() {
            log::warn!("Generator produced a hazard at lane 0, forcing safe");
            lane = Lane::safe(0, config);
        }
        log::trace!("Lane {} generated: {:?}", index, lane.kind);
        self.lanes.push(lane);
        index
    }

    /// Highest generated index, `None` before the first reset
    pub fn frontier(&self) -> Option<u32> {
        self.lanes.len().checked_sub(1).map(|i| i as u32)
    }

    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    pub fn lane(&self, index: u32) -> Option<&Lane> {
        self.lanes.get(index as usize)
    }

    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    pub(crate) fn lanes_mut(&mut self) -> &mut [Lane] {
        &mut self.lanes
    }
}
