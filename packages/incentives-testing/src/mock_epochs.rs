use std::collections::BTreeSet;

use cosmwasm_std::Timestamp;
use incentives_std::keepers::EpochKeeper;

/// Manually driven epoch clock.
///
/// Reports a boundary for every gauge while `boundary_reached` is set, except for gauges that
/// have been explicitly held back.
#[derive(Debug, Default, Clone)]
pub struct MockEpochs {
    epoch: u64,
    boundary_reached: bool,
    held_back: BTreeSet<u64>,
}

impl MockEpochs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to the next epoch and report its boundary.
    pub fn start_next_epoch(&mut self) {
        self.epoch += 1;
        self.boundary_reached = true;
    }

    pub fn end_boundary(&mut self) {
        self.boundary_reached = false;
    }

    pub fn hold_back(&mut self, gauge_id: u64) {
        self.held_back.insert(gauge_id);
    }

    pub fn release(&mut self, gauge_id: u64) {
        self.held_back.remove(&gauge_id);
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

impl EpochKeeper for MockEpochs {
    fn current_epoch(&self, _now: Timestamp) -> u64 {
        self.epoch
    }

    fn epoch_boundary_reached(&self, gauge_id: u64, _now: Timestamp) -> bool {
        self.boundary_reached && !self.held_back.contains(&gauge_id)
    }
}
