//! Fixed-length epoch clock for hosts without an epochs module of their own.

use cosmwasm_std::Timestamp;
use incentives_std::keepers::EpochKeeper;

use crate::{contract::IncentivesResult, error::IncentivesError};

/// Epochs of `duration_secs` counted from `genesis`. The first epoch is number 1.
///
/// The boundary of an epoch is reached for every gauge as soon as the epoch starts, so a gauge is
/// due once per epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalEpochs {
    genesis: Timestamp,
    duration_secs: u64,
}

impl IntervalEpochs {
    pub fn new(genesis: Timestamp, duration_secs: u64) -> IncentivesResult<Self> {
        if duration_secs == 0 {
            return Err(IncentivesError::InvalidConfig(
                "epoch duration must be larger than zero".to_owned(),
            ));
        }
        Ok(Self {
            genesis,
            duration_secs,
        })
    }

    /// Daily epochs.
    pub fn daily(genesis: Timestamp) -> Self {
        Self {
            genesis,
            duration_secs: 86_400,
        }
    }

    /// Start time of epoch `epoch`.
    pub fn epoch_start(&self, epoch: u64) -> Timestamp {
        self.genesis
            .plus_seconds(epoch.saturating_sub(1).saturating_mul(self.duration_secs))
    }
}

impl EpochKeeper for IntervalEpochs {
    fn current_epoch(&self, now: Timestamp) -> u64 {
        if now < self.genesis {
            return 0;
        }
        (now.seconds() - self.genesis.seconds()) / self.duration_secs + 1
    }

    fn epoch_boundary_reached(&self, _gauge_id: u64, now: Timestamp) -> bool {
        now >= self.genesis
    }
}
