use std::fmt::{self, Display};

use cosmwasm_std::{Addr, Coin, StdResult, Timestamp};

use super::{coins, query_condition::QueryCondition};

/// Lifecycle phase of a gauge. Derived from `start_time` and `filled_epochs`, never stored.
#[cosmwasm_schema::cw_serde]
#[derive(Copy, Eq)]
pub enum GaugePhase {
    Upcoming,
    Active,
    Finished,
}

impl Display for GaugePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GaugePhase::Upcoming => write!(f, "upcoming"),
            GaugePhase::Active => write!(f, "active"),
            GaugePhase::Finished => write!(f, "finished"),
        }
    }
}

/// A funded, time-scoped reward pool.
#[cosmwasm_schema::cw_serde]
pub struct Gauge {
    /// Unique id, assigned sequentially at creation and never reused.
    pub id: u64,
    /// Account that created the gauge.
    pub owner: Addr,
    /// Perpetual gauges pay out their full remaining balance every epoch and never finish.
    pub is_perpetual: bool,
    /// Locks that qualify for this gauge's payouts.
    pub distribute_to: QueryCondition,
    /// Everything ever funded into the gauge.
    pub coins: Vec<Coin>,
    /// Time at which the gauge becomes eligible to distribute.
    pub start_time: Timestamp,
    /// Number of epochs `coins` is spread over. Always 1 for perpetual gauges.
    pub num_epochs_paid_over: u64,
    /// Number of epochs already paid.
    pub filled_epochs: u64,
    /// Cumulative payouts, per denom never larger than `coins`.
    pub distributed_coins: Vec<Coin>,
}

impl Gauge {
    pub fn is_upcoming(&self, now: Timestamp) -> bool {
        now < self.start_time
    }

    pub fn is_active(&self, now: Timestamp) -> bool {
        !self.is_upcoming(now) && !self.is_finished()
    }

    pub fn is_finished(&self) -> bool {
        !self.is_perpetual && self.filled_epochs >= self.num_epochs_paid_over
    }

    pub fn phase(&self, now: Timestamp) -> GaugePhase {
        if self.is_finished() {
            GaugePhase::Finished
        } else if self.is_upcoming(now) {
            GaugePhase::Upcoming
        } else {
            GaugePhase::Active
        }
    }

    /// Whether the next distribution is the gauge's final one.
    pub fn is_last_epoch(&self) -> bool {
        !self.is_perpetual && self.filled_epochs + 1 >= self.num_epochs_paid_over
    }

    /// Funded coins that have not been paid out yet.
    pub fn remaining_coins(&self) -> StdResult<Vec<Coin>> {
        coins::sub_coins(&self.coins, &self.distributed_coins)
    }
}
