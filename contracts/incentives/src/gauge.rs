//! # Gauge lifecycle
//!
//! Creation, funding and the phase transitions of gauge records. Every function keeps the gauge
//! record and its reference bucket consistent before returning.

use cosmwasm_std::{Addr, Coin, StdResult, Storage, Timestamp};
use incentives_std::objects::{coins, Gauge, QueryCondition, ValidationError};

use crate::{
    contract::IncentivesResult,
    error::IncentivesError,
    refs::{self, RefBucket},
    state::{GAUGES, NEXT_GAUGE_ID},
};

/// Parameters of a gauge that is about to be created.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeParams {
    pub is_perpetual: bool,
    pub distribute_to: QueryCondition,
    pub coins: Vec<Coin>,
    pub start_time: Timestamp,
    pub num_epochs_paid_over: u64,
}

impl GaugeParams {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.distribute_to.validate()?;
        if !self.is_perpetual && self.num_epochs_paid_over == 0 {
            return Err(ValidationError::ZeroEpochs);
        }
        coins::validate_coins(&self.coins)
    }

    /// Epoch count that gets stored. Perpetual gauges always store 1.
    fn stored_num_epochs(&self) -> u64 {
        if self.is_perpetual {
            1
        } else {
            self.num_epochs_paid_over
        }
    }
}

/// Validates the rewards of an `AddToGauge` call.
pub fn validate_rewards(rewards: &[Coin]) -> Result<(), ValidationError> {
    if rewards.is_empty() {
        return Err(ValidationError::NoCoins);
    }
    coins::validate_coins(rewards)
}

pub fn load_gauge(storage: &dyn Storage, id: u64) -> IncentivesResult<Gauge> {
    GAUGES
        .may_load(storage, id)?
        .ok_or(IncentivesError::GaugeNotFound(id))
}

fn next_gauge_id(storage: &mut dyn Storage) -> StdResult<u64> {
    let id = NEXT_GAUGE_ID.may_load(storage)?.unwrap_or(1);
    NEXT_GAUGE_ID.save(storage, &(id + 1))?;
    Ok(id)
}

/// Persists a new gauge and references it in the upcoming bucket when it starts strictly after
/// `now`, in the active bucket otherwise.
pub fn create_gauge(
    storage: &mut dyn Storage,
    now: Timestamp,
    owner: Addr,
    params: GaugeParams,
) -> IncentivesResult<Gauge> {
    params.validate()?;

    let gauge = Gauge {
        id: next_gauge_id(storage)?,
        owner,
        is_perpetual: params.is_perpetual,
        num_epochs_paid_over: params.stored_num_epochs(),
        distribute_to: params.distribute_to,
        coins: coins::normalize(&params.coins),
        start_time: params.start_time,
        filled_epochs: 0,
        distributed_coins: vec![],
    };
    GAUGES.save(storage, gauge.id, &gauge)?;

    let bucket = if gauge.is_upcoming(now) {
        RefBucket::upcoming(&gauge)
    } else {
        RefBucket::active(&gauge)
    };
    refs::add_gauge_ref(storage, &bucket, gauge.id)?;

    Ok(gauge)
}

/// Fails with [`IncentivesError::GaugeFinished`] for gauges that can not take more rewards.
pub fn assert_accepts_rewards(gauge: &Gauge) -> IncentivesResult<()> {
    if gauge.is_finished() {
        return Err(IncentivesError::GaugeFinished(gauge.id));
    }
    Ok(())
}

/// Adds `rewards` to the gauge's funded coins. Phase and index membership do not change.
pub fn add_to_gauge_rewards(
    storage: &mut dyn Storage,
    gauge_id: u64,
    rewards: &[Coin],
) -> IncentivesResult<Gauge> {
    validate_rewards(rewards)?;
    let mut gauge = load_gauge(storage, gauge_id)?;
    assert_accepts_rewards(&gauge)?;

    coins::add_coins(&mut gauge.coins, rewards)?;
    GAUGES.save(storage, gauge.id, &gauge)?;
    Ok(gauge)
}

/// Moves every upcoming gauge whose start time is at or before `now` to the active bucket.
/// Returns the activated ids in sweep order.
pub fn activate_upcoming_gauges(
    storage: &mut dyn Storage,
    now: Timestamp,
) -> IncentivesResult<Vec<u64>> {
    let mut activated = vec![];
    for id in refs::upcoming_gauge_ids_until(storage, now)? {
        let gauge = GAUGES
            .may_load(storage, id)?
            .ok_or_else(|| IncentivesError::IndexCorruption {
                gauge_id: id,
                bucket: "ref:upcoming".to_owned(),
            })?;
        // the bucket may round below the exact start time
        if gauge.is_upcoming(now) {
            continue;
        }
        refs::move_upcoming_to_active(storage, &gauge)?;
        activated.push(id);
    }
    Ok(activated)
}

/// Moves a gauge that filled its last epoch from the active to the finished bucket.
pub fn finish_gauge(storage: &mut dyn Storage, gauge: &Gauge) -> IncentivesResult<()> {
    if !gauge.is_finished() {
        return Err(IncentivesError::InvalidGauge(format!(
            "gauge {} still has epochs to fill",
            gauge.id
        )));
    }
    refs::move_active_to_finished(storage, gauge)
}
