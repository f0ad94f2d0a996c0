use cosmwasm_std::{Coin, Order, StdResult, Storage, Timestamp};
use cw_storage_plus::Bound;
use incentives_std::{
    msg::{CoinsResponse, GaugePhaseResponse, GaugeResponse, GaugesResponse},
    objects::{coins, Gauge},
};

use crate::{contract::IncentivesResult, gauge::load_gauge, refs, state::GAUGES};

const DEFAULT_LIMIT: u8 = 10;
const MAX_LIMIT: u8 = 20;

fn load_gauges(storage: &dyn Storage, ids: Vec<u64>) -> IncentivesResult<Vec<Gauge>> {
    ids.into_iter().map(|id| load_gauge(storage, id)).collect()
}

pub fn query_gauge(storage: &dyn Storage, id: u64) -> IncentivesResult<GaugeResponse> {
    Ok(GaugeResponse {
        gauge: load_gauge(storage, id)?,
    })
}

/// Phase the gauge is indexed under. A gauge past its start time stays upcoming until the next
/// `advance`.
pub fn query_gauge_phase(storage: &dyn Storage, id: u64) -> IncentivesResult<GaugePhaseResponse> {
    let gauge = load_gauge(storage, id)?;
    Ok(GaugePhaseResponse {
        id,
        phase: refs::indexed_phase(storage, &gauge)?,
    })
}

/// Active and finished gauges for `denom`, ascending by id.
pub fn query_gauges_by_denom(storage: &dyn Storage, denom: &str) -> IncentivesResult<GaugesResponse> {
    let ids = refs::all_gauge_ids_by_denom(storage, denom)?;
    Ok(GaugesResponse {
        gauges: load_gauges(storage, ids)?,
    })
}

/// Upcoming gauges with a start time at or before `time`, earliest first.
pub fn query_upcoming_gauges_before(
    storage: &dyn Storage,
    time: Timestamp,
) -> IncentivesResult<GaugesResponse> {
    let ids = refs::upcoming_gauge_ids_until(storage, time)?;
    let mut gauges = load_gauges(storage, ids)?;
    gauges.retain(|gauge| gauge.start_time <= time);
    Ok(GaugesResponse { gauges })
}

pub fn query_gauges(
    storage: &dyn Storage,
    start_after: Option<u64>,
    limit: Option<u8>,
) -> IncentivesResult<GaugesResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_bound = start_after.map(Bound::exclusive);

    let gauges = GAUGES
        .range(storage, start_bound, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, gauge)| gauge))
        .collect::<StdResult<Vec<_>>>()?;
    Ok(GaugesResponse { gauges })
}

pub fn query_active_gauges(storage: &dyn Storage) -> IncentivesResult<GaugesResponse> {
    let ids = refs::active_gauge_ids(storage)?;
    Ok(GaugesResponse {
        gauges: load_gauges(storage, ids)?,
    })
}

pub fn query_active_gauges_per_denom(
    storage: &dyn Storage,
    denom: &str,
) -> IncentivesResult<GaugesResponse> {
    let ids = refs::active_gauge_ids_by_denom(storage, denom)?;
    Ok(GaugesResponse {
        gauges: load_gauges(storage, ids)?,
    })
}

pub fn query_upcoming_gauges(storage: &dyn Storage) -> IncentivesResult<GaugesResponse> {
    let ids = refs::upcoming_gauge_ids(storage)?;
    Ok(GaugesResponse {
        gauges: load_gauges(storage, ids)?,
    })
}

pub fn query_finished_gauges(storage: &dyn Storage) -> IncentivesResult<GaugesResponse> {
    let ids = refs::finished_gauge_ids(storage)?;
    Ok(GaugesResponse {
        gauges: load_gauges(storage, ids)?,
    })
}

/// Coins that upcoming and active gauges still have to pay out.
pub fn query_module_to_distribute_coins(storage: &dyn Storage) -> IncentivesResult<CoinsResponse> {
    let mut ids = refs::upcoming_gauge_ids(storage)?;
    ids.extend(refs::active_gauge_ids(storage)?);

    let mut total: Vec<Coin> = vec![];
    for gauge in load_gauges(storage, ids)? {
        coins::add_coins(&mut total, &gauge.remaining_coins()?)?;
    }
    Ok(CoinsResponse { coins: total })
}

/// Coins paid out by every gauge so far.
pub fn query_module_distributed_coins(storage: &dyn Storage) -> IncentivesResult<CoinsResponse> {
    let mut total: Vec<Coin> = vec![];
    for item in GAUGES.range(storage, None, None, Order::Ascending) {
        let (_, gauge) = item?;
        coins::add_coins(&mut total, &gauge.distributed_coins)?;
    }
    Ok(CoinsResponse { coins: total })
}
