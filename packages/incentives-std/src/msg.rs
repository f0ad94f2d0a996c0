//! # Incentives messages
//!
//! [`ExecuteMsg`] covers the two user operations, both of which are fee-gated.
//! [`QueryMsg`] covers the read side. Block-by-block advancement is not a message: the host calls
//! the engine's `advance` directly once per block.

use cosmwasm_schema::QueryResponses;
use cosmwasm_std::{Coin, Timestamp};

use crate::{
    config::IncentivesConfig,
    objects::{Gauge, GaugePhase, QueryCondition},
};

#[cosmwasm_schema::cw_serde]
pub enum ExecuteMsg {
    /// Create a new gauge funded by the sender.
    CreateGauge {
        is_perpetual: bool,
        distribute_to: QueryCondition,
        coins: Vec<Coin>,
        /// Defaults to the current block time.
        start_time: Option<Timestamp>,
        /// Ignored for perpetual gauges.
        num_epochs_paid_over: u64,
    },
    /// Add rewards to an existing gauge that has not finished.
    AddToGauge { gauge_id: u64, rewards: Vec<Coin> },
}

#[cosmwasm_schema::cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns [`IncentivesConfig`]
    #[returns(IncentivesConfig)]
    Config {},
    /// Returns [`GaugeResponse`]
    #[returns(GaugeResponse)]
    GaugeById { id: u64 },
    /// Derived phase of a gauge at the current block time.
    /// Returns [`GaugePhaseResponse`]
    #[returns(GaugePhaseResponse)]
    GaugePhaseById { id: u64 },
    /// Active and finished gauges distributing to `denom`.
    /// Returns [`GaugesResponse`]
    #[returns(GaugesResponse)]
    GaugesByDenom { denom: String },
    /// Upcoming gauges starting at or before `time`.
    /// Returns [`GaugesResponse`]
    #[returns(GaugesResponse)]
    UpcomingGaugesBefore { time: Timestamp },
    /// All gauges, paged by id.
    /// Returns [`GaugesResponse`]
    #[returns(GaugesResponse)]
    Gauges {
        start_after: Option<u64>,
        limit: Option<u8>,
    },
    /// Returns [`GaugesResponse`]
    #[returns(GaugesResponse)]
    ActiveGauges {},
    /// Returns [`GaugesResponse`]
    #[returns(GaugesResponse)]
    ActiveGaugesPerDenom { denom: String },
    /// Returns [`GaugesResponse`]
    #[returns(GaugesResponse)]
    UpcomingGauges {},
    /// Returns [`GaugesResponse`]
    #[returns(GaugesResponse)]
    FinishedGauges {},
    /// Coins still held for upcoming and active gauges.
    /// Returns [`CoinsResponse`]
    #[returns(CoinsResponse)]
    ModuleToDistributeCoins {},
    /// Coins paid out by all gauges so far.
    /// Returns [`CoinsResponse`]
    #[returns(CoinsResponse)]
    ModuleDistributedCoins {},
}

#[cosmwasm_schema::cw_serde]
pub struct CreateGaugeResponse {
    pub gauge_id: u64,
}

#[cosmwasm_schema::cw_serde]
pub struct GaugeResponse {
    pub gauge: Gauge,
}

#[cosmwasm_schema::cw_serde]
pub struct GaugePhaseResponse {
    pub id: u64,
    pub phase: GaugePhase,
}

#[cosmwasm_schema::cw_serde]
pub struct GaugesResponse {
    pub gauges: Vec<Gauge>,
}

#[cosmwasm_schema::cw_serde]
pub struct CoinsResponse {
    pub coins: Vec<Coin>,
}
