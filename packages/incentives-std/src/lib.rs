//! # Incentives Standard
//!
//! `incentives_std` contains the objects that make up a gauge, the interfaces the incentives
//! engine uses to talk to the rest of the ledger, and the message types a host uses to drive it.
//!
//! ## Gauges
//! A [`Gauge`](crate::objects::Gauge) is a funded reward pool that pays out to accounts holding
//! locks that match its [`QueryCondition`](crate::objects::QueryCondition).
//! Gauges move from `Upcoming` to `Active` once their start time is reached and, unless they are
//! perpetual, to `Finished` after their last epoch has been paid.
//!
//! ## Keepers
//! The engine never moves balances or enumerates locks itself. It consumes those capabilities
//! through the traits in [`keepers`], which hosts implement with their own bank, lockup and epoch
//! modules.

pub mod config;
pub mod keepers;
pub mod msg;
pub mod objects;

pub use config::IncentivesConfig;

/// Name under which the engine reports its events.
pub const INCENTIVES: &str = "osmosis:incentives";
