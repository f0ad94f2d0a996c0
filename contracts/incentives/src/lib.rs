//! # Incentives
//!
//! The incentive distribution engine. It owns the gauge records and their reference index, and
//! drives every gauge through `Upcoming -> Active -> Finished` as the host calls
//! [`Incentives::advance`] once per block.
//!
//! User operations (creating gauges and adding rewards) go through the fee-gated layer in
//! [`fees`], which debits the fee and the funded coins before any gauge state is touched.

pub mod commands;
pub mod contract;
pub mod distribution;
pub mod epochs;
pub mod error;
pub mod fees;
pub mod gauge;
pub mod queries;
pub mod refs;
pub mod state;

pub use commands::AdvanceSummary;
pub use contract::{Incentives, IncentivesResponse, IncentivesResult};
pub use error::IncentivesError;
