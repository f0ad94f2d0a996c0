//! # Keepers
//! Narrow interfaces to the ledger modules the incentives engine depends on.
//!
//! Hosts inject concrete implementations backed by their bank, lockup and epochs modules. Tests
//! use the in-memory doubles from `incentives-testing`.

use cosmwasm_std::{Addr, Coin, StdError, Timestamp, Uint128};
use thiserror::Error;

use crate::objects::{QualifyingLock, QueryCondition};

#[derive(Error, Debug, PartialEq)]
pub enum KeeperError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error("insufficient funds: {available}{denom} is smaller than {required}{denom}")]
    InsufficientFunds {
        denom: String,
        available: Uint128,
        required: Uint128,
    },
}

pub type KeeperResult<T> = Result<T, KeeperError>;

/// Balance queries and transfers.
pub trait BankKeeper {
    /// Balance of `denom` that `account` can currently spend.
    fn spendable_balance(&self, account: &Addr, denom: &str) -> KeeperResult<Uint128>;

    /// Move `coins` from `from` to `to`. Either all coins move or none do.
    fn transfer(&mut self, from: &Addr, to: &Addr, coins: &[Coin]) -> KeeperResult<()>;
}

/// Enumerates the locks that match a gauge's distribution condition.
pub trait LockupKeeper {
    /// Locks matching `condition`, computed fresh on every call.
    fn locks_matching(&self, condition: &QueryCondition) -> KeeperResult<Vec<QualifyingLock>>;
}

/// The ledger's epoch clock.
pub trait EpochKeeper {
    /// Number of the epoch `now` falls in. Used to pay a gauge at most once per epoch.
    fn current_epoch(&self, now: Timestamp) -> u64;

    /// Whether the gauge has reached an epoch boundary at `now` and is due for a distribution.
    fn epoch_boundary_reached(&self, gauge_id: u64, now: Timestamp) -> bool;
}
