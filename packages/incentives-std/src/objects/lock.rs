use cosmwasm_std::{Addr, Uint128};

/// A lock selected by a gauge's [`QueryCondition`](super::QueryCondition), as reported by the
/// lockup collaborator.
#[cosmwasm_schema::cw_serde]
pub struct QualifyingLock {
    /// Account that receives the lock's share of a distribution.
    pub owner: Addr,
    /// Locked amount of the condition's denom. Used as the lock's distribution weight.
    pub amount: Uint128,
}

impl QualifyingLock {
    pub fn new(owner: Addr, amount: impl Into<Uint128>) -> Self {
        Self {
            owner,
            amount: amount.into(),
        }
    }
}
