use cosmwasm_std::{Addr, StdError, Uint128};
use incentives_std::{
    keepers::{KeeperError, KeeperResult, LockupKeeper},
    objects::{QualifyingLock, QueryCondition},
};

/// A lock held by the mock lockup module.
#[derive(Debug, Clone, PartialEq)]
pub struct MockLock {
    pub owner: Addr,
    pub denom: String,
    pub amount: Uint128,
    /// Lock duration in seconds.
    pub duration: u64,
}

/// In-memory lockup module. Locks are enumerated in insertion order.
#[derive(Debug, Default, Clone)]
pub struct MockLockup {
    locks: Vec<MockLock>,
    unavailable: bool,
}

impl MockLockup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock(
        &mut self,
        owner: &Addr,
        denom: impl Into<String>,
        amount: impl Into<Uint128>,
        duration: u64,
    ) {
        self.locks.push(MockLock {
            owner: owner.clone(),
            denom: denom.into(),
            amount: amount.into(),
            duration,
        });
    }

    /// Remove every lock owned by `owner`.
    pub fn unlock_all(&mut self, owner: &Addr) {
        self.locks.retain(|lock| &lock.owner != owner);
    }

    /// Make lock enumeration fail.
    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }
}

impl LockupKeeper for MockLockup {
    fn locks_matching(&self, condition: &QueryCondition) -> KeeperResult<Vec<QualifyingLock>> {
        if self.unavailable {
            return Err(KeeperError::Std(StdError::generic_err("lockup unavailable")));
        }
        Ok(self
            .locks
            .iter()
            .filter(|lock| lock.denom == condition.denom && lock.duration >= condition.duration)
            .map(|lock| QualifyingLock::new(lock.owner.clone(), lock.amount))
            .collect())
    }
}
