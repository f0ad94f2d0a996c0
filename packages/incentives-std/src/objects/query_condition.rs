use std::fmt::{self, Display};

use super::validation::ValidationError;

/// How a lock is matched against a [`QueryCondition`].
#[cosmwasm_schema::cw_serde]
#[derive(Copy, Eq)]
pub enum LockQueryType {
    /// Locks whose lock duration is at least the condition's duration.
    ByDuration,
    /// Locks that stay locked for at least the condition's duration from now.
    ByTime,
}

impl Display for LockQueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LockQueryType::ByDuration => write!(f, "by_duration"),
            LockQueryType::ByTime => write!(f, "by_time"),
        }
    }
}

/// Selects the locks that qualify for a gauge's payouts.
///
/// Immutable once attached to a gauge. The `denom` and `duration` are also used as components of
/// the gauge reference keys.
#[cosmwasm_schema::cw_serde]
#[derive(Eq)]
pub struct QueryCondition {
    pub lock_query_type: LockQueryType,
    /// Denom of the locked coins.
    pub denom: String,
    /// Minimum lock duration in seconds.
    pub duration: u64,
}

impl QueryCondition {
    pub fn by_duration(denom: impl Into<String>, duration: u64) -> Self {
        Self {
            lock_query_type: LockQueryType::ByDuration,
            denom: denom.into(),
            duration,
        }
    }

    pub fn by_time(denom: impl Into<String>, duration: u64) -> Self {
        Self {
            lock_query_type: LockQueryType::ByTime,
            denom: denom.into(),
            duration,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.denom.trim().is_empty() {
            return Err(ValidationError::EmptyDenom);
        }
        Ok(())
    }
}

impl Display for QueryCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}s", self.lock_query_type, self.denom, self.duration)
    }
}
