use cosmwasm_std::{
    Addr, Coin, ConversionOverflowError, DivideByZeroError, OverflowError, StdError, Uint128,
};
use incentives_std::{
    keepers::KeeperError,
    objects::{coins::coins_to_string, ValidationError},
};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum IncentivesError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error(transparent)]
    Overflow(#[from] OverflowError),

    #[error(transparent)]
    ConversionOverflow(#[from] ConversionOverflowError),

    #[error(transparent)]
    DivideByZero(#[from] DivideByZeroError),

    #[error("keeper failed: {0}")]
    Keeper(StdError),

    #[error("invalid gauge: {0}")]
    InvalidGauge(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("gauge {0} does not exist")]
    GaugeNotFound(u64),

    #[error("gauge {0} has finished distributing and can not receive rewards")]
    GaugeFinished(u64),

    #[error("insufficient funds: {available}{denom} is smaller than {required}{denom}")]
    InsufficientFunds {
        denom: String,
        available: Uint128,
        required: Uint128,
    },

    #[error("fees must be paid in {expected}")]
    WrongDenom { expected: String },

    #[error("gauge {gauge_id} is not referenced in {bucket}")]
    IndexCorruption { gauge_id: u64, bucket: String },

    /// An earlier transfer could not be undone, so balances no longer match the gauge records.
    #[error("could not return {coins} from {from} to {to}: {reason}")]
    CompensationFailed {
        from: Addr,
        to: Addr,
        coins: String,
        reason: String,
    },
}

impl IncentivesError {
    pub(crate) fn compensation_failed(
        from: &Addr,
        to: &Addr,
        coins: &[Coin],
        err: KeeperError,
    ) -> Self {
        IncentivesError::CompensationFailed {
            from: from.clone(),
            to: to.clone(),
            coins: coins_to_string(coins),
            reason: err.to_string(),
        }
    }

    /// Failures caused by a collaborator while distributing a single gauge.
    /// `advance` records these and moves on to the next gauge. A failed compensation is never
    /// isolated and aborts the whole call.
    pub fn is_isolated(&self) -> bool {
        matches!(
            self,
            IncentivesError::Keeper(_) | IncentivesError::InsufficientFunds { .. }
        )
    }
}

impl From<KeeperError> for IncentivesError {
    fn from(err: KeeperError) -> Self {
        match err {
            KeeperError::Std(err) => IncentivesError::Keeper(err),
            KeeperError::InsufficientFunds {
                denom,
                available,
                required,
            } => IncentivesError::InsufficientFunds {
                denom,
                available,
                required,
            },
        }
    }
}

impl From<ValidationError> for IncentivesError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyFeeDenom | ValidationError::SharedModuleAccount => {
                IncentivesError::InvalidConfig(err.to_string())
            }
            _ => IncentivesError::InvalidGauge(err.to_string()),
        }
    }
}

impl From<IncentivesError> for StdError {
    fn from(err: IncentivesError) -> Self {
        match err {
            IncentivesError::Std(err) => err,
            err => StdError::generic_err(err.to_string()),
        }
    }
}
