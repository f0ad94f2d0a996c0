use thiserror::Error;

/// Errors produced while validating user supplied gauge parameters or engine configuration.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("distribution condition must name a denom")]
    EmptyDenom,

    #[error("a non-perpetual gauge must be paid over at least one epoch")]
    ZeroEpochs,

    #[error("denom {0} is listed more than once")]
    DuplicateDenom(String),

    #[error("coin {0} has a zero amount")]
    ZeroAmount(String),

    #[error("no coins provided")]
    NoCoins,

    #[error("fee denom must not be empty")]
    EmptyFeeDenom,

    #[error("fee collector and gauge escrow must be different accounts")]
    SharedModuleAccount,
}
