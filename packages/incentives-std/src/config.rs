use cosmwasm_std::{Addr, Uint128};

use crate::objects::ValidationError;

/// Default denom fees are charged in.
pub const DEFAULT_FEE_DENOM: &str = "uosmo";
/// Fee charged for creating a gauge.
pub const CREATE_GAUGE_FEE: u128 = 50_000_000;
/// Fee charged for adding rewards to an existing gauge.
pub const ADD_TO_GAUGE_FEE: u128 = 25_000_000;

/// Fee and module account configuration of the engine.
#[cosmwasm_schema::cw_serde]
pub struct IncentivesConfig {
    pub fee_denom: String,
    pub create_gauge_fee: Uint128,
    pub add_to_gauge_fee: Uint128,
    /// Module account that receives the fees.
    pub fee_collector: Addr,
    /// Module account that holds gauge funds and pays out distributions.
    pub gauge_escrow: Addr,
}

impl IncentivesConfig {
    /// Config with the default fee denom and fee amounts.
    pub fn new(fee_collector: Addr, gauge_escrow: Addr) -> Self {
        Self {
            fee_denom: DEFAULT_FEE_DENOM.to_owned(),
            create_gauge_fee: Uint128::new(CREATE_GAUGE_FEE),
            add_to_gauge_fee: Uint128::new(ADD_TO_GAUGE_FEE),
            fee_collector,
            gauge_escrow,
        }
    }

    pub fn with_fee_denom(mut self, fee_denom: impl Into<String>) -> Self {
        self.fee_denom = fee_denom.into();
        self
    }

    pub fn with_fees(mut self, create_gauge_fee: Uint128, add_to_gauge_fee: Uint128) -> Self {
        self.create_gauge_fee = create_gauge_fee;
        self.add_to_gauge_fee = add_to_gauge_fee;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.fee_denom.trim().is_empty() {
            return Err(ValidationError::EmptyFeeDenom);
        }
        if self.fee_collector == self.gauge_escrow {
            return Err(ValidationError::SharedModuleAccount);
        }
        Ok(())
    }
}
