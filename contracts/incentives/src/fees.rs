//! # Fee-gated funding
//!
//! Charges the fee of a user operation and moves the funded coins into the gauge escrow. Gauge
//! state must only be touched after [`charge_fee_and_fund`] returned successfully.

use cosmwasm_std::{Addr, Coin, Uint128};
use incentives_std::{keepers::BankKeeper, objects::coins, IncentivesConfig};

use crate::{contract::IncentivesResult, error::IncentivesError};

/// Checks that `payer` can spend `fee` on top of `funds`.
///
/// A fee is paid in the fee denom only, so a payer without any fee denom balance is rejected
/// with [`IncentivesError::WrongDenom`]. Funds in other denoms are checked independently.
pub fn check_sufficient_balance<B: BankKeeper>(
    bank: &B,
    config: &IncentivesConfig,
    payer: &Addr,
    fee: Uint128,
    funds: &[Coin],
) -> IncentivesResult<()> {
    if !fee.is_zero() && bank.spendable_balance(payer, &config.fee_denom)?.is_zero() {
        return Err(IncentivesError::WrongDenom {
            expected: config.fee_denom.clone(),
        });
    }

    let mut required = funds.to_vec();
    coins::add_coins(&mut required, &[Coin::new(fee, &config.fee_denom)])?;
    for coin in required {
        let available = bank.spendable_balance(payer, &coin.denom)?;
        if available < coin.amount {
            return Err(IncentivesError::InsufficientFunds {
                denom: coin.denom,
                available,
                required: coin.amount,
            });
        }
    }
    Ok(())
}

/// Sends `fee` to the fee collector and `funds` to the gauge escrow.
///
/// Balances are checked up front. When the funding transfer fails after the fee was taken, the
/// fee is returned to the payer, and a failed return is [`IncentivesError::CompensationFailed`].
/// Returns the fee that was charged, if any.
pub fn charge_fee_and_fund<B: BankKeeper>(
    bank: &mut B,
    config: &IncentivesConfig,
    payer: &Addr,
    fee: Uint128,
    funds: &[Coin],
) -> IncentivesResult<Option<Coin>> {
    check_sufficient_balance(bank, config, payer, fee, funds)?;

    let fee = (!fee.is_zero()).then(|| Coin::new(fee, &config.fee_denom));
    if let Some(fee) = &fee {
        bank.transfer(payer, &config.fee_collector, std::slice::from_ref(fee))?;
    }

    if funds.is_empty() {
        return Ok(fee);
    }
    if let Err(err) = bank.transfer(payer, &config.gauge_escrow, funds) {
        if let Some(fee) = &fee {
            let fee = std::slice::from_ref(fee);
            bank.transfer(&config.fee_collector, payer, fee).map_err(|refund_err| {
                IncentivesError::compensation_failed(&config.fee_collector, payer, fee, refund_err)
            })?;
        }
        return Err(err.into());
    }
    Ok(fee)
}
