//! # Distribution
//!
//! Pays one epoch of a gauge to the owners of the locks matching its condition.
//!
//! The epoch amount of every denom is split pro rata over the qualifying lock amounts using the
//! largest remainder method, so the locks always receive exactly the epoch amount between them.
//! A distribution either completes, with every transfer made and the gauge's bookkeeping saved,
//! or leaves balances and the gauge record as they were.

use cosmwasm_std::{Addr, Coin, Storage, Uint128, Uint256};
use incentives_std::{
    keepers::{BankKeeper, LockupKeeper},
    objects::{coins, Gauge, QualifyingLock},
};

use crate::{contract::IncentivesResult, error::IncentivesError, state::GAUGES};

/// Transfers of a single epoch.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionPlan {
    /// Amount the gauge's bookkeeping advances by.
    pub epoch_coins: Vec<Coin>,
    /// Coins per owner, one entry per owner in the order the owner's first lock was enumerated.
    pub payouts: Vec<(Addr, Vec<Coin>)>,
}

impl DistributionPlan {
    /// Sum of all payouts, sorted by denom.
    pub fn total_paid(&self) -> IncentivesResult<Vec<Coin>> {
        let mut total = vec![];
        for (_, coins) in &self.payouts {
            coins::add_coins(&mut total, coins)?;
        }
        Ok(total)
    }
}

/// Amount of every denom the gauge pays in its next epoch.
///
/// Perpetual gauges and gauges in their final epoch pay their whole remaining balance, which
/// flushes any integer division remainder. Other epochs pay `coins / num_epochs_paid_over`.
pub fn epoch_amounts(gauge: &Gauge) -> IncentivesResult<Vec<Coin>> {
    let remaining = gauge.remaining_coins()?;
    if gauge.is_perpetual || gauge.is_last_epoch() {
        return Ok(remaining);
    }

    let mut amounts = vec![];
    for coin in &gauge.coins {
        let nominal = coin.amount.checked_div(Uint128::from(gauge.num_epochs_paid_over))?;
        let amount = nominal.min(coins::amount_of(&remaining, &coin.denom));
        if !amount.is_zero() {
            amounts.push(Coin::new(amount, &coin.denom));
        }
    }
    Ok(coins::normalize(&amounts))
}

/// Splits `amount` over `weights` proportionally.
///
/// Every weight first gets `floor(amount * weight / total)`. The units left over go one each to
/// the weights with the largest fractional remainders, earlier weights first on ties. Returns
/// all zeros when the total weight is zero.
pub fn allocate(amount: Uint128, weights: &[Uint128]) -> IncentivesResult<Vec<Uint128>> {
    let total = weights
        .iter()
        .try_fold(Uint256::zero(), |acc, weight| acc.checked_add((*weight).into()))?;
    if total.is_zero() {
        return Ok(vec![Uint128::zero(); weights.len()]);
    }

    let mut shares = Vec::with_capacity(weights.len());
    let mut remainders = Vec::with_capacity(weights.len());
    let mut allocated = Uint128::zero();
    for (index, weight) in weights.iter().enumerate() {
        let product = amount.full_mul(*weight);
        let share = Uint128::try_from(product.checked_div(total)?)?;
        allocated = allocated.checked_add(share)?;
        shares.push(share);
        remainders.push((product.checked_rem(total)?, index));
    }

    // stable sort keeps enumeration order among equal remainders
    remainders.sort_by(|(a, _), (b, _)| b.cmp(a));
    let leftover = amount.checked_sub(allocated)?.u128();
    for (_, index) in remainders.into_iter().take(leftover as usize) {
        shares[index] += Uint128::one();
    }
    Ok(shares)
}

/// Works out the transfers that pay `epoch_coins` to `locks`.
/// No locks means no transfers while the epoch still counts as paid.
pub fn plan_distribution(
    epoch_coins: Vec<Coin>,
    locks: &[QualifyingLock],
) -> IncentivesResult<DistributionPlan> {
    let mut payouts: Vec<(Addr, Vec<Coin>)> = vec![];
    for lock in locks {
        if !payouts.iter().any(|(owner, _)| *owner == lock.owner) {
            payouts.push((lock.owner.clone(), vec![]));
        }
    }

    let weights: Vec<Uint128> = locks.iter().map(|lock| lock.amount).collect();
    for coin in &epoch_coins {
        let shares = allocate(coin.amount, &weights)?;
        for (lock, share) in locks.iter().zip(shares) {
            if share.is_zero() {
                continue;
            }
            if let Some((_, owed)) = payouts.iter_mut().find(|(owner, _)| *owner == lock.owner) {
                coins::add_coins(owed, &[Coin::new(share, &coin.denom)])?;
            }
        }
    }
    payouts.retain(|(_, owed)| !owed.is_empty());

    Ok(DistributionPlan {
        epoch_coins,
        payouts,
    })
}

/// Pays the gauge's next epoch out of `escrow` and saves the updated gauge.
///
/// The escrow balance is checked before the first transfer. If a transfer still fails, the
/// transfers made so far are sent back to the escrow and the error is returned with the gauge
/// untouched. If sending them back fails too, [`IncentivesError::CompensationFailed`] is returned
/// and the caller must discard the whole state transition.
pub fn distribute<B: BankKeeper, L: LockupKeeper>(
    storage: &mut dyn Storage,
    bank: &mut B,
    lockup: &L,
    escrow: &Addr,
    gauge: &mut Gauge,
) -> IncentivesResult<DistributionPlan> {
    let locks = lockup.locks_matching(&gauge.distribute_to)?;
    let plan = plan_distribution(epoch_amounts(gauge)?, &locks)?;

    for coin in plan.total_paid()? {
        let available = bank.spendable_balance(escrow, &coin.denom)?;
        if available < coin.amount {
            return Err(IncentivesError::InsufficientFunds {
                denom: coin.denom,
                available,
                required: coin.amount,
            });
        }
    }

    for (index, (owner, owed)) in plan.payouts.iter().enumerate() {
        if let Err(err) = bank.transfer(escrow, owner, owed) {
            refund(bank, escrow, &plan.payouts[..index])?;
            return Err(err.into());
        }
    }

    gauge.filled_epochs += 1;
    coins::add_coins(&mut gauge.distributed_coins, &plan.epoch_coins)?;
    GAUGES.save(storage, gauge.id, gauge)?;

    Ok(plan)
}

fn refund<B: BankKeeper>(
    bank: &mut B,
    escrow: &Addr,
    paid: &[(Addr, Vec<Coin>)],
) -> IncentivesResult<()> {
    for (owner, owed) in paid.iter().rev() {
        bank.transfer(owner, escrow, owed)
            .map_err(|err| IncentivesError::compensation_failed(owner, escrow, owed, err))?;
    }
    Ok(())
}
