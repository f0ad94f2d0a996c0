//! # Coin helpers
//! Gauges store their balances as a `Vec<Coin>` kept sorted by denom with at most one entry per
//! denom. These helpers keep that canonical form intact.

use std::collections::BTreeSet;

use cosmwasm_std::{Coin, StdResult, Uint128};

use super::validation::ValidationError;

/// Amount of `denom` in `coins`, zero if absent.
pub fn amount_of(coins: &[Coin], denom: &str) -> Uint128 {
    coins
        .iter()
        .find(|coin| coin.denom == denom)
        .map(|coin| coin.amount)
        .unwrap_or_default()
}

/// Rejects duplicate denoms and zero amounts.
pub fn validate_coins(coins: &[Coin]) -> Result<(), ValidationError> {
    let mut seen = BTreeSet::new();
    for coin in coins {
        if coin.amount.is_zero() {
            return Err(ValidationError::ZeroAmount(coin.denom.clone()));
        }
        if !seen.insert(coin.denom.as_str()) {
            return Err(ValidationError::DuplicateDenom(coin.denom.clone()));
        }
    }
    Ok(())
}

/// Sorted copy of `coins` without zero entries.
pub fn normalize(coins: &[Coin]) -> Vec<Coin> {
    let mut coins: Vec<Coin> = coins
        .iter()
        .filter(|coin| !coin.amount.is_zero())
        .cloned()
        .collect();
    coins.sort_by(|a, b| a.denom.cmp(&b.denom));
    coins
}

/// Adds `other` into `coins`, merging denoms that are already present.
pub fn add_coins(coins: &mut Vec<Coin>, other: &[Coin]) -> StdResult<()> {
    for coin in other.iter().filter(|coin| !coin.amount.is_zero()) {
        match coins.iter_mut().find(|c| c.denom == coin.denom) {
            Some(existing) => existing.amount = existing.amount.checked_add(coin.amount)?,
            None => coins.push(coin.clone()),
        }
    }
    coins.sort_by(|a, b| a.denom.cmp(&b.denom));
    Ok(())
}

/// `minuend - subtrahend` per denom, failing if any denom would go negative.
pub fn sub_coins(minuend: &[Coin], subtrahend: &[Coin]) -> StdResult<Vec<Coin>> {
    let mut result = normalize(minuend);
    for coin in subtrahend.iter().filter(|coin| !coin.amount.is_zero()) {
        let left = amount_of(&result, &coin.denom).checked_sub(coin.amount)?;
        if let Some(existing) = result.iter_mut().find(|c| c.denom == coin.denom) {
            existing.amount = left;
        }
    }
    Ok(normalize(&result))
}

/// Human readable list, e.g. `100uosmo,5uion`.
pub fn coins_to_string(coins: &[Coin]) -> String {
    coins
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
