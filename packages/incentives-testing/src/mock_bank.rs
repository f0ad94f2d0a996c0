use std::collections::{BTreeMap, BTreeSet};

use cosmwasm_std::{Addr, Coin, Uint128};
use incentives_std::keepers::{BankKeeper, KeeperError, KeeperResult};

/// In-memory bank. Every balance is spendable.
#[derive(Debug, Default, Clone)]
pub struct MockBank {
    balances: BTreeMap<(Addr, String), Uint128>,
    frozen: BTreeSet<Addr>,
    outgoing_frozen: BTreeSet<Addr>,
    transfers: Vec<(Addr, Addr, Vec<Coin>)>,
}

impl MockBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fund(&mut self, account: &Addr, coins: &[Coin]) {
        for coin in coins {
            let balance = self
                .balances
                .entry((account.clone(), coin.denom.clone()))
                .or_default();
            *balance += coin.amount;
        }
    }

    pub fn balance(&self, account: &Addr, denom: &str) -> Uint128 {
        self.balances
            .get(&(account.clone(), denom.to_owned()))
            .copied()
            .unwrap_or_default()
    }

    /// All non-zero balances of `account`, sorted by denom.
    pub fn all_balances(&self, account: &Addr) -> Vec<Coin> {
        self.balances
            .iter()
            .filter(|((owner, _), amount)| owner == account && !amount.is_zero())
            .map(|((_, denom), amount)| Coin::new(*amount, denom))
            .collect()
    }

    /// Make every transfer touching `account` fail.
    pub fn freeze(&mut self, account: &Addr) {
        self.frozen.insert(account.clone());
    }

    /// Make transfers out of `account` fail while it can still receive.
    pub fn freeze_outgoing(&mut self, account: &Addr) {
        self.outgoing_frozen.insert(account.clone());
    }

    pub fn unfreeze(&mut self, account: &Addr) {
        self.frozen.remove(account);
        self.outgoing_frozen.remove(account);
    }

    /// Successful transfers in execution order.
    pub fn transfers(&self) -> &[(Addr, Addr, Vec<Coin>)] {
        &self.transfers
    }
}

impl BankKeeper for MockBank {
    fn spendable_balance(&self, account: &Addr, denom: &str) -> KeeperResult<Uint128> {
        Ok(self.balance(account, denom))
    }

    fn transfer(&mut self, from: &Addr, to: &Addr, coins: &[Coin]) -> KeeperResult<()> {
        let from_frozen = self.frozen.contains(from) || self.outgoing_frozen.contains(from);
        if from_frozen || self.frozen.contains(to) {
            return Err(KeeperError::Std(cosmwasm_std::StdError::generic_err(format!(
                "account {} is frozen",
                if from_frozen { from } else { to }
            ))));
        }
        for coin in coins {
            let available = self.balance(from, &coin.denom);
            if available < coin.amount {
                return Err(KeeperError::InsufficientFunds {
                    denom: coin.denom.clone(),
                    available,
                    required: coin.amount,
                });
            }
        }
        for coin in coins {
            let from_balance = self
                .balances
                .entry((from.clone(), coin.denom.clone()))
                .or_default();
            *from_balance -= coin.amount;
            let to_balance = self
                .balances
                .entry((to.clone(), coin.denom.clone()))
                .or_default();
            *to_balance += coin.amount;
        }
        self.transfers
            .push((from.clone(), to.clone(), coins.to_vec()));
        Ok(())
    }
}
