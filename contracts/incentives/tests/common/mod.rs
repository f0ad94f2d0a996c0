#![allow(dead_code)]

use cosmwasm_std::{
    from_json,
    testing::{message_info, mock_env, MockApi, MockStorage},
    Addr, Coin, Env, Timestamp,
};
use incentives::{AdvanceSummary, Incentives, IncentivesResult};
use incentives_std::{
    msg::{CreateGaugeResponse, ExecuteMsg, GaugeResponse, QueryMsg},
    objects::{Gauge, QueryCondition},
};
use incentives_testing::prelude::*;

pub type MockIncentives = Incentives<MockBank, MockLockup, MockEpochs>;

/// Engine wired to the mock keepers, with its own store and block clock.
pub struct Harness {
    pub store: MockStorage,
    pub incentives: MockIncentives,
    pub addrs: IncentivesMockAddrs,
    pub env: Env,
}

impl Harness {
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let incentives = Incentives::new(
            mock_config(MockApi::default()),
            MockBank::new(),
            MockLockup::new(),
            MockEpochs::new(),
        )
        .unwrap();
        Self {
            store: MockStorage::new(),
            incentives,
            addrs: IncentivesMockAddrs::new(MockApi::default()),
            env: mock_env(),
        }
    }

    pub fn now(&self) -> Timestamp {
        self.env.block.time
    }

    pub fn fund(&mut self, account: &Addr, coins: &[Coin]) {
        self.incentives.bank_mut().fund(account, coins);
    }

    pub fn balance(&self, account: &Addr, denom: &str) -> u128 {
        self.incentives.bank().balance(account, denom).u128()
    }

    pub fn lock(&mut self, owner: &Addr, amount: u128, duration: u64) {
        self.incentives
            .lockup_mut()
            .lock(owner, TEST_LP_DENOM, amount, duration);
    }

    pub fn create_gauge(
        &mut self,
        payer: &Addr,
        is_perpetual: bool,
        coins: Vec<Coin>,
        start_time: Option<Timestamp>,
        num_epochs_paid_over: u64,
    ) -> IncentivesResult<u64> {
        let res = self.incentives.execute(
            &mut self.store,
            &self.env,
            message_info(payer, &[]),
            ExecuteMsg::CreateGauge {
                is_perpetual,
                distribute_to: QueryCondition::by_duration(TEST_LP_DENOM, TEST_LOCK_DURATION),
                coins,
                start_time,
                num_epochs_paid_over,
            },
        )?;
        let data = res.data.unwrap_or_default();
        let created: CreateGaugeResponse = from_json(data)?;
        Ok(created.gauge_id)
    }

    pub fn add_to_gauge(
        &mut self,
        payer: &Addr,
        gauge_id: u64,
        rewards: Vec<Coin>,
    ) -> IncentivesResult<()> {
        self.incentives.execute(
            &mut self.store,
            &self.env,
            message_info(payer, &[]),
            ExecuteMsg::AddToGauge { gauge_id, rewards },
        )?;
        Ok(())
    }

    pub fn advance(&mut self) -> IncentivesResult<AdvanceSummary> {
        self.incentives.advance(&mut self.store, &self.env)
    }

    /// Starts a new epoch and advances the block to the given number of seconds later.
    pub fn next_epoch(&mut self, seconds: u64) -> IncentivesResult<AdvanceSummary> {
        self.env.block.time = self.env.block.time.plus_seconds(seconds);
        self.env.block.height += 1;
        self.incentives.epochs_mut().start_next_epoch();
        self.advance()
    }

    pub fn gauge(&self, id: u64) -> Gauge {
        let res: GaugeResponse = from_json(
            self.incentives
                .query(&self.store, &self.env, QueryMsg::GaugeById { id })
                .unwrap(),
        )
        .unwrap();
        res.gauge
    }

    pub fn query<T: serde::de::DeserializeOwned>(&self, msg: QueryMsg) -> T {
        from_json(self.incentives.query(&self.store, &self.env, msg).unwrap()).unwrap()
    }
}
