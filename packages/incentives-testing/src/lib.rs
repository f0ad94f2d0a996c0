//! Test doubles for the collaborators of the incentives engine.

pub mod mock_bank;
pub mod mock_epochs;
pub mod mock_lockup;

pub use mock_bank::MockBank;
pub use mock_epochs::MockEpochs;
pub use mock_lockup::{MockLock, MockLockup};

pub mod prelude {
    pub use super::{addresses::*, denoms::*, mock_config, MockBank, MockEpochs, MockLockup};
}

pub mod denoms {
    pub const TEST_FEE_DENOM: &str = incentives_std::config::DEFAULT_FEE_DENOM;
    pub const TEST_LP_DENOM: &str = "gamm/pool/1";
    pub const TEST_REWARD_DENOM: &str = "uion";
    pub const TEST_OTHER_DENOM: &str = "foo";
    /// One day, in seconds.
    pub const TEST_LOCK_DURATION: u64 = 86_400;
}

pub mod addresses {
    use cosmwasm_std::{testing::MockApi, Addr};

    // Test addr makers
    const TEST_FEE_COLLECTOR: &str = "incentives_fee_collector";
    const TEST_GAUGE_ESCROW: &str = "incentives_gauge_escrow";
    const TEST_CREATOR: &str = "gauge_creator";
    const TEST_MODULE_ACCOUNT: &str = "pool_incentives_module";
    const TEST_ALICE: &str = "alice";
    const TEST_BOB: &str = "bob";
    const TEST_CAROL: &str = "carol";

    #[derive(Debug, Clone)]
    pub struct IncentivesMockAddrs {
        pub fee_collector: Addr,
        pub gauge_escrow: Addr,
        pub creator: Addr,
        pub module_account: Addr,
        pub alice: Addr,
        pub bob: Addr,
        pub carol: Addr,
    }

    impl IncentivesMockAddrs {
        pub fn new(mock_api: MockApi) -> IncentivesMockAddrs {
            IncentivesMockAddrs {
                fee_collector: mock_api.addr_make(TEST_FEE_COLLECTOR),
                gauge_escrow: mock_api.addr_make(TEST_GAUGE_ESCROW),
                creator: mock_api.addr_make(TEST_CREATOR),
                module_account: mock_api.addr_make(TEST_MODULE_ACCOUNT),
                alice: mock_api.addr_make(TEST_ALICE),
                bob: mock_api.addr_make(TEST_BOB),
                carol: mock_api.addr_make(TEST_CAROL),
            }
        }
    }
}

/// Default engine config pointing at the mock module accounts.
pub fn mock_config(mock_api: cosmwasm_std::testing::MockApi) -> incentives_std::IncentivesConfig {
    let addrs = addresses::IncentivesMockAddrs::new(mock_api);
    incentives_std::IncentivesConfig::new(addrs.fee_collector, addrs.gauge_escrow)
}
