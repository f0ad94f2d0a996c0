mod common;

use common::Harness;
use cosmwasm_std::{coin, Uint128};
use incentives::IncentivesError;
use incentives_std::{
    config::{ADD_TO_GAUGE_FEE, CREATE_GAUGE_FEE},
    msg::{GaugesResponse, QueryMsg},
};
use incentives_testing::prelude::*;
use speculoos::prelude::*;

#[test]
fn create_gauge_charges_fee_and_funding() -> anyhow::Result<()> {
    let mut h = Harness::new();
    let creator = h.addrs.creator.clone();
    h.fund(&creator, &[coin(60_000_000, TEST_FEE_DENOM)]);

    let id = h.create_gauge(
        &creator,
        false,
        vec![coin(10_000_000, TEST_FEE_DENOM)],
        None,
        1,
    )?;

    assert_eq!(h.balance(&creator, TEST_FEE_DENOM), 60_000_000 - 10_000_000 - CREATE_GAUGE_FEE);
    assert_eq!(h.balance(&h.addrs.fee_collector, TEST_FEE_DENOM), CREATE_GAUGE_FEE);
    assert_eq!(h.balance(&h.addrs.gauge_escrow, TEST_FEE_DENOM), 10_000_000);
    assert_eq!(h.gauge(id).coins, vec![coin(10_000_000, TEST_FEE_DENOM)]);
    Ok(())
}

#[test]
fn insufficient_funds_leave_everything_unchanged() {
    let mut h = Harness::new();
    let creator = h.addrs.creator.clone();
    h.fund(&creator, &[coin(40_000_000, TEST_FEE_DENOM)]);

    let res = h.create_gauge(
        &creator,
        false,
        vec![coin(10_000_000, TEST_FEE_DENOM)],
        None,
        1,
    );
    assert_that!(res).is_err_containing(IncentivesError::InsufficientFunds {
        denom: TEST_FEE_DENOM.into(),
        available: Uint128::new(40_000_000),
        required: Uint128::new(60_000_000),
    });

    assert_eq!(h.balance(&creator, TEST_FEE_DENOM), 40_000_000);
    assert_eq!(h.balance(&h.addrs.gauge_escrow, TEST_FEE_DENOM), 0);
    assert_eq!(h.balance(&h.addrs.fee_collector, TEST_FEE_DENOM), 0);
    let active: GaugesResponse = h.query(QueryMsg::ActiveGauges {});
    let upcoming: GaugesResponse = h.query(QueryMsg::UpcomingGauges {});
    assert!(active.gauges.is_empty());
    assert!(upcoming.gauges.is_empty());
}

#[test]
fn fee_must_be_paid_in_fee_denom() {
    let mut h = Harness::new();
    let creator = h.addrs.creator.clone();
    h.fund(&creator, &[coin(100_000_000, TEST_OTHER_DENOM)]);

    let res = h.create_gauge(
        &creator,
        false,
        vec![coin(10_000_000, TEST_OTHER_DENOM)],
        None,
        1,
    );
    assert_that!(res).is_err_containing(IncentivesError::WrongDenom {
        expected: TEST_FEE_DENOM.into(),
    });
    assert_eq!(h.balance(&creator, TEST_OTHER_DENOM), 100_000_000);
}

#[test]
fn rewards_in_other_denom_are_checked_separately() -> anyhow::Result<()> {
    let mut h = Harness::new();
    let creator = h.addrs.creator.clone();
    h.fund(
        &creator,
        &[coin(CREATE_GAUGE_FEE, TEST_FEE_DENOM), coin(1_000, TEST_REWARD_DENOM)],
    );

    h.create_gauge(&creator, false, vec![coin(1_000, TEST_REWARD_DENOM)], None, 2)?;
    assert!(h.incentives.bank().all_balances(&creator).is_empty());
    Ok(())
}

#[test]
fn add_to_unknown_gauge() -> anyhow::Result<()> {
    let mut h = Harness::new();
    let creator = h.addrs.creator.clone();
    h.fund(&creator, &[coin(200_000_000, TEST_FEE_DENOM)]);
    let id = h.create_gauge(&creator, false, vec![coin(10, TEST_FEE_DENOM)], None, 1)?;
    let balance = h.balance(&creator, TEST_FEE_DENOM);

    let res = h.add_to_gauge(&creator, id + 50, vec![coin(10, TEST_FEE_DENOM)]);
    assert_that!(res).is_err_containing(IncentivesError::GaugeNotFound(id + 50));
    assert_eq!(h.balance(&creator, TEST_FEE_DENOM), balance);
    Ok(())
}

#[test]
fn add_to_gauge_charges_its_own_fee() -> anyhow::Result<()> {
    let mut h = Harness::new();
    let creator = h.addrs.creator.clone();
    let alice = h.addrs.alice.clone();
    h.fund(&creator, &[coin(CREATE_GAUGE_FEE, TEST_FEE_DENOM)]);
    h.fund(&alice, &[coin(ADD_TO_GAUGE_FEE + 30, TEST_FEE_DENOM)]);
    let id = h.create_gauge(&creator, false, vec![], None, 3)?;

    h.add_to_gauge(&alice, id, vec![coin(30, TEST_FEE_DENOM)])?;

    assert_eq!(h.balance(&alice, TEST_FEE_DENOM), 0);
    assert_eq!(
        h.balance(&h.addrs.fee_collector, TEST_FEE_DENOM),
        CREATE_GAUGE_FEE + ADD_TO_GAUGE_FEE
    );
    assert_eq!(h.gauge(id).coins, vec![coin(30, TEST_FEE_DENOM)]);
    Ok(())
}

#[test]
fn finished_gauge_rejects_rewards() -> anyhow::Result<()> {
    let mut h = Harness::new();
    let creator = h.addrs.creator.clone();
    let alice = h.addrs.alice.clone();
    h.fund(&creator, &[coin(200_000_000, TEST_FEE_DENOM)]);
    h.lock(&alice, 10, TEST_LOCK_DURATION);
    let id = h.create_gauge(&creator, false, vec![coin(100, TEST_FEE_DENOM)], None, 1)?;

    let summary = h.next_epoch(86_400)?;
    assert_eq!(summary.finished, vec![id]);

    let balance = h.balance(&creator, TEST_FEE_DENOM);
    let res = h.add_to_gauge(&creator, id, vec![coin(100, TEST_FEE_DENOM)]);
    assert_that!(res).is_err_containing(IncentivesError::GaugeFinished(id));
    assert_eq!(h.balance(&creator, TEST_FEE_DENOM), balance);
    Ok(())
}

#[test]
fn module_accounts_follow_the_same_rules() -> anyhow::Result<()> {
    let mut h = Harness::new();
    let module = h.addrs.module_account.clone();

    let res = h.create_gauge(&module, true, vec![], None, 0);
    assert_that!(res).is_err_containing(IncentivesError::WrongDenom {
        expected: TEST_FEE_DENOM.into(),
    });

    h.fund(&module, &[coin(CREATE_GAUGE_FEE, TEST_FEE_DENOM)]);
    let id = h.create_gauge(&module, true, vec![], None, 0)?;
    assert_eq!(h.gauge(id).owner, module);
    assert_eq!(h.balance(&module, TEST_FEE_DENOM), 0);
    Ok(())
}
