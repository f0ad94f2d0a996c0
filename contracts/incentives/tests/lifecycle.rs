mod common;

use common::Harness;
use cosmwasm_std::coin;
use incentives::IncentivesError;
use incentives_std::{
    msg::{CoinsResponse, GaugePhaseResponse, GaugesResponse, QueryMsg},
    objects::GaugePhase,
};
use incentives_testing::prelude::*;
use rstest::rstest;
use speculoos::prelude::*;

const DAY: u64 = 86_400;

fn funded() -> Harness {
    let mut h = Harness::new();
    let creator = h.addrs.creator.clone();
    h.fund(
        &creator,
        &[
            coin(10_000_000_000, TEST_FEE_DENOM),
            coin(10_000_000_000, TEST_REWARD_DENOM),
        ],
    );
    h
}

fn phase(h: &Harness, id: u64) -> GaugePhase {
    let res: GaugePhaseResponse = h.query(QueryMsg::GaugePhaseById { id });
    res.phase
}

#[rstest(
    funded_amount,
    num_epochs,
    case::even(1_000, 4),
    case::remainder(1_000, 3),
    case::more_epochs_than_units(5, 7),
    case::single_epoch(999, 1)
)]
fn paid_amounts_add_up_to_funding(funded_amount: u128, num_epochs: u64) {
    let mut h = funded();
    let (creator, alice, bob, carol) = (
        h.addrs.creator.clone(),
        h.addrs.alice.clone(),
        h.addrs.bob.clone(),
        h.addrs.carol.clone(),
    );
    h.lock(&alice, 1, TEST_LOCK_DURATION);
    h.lock(&bob, 3, TEST_LOCK_DURATION * 2);
    h.lock(&carol, 7, TEST_LOCK_DURATION);
    let id = h
        .create_gauge(
            &creator,
            false,
            vec![coin(funded_amount, TEST_REWARD_DENOM)],
            None,
            num_epochs,
        )
        .unwrap();

    for epoch in 1..=num_epochs {
        assert_eq!(phase(&h, id), GaugePhase::Active);
        let summary = h.next_epoch(DAY).unwrap();
        assert_eq!(summary.distributed_ids(), vec![id]);
        assert_eq!(h.gauge(id).filled_epochs, epoch);
    }
    assert_eq!(phase(&h, id), GaugePhase::Finished);

    let paid: u128 = [&alice, &bob, &carol]
        .iter()
        .map(|owner| h.balance(owner, TEST_REWARD_DENOM))
        .sum();
    assert_eq!(paid, funded_amount);
    assert_eq!(h.balance(&h.addrs.gauge_escrow, TEST_REWARD_DENOM), 0);
    assert_eq!(h.gauge(id).distributed_coins, h.gauge(id).coins);

    // finished gauges are never paid again
    assert!(h.next_epoch(DAY).unwrap().distributed.is_empty());
}

#[test]
fn phases_move_forward_only() -> anyhow::Result<()> {
    let mut h = funded();
    let creator = h.addrs.creator.clone();
    let start = h.now().plus_seconds(DAY);
    let id = h.create_gauge(
        &creator,
        false,
        vec![coin(100, TEST_REWARD_DENOM)],
        Some(start),
        2,
    )?;
    assert_eq!(phase(&h, id), GaugePhase::Upcoming);

    // an epoch ends before the gauge starts
    let summary = h.next_epoch(DAY - 1)?;
    assert!(summary.activated.is_empty());
    assert_eq!(phase(&h, id), GaugePhase::Upcoming);

    let summary = h.next_epoch(1)?;
    assert_eq!(summary.activated, vec![id]);
    // activated and paid in the same block, without qualifying locks
    assert_eq!(summary.distributed_ids(), vec![id]);
    assert_eq!(phase(&h, id), GaugePhase::Active);

    let summary = h.next_epoch(DAY)?;
    assert_eq!(summary.finished, vec![id]);
    assert_eq!(phase(&h, id), GaugePhase::Finished);

    let finished: GaugesResponse = h.query(QueryMsg::FinishedGauges {});
    assert_eq!(finished.gauges.len(), 1);
    let by_denom: GaugesResponse = h.query(QueryMsg::GaugesByDenom {
        denom: TEST_LP_DENOM.into(),
    });
    assert_eq!(by_denom.gauges[0].id, id);
    Ok(())
}

#[test]
fn advance_is_idempotent() -> anyhow::Result<()> {
    let mut h = funded();
    let (creator, alice) = (h.addrs.creator.clone(), h.addrs.alice.clone());
    h.lock(&alice, 10, TEST_LOCK_DURATION);
    h.create_gauge(&creator, false, vec![coin(100, TEST_REWARD_DENOM)], None, 4)?;

    let first = h.next_epoch(DAY)?;
    assert_eq!(first.distributed_ids(), vec![1]);
    let balance = h.balance(&alice, TEST_REWARD_DENOM);

    let second = h.advance()?;
    assert!(second.is_empty());
    assert_eq!(h.balance(&alice, TEST_REWARD_DENOM), balance);
    assert_eq!(h.gauge(1).filled_epochs, 1);
    Ok(())
}

#[test]
fn perpetual_gauges_pay_full_balance_and_never_finish() -> anyhow::Result<()> {
    let mut h = funded();
    let (creator, alice) = (h.addrs.creator.clone(), h.addrs.alice.clone());
    h.lock(&alice, 10, TEST_LOCK_DURATION);
    let id = h.create_gauge(&creator, true, vec![coin(100, TEST_REWARD_DENOM)], None, 0)?;

    h.next_epoch(DAY)?;
    assert_eq!(h.balance(&alice, TEST_REWARD_DENOM), 100);

    // nothing left to pay
    h.next_epoch(DAY)?;
    h.add_to_gauge(&creator, id, vec![coin(40, TEST_REWARD_DENOM)])?;
    let summary = h.next_epoch(DAY)?;

    assert_eq!(summary.distributed, vec![(id, vec![coin(40, TEST_REWARD_DENOM)])]);
    assert!(summary.finished.is_empty());
    assert_eq!(h.balance(&alice, TEST_REWARD_DENOM), 140);
    assert_eq!(phase(&h, id), GaugePhase::Active);
    assert_eq!(h.gauge(id).filled_epochs, 3);
    Ok(())
}

#[test]
fn failures_are_isolated_per_gauge() -> anyhow::Result<()> {
    let mut h = funded();
    let (creator, alice, bob) = (
        h.addrs.creator.clone(),
        h.addrs.alice.clone(),
        h.addrs.bob.clone(),
    );
    h.lock(&alice, 10, TEST_LOCK_DURATION);
    let first = h.create_gauge(&creator, false, vec![coin(100, TEST_REWARD_DENOM)], None, 1)?;
    let second = h.create_gauge(&creator, false, vec![coin(100, TEST_FEE_DENOM)], None, 1)?;

    // alice can not receive until unfrozen
    h.incentives.bank_mut().freeze(&alice);
    let summary = h.next_epoch(DAY)?;
    assert_eq!(summary.failed_ids(), vec![first, second]);
    assert!(summary.failed.iter().all(|(_, err)| err.is_isolated()));
    assert_eq!(h.gauge(first).filled_epochs, 0);

    h.incentives.bank_mut().unfreeze(&alice);
    h.lock(&bob, 10, TEST_LOCK_DURATION);
    // same epoch, the failed gauges are retried
    let summary = h.advance()?;
    assert_eq!(summary.distributed_ids(), vec![first, second]);
    assert_eq!(h.balance(&alice, TEST_REWARD_DENOM), 50);
    assert_eq!(h.balance(&bob, TEST_REWARD_DENOM), 50);
    Ok(())
}

#[test]
fn unrevertable_payout_aborts_advance() -> anyhow::Result<()> {
    let mut h = funded();
    let (creator, alice, bob) = (
        h.addrs.creator.clone(),
        h.addrs.alice.clone(),
        h.addrs.bob.clone(),
    );
    h.lock(&alice, 10, TEST_LOCK_DURATION);
    h.lock(&bob, 10, TEST_LOCK_DURATION);
    let id = h.create_gauge(&creator, false, vec![coin(100, TEST_REWARD_DENOM)], None, 2)?;

    // alice is paid, bob's payout fails and alice's payout can not be taken back
    h.incentives.bank_mut().freeze(&bob);
    h.incentives.bank_mut().freeze_outgoing(&alice);
    let res = h.next_epoch(DAY);
    assert!(matches!(res, Err(IncentivesError::CompensationFailed { .. })));
    assert!(!res.unwrap_err().is_isolated());
    assert_eq!(h.balance(&alice, TEST_REWARD_DENOM), 25);
    assert_eq!(h.gauge(id).filled_epochs, 0);
    Ok(())
}

#[test]
fn lockup_outage_skips_gauge_but_not_the_block() -> anyhow::Result<()> {
    let mut h = funded();
    let creator = h.addrs.creator.clone();
    h.create_gauge(&creator, false, vec![coin(100, TEST_REWARD_DENOM)], None, 1)?;
    let upcoming = h.create_gauge(
        &creator,
        false,
        vec![coin(100, TEST_REWARD_DENOM)],
        Some(h.now().plus_seconds(10)),
        1,
    )?;

    h.incentives.lockup_mut().set_unavailable(true);
    let summary = h.next_epoch(DAY)?;
    assert_eq!(summary.activated, vec![upcoming]);
    assert_eq!(summary.failed.len(), 2);
    assert!(matches!(summary.failed[0].1, IncentivesError::Keeper(_)));

    let res = summary.into_response();
    assert_that!(res.events.iter().filter(|e| e.ty == "incentives").count()).is_equal_to(4);
    Ok(())
}

#[test]
fn module_coins_track_distribution() -> anyhow::Result<()> {
    let mut h = funded();
    let (creator, alice) = (h.addrs.creator.clone(), h.addrs.alice.clone());
    h.lock(&alice, 10, TEST_LOCK_DURATION);
    h.create_gauge(&creator, false, vec![coin(100, TEST_REWARD_DENOM)], None, 4)?;
    h.create_gauge(
        &creator,
        false,
        vec![coin(50, TEST_REWARD_DENOM)],
        Some(h.now().plus_seconds(10 * DAY)),
        1,
    )?;

    h.next_epoch(DAY)?;
    let to_distribute: CoinsResponse = h.query(QueryMsg::ModuleToDistributeCoins {});
    let distributed: CoinsResponse = h.query(QueryMsg::ModuleDistributedCoins {});
    assert_eq!(to_distribute.coins, vec![coin(125, TEST_REWARD_DENOM)]);
    assert_eq!(distributed.coins, vec![coin(25, TEST_REWARD_DENOM)]);
    Ok(())
}
