use cosmwasm_std::{to_json_binary, Addr, Coin, Env, Event, Response, Storage};
use incentives_std::{
    keepers::{BankKeeper, EpochKeeper, LockupKeeper},
    msg::CreateGaugeResponse,
    objects::coins::coins_to_string,
};

use crate::{
    contract::{Incentives, IncentivesResponse, IncentivesResult},
    distribution,
    error::IncentivesError,
    fees,
    gauge::{self, GaugeParams},
    refs,
    state::{GAUGES, LAST_DISTRIBUTED_EPOCH},
};

/// What a single [`Incentives::advance`] call did.
#[derive(Debug, Default, PartialEq)]
pub struct AdvanceSummary {
    /// Gauges moved from upcoming to active.
    pub activated: Vec<u64>,
    /// Gauges paid this call, with the amount their bookkeeping advanced by.
    pub distributed: Vec<(u64, Vec<Coin>)>,
    /// Gauges that paid their last epoch this call.
    pub finished: Vec<u64>,
    /// Gauges whose distribution failed. Their state is left as it was.
    pub failed: Vec<(u64, IncentivesError)>,
}

impl AdvanceSummary {
    pub fn distributed_ids(&self) -> Vec<u64> {
        self.distributed.iter().map(|(id, _)| *id).collect()
    }

    pub fn failed_ids(&self) -> Vec<u64> {
        self.failed.iter().map(|(id, _)| *id).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.activated.is_empty()
            && self.distributed.is_empty()
            && self.finished.is_empty()
            && self.failed.is_empty()
    }

    /// Response with an `advance` event followed by one event per affected gauge.
    pub fn into_response(self) -> Response {
        let mut events: Vec<Event> = vec![];
        events.extend(self.activated.iter().map(|id| {
            IncentivesResponse::event("activate_gauge", vec![("gauge_id", id.to_string())])
        }));
        events.extend(self.distributed.iter().map(|(id, coins)| {
            IncentivesResponse::event(
                "distribute",
                vec![("gauge_id", id.to_string()), ("coins", coins_to_string(coins))],
            )
        }));
        events.extend(self.finished.iter().map(|id| {
            IncentivesResponse::event("finish_gauge", vec![("gauge_id", id.to_string())])
        }));
        events.extend(self.failed.iter().map(|(id, err)| {
            IncentivesResponse::event(
                "distribution_failed",
                vec![("gauge_id", id.to_string()), ("error", err.to_string())],
            )
        }));

        IncentivesResponse::new(
            "advance",
            vec![
                ("activated", self.activated.len().to_string()),
                ("distributed", self.distributed.len().to_string()),
                ("finished", self.finished.len().to_string()),
                ("failed", self.failed.len().to_string()),
            ],
        )
        .add_events(events)
    }
}

impl<B: BankKeeper, L: LockupKeeper, E: EpochKeeper> Incentives<B, L, E> {
    /// Creates a gauge funded by `owner`.
    ///
    /// The parameters are validated before the create fee and the funded coins are debited, and
    /// the gauge is only stored once both transfers went through.
    pub fn create_gauge(
        &mut self,
        storage: &mut dyn Storage,
        env: &Env,
        owner: Addr,
        params: GaugeParams,
    ) -> IncentivesResult {
        params.validate()?;

        let fee = fees::charge_fee_and_fund(
            &mut self.bank,
            &self.config,
            &owner,
            self.config.create_gauge_fee,
            &params.coins,
        )?;
        let gauge = gauge::create_gauge(storage, env.block.time, owner, params)?;
        log::debug!("created gauge {} for {}", gauge.id, gauge.distribute_to);

        Ok(IncentivesResponse::new(
            "create_gauge",
            vec![
                ("gauge_id", gauge.id.to_string()),
                ("owner", gauge.owner.to_string()),
                ("coins", coins_to_string(&gauge.coins)),
                ("start_time", gauge.start_time.seconds().to_string()),
                ("fee", fee.map(|fee| fee.to_string()).unwrap_or_default()),
            ],
        )
        .set_data(to_json_binary(&CreateGaugeResponse { gauge_id: gauge.id })?))
    }

    /// Adds `rewards` paid by `owner` to an existing gauge.
    pub fn add_to_gauge_rewards(
        &mut self,
        storage: &mut dyn Storage,
        owner: &Addr,
        rewards: Vec<Coin>,
        gauge_id: u64,
    ) -> IncentivesResult {
        gauge::validate_rewards(&rewards)?;
        let current = gauge::load_gauge(storage, gauge_id)?;
        gauge::assert_accepts_rewards(&current)?;

        let fee = fees::charge_fee_and_fund(
            &mut self.bank,
            &self.config,
            owner,
            self.config.add_to_gauge_fee,
            &rewards,
        )?;
        let gauge = gauge::add_to_gauge_rewards(storage, gauge_id, &rewards)?;

        Ok(IncentivesResponse::new(
            "add_to_gauge",
            vec![
                ("gauge_id", gauge.id.to_string()),
                ("owner", owner.to_string()),
                ("rewards", coins_to_string(&rewards)),
                ("fee", fee.map(|fee| fee.to_string()).unwrap_or_default()),
            ],
        ))
    }

    /// The once-per-block lifecycle step.
    ///
    /// First activates every upcoming gauge whose start time is at or before the block time.
    /// Then every active gauge, in ascending id order, whose epoch boundary has been reached and
    /// which has not been paid in the current epoch yet distributes one epoch. Gauges that filled
    /// their last epoch are moved to the finished bucket.
    ///
    /// A distribution that fails on a collaborator is recorded in [`AdvanceSummary::failed`] and
    /// does not stop the other gauges. Storage failures, index corruption and a failed
    /// compensation abort the call.
    pub fn advance(
        &mut self,
        storage: &mut dyn Storage,
        env: &Env,
    ) -> IncentivesResult<AdvanceSummary> {
        let now = env.block.time;
        let mut summary = AdvanceSummary {
            activated: gauge::activate_upcoming_gauges(storage, now)?,
            ..Default::default()
        };

        let epoch = self.epochs.current_epoch(now);
        for id in refs::active_gauge_ids(storage)? {
            if !self.epochs.epoch_boundary_reached(id, now) {
                continue;
            }
            if LAST_DISTRIBUTED_EPOCH.may_load(storage, id)? == Some(epoch) {
                continue;
            }

            let mut gauge = GAUGES
                .may_load(storage, id)?
                .ok_or_else(|| IncentivesError::IndexCorruption {
                    gauge_id: id,
                    bucket: "ref:active".to_owned(),
                })?;
            let plan = match distribution::distribute(
                storage,
                &mut self.bank,
                &self.lockup,
                &self.config.gauge_escrow,
                &mut gauge,
            ) {
                Ok(plan) => plan,
                Err(err) if err.is_isolated() => {
                    log::warn!("distribution of gauge {id} failed: {err}");
                    summary.failed.push((id, err));
                    continue;
                }
                Err(err) => return Err(err),
            };

            LAST_DISTRIBUTED_EPOCH.save(storage, id, &epoch)?;
            summary.distributed.push((id, plan.epoch_coins));
            if gauge.is_finished() {
                gauge::finish_gauge(storage, &gauge)?;
                summary.finished.push(id);
            }
        }

        Ok(summary)
    }
}
