use cosmwasm_std::{
    to_json_binary, Attribute, Binary, Env, Event, MessageInfo, Response, StdResult, Storage,
};
use incentives_std::{
    keepers::{BankKeeper, EpochKeeper, LockupKeeper},
    msg::{ExecuteMsg, QueryMsg},
    IncentivesConfig, INCENTIVES,
};

use crate::{error::IncentivesError, gauge::GaugeParams, queries};

pub type IncentivesResult<T = Response> = Result<T, IncentivesError>;

/// Builds the responses of the engine. Every response carries an `incentives` event naming the
/// module and the action.
pub struct IncentivesResponse;

impl IncentivesResponse {
    pub fn new<T: Into<String>, A: Into<Attribute>>(
        action: T,
        attrs: impl IntoIterator<Item = A>,
    ) -> Response {
        Response::new().add_event(Self::event(action, attrs))
    }

    pub fn event<T: Into<String>, A: Into<Attribute>>(
        action: T,
        attrs: impl IntoIterator<Item = A>,
    ) -> Event {
        Event::new("incentives")
            .add_attributes(vec![("module", INCENTIVES)])
            .add_attributes(vec![("action", action)])
            .add_attributes(attrs)
    }
}

/// The incentives engine, wired to the host's bank, lockup and epoch modules.
#[derive(Debug, Clone)]
pub struct Incentives<B, L, E> {
    pub(crate) config: IncentivesConfig,
    pub(crate) bank: B,
    pub(crate) lockup: L,
    pub(crate) epochs: E,
}

impl<B: BankKeeper, L: LockupKeeper, E: EpochKeeper> Incentives<B, L, E> {
    pub fn new(config: IncentivesConfig, bank: B, lockup: L, epochs: E) -> IncentivesResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            bank,
            lockup,
            epochs,
        })
    }

    pub fn config(&self) -> &IncentivesConfig {
        &self.config
    }

    pub fn bank(&self) -> &B {
        &self.bank
    }

    pub fn bank_mut(&mut self) -> &mut B {
        &mut self.bank
    }

    pub fn lockup(&self) -> &L {
        &self.lockup
    }

    pub fn lockup_mut(&mut self) -> &mut L {
        &mut self.lockup
    }

    pub fn epochs(&self) -> &E {
        &self.epochs
    }

    pub fn epochs_mut(&mut self) -> &mut E {
        &mut self.epochs
    }

    /// Dispatches a user operation sent by `info.sender`.
    pub fn execute(
        &mut self,
        storage: &mut dyn Storage,
        env: &Env,
        info: MessageInfo,
        msg: ExecuteMsg,
    ) -> IncentivesResult {
        match msg {
            ExecuteMsg::CreateGauge {
                is_perpetual,
                distribute_to,
                coins,
                start_time,
                num_epochs_paid_over,
            } => self.create_gauge(
                storage,
                env,
                info.sender,
                GaugeParams {
                    is_perpetual,
                    distribute_to,
                    coins,
                    start_time: start_time.unwrap_or(env.block.time),
                    num_epochs_paid_over,
                },
            ),
            ExecuteMsg::AddToGauge { gauge_id, rewards } => {
                self.add_to_gauge_rewards(storage, &info.sender, rewards, gauge_id)
            }
        }
    }

    pub fn query(&self, storage: &dyn Storage, _env: &Env, msg: QueryMsg) -> StdResult<Binary> {
        match msg {
            QueryMsg::Config {} => to_json_binary(&self.config),
            QueryMsg::GaugeById { id } => to_json_binary(&queries::query_gauge(storage, id)?),
            QueryMsg::GaugePhaseById { id } => {
                to_json_binary(&queries::query_gauge_phase(storage, id)?)
            }
            QueryMsg::GaugesByDenom { denom } => {
                to_json_binary(&queries::query_gauges_by_denom(storage, &denom)?)
            }
            QueryMsg::UpcomingGaugesBefore { time } => {
                to_json_binary(&queries::query_upcoming_gauges_before(storage, time)?)
            }
            QueryMsg::Gauges { start_after, limit } => {
                to_json_binary(&queries::query_gauges(storage, start_after, limit)?)
            }
            QueryMsg::ActiveGauges {} => to_json_binary(&queries::query_active_gauges(storage)?),
            QueryMsg::ActiveGaugesPerDenom { denom } => {
                to_json_binary(&queries::query_active_gauges_per_denom(storage, &denom)?)
            }
            QueryMsg::UpcomingGauges {} => {
                to_json_binary(&queries::query_upcoming_gauges(storage)?)
            }
            QueryMsg::FinishedGauges {} => {
                to_json_binary(&queries::query_finished_gauges(storage)?)
            }
            QueryMsg::ModuleToDistributeCoins {} => {
                to_json_binary(&queries::query_module_to_distribute_coins(storage)?)
            }
            QueryMsg::ModuleDistributedCoins {} => {
                to_json_binary(&queries::query_module_distributed_coins(storage)?)
            }
        }
    }
}
