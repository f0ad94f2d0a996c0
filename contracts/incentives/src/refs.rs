//! # Gauge reference index
//!
//! Denormalized lists of gauge ids, one list per bucket. A gauge id is referenced by exactly one
//! bucket that matches its phase:
//!
//! * upcoming gauges by `(start time bucket, denom, duration)`, so activation is a range scan over
//!   the buckets that are due,
//! * active and finished gauges by `(denom, duration)`, so per-denom lookups are a prefix scan.
//!
//! Lists keep insertion order. Moving a gauge between phases removes its id from the old bucket
//! and appends it to the new one within the same call.

use std::fmt::{self, Display};

use cosmwasm_std::{Order, StdResult, Storage, Timestamp};
use cw_storage_plus::Bound;
use incentives_std::objects::{Gauge, GaugePhase};

use crate::{
    contract::IncentivesResult,
    error::IncentivesError,
    state::{ACTIVE_REFS, FINISHED_REFS, UPCOMING_BUCKET_RESOLUTION_SECS, UPCOMING_REFS},
};

/// Key of a single reference list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefBucket<'a> {
    Upcoming {
        time_bucket: u64,
        denom: &'a str,
        duration: u64,
    },
    Active {
        denom: &'a str,
        duration: u64,
    },
    Finished {
        denom: &'a str,
        duration: u64,
    },
}

impl<'a> RefBucket<'a> {
    pub fn upcoming(gauge: &'a Gauge) -> Self {
        RefBucket::Upcoming {
            time_bucket: time_bucket(gauge.start_time),
            denom: &gauge.distribute_to.denom,
            duration: gauge.distribute_to.duration,
        }
    }

    pub fn active(gauge: &'a Gauge) -> Self {
        RefBucket::Active {
            denom: &gauge.distribute_to.denom,
            duration: gauge.distribute_to.duration,
        }
    }

    pub fn finished(gauge: &'a Gauge) -> Self {
        RefBucket::Finished {
            denom: &gauge.distribute_to.denom,
            duration: gauge.distribute_to.duration,
        }
    }

    /// Bucket a gauge belongs to while it is in `phase`.
    pub fn for_phase(gauge: &'a Gauge, phase: GaugePhase) -> Self {
        match phase {
            GaugePhase::Upcoming => Self::upcoming(gauge),
            GaugePhase::Active => Self::active(gauge),
            GaugePhase::Finished => Self::finished(gauge),
        }
    }
}

impl Display for RefBucket<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefBucket::Upcoming {
                time_bucket,
                denom,
                duration,
            } => write!(f, "ref:upcoming:{time_bucket}:{denom}:{duration}"),
            RefBucket::Active { denom, duration } => write!(f, "ref:active:{denom}:{duration}"),
            RefBucket::Finished { denom, duration } => {
                write!(f, "ref:finished:{denom}:{duration}")
            }
        }
    }
}

/// Start time rounded down to the bucket resolution.
pub fn time_bucket(time: Timestamp) -> u64 {
    time.seconds() / UPCOMING_BUCKET_RESOLUTION_SECS * UPCOMING_BUCKET_RESOLUTION_SECS
}

/// Ids referenced by `bucket`, in insertion order.
pub fn gauge_refs(storage: &dyn Storage, bucket: &RefBucket) -> StdResult<Vec<u64>> {
    let refs = match *bucket {
        RefBucket::Upcoming {
            time_bucket,
            denom,
            duration,
        } => UPCOMING_REFS.may_load(storage, (time_bucket, denom, duration))?,
        RefBucket::Active { denom, duration } => ACTIVE_REFS.may_load(storage, (denom, duration))?,
        RefBucket::Finished { denom, duration } => {
            FINISHED_REFS.may_load(storage, (denom, duration))?
        }
    };
    Ok(refs.unwrap_or_default())
}

fn save_gauge_refs(storage: &mut dyn Storage, bucket: &RefBucket, ids: &[u64]) -> StdResult<()> {
    // empty buckets are removed so range scans never visit them
    match *bucket {
        RefBucket::Upcoming {
            time_bucket,
            denom,
            duration,
        } => {
            let key = (time_bucket, denom, duration);
            if ids.is_empty() {
                UPCOMING_REFS.remove(storage, key);
                Ok(())
            } else {
                UPCOMING_REFS.save(storage, key, &ids.to_vec())
            }
        }
        RefBucket::Active { denom, duration } => {
            if ids.is_empty() {
                ACTIVE_REFS.remove(storage, (denom, duration));
                Ok(())
            } else {
                ACTIVE_REFS.save(storage, (denom, duration), &ids.to_vec())
            }
        }
        RefBucket::Finished { denom, duration } => {
            if ids.is_empty() {
                FINISHED_REFS.remove(storage, (denom, duration));
                Ok(())
            } else {
                FINISHED_REFS.save(storage, (denom, duration), &ids.to_vec())
            }
        }
    }
}

/// Append `gauge_id` to `bucket`.
pub fn add_gauge_ref(storage: &mut dyn Storage, bucket: &RefBucket, gauge_id: u64) -> StdResult<()> {
    let mut ids = gauge_refs(storage, bucket)?;
    ids.push(gauge_id);
    save_gauge_refs(storage, bucket, &ids)
}

/// Remove the first occurrence of `gauge_id` from `bucket`.
///
/// A missing id means the index no longer matches the gauge records, which is reported as
/// [`IncentivesError::IndexCorruption`].
pub fn remove_gauge_ref(
    storage: &mut dyn Storage,
    bucket: &RefBucket,
    gauge_id: u64,
) -> IncentivesResult<()> {
    let mut ids = gauge_refs(storage, bucket)?;
    let Some(position) = ids.iter().position(|id| *id == gauge_id) else {
        return Err(IncentivesError::IndexCorruption {
            gauge_id,
            bucket: bucket.to_string(),
        });
    };
    ids.remove(position);
    save_gauge_refs(storage, bucket, &ids)?;
    Ok(())
}

/// Move `gauge_id` from one bucket to another. Nothing is written if the id is not in `from`.
pub fn move_gauge_ref(
    storage: &mut dyn Storage,
    from: &RefBucket,
    to: &RefBucket,
    gauge_id: u64,
) -> IncentivesResult<()> {
    remove_gauge_ref(storage, from, gauge_id)?;
    add_gauge_ref(storage, to, gauge_id)?;
    log::debug!("gauge {gauge_id} moved from {from} to {to}");
    Ok(())
}

pub fn move_upcoming_to_active(storage: &mut dyn Storage, gauge: &Gauge) -> IncentivesResult<()> {
    move_gauge_ref(
        storage,
        &RefBucket::upcoming(gauge),
        &RefBucket::active(gauge),
        gauge.id,
    )
}

pub fn move_active_to_finished(storage: &mut dyn Storage, gauge: &Gauge) -> IncentivesResult<()> {
    move_gauge_ref(
        storage,
        &RefBucket::active(gauge),
        &RefBucket::finished(gauge),
        gauge.id,
    )
}

/// Phase of `gauge` as recorded by the index.
///
/// Differs from [`Gauge::phase`] between a gauge's start time and the `advance` that activates
/// it. A gauge in none of its buckets is [`IncentivesError::IndexCorruption`].
pub fn indexed_phase(storage: &dyn Storage, gauge: &Gauge) -> IncentivesResult<GaugePhase> {
    for phase in [GaugePhase::Active, GaugePhase::Finished, GaugePhase::Upcoming] {
        if gauge_refs(storage, &RefBucket::for_phase(gauge, phase))?.contains(&gauge.id) {
            return Ok(phase);
        }
    }
    Err(IncentivesError::IndexCorruption {
        gauge_id: gauge.id,
        bucket: "ref".to_owned(),
    })
}

/// Upcoming gauge ids whose start time bucket is at or before `time`.
/// Ordered by bucket, then by insertion order within a bucket.
pub fn upcoming_gauge_ids_until(storage: &dyn Storage, time: Timestamp) -> StdResult<Vec<u64>> {
    let end = time_bucket(time).saturating_add(1);
    let buckets = UPCOMING_REFS
        .range(
            storage,
            None,
            Some(Bound::exclusive((end, "", 0u64))),
            Order::Ascending,
        )
        .collect::<StdResult<Vec<_>>>()?;
    Ok(buckets.into_iter().flat_map(|(_, ids)| ids).collect())
}

/// Every upcoming gauge id, ordered by start time bucket.
pub fn upcoming_gauge_ids(storage: &dyn Storage) -> StdResult<Vec<u64>> {
    let buckets = UPCOMING_REFS
        .range(storage, None, None, Order::Ascending)
        .collect::<StdResult<Vec<_>>>()?;
    Ok(buckets.into_iter().flat_map(|(_, ids)| ids).collect())
}

/// Every active gauge id, ascending.
pub fn active_gauge_ids(storage: &dyn Storage) -> StdResult<Vec<u64>> {
    let buckets = ACTIVE_REFS
        .range(storage, None, None, Order::Ascending)
        .collect::<StdResult<Vec<_>>>()?;
    Ok(sorted(buckets.into_iter().flat_map(|(_, ids)| ids)))
}

/// Every finished gauge id, ascending.
pub fn finished_gauge_ids(storage: &dyn Storage) -> StdResult<Vec<u64>> {
    let buckets = FINISHED_REFS
        .range(storage, None, None, Order::Ascending)
        .collect::<StdResult<Vec<_>>>()?;
    Ok(sorted(buckets.into_iter().flat_map(|(_, ids)| ids)))
}

/// Active gauge ids distributing to `denom`, across all durations, ascending.
pub fn active_gauge_ids_by_denom(storage: &dyn Storage, denom: &str) -> StdResult<Vec<u64>> {
    let buckets = ACTIVE_REFS
        .prefix(denom)
        .range(storage, None, None, Order::Ascending)
        .collect::<StdResult<Vec<_>>>()?;
    Ok(sorted(buckets.into_iter().flat_map(|(_, ids)| ids)))
}

/// Finished gauge ids that distributed to `denom`, across all durations, ascending.
pub fn finished_gauge_ids_by_denom(storage: &dyn Storage, denom: &str) -> StdResult<Vec<u64>> {
    let buckets = FINISHED_REFS
        .prefix(denom)
        .range(storage, None, None, Order::Ascending)
        .collect::<StdResult<Vec<_>>>()?;
    Ok(sorted(buckets.into_iter().flat_map(|(_, ids)| ids)))
}

/// Active and finished gauge ids for `denom`, ascending. Upcoming gauges are not included.
pub fn all_gauge_ids_by_denom(storage: &dyn Storage, denom: &str) -> StdResult<Vec<u64>> {
    let mut ids = active_gauge_ids_by_denom(storage, denom)?;
    ids.extend(finished_gauge_ids_by_denom(storage, denom)?);
    Ok(sorted(ids))
}

fn sorted(ids: impl IntoIterator<Item = u64>) -> Vec<u64> {
    let mut ids: Vec<u64> = ids.into_iter().collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}
