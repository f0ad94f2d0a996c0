use cw_storage_plus::{Item, Map};
use incentives_std::objects::Gauge;

/// Resolution, in seconds, of the start-time buckets of upcoming gauges.
pub const UPCOMING_BUCKET_RESOLUTION_SECS: u64 = 1;

/// Gauge records by id. Finished gauges are kept forever.
pub const GAUGES: Map<u64, Gauge> = Map::new("gauge");
/// Id the next created gauge receives.
pub const NEXT_GAUGE_ID: Item<u64> = Item::new("next_gauge_id");

/// Upcoming gauge ids keyed by (start time bucket, denom, min lock duration).
pub const UPCOMING_REFS: Map<(u64, &str, u64), Vec<u64>> = Map::new("ref_upcoming");
/// Active gauge ids keyed by (denom, min lock duration).
pub const ACTIVE_REFS: Map<(&str, u64), Vec<u64>> = Map::new("ref_active");
/// Finished gauge ids keyed by (denom, min lock duration).
pub const FINISHED_REFS: Map<(&str, u64), Vec<u64>> = Map::new("ref_finished");

/// Epoch number in which each gauge was last paid.
pub const LAST_DISTRIBUTED_EPOCH: Map<u64, u64> = Map::new("last_distributed_epoch");
