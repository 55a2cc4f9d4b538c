use crate::{
    database::db_structs::PlayerRegionRecord,
    model::structures::{period::Period, player_tag::PlayerTag, region::Region}
};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// A player's best standing for a query scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RankResolution {
    Ranked(RankedPlayer),
    /// No record in the queried region, or in any region when `region` is `None`
    Unranked { tag: PlayerTag, region: Option<Region> }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedPlayer {
    pub tag: PlayerTag,
    pub region: Region,
    pub rank: Option<i32>,
    pub rating: i32,
    pub last_update: DateTime<Utc>,
    /// The live record has not been refreshed recently, meaning the player
    /// fell off the leaderboard since it was last seen. Always false for
    /// [`Period::Yesterday`].
    pub is_stale: bool
}

/// Picks the record with the lowest rank among `records`.
///
/// Records without a rank lose to any ranked record; ties go to the earlier
/// record, which for loader output means the earlier region.
pub fn resolve_rank(
    tag: &PlayerTag,
    scope: Option<Region>,
    records: &[PlayerRegionRecord],
    period: Period,
    now: DateTime<Utc>,
    stale_after: Duration
) -> RankResolution {
    let best = records
        .iter()
        .filter_map(|record| record.current_rating().map(|rating| (record, rating)))
        .min_by_key(|(record, _)| record.rank.unwrap_or(i32::MAX));

    match best {
        Some((record, rating)) => RankResolution::Ranked(RankedPlayer {
            tag: record.tag.clone(),
            region: record.region,
            rank: record.rank,
            rating,
            last_update: record.last_update,
            is_stale: is_stale(record.last_update, period, now, stale_after)
        }),
        None => RankResolution::Unranked {
            tag: tag.clone(),
            region: scope
        }
    }
}

/// Only live records can go stale.
pub fn is_stale(last_update: DateTime<Utc>, period: Period, now: DateTime<Utc>, stale_after: Duration) -> bool {
    period.is_live() && now.signed_duration_since(last_update) > stale_after
}
