use crate::{
    database::db_structs::PlayerRegionRecord,
    model::{
        normalize::{game_count, normalize},
        rank::{resolve_rank, RankResolution},
        structures::{period::Period, player_tag::PlayerTag, region::Region}
    },
    utils::format_utils::fmt_signed
};
use chrono::{DateTime, Duration, Utc};
use itertools::Itertools;
use serde::Serialize;
use std::fmt;

/// Rating changes between consecutive snapshots of a trajectory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DeltaSeries(Vec<i32>);

impl DeltaSeries {
    /// Expects a normalized trajectory with at least two entries; anything
    /// shorter has no transitions and yields an empty series.
    pub fn from_trajectory(normalized: &[i32]) -> Self {
        DeltaSeries(normalized.windows(2).map(|pair| pair[1].saturating_sub(pair[0])).collect())
    }

    pub fn values(&self) -> &[i32] {
        &self.0
    }

    /// Each delta with an explicit sign, e.g. `+37`, `-17`
    pub fn signed(&self) -> Vec<String> {
        self.0.iter().map(|delta| fmt_signed(*delta)).collect()
    }

    pub fn net(&self) -> i32 {
        self.0.iter().fold(0i32, |net, delta| net.saturating_add(*delta))
    }
}

impl fmt::Display for DeltaSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.signed().iter().join(", "))
    }
}

/// The games a player played during a period, taken from their most active region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub tag: PlayerTag,
    pub region: Region,
    pub start: i32,
    pub end: i32,
    pub games: usize,
    pub deltas: DeltaSeries
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DailyStats {
    Unranked { tag: PlayerTag, region: Option<Region> },
    /// On a leaderboard, but no rating change was recorded
    NoGames { standing: RankResolution },
    Played(Session)
}

/// Builds the period summary from the record with the longest normalized
/// trajectory. The current standing (lowest rank) is only consulted when no
/// games were played.
pub fn daily_stats(
    tag: &PlayerTag,
    scope: Option<Region>,
    records: &[PlayerRegionRecord],
    period: Period,
    now: DateTime<Utc>,
    stale_after: Duration
) -> DailyStats {
    if records.is_empty() {
        return DailyStats::Unranked {
            tag: tag.clone(),
            region: scope
        };
    }

    let mut longest: Option<(&PlayerRegionRecord, Vec<i32>)> = None;
    for record in records {
        let normalized = normalize(&record.ratings);
        // Strictly longer, so ties stay with the earlier region
        if longest.as_ref().map_or(true, |(_, best)| normalized.len() > best.len()) {
            longest = Some((record, normalized));
        }
    }

    match longest {
        Some((record, trajectory)) if trajectory.len() > 1 => DailyStats::Played(Session {
            tag: record.tag.clone(),
            region: record.region,
            start: trajectory[0],
            end: trajectory[trajectory.len() - 1],
            games: game_count(&trajectory),
            deltas: DeltaSeries::from_trajectory(&trajectory)
        }),
        _ => DailyStats::NoGames {
            standing: resolve_rank(tag, scope, records, period, now, stale_after)
        }
    }
}
