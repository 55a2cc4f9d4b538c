use crate::{
    database::{db_structs::PlayerRegionRecord, error::StoreError},
    model::{
        normalize::{game_count, normalize},
        structures::{player_tag::PlayerTag, region::Region}
    }
};
use rayon::prelude::*;
use serde::Serialize;
use std::cmp::Reverse;

/// Per-record summary used by the population views. Every field is derived
/// from the normalized trajectory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSummary {
    pub tag: PlayerTag,
    pub region: Region,
    pub start: i32,
    pub end: i32,
    pub change: i32,
    pub games: usize
}

impl PlayerSummary {
    /// Fails with [`StoreError::MalformedRecord`] for a record with no ratings.
    pub fn from_record(record: &PlayerRegionRecord) -> Result<Self, StoreError> {
        let normalized = normalize(&record.ratings);
        let (Some(&start), Some(&end)) = (normalized.first(), normalized.last()) else {
            return Err(StoreError::MalformedRecord {
                tag: record.tag.to_string(),
                region: record.region.to_string(),
                reason: "ratings list is empty"
            });
        };

        Ok(PlayerSummary {
            tag: record.tag.clone(),
            region: record.region,
            start,
            end,
            change: end.saturating_sub(start),
            games: game_count(&normalized)
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoverDirection {
    Climbers,
    Fallers
}

/// Summaries in scan order. Sorting afterwards is stable, so scan order
/// breaks ties. One malformed record fails the whole view.
fn summarize(records: &[PlayerRegionRecord]) -> Result<Vec<PlayerSummary>, StoreError> {
    records.par_iter().map(PlayerSummary::from_record).collect()
}

fn top(mut summaries: Vec<PlayerSummary>, n: usize) -> Vec<PlayerSummary> {
    summaries.truncate(n);
    summaries
}

/// Largest gains (or losses) over the period.
pub fn top_movers(
    records: &[PlayerRegionRecord],
    n: usize,
    direction: MoverDirection
) -> Result<Vec<PlayerSummary>, StoreError> {
    let mut summaries = summarize(records)?;

    match direction {
        MoverDirection::Climbers => summaries.sort_by_key(|s| Reverse(s.change)),
        MoverDirection::Fallers => summaries.sort_by_key(|s| s.change)
    }

    Ok(top(summaries, n))
}

/// Most games played over the period.
pub fn most_active(records: &[PlayerRegionRecord], n: usize) -> Result<Vec<PlayerSummary>, StoreError> {
    let mut summaries = summarize(records)?;
    summaries.sort_by_key(|s| Reverse(s.games));

    Ok(top(summaries, n))
}

/// Highest current rating among players who played at least one game.
pub fn top_rated_active(records: &[PlayerRegionRecord], n: usize) -> Result<Vec<PlayerSummary>, StoreError> {
    let mut summaries = summarize(records)?;
    summaries.retain(|s| s.games >= 1);
    summaries.sort_by_key(|s| Reverse(s.end));

    Ok(top(summaries, n))
}
