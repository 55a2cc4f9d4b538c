use crate::model::structures::{player_tag::PlayerTag, region::Region};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of a leaderboard table: everything seen for a player in one region
/// during the current period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRegionRecord {
    pub tag: PlayerTag,
    pub region: Region,
    /// Lower is better. `None` when the player was seen but is not ranked.
    pub rank: Option<i32>,
    /// Chronological rating snapshots. Never empty for a stored record.
    pub ratings: Vec<i32>,
    pub last_update: DateTime<Utc>
}

impl PlayerRegionRecord {
    /// Rating at the start of the period
    pub fn first_rating(&self) -> Option<i32> {
        self.ratings.first().copied()
    }

    /// Most recent rating snapshot
    pub fn current_rating(&self) -> Option<i32> {
        self.ratings.last().copied()
    }
}
