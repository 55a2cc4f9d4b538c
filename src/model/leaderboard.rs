use crate::{
    database::{error::StoreError, store::SnapshotStore, PlayerRegionRecord},
    model::{
        constants::STALE_AFTER_MINUTES,
        daily_stats::{daily_stats, DailyStats},
        population::{most_active, top_movers, top_rated_active, MoverDirection, PlayerSummary},
        rank::{resolve_rank, RankResolution},
        structures::{
            period::Period,
            player_tag::{PlayerTag, TagAliases},
            region::Region
        }
    }
};
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

/// Answers leaderboard queries against a [`SnapshotStore`].
///
/// Player-facing queries take the tag exactly as typed; it is lowercased and
/// alias-resolved here. Nothing is cached between calls.
pub struct Leaderboard<S> {
    store: S,
    aliases: TagAliases,
    stale_after: Duration
}

impl<S: SnapshotStore> Leaderboard<S> {
    pub fn new(store: S, aliases: TagAliases) -> Self {
        Leaderboard {
            store,
            aliases,
            stale_after: Duration::minutes(STALE_AFTER_MINUTES)
        }
    }

    pub fn with_stale_after(mut self, stale_after: Duration) -> Self {
        self.stale_after = stale_after;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn resolve_tag(&self, raw: &str) -> PlayerTag {
        self.aliases.resolve(raw)
    }

    async fn player_records(
        &self,
        tag: &PlayerTag,
        region: Option<Region>,
        period: Period
    ) -> Result<Vec<PlayerRegionRecord>, StoreError> {
        let records: Vec<PlayerRegionRecord> = match region {
            Some(region) => self
                .store
                .fetch_record(tag, region, period)
                .await?
                .into_iter()
                .collect(),
            None => self.store.fetch_all_regions(tag, period).await?
        };

        debug!(%tag, ?region, ?period, count = records.len(), "Loaded player records");
        Ok(records)
    }

    pub async fn rank(&self, tag: &str, region: Option<Region>, period: Period) -> Result<RankResolution, StoreError> {
        self.rank_at(tag, region, period, Utc::now()).await
    }

    /// [`Leaderboard::rank`] evaluated at `now`
    pub async fn rank_at(
        &self,
        tag: &str,
        region: Option<Region>,
        period: Period,
        now: DateTime<Utc>
    ) -> Result<RankResolution, StoreError> {
        let tag = self.resolve_tag(tag);
        let records = self.player_records(&tag, region, period).await?;

        Ok(resolve_rank(&tag, region, &records, period, now, self.stale_after))
    }

    pub async fn daily_stats(&self, tag: &str, region: Option<Region>, period: Period) -> Result<DailyStats, StoreError> {
        self.daily_stats_at(tag, region, period, Utc::now()).await
    }

    /// [`Leaderboard::daily_stats`] evaluated at `now`
    pub async fn daily_stats_at(
        &self,
        tag: &str,
        region: Option<Region>,
        period: Period,
        now: DateTime<Utc>
    ) -> Result<DailyStats, StoreError> {
        let tag = self.resolve_tag(tag);
        let records = self.player_records(&tag, region, period).await?;

        Ok(daily_stats(&tag, region, &records, period, now, self.stale_after))
    }

    pub async fn top_movers(
        &self,
        n: usize,
        direction: MoverDirection,
        period: Period
    ) -> Result<Vec<PlayerSummary>, StoreError> {
        let records = self.store.fetch_all_records(period).await?;
        top_movers(&records, n, direction)
    }

    pub async fn most_active(&self, n: usize, period: Period) -> Result<Vec<PlayerSummary>, StoreError> {
        let records = self.store.fetch_all_records(period).await?;
        most_active(&records, n)
    }

    pub async fn top_rated_active(&self, n: usize, period: Period) -> Result<Vec<PlayerSummary>, StoreError> {
        let records = self.store.fetch_all_records(period).await?;
        top_rated_active(&records, n)
    }

    /// Empties the period's table. Part of the daily rollover; must not run
    /// while a population query is reading the same table.
    pub async fn clear(&self, period: Period) -> Result<u64, StoreError> {
        let removed = self.store.clear_period(period).await?;
        info!(?period, removed, "Cleared leaderboard period");

        Ok(removed)
    }
}
