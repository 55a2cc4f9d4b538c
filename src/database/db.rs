use super::{
    db_structs::PlayerRegionRecord,
    error::StoreError,
    store::{validate_record, SnapshotStore, TableNames}
};
use crate::model::structures::{period::Period, player_tag::PlayerTag, region::Region};
use chrono::{DateTime, Utc};
use futures::{pin_mut, TryStreamExt};
use postgres_types::ToSql;
use itertools::Itertools;
use std::{str::FromStr, sync::Arc};
use strum::IntoEnumIterator;
use tokio_postgres::{Client, NoTls, Row};
use tracing::{debug, error, info};

const RECORD_COLUMNS: &str = "player_name, region, rank, ratings, last_update";

/// Region codes are matched case-insensitively, the same way [`Region`] parses them.
const REGION_MATCH: &str = "upper(region)";

#[derive(Clone)]
pub struct DbClient {
    client: Arc<Client>,
    tables: TableNames
}

impl DbClient {
    // Connect to the database and return a DbClient instance
    pub async fn connect(connection_str: &str, tables: TableNames) -> Result<Self, StoreError> {
        let (client, connection) = tokio_postgres::connect(connection_str, NoTls).await?;

        // Spawn the connection object to run in the background
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                error!("connection error: {}", e);
            }
        });

        info!(
            today = tables.for_period(Period::Today),
            yesterday = tables.for_period(Period::Yesterday),
            "Connected to leaderboard database"
        );

        Ok(DbClient {
            client: Arc::new(client),
            tables
        })
    }

    fn record_from_row(row: &Row) -> Result<PlayerRegionRecord, StoreError> {
        let tag: String = row.try_get("player_name")?;
        let region_code: String = row.try_get("region")?;

        let region = Region::from_str(&region_code).map_err(|_| StoreError::MalformedRecord {
            tag: tag.clone(),
            region: region_code.clone(),
            reason: "unknown region"
        })?;

        validate_record(PlayerRegionRecord {
            tag: PlayerTag::new(tag),
            region,
            rank: row.try_get::<_, Option<i32>>("rank")?,
            ratings: row.try_get::<_, Vec<i32>>("ratings")?,
            last_update: row.try_get::<_, DateTime<Utc>>("last_update")?
        })
    }

    // Access the underlying Client
    pub fn client(&self) -> Arc<Client> {
        Arc::clone(&self.client)
    }
}

impl SnapshotStore for DbClient {
    async fn fetch_record(
        &self,
        tag: &PlayerTag,
        region: Region,
        period: Period
    ) -> Result<Option<PlayerRegionRecord>, StoreError> {
        let query = format!(
            "SELECT {} FROM {} WHERE player_name = $1 AND {} = $2",
            RECORD_COLUMNS,
            self.tables.for_period(period),
            REGION_MATCH
        );

        let row = self
            .client
            .query_opt(query.as_str(), &[&tag.as_str(), &region.code()])
            .await?;

        debug!(%tag, %region, ?period, found = row.is_some(), "Fetched player record");
        row.as_ref().map(Self::record_from_row).transpose()
    }

    /// One query for all supported regions. Rows in any other region are
    /// not selected. Rows are re-ordered into [`Region`] order since the
    /// table has no notion of it.
    async fn fetch_all_regions(&self, tag: &PlayerTag, period: Period) -> Result<Vec<PlayerRegionRecord>, StoreError> {
        let query = format!(
            "SELECT {} FROM {} WHERE player_name = $1 AND {} = ANY($2)",
            RECORD_COLUMNS,
            self.tables.for_period(period),
            REGION_MATCH
        );
        let regions = Region::iter().map(|r| r.code()).collect_vec();

        let rows = self.client.query(query.as_str(), &[&tag.as_str(), &regions]).await?;
        let mut records = rows.iter().map(Self::record_from_row).collect::<Result<Vec<_>, _>>()?;
        records.sort_by_key(|r| r.region);

        debug!(%tag, ?period, regions = records.len(), "Fetched player records across regions");
        Ok(records)
    }

    async fn fetch_all_records(&self, period: Period) -> Result<Vec<PlayerRegionRecord>, StoreError> {
        let table = self.tables.for_period(period);
        let query = format!("SELECT {} FROM {}", RECORD_COLUMNS, table);
        let params: [&dyn ToSql; 0] = [];

        // Streamed so a large table is decoded row by row
        let rows = self.client.query_raw(query.as_str(), params).await?;
        pin_mut!(rows);

        let mut records = Vec::new();
        while let Some(row) = rows.try_next().await? {
            records.push(Self::record_from_row(&row)?);
        }

        debug!(table, count = records.len(), "Scanned leaderboard table");
        Ok(records)
    }

    async fn clear_period(&self, period: Period) -> Result<u64, StoreError> {
        let table = self.tables.for_period(period);
        let removed = self
            .client
            .execute(format!("DELETE FROM {}", table).as_str(), &[])
            .await?;

        info!("Cleared {} records from the {} table", removed, table);
        Ok(removed)
    }
}
