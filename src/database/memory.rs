use super::{
    db_structs::PlayerRegionRecord,
    error::StoreError,
    store::{validate_record, SnapshotStore}
};
use crate::model::structures::{period::Period, player_tag::PlayerTag, region::Region};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::info;

/// In-process [`SnapshotStore`]. Records are kept in insertion order, which
/// stands in for the scan order of a real table.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<Period, Vec<PlayerRegionRecord>>>
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(today: Vec<PlayerRegionRecord>, yesterday: Vec<PlayerRegionRecord>) -> Self {
        let tables = HashMap::from([(Period::Today, today), (Period::Yesterday, yesterday)]);

        MemoryStore {
            tables: RwLock::new(tables)
        }
    }

    /// Inserts or replaces the record keyed by (tag, region).
    pub async fn upsert(&self, period: Period, record: PlayerRegionRecord) {
        let mut tables = self.tables.write().await;
        let table = tables.entry(period).or_default();

        match table
            .iter_mut()
            .find(|r| r.tag == record.tag && r.region == record.region)
        {
            Some(existing) => *existing = record,
            None => table.push(record)
        }
    }
}

impl SnapshotStore for MemoryStore {
    async fn fetch_record(
        &self,
        tag: &PlayerTag,
        region: Region,
        period: Period
    ) -> Result<Option<PlayerRegionRecord>, StoreError> {
        let tables = self.tables.read().await;

        tables
            .get(&period)
            .and_then(|table| table.iter().find(|r| &r.tag == tag && r.region == region))
            .cloned()
            .map(validate_record)
            .transpose()
    }

    async fn fetch_all_records(&self, period: Period) -> Result<Vec<PlayerRegionRecord>, StoreError> {
        let tables = self.tables.read().await;

        tables
            .get(&period)
            .map(|table| table.iter().cloned().map(validate_record).collect::<Result<Vec<_>, _>>())
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn clear_period(&self, period: Period) -> Result<u64, StoreError> {
        let mut tables = self.tables.write().await;
        let removed = tables.remove(&period).map_or(0, |table| table.len() as u64);

        info!("Cleared {} in-memory records for {:?}", removed, period);
        Ok(removed)
    }
}
