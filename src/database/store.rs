use super::{db_structs::PlayerRegionRecord, error::StoreError};
use crate::model::structures::{period::Period, player_tag::PlayerTag, region::Region};
use strum::IntoEnumIterator;

/// Read access to the leaderboard tables, plus the one write the rollover
/// job is allowed to request.
///
/// A missing player/region pair is `Ok(None)`, not an error. Every record
/// handed out has a non-empty `ratings` list; anything else is reported as
/// [`StoreError::MalformedRecord`].
#[allow(async_fn_in_trait)]
pub trait SnapshotStore {
    async fn fetch_record(
        &self,
        tag: &PlayerTag,
        region: Region,
        period: Period
    ) -> Result<Option<PlayerRegionRecord>, StoreError>;

    /// Records for `tag` in every region it appears in, in [`Region`] order.
    async fn fetch_all_regions(&self, tag: &PlayerTag, period: Period) -> Result<Vec<PlayerRegionRecord>, StoreError> {
        let mut records = Vec::new();

        for region in Region::iter() {
            if let Some(record) = self.fetch_record(tag, region, period).await? {
                records.push(record);
            }
        }

        Ok(records)
    }

    /// Full scan of the period's table, in scan order.
    async fn fetch_all_records(&self, period: Period) -> Result<Vec<PlayerRegionRecord>, StoreError>;

    /// Deletes every record of the period. Returns how many were removed.
    async fn clear_period(&self, period: Period) -> Result<u64, StoreError>;
}

/// Rejects records that break the non-empty ratings invariant.
pub(crate) fn validate_record(record: PlayerRegionRecord) -> Result<PlayerRegionRecord, StoreError> {
    if record.ratings.is_empty() {
        return Err(StoreError::MalformedRecord {
            tag: record.tag.to_string(),
            region: record.region.to_string(),
            reason: "ratings list is empty"
        });
    }

    Ok(record)
}

/// Names of the live and frozen leaderboard tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableNames {
    today: String,
    yesterday: String
}

impl Default for TableNames {
    fn default() -> Self {
        TableNames {
            today: "rating_records".to_string(),
            yesterday: "yesterday_rating_records".to_string()
        }
    }
}

impl TableNames {
    /// Both names are interpolated into SQL, so only plain lowercase
    /// identifiers are accepted.
    pub fn new(today: &str, yesterday: &str) -> Result<Self, StoreError> {
        Ok(TableNames {
            today: Self::validate(today)?,
            yesterday: Self::validate(yesterday)?
        })
    }

    pub fn for_period(&self, period: Period) -> &str {
        match period {
            Period::Today => &self.today,
            Period::Yesterday => &self.yesterday
        }
    }

    fn validate(name: &str) -> Result<String, StoreError> {
        let valid = !name.is_empty()
            && !name.starts_with(|c: char| c.is_ascii_digit())
            && name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');

        if valid {
            Ok(name.to_string())
        } else {
            Err(StoreError::InvalidTableName(name.to_string()))
        }
    }
}
