use crate::{
    args::Args,
    database::{error::StoreError, store::TableNames},
    model::structures::player_tag::{AliasError, TagAliases}
};
use chrono::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Tables(#[from] StoreError),

    #[error(transparent)]
    Aliases(#[from] AliasError),

    #[error("Stale threshold must be positive, got {0} minutes")]
    StaleThreshold(i64)
}

/// Everything the query service needs besides a database connection.
#[derive(Debug, Clone)]
pub struct LeaderboardConfig {
    pub tables: TableNames,
    pub aliases: TagAliases,
    pub stale_after: Duration
}

impl LeaderboardConfig {
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        if args.stale_minutes <= 0 {
            return Err(ConfigError::StaleThreshold(args.stale_minutes));
        }

        let aliases = match &args.aliases_file {
            Some(path) => TagAliases::from_file(path)?,
            None => TagAliases::default()
        };

        Ok(LeaderboardConfig {
            tables: TableNames::new(&args.today_table, &args.yesterday_table)?,
            aliases,
            stale_after: Duration::minutes(args.stale_minutes)
        })
    }
}
