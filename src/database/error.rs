use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] tokio_postgres::Error),

    #[error("Malformed record for '{tag}' in region '{region}': {reason}")]
    MalformedRecord {
        tag: String,
        region: String,
        reason: &'static str
    },

    #[error("Invalid table name '{0}'")]
    InvalidTableName(String)
}
