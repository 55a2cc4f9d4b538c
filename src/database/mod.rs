pub mod db;
pub mod db_structs;
pub mod error;
pub mod memory;
pub mod store;

pub use db::DbClient;
pub use db_structs::PlayerRegionRecord;
pub use error::StoreError;
pub use memory::MemoryStore;
pub use store::{SnapshotStore, TableNames};
