use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Battlegrounds leaderboard regions, declared in canonical iteration order.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumString, Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Region {
    US,
    EU,
    AP
}

impl Region {
    /// The code stored in the `region` column
    pub fn code(&self) -> &'static str {
        match self {
            Region::US => "US",
            Region::EU => "EU",
            Region::AP => "AP"
        }
    }
}
