use serde::{Deserialize, Serialize};

/// Which leaderboard table a query reads from.
///
/// `Today` is the live table that ingestion keeps appending to; `Yesterday`
/// is the frozen copy taken at the last rollover.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Period {
    #[default]
    Today,
    Yesterday
}

impl Period {
    pub fn from_yesterday_flag(yesterday: bool) -> Self {
        if yesterday {
            Period::Yesterday
        } else {
            Period::Today
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Period::Today)
    }
}
