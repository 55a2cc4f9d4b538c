/// A live record older than this is reported as having dropped off the leaderboard.
pub const STALE_AFTER_MINUTES: i64 = 30;

/// Number of entries population views return when the caller does not ask for a count
pub const DEFAULT_TOP_COUNT: usize = 5;
