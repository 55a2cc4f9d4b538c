//! Rating history analytics: noise removal over snapshot trajectories,
//! per-player standings and sessions, and population-wide rankings.
//!
//! Everything except [`leaderboard`] is pure and works on records that have
//! already been loaded.

pub mod constants;
pub mod daily_stats;
pub mod leaderboard;
pub mod normalize;
pub mod population;
pub mod rank;
pub mod structures;
pub mod text;

pub use leaderboard::Leaderboard;
