pub mod period;
pub mod player_tag;
pub mod region;
