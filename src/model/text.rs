//! Chat-ready phrasing for query results.

use crate::{
    model::{
        daily_stats::{DailyStats, Session},
        population::PlayerSummary,
        rank::RankResolution,
        structures::{period::Period, player_tag::PlayerTag, region::Region}
    },
    utils::format_utils::fmt_signed
};
use itertools::Itertools;

fn unranked_text(tag: &PlayerTag, region: Option<Region>) -> String {
    match region {
        Some(region) => format!("{} is not on {} leaderboards", tag, region),
        None => format!("{} is not on any BG leaderboards", tag)
    }
}

pub fn rank_text(resolution: &RankResolution, period: Period) -> String {
    match resolution {
        RankResolution::Unranked { tag, region } => unranked_text(tag, *region),
        RankResolution::Ranked(player) if player.is_stale => format!(
            "{} dropped from the {} leaderboards but was {} mmr earlier today",
            player.tag, player.region, player.rating
        ),
        RankResolution::Ranked(player) => {
            let verb = if period.is_live() { "is" } else { "was" };
            let rank = player.rank.map_or("unranked".to_string(), |rank| format!("rank {}", rank));

            format!("{} {} {} in {} with {} mmr", player.tag, verb, rank, player.region, player.rating)
        }
    }
}

fn session_text(session: &Session, period: Period) -> String {
    let (day, now, record) = match period {
        Period::Today => ("today", "is now", "is"),
        Period::Yesterday => ("yesterday", "ended at", "was")
    };

    format!(
        "{} started {} at {} in {} and {} {} with {} games played. Their record {}: {}",
        session.tag, day, session.start, session.region, now, session.end, session.games, record, session.deltas
    )
}

pub fn daily_stats_text(stats: &DailyStats, period: Period) -> String {
    match stats {
        DailyStats::Unranked { tag, region } => unranked_text(tag, *region),
        DailyStats::NoGames { standing } => {
            let no_games = match period {
                Period::Today => "has not played any games today",
                Period::Yesterday => "did not play any games yesterday"
            };

            format!("{} and {}", rank_text(standing, period), no_games)
        }
        DailyStats::Played(session) => session_text(session, period)
    }
}

/// One line per entry, numbered from 1: `1. lii (US): 14000 -> 14250 (+250), 12 games`
pub fn summaries_text(summaries: &[PlayerSummary]) -> String {
    summaries
        .iter()
        .enumerate()
        .map(|(i, s)| {
            format!(
                "{}. {} ({}): {} -> {} ({}), {} games",
                i + 1,
                s.tag,
                s.region,
                s.start,
                s.end,
                fmt_signed(s.change),
                s.games
            )
        })
        .join("\n")
}
