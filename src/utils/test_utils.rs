use crate::{
    database::db_structs::PlayerRegionRecord,
    model::structures::{player_tag::PlayerTag, region::Region}
};
use chrono::{DateTime, Duration, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use strum::IntoEnumIterator;

/// Fixed evaluation time so staleness checks are reproducible
pub fn reference_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-03-24T18:00:00Z")
        .expect("valid reference time")
        .with_timezone(&Utc)
}

/// A record last updated `minutes_ago` minutes before [`reference_time`]
pub fn generate_record(
    tag: &str,
    region: Region,
    rank: Option<i32>,
    ratings: &[i32],
    minutes_ago: i64
) -> PlayerRegionRecord {
    PlayerRegionRecord {
        tag: PlayerTag::new(tag),
        region,
        rank,
        ratings: ratings.to_vec(),
        last_update: reference_time() - Duration::minutes(minutes_ago)
    }
}

/// Generates `n` records spread over all regions with random-walk rating
/// histories. Seeded, so the same `n` always yields the same population.
pub fn generate_population(n: usize) -> Vec<PlayerRegionRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let regions = Region::iter().collect::<Vec<_>>();
    let mut records = Vec::with_capacity(n);

    for i in 0..n {
        let region = regions[i % regions.len()];
        let games = rng.random_range(0..40);
        let mut rating = rng.random_range(6000..16000);
        let mut ratings = Vec::with_capacity(games + 1);
        ratings.push(rating);

        for _ in 0..games {
            // Occasionally repeat an earlier snapshot to mimic polling flicker
            if ratings.len() >= 2 && rng.random_bool(0.1) {
                rating = ratings[ratings.len() - 2];
            } else {
                rating += rng.random_range(-120..=120);
            }
            ratings.push(rating);
        }

        records.push(PlayerRegionRecord {
            tag: PlayerTag::new(format!("player{}", i)),
            region,
            rank: Some((i / regions.len()) as i32 + 1),
            ratings,
            last_update: reference_time() - Duration::minutes(rng.random_range(0..60))
        });
    }

    records
}
