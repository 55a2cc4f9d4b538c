use bg_leaderboard::{
    database::{error::StoreError, DbClient, SnapshotStore, TableNames},
    model::{
        daily_stats::DailyStats,
        population::MoverDirection,
        rank::RankResolution,
        structures::{period::Period, player_tag::{PlayerTag, TagAliases}, region::Region},
        Leaderboard
    },
    utils::test_utils::{generate_record, reference_time}
};
use serial_test::serial;

use super::test_helpers::{table_for, TestDatabase};
use crate::common::init_test_env;

async fn seeded_client() -> (TestDatabase, DbClient) {
    init_test_env();
    let test_db = TestDatabase::new().await.expect("Failed to create test database");
    test_db.seed_test_data().await.expect("Failed to seed test data");

    let client = DbClient::connect(&test_db.connection_string, TableNames::default())
        .await
        .expect("Failed to connect");

    (test_db, client)
}

#[tokio::test]
#[serial]
#[ignore = "requires docker"]
async fn test_fetch_record() {
    let (_db, client) = seeded_client().await;

    let record = client
        .fetch_record(&PlayerTag::new("lii"), Region::US, Period::Today)
        .await
        .unwrap()
        .expect("Expected lii in US");

    assert_eq!(record.rank, Some(50));
    assert_eq!(record.ratings, vec![14000, 14040, 14000, 14100]);
    assert_eq!(record.last_update, reference_time());

    let missing = client
        .fetch_record(&PlayerTag::new("lii"), Region::AP, Period::Today)
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
#[serial]
#[ignore = "requires docker"]
async fn test_fetch_all_regions_ordered() {
    let (_db, client) = seeded_client().await;

    let records = client
        .fetch_all_regions(&PlayerTag::new("lii"), Period::Today)
        .await
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].region, Region::US);
    assert_eq!(records[1].region, Region::EU);

    let yesterday = client
        .fetch_all_regions(&PlayerTag::new("lii"), Period::Yesterday)
        .await
        .unwrap();
    assert_eq!(yesterday.len(), 1);
    assert_eq!(yesterday[0].rank, Some(40));
}

#[tokio::test]
#[serial]
#[ignore = "requires docker"]
async fn test_fetch_all_records() {
    let (_db, client) = seeded_client().await;

    assert_eq!(client.fetch_all_records(Period::Today).await.unwrap().len(), 4);
    assert_eq!(client.fetch_all_records(Period::Yesterday).await.unwrap().len(), 1);
}

#[tokio::test]
#[serial]
#[ignore = "requires docker"]
async fn test_unranked_record_has_no_rank() {
    let (_db, client) = seeded_client().await;

    let record = client
        .fetch_record(&PlayerTag::new("foreversleep"), Region::EU, Period::Today)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(record.rank, None);
}

#[tokio::test]
#[serial]
#[ignore = "requires docker"]
async fn test_malformed_rows_rejected() {
    let (db, client) = seeded_client().await;

    db.insert_record(
        table_for(Period::Yesterday),
        &generate_record("broken", Region::US, Some(3), &[], 0)
    )
    .await
    .unwrap();

    let result = client.fetch_all_records(Period::Yesterday).await;
    assert!(matches!(result, Err(StoreError::MalformedRecord { .. })));

    let raw = db.get_client().await.unwrap();
    raw.execute(
        "INSERT INTO rating_records (player_name, region, rank, ratings, last_update) \
         VALUES ('zoro', 'CN', 1, '{100}', now())",
        &[]
    )
    .await
    .unwrap();

    let result = client.fetch_all_records(Period::Today).await;
    assert!(matches!(result, Err(StoreError::MalformedRecord { .. })));
}

#[tokio::test]
#[serial]
#[ignore = "requires docker"]
async fn test_clear_period() {
    let (_db, client) = seeded_client().await;

    assert_eq!(client.clear_period(Period::Today).await.unwrap(), 4);
    assert!(client.fetch_all_records(Period::Today).await.unwrap().is_empty());
    assert_eq!(client.fetch_all_records(Period::Yesterday).await.unwrap().len(), 1);
}

#[tokio::test]
#[serial]
#[ignore = "requires docker"]
async fn test_leaderboard_over_postgres() {
    let (_db, client) = seeded_client().await;
    let leaderboard = Leaderboard::new(client, TagAliases::default());

    match leaderboard
        .rank_at("LII", None, Period::Today, reference_time())
        .await
        .unwrap()
    {
        RankResolution::Ranked(player) => {
            assert_eq!(player.region, Region::EU);
            assert_eq!(player.rank, Some(12));
        }
        other => panic!("Expected a ranked player, got {:?}", other)
    }

    match leaderboard
        .daily_stats_at("sleepy", None, Period::Today, reference_time())
        .await
        .unwrap()
    {
        DailyStats::Played(session) => {
            assert_eq!(session.tag, PlayerTag::new("foreversleep"));
            assert_eq!(session.games, 2);
            assert_eq!(session.deltas.to_string(), "+100, -50");
        }
        other => panic!("Expected a session, got {:?}", other)
    }

    let fallers = leaderboard
        .top_movers(1, MoverDirection::Fallers, Period::Today)
        .await
        .unwrap();
    assert_eq!(fallers[0].tag, PlayerTag::new("dog"));
    assert_eq!(fallers[0].change, -100);
}

#[tokio::test]
#[serial]
#[ignore = "requires docker"]
async fn test_player_lookup_ignores_unsupported_regions() {
    let (db, client) = seeded_client().await;

    let raw = db.get_client().await.unwrap();
    raw.batch_execute(
        "INSERT INTO rating_records (player_name, region, rank, ratings, last_update) \
         VALUES ('lii', 'CN', 1, '{100}', now()); \
         INSERT INTO rating_records (player_name, region, rank, ratings, last_update) \
         VALUES ('lii', 'ap', 7, '{11000, 11050}', now())"
    )
    .await
    .unwrap();

    let records = client
        .fetch_all_regions(&PlayerTag::new("lii"), Period::Today)
        .await
        .unwrap();
    let regions: Vec<Region> = records.iter().map(|r| r.region).collect();
    assert_eq!(regions, vec![Region::US, Region::EU, Region::AP]);

    // Lowercase codes match a single-region lookup the same way
    let ap = client
        .fetch_record(&PlayerTag::new("lii"), Region::AP, Period::Today)
        .await
        .unwrap()
        .expect("Expected lii in AP");
    assert_eq!(ap.rank, Some(7));

    let leaderboard = Leaderboard::new(client, TagAliases::default());
    match leaderboard
        .rank_at("lii", None, Period::Today, reference_time())
        .await
        .unwrap()
    {
        RankResolution::Ranked(player) => {
            assert_eq!(player.region, Region::AP);
            assert_eq!(player.rank, Some(7));
        }
        other => panic!("Expected a ranked player, got {:?}", other)
    }
}
