use bg_leaderboard::{
    database::PlayerRegionRecord,
    model::structures::{period::Period, region::Region},
    utils::test_utils::generate_record
};
use lazy_static::lazy_static;
use postgres_types::ToSql;
use std::sync::Arc;
use testcontainers::{clients::Cli, Container};
use testcontainers_modules::postgres::Postgres;
use tokio_postgres::{Client, NoTls};

pub struct TestDatabase {
    pub connection_string: String,
    _container: Container<'static, Postgres>
}

impl TestDatabase {
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        // Create a static CLI instance
        lazy_static! {
            static ref DOCKER: Arc<Cli> = Arc::new(Cli::default());
        }

        // Start PostgreSQL container
        let container = DOCKER.run(Postgres::default());
        let port = container.get_host_port_ipv4(5432);

        let connection_string = format!(
            "host=localhost port={} user=postgres password=postgres dbname=postgres",
            port
        );

        let client = Self::connect(&connection_string).await?;
        client.batch_execute(include_str!("schema.sql")).await?;

        Ok(TestDatabase {
            connection_string,
            _container: container
        })
    }

    async fn connect(connection_string: &str) -> Result<Client, Box<dyn std::error::Error>> {
        let (client, connection) = tokio_postgres::connect(connection_string, NoTls).await?;

        // Spawn the connection handler
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                eprintln!("Database connection error: {}", e);
            }
        });

        Ok(client)
    }

    pub async fn get_client(&self) -> Result<Client, Box<dyn std::error::Error>> {
        Self::connect(&self.connection_string).await
    }

    pub async fn insert_record(
        &self,
        table: &str,
        record: &PlayerRegionRecord
    ) -> Result<(), Box<dyn std::error::Error>> {
        let client = self.get_client().await?;
        let query = format!(
            "INSERT INTO {} (player_name, region, rank, ratings, last_update) VALUES ($1, $2, $3, $4, $5)",
            table
        );
        let values: &[&(dyn ToSql + Sync)] = &[
            &record.tag.as_str(),
            &record.region.code(),
            &record.rank,
            &record.ratings,
            &record.last_update
        ];

        client.execute(query.as_str(), values).await?;
        Ok(())
    }

    /// Seeds both periods:
    /// - today: lii in US and EU, dog in AP, sleepy in EU with flicker
    /// - yesterday: lii in US
    pub async fn seed_test_data(&self) -> Result<(), Box<dyn std::error::Error>> {
        let today = vec![
            generate_record("lii", Region::US, Some(50), &[14000, 14040, 14000, 14100], 0),
            generate_record("lii", Region::EU, Some(12), &[15000], 5),
            generate_record("dog", Region::AP, Some(1), &[16000, 15900], 10),
            generate_record("foreversleep", Region::EU, None, &[9000, 9100, 9000, 9100, 9050], 45),
        ];
        let yesterday = vec![generate_record("lii", Region::US, Some(40), &[13800, 14000], 600)];

        for record in &today {
            self.insert_record(table_for(Period::Today), record).await?;
        }

        for record in &yesterday {
            self.insert_record(table_for(Period::Yesterday), record).await?;
        }

        Ok(())
    }
}

pub fn table_for(period: Period) -> &'static str {
    match period {
        Period::Today => "rating_records",
        Period::Yesterday => "yesterday_rating_records"
    }
}
