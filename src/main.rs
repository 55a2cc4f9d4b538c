use bg_leaderboard::{
    args::{Args, Command},
    config::LeaderboardConfig,
    database::{error::StoreError, DbClient},
    model::{
        population::MoverDirection,
        structures::period::Period,
        text::{daily_stats_text, rank_text, summaries_text},
        Leaderboard
    }
};
use clap::Parser;
use serde::Serialize;
use std::process::ExitCode;
use thiserror::Error;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Failed to serialize result: {0}")]
    Json(#[from] serde_json::Error)
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .with_writer(std::io::stderr)
        .init();

    let config = match LeaderboardConfig::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let client = match DbClient::connect(&args.connection_string, config.tables.clone()).await {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            error!("Application cannot start without a valid database connection");
            return ExitCode::FAILURE;
        }
    };

    let leaderboard = Leaderboard::new(client, config.aliases).with_stale_after(config.stale_after);

    match run(&leaderboard, &args).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Query failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(leaderboard: &Leaderboard<DbClient>, args: &Args) -> Result<String, RunError> {
    let output = match &args.command {
        Command::Rank(query) => {
            let period = Period::from_yesterday_flag(query.yesterday);
            let result = leaderboard.rank(&query.tag, query.region, period).await?;
            render(args.json, &result, || rank_text(&result, period))?
        }
        Command::Stats(query) => {
            let period = Period::from_yesterday_flag(query.yesterday);
            let result = leaderboard.daily_stats(&query.tag, query.region, period).await?;
            render(args.json, &result, || daily_stats_text(&result, period))?
        }
        Command::Climbers(query) | Command::Fallers(query) => {
            let direction = match args.command {
                Command::Climbers(_) => MoverDirection::Climbers,
                _ => MoverDirection::Fallers
            };
            let period = Period::from_yesterday_flag(query.yesterday);
            let result = leaderboard.top_movers(query.count, direction, period).await?;
            render(args.json, &result, || summaries_text(&result))?
        }
        Command::Active(query) => {
            let period = Period::from_yesterday_flag(query.yesterday);
            let result = leaderboard.most_active(query.count, period).await?;
            render(args.json, &result, || summaries_text(&result))?
        }
        Command::Top(query) => {
            let period = Period::from_yesterday_flag(query.yesterday);
            let result = leaderboard.top_rated_active(query.count, period).await?;
            render(args.json, &result, || summaries_text(&result))?
        }
        Command::Clear { yesterday } => {
            let removed = leaderboard.clear(Period::from_yesterday_flag(*yesterday)).await?;
            format!("Removed {} records", removed)
        }
    };

    Ok(output)
}

fn render<T: Serialize>(json: bool, result: &T, text: impl FnOnce() -> String) -> Result<String, serde_json::Error> {
    if json {
        serde_json::to_string_pretty(result)
    } else {
        Ok(text())
    }
}
