use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use trivia_api::db;
use trivia_api::seed::{export_data, import_data};
use trivia_api::telemetry::init_tracing;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Database path
    db_path: PathBuf,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import categories.csv and questions.csv from a directory
    Import { path: PathBuf },
    /// Export categories and questions as csv into a directory
    Export { path: PathBuf },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let db_path = cli.db_path.display().to_string();
    let pool = db::establish_connection(&db_path)
        .await
        .with_context(|| format!("Cannot connect to {db_path}"))?;
    db::run_migrations(&pool).await?;
    match cli.command {
        Commands::Export { path } => export_data(&pool, &path).await.context("Cannot export"),
        Commands::Import { path } => import_data(&pool, &path).await.context("Cannot import"),
    }
}
