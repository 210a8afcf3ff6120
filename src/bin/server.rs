use anyhow::Context;
use trivia_api::{db, server::app::run_server, settings::Settings, telemetry::init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let settings = Settings::load().context("Failed to load settings")?;
    let pool = db::establish_connection(&settings.db_path)
        .await
        .with_context(|| format!("Cannot open database at {}", settings.db_path))?;

    tracing::info!("Running db migrations...");
    db::run_migrations(&pool).await?;

    run_server(pool, &settings.listen_addr).await
}
