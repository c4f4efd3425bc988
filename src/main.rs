use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use school_activities::{database, web, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env();

    info!("Connecting to database: {}", config.database_url);
    let pool = database::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;

    // Schema and seed data must be in place before the listener accepts traffic.
    let report = database::init(&pool)
        .await
        .context("failed to initialise database")?;
    if report.seeded {
        info!(
            activities = report.activities,
            signups = report.signups,
            "database seeded"
        );
    }

    let app = web::router(pool.clone(), &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr()))?;
    info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;

    pool.close().await;
    Ok(())
}
