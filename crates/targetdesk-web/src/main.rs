//! TargetDesk web server.
//!
//! Run with: cargo run -p targetdesk-web

use tracing::info;
use tracing_subscriber::EnvFilter;

use targetdesk_config::AppConfig;
use targetdesk_db::Database;
use targetdesk_exchange::UploadStore;
use targetdesk_web::router::build_router;
use targetdesk_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    info!(db = %config.db.name, "connecting to database");
    let db = Database::connect(&config.database_url()).await?;
    db.initialize().await?;

    let uploads = UploadStore::new(&config.upload_dir);
    uploads.ensure_dirs().await?;

    let app = build_router(AppState::new(db.pool().clone(), uploads));

    info!("server listening on http://{}", config.bind);
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
