use std::sync::Arc;
use std::time::Duration;

use anilist_recommender::{
    api::{create_router, AppState},
    config::Config,
    db::{create_redis_client, Cache},
    services::AniListProvider,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "anilist_recommender=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let redis_client = create_redis_client(&config.redis_url)?;
    let (cache, cache_writer) = Cache::new(redis_client);

    let provider = Arc::new(AniListProvider::new(cache, &config));
    let state = AppState::new(provider, Duration::from_secs(config.genre_refresh_secs));

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %config.bind_addr(), "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    cache_writer.shutdown().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
