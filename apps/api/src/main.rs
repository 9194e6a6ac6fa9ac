use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cvtracker_api::config::Config;
use cvtracker_api::routes::build_router;
use cvtracker_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("cvtracker_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV Tracker API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Match engine: min_token_chars={} fold_diacritics={} fold_inflections={} min_keyword_count={} scope={:?} max_phrases={:?}",
        config.engine.normalizer.min_token_chars,
        config.engine.normalizer.fold_diacritics,
        config.engine.normalizer.fold_inflections,
        config.engine.min_keyword_count,
        config.engine.keyword_scope,
        config.engine.max_phrases,
    );
    if !config.engine.extra_stopwords.is_empty() {
        info!("Extra stopwords: {}", config.engine.extra_stopwords.len());
    }

    // Build app state (compiles the stopword set once)
    let state = AppState::new(config.clone());

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the dashboard host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
