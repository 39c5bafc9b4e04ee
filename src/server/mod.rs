pub mod handlers;
pub mod types;

use crate::{Result, config::Config, sentiment::SentimentAnalyzer};
use axum::{Router, routing::get};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn router(state: handlers::AppState) -> Router {
    Router::new()
        .route("/http_trigger", get(handlers::analyze))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // The analyzer loads its lexicon once here, not per request
    let app_state = handlers::AppState {
        analyzer: Arc::new(SentimentAnalyzer::new()),
    };

    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
