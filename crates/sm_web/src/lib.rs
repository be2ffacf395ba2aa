use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/fetch_news", get(handlers::fetch_news))
        .route("/analyze_sentiment", get(handlers::analyze_sentiment))
        .route("/generate_tts", get(handlers::generate_tts))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

pub async fn serve(listener: TcpListener, state: AppState) -> sm_core::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("🚀 Listening on http://{}", addr);
    }
    axum::serve(listener, create_app(state)).await?;
    Ok(())
}

pub mod prelude {
    pub use super::{create_app, serve, ApiError, AppState};
    pub use sm_core::{Article, Error, Result};
}
