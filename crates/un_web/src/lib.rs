use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/views/home", get(handlers::home))
        .route("/api/views/category/:slug", get(handlers::category))
        .route("/api/views/human-rights", get(handlers::human_rights))
        .route("/api/views/article/:id", get(handlers::article))
        .route("/api/views/search", get(handlers::search))
        .route("/api/views/videos", get(handlers::videos))
        .route("/api/views/sidebar", get(handlers::sidebar))
        .route("/api/views/chrome", get(handlers::site_chrome))
        .route("/api/categories", get(handlers::categories))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Serves the view API on `addr` until the process is stopped.
pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("🌐 View server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, create_app(state)).await
}

pub mod prelude {
    pub use crate::{create_app, serve, AppState};
    pub use un_core::{Error, NewsApi, Result};
}
