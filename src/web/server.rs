//! Web server setup and routing

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use super::handlers;
use super::state::AppState;
use crate::cli::DashboardConfig;

/// Build the dashboard router
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let body_limit = state.body_limit();

    Router::new()
        // HTML pages
        .route("/", get(handlers::index))
        .route("/upload", get(handlers::upload_page))
        .route("/upload/resume", post(handlers::upload_resume))
        .route("/upload/job-description", post(handlers::upload_job_description))
        .route(
            "/evaluate",
            get(handlers::evaluate_page).post(handlers::submit_evaluation),
        )
        .route("/results", get(handlers::results_page))
        .route("/results/export", get(handlers::export_results))
        .route("/evaluation/:evaluation_id", get(handlers::evaluation_detail))
        // API endpoints
        .route("/api/health", get(handlers::health))
        .nest_service("/static", ServeDir::new("static"))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .with_state(state)
}

/// Start the web UI server
pub async fn start_server(config: DashboardConfig) -> anyhow::Result<()> {
    let port = config.ui.port;
    let state = Arc::new(AppState::new(config)?);
    info!(
        "Forwarding to evaluation service at {}",
        state.config.service.base_url
    );

    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting web UI server on http://localhost:{}", port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
