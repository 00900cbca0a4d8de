pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::matching::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog API
        .route("/api/v1/jobs", get(handlers::handle_list_jobs))
        // Match API
        .route("/api/v1/algorithms", get(handlers::handle_list_algorithms))
        .route("/api/v1/match", post(handlers::handle_match))
        .route("/api/v1/match/basic", post(handlers::handle_basic_match))
        .route("/api/v1/match/advanced", post(handlers::handle_advanced_match))
        .route("/api/v1/match/compare", post(handlers::handle_compare_match))
        .fallback(not_found)
        .with_state(state)
}
