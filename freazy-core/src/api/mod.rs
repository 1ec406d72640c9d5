pub mod handlers;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use axum::{
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;

pub use handlers::{
    history_csv_handler, history_prune_handler, history_stats_handler, labels_handler,
    pdf_handler, preview_handler, smart_data_remember_handler, smart_data_suggest_handler,
    totals_handler, validate_handler,
};

/// Shared application state.
///
/// Endpoints transform their request body and store nothing server side;
/// the state only carries the runtime configuration.
#[derive(Clone, Default)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Health check endpoint.
///
/// Returns a simple JSON response indicating the server is running.
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "freazy-core",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Creates the main application router.
///
/// # Arguments
///
/// * `state` - The application state
///
/// # Returns
///
/// Returns a configured Axum Router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/totals", post(totals_handler))
        .route("/api/labels/:doc_type/:language", get(labels_handler))
        .route("/api/preview", post(preview_handler))
        .route("/api/pdf", post(pdf_handler))
        .route("/api/validate", post(validate_handler))
        .route("/api/history/export.csv", post(history_csv_handler))
        .route("/api/history/stats", post(history_stats_handler))
        .route("/api/history/prune", post(history_prune_handler))
        .route("/api/smart-data/suggest", post(smart_data_suggest_handler))
        .route("/api/smart-data/remember", post(smart_data_remember_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
