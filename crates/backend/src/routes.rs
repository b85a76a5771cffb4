use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::shared::upstream::Upstream;

#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<dyn Upstream>,
}

/// All gateway routes; anything else is served from `dist_dir`.
pub fn configure_routes(state: AppState, dist_dir: &str) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // LOGIN SERVICE
        // ========================================
        .route("/api/user/login", post(handlers::auth::login))
        // ========================================
        // OPERATIONS SERVICE
        // ========================================
        .route("/api/city", get(handlers::a001_city::list_all))
        .route("/api/facility", get(handlers::a002_facility::list_all))
        .route(
            "/api/purchaseOrder",
            get(handlers::a003_purchase_order::list),
        )
        .with_state(state)
        .fallback_service(ServeDir::new(dist_dir))
}
