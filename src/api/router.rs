use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/metrics", get(handlers::metrics::render))
        // Leaderboard
        .route("/api/pnl", get(handlers::pnl::leaderboard))
        // Per-trader CSV export
        .route(
            "/api/traders/:address/trades.csv",
            get(handlers::export::trader_csv),
        )
        // Backup-oracle utility
        .route("/api/oracle/timestamp", get(handlers::oracle::timestamp));

    // The dashboard frontend is served from a different origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
