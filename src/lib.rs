pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;
pub mod views;

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use chrono::FixedOffset;
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

use crate::services::{
    result_service::ResultService,
    result_store::{PgResultStore, ResultStore},
};

#[derive(Clone)]
pub struct AppState {
    pub result_service: ResultService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let config = crate::config::get_config();
        Self::with_store(Arc::new(PgResultStore::new(pool)), config.stats_utc_offset)
    }

    pub fn with_store(store: Arc<dyn ResultStore>, stats_offset: Option<FixedOffset>) -> Self {
        Self {
            result_service: ResultService::new(store, stats_offset),
        }
    }
}

/// The full HTTP surface, shared by the binary and the integration tests.
pub fn build_router(state: AppState) -> Router {
    let results_api = Router::new()
        .route(
            "/api/results",
            get(routes::results::list_results).post(routes::results::create_result),
        )
        .route("/api/results/stats", get(routes::results::daily_stats))
        .route("/api/results/dashboard", get(routes::results::dashboard))
        .route(
            "/api/results/:id",
            axum::routing::put(routes::results::update_result)
                .delete(routes::results::delete_result),
        );

    Router::new()
        .route("/health", get(routes::health::health))
        .route("/api/openapi.json", get(routes::docs::openapi_json))
        .merge(results_api)
        .with_state(state)
        .layer(middleware::cors::permissive_cors())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(64 * 1024))
}
