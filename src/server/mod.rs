//! HTTP surface of the catalog.
//!
//! Request bodies are handed to the catalog untouched; validation failures
//! come back as `400 {"error": "..."}`.

pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::AsyncCatalog;

/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    pub catalog: AsyncCatalog,
}

/// Build the catalog router.
pub fn router(catalog: AsyncCatalog) -> Router {
    let state = Arc::new(AppState { catalog });

    Router::new()
        .route("/api/health", get(routes::meta::health))
        .route(
            "/api/sets",
            get(routes::sets::list_sets).post(routes::sets::create_set),
        )
        .route(
            "/api/sets/{code}",
            get(routes::sets::get_set)
                .put(routes::sets::replace_set)
                .delete(routes::sets::delete_set),
        )
        .route(
            "/api/cards",
            get(routes::cards::list_cards).post(routes::cards::create_card),
        )
        .route(
            "/api/cards/{set_code}/{collector_number}",
            get(routes::cards::get_card)
                .put(routes::cards::replace_card)
                .delete(routes::cards::delete_card),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
