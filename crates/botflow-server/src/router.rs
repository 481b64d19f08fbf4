//! Router assembly for the botflow HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with CORS
//! and tracing middleware layers.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Assembles the full route table over the given state.
///
/// Paths use axum 0.8's `/{param}` capture syntax. CORS is permissive
/// (the studio front end runs on its own origin) and `TraceLayer` logs
/// each request through `tracing`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Bot management
        .route("/bot/create", post(handlers::bots::create_bot))
        .route("/bot/", get(handlers::bots::list_bots))
        .route(
            "/bot/{bot_id}",
            get(handlers::bots::get_bot)
                .put(handlers::bots::update_bot)
                .delete(handlers::bots::delete_bot),
        )
        // Flow documents
        .route("/bot/{bot_id}/data", post(handlers::flows::save_flow))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
