//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Board and scene records
        .route("/board", get(handlers::get_board))
        .route("/scenes", get(handlers::list_scenes))
        .route("/scenes/import", post(handlers::import_scenes))
        .route("/scenes/{number}/status", put(handlers::set_scene_status))
        .route("/scenes/{number}/assign", post(handlers::assign_scene))
        .route("/scenes/{number}/unassign", post(handlers::unassign_scene))
        .route("/scenes/{number}/reset", post(handlers::reset_scene))
        .route("/pool", get(handlers::get_pool))
        // Drag and drop
        .route("/drop", post(handlers::handle_drop))
        // Shooting days
        .route("/days", get(handlers::list_days))
        .route("/days", post(handlers::create_day))
        .route("/days/{day_id}/date", put(handlers::update_day_date))
        .route("/days/{day_id}/lock", post(handlers::lock_day))
        .route("/days/{day_id}/unlock", post(handlers::unlock_day))
        .route("/days/{day_id}/blocks", post(handlers::add_block))
        .route(
            "/days/{day_id}/blocks/{block_id}",
            delete(handlers::remove_block),
        )
        // Scheduled-date index
        .route("/scheduled", get(handlers::get_scheduled_index))
        .route("/scheduled/{date}", get(handlers::get_scheduled_scenes))
        .route("/reconcile", post(handlers::reconcile))
        // Sync
        .route("/sync/status", get(handlers::get_sync_status))
        .route("/sync/remote-change", post(handlers::notify_remote_change));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
