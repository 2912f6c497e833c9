/// API route modules
pub mod albums;
pub mod health;

use crate::state::AppState;
use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router
///
/// Shared between `main` and the integration tests so both drive the exact
/// same route table and middleware stack.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        // Albums
        .route("/albums", get(albums::list_albums))
        .route("/albums", post(albums::create_album))
        .route("/albums/:id", get(albums::get_album))
        .route("/albums/:id", patch(albums::update_album))
        .route("/albums/:id", delete(albums::delete_album))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
