use super::handlers;
use super::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Mount point of the meeting routes
pub const MEETING_PREFIX: &str = "/api/meeting";

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        .nest(MEETING_PREFIX, meeting_routes())
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn meeting_routes() -> Router<AppState> {
    Router::new()
        // Queries
        .route("/", get(handlers::list_meetings))
        .route("/view/:id", get(handlers::view_meeting))
        // Mutations
        .route("/add", post(handlers::add_meeting))
        .route("/delete/:id", delete(handlers::delete_meeting))
        .route("/deleteMany", post(handlers::delete_many_meetings))
}
