//! HTTP surface for the task board.
//!
//! The router is a thin mapping from verbs and paths to handlers; all
//! branching lives in the handlers and the service underneath them.

pub mod dto;
pub mod error;
mod extract;
pub mod handlers;

pub use self::extract::ApiJson;
pub use self::handlers::AppState;

use axum::Router;
use axum::routing::{get, patch};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use self::handlers::{
    create_task, get_task, health_check, list_tasks, not_found, unhandled_panic, update_status,
};

/// Builds the application router.
///
/// Task routes live under the `/api` prefix; the liveness probe and the
/// unmatched-route fallback sit at the root.
#[must_use]
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let tasks = Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/{id}", get(get_task))
        .route("/tasks/{id}/status", patch(update_status));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", tasks)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(CatchPanicLayer::custom(unhandled_panic))
        .with_state(state)
}
