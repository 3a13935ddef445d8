//! REST API routes for roster operations.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use std::sync::Arc;

use crate::api::members::handlers::{
    archive_task, create_member, delete_history_entry, delete_member, edit_task, health_check,
    list_members,
};
use crate::state::AppState;

/// API routes for roster management.
///
/// Also includes the basic health check at `/health`.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/members", get(list_members).post(create_member))
        .route("/api/members/{id}", delete(delete_member))
        .route("/api/members/{id}/task", patch(edit_task))
        .route("/api/members/{id}/archive", post(archive_task))
        .route(
            "/api/members/{id}/history/{index}",
            delete(delete_history_entry),
        )
}
