//! API Handler implementations for roster operations.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Json, Path, State,
    },
    http::StatusCode,
};
use chrono::Utc;
use std::sync::Arc;

use crate::api::error::ApiError;
use crate::api::members::types::{ArchiveRequest, CreateMemberRequest, HealthResponse};
use crate::domain::{Member, MemberId, TaskUpdate};
use crate::roster::MemberView;
use crate::state::AppState;

/// GET /health
///
/// Returns basic health status of the server.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
    })
}

/// GET /api/members
///
/// List every member with its overdue flag.
pub async fn list_members(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MemberView>>, ApiError> {
    Ok(Json(state.roster().members().await?))
}

/// POST /api/members
///
/// Add a member with a placeholder task.
pub async fn create_member(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateMemberRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Member>), ApiError> {
    let Json(req) = body?;
    let member = state.roster().add_member(&req.name).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

/// DELETE /api/members/{id}
///
/// Remove a member and its history.
pub async fn delete_member(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path?;
    let id = MemberId::new(id)?;
    state.roster().delete_member(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/members/{id}/task
///
/// Edit fields of the active task.
pub async fn edit_task(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<TaskUpdate>, JsonRejection>,
) -> Result<Json<Member>, ApiError> {
    let Path(id) = path?;
    let id = MemberId::new(id)?;
    let Json(update) = body?;
    Ok(Json(state.roster().edit_task(&id, update).await?))
}

/// POST /api/members/{id}/archive
///
/// Archive the active task as `Success` or `Failed`.
pub async fn archive_task(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<ArchiveRequest>, JsonRejection>,
) -> Result<Json<Member>, ApiError> {
    let Path(id) = path?;
    let id = MemberId::new(id)?;
    let Json(req) = body?;
    Ok(Json(state.roster().archive_task(&id, req.outcome).await?))
}

/// DELETE /api/members/{id}/history/{index}
///
/// Delete one archived entry and decrement its counter.
pub async fn delete_history_entry(
    State(state): State<Arc<AppState>>,
    path: Result<Path<(String, usize)>, PathRejection>,
) -> Result<Json<Member>, ApiError> {
    let Path((id, index)) = path?;
    let id = MemberId::new(id)?;
    Ok(Json(state.roster().delete_history_entry(&id, index).await?))
}
