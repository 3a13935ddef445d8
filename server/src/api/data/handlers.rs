//! Handlers for the document API.

use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::api::data::types::ReplaceResponse;
use crate::api::error::ApiError;
use crate::domain::AppData;
use crate::state::AppState;
use crate::store::Version;

/// GET /api/data
///
/// Return the whole document with its version as `ETag`.
pub async fn get_data(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let snapshot = state.roster().load().await?;

    Ok((
        [(header::ETAG, snapshot.version.to_etag())],
        Json(snapshot.data),
    )
        .into_response())
}

/// POST /api/data
///
/// Replace the whole document. With `If-Match` the write is refused with 409
/// if the stored document has changed since that version.
pub async fn replace_data(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<AppData>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(data) = body?;
    let expected = headers
        .get(header::IF_MATCH)
        .and_then(|value| value.to_str().ok())
        .and_then(Version::from_etag);

    let version = state.roster().replace(&data, expected.as_ref()).await?;

    Ok((
        [(header::ETAG, version.to_etag())],
        Json(ReplaceResponse {
            success: true,
            data,
        }),
    )
        .into_response())
}
