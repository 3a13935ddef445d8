//! Routes for the document API.

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::data::handlers::{get_data, replace_data};
use crate::state::AppState;

/// Mounts `GET` and `POST` on `/api/data`.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/data", get(get_data).post(replace_data))
}
