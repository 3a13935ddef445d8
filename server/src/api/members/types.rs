//! Request/Response types for the roster API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Outcome;

/// Request to add a member.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMemberRequest {
    /// Display name; must not be blank.
    pub name: String,
}

/// Request to archive the active task.
#[derive(Debug, Clone, Deserialize)]
pub struct ArchiveRequest {
    /// How the task ended.
    pub outcome: Outcome,
}

/// Health check response payload.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status.
    pub status: String,
    /// Timestamp of the check.
    pub timestamp: DateTime<Utc>,
}
