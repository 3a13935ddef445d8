//! Request/Response types for the document API.

use serde::Serialize;

use crate::domain::AppData;

/// Body returned after a successful replace.
#[derive(Debug, Clone, Serialize)]
pub struct ReplaceResponse {
    /// Always `true`; failures use the error body instead.
    pub success: bool,
    /// The document as written.
    pub data: AppData,
}
