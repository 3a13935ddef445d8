//! REST API endpoints for roster operations.
//!
//! Each endpoint performs one state-model operation against a freshly loaded
//! document and writes the whole document back.

pub mod handlers;
pub mod routes;
pub mod types;

pub use routes::routes;
pub use types::{ArchiveRequest, CreateMemberRequest, HealthResponse};
