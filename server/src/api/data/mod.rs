//! Whole-document endpoints.
//!
//! `GET /api/data` returns the stored document and `POST /api/data` replaces
//! it. Both carry the document version as an `ETag`. A replace without
//! `If-Match` overwrites unconditionally, so two clients that loaded the same
//! version and both post will silently lose the first client's changes.

pub mod handlers;
pub mod routes;
pub mod types;

pub use routes::routes;
pub use types::ReplaceResponse;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AppData;

    #[test]
    fn test_replace_response_serialization() {
        let response = ReplaceResponse {
            success: true,
            data: AppData::default(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["members"], serde_json::json!([]));
    }
}
