//! REST API for the taskforce server.
//!
//! `data` exposes the whole document exactly as stored; `members` exposes one
//! endpoint per roster operation, each run server-side as a fresh
//! read-modify-write.

pub mod data;
pub mod error;
pub mod members;

pub use data::routes as data_routes;
pub use error::ApiError;
pub use members::routes as member_routes;
