//! Taskforce server - roster and task tracking over a single JSON document.
//!
//! Members each carry one active task, a newest-first history of archived
//! tasks and success/failure counters that always match that history. The
//! whole roster is persisted as one JSON file that is loaded and replaced
//! wholesale; the HTTP API exposes both the raw document and one endpoint per
//! roster operation.

#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// REST API handlers and routes.
pub mod api;
/// Members, tasks and the state transitions between them.
pub mod domain;
/// Infrastructure components (config, server, telemetry).
pub mod infrastructure;
/// Read-modify-write orchestration of roster operations.
pub mod roster;
/// Shared handler state.
pub mod state;
/// Whole-document persistence.
pub mod store;
