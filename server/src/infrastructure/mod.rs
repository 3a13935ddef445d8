/// Configuration management for the server.
pub mod config;
/// HTTP server and control plane.
pub mod server;
/// Telemetry setup for logging and tracing.
pub mod telemetry;
