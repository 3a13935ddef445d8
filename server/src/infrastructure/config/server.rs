//! Server configuration for the taskforce server.
//!
//! This module defines HTTP server binding settings.

use serde::Deserialize;
use std::net::SocketAddr;

/// Server binding settings.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl ServerSettings {
    /// Converts the bind address to a `SocketAddr`.
    ///
    /// # Errors
    ///
    /// Returns an error if the IP address string cannot be parsed.
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip = self
            .host
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid IP address '{}': {e}", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
