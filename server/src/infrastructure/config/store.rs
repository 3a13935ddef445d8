//! Document store configuration.

use serde::Deserialize;
use std::path::PathBuf;

/// Where the roster document lives.
#[derive(Debug, Deserialize, Clone)]
pub struct StoreSettings {
    /// Path of the JSON document, relative to the working directory unless
    /// absolute.
    pub path: PathBuf,
    /// Seed an empty roster at startup when the file is missing.
    pub create_if_missing: bool,
}
