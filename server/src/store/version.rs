use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt;

/// Hex SHA-256 of the stored document bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Version(String);

impl Version {
    /// Computes the version of a stored byte sequence.
    #[must_use]
    pub fn of(bytes: &[u8]) -> Self {
        Self(hex::encode(Sha256::digest(bytes)))
    }

    /// Parses an `ETag` / `If-Match` header value.
    ///
    /// Quotes and a weak-validator prefix are stripped. Returns `None` for an
    /// empty value or the `*` wildcard.
    #[must_use]
    pub fn from_etag(value: &str) -> Option<Self> {
        let value = value.trim();
        let value = value.strip_prefix("W/").unwrap_or(value);
        let value = value.trim_matches('"');
        if value.is_empty() || value == "*" {
            return None;
        }
        Some(Self(value.to_string()))
    }

    /// Quoted form suitable for an `ETag` header.
    #[must_use]
    pub fn to_etag(&self) -> String {
        format!("\"{}\"", self.0)
    }

    /// Get the string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_bytes_same_version() {
        assert_eq!(Version::of(b"{}"), Version::of(b"{}"));
        assert_ne!(Version::of(b"{}"), Version::of(b"{ }"));
        assert_eq!(Version::of(b"").as_str().len(), 64);
    }

    #[test]
    fn test_etag_round_trip() {
        let version = Version::of(b"abc");
        let etag = version.to_etag();
        assert!(etag.starts_with('"') && etag.ends_with('"'));
        assert_eq!(Version::from_etag(&etag), Some(version.clone()));
        assert_eq!(Version::from_etag(&format!("W/{etag}")), Some(version));
    }

    #[test]
    fn test_wildcard_and_empty_are_ignored() {
        assert_eq!(Version::from_etag("*"), None);
        assert_eq!(Version::from_etag("  "), None);
        assert_eq!(Version::from_etag("\"\""), None);
    }
}
