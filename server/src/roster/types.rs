//! Roster manager types.

use serde::Serialize;

use crate::domain::{DomainError, Member};
use crate::store::StoreError;

/// Errors returned by roster operations.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// Loading or replacing the document failed.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The requested change violates a domain rule.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// A member as listed by the roster, with derived flags.
#[derive(Debug, Clone, Serialize)]
pub struct MemberView {
    /// The stored member.
    #[serde(flatten)]
    pub member: Member,
    /// Active task is past its deadline and unfinished.
    pub overdue: bool,
}
