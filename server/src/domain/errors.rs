//! Domain errors for roster operations.

use super::member::MemberId;

/// Errors raised by the member/task state model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// No member with the given identifier exists in the document.
    #[error("Member not found: {0}")]
    MemberNotFound(MemberId),
    /// The member has no history entry at the given position.
    #[error("History entry {index} not found for member {member} (history has {len} entries)")]
    HistoryEntryNotFound {
        /// Member whose history was addressed.
        member: MemberId,
        /// Requested position, newest first.
        index: usize,
        /// Number of entries the history actually holds.
        len: usize,
    },
    /// A required field was blank or out of range.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Two members in one document share an identifier.
    #[error("Duplicate member id: {0}")]
    DuplicateMember(MemberId),
}
