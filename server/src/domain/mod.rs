//! Roster domain model.
//!
//! Pure, synchronous rules for members and their tasks: the placeholder task,
//! archiving the active task into history, deleting history entries and
//! keeping the per-member counters equal to the tallies of the history.
//! Nothing in here touches storage; the roster manager composes these
//! operations with a fresh load and a whole-document replace.

pub mod document;
pub mod errors;
pub mod member;
pub mod task;

pub use document::AppData;
pub use errors::DomainError;
pub use member::{Member, MemberId, Stats, TaskUpdate};
pub use task::{Outcome, Task, TaskGroup, PLACEHOLDER_TITLE};
