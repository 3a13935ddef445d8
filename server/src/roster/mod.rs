//! Roster manager for the taskforce server.
//!
//! This module provides the `RosterManager`, the single owner of every
//! read-modify-write cycle against the document store.

pub mod clock;
pub mod core;
pub mod types;

pub use self::core::RosterManager;
pub use clock::{Clock, FixedClock, SystemClock};
pub use types::{MemberView, RosterError};
