//! The whole application document.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::errors::DomainError;
use super::member::{Member, MemberId};

/// Every member, in roster order. This is exactly what the store persists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppData {
    /// Roster, unique by id.
    pub members: Vec<Member>,
}

impl AppData {
    /// Looks up a member by id.
    #[must_use]
    pub fn member(&self, id: &MemberId) -> Option<&Member> {
        self.members.iter().find(|m| &m.id == id)
    }

    /// Looks up a member by id for modification.
    ///
    /// # Errors
    ///
    /// Returns `MemberNotFound` if no member has that id.
    pub fn member_mut(&mut self, id: &MemberId) -> Result<&mut Member, DomainError> {
        self.members
            .iter_mut()
            .find(|m| &m.id == id)
            .ok_or_else(|| DomainError::MemberNotFound(id.clone()))
    }

    /// Appends a member to the end of the roster.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateMember` if the id is already taken.
    pub fn add_member(&mut self, member: Member) -> Result<(), DomainError> {
        if self.member(&member.id).is_some() {
            return Err(DomainError::DuplicateMember(member.id));
        }
        self.members.push(member);
        Ok(())
    }

    /// Removes a member and returns it.
    ///
    /// # Errors
    ///
    /// Returns `MemberNotFound` if no member has that id; the roster is left
    /// untouched.
    pub fn remove_member(&mut self, id: &MemberId) -> Result<Member, DomainError> {
        let position = self
            .members
            .iter()
            .position(|m| &m.id == id)
            .ok_or_else(|| DomainError::MemberNotFound(id.clone()))?;
        Ok(self.members.remove(position))
    }

    /// Checks that no two members share an id.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateMember` naming the first repeated id.
    pub fn check_unique_ids(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::with_capacity(self.members.len());
        for member in &self.members {
            if !seen.insert(&member.id) {
                return Err(DomainError::DuplicateMember(member.id.clone()));
            }
        }
        Ok(())
    }

    /// Ids held by more than one member, each listed once.
    #[must_use]
    pub fn duplicate_ids(&self) -> Vec<&MemberId> {
        let mut seen = HashSet::with_capacity(self.members.len());
        let mut repeated = Vec::new();
        for member in &self.members {
            if !seen.insert(&member.id) && !repeated.contains(&&member.id) {
                repeated.push(&member.id);
            }
        }
        repeated
    }

    /// Ids of members whose counters disagree with their history.
    #[must_use]
    pub fn inconsistent_members(&self) -> Vec<&MemberId> {
        self.members
            .iter()
            .filter(|m| !m.stats_consistent())
            .map(|m| &m.id)
            .collect()
    }
}
