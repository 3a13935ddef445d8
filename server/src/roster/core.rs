//! Core roster manager.
//!
//! Every mutation runs as: take the mutation lock, load the document fresh,
//! apply one domain operation, replace the document conditioned on the version
//! that was loaded. Raw document replacement does not take the lock and is
//! last-writer-wins unless the caller supplies a version.

use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, instrument, warn};

use super::clock::{Clock, SystemClock};
use super::types::{MemberView, RosterError};
use crate::domain::{AppData, DomainError, Member, MemberId, Outcome, TaskUpdate};
use crate::store::{DocumentStore, Snapshot, Version};

/// Single owner of roster mutations.
pub struct RosterManager {
    store: Arc<dyn DocumentStore>,
    clock: Arc<dyn Clock>,
    mutations: Mutex<()>,
}

impl RosterManager {
    /// Create a roster manager over `store` using the system clock.
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    /// Create a roster manager with an explicit clock (dependency injection).
    #[must_use]
    pub fn with_clock(store: Arc<dyn DocumentStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            mutations: Mutex::new(()),
        }
    }

    /// Today's date according to the manager's clock.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Load the whole document.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unavailable.
    pub async fn load(&self) -> Result<Snapshot, RosterError> {
        let snapshot = self.store.load().await?;
        audit(&snapshot.data);
        Ok(snapshot)
    }

    /// Replace the whole document.
    ///
    /// Without `expected` this is an unconditional overwrite: a concurrent
    /// writer's changes made since this caller's load are lost.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateMember` if two members share an id, `VersionMismatch`
    /// if `expected` is stale, or `Unavailable` if the write fails.
    #[instrument(skip(self, data), fields(members = data.members.len()))]
    pub async fn replace(
        &self,
        data: &AppData,
        expected: Option<&Version>,
    ) -> Result<Version, RosterError> {
        data.check_unique_ids()?;
        let version = self.store.replace(data, expected).await?;
        metrics::counter!("taskforce_mutations_total", "operation" => "replace_document")
            .increment(1);
        Ok(version)
    }

    /// List every member with its overdue flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unavailable.
    pub async fn members(&self) -> Result<Vec<MemberView>, RosterError> {
        let today = self.today();
        let snapshot = self.load().await?;
        Ok(snapshot
            .data
            .members
            .into_iter()
            .map(|member| MemberView {
                overdue: member.current_task.is_overdue(today),
                member,
            })
            .collect())
    }

    /// Append a new member with a placeholder task.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank name without touching the store.
    #[instrument(skip(self))]
    pub async fn add_member(&self, name: &str) -> Result<Member, RosterError> {
        let member = Member::new(name, self.today())?;
        let created = self
            .mutate("add_member", move |data, _| {
                data.add_member(member.clone())?;
                Ok(member)
            })
            .await?;
        info!(member = %created.id, "Member added");
        Ok(created)
    }

    /// Remove a member and everything recorded for it.
    ///
    /// # Errors
    ///
    /// Returns `MemberNotFound` if the id is unknown; nothing is written.
    #[instrument(skip(self), fields(member = %id))]
    pub async fn delete_member(&self, id: &MemberId) -> Result<Member, RosterError> {
        let removed = self
            .mutate("delete_member", |data, _| data.remove_member(id))
            .await?;
        info!(name = %removed.name, "Member deleted");
        Ok(removed)
    }

    /// Edit the active task of a member in place.
    ///
    /// # Errors
    ///
    /// Returns `MemberNotFound` or `InvalidInput`; nothing is written.
    #[instrument(skip(self, update), fields(member = %id))]
    pub async fn edit_task(
        &self,
        id: &MemberId,
        update: TaskUpdate,
    ) -> Result<Member, RosterError> {
        self.mutate("edit_task", |data, _| {
            let member = data.member_mut(id)?;
            member.edit_task(update)?;
            Ok(member.clone())
        })
        .await
    }

    /// Archive the active task with an outcome and start a fresh one.
    ///
    /// # Errors
    ///
    /// Returns `MemberNotFound` if the id is unknown.
    #[instrument(skip(self), fields(member = %id))]
    pub async fn archive_task(
        &self,
        id: &MemberId,
        outcome: Outcome,
    ) -> Result<Member, RosterError> {
        let member = self
            .mutate("archive_task", |data, today| {
                let member = data.member_mut(id)?;
                member.archive(outcome, today);
                Ok(member.clone())
            })
            .await?;
        info!(
            %outcome,
            group = %member.current_task.group,
            success = member.stats.success,
            failed = member.stats.failed,
            "Task archived"
        );
        Ok(member)
    }

    /// Delete one history entry and decrement its counter.
    ///
    /// # Errors
    ///
    /// Returns `MemberNotFound` or `HistoryEntryNotFound`; nothing is written.
    #[instrument(skip(self), fields(member = %id))]
    pub async fn delete_history_entry(
        &self,
        id: &MemberId,
        index: usize,
    ) -> Result<Member, RosterError> {
        self.mutate("delete_history_entry", |data, _| {
            let member = data.member_mut(id)?;
            member.delete_history_entry(index)?;
            Ok(member.clone())
        })
        .await
    }

    async fn mutate<T, F>(&self, operation: &'static str, apply: F) -> Result<T, RosterError>
    where
        F: FnOnce(&mut AppData, NaiveDate) -> Result<T, DomainError>,
    {
        let _serial = self.mutations.lock().await;

        let result = async {
            let Snapshot { mut data, version } = self.store.load().await?;
            audit(&data);
            let output = apply(&mut data, self.today())?;
            self.store.replace(&data, Some(&version)).await?;
            Ok::<_, RosterError>(output)
        }
        .await;

        match &result {
            Ok(_) => {
                metrics::counter!("taskforce_mutations_total", "operation" => operation)
                    .increment(1);
            }
            Err(e) => {
                warn!(operation, error = %e, "Roster mutation failed");
                metrics::counter!("taskforce_mutation_failures_total", "operation" => operation)
                    .increment(1);
            }
        }
        result
    }
}

// Stored documents are not rejected for these; they are only reported.
fn audit(data: &AppData) {
    let duplicates = data.duplicate_ids();
    if !duplicates.is_empty() {
        warn!(
            ids = ?duplicates,
            "Document holds duplicate member ids; operations address the first match"
        );
    }
    let inconsistent = data.inconsistent_members();
    if !inconsistent.is_empty() {
        warn!(
            members = ?inconsistent,
            "Stats disagree with history for some members"
        );
    }
}
