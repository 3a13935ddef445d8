//! Member entity and the state transitions over its task triple.
//!
//! A member owns one active task, a newest-first history of archived tasks and
//! the `{success, failed}` counters. The counters always equal the tallies of
//! the history; every method that touches history updates them in the same
//! step.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::DomainError;
use super::task::{Outcome, Task, TaskGroup};

/// Opaque member identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    /// Generate a fresh identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Wrap an existing identifier.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the identifier is blank.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::InvalidInput(
                "member id cannot be empty".to_string(),
            ));
        }
        Ok(Self(id))
    }

    /// Get the string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Running counters of archived outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Number of history entries tagged `Success`.
    pub success: u32,
    /// Number of history entries tagged `Failed`.
    pub failed: u32,
}

impl Stats {
    /// Counts the outcomes present in a history.
    #[must_use]
    pub fn tally(history: &[Task]) -> Self {
        history.iter().fold(Self::default(), |mut stats, task| {
            match task.outcome {
                Some(Outcome::Success) => stats.success += 1,
                Some(Outcome::Failed) => stats.failed += 1,
                None => {}
            }
            stats
        })
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Success => self.success = self.success.saturating_add(1),
            Outcome::Failed => self.failed = self.failed.saturating_add(1),
        }
    }

    // Floored at zero even when the counters were already out of step.
    fn retract(&mut self, outcome: Option<Outcome>) {
        match outcome {
            Some(Outcome::Success) => self.success = self.success.saturating_sub(1),
            Some(Outcome::Failed) => self.failed = self.failed.saturating_sub(1),
            None => {}
        }
    }
}

/// Partial edit of the active task. Absent fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskUpdate {
    /// New title.
    pub title: Option<String>,
    /// New deadline.
    pub deadline: Option<NaiveDate>,
    /// New category.
    pub group: Option<TaskGroup>,
    /// New completion percentage.
    pub progress: Option<u8>,
}

impl TaskUpdate {
    // Titles are free text, blank included, as in a whole-document replace.
    fn validate(&self) -> Result<(), DomainError> {
        if let Some(progress) = self.progress {
            if progress > 100 {
                return Err(DomainError::InvalidInput(format!(
                    "progress must be between 0 and 100, got {progress}"
                )));
            }
        }
        Ok(())
    }
}

/// A tracked person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Stable identifier, never reused.
    pub id: MemberId,
    /// Display name.
    pub name: String,
    /// The one active task.
    pub current_task: Task,
    /// Archived outcome counters.
    pub stats: Stats,
    /// Archived tasks, newest first.
    pub history: Vec<Task>,
}

impl Member {
    /// Creates a member with a placeholder task, zero stats and no history.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the name is blank.
    pub fn new(name: &str, today: NaiveDate) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidInput(
                "member name cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            id: MemberId::generate(),
            name: name.to_string(),
            current_task: Task::placeholder(TaskGroup::default(), today),
            stats: Stats::default(),
            history: Vec::new(),
        })
    }

    /// Applies an edit to the active task without touching history or stats.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a progress above 100; the task is left
    /// unchanged in that case.
    pub fn edit_task(&mut self, update: TaskUpdate) -> Result<(), DomainError> {
        update.validate()?;

        let task = &mut self.current_task;
        if let Some(title) = update.title {
            task.title = title;
        }
        if let Some(deadline) = update.deadline {
            task.deadline = deadline;
        }
        if let Some(group) = update.group {
            task.group = group;
        }
        if let Some(progress) = update.progress {
            task.progress = progress;
        }
        Ok(())
    }

    /// Moves the active task to the front of history with the given outcome,
    /// bumps the matching counter and resets the active task.
    ///
    /// The fresh task keeps the archived task's group.
    pub fn archive(&mut self, outcome: Outcome, today: NaiveDate) -> &Task {
        let group = self.current_task.group;
        let finished = std::mem::replace(
            &mut self.current_task,
            Task::placeholder(group, today),
        );

        self.history.insert(0, finished.archived(outcome));
        self.stats.record(outcome);
        &self.history[0]
    }

    /// Removes the history entry at `index` and decrements its counter.
    ///
    /// # Errors
    ///
    /// Returns `HistoryEntryNotFound` if there is no entry at `index`.
    pub fn delete_history_entry(&mut self, index: usize) -> Result<Task, DomainError> {
        if index >= self.history.len() {
            return Err(DomainError::HistoryEntryNotFound {
                member: self.id.clone(),
                index,
                len: self.history.len(),
            });
        }

        let removed = self.history.remove(index);
        self.stats.retract(removed.outcome);
        Ok(removed)
    }

    /// True when the counters match the history tallies.
    #[must_use]
    pub fn stats_consistent(&self) -> bool {
        self.stats == Stats::tally(&self.history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
    }

    fn member_with_task(title: &str, progress: u8) -> Member {
        let mut member = Member::new("Alice", today()).unwrap();
        member.id = MemberId::new("1").unwrap();
        member.current_task.title = title.to_string();
        member.current_task.progress = progress;
        member
    }

    #[test]
    fn test_new_member_starts_empty() {
        let member = Member::new("  Bob ", today()).unwrap();
        assert_eq!(member.name, "Bob");
        assert_eq!(member.stats, Stats::default());
        assert!(member.history.is_empty());
        assert_eq!(member.current_task.title, "New Task");
        assert_eq!(member.current_task.group, TaskGroup::ElectronicsControl);
        assert_eq!(member.current_task.deadline, today());
    }

    #[test]
    fn test_new_member_rejects_blank_name() {
        let err = Member::new("   ", today()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = Member::new("A", today()).unwrap();
        let b = Member::new("B", today()).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_archive_success_then_delete_restores_stats() {
        let mut member = member_with_task("T1", 50);

        member.archive(Outcome::Success, today());
        assert_eq!(member.stats, Stats { success: 1, failed: 0 });
        assert_eq!(member.history.len(), 1);
        assert_eq!(member.history[0].title, "T1");
        assert_eq!(member.history[0].outcome, Some(Outcome::Success));
        assert_eq!(member.current_task.progress, 0);

        let removed = member.delete_history_entry(0).unwrap();
        assert_eq!(removed.title, "T1");
        assert_eq!(member.stats, Stats::default());
        assert!(member.history.is_empty());
    }

    #[test]
    fn test_archive_keeps_group_and_prepends() {
        let mut member = member_with_task("first", 90);
        member.current_task.group = TaskGroup::StructuralDesign;
        member.archive(Outcome::Failed, today());

        member.current_task.title = "second".to_string();
        member.archive(Outcome::Success, today());

        assert_eq!(member.current_task.group, TaskGroup::StructuralDesign);
        assert_eq!(member.current_task.title, "New Task");
        assert_eq!(member.history[0].title, "second");
        assert_eq!(member.history[1].title, "first");
        assert_eq!(member.stats, Stats { success: 1, failed: 1 });
        assert!(member.stats_consistent());
    }

    #[test]
    fn test_delete_history_out_of_range() {
        let mut member = member_with_task("T1", 10);
        let err = member.delete_history_entry(0).unwrap_err();
        assert_eq!(
            err,
            DomainError::HistoryEntryNotFound {
                member: MemberId::new("1").unwrap(),
                index: 0,
                len: 0,
            }
        );
        assert_eq!(member.stats, Stats::default());
    }

    #[test]
    fn test_delete_history_floors_inconsistent_stats() {
        let mut member = member_with_task("T1", 10);
        member.archive(Outcome::Failed, today());
        member.stats.failed = 0;

        member.delete_history_entry(0).unwrap();
        assert_eq!(member.stats, Stats::default());
    }

    #[test]
    fn test_delete_untagged_entry_leaves_counters() {
        let mut member = member_with_task("T1", 10);
        member
            .history
            .push(Task::placeholder(TaskGroup::Teaching, today()));
        member.stats.success = 2;

        member.delete_history_entry(0).unwrap();
        assert_eq!(member.stats.success, 2);
    }

    #[test]
    fn test_edit_task_patches_only_given_fields() {
        let mut member = member_with_task("T1", 10);
        member
            .edit_task(TaskUpdate {
                progress: Some(75),
                group: Some(TaskGroup::Teaching),
                ..TaskUpdate::default()
            })
            .unwrap();

        assert_eq!(member.current_task.title, "T1");
        assert_eq!(member.current_task.progress, 75);
        assert_eq!(member.current_task.group, TaskGroup::Teaching);
        assert!(member.history.is_empty());
    }

    #[test]
    fn test_edit_task_rejects_progress_over_100() {
        let mut member = member_with_task("T1", 10);
        let err = member
            .edit_task(TaskUpdate {
                title: Some("renamed".to_string()),
                progress: Some(101),
                ..TaskUpdate::default()
            })
            .unwrap_err();

        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert_eq!(member.current_task.title, "T1");
        assert_eq!(member.current_task.progress, 10);
    }

    #[test]
    fn test_edit_task_accepts_blank_title() {
        let mut member = member_with_task("T1", 10);
        member
            .edit_task(TaskUpdate {
                title: Some(String::new()),
                ..TaskUpdate::default()
            })
            .unwrap();

        assert_eq!(member.current_task.title, "");
        assert_eq!(member.current_task.progress, 10);
    }

    #[test]
    fn test_member_json_uses_camel_case() {
        let member = member_with_task("T1", 50);
        let json = serde_json::to_value(&member).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["currentTask"]["title"], "T1");
        assert_eq!(json["stats"]["success"], 0);
    }
}
