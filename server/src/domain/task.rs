//! Task entities: the active task of a member and its archived copies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Title given to the placeholder task of a new member or after an archive.
pub const PLACEHOLDER_TITLE: &str = "New Task";

/// Category a task belongs to.
///
/// The club's own labels are the stored form; the variant names are accepted
/// on input as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TaskGroup {
    /// Electronics and flight control.
    #[default]
    #[serde(rename = "電裝控制", alias = "ElectronicsControl")]
    ElectronicsControl,
    /// Airframe and structural design.
    #[serde(rename = "結構設計", alias = "StructuralDesign")]
    StructuralDesign,
    /// Public relations.
    #[serde(rename = "公關相關", alias = "PublicRelations")]
    PublicRelations,
    /// Teaching and workshops.
    #[serde(rename = "教學相關", alias = "Teaching")]
    Teaching,
}

impl TaskGroup {
    /// Every group, in display order.
    pub const ALL: [Self; 4] = [
        Self::ElectronicsControl,
        Self::StructuralDesign,
        Self::PublicRelations,
        Self::Teaching,
    ];

    /// Stored label of the group.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ElectronicsControl => "電裝控制",
            Self::StructuralDesign => "結構設計",
            Self::PublicRelations => "公關相關",
            Self::Teaching => "教學相關",
        }
    }
}

impl fmt::Display for TaskGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Terminal outcome of an archived task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The task was completed.
    Success,
    /// The task was abandoned or missed.
    Failed,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("Success"),
            Self::Failed => f.write_str("Failed"),
        }
    }
}

/// A unit of work.
///
/// The active task of a member never carries an outcome; history entries
/// always do unless they predate outcome tagging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    /// Free-text title.
    pub title: String,
    /// Due date.
    pub deadline: NaiveDate,
    /// Category.
    pub group: TaskGroup,
    /// Completion percentage, 0 to 100.
    pub progress: u8,
    /// Set once the task is archived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
}

impl Task {
    /// Fresh task used for new members and after every archive.
    #[must_use]
    pub fn placeholder(group: TaskGroup, today: NaiveDate) -> Self {
        Self {
            title: PLACEHOLDER_TITLE.to_string(),
            deadline: today,
            group,
            progress: 0,
            outcome: None,
        }
    }

    /// Copy of this task tagged with a terminal outcome.
    #[must_use]
    pub fn archived(&self, outcome: Outcome) -> Self {
        Self {
            outcome: Some(outcome),
            ..self.clone()
        }
    }

    /// A task is overdue from its deadline day onwards while still unfinished.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.deadline <= today && self.progress < 100
    }
}

/// Wire shape accepted when reading a task.
///
/// Older documents stored the outcome under `status`; it is folded into
/// `outcome` here and never written back.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TaskRecord {
    title: String,
    deadline: NaiveDate,
    group: TaskGroup,
    progress: u8,
    #[serde(default)]
    outcome: Option<Outcome>,
    #[serde(default)]
    status: Option<Outcome>,
}

impl TryFrom<TaskRecord> for Task {
    type Error = String;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let outcome = match (record.outcome, record.status) {
            (Some(outcome), Some(status)) if outcome != status => {
                return Err(format!(
                    "task '{}' has outcome {outcome} but legacy status {status}",
                    record.title
                ));
            }
            (outcome, status) => outcome.or(status),
        };

        Ok(Self {
            title: record.title,
            deadline: record.deadline,
            group: record.group,
            progress: record.progress,
            outcome,
        })
    }
}
