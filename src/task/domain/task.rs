//! Task aggregate root and workflow status types.

use super::{ParseTaskStatusError, TaskDescription, TaskDomainError, TaskId, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task workflow status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Task has been created but work has not started.
    #[serde(rename = "To-Do")]
    ToDo,
    /// Task is being worked on.
    #[serde(rename = "In-Progress")]
    InProgress,
    /// Task has been completed.
    #[serde(rename = "Done")]
    Done,
}

impl TaskStatus {
    /// Returns the canonical wire and storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "To-Do",
            Self::InProgress => "In-Progress",
            Self::Done => "Done",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "to-do" => Ok(Self::ToDo),
            "in-progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Task aggregate root.
///
/// The only mutable field is `status`; everything else is fixed at creation
/// time. There is no deletion and no update path for title or description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: TaskDescription,
    status: TaskStatus,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description.
    pub description: TaskDescription,
    /// Persisted workflow status.
    pub status: TaskStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Character count a description must exceed before the task may be
    /// marked [`TaskStatus::Done`].
    pub const MIN_DONE_DESCRIPTION_CHARS: usize = 20;

    /// Creates a new task in the `To-Do` status.
    #[must_use]
    pub fn new(title: TaskTitle, description: TaskDescription, clock: &dyn Clock) -> Self {
        Self {
            id: TaskId::new(),
            title,
            description,
            status: TaskStatus::ToDo,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        let PersistedTaskData {
            id,
            title,
            description,
            status,
            created_at,
        } = data;
        Self {
            id,
            title,
            description,
            status,
            created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Moves the task to the target status.
    ///
    /// The workflow graph is deliberately permissive: every enumerated status
    /// is a valid target from every other status. The single guard is on
    /// entry into [`TaskStatus::Done`], which requires the description to
    /// exceed [`Self::MIN_DONE_DESCRIPTION_CHARS`] characters.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::DescriptionTooShort`] when the target is
    /// `Done` and the description does not satisfy the length rule. The
    /// status is left unchanged on error.
    pub fn transition_to(&mut self, target: TaskStatus) -> Result<(), TaskDomainError> {
        if target == TaskStatus::Done {
            let length = self.description.char_count();
            if length <= Self::MIN_DONE_DESCRIPTION_CHARS {
                return Err(TaskDomainError::DescriptionTooShort {
                    length,
                    required: Self::MIN_DONE_DESCRIPTION_CHARS,
                });
            }
        }
        self.status = target;
        Ok(())
    }
}
