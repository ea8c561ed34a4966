//! Service layer for task creation, lookup, and status updates.

use crate::task::{
    domain::{
        ParseTaskStatusError, Task, TaskDescription, TaskDomainError, TaskId, TaskStatus,
        TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Service-level errors for task board operations.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The requested status is not part of the workflow.
    #[error(transparent)]
    Status(#[from] ParseTaskStatusError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task board service operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Task board orchestration service.
///
/// The repository and clock are injected capabilities, so the service is
/// testable against any [`TaskRepository`] implementation without a live
/// store.
#[derive(Clone)]
pub struct TaskBoardService {
    repository: Arc<dyn TaskRepository>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl TaskBoardService {
    /// Creates a new task board service.
    #[must_use]
    pub fn new(repository: Arc<dyn TaskRepository>, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self { repository, clock }
    }

    /// Creates and persists a new task in the `To-Do` status.
    ///
    /// The title and description are trimmed before validation; nothing is
    /// persisted when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] when the title is empty after
    /// trimming, or [`TaskBoardError::Repository`] when persistence fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskBoardResult<Task> {
        let title = TaskTitle::new(request.title)?;
        let description = TaskDescription::new(request.description.unwrap_or_default());
        let task = Task::new(title, description, &*self.clock);
        self.repository.store(&task).await?;
        Ok(task)
    }

    /// Returns all tasks ordered by creation time, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the store is unreachable.
    pub async fn list_tasks(&self) -> TaskBoardResult<Vec<Task>> {
        Ok(self.repository.list().await?)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when no task with the identifier exists.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the lookup fails.
    pub async fn find_task(&self, id: TaskId) -> TaskBoardResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Moves a task to the target status.
    ///
    /// Validation happens in a fixed order, each step a distinct failure:
    /// the target must parse to a workflow status, the task must exist, and
    /// the `Done` description-length rule must hold. Persistence failure
    /// leaves the stored status unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Status`] for an unknown status value,
    /// [`TaskBoardError::Repository`] with
    /// [`TaskRepositoryError::NotFound`] when the task does not exist or
    /// with another repository error when persistence fails, and
    /// [`TaskBoardError::Domain`] when the `Done` rule is violated.
    pub async fn update_status(&self, id: TaskId, target: &str) -> TaskBoardResult<Task> {
        let status = TaskStatus::try_from(target)?;
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskRepositoryError::NotFound(id))?;
        task.transition_to(status)?;
        self.repository.update(&task).await?;
        Ok(task)
    }
}
