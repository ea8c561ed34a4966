//! Request and response bodies for the HTTP surface.
//!
//! DTOs are separate from domain types so the wire contract stays stable;
//! task payloads use camelCase field names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::domain::{Task, TaskId, TaskStatus};

/// JSON envelope for successful responses.
#[derive(Debug, Clone, Serialize)]
pub struct ApiSuccess<T> {
    /// Always `true` on this body.
    pub success: bool,
    /// Operation result payload.
    pub data: T,
}

impl<T> ApiSuccess<T> {
    /// Wraps a payload in the success envelope.
    #[must_use]
    pub const fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Request body for creating a task.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskBody {
    /// Task title, required and non-empty after trimming.
    pub title: String,
    /// Optional description; defaults to the empty string.
    #[serde(default)]
    pub description: Option<String>,
}

/// Request body for updating a task's status.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusBody {
    /// Target workflow status; one of `To-Do`, `In-Progress`, `Done`.
    pub status: String,
}

/// Response body for a task.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    /// Task identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Task description, possibly empty.
    pub description: String,
    /// Workflow status in canonical form.
    pub status: TaskStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            title: task.title().as_str().to_owned(),
            description: task.description().as_str().to_owned(),
            status: task.status(),
            created_at: task.created_at(),
        }
    }
}

/// Response body for the liveness endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status marker.
    pub status: &'static str,
    /// Server-side timestamp at response time.
    pub timestamp: DateTime<Utc>,
}
