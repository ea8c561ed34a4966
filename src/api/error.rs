//! HTTP failure responses and error translation.
//!
//! Every failure renders the structured JSON envelope; nothing propagates
//! past the handler boundary as an unformatted response.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::task::{
    domain::TaskDomainError,
    ports::TaskRepositoryError,
    services::TaskBoardError,
};

/// How much store-failure detail responses expose.
///
/// Production runs redacted; the detail is always written to the log
/// either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorExposure {
    /// Replace store-failure detail with a generic message.
    Redacted,
    /// Include the underlying failure text in the response.
    Verbose,
}

/// JSON body for failed requests.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    /// Always `false` on this body.
    pub success: bool,
    /// Human-readable failure message.
    pub message: String,
    /// Machine-readable failure category.
    pub error: &'static str,
    /// Present only on Done-rule violations, so callers can render how many
    /// characters are still missing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_description_length: Option<usize>,
}

/// HTTP failure response carrying a status code and the error envelope.
#[derive(Debug, Clone)]
pub struct ApiFailure {
    status: StatusCode,
    body: ApiErrorBody,
}

impl ApiFailure {
    fn new(status: StatusCode, error: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ApiErrorBody {
                success: false,
                message: message.into(),
                error,
                current_description_length: None,
            },
        }
    }

    /// Creates a 400 response for a client-correctable input problem.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "validation_error", message)
    }

    /// Creates a 400 response for a Done-rule violation, carrying the
    /// current description length.
    #[must_use]
    pub fn done_rule(message: impl Into<String>, current_description_length: usize) -> Self {
        let mut failure = Self::validation(message);
        failure.body.current_description_length = Some(current_description_length);
        failure
    }

    /// Creates a 404 response.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "not_found", message)
    }

    /// Creates a generic 500 response for failures caught at the process
    /// boundary.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", message)
    }

    /// Creates a 500 response for a store failure.
    ///
    /// The underlying detail is logged at error level and only included in
    /// the response body under [`ErrorExposure::Verbose`].
    #[must_use]
    pub fn store(exposure: ErrorExposure, error: &TaskRepositoryError) -> Self {
        tracing::error!(%error, "task store operation failed");
        let message = match exposure {
            ErrorExposure::Redacted => "failed to reach the task store".to_owned(),
            ErrorExposure::Verbose => error.to_string(),
        };
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "store_error", message)
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Translates a service-level error into an HTTP failure.
    ///
    /// Domain validation problems map to 400, a missing task to 404, and
    /// everything the store reports to 500.
    #[must_use]
    pub fn from_service(error: &TaskBoardError, exposure: ErrorExposure) -> Self {
        match error {
            TaskBoardError::Domain(TaskDomainError::DescriptionTooShort { length, .. }) => {
                Self::done_rule(error.to_string(), *length)
            }
            TaskBoardError::Domain(TaskDomainError::EmptyTitle) | TaskBoardError::Status(_) => {
                Self::validation(error.to_string())
            }
            TaskBoardError::Repository(TaskRepositoryError::NotFound(id)) => {
                Self::not_found(format!("no task with identifier {id}"))
            }
            TaskBoardError::Repository(repository_error) => {
                Self::store(exposure, repository_error)
            }
        }
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
