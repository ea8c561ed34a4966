//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The description is too short for the task to be marked done.
    #[error(
        "description must exceed {required} characters before the task can be marked Done, \
         current length is {length}"
    )]
    DescriptionTooShort {
        /// Character count of the current description.
        length: usize,
        /// Character count the description must exceed.
        required: usize,
    },
}

/// Error returned while parsing task statuses from client input or persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
