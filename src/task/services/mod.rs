//! Orchestration services for the task domain.

mod board;

pub use board::{CreateTaskRequest, TaskBoardError, TaskBoardResult, TaskBoardService};
