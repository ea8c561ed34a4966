//! Fault-injecting repository decorator.
//!
//! Wraps any [`TaskRepository`] and fails selected operations on demand so
//! that store-failure paths can be exercised without a real backend.
//! Production wiring never constructs this type; it is supplied only by
//! test configuration.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Repository decorator that injects persistence failures.
///
/// Reads and writes can be toggled independently; a triggered operation
/// returns [`TaskRepositoryError::Persistence`] without touching the inner
/// repository, leaving stored state unchanged.
#[derive(Debug)]
pub struct FaultInjectingTaskRepository<R> {
    inner: R,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl<R> FaultInjectingTaskRepository<R> {
    /// Wraps a repository with fault injection disabled.
    #[must_use]
    pub const fn new(inner: R) -> Self {
        Self {
            inner,
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Toggles failure of read operations (`find_by_id`, `list`).
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Toggles failure of write operations (`store`, `update`).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn injected_failure() -> TaskRepositoryError {
        TaskRepositoryError::persistence(std::io::Error::other("injected store failure"))
    }

    fn check(&self, flag: &AtomicBool) -> TaskRepositoryResult<()> {
        if flag.load(Ordering::SeqCst) {
            return Err(Self::injected_failure());
        }
        Ok(())
    }
}

#[async_trait]
impl<R> TaskRepository for FaultInjectingTaskRepository<R>
where
    R: TaskRepository,
{
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        self.check(&self.fail_writes)?;
        self.inner.store(task).await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        self.check(&self.fail_writes)?;
        self.inner.update(task).await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.check(&self.fail_reads)?;
        self.inner.find_by_id(id).await
    }

    async fn list(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.check(&self.fail_reads)?;
        self.inner.list().await
    }
}
