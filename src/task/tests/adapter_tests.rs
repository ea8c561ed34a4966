//! In-memory and fault-injection adapter tests against the repository port.

use crate::task::{
    adapters::{fault::FaultInjectingTaskRepository, memory::InMemoryTaskRepository},
    domain::{
        PersistedTaskData, Task, TaskDescription, TaskId, TaskStatus, TaskTitle,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{TimeZone, Utc};
use rstest::{fixture, rstest};

#[fixture]
fn repository() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

fn task_created_at(title: &str, minute: u32) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        title: TaskTitle::new(title).expect("valid title"),
        description: TaskDescription::new("Needs investigation into root cause"),
        status: TaskStatus::ToDo,
        created_at: Utc
            .with_ymd_and_hms(2024, 5, 1, 12, minute, 0)
            .single()
            .expect("valid timestamp"),
    })
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_rejects_duplicate_identifiers(repository: InMemoryTaskRepository) {
    let task = task_created_at("Fix bug", 0);
    repository.store(&task).await.expect("first store should succeed");

    let result = repository.store(&task).await;
    assert!(matches!(
        result,
        Err(TaskRepositoryError::DuplicateTask(id)) if id == task.id()
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_rejects_missing_tasks(repository: InMemoryTaskRepository) {
    let task = task_created_at("Fix bug", 0);
    let result = repository.update(&task).await;
    assert!(matches!(
        result,
        Err(TaskRepositoryError::NotFound(id)) if id == task.id()
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_persists_the_new_status(repository: InMemoryTaskRepository) {
    let mut task = task_created_at("Fix bug", 0);
    repository.store(&task).await.expect("store should succeed");

    task.transition_to(TaskStatus::Done)
        .expect("transition should succeed");
    repository.update(&task).await.expect("update should succeed");

    let fetched = repository
        .find_by_id(task.id())
        .await
        .expect("lookup should succeed")
        .expect("task should exist");
    assert_eq!(fetched.status(), TaskStatus::Done);
    assert_eq!(fetched.created_at(), task.created_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_orders_by_creation_time_newest_first(repository: InMemoryTaskRepository) {
    for (title, minute) in [("first", 0), ("third", 10), ("second", 5)] {
        repository
            .store(&task_created_at(title, minute))
            .await
            .expect("seeding should succeed");
    }

    let tasks = repository.list().await.expect("listing should succeed");
    let titles: Vec<&str> = tasks.iter().map(|task| task.title().as_str()).collect();
    assert_eq!(titles, vec!["third", "second", "first"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn fault_injection_fails_reads_and_writes_independently(
    repository: InMemoryTaskRepository,
) {
    let task = task_created_at("Fix bug", 0);
    repository.store(&task).await.expect("seeding should succeed");
    let flaky = FaultInjectingTaskRepository::new(repository);

    flaky.set_fail_reads(true);
    assert!(matches!(
        flaky.list().await,
        Err(TaskRepositoryError::Persistence(_))
    ));
    assert!(matches!(
        flaky.find_by_id(task.id()).await,
        Err(TaskRepositoryError::Persistence(_))
    ));

    // Writes still pass through while only reads are failing.
    let other = task_created_at("Write changelog", 1);
    flaky.store(&other).await.expect("store should succeed");

    flaky.set_fail_reads(false);
    flaky.set_fail_writes(true);
    assert!(matches!(
        flaky.update(&task).await,
        Err(TaskRepositoryError::Persistence(_))
    ));

    let tasks = flaky.list().await.expect("listing should succeed");
    assert_eq!(tasks.len(), 2);
}
