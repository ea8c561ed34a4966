//! Domain-focused tests for task values and construction.

use crate::task::domain::{
    Task, TaskDescription, TaskDomainError, TaskStatus, TaskTitle,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[rstest]
fn title_is_trimmed(clock: DefaultClock) {
    let title = TaskTitle::new("  Fix bug  ").expect("valid title");
    assert_eq!(title.as_str(), "Fix bug");

    let task = Task::new(title, TaskDescription::default(), &clock);
    assert_eq!(task.title().as_str(), "Fix bug");
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn title_rejects_empty_values(#[case] raw: &str) {
    assert_eq!(TaskTitle::new(raw), Err(TaskDomainError::EmptyTitle));
}

#[rstest]
fn description_is_trimmed_and_defaults_to_empty() {
    let description = TaskDescription::new("  some context  ");
    assert_eq!(description.as_str(), "some context");

    let empty = TaskDescription::default();
    assert!(empty.is_empty());
    assert_eq!(empty.char_count(), 0);
}

#[rstest]
fn description_counts_characters_not_bytes() {
    let description = TaskDescription::new("éß漢");
    assert_eq!(description.char_count(), 3);
}

#[rstest]
#[case("To-Do", TaskStatus::ToDo)]
#[case("In-Progress", TaskStatus::InProgress)]
#[case("Done", TaskStatus::Done)]
#[case("  done  ", TaskStatus::Done)]
#[case("TO-DO", TaskStatus::ToDo)]
fn status_parses_known_values(#[case] raw: &str, #[case] expected: TaskStatus) {
    assert_eq!(TaskStatus::try_from(raw), Ok(expected));
}

#[rstest]
#[case("Cancelled")]
#[case("ToDo")]
#[case("")]
#[case("in progress")]
fn status_rejects_unknown_values(#[case] raw: &str) {
    let result = TaskStatus::try_from(raw);
    assert!(result.is_err());
}

#[rstest]
fn status_serializes_canonical_strings() -> eyre::Result<()> {
    let value = serde_json::to_value(TaskStatus::InProgress)?;
    eyre::ensure!(value == serde_json::json!("In-Progress"), "unexpected wire form: {value}");

    let parsed: TaskStatus = serde_json::from_value(serde_json::json!("To-Do"))?;
    eyre::ensure!(parsed == TaskStatus::ToDo, "unexpected parse result");
    Ok(())
}

#[rstest]
fn new_tasks_start_in_todo_with_unique_identifiers(clock: DefaultClock) {
    let first = Task::new(
        TaskTitle::new("First").expect("valid title"),
        TaskDescription::default(),
        &clock,
    );
    let second = Task::new(
        TaskTitle::new("Second").expect("valid title"),
        TaskDescription::default(),
        &clock,
    );

    assert_eq!(first.status(), TaskStatus::ToDo);
    assert_eq!(second.status(), TaskStatus::ToDo);
    assert_ne!(first.id(), second.id());
}
