use focusflow_core::{
    AddTaskRequest, DebugStatePatch, Priority, ProfilePatch, Task, TaskStore,
    TaskValidationError, OVERDUE_WINDOW_MS,
};
use uuid::Uuid;

const NOW: i64 = 1_800_000_000_000;
const HOUR_MS: i64 = 60 * 60 * 1000;
const DAY_MS: i64 = 24 * HOUR_MS;

fn overdue_fixture(id: &str, days_ago: i64) -> Task {
    Task::with_id(
        Uuid::parse_str(id).unwrap(),
        format!("Overdue Task {days_ago}"),
        Some(NOW - days_ago * DAY_MS),
        None,
        None,
    )
    .unwrap()
}

#[test]
fn add_task_returns_fresh_id_and_preserves_insertion_order() {
    let mut store = TaskStore::new();

    let first = store.add_task(AddTaskRequest::titled("first")).unwrap();
    let second = store.add_task(AddTaskRequest::titled("second")).unwrap();

    assert_ne!(first, second);
    assert_eq!(store.tasks().len(), 2);
    assert_eq!(store.tasks()[0].title, "first");
    assert_eq!(store.tasks()[1].title, "second");
}

#[test]
fn add_task_rejects_blank_title_without_mutation() {
    let mut store = TaskStore::new();

    let err = store
        .add_task(AddTaskRequest::titled("   "))
        .unwrap_err();
    assert_eq!(err, TaskValidationError::EmptyTitle);
    assert!(store.tasks().is_empty());
}

#[test]
fn add_task_applies_explicit_fields() {
    let mut store = TaskStore::new();

    let id = store
        .add_task(AddTaskRequest {
            title: "pay rent".to_string(),
            due_at: Some(NOW + DAY_MS),
            category: Some("finance".to_string()),
            priority: Some(Priority::High),
        })
        .unwrap();

    let task = store.tasks().iter().find(|t| t.id == id).unwrap();
    assert_eq!(task.due_at, Some(NOW + DAY_MS));
    assert_eq!(task.category, "finance");
    assert_eq!(task.priority, Priority::High);
    assert_eq!(task.completed_at, None);
}

#[test]
fn complete_task_toggles_timestamp_and_counter() {
    let mut store = TaskStore::new();
    let id = store.add_task(AddTaskRequest::titled("laundry")).unwrap();

    store.complete_task(id, NOW);
    assert_eq!(store.tasks()[0].completed_at, Some(NOW));
    assert_eq!(store.profile().total_completed_tasks, 1);

    store.complete_task(id, NOW + HOUR_MS);
    assert_eq!(store.tasks()[0].completed_at, None);
    assert_eq!(store.profile().total_completed_tasks, 0);
}

#[test]
fn undo_completion_never_drives_counter_negative() {
    let mut store = TaskStore::new();
    // Fixture state a debug panel can produce: a completed task alongside
    // a zeroed counter.
    let mut task = overdue_fixture("00000000-0000-4000-8000-000000000001", 1);
    task.completed_at = Some(NOW - HOUR_MS);
    store.load_debug_state(DebugStatePatch {
        tasks: Some(vec![task.clone()]),
        profile: ProfilePatch::default(),
    });

    store.complete_task(task.id, NOW);
    assert_eq!(store.profile().total_completed_tasks, 0);

    store.complete_task(task.id, NOW);
    store.complete_task(task.id, NOW);
    assert_eq!(store.profile().total_completed_tasks, 0);
}

#[test]
fn complete_and_delete_unknown_id_are_no_ops() {
    let mut store = TaskStore::new();
    store.add_task(AddTaskRequest::titled("keep me")).unwrap();
    let stranger = Uuid::new_v4();

    store.complete_task(stranger, NOW);
    store.delete_task(stranger);

    assert_eq!(store.tasks().len(), 1);
    assert_eq!(store.profile().total_completed_tasks, 0);
}

#[test]
fn delete_task_removes_only_the_target() {
    let mut store = TaskStore::new();
    let keep = store.add_task(AddTaskRequest::titled("keep")).unwrap();
    let drop = store.add_task(AddTaskRequest::titled("drop")).unwrap();

    store.delete_task(drop);

    assert_eq!(store.tasks().len(), 1);
    assert_eq!(store.tasks()[0].id, keep);
}

#[test]
fn set_onboarding_seen_is_one_way() {
    let mut store = TaskStore::new();
    assert!(!store.profile().has_seen_onboarding);

    store.set_onboarding_seen();
    store.set_onboarding_seen();
    assert!(store.profile().has_seen_onboarding);
}

#[test]
fn reschedule_overdue_moves_window_matches_to_now() {
    let mut store = TaskStore::new();
    let mut completed = overdue_fixture("00000000-0000-4000-8000-000000000001", 2);
    completed.completed_at = Some(NOW - DAY_MS);
    let stale = Task::with_id(
        Uuid::parse_str("00000000-0000-4000-8000-000000000002").unwrap(),
        "stale lapse",
        Some(NOW - OVERDUE_WINDOW_MS - DAY_MS),
        None,
        None,
    )
    .unwrap();
    store.load_debug_state(DebugStatePatch {
        tasks: Some(vec![
            overdue_fixture("00000000-0000-4000-8000-000000000003", 1),
            overdue_fixture("00000000-0000-4000-8000-000000000004", 3),
            completed.clone(),
            stale.clone(),
        ]),
        profile: ProfilePatch::default(),
    });

    let moved = store.reschedule_overdue(NOW);

    assert_eq!(moved, 2);
    assert_eq!(store.overdue_count(NOW), 0);
    assert_eq!(store.profile().last_intervention_at, Some(NOW));
    // Non-matching tasks keep their original deadlines.
    let tasks = store.tasks();
    assert_eq!(tasks[0].due_at, Some(NOW));
    assert_eq!(tasks[1].due_at, Some(NOW));
    assert_eq!(tasks[2].due_at, completed.due_at);
    assert_eq!(tasks[3].due_at, stale.due_at);
}

#[test]
fn clear_overdue_removes_exactly_the_window_matches() {
    let mut store = TaskStore::new();
    let mut completed = overdue_fixture("00000000-0000-4000-8000-000000000001", 2);
    completed.completed_at = Some(NOW - DAY_MS);
    let no_deadline = Task::with_id(
        Uuid::parse_str("00000000-0000-4000-8000-000000000002").unwrap(),
        "someday",
        None,
        None,
        None,
    )
    .unwrap();
    let stale = Task::with_id(
        Uuid::parse_str("00000000-0000-4000-8000-000000000005").unwrap(),
        "stale lapse",
        Some(NOW - 8 * DAY_MS),
        None,
        None,
    )
    .unwrap();
    store.load_debug_state(DebugStatePatch {
        tasks: Some(vec![
            overdue_fixture("00000000-0000-4000-8000-000000000003", 1),
            completed.clone(),
            no_deadline.clone(),
            overdue_fixture("00000000-0000-4000-8000-000000000004", 4),
            stale.clone(),
        ]),
        profile: ProfilePatch::default(),
    });

    let removed = store.clear_overdue(NOW);

    assert_eq!(removed, 2);
    let survivors: Vec<_> = store.tasks().iter().map(|t| t.id).collect();
    assert_eq!(survivors, vec![completed.id, no_deadline.id, stale.id]);
    assert_eq!(store.profile().last_intervention_at, Some(NOW));
}

#[test]
fn dismiss_records_acknowledgment_without_touching_tasks() {
    let mut store = TaskStore::new();
    store.load_debug_state(DebugStatePatch {
        tasks: Some(vec![overdue_fixture(
            "00000000-0000-4000-8000-000000000001",
            1,
        )]),
        profile: ProfilePatch::default(),
    });

    store.dismiss(NOW);

    assert_eq!(store.tasks().len(), 1);
    assert_eq!(store.profile().last_intervention_at, Some(NOW));
}

#[test]
fn load_debug_state_patches_profile_fields_independently() {
    let mut store = TaskStore::new();

    store.load_debug_state(DebugStatePatch {
        tasks: None,
        profile: ProfilePatch {
            total_completed_tasks: Some(7),
            has_seen_onboarding: None,
            last_intervention_at: Some(Some(NOW)),
        },
    });

    assert_eq!(store.profile().total_completed_tasks, 7);
    assert!(!store.profile().has_seen_onboarding);
    assert_eq!(store.profile().last_intervention_at, Some(NOW));
    assert!(store.tasks().is_empty());
}

#[test]
fn reset_restores_empty_defaults() {
    let mut store = TaskStore::new();
    store.add_task(AddTaskRequest::titled("gone soon")).unwrap();
    store.set_onboarding_seen();
    store.dismiss(NOW);

    store.reset();

    assert!(store.tasks().is_empty());
    assert_eq!(store.profile().total_completed_tasks, 0);
    assert!(!store.profile().has_seen_onboarding);
    assert_eq!(store.profile().last_intervention_at, None);
}
