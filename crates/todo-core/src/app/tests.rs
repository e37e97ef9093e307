//! Tests for the app module.

use std::fs;

use super::*;
use crate::{
    app::actions::{INVALID_DATE, NO_SELECTION, TASK_ADDED, TASK_DELETED, TASK_DONE},
    display::NotificationKind,
};
use tempfile::TempDir;

/// Helper function to create a test app over an empty store
fn create_test_app() -> (TempDir, TodoApp) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store_path = temp_dir.path().join("todos.json");
    let app = TodoAppBuilder::new()
        .with_store_path(Some(&store_path))
        .build()
        .expect("Failed to create app");
    (temp_dir, app)
}

/// Helper function to create a test app holding three pending tasks
fn create_app_with_three_tasks() -> (TempDir, TodoApp) {
    let (temp_dir, mut app) = create_test_app();
    for (task, priority, due) in [
        ("first", "low", "2025-01-01"),
        ("second", "medium", "2025-01-02"),
        ("third", "high", "2025-01-03"),
    ] {
        let note = app.add_task_with(TaskForm::new(task, priority, due));
        assert!(note.is_success());
    }
    (temp_dir, app)
}

#[test]
fn test_new_app_is_empty() {
    let (_temp_dir, app) = create_test_app();
    assert!(app.tasks().is_empty());
    assert!(app.display_lines().is_empty());
    assert_eq!(app.selection(), None);
    assert_eq!(app.last_notification(), None);
}

#[test]
fn test_add_task_appends_and_clears_form() {
    let (_temp_dir, mut app) = create_test_app();
    app.form_mut().task = "Buy milk".to_string();
    app.form_mut().priority = "high".to_string();
    app.form_mut().due_date = "2025-03-01".to_string();

    let note = app.add_task();

    assert_eq!(note, Notification::success(TASK_ADDED));
    assert_eq!(app.tasks(), &[Task::new("Buy milk", "high", "2025-03-01")]);
    assert!(app.form().is_empty());
    assert_eq!(
        app.display_lines(),
        &["1. Buy milk | Priority: high | Due Date: 2025-03-01 | Status: Pending".to_string()]
    );
    assert_eq!(app.last_notification(), Some(&note));
}

#[test]
fn test_add_task_invalid_date_keeps_form() {
    let (_temp_dir, mut app) = create_test_app();
    let form = TaskForm::new("x", "low", "2025-13-40");

    let note = app.add_task_with(form.clone());

    assert_eq!(note.kind, NotificationKind::Error);
    assert_eq!(note.message, INVALID_DATE);
    assert!(app.tasks().is_empty());
    assert_eq!(app.form(), &form);
    assert!(!app.store().path().exists());
}

#[test]
fn test_add_task_accepts_empty_text() {
    let (_temp_dir, mut app) = create_test_app();
    let note = app.add_task_with(TaskForm::new("", "", "2025-03-01"));
    assert!(note.is_success());
    assert_eq!(app.tasks()[0].task, "");
    assert_eq!(app.tasks()[0].priority, "");
}

#[test]
fn test_select_out_of_range_is_rejected() {
    let (_temp_dir, mut app) = create_app_with_three_tasks();
    app.select(1).unwrap();

    let err = app.select(3).unwrap_err();
    assert!(matches!(err, TodoError::InvalidInput { .. }));
    assert_eq!(app.selection(), Some(1));
}

#[test]
fn test_mark_task_done_only_touches_selection() {
    let (_temp_dir, mut app) = create_app_with_three_tasks();
    app.select(1).unwrap();

    let note = app.mark_task_done();

    assert_eq!(note, Notification::success(TASK_DONE));
    let done: Vec<bool> = app.tasks().iter().map(|t| t.done).collect();
    assert_eq!(done, vec![false, true, false]);
    assert!(app.display_lines()[1].ends_with("Status: Done"));
}

#[test]
fn test_mark_task_done_twice_is_idempotent() {
    let (_temp_dir, mut app) = create_app_with_three_tasks();
    app.select(0).unwrap();
    app.mark_task_done();
    app.select(0).unwrap();

    let note = app.mark_task_done();

    assert!(note.is_success());
    assert!(app.tasks()[0].done);
}

#[test]
fn test_delete_task_shifts_positions() {
    let (_temp_dir, mut app) = create_app_with_three_tasks();
    let original = app.tasks().to_vec();
    app.select(0).unwrap();

    let note = app.delete_task();

    assert_eq!(note, Notification::success(TASK_DELETED));
    assert_eq!(app.tasks(), &original[1..]);
    assert!(app.display_lines()[0].starts_with("1. second"));
}

#[test]
fn test_actions_without_selection_change_nothing() {
    let (_temp_dir, mut app) = create_app_with_three_tasks();
    let before_tasks = app.tasks().to_vec();
    let before_file = fs::read(app.store().path()).unwrap();

    let done = app.mark_task_done();
    let deleted = app.delete_task();

    assert_eq!(done, Notification::failure(NO_SELECTION));
    assert_eq!(deleted, Notification::failure(NO_SELECTION));
    assert_eq!(app.tasks(), before_tasks.as_slice());
    assert_eq!(fs::read(app.store().path()).unwrap(), before_file);
}

#[test]
fn test_refresh_clears_selection() {
    let (_temp_dir, mut app) = create_app_with_three_tasks();
    app.select(2).unwrap();
    app.mark_task_done();
    assert_eq!(app.selection(), None);

    app.select(2).unwrap();
    app.refresh_display();
    assert_eq!(app.selection(), None);
}

#[test]
fn test_failed_add_keeps_selection() {
    let (_temp_dir, mut app) = create_app_with_three_tasks();
    app.select(1).unwrap();

    app.add_task_with(TaskForm::new("bad", "low", "not a date"));

    assert_eq!(app.selection(), Some(1));
}

#[test]
fn test_add_task_rejects_signed_and_short_years() {
    let (_temp_dir, mut app) = create_test_app();

    for due in ["-2025-03-01", "25-03-01", " 2025-03-01", "0000-03-01"] {
        let note = app.add_task_with(TaskForm::new("x", "low", due));
        assert_eq!(note, Notification::failure(INVALID_DATE), "due date {due:?}");
    }

    assert!(app.tasks().is_empty());
    assert!(!app.store().path().exists());
}
