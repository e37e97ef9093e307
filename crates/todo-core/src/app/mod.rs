//! The interactive controller for the task list.
//!
//! [`TodoApp`] is the explicit application state: the in-memory task list,
//! the three form inputs, the current selection and the rendered list rows.
//! Interface layers own one instance and drive it through `&mut` methods.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Interface     │    │    TodoApp      │    │   TaskStore     │
//! │ (session, CLI)  │───▶│ (actions)       │───▶│  (JSON file)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Every action runs validate → mutate → save → refresh and yields exactly
//! one [`Notification`]. Actions never fail: problems the user can fix are
//! reported as error notifications, and store write failures are logged by
//! the store.
//!
//! A task is identified only by its position in the list. Any refresh of the
//! display drops the selection, the way rebuilding a list widget does.
//!
//! # Examples
//!
//! ```rust,no_run
//! use todo_core::{params::TaskForm, TodoAppBuilder};
//!
//! # fn example() -> todo_core::Result<()> {
//! let mut app = TodoAppBuilder::new()
//!     .with_store_path(Some("todos.json"))
//!     .build()?;
//!
//! let note = app.add_task_with(TaskForm::new("Buy milk", "high", "2025-03-01"));
//! assert!(note.is_success());
//!
//! app.select(0)?;
//! app.mark_task_done();
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod builder;

#[cfg(test)]
mod tests;

pub use builder::TodoAppBuilder;

use crate::{
    display::{Notification, TaskList},
    error::{Result, TodoError},
    models::Task,
    params::TaskForm,
    store::TaskStore,
};

/// Application state for one to-do session.
#[derive(Debug)]
pub struct TodoApp {
    store: TaskStore,
    tasks: Vec<Task>,
    form: TaskForm,
    selection: Option<usize>,
    lines: Vec<String>,
    last_notification: Option<Notification>,
}

impl TodoApp {
    /// Creates the state around an already loaded task list and renders it.
    pub(crate) fn new(store: TaskStore, tasks: Vec<Task>) -> Self {
        let mut app = Self {
            store,
            tasks,
            form: TaskForm::default(),
            selection: None,
            lines: Vec::new(),
            last_notification: None,
        };
        app.refresh_display();
        app
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn form(&self) -> &TaskForm {
        &self.form
    }

    /// Mutable access to the form inputs, as a text field would have.
    pub fn form_mut(&mut self) -> &mut TaskForm {
        &mut self.form
    }

    /// Replace all three inputs at once.
    pub fn set_form(&mut self, form: TaskForm) {
        self.form = form;
    }

    /// The rendered list rows, one per task.
    pub fn display_lines(&self) -> &[String] {
        &self.lines
    }

    /// The task list wrapped for markdown display.
    pub fn task_list(&self) -> TaskList<'_> {
        TaskList(&self.tasks)
    }

    /// The currently selected 0-based position, if any.
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// The notification shown by the most recent action.
    pub fn last_notification(&self) -> Option<&Notification> {
        self.last_notification.as_ref()
    }

    /// Selects the row at a 0-based position.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::InvalidInput` if no row exists at `position`; the
    /// previous selection is kept in that case.
    pub fn select(&mut self, position: usize) -> Result<()> {
        if position >= self.tasks.len() {
            return Err(TodoError::invalid_input("selection").with_reason(format!(
                "no task at position {} (list has {})",
                position + 1,
                self.tasks.len()
            )));
        }
        self.selection = Some(position);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Rebuilds the visible rows from the task list and drops the selection.
    pub fn refresh_display(&mut self) {
        self.lines = self.task_list().lines();
        self.selection = None;
    }
}
