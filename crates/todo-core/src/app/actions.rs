//! User actions on the task list.

use log::{debug, info};

use super::TodoApp;
use crate::{display::Notification, params::TaskForm};

pub const TASK_ADDED: &str = "Task added!";
pub const TASK_DONE: &str = "Task marked as done!";
pub const TASK_DELETED: &str = "Task deleted!";
pub const INVALID_DATE: &str = "Invalid date format. Task not added.";
pub const NO_SELECTION: &str = "No task selected.";

impl TodoApp {
    /// Adds a task from the current form inputs.
    ///
    /// The due date must parse as `YYYY-MM-DD`. On failure nothing changes
    /// and the inputs are kept so the user can correct them. On success the
    /// task is appended, the list is saved and redrawn, and the inputs are
    /// cleared.
    pub fn add_task(&mut self) -> Notification {
        if let Err(e) = self.form.validate() {
            debug!("Rejected new task: {e}");
            return self.notify(Notification::failure(INVALID_DATE));
        }

        let task = self.form.to_task();
        info!("Adding task '{}' due {}", task.task, task.due_date);
        self.tasks.push(task);
        self.commit();
        self.form.clear();
        self.notify(Notification::success(TASK_ADDED))
    }

    /// Fills the form with `form` and adds it as a task.
    pub fn add_task_with(&mut self, form: TaskForm) -> Notification {
        self.set_form(form);
        self.add_task()
    }

    /// Marks the selected task as done.
    ///
    /// Marking an already finished task is allowed and still saves.
    pub fn mark_task_done(&mut self) -> Notification {
        let Some(position) = self.selected_position() else {
            return self.notify(Notification::failure(NO_SELECTION));
        };

        info!("Marking task {} as done", position + 1);
        self.tasks[position].done = true;
        self.commit();
        self.notify(Notification::success(TASK_DONE))
    }

    /// Deletes the selected task. Every later task moves up one position.
    pub fn delete_task(&mut self) -> Notification {
        let Some(position) = self.selected_position() else {
            return self.notify(Notification::failure(NO_SELECTION));
        };

        let removed = self.tasks.remove(position);
        info!("Deleted task {} '{}'", position + 1, removed.task);
        self.commit();
        self.notify(Notification::success(TASK_DELETED))
    }

    /// The selection, if it still points at an existing row.
    fn selected_position(&self) -> Option<usize> {
        self.selection.filter(|&position| position < self.tasks.len())
    }

    fn commit(&mut self) {
        self.store.save(&self.tasks);
        self.refresh_display();
    }

    fn notify(&mut self, notification: Notification) -> Notification {
        self.last_notification = Some(notification.clone());
        notification
    }
}
