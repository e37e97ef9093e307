//! Display implementations for domain models.

use std::fmt;

use crate::models::{Task, TaskStatus};

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | Priority: {} | Due Date: {} | Status: {}",
            self.task,
            self.priority,
            self.due_date,
            self.status()
        )
    }
}

/// A task together with its 0-based position, formatted as one list row.
///
/// The row number shown to the user is `position + 1`.
pub struct TaskLine<'a> {
    pub position: usize,
    pub task: &'a Task,
}

impl<'a> TaskLine<'a> {
    pub fn new(position: usize, task: &'a Task) -> Self {
        Self { position, task }
    }
}

impl fmt::Display for TaskLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.position + 1, self.task)
    }
}
