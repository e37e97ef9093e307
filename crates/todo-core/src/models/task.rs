//! Task record definition.

use serde::{Deserialize, Serialize};

use super::TaskStatus;

/// One entry of the to-do list.
///
/// Field names double as the keys of the persisted JSON objects, so they
/// must not be renamed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Free-text description
    pub task: String,

    /// Free-text priority label, conventionally low/medium/high
    pub priority: String,

    /// Due date as entered, in `YYYY-MM-DD` form
    pub due_date: String,

    /// Set once the task is marked done; never reset
    pub done: bool,
}

impl Task {
    /// Creates a pending task.
    pub fn new(
        task: impl Into<String>,
        priority: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            task: task.into(),
            priority: priority.into(),
            due_date: due_date.into(),
            done: false,
        }
    }

    pub fn status(&self) -> TaskStatus {
        TaskStatus::from(self.done)
    }
}
