//! Collection wrapper for displaying the whole task list.

use std::fmt;

use super::TaskLine;
use crate::models::Task;

/// Newtype wrapper rendering the task list as markdown, one list item per
/// task in list order. Handles the empty list gracefully.
///
/// # Examples
///
/// ```rust
/// use todo_core::{display::TaskList, models::Task};
///
/// let tasks = vec![Task::new("Buy milk", "high", "2025-03-01")];
/// let output = TaskList(&tasks).to_string();
/// assert!(output.contains("1. Buy milk"));
///
/// assert_eq!(TaskList(&[]).to_string(), "No tasks found.\n");
/// ```
pub struct TaskList<'a>(pub &'a [Task]);

impl TaskList<'_> {
    /// One formatted row per task, as shown in the list widget.
    pub fn lines(&self) -> Vec<String> {
        self.0
            .iter()
            .enumerate()
            .map(|(position, task)| TaskLine::new(position, task).to_string())
            .collect()
    }
}

impl fmt::Display for TaskList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No tasks found.")
        } else {
            for line in self.lines() {
                writeln!(f, "- {line}")?;
            }
            Ok(())
        }
    }
}
