//! Display status of a task.

/// Status projected from a task's `done` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskStatus {
    /// Task still to do
    #[default]
    Pending,

    /// Task has been marked done
    Done,
}

impl From<bool> for TaskStatus {
    fn from(done: bool) -> Self {
        if done {
            TaskStatus::Done
        } else {
            TaskStatus::Pending
        }
    }
}

impl TaskStatus {
    /// Label shown in the task list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use todo_core::models::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::Done.as_str(), "Done");
    /// assert_eq!(TaskStatus::Pending.as_str(), "Pending");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::Done => "Done",
        }
    }
}
