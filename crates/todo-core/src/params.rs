//! Parameter structures for to-do operations
//!
//! These structures carry user input between the interface layer (the
//! interactive session or the one-shot CLI) and the controller, without any
//! framework-specific derives. The CLI converts its clap arguments into them
//! via `From` implementations.
//!
//! ```text
//! User Input → CLI Args (clap) → TaskForm → TodoApp::add_task
//! ```

use jiff::civil::Date;

use crate::{error::TodoError, models::Task};

/// Lexical format every due date must parse against.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// The three text inputs of the task form.
///
/// Inputs hold exactly what the user typed. Only the due date is validated,
/// and only when a task is added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    /// Task description input
    pub task: String,
    /// Priority input (low, medium, high by convention)
    pub priority: String,
    /// Due date input (YYYY-MM-DD)
    pub due_date: String,
}

impl TaskForm {
    /// Create a form pre-filled with the given inputs.
    pub fn new(
        task: impl Into<String>,
        priority: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            task: task.into(),
            priority: priority.into(),
            due_date: due_date.into(),
        }
    }

    /// Validate the due date input and return the parsed calendar date.
    ///
    /// Parsing is strict: day-of-month bounds and leap years are checked and
    /// trailing input is rejected.
    ///
    /// # Errors
    ///
    /// * `TodoError::InvalidInput` - When the due date does not parse as
    ///   `YYYY-MM-DD`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use todo_core::params::TaskForm;
    ///
    /// let form = TaskForm::new("Buy milk", "high", "2024-02-29");
    /// assert!(form.validate().is_ok());
    ///
    /// let form = TaskForm::new("x", "low", "2025-13-40");
    /// assert!(form.validate().is_err());
    /// ```
    pub fn validate(&self) -> crate::Result<Date> {
        if !has_date_shape(&self.due_date) {
            return Err(TodoError::invalid_input("due_date").with_reason(format!(
                "'{}' is not written as YYYY-MM-DD",
                self.due_date
            )));
        }
        Date::strptime(DUE_DATE_FORMAT, &self.due_date).map_err(|e| {
            TodoError::invalid_input("due_date").with_reason(format!(
                "'{}' is not a valid YYYY-MM-DD date: {e}",
                self.due_date
            ))
        })
    }

    /// Build the pending task record described by the inputs.
    pub fn to_task(&self) -> Task {
        Task::new(&self.task, &self.priority, &self.due_date)
    }

    /// Reset all three inputs to empty.
    pub fn clear(&mut self) {
        self.task.clear();
        self.priority.clear();
        self.due_date.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.task.is_empty() && self.priority.is_empty() && self.due_date.is_empty()
    }
}

/// Checks the lexical form `YYYY-M[M]-D[D]` with a four-digit year from
/// 0001 upwards. jiff's `%Y` alone also takes signs, short years and leading
/// whitespace.
fn has_date_shape(input: &str) -> bool {
    let digits = |part: &str, widths: std::ops::RangeInclusive<usize>| {
        widths.contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };

    let mut parts = input.split('-');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day), None) => {
            digits(year, 4..=4) && year != "0000" && digits(month, 1..=2) && digits(day, 1..=2)
        }
        _ => false,
    }
}
