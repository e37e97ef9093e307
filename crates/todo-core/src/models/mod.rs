//! Data models for the task list.
//!
//! The only persisted entity is [`Task`]. Its display status is projected
//! from the `done` flag through [`TaskStatus`]; display implementations live
//! in [`crate::display`].
//!
//! # Examples
//!
//! ```rust
//! use todo_core::models::{Task, TaskStatus};
//!
//! let task = Task::new("Buy milk", "high", "2025-03-01");
//! assert!(!task.done);
//! assert_eq!(task.status(), TaskStatus::Pending);
//! ```

pub mod status;
pub mod task;

pub use status::TaskStatus;
pub use task::Task;
