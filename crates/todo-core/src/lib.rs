//! Core library for the `todo` to-do list manager.
//!
//! This crate holds everything except the terminal surface: the task model,
//! the JSON store that persists the whole list, and the [`TodoApp`]
//! controller whose actions (add, mark done, delete) mutate the list, save
//! it, and redraw the display.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use todo_core::{params::TaskForm, TodoAppBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut app = TodoAppBuilder::new()
//!     .with_store_path(Some("todos.json"))
//!     .build()?;
//!
//! let note = app.add_task_with(TaskForm::new("Buy milk", "high", "2025-03-01"));
//! println!("{note}");
//!
//! for line in app.display_lines() {
//!     println!("{line}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod store;

// Re-export commonly used types
pub use app::{TodoApp, TodoAppBuilder};
pub use display::{Notification, NotificationKind, TaskLine, TaskList};
pub use error::{Result, TodoError};
pub use models::{Task, TaskStatus};
pub use params::TaskForm;
pub use store::TaskStore;
