//! Display formatting for tasks and action outcomes.
//!
//! Domain models implement [`std::fmt::Display`] where they can stand alone;
//! everything that needs extra context (a task's position in the list, the
//! list as a whole, an action's outcome) goes through a small wrapper type.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │   Formatted     │
//! │  (Task)         │───▶│ (TaskLine,      │───▶│    Output       │
//! │                 │    │  Notification)  │    │  (Terminal)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`models`]: Display implementations for domain models and [`TaskLine`]
//! - [`collections`]: The [`TaskList`] wrapper
//! - [`status`]: Action outcome messages ([`Notification`])
//!
//! # Examples
//!
//! ```rust
//! use todo_core::{display::TaskLine, models::Task};
//!
//! let task = Task::new("Buy milk", "high", "2025-03-01");
//! assert_eq!(
//!     TaskLine::new(0, &task).to_string(),
//!     "1. Buy milk | Priority: high | Due Date: 2025-03-01 | Status: Pending"
//! );
//! ```

pub mod collections;
pub mod models;
pub mod status;

pub use collections::TaskList;
pub use models::TaskLine;
pub use status::{Notification, NotificationKind};
