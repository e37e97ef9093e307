//! Command-line arguments using clap's derive API.
//!
//! CLI argument structs stay in this crate; they convert into the core
//! parameter types through `From` so `todo-core` never depends on clap.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use todo_core::TaskForm;

/// A small to-do list that lives in a JSON file
///
/// Without a subcommand, `todo` opens an interactive session with a task
/// form, a selectable list and add / done / delete actions. The subcommands
/// run a single action and exit.
#[derive(Parser)]
#[command(version, about, name = "todo")]
pub struct Args {
    /// Path to the JSON store. Defaults to
    /// $XDG_DATA_HOME/todo/todos.json
    #[arg(long, global = true)]
    pub store_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// One-shot commands. Each runs one action against the store and exits.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the task list
    #[command(alias = "ls")]
    List,
    /// Add a task
    #[command(alias = "a")]
    Add(AddArgs),
    /// Mark the task at a position as done
    Done(PositionArgs),
    /// Delete the task at a position
    #[command(alias = "rm")]
    Delete(PositionArgs),
}

/// Add a new task
///
/// The due date must be a real calendar date written as YYYY-MM-DD. Task
/// text and priority are stored exactly as given.
#[derive(ClapArgs)]
pub struct AddArgs {
    /// Description of the task
    pub task: String,
    /// Priority label (low, medium, high)
    #[arg(short, long, default_value = "")]
    pub priority: String,
    /// Due date (YYYY-MM-DD)
    #[arg(short, long = "due", value_name = "YYYY-MM-DD")]
    pub due_date: String,
}

impl From<AddArgs> for TaskForm {
    fn from(val: AddArgs) -> Self {
        TaskForm {
            task: val.task,
            priority: val.priority,
            due_date: val.due_date,
        }
    }
}

/// Select a task by the number shown in the list
#[derive(ClapArgs)]
pub struct PositionArgs {
    /// 1-based position of the task as shown by `todo list`
    pub position: usize,
}

impl PositionArgs {
    /// The 0-based position, or `None` for `0`, which never names a task.
    pub fn index(&self) -> Option<usize> {
        self.position.checked_sub(1)
    }
}
