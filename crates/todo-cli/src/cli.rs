//! One-shot command handlers.
//!
//! Each subcommand runs exactly one controller action, prints its
//! notification followed by the refreshed list, and maps the notification to
//! the process exit status.

use std::process::ExitCode;

use anyhow::Result;
use log::debug;
use todo_core::{Notification, TodoApp};

use crate::{
    args::{AddArgs, Commands, PositionArgs},
    renderer::TerminalRenderer,
};

/// Window-style title shown above the list.
pub const TITLE: &str = "To-Do List";

/// Print the task list under its title.
pub fn show_list(renderer: &TerminalRenderer, app: &TodoApp) -> Result<()> {
    renderer.render_task_list(TITLE, &app.task_list())
}

/// Drives a [`TodoApp`] from parsed subcommands.
pub struct Cli {
    app: TodoApp,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(app: TodoApp, renderer: TerminalRenderer) -> Self {
        Self { app, renderer }
    }

    /// Dispatch a subcommand.
    pub fn handle_command(&mut self, command: Commands) -> Result<ExitCode> {
        match command {
            Commands::List => {
                self.list()?;
                Ok(ExitCode::SUCCESS)
            }
            Commands::Add(args) => {
                let notification = self.add(args);
                self.finish(&notification)
            }
            Commands::Done(args) => {
                self.select(&args);
                let notification = self.app.mark_task_done();
                self.finish(&notification)
            }
            Commands::Delete(args) => {
                self.select(&args);
                let notification = self.app.delete_task();
                self.finish(&notification)
            }
        }
    }

    pub fn list(&self) -> Result<()> {
        show_list(&self.renderer, &self.app)
    }

    fn add(&mut self, args: AddArgs) -> Notification {
        self.app.add_task_with(args.into())
    }

    /// Select the task a position argument names. A position with no task
    /// leaves nothing selected, so the action reports the missing selection.
    fn select(&mut self, args: &PositionArgs) {
        self.app.clear_selection();
        if let Some(index) = args.index() {
            if let Err(e) = self.app.select(index) {
                debug!("{e}");
            }
        }
    }

    fn finish(&self, notification: &Notification) -> Result<ExitCode> {
        self.renderer.notify(notification)?;
        if !notification.is_success() {
            return Ok(ExitCode::FAILURE);
        }
        println!();
        self.list()?;
        Ok(ExitCode::SUCCESS)
    }
}
