//! Interactive session over a single [`TodoApp`].
//!
//! The session stands in for the to-do window: three labelled inputs, three
//! action triggers and a selectable list. Each input line is one command and
//! runs to completion before the next line is read.

use std::io::BufRead;

use anyhow::{Context, Result};
use log::debug;
use todo_core::TodoApp;

use crate::{cli::show_list, renderer::TerminalRenderer};

const PROMPT: &str = "> ";

const HELP: &str = "\
## Commands

- `task <text>`: set the task input
- `priority <text>`: set the priority input
- `due <YYYY-MM-DD>`: set the due date input
- `add`: add a task from the inputs
- `select <n>`: select task number n
- `unselect`: clear the selection
- `done`: mark the selected task as done
- `delete`: delete the selected task
- `list`: show the task list
- `form`: show the inputs
- `help`: show this help
- `quit`: leave the session
";

/// One parsed line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    SetTask(String),
    SetPriority(String),
    SetDueDate(String),
    Add,
    Select(usize),
    Unselect,
    Done,
    Delete,
    List,
    Form,
    Help,
    Quit,
    Empty,
}

impl SessionCommand {
    /// Parse a line of input.
    ///
    /// Input values keep their inner and trailing spaces; only the separator
    /// after the command word is dropped.
    ///
    /// # Errors
    ///
    /// Returns a usage message for unknown commands and bad arguments.
    pub fn parse(line: &str) -> std::result::Result<Self, String> {
        let line = line.trim_start();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim_start()),
            None => (line.trim_end(), ""),
        };

        let command = match word.to_lowercase().as_str() {
            "" => Self::Empty,
            "task" => Self::SetTask(rest.to_string()),
            "priority" => Self::SetPriority(rest.to_string()),
            "due" => Self::SetDueDate(rest.to_string()),
            "add" => Self::Add,
            "select" => {
                let position = rest
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| format!("'{}' is not a task number", rest.trim()))?;
                Self::Select(position)
            }
            "unselect" => Self::Unselect,
            "done" => Self::Done,
            "delete" => Self::Delete,
            "list" => Self::List,
            "form" => Self::Form,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(format!("Unknown command '{other}'. Type `help` for commands.")),
        };
        Ok(command)
    }
}

/// Line-driven front end for a [`TodoApp`].
pub struct Session {
    app: TodoApp,
    renderer: TerminalRenderer,
}

impl Session {
    pub fn new(app: TodoApp, renderer: TerminalRenderer) -> Self {
        Self { app, renderer }
    }

    /// Run until `quit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        show_list(&self.renderer, &self.app)?;
        self.renderer.render("\nType `help` for commands.\n")?;

        let mut lines = input.lines();
        loop {
            self.renderer.prompt(PROMPT)?;
            let Some(line) = lines.next() else {
                println!();
                break;
            };
            let line = line.context("Failed to read input")?;

            match SessionCommand::parse(&line) {
                Ok(SessionCommand::Quit) => break,
                Ok(command) => self.apply(command)?,
                Err(usage) => self.renderer.print_verbatim(&format!("{usage}\n"))?,
            }
        }
        Ok(())
    }

    /// Apply one command to the app and redraw what it changed.
    pub fn apply(&mut self, command: SessionCommand) -> Result<()> {
        debug!("Session command: {command:?}");
        let notification = match command {
            SessionCommand::SetTask(text) => {
                self.app.form_mut().task = text;
                return self.show_form();
            }
            SessionCommand::SetPriority(text) => {
                self.app.form_mut().priority = text;
                return self.show_form();
            }
            SessionCommand::SetDueDate(text) => {
                self.app.form_mut().due_date = text;
                return self.show_form();
            }
            SessionCommand::Select(position) => {
                let selected = position
                    .checked_sub(1)
                    .map(|index| self.app.select(index));
                return match selected {
                    Some(Ok(())) => self.renderer.print_verbatim(&format!(
                        "Selected: {}\n",
                        self.app.display_lines()[position - 1]
                    )),
                    Some(Err(e)) => self.renderer.print_verbatim(&format!("{e}\n")),
                    None => self.renderer.render("Task numbers start at 1.\n"),
                };
            }
            SessionCommand::Unselect => {
                self.app.clear_selection();
                return Ok(());
            }
            SessionCommand::List => return show_list(&self.renderer, &self.app),
            SessionCommand::Form => return self.show_form(),
            SessionCommand::Help => return self.renderer.render(HELP),
            SessionCommand::Quit | SessionCommand::Empty => return Ok(()),
            SessionCommand::Add => self.app.add_task(),
            SessionCommand::Done => self.app.mark_task_done(),
            SessionCommand::Delete => self.app.delete_task(),
        };

        self.renderer.notify(&notification)?;
        show_list(&self.renderer, &self.app)
    }

    fn show_form(&self) -> Result<()> {
        let form = self.app.form();
        self.renderer.print_verbatim(&format!(
            "- Task: {}\n- Priority (low, medium, high): {}\n- Due Date (YYYY-MM-DD): {}\n",
            form.task, form.priority, form.due_date
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use todo_core::TodoAppBuilder;

    fn create_test_session() -> (TempDir, Session) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let app = TodoAppBuilder::new()
            .with_store_path(Some(temp_dir.path().join("todos.json")))
            .build()
            .expect("Failed to create app");
        (temp_dir, Session::new(app, TerminalRenderer::new(false)))
    }

    #[test]
    fn test_parse_inputs_keep_inner_spaces() {
        assert_eq!(
            SessionCommand::parse("task  Buy  oat milk "),
            Ok(SessionCommand::SetTask("Buy  oat milk ".to_string()))
        );
        assert_eq!(
            SessionCommand::parse("priority high"),
            Ok(SessionCommand::SetPriority("high".to_string()))
        );
        assert_eq!(
            SessionCommand::parse("due 2025-03-01"),
            Ok(SessionCommand::SetDueDate("2025-03-01".to_string()))
        );
    }

    #[test]
    fn test_parse_bare_input_clears_it() {
        assert_eq!(
            SessionCommand::parse("task"),
            Ok(SessionCommand::SetTask(String::new()))
        );
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!(SessionCommand::parse("add"), Ok(SessionCommand::Add));
        assert_eq!(SessionCommand::parse("  DONE "), Ok(SessionCommand::Done));
        assert_eq!(SessionCommand::parse("delete"), Ok(SessionCommand::Delete));
        assert_eq!(SessionCommand::parse("select 3"), Ok(SessionCommand::Select(3)));
        assert_eq!(SessionCommand::parse("exit"), Ok(SessionCommand::Quit));
        assert_eq!(SessionCommand::parse(""), Ok(SessionCommand::Empty));
    }

    #[test]
    fn test_parse_errors() {
        assert!(SessionCommand::parse("select two").is_err());
        assert!(SessionCommand::parse("select").is_err());
        assert!(SessionCommand::parse("frobnicate").is_err());
    }

    #[test]
    fn test_apply_add_select_done() {
        let (_temp_dir, mut session) = create_test_session();
        for command in [
            SessionCommand::SetTask("Buy milk".to_string()),
            SessionCommand::SetPriority("high".to_string()),
            SessionCommand::SetDueDate("2025-03-01".to_string()),
            SessionCommand::Add,
            SessionCommand::Select(1),
            SessionCommand::Done,
        ] {
            session.apply(command).unwrap();
        }

        assert_eq!(session.app.tasks().len(), 1);
        assert!(session.app.tasks()[0].done);
        assert!(session.app.form().is_empty());
        assert_eq!(
            session.app.last_notification().map(|n| n.message.as_str()),
            Some("Task marked as done!")
        );
    }

    #[test]
    fn test_apply_select_out_of_range_keeps_state() {
        let (_temp_dir, mut session) = create_test_session();
        session.apply(SessionCommand::Select(1)).unwrap();
        session.apply(SessionCommand::Select(0)).unwrap();
        assert_eq!(session.app.selection(), None);

        session.apply(SessionCommand::Delete).unwrap();
        assert_eq!(
            session.app.last_notification().map(|n| n.message.as_str()),
            Some("No task selected.")
        );
    }

    #[test]
    fn test_run_until_quit() {
        let (temp_dir, mut session) = create_test_session();
        let input = "task Water plants\ndue 2025-04-01\nadd\nquit\ntask ignored\nadd\n";

        session.run(input.as_bytes()).unwrap();

        assert_eq!(session.app.tasks().len(), 1);
        assert_eq!(session.app.tasks()[0].task, "Water plants");
        assert!(temp_dir.path().join("todos.json").exists());
    }
}
