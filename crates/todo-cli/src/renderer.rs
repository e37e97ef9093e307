//! Terminal rendering module for rich markdown output
//!
//! This module provides terminal rendering capabilities using termimad
//! for rich markdown display with optional fallback to plain text.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};
use todo_core::{Notification, NotificationKind, TaskList};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            // Headers keep their hash marks; termimad would strip them
            for line in markdown.lines() {
                if line.starts_with('#') {
                    println!("\x1b[34m{line}\x1b[0m");
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
        io::stdout().flush()?;
        Ok(())
    }

    /// Print text that may contain user input, without markdown styling
    pub fn print_verbatim(&self, text: &str) -> Result<()> {
        print!("{text}");
        io::stdout().flush()?;
        Ok(())
    }

    /// Render the task list under a title.
    ///
    /// Rows are user text and are printed verbatim in both modes; only the
    /// title is styled.
    pub fn render_task_list(&self, title: &str, tasks: &TaskList<'_>) -> Result<()> {
        let mut out = io::stdout().lock();
        self.write_task_list(&mut out, title, tasks)?;
        out.flush()?;
        Ok(())
    }

    fn write_task_list<W: Write>(
        &self,
        out: &mut W,
        title: &str,
        tasks: &TaskList<'_>,
    ) -> io::Result<()> {
        if self.rich_enabled {
            writeln!(out, "\x1b[34m# {title}\x1b[0m")?;
        } else {
            writeln!(out, "# {title}")?;
        }
        writeln!(out)?;
        write!(out, "{tasks}")
    }

    /// Render the outcome of an action, colored by kind in rich mode
    pub fn notify(&self, notification: &Notification) -> Result<()> {
        if self.rich_enabled {
            let color = match notification.kind {
                NotificationKind::Success => 32,
                NotificationKind::Error => 31,
            };
            println!(
                "\x1b[1;{color}m{}:\x1b[0m {}",
                notification.title(),
                notification.message
            );
        } else {
            print!("{notification}");
        }
        io::stdout().flush()?;
        Ok(())
    }

    /// Print an input prompt without a trailing newline
    pub fn prompt(&self, prompt: &str) -> Result<()> {
        print!("{prompt}");
        io::stdout().flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
