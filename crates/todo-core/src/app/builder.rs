//! Builder for creating and configuring TodoApp instances.

use std::path::{Path, PathBuf};

use log::info;

use super::TodoApp;
use crate::{error::Result, store::TaskStore};

/// Builder for creating and configuring TodoApp instances.
#[derive(Debug, Clone, Default)]
pub struct TodoAppBuilder {
    store_path: Option<PathBuf>,
}

impl TodoAppBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom store file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/todo/todos.json` or `~/.local/share/todo/todos.json`
    pub fn with_store_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.store_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Loads the store and builds the application state.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::XdgDirectory` if the default path cannot be
    /// resolved and `TodoError::FileSystem` if the store exists but cannot be
    /// read. A missing or unparseable store is not an error.
    pub fn build(self) -> Result<TodoApp> {
        let path = match self.store_path {
            Some(path) => path,
            None => TaskStore::default_path()?,
        };

        let store = TaskStore::new(path);
        let tasks = store.load()?;
        info!(
            "Loaded {} tasks from {}",
            tasks.len(),
            store.path().display()
        );

        Ok(TodoApp::new(store, tasks))
    }
}
