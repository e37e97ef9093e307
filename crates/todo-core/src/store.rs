//! Whole-file JSON persistence for the task list.
//!
//! The store is a single JSON array of task objects. It is read once when the
//! application starts and rewritten in full after every mutation. There is no
//! partial update and no locking.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::{debug, error, warn};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::{
    error::{IoResultExt, Result, TodoError},
    models::Task,
};

/// File name of the store inside the data directory.
pub const STORE_FILE_NAME: &str = "todos.json";

/// Handle to the on-disk task list.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    /// Creates a store backed by the given file. Nothing is touched on disk.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the default store path following XDG Base Directory
    /// specification: `$XDG_DATA_HOME/todo/todos.json` or
    /// `~/.local/share/todo/todos.json`. The data directory is created.
    pub fn default_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("todo")
            .place_data_file(STORE_FILE_NAME)
            .map_err(|e| TodoError::XdgDirectory(e.to_string()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the full task list.
    ///
    /// A missing file yields an empty list. A file whose content is not a
    /// JSON array of task records is reported as a warning and also yields an
    /// empty list.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::FileSystem` for any other read failure, such as a
    /// permission error.
    pub fn load(&self) -> Result<Vec<Task>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No store at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(TodoError::file_system(&self.path, e)),
        };

        match serde_json::from_slice::<Vec<Task>>(&bytes) {
            Ok(tasks) => {
                debug!("Loaded {} tasks from {}", tasks.len(), self.path.display());
                Ok(tasks)
            }
            Err(e) => {
                warn!(
                    "Error reading the todo file {}: {e}. Starting with an empty list.",
                    self.path.display()
                );
                Ok(Vec::new())
            }
        }
    }

    /// Persists the full task list, reporting a failure as a diagnostic.
    ///
    /// The previous file content is kept when the write fails.
    pub fn save(&self, tasks: &[Task]) {
        if let Err(e) = self.write(tasks) {
            error!("Error saving the todo file: {e}");
        }
    }

    /// Serializes the full task list and replaces the store file with it.
    ///
    /// The data is written to a sibling temporary file first and then renamed
    /// over the store, so a failed write never truncates the existing file.
    ///
    /// # Errors
    ///
    /// Returns `TodoError::Serialization` if encoding fails and
    /// `TodoError::FileSystem` if the directory, temporary file, or rename
    /// fails.
    pub fn write(&self, tasks: &[Task]) -> Result<()> {
        let data = encode(tasks)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).fs_context(parent)?;
        }

        let tmp = self.tmp_path();
        fs::write(&tmp, &data).fs_context(&tmp)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(TodoError::file_system(&self.path, e));
        }

        debug!("Saved {} tasks to {}", tasks.len(), self.path.display());
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| STORE_FILE_NAME.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Encodes tasks as a JSON array indented by four spaces.
fn encode(tasks: &[Task]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    tasks.serialize(&mut ser)?;
    Ok(buf)
}
