use std::path::{Path, PathBuf};

use tempfile::TempDir;
use todo_core::{TaskStore, TodoApp, TodoAppBuilder};

/// Helper function to create a temporary directory and store path
pub fn create_test_environment() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let store_path = temp_dir.path().join("todos.json");
    (temp_dir, store_path)
}

/// Helper function to open an app over the given store path
#[allow(dead_code)]
pub fn open_app(store_path: &Path) -> TodoApp {
    TodoAppBuilder::new()
        .with_store_path(Some(store_path))
        .build()
        .expect("Failed to create app")
}

/// Reads the store back the same way a fresh start would
#[allow(dead_code)]
pub fn reload(store_path: &Path) -> Vec<todo_core::Task> {
    TaskStore::new(store_path)
        .load()
        .expect("Failed to reload store")
}
