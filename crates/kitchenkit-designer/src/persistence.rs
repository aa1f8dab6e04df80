//! Storage backends for the serialized project.
//!
//! The planner only needs to save and load a single project document, so a
//! store is anything that can hold one string.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Holds the saved project document.
pub trait ProjectStore {
    fn save(&mut self, document: &str) -> Result<(), PersistenceError>;

    /// The last saved document, or `None` if nothing has been saved yet.
    fn load(&self) -> Result<Option<String>, PersistenceError>;
}

/// Stores the document in a file, creating parent directories on save.
#[derive(Debug, Clone)]
pub struct FileProjectStore {
    path: PathBuf,
}

impl FileProjectStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ProjectStore for FileProjectStore {
    fn save(&mut self, document: &str) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }
        std::fs::write(&self.path, document).map_err(|e| self.io_error(e))?;
        tracing::debug!(path = %self.path.display(), bytes = document.len(), "Project stored");
        Ok(())
    }

    fn load(&self) -> Result<Option<String>, PersistenceError> {
        match std::fs::read_to_string(&self.path) {
            Ok(document) => Ok(Some(document)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error(e)),
        }
    }
}

/// In-memory store, used by tests and hosts without a filesystem.
#[derive(Debug, Clone, Default)]
pub struct MemoryProjectStore {
    document: Option<String>,
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProjectStore for MemoryProjectStore {
    fn save(&mut self, document: &str) -> Result<(), PersistenceError> {
        self.document = Some(document.to_string());
        Ok(())
    }

    fn load(&self) -> Result<Option<String>, PersistenceError> {
        Ok(self.document.clone())
    }
}
