//! File I/O operations (save, load, export, import) for planner state.

use std::path::Path;

use anyhow::Context;

use super::PlannerState;
use crate::persistence::ProjectStore;
use crate::serialization::{ProjectFile, ProjectFileError};

impl PlannerState {
    /// Save project to file.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        self.project_file().save_to_file(&path)?;
        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    /// Load project from file. Leaves the current project untouched on error.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let file = ProjectFile::load_from_file(&path)?;
        self.created = Some(file.metadata.created);
        self.replace_project(file.into_project());
        self.current_file_path = Some(path.as_ref().to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    /// Project as an interchange JSON document.
    pub fn export_json(&self) -> Result<String, ProjectFileError> {
        self.project_file().to_json()
    }

    fn project_file(&self) -> ProjectFile {
        ProjectFile::from_project(&self.project).with_created(self.created)
    }

    /// Replace the project with an imported document. History is cleared;
    /// on error nothing changes.
    pub fn import_json(&mut self, json: &str) -> Result<(), ProjectFileError> {
        let file = ProjectFile::from_json(json)?;
        let created = file.metadata.created;
        let project = file.into_project();
        tracing::info!(name = %project.name, mode = %project.mode, "Imported project");
        self.replace_project(project);
        self.created = Some(created);
        self.is_modified = true;
        Ok(())
    }

    /// Persist the project to `store`.
    pub fn save_to(&mut self, store: &mut dyn ProjectStore) -> anyhow::Result<()> {
        let json = self.export_json().context("Failed to serialize project")?;
        store.save(&json).context("Failed to store project")?;
        self.is_modified = false;
        Ok(())
    }

    /// Restore the project from `store`. Returns `false` when the store is
    /// empty.
    pub fn load_from(&mut self, store: &dyn ProjectStore) -> anyhow::Result<bool> {
        let Some(json) = store.load().context("Failed to read stored project")? else {
            return Ok(false);
        };
        let file = ProjectFile::from_json(&json).context("Failed to parse stored project")?;
        let created = file.metadata.created;
        let project = file.into_project();
        tracing::info!(name = %project.name, "Restored project");
        self.replace_project(project);
        self.created = Some(created);
        self.is_modified = false;
        Ok(true)
    }
}
