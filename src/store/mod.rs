//! File-backed persistence for the working agenda and the archive.
//! Everything lives as YAML inside the workspace directory; commands never
//! touch the files directly.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::agenda::{Agenda, ArchiveEntry};
use std::fs;
use std::path::PathBuf;

pub struct Store {
    workspace: PathBuf,
}

impl Store {
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let workspace = cfg.workspace_dir();
        if !workspace.exists() {
            return Err(AppError::Store(format!(
                "workspace {} does not exist, run 'ragenda init' first",
                workspace.display()
            )));
        }
        Ok(Self { workspace })
    }

    /// Create the workspace directory and an empty archive if missing.
    pub fn create(cfg: &Config) -> AppResult<Self> {
        let workspace = cfg.workspace_dir();
        fs::create_dir_all(&workspace)?;
        let store = Self { workspace };
        if !store.archive_file().exists() {
            store.save_archive(&[])?;
        }
        Ok(store)
    }

    pub fn current_file(&self) -> PathBuf {
        self.workspace.join("current.yaml")
    }

    pub fn archive_file(&self) -> PathBuf {
        self.workspace.join("archive.yaml")
    }

    pub fn has_current(&self) -> bool {
        self.current_file().exists()
    }

    pub fn load_current(&self) -> AppResult<Agenda> {
        if !self.has_current() {
            return Err(AppError::NoCurrentAgenda);
        }
        let content = fs::read_to_string(self.current_file())?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn save_current(&self, agenda: &Agenda) -> AppResult<()> {
        let yaml = serde_yaml::to_string(agenda)?;
        fs::write(self.current_file(), yaml)?;
        Ok(())
    }

    pub fn load_archive(&self) -> AppResult<Vec<ArchiveEntry>> {
        if !self.archive_file().exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(self.archive_file())?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn save_archive(&self, entries: &[ArchiveEntry]) -> AppResult<()> {
        let yaml = serde_yaml::to_string(entries)?;
        fs::write(self.archive_file(), yaml)?;
        Ok(())
    }
}
