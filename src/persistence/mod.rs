//! Progress persistence backends
//!
//! Features:
//! - `ProgressStore` seam between the game and wherever the record lives
//! - File backend (native), LocalStorage backend (web), in-memory backend
//! - A missing record loads as empty; malformed or unreadable data is an error the
//!   caller is expected to log and treat as empty

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::progress::ProgressRecord;

#[cfg(target_arch = "wasm32")]
pub mod local_storage;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, PersistenceError>;

/// Where the progress record is kept
pub trait ProgressStore {
    /// Read the stored record; an absent record is `Ok(empty)`
    fn load(&mut self) -> Result<ProgressRecord>;

    /// Replace the stored record
    fn save(&mut self, progress: &ProgressRecord) -> Result<()>;

    /// Persist an empty record
    fn reset(&mut self) -> Result<()> {
        self.save(&ProgressRecord::new())
    }
}

fn parse(raw: Option<&str>) -> Result<ProgressRecord> {
    match raw {
        Some(json) => Ok(ProgressRecord::from_json(json)?),
        None => Ok(ProgressRecord::new()),
    }
}

/// Keeps the serialized record in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    raw: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self { raw: None }
    }

    /// Seed the store with raw text, valid or not
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    /// The text as last written
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl ProgressStore for MemoryStore {
    fn load(&mut self) -> Result<ProgressRecord> {
        parse(self.raw.as_deref())
    }

    fn save(&mut self, progress: &ProgressRecord) -> Result<()> {
        self.raw = Some(progress.to_json()?);
        Ok(())
    }
}

/// Keeps the serialized record in a JSON file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<dir>/levelProgress.json`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(
            dir.as_ref()
                .join(format!("{}.json", crate::consts::PROGRESS_KEY)),
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProgressStore for FileStore {
    fn load(&mut self) -> Result<ProgressRecord> {
        match fs::read_to_string(&self.path) {
            Ok(json) => parse(Some(&json)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(ProgressRecord::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, progress: &ProgressRecord) -> Result<()> {
        let json = progress.to_json()?;
        // Old record stays in place until the rename
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        log::info!("Progress saved to {}", self.path.display());
        Ok(())
    }
}
