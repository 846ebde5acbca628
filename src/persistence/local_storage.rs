//! Browser LocalStorage backend

use super::{PersistenceError, ProgressStore, Result, parse};
use crate::consts::PROGRESS_KEY;
use crate::progress::ProgressRecord;

/// Keeps the serialized record under a LocalStorage key
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    key: String,
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new(PROGRESS_KEY)
    }
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| PersistenceError::Unavailable("no LocalStorage".to_string()))
    }
}

impl ProgressStore for LocalStorageStore {
    fn load(&mut self) -> Result<ProgressRecord> {
        let raw = Self::storage()?
            .get_item(&self.key)
            .map_err(|e| PersistenceError::Unavailable(format!("{:?}", e)))?;
        parse(raw.as_deref())
    }

    fn save(&mut self, progress: &ProgressRecord) -> Result<()> {
        let json = progress.to_json()?;
        Self::storage()?
            .set_item(&self.key, &json)
            .map_err(|e| PersistenceError::Unavailable(format!("{:?}", e)))?;
        log::info!("Progress saved ({} levels)", progress.levels.len());
        Ok(())
    }
}
