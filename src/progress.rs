//! Level progress record
//!
//! Best completion time per level, persisted as `{"1": {"bestTime": 12}}`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Best result for a single level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelBest {
    /// Fastest completion (whole seconds)
    pub best_time: u32,
}

/// Best times keyed by level id
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressRecord {
    pub levels: BTreeMap<String, LevelBest>,
}

impl ProgressRecord {
    /// Create empty record
    pub fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
        }
    }

    /// Record a completion time. Only a faster time replaces an existing best.
    /// Returns true if the stored best changed.
    pub fn record(&mut self, level_id: &str, secs: u32) -> bool {
        match self.levels.get_mut(level_id) {
            Some(best) if secs >= best.best_time => false,
            Some(best) => {
                best.best_time = secs;
                true
            }
            None => {
                self.levels
                    .insert(level_id.to_string(), LevelBest { best_time: secs });
                true
            }
        }
    }

    /// Best time for a level, if it has been completed
    pub fn best_time(&self, level_id: &str) -> Option<u32> {
        self.levels.get(level_id).map(|b| b.best_time)
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn clear(&mut self) {
        self.levels.clear();
    }

    /// Serialize to the persisted text layout
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse the persisted text layout
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
