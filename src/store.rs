//! Durable key-value state.
//!
//! The app persists exactly one value: whether onboarding was completed.
//! It is stored as `disruption_onboarding_completed = "true"` in a flat TOML
//! table next to the config file; an absent key means "not completed".

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Key under which the onboarding flag is stored
pub const ONBOARDING_COMPLETED_KEY: &str = "disruption_onboarding_completed";

/// Minimal string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Store backed by a TOML file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store; an
    /// unreadable or malformed one is logged and treated as empty.
    pub fn open(path: &Path) -> Self {
        let entries = if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(entries) => entries,
                    Err(e) => {
                        warn!("Failed to parse state file {:?}: {}", path, e);
                        BTreeMap::new()
                    }
                },
                Err(e) => {
                    warn!("Failed to read state file {:?}: {}", path, e);
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        Self {
            path: path.to_path_buf(),
            entries,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create state directory: {:?}", parent))?;
        }

        let content =
            toml::to_string_pretty(&self.entries).context("Failed to serialize state file")?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write state file: {:?}", self.path))?;

        debug!("State saved to {:?}", self.path);
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.save()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.save()?;
        }
        Ok(())
    }
}

/// In-memory store, for tests and `--ephemeral` sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Read the onboarding flag. Only an exact `"true"` counts as completed.
pub fn onboarding_completed(store: &dyn KeyValueStore) -> bool {
    store.get(ONBOARDING_COMPLETED_KEY).as_deref() == Some("true")
}

/// Persist the onboarding flag as completed.
pub fn mark_onboarding_completed(store: &mut dyn KeyValueStore) -> Result<()> {
    store.set(ONBOARDING_COMPLETED_KEY, "true")
}

/// Forget the onboarding flag so the next login shows onboarding again.
pub fn reset_onboarding(store: &mut dyn KeyValueStore) -> Result<()> {
    store.remove(ONBOARDING_COMPLETED_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_flag() {
        let mut store = MemoryStore::new();
        assert!(!onboarding_completed(&store));
        mark_onboarding_completed(&mut store).unwrap();
        assert!(onboarding_completed(&store));
    }

    #[test]
    fn test_file_store_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("state.toml");

        let mut store = FileStore::open(&path);
        assert!(!onboarding_completed(&store));
        mark_onboarding_completed(&mut store).unwrap();

        let reopened = FileStore::open(&path);
        assert!(onboarding_completed(&reopened));

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("disruption_onboarding_completed = \"true\""));
    }

    #[test]
    fn test_file_store_remove() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.toml");

        let mut store = FileStore::open(&path);
        mark_onboarding_completed(&mut store).unwrap();
        store.remove(ONBOARDING_COMPLETED_KEY).unwrap();

        assert!(!onboarding_completed(&FileStore::open(&path)));
    }

    #[test]
    fn test_malformed_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("state.toml");
        std::fs::write(&path, "this is = not [valid").unwrap();

        let store = FileStore::open(&path);
        assert!(!onboarding_completed(&store));
    }

    #[test]
    fn test_reset_onboarding() {
        let mut store = MemoryStore::new();
        mark_onboarding_completed(&mut store).unwrap();
        reset_onboarding(&mut store).unwrap();
        assert!(!onboarding_completed(&store));
        reset_onboarding(&mut store).unwrap();
    }

    #[test]
    fn test_non_true_value_is_not_completed() {
        let mut store = MemoryStore::new();
        store.set(ONBOARDING_COMPLETED_KEY, "yes").unwrap();
        assert!(!onboarding_completed(&store));
    }
}
