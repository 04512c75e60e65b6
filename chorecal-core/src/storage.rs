//! Key-value persistence for the chore and member collections.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ChoreCalError, ChoreCalResult};

pub const CHORES_KEY: &str = "chores";
pub const TEAM_MEMBERS_KEY: &str = "teamMembers";

/// A string store keyed by name.
pub trait KeyValueStore {
    /// Read the value under `key`. Missing or unreadable values are `None`.
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> ChoreCalResult<()>;
}

/// In-memory store, for tests and embedding.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> ChoreCalResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per key inside a data directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        JsonFileStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Where an unreadable `<key>.json` is moved so the next write can't clobber it.
    pub fn corrupt_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json.corrupt"))
    }

    fn set_aside(&self, key: &str) {
        let path = self.path(key);
        let corrupt = self.corrupt_path(key);

        match std::fs::rename(&path, &corrupt) {
            Ok(()) => tracing::warn!("Moved unreadable {} to {}", path.display(), corrupt.display()),
            Err(e) => tracing::warn!("Could not move {} aside: {}", path.display(), e),
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path(key);

        if !path.exists() {
            return None;
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) => {
                tracing::warn!("Could not read {}: {}", path.display(), e);
                self.set_aside(key);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> ChoreCalResult<()> {
        std::fs::create_dir_all(&self.dir)?;

        let path = self.path(key);
        let temp = self.dir.join(format!("{key}.json.tmp"));

        std::fs::write(&temp, value)?;
        std::fs::rename(&temp, &path)?;

        tracing::debug!("Wrote {}", path.display());
        Ok(())
    }
}

/// Load a collection, falling back to empty when absent or corrupt.
pub fn load_collection<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Vec<T> {
    let Some(content) = store.get(key) else {
        tracing::debug!("No stored '{}', starting empty", key);
        return Vec::new();
    };

    match serde_json::from_str(&content) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!("Ignoring corrupt '{}' payload: {}", key, e);
            Vec::new()
        }
    }
}

/// Serialize a collection and write it under `key`.
pub fn save_collection<T: Serialize>(
    store: &mut impl KeyValueStore,
    key: &str,
    items: &[T],
) -> ChoreCalResult<()> {
    let content =
        serde_json::to_string(items).map_err(|e| ChoreCalError::Serialization(e.to_string()))?;
    store.set(key, &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chore::TeamMember;

    fn member(id: &str) -> TeamMember {
        TeamMember {
            id: id.to_string(),
            name: format!("Member {id}"),
            color: "#3B82F6".to_string(),
        }
    }

    #[test]
    fn missing_key_loads_empty() {
        let store = MemoryStore::new();
        let members: Vec<TeamMember> = load_collection(&store, TEAM_MEMBERS_KEY);
        assert!(members.is_empty());
    }

    #[test]
    fn corrupt_payload_loads_empty() {
        let mut store = MemoryStore::new();
        store.set(TEAM_MEMBERS_KEY, "{not json").unwrap();
        let members: Vec<TeamMember> = load_collection(&store, TEAM_MEMBERS_KEY);
        assert!(members.is_empty());

        store.set(TEAM_MEMBERS_KEY, r#"{"id":"m1"}"#).unwrap();
        let members: Vec<TeamMember> = load_collection(&store, TEAM_MEMBERS_KEY);
        assert!(members.is_empty());
    }

    #[test]
    fn saved_collection_loads_back() {
        let mut store = MemoryStore::new();
        save_collection(&mut store, TEAM_MEMBERS_KEY, &[member("m1"), member("m2")]).unwrap();

        let members: Vec<TeamMember> = load_collection(&store, TEAM_MEMBERS_KEY);
        assert_eq!(members, vec![member("m1"), member("m2")]);
    }

    #[test]
    fn file_store_creates_directory_and_replaces_files() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("nested/data");
        let mut store = JsonFileStore::new(&dir);

        assert_eq!(store.get(CHORES_KEY), None);

        store.set(CHORES_KEY, "[1]").unwrap();
        store.set(CHORES_KEY, "[2]").unwrap();

        assert_eq!(store.get(CHORES_KEY).as_deref(), Some("[2]"));
        assert!(dir.join("chores.json").exists());
        assert!(!dir.join("chores.json.tmp").exists());
    }

    #[test]
    fn unreadable_file_is_kept_aside_before_overwrite() {
        let temp = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(temp.path());
        let bytes = [b'[', 0xFF, 0xFE, b']'];
        std::fs::write(temp.path().join("chores.json"), bytes).unwrap();

        let chores: Vec<crate::chore::Chore> = load_collection(&store, CHORES_KEY);
        assert!(chores.is_empty());

        store.set(CHORES_KEY, "[]").unwrap();

        assert_eq!(std::fs::read(store.corrupt_path(CHORES_KEY)).unwrap(), bytes);
        assert_eq!(store.get(CHORES_KEY).as_deref(), Some("[]"));
    }
}
