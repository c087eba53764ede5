//! Local cache for state that must survive reloads and reconnects.
//!
//! Only two values live here: the durable player identity token and the
//! in-progress draft answer. Everything else is re-derived from server
//! events.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use directories::ProjectDirs;

/// Cache key for the durable player identity token.
pub const PLAYER_ID_KEY: &str = "playerId";

/// Cache key for the not-yet-submitted draft answer.
pub const DRAFT_ANSWER_KEY: &str = "tmp-answer";

/// Small persistent key-value store.
///
/// Access is always synchronous; the single-threaded machine model
/// means call sites never overlap.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    fn save(&self, key: &str, value: &str);
    fn load(&self, key: &str) -> Option<String>;
    fn remove(&self, key: &str);
}

type CacheMap = HashMap<String, String>;

/// File-backed store persisting a JSON map of key-value pairs.
///
/// Default location is the platform config directory, e.g.
/// `~/.config/mashdash/client/storage.json` on Linux. Disk failures
/// are logged and the store keeps serving from memory.
#[derive(Clone)]
pub struct FileStore {
    storage_path: PathBuf,
    cache: Arc<RwLock<CacheMap>>,
}

impl FileStore {
    /// Open the store, loading existing data from disk if present.
    pub fn open(path: Option<PathBuf>) -> Self {
        let storage_path = path.unwrap_or_else(default_storage_path);
        let cache = read_map(&storage_path);
        tracing::debug!("Local cache initialized at: {:?}", storage_path);
        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, CacheMap> {
        match self.cache.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, CacheMap> {
        match self.cache.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Write the current map to disk.
    fn persist(&self) {
        let serialized = match serde_json::to_string_pretty(&*self.read()) {
            Ok(data) => data,
            Err(e) => {
                tracing::error!("Local cache not serializable: {}", e);
                return;
            }
        };
        if let Some(parent) = self.storage_path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::error!("Cannot create cache directory: {}", e);
                return;
            }
        }
        if let Err(e) = fs::write(&self.storage_path, serialized) {
            tracing::error!("Cannot write cache file: {}", e);
        }
    }
}

fn default_storage_path() -> PathBuf {
    ProjectDirs::from("com", "mashdash", "client")
        .map(|dirs| dirs.config_dir().join("storage.json"))
        .unwrap_or_else(|| PathBuf::from("mashdash_storage.json"))
}

fn read_map(path: &Path) -> CacheMap {
    if !path.exists() {
        return CacheMap::new();
    }
    let parsed = fs::read_to_string(path)
        .map_err(|e| tracing::warn!("Cannot read cache file: {}", e))
        .and_then(|data| {
            serde_json::from_str(&data)
                .map_err(|e| tracing::warn!("Cache file is not valid JSON: {}", e))
        });
    parsed.unwrap_or_default()
}

impl KeyValueStore for FileStore {
    fn save(&self, key: &str, value: &str) {
        self.write().insert(key.to_string(), value.to_string());
        self.persist();
    }

    fn load(&self, key: &str) -> Option<String> {
        self.read().get(key).cloned()
    }

    fn remove(&self, key: &str) {
        self.write().remove(key);
        self.persist();
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Clone, Default)]
pub struct MemoryStore {
    cache: Arc<RwLock<CacheMap>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn save(&self, key: &str, value: &str) {
        if let Ok(mut guard) = self.cache.write() {
            guard.insert(key.to_string(), value.to_string());
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        self.cache.read().ok().and_then(|g| g.get(key).cloned())
    }

    fn remove(&self, key: &str) {
        if let Ok(mut guard) = self.cache.write() {
            guard.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_round_trips_through_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("storage.json");

        let store = FileStore::open(Some(path.clone()));
        store.save(PLAYER_ID_KEY, "abc-123");
        store.save(DRAFT_ANSWER_KEY, "a fish");

        // A fresh store over the same file sees the persisted values.
        let reopened = FileStore::open(Some(path));
        assert_eq!(reopened.load(PLAYER_ID_KEY).as_deref(), Some("abc-123"));
        assert_eq!(reopened.load(DRAFT_ANSWER_KEY).as_deref(), Some("a fish"));
    }

    #[test]
    fn remove_deletes_the_value() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::open(Some(dir.path().join("storage.json")));

        store.save(PLAYER_ID_KEY, "abc-123");
        store.remove(PLAYER_ID_KEY);
        assert!(store.load(PLAYER_ID_KEY).is_none());
    }

    #[test]
    fn corrupt_cache_file_starts_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json").expect("write");

        let store = FileStore::open(Some(path));
        assert!(store.load(PLAYER_ID_KEY).is_none());
    }

    #[test]
    fn memory_store_is_independent_per_instance() {
        let a = MemoryStore::new();
        let b = MemoryStore::new();
        a.save("k", "v");
        assert_eq!(a.load("k").as_deref(), Some("v"));
        assert!(b.load("k").is_none());
    }
}
