use crate::error::AppResult;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// File-backed string-keyed store for anonymous progress. Values are
/// text-encoded JSON written by the caller; the store itself only deals in
/// strings, like the browser storage it stands in for.
///
/// Loading is lenient: a missing or unparsable file starts an empty map.
/// A corrupt cache is never surfaced; the next write replaces it.
#[derive(Debug)]
pub struct LocalStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl LocalStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = fs::read_to_string(&path)
            .ok()
            .and_then(|data| serde_json::from_str(&data).ok())
            .unwrap_or_default();

        Self {
            path,
            entries: RwLock::new(entries),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    /// Insert and write through to disk. Not atomic across processes; the
    /// last writer wins.
    pub fn set(&self, key: &str, value: impl Into<String>) -> AppResult<()> {
        let mut guard = self.entries.write();
        guard.insert(key.to_string(), value.into());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(&*guard)?;
        fs::write(&self.path, data)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("wanderer-store-{}.json", uuid::Uuid::new_v4()))
    }

    #[test]
    fn t_missing_file_is_empty() {
        let store = LocalStore::open(temp_path());
        assert_eq!(store.get("playerStats"), None);
    }

    #[test]
    fn t_set_then_get() {
        let store = LocalStore::open(temp_path());
        store.set("playerStats", r#"{"level":1}"#).unwrap();
        assert_eq!(store.get("playerStats").as_deref(), Some(r#"{"level":1}"#));
    }

    #[test]
    fn t_survives_reopen() {
        let path = temp_path();
        {
            let store = LocalStore::open(&path);
            store.set("inventory", "[]").unwrap();
        }

        let reopened = LocalStore::open(&path);
        assert_eq!(reopened.get("inventory").as_deref(), Some("[]"));
    }

    #[test]
    fn t_corrupt_file_starts_empty() {
        let path = temp_path();
        fs::write(&path, "{ not json at all").unwrap();

        let store = LocalStore::open(&path);
        assert_eq!(store.get("playerStats"), None);

        // and the next write repairs the file
        store.set("playerStats", "{}").unwrap();
        let reopened = LocalStore::open(&path);
        assert_eq!(reopened.get("playerStats").as_deref(), Some("{}"));
    }
}
