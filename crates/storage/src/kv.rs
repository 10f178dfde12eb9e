use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{StorageError, StorageResult};

/// String key/value store (the local-storage model: string keys, string values).
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: String) -> StorageResult<()>;
    fn remove(&self, key: &str) -> StorageResult<()>;
    /// All keys, sorted.
    fn keys(&self) -> StorageResult<Vec<String>>;
}

impl<S> KeyValueStore for Arc<S>
where
    S: KeyValueStore + ?Sized,
{
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: String) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }

    fn keys(&self) -> StorageResult<Vec<String>> {
        (**self).keys()
    }
}

/// Read and deserialize a JSON value stored under `key`.
pub fn load_json<S, T>(store: &S, key: &str) -> StorageResult<Option<T>>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Serialize `value` as JSON under `key`.
pub fn save_json<S, T>(store: &S, key: &str, value: &T) -> StorageResult<()>
where
    S: KeyValueStore + ?Sized,
    T: Serialize + ?Sized,
{
    store.set(key, serde_json::to_string(value)?)
}

/// In-memory store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<BTreeMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let map = self.inner.read().map_err(|_| StorageError::Poisoned)?;
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> StorageResult<()> {
        let mut map = self.inner.write().map_err(|_| StorageError::Poisoned)?;
        map.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut map = self.inner.write().map_err(|_| StorageError::Poisoned)?;
        map.remove(key);
        Ok(())
    }

    fn keys(&self) -> StorageResult<Vec<String>> {
        let map = self.inner.read().map_err(|_| StorageError::Poisoned)?;
        Ok(map.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditLog;
    use crate::file::JsonFileStore;
    use crate::settings::SettingsStore;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn stores_and_their_wrappers_are_send_and_sync() {
        assert_send_sync::<InMemoryStore>();
        assert_send_sync::<JsonFileStore>();
        assert_send_sync::<Arc<dyn KeyValueStore>>();
        assert_send_sync::<AuditLog<Arc<InMemoryStore>>>();
        assert_send_sync::<SettingsStore<Arc<JsonFileStore>>>();
    }

    #[test]
    fn shared_store_accepts_concurrent_writers() {
        let store = Arc::new(InMemoryStore::new());
        std::thread::scope(|scope| {
            for i in 0..8 {
                let store = store.clone();
                scope.spawn(move || store.set(&format!("k{i}"), i.to_string()).unwrap());
            }
        });
        assert_eq!(store.keys().unwrap().len(), 8);
        assert_eq!(store.get("k5").unwrap().as_deref(), Some("5"));
    }

    #[test]
    fn set_get_remove() {
        let store = InMemoryStore::new();
        assert_eq!(store.get("a").unwrap(), None);

        store.set("a", "1".to_string()).unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));

        store.remove("a").unwrap();
        assert_eq!(store.get("a").unwrap(), None);
    }

    #[test]
    fn keys_are_sorted() {
        let store = InMemoryStore::new();
        store.set("zeta", String::new()).unwrap();
        store.set("alpha", String::new()).unwrap();
        assert_eq!(store.keys().unwrap(), vec!["alpha", "zeta"]);
    }

    #[test]
    fn json_helpers_round_trip_through_arc() {
        let store = Arc::new(InMemoryStore::new());
        save_json(&store, "nums", &vec![1, 2, 3]).unwrap();
        let nums: Option<Vec<i32>> = load_json(&store, "nums").unwrap();
        assert_eq!(nums, Some(vec![1, 2, 3]));
    }

    #[test]
    fn load_json_reports_corrupt_value() {
        let store = InMemoryStore::new();
        store.set("bad", "{not json".to_string()).unwrap();
        let err = load_json::<_, Vec<i32>>(&store, "bad").unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }
}
