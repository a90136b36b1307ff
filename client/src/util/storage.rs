//! Persisted task list and the key-value store behind it.
//!
//! STORED FORMAT
//! =============
//! `"tasks"` holds a JSON array of `{ "text", "completed" }` objects in list
//! order. Entries that do not parse as a task are dropped one by one, so a
//! single damaged entry never discards the rest of the list.
//!
//! The page and the theme code reach storage through [`KeyValueStore`];
//! [`LocalStorage`] is the browser's `localStorage` and holds nothing when
//! rendered on the server.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::net::types::Task;

/// Key holding the JSON-encoded task array.
pub const TASKS_KEY: &str = "tasks";

/// String key-value storage for data that outlives a page load.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Failures (quota, disabled storage) are ignored.
    fn set(&self, key: &str, value: &str);
}

/// The browser's `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

/// In-memory store for exercising persistence without a browser.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryStore(std::sync::Mutex<std::collections::HashMap<String, String>>);

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut map) = self.0.lock() {
            map.insert(key.to_owned(), value.to_owned());
        }
    }
}

/// Decode a stored task array. Missing, `null`, or non-array input is empty;
/// unreadable entries are skipped.
pub(crate) fn decode_tasks(raw: Option<&str>) -> Vec<Task> {
    let Some(entries) = raw
        .and_then(|s| serde_json::from_str::<Option<Vec<serde_json::Value>>>(s).ok())
        .flatten()
    else {
        return Vec::new();
    };
    entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect()
}

/// Tasks saved by a previous session, or an empty list.
pub fn load_tasks(store: &impl KeyValueStore) -> Vec<Task> {
    decode_tasks(store.get(TASKS_KEY).as_deref())
}

/// Persist the full task list.
pub fn save_tasks(store: &impl KeyValueStore, tasks: &[Task]) {
    let Ok(raw) = serde_json::to_string(tasks) else {
        return;
    };
    store.set(TASKS_KEY, &raw);
}
