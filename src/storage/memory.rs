use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError, mpsc::Receiver},
};

use super::{ChangeNotifier, KeyValueStore, StorageEvent};

/// In-memory store. Clones share the same data and subscribers.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
    notifier: Arc<ChangeNotifier>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        self.notifier.notify(key);
    }

    fn remove(&self, key: &str) {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        self.notifier.notify(key);
    }

    fn subscribe(&self) -> Receiver<StorageEvent> {
        self.notifier.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k"), None);

        store.set("k", "v");
        assert_eq!(store.get("k").as_deref(), Some("v"));

        store.remove("k");
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn test_clones_share_state_and_events() {
        let store = MemoryStore::new();
        let events = store.subscribe();
        let handle = store.clone();

        handle.set("k", "v");
        assert_eq!(store.get("k").as_deref(), Some("v"));
        assert_eq!(events.try_recv().unwrap().key, "k");
    }
}
